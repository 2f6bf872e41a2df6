use std::path::PathBuf;

use thiserror::Error;

/// Option values rejected before any command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("between must be of type array")]
    BetweenNotArray,

    #[error("between must be an array of size 2")]
    BetweenWrongSize,

    #[error("between must not contain nil values")]
    BetweenContainsNull,

    #[error("between must contain only string values")]
    BetweenNotString,

    #[error("commits_count must be greater than 0")]
    ZeroCommitsCount,
}

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("`{0}` failed with {status}: {2}", status = exit_status(.1))]
    Command(String, Option<i32>, String),

    #[error("unresolved conflict between options: '{0}' and '{1}'")]
    ConflictingOptions(&'static str, &'static str),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// Error that may occur while spawning git or reading an options file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("specified path must exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

pub type ChangelogResult<T> = Result<T, ChangelogError>;

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_shows_bare_exit_code() {
        let e = ChangelogError::Command("git describe".to_string(), Some(128), "fatal".to_string());
        assert_eq!(e.to_string(), "`git describe` failed with exit code 128: fatal");
    }

    #[test]
    fn command_error_killed_by_signal() {
        let e = ChangelogError::Command("git log".to_string(), None, String::new());
        assert_eq!(e.to_string(), "`git log` failed with signal: ");
    }
}
