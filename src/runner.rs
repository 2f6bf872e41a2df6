use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{ChangelogError, ChangelogResult};

/// Executes a shell command line and returns its standard output.
pub trait CommandRunner {
    fn run(&self, command: &str) -> ChangelogResult<String>;
}

/// Runs commands through `sh -c` inside a repository directory.
pub struct ShellRunner {
    dir: PathBuf,
}

impl ShellRunner {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> ChangelogResult<String> {
        debug!(command, dir = %self.dir.display(), "running");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ChangelogError::Command(
                command.to_string(),
                output.status.code(),
                stderr,
            ));
        }

        Ok(String::from_utf8(output.stdout)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

/// Echoes the command back instead of running it.
pub struct DryRun;

impl CommandRunner for DryRun {
    fn run(&self, command: &str) -> ChangelogResult<String> {
        Ok(command.to_string())
    }
}
