use serde::Serialize;

/// The command that was run and what it printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changelog {
    pub command: String,
    pub changelog: String,
}
