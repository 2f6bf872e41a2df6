use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ChangelogResult, InvalidArgument};

pub const DEFAULT_PRETTY: &str = "%B";

/// Which commits `git log` keeps with respect to merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MergeCommitFiltering {
    IncludeMerges,
    ExcludeMerges,
    OnlyIncludeMerges,
}

impl MergeCommitFiltering {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            MergeCommitFiltering::IncludeMerges => None,
            MergeCommitFiltering::ExcludeMerges => Some("--no-merges"),
            MergeCommitFiltering::OnlyIncludeMerges => Some("--merges"),
        }
    }
}

/// Options accepted by the changelog action.
///
/// `between` is kept as raw JSON until [`Range::from_value`] checks it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangelogOptions {
    pub pretty: String,
    pub match_lightweight_tag: bool,
    pub between: Option<Value>,
    pub include_merges: bool,
    pub merge_commit_filtering: Option<MergeCommitFiltering>,
    pub commits_count: Option<u32>,
    pub path: PathBuf,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_PRETTY.to_string(),
            match_lightweight_tag: true,
            between: None,
            include_merges: true,
            merge_commit_filtering: None,
            commits_count: None,
            path: PathBuf::from("."),
        }
    }
}

impl ChangelogOptions {
    pub fn from_json(json: &str) -> ChangelogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> ChangelogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// An explicit `merge_commit_filtering` wins over `include_merges`.
    pub fn merge_filtering(&self) -> MergeCommitFiltering {
        match self.merge_commit_filtering {
            Some(filtering) => filtering,
            None if self.include_merges => MergeCommitFiltering::IncludeMerges,
            None => MergeCommitFiltering::ExcludeMerges,
        }
    }
}

/// A validated `from...to` commit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub from: String,
    pub to: String,
}

impl Range {
    pub fn from_value(value: &Value) -> Result<Range, InvalidArgument> {
        let items = value.as_array().ok_or(InvalidArgument::BetweenNotArray)?;
        if items.len() != 2 {
            return Err(InvalidArgument::BetweenWrongSize);
        }
        if items.iter().any(Value::is_null) {
            return Err(InvalidArgument::BetweenContainsNull);
        }
        match (items[0].as_str(), items[1].as_str()) {
            (Some(from), Some(to)) => Ok(Range {
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err(InvalidArgument::BetweenNotString),
        }
    }
}
