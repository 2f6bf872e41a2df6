use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

use crate::errors::ChangelogResult;
use crate::options::{ChangelogOptions, MergeCommitFiltering};

#[derive(Parser, Debug)]
#[command(
    name = "git-changelog",
    about = "Collect commit messages since the last tag as a changelog"
)]
pub struct Cli {
    /// Path to the git repository (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Pretty format passed to `git log --pretty` (defaults to '%B')
    #[arg(long)]
    pub pretty: Option<String>,

    /// Only match annotated tags when looking up the last tag
    #[arg(long)]
    pub no_match_lightweight_tag: bool,

    /// Collect commits in FROM...TO instead of since the last tag
    #[arg(long, num_args = 1..=2, value_names = ["FROM", "TO"])]
    pub between: Option<Vec<String>>,

    /// Leave merge commits out of the changelog
    #[arg(long)]
    pub no_merges: bool,

    /// Merge commit handling, overrides --no-merges
    #[arg(long, value_enum)]
    pub merge_commit_filtering: Option<MergeCommitFiltering>,

    /// Collect the last N commits instead of a range
    #[arg(long)]
    pub commits_count: Option<u32>,

    /// Options as a JSON object (e.g. '{"between": ["v1.0", "HEAD"]}')
    #[arg(long, conflicts_with = "options_file")]
    pub options: Option<String>,

    /// Read options from a JSON file
    #[arg(long)]
    pub options_file: Option<PathBuf>,

    /// Print the git log command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the command and changelog as JSON
    #[arg(long)]
    pub json: bool,

    /// Log the commands being run
    #[arg(long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Only log errors
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Merge flags on top of the options object. Flags win.
    pub fn to_options(&self) -> ChangelogResult<ChangelogOptions> {
        let mut options = match (&self.options, &self.options_file) {
            (Some(json), _) => ChangelogOptions::from_json(json)?,
            (None, Some(path)) => ChangelogOptions::from_file(path)?,
            (None, None) => ChangelogOptions::default(),
        };

        if let Some(path) = &self.path {
            options.path = path.clone();
        }
        if let Some(pretty) = &self.pretty {
            options.pretty = pretty.clone();
        }
        if self.no_match_lightweight_tag {
            options.match_lightweight_tag = false;
        }
        if let Some(between) = &self.between {
            options.between = Some(Value::Array(
                between.iter().cloned().map(Value::String).collect(),
            ));
        }
        if self.no_merges {
            options.include_merges = false;
        }
        if self.merge_commit_filtering.is_some() {
            options.merge_commit_filtering = self.merge_commit_filtering;
        }
        if self.commits_count.is_some() {
            options.commits_count = self.commits_count;
        }

        Ok(options)
    }
}
