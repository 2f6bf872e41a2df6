use tracing::{debug, info};

use crate::errors::{ChangelogError, ChangelogResult, InvalidArgument};
use crate::escape::escape;
use crate::options::{ChangelogOptions, MergeCommitFiltering, Range};
use crate::runner::{CommandRunner, DryRun};
use crate::types::Changelog;

const LAST_TAG_LIGHTWEIGHT: &str = "git describe --tags `git rev-list --tags --max-count=1`";
const LAST_TAG_ANNOTATED: &str = "git describe `git rev-list --tags --max-count=1`";

/// What `git log` should walk over.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Between(Range),
    LastCommits(u32),
    SinceLastTag,
}

fn select(options: &ChangelogOptions) -> ChangelogResult<Selection> {
    let range = options
        .between
        .as_ref()
        .map(Range::from_value)
        .transpose()?;

    match (range, options.commits_count) {
        (Some(_), Some(_)) => Err(ChangelogError::ConflictingOptions(
            "commits_count",
            "between",
        )),
        (Some(range), None) => Ok(Selection::Between(range)),
        (None, Some(0)) => Err(InvalidArgument::ZeroCommitsCount.into()),
        (None, Some(count)) => Ok(Selection::LastCommits(count)),
        (None, None) => Ok(Selection::SinceLastTag),
    }
}

/// The command that prints the most recent tag reachable from any tag ref.
pub fn last_tag_command(match_lightweight_tag: bool) -> &'static str {
    if match_lightweight_tag {
        LAST_TAG_LIGHTWEIGHT
    } else {
        LAST_TAG_ANNOTATED
    }
}

/// Join the pieces of a `git log` invocation. `range` is inserted as is.
pub fn assemble(pretty: &str, range: &str, merges: MergeCommitFiltering) -> String {
    let mut command = format!("git log --pretty=\"{}\" {}", pretty, range);
    if let Some(flag) = merges.flag() {
        command.push(' ');
        command.push_str(flag);
    }
    command
}

/// Build the `git log` command line, resolving the last tag through `runner`.
pub fn build_with(options: &ChangelogOptions, runner: &dyn CommandRunner) -> ChangelogResult<String> {
    let range = match select(options)? {
        Selection::Between(Range { from, to }) => format!("{}...{}", escape(&from), escape(&to)),
        Selection::LastCommits(count) => format!("-n {}", count),
        Selection::SinceLastTag => {
            let tag = runner.run(last_tag_command(options.match_lightweight_tag))?;
            let tag = tag.strip_suffix('\n').unwrap_or(&tag);
            debug!(tag, "resolved last tag");
            format!("{}...HEAD", escape(tag))
        }
    };

    Ok(assemble(&options.pretty, &range, options.merge_filtering()))
}

/// Build the command without running anything. The last tag placeholder is
/// the tag discovery command itself.
#[allow(dead_code)]
pub fn build(options: &ChangelogOptions) -> ChangelogResult<String> {
    build_with(options, &DryRun)
}

/// Build the command and run it, returning the collected commit messages.
pub fn collect(options: &ChangelogOptions, runner: &dyn CommandRunner) -> ChangelogResult<Changelog> {
    let command = build_with(options, runner)?;
    info!("Collecting Git commits");
    let output = runner.run(&command)?;
    let changelog = output.strip_suffix('\n').unwrap_or(&output).to_string();
    Ok(Changelog { command, changelog })
}
