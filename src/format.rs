use crate::errors::ChangelogResult;
use crate::types::Changelog;

pub fn format_json(changelog: &Changelog) -> ChangelogResult<String> {
    Ok(serde_json::to_string(changelog)?)
}

pub fn format_plain(changelog: &Changelog) -> String {
    changelog.changelog.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_changelog() -> Changelog {
        Changelog {
            command: r#"git log --pretty="%B" abcd...1234"#.to_string(),
            changelog: "Fix crash\n\nAdd login".to_string(),
        }
    }

    #[test]
    fn json_output() {
        let json = format_json(&sample_changelog()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["command"], r#"git log --pretty="%B" abcd...1234"#);
        assert_eq!(parsed["changelog"], "Fix crash\n\nAdd login");
    }

    #[test]
    fn plain_output_is_changelog_only() {
        assert_eq!(format_plain(&sample_changelog()), "Fix crash\n\nAdd login");
    }
}
