/// Escape a token so a POSIX shell reads it back as a single word.
///
/// Every character outside `[A-Za-z0-9_\-.,:+/@]` gets a leading backslash.
/// Newlines are single-quoted.
pub fn escape(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }

    let mut escaped = String::with_capacity(token.len() * 2);
    for c in token.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '-' | '.' | ',' | ':' | '+' | '/' | '@' => {
                escaped.push(c)
            }
            '\n' => escaped.push_str("'\n'"),
            _ => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abcd" => "abcd"; "plain")]
    #[test_case("v1.8.0(30)" => r"v1.8.0\(30\)"; "parentheses")]
    #[test_case("release candidate" => r"release\ candidate"; "space")]
    #[test_case("--max-count=1" => r"--max-count\=1"; "equals")]
    #[test_case("`git rev-list`" => r"\`git\ rev-list\`"; "backticks")]
    #[test_case("feature/login@v2,b:c+d" => "feature/login@v2,b:c+d"; "safe punctuation")]
    #[test_case("HEAD~1" => r"HEAD\~1"; "tilde")]
    #[test_case("it's" => r"it\'s"; "single quote")]
    #[test_case("" => "''"; "empty")]
    fn should_escape(token: &str) -> String {
        escape(token)
    }

    #[test]
    fn newline_is_quoted() {
        assert_eq!(escape("a\nb"), "a'\n'b");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(escape("tag-é"), "tag-\\é");
    }
}
