//! Directive text-block parser for notifier configuration.
//!
//! The notifier can be configured with a small directive block instead of a
//! structured settings file:
//!
//! ```text
//! notifier {
//!     url https://hooks.example.com/provision
//!     username deploy-bot
//!     password "{env.BEACON_PASSWORD}"
//! }
//! ```
//!
//! The block name is consumed but not interpreted. Each directive takes
//! exactly one argument token on the same line; values containing spaces
//! must be double-quoted. Placeholder tokens are kept verbatim, resolution
//! happens later at provisioning time.

use crate::config::error::ConfigError;
use crate::config::settings::NotifierSettings;

/// A single token with the line it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    line: usize,
}

/// Split `input` into whitespace-separated tokens, honoring double quotes.
///
/// A quoted token may contain whitespace; the quotes themselves are
/// stripped. Quotes are not processed for escapes.
fn tokenize(input: &str) -> Result<Vec<Token>, ConfigError> {
    let mut tokens = Vec::new();
    let mut line = 1usize;
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '"' => {
                chars.next();
                let start_line = line;
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\n') => {
                            line += 1;
                            text.push('\n');
                        }
                        Some(ch) => text.push(ch),
                        None => {
                            return Err(ConfigError::parse(format!(
                                "unterminated quoted value starting on line {}",
                                start_line
                            )));
                        }
                    }
                }
                tokens.push(Token {
                    text,
                    line: start_line,
                });
            }
            _ => {
                // bare token: runs to the next whitespace or quote; braces
                // are only structural when they stand alone, so a
                // placeholder like {env.USER} stays a single token
                let mut text = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || ch == '"' {
                        break;
                    }
                    text.push(ch);
                    chars.next();
                }
                tokens.push(Token { text, line });
            }
        }
    }

    Ok(tokens)
}

/// Parse a directive block into [`NotifierSettings`].
///
/// Recognized directives are exactly `url`, `username`, and `password`,
/// each with one same-line argument. Anything else is fatal. Directives
/// may repeat; the last occurrence wins. Absent directives leave the
/// corresponding field empty (presence is not enforced here).
///
/// # Errors
/// * [`ConfigError::MissingArgument`] when a directive has no argument on
///   its own line
/// * [`ConfigError::UnrecognizedDirective`] for unknown directive names
/// * [`ConfigError::Parse`] for structural problems (missing or unclosed
///   braces, trailing tokens after the block)
pub fn parse_block(input: &str) -> Result<NotifierSettings, ConfigError> {
    let tokens = tokenize(input)?;
    let mut iter = tokens.into_iter().peekable();

    let name = iter
        .next()
        .ok_or_else(|| ConfigError::parse("empty configuration block"))?;
    if name.text == "{" || name.text == "}" {
        return Err(ConfigError::parse(format!(
            "expected block name, found '{}' (line {})",
            name.text, name.line
        )));
    }

    match iter.next() {
        Some(token) if token.text == "{" => {}
        Some(token) => {
            return Err(ConfigError::parse(format!(
                "expected '{{' after block name, found '{}' (line {})",
                token.text, token.line
            )));
        }
        None => {
            return Err(ConfigError::parse(format!(
                "expected '{{' after block name '{}'",
                name.text
            )));
        }
    }

    let mut settings = NotifierSettings::default();
    let mut closed = false;

    while let Some(token) = iter.next() {
        if token.text == "}" {
            closed = true;
            break;
        }

        let directive = token;
        let field = match directive.text.as_str() {
            "url" => &mut settings.url,
            "username" => &mut settings.username,
            "password" => &mut settings.password,
            _ => {
                return Err(ConfigError::UnrecognizedDirective {
                    directive: directive.text.clone(),
                    line: directive.line,
                });
            }
        };

        // the argument must sit on the directive's own line
        match iter.next() {
            Some(next)
                if next.line == directive.line && next.text != "}" && next.text != "{" =>
            {
                *field = next.text;
            }
            _ => {
                return Err(ConfigError::MissingArgument {
                    directive: directive.text,
                    line: directive.line,
                });
            }
        }
    }

    if !closed {
        return Err(ConfigError::parse(format!(
            "unclosed block '{}'",
            name.text
        )));
    }

    if let Some(extra) = iter.next() {
        return Err(ConfigError::parse(format!(
            "unexpected token '{}' after block (line {})",
            extra.text, extra.line
        )));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BLOCK: &str = r#"
notifier {
    url https://hooks.example.com/provision
    username deploy-bot
    password hunter2
}
"#;

    #[test]
    fn test_parse_full_block() {
        let settings = parse_block(FULL_BLOCK).unwrap();
        assert_eq!(settings.url, "https://hooks.example.com/provision");
        assert_eq!(settings.username, "deploy-bot");
        assert_eq!(settings.password, "hunter2");
    }

    #[test]
    fn test_parse_quoted_value_with_spaces() {
        let input = r#"notifier { password "p4ss word" }"#;
        let settings = parse_block(input).unwrap();
        assert_eq!(settings.password, "p4ss word");
    }

    #[test]
    fn test_parse_placeholder_kept_verbatim() {
        let input = "notifier { username {env.DEPLOY_USER} }";
        let settings = parse_block(input).unwrap();
        assert_eq!(settings.username, "{env.DEPLOY_USER}");
    }

    #[test]
    fn test_missing_argument_is_fatal() {
        let input = "notifier {\n    url\n    username bob\n}";
        let err = parse_block(input).unwrap_err();
        match err {
            ConfigError::MissingArgument { directive, line } => {
                assert_eq!(directive, "url");
                assert_eq!(line, 2);
            }
            other => panic!("expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_argument_on_next_line_is_missing() {
        let input = "notifier {\n    url\n    https://example.com\n}";
        let err = parse_block(input).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument { .. }));
    }

    #[test]
    fn test_unrecognized_directive_named_in_error() {
        let input = "notifier {\n    secret foo\n}";
        let err = parse_block(input).unwrap_err();
        match err {
            ConfigError::UnrecognizedDirective { directive, line } => {
                assert_eq!(directive, "secret");
                assert_eq!(line, 2);
            }
            other => panic!("expected UnrecognizedDirective, got {:?}", other),
        }
        let message = parse_block(input).unwrap_err().to_string();
        assert!(message.contains("secret"));
    }

    #[test]
    fn test_duplicate_directive_last_wins() {
        let input = "notifier {\n    url https://first\n    url https://second\n}";
        let settings = parse_block(input).unwrap();
        assert_eq!(settings.url, "https://second");
    }

    #[test]
    fn test_absent_directives_stay_empty() {
        let settings = parse_block("notifier { url https://only-url }").unwrap();
        assert_eq!(settings.username, "");
        assert_eq!(settings.password, "");
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_block("notifier {\n    url https://x\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse_block("notifier { url https://x } leftover").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_block("   \n ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_open_brace() {
        let err = parse_block("notifier url https://x").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_block("notifier { password \"oops }").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_block_name_not_interpreted() {
        let settings = parse_block("anything-goes { url https://x }").unwrap();
        assert_eq!(settings.url, "https://x");
    }
}
