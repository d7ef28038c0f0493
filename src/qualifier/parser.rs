//! Command line grammar.
//!
//! ```text
//! quote<SP>[piglatin|uwu|list][<SP>?<clause>]
//! clause := ("|“|'') <text> (same opener|”)
//! ```
//!
//! Keywords are ASCII case-insensitive. The closing `”` is accepted for any opener.
//! Lines that do not match are run through [`diagnose`] to name the most
//! likely mistake in the error.

use crate::error::{QualifierError, Result};
use crate::model::VariantMode;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const KEYWORD: &str = "quote";
const VARIANTS: [&str; 3] = ["piglatin", "uwu", "list"];
const OPENERS: [&str; 3] = ["\"", "“", "''"];
const CURLY_CLOSER: &str = "”";

static COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[Qq][Uu][Oo][Tt][Ee] ",
        r"(?P<variant>[Pp][Ii][Gg][Ll][Aa][Tt][Ii][Nn]|[Uu][Ww][Uu]|[Ll][Ii][Ss][Tt])?",
        r#"(?: ?(?:"(?P<dq>.*)(?:"|”)|“(?P<cq>.*)(?:“|”)|''(?P<sq>.*)(?:''|”)))?$"#,
    ))
    .expect("Invalid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `quote [uwu|piglatin] "<text>"`
    Create {
        mode: VariantMode,
        quote: Option<String>,
    },
    /// `quote list`; a quote given alongside is kept so the caller can warn.
    List { quote: Option<String> },
}

pub fn parse_command(line: &str) -> Result<ParsedCommand> {
    let line = line.trim();
    let caps = COMMAND_PATTERN
        .captures(line)
        .ok_or_else(|| QualifierError::InvalidCommand(diagnose(line)))?;

    let quote = ["dq", "cq", "sq"]
        .iter()
        .find_map(|name| caps.name(name))
        .map(|m| m.as_str().to_string());
    let variant = caps
        .name("variant")
        .map(|m| m.as_str().to_ascii_uppercase());

    debug!(?variant, ?quote, "parsed command line");

    let parsed = match variant.as_deref() {
        Some("UWU") => ParsedCommand::Create {
            mode: VariantMode::Uwu,
            quote,
        },
        Some("PIGLATIN") => ParsedCommand::Create {
            mode: VariantMode::Piglatin,
            quote,
        },
        Some("LIST") => ParsedCommand::List { quote },
        None => ParsedCommand::Create {
            mode: VariantMode::Normal,
            quote,
        },
        Some(other) => {
            return Err(QualifierError::InvalidCommand(format!(
                "unknown variant `{}` (expected uwu, piglatin or list)",
                other.to_ascii_lowercase()
            )));
        }
    };
    Ok(parsed)
}

/// Best guess at why `line` was rejected.
fn diagnose(line: &str) -> String {
    let rest = match line.get(..KEYWORD.len()) {
        Some(head) if head.eq_ignore_ascii_case(KEYWORD) => &line[KEYWORD.len()..],
        _ => return "commands must start with `quote`".to_string(),
    };
    let Some(rest) = rest.strip_prefix(' ') else {
        return "expected a space after `quote`".to_string();
    };
    let rest = rest.trim_start();

    let variant = VARIANTS.iter().find(|v| {
        rest.get(..v.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(v))
            && !rest[v.len()..].starts_with(|c: char| c.is_alphanumeric())
    });
    let clause = match variant {
        Some(v) => rest[v.len()..].trim_start(),
        None => rest,
    };

    let Some(opener) = OPENERS.iter().find(|o| clause.starts_with(**o)) else {
        return match variant {
            Some(_) => format!("expected a quoted text, found `{}`", clause),
            None => format!(
                "unknown variant `{}` (expected uwu, piglatin or list)",
                clause.split_whitespace().next().unwrap_or(clause)
            ),
        };
    };

    let body = &clause[opener.len()..];
    if body.ends_with(opener) || body.ends_with(CURLY_CLOSER) {
        // The clause itself is fine, so the whitespace around it is not.
        return "unexpected spacing before the quote".to_string();
    }
    if body.contains(opener) || body.contains(CURLY_CLOSER) {
        return "unexpected text after the closing quote".to_string();
    }
    "unterminated quote".to_string()
}
