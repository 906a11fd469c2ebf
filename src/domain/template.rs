//! Positional format templates for catalog messages.
//!
//! Supports `{0}`, `{1}`, ... substitution only. No quoting, no nested
//! sub-formats: catalog messages are plain text with numbered slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message template with positional parameters.
///
/// A placeholder whose index has no corresponding argument is left verbatim in
/// the output, so a short argument list never panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw template text, placeholders included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute positional placeholders with `args`.
    pub fn render(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            match parse_placeholder(tail) {
                Some((index, consumed)) => {
                    match args.get(index) {
                        Some(arg) => out.push_str(arg),
                        // Index beyond the argument list: keep the placeholder.
                        None => out.push_str(&tail[..consumed]),
                    }
                    rest = &tail[consumed..];
                }
                None => {
                    // Not a `{N}` placeholder; a literal brace passes through.
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse `{N}` at the start of `s`. Returns (index, bytes consumed).
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let close = s.find('}')?;
    let digits = &s[1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_positional_argument() {
        let t = MessageTemplate::new("Hello, {0}!");
        assert_eq!(t.render(&["Demo"]), "Hello, Demo!");
    }

    #[test]
    fn renders_empty_argument_without_validation() {
        let t = MessageTemplate::new("Hello, {0}!");
        assert_eq!(t.render(&[""]), "Hello, !");
    }

    #[test]
    fn renders_repeated_and_out_of_order_slots() {
        let t = MessageTemplate::new("{1} and {0} and {1}");
        assert_eq!(t.render(&["a", "b"]), "b and a and b");
    }

    #[test]
    fn keeps_placeholder_when_argument_is_missing() {
        let t = MessageTemplate::new("Hello, {0} from {1}!");
        assert_eq!(t.render(&["Demo"]), "Hello, Demo from {1}!");
    }

    #[test]
    fn passes_literal_braces_through() {
        let t = MessageTemplate::new("{not-a-slot} {0} {}");
        assert_eq!(t.render(&["x"]), "{not-a-slot} x {}");
    }

    #[test]
    fn template_without_slots_ignores_arguments() {
        let t = MessageTemplate::new("plain text");
        assert_eq!(t.render(&["unused"]), "plain text");
    }
}
