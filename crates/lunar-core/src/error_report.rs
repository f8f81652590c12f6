//! Structured view of an execution's error message.
//!
//! The runner embeds the offending source inside the message between
//! `[CODE]` and `[/CODE]` markers, optionally followed by a hint:
//!
//! ```text
//! runtime error: attempt to index a nil value
//! [CODE]
//!   12 | local x = event.body.name
//! [/CODE]
//! Tip: check that the request has a JSON body
//! ```

const CODE_OPEN: &str = "[CODE]";
const CODE_CLOSE: &str = "[/CODE]";

/// Execution error split into its display sections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorReport {
    pub description: Option<String>,
    pub code: Option<String>,
    pub tip: Option<String>,
}

impl ErrorReport {
    /// Split an error message on the code markers.
    ///
    /// Sections are positional: text before the first marker is the
    /// description, text between markers is the snippet, the rest is the tip.
    pub fn parse(message: &str) -> Self {
        let mut parts = split_markers(message).into_iter();

        let description = parts.next().and_then(|s| non_empty(s.trim()));
        let code = parts
            .next()
            .and_then(|s| non_empty(s.trim_start_matches('\n').trim_end_matches('\n')));
        let tip = parts.next().and_then(|s| non_empty(s.trim()));

        Self {
            description,
            code,
            tip,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.code.is_none() && self.tip.is_none()
    }
}

fn split_markers(message: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = message;
    loop {
        let open = rest.find(CODE_OPEN).map(|i| (i, CODE_OPEN.len()));
        let close = rest.find(CODE_CLOSE).map(|i| (i, CODE_CLOSE.len()));
        let next = match (open, close) {
            (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
            (a, b) => a.or(b),
        };
        match next {
            Some((idx, len)) => {
                parts.push(&rest[..idx]);
                rest = &rest[idx + len..];
            }
            None => {
                parts.push(rest);
                return parts;
            }
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_is_description_only() {
        let report = ErrorReport::parse("  timeout after 5s \n");
        assert_eq!(report.description.as_deref(), Some("timeout after 5s"));
        assert!(report.code.is_none());
        assert!(report.tip.is_none());
    }

    #[test]
    fn test_full_report() {
        let msg = "bad index\n[CODE]\n\n  3 | x.y\n  4 | end\n\n[/CODE]\nTip: check x";
        let report = ErrorReport::parse(msg);
        assert_eq!(report.description.as_deref(), Some("bad index"));
        assert_eq!(report.code.as_deref(), Some("  3 | x.y\n  4 | end"));
        assert_eq!(report.tip.as_deref(), Some("Tip: check x"));
    }

    #[test]
    fn test_snippet_without_description() {
        let report = ErrorReport::parse("[CODE]print()[/CODE]");
        assert!(report.description.is_none());
        assert_eq!(report.code.as_deref(), Some("print()"));
        assert!(report.tip.is_none());
    }

    #[test]
    fn test_empty_message() {
        assert!(ErrorReport::parse("").is_empty());
    }
}
