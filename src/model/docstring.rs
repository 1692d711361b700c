//! Docstring text and the coarse textual classifiers graders rely on.
//!
//! The classifiers are deliberately shallow: a docstring "mentions" a
//! return value when a line opens with `Returns`, and "describes" it when
//! that line goes on to say something about the value. Nothing here tries
//! to understand prose.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A line opening with `Return` or `Returns`, in any case and behind any
/// `#` comment markers. Group 1 is the rest of the sentence.
static RETURN_SENTENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^[ \t]*#*[ \t]*returns?(?:[ \t]+(.*?))?[ \t]*\r?$")
        .expect("return sentence pattern is valid")
});

/// Minimum number of words after the return keyword for a line to count as
/// a description rather than a bare mention
const MIN_RETURN_DESCRIPTION_WORDS: usize = 2;

/// Short complete descriptions of "no meaningful value"
const TERSE_RETURN_DESCRIPTIONS: &[&str] = &["nil", "nothing", "self", "true", "false"];

/// Fences that open a code block
const CODE_FENCES: &[&str] = &["```", "~~~"];

/// Leading indentation that marks an indented code block
const CODE_INDENT: &str = "  ";

const NODOC_MARKER: &str = ":nodoc:";

/// Documentation text attached to a declaration or overload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Docstring {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub text: String,

    /// Set by the parser when it synthesized this text instead of reading
    /// it from source
    #[serde(default)]
    pub implicit: bool,
}

impl Docstring {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            implicit: false,
        }
    }

    /// A docstring the parser generated on its own
    pub fn synthesized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            implicit: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether any line opens with a return keyword, e.g. "Returns a String"
    pub fn mentions_return(&self) -> bool {
        self.return_sentences().next().is_some()
    }

    /// Whether a return sentence says something about the value,
    /// e.g. "Returns the number of rows written"
    pub fn describes_return(&self) -> bool {
        self.return_sentences().any(|rest| {
            let words: Vec<&str> = rest.split_whitespace().collect();
            words.len() >= MIN_RETURN_DESCRIPTION_WORDS
                || words.first().is_some_and(|word| {
                    let word = word.trim_end_matches(&['.', ','][..]).to_ascii_lowercase();
                    TERSE_RETURN_DESCRIPTIONS.contains(&word.as_str())
                })
        })
    }

    /// Whether the prose refers to a parameter by name, using any of the
    /// common markups: `+name+`, `` `name` `` or a TomDoc `name - text` line.
    pub fn mentions_parameter(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let name = regex::escape(name);
        let pattern = format!(r"\+{name}\+|`{name}`|(?m:^[ \t]*#*[ \t]*{name}[ \t]+-[ \t])");
        Regex::new(&pattern).is_ok_and(|re| re.is_match(&self.text))
    }

    /// Whether the text contains a fenced or indented code block
    pub fn contains_code_example(&self) -> bool {
        let mut previous_blank = true;
        for raw in self.text.lines() {
            let trimmed = raw.trim();
            if CODE_FENCES.iter().any(|fence| trimmed.starts_with(fence)) {
                return true;
            }
            let indented = raw.starts_with(CODE_INDENT) || raw.starts_with('\t');
            if indented && !trimmed.is_empty() && previous_blank {
                return true;
            }
            previous_blank = trimmed.is_empty();
        }
        false
    }

    /// Whether the author opted this declaration out of documentation
    pub fn is_nodoc(&self) -> bool {
        self.text.contains(NODOC_MARKER)
    }

    /// Remainder of every line that opens with a return keyword
    fn return_sentences(&self) -> impl Iterator<Item = &str> {
        RETURN_SENTENCE
            .captures_iter(&self.text)
            .map(|caps| caps.get(1).map_or("", |rest| rest.as_str().trim()))
    }
}

impl From<&str> for Docstring {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_docstring_has_no_evidence() {
        let doc = Docstring::default();
        assert!(doc.is_empty());
        assert!(!doc.mentions_return());
        assert!(!doc.describes_return());
        assert!(!doc.contains_code_example());
    }

    #[test]
    fn test_mentions_return_requires_leading_keyword() {
        assert!(Docstring::new("Returns a String").mentions_return());
        assert!(Docstring::new("Computes things.\n\nreturns it").mentions_return());
        assert!(!Docstring::new("This never returns early").mentions_return());
        assert!(!Docstring::new("Returnsville is a town").mentions_return());
        assert!(Docstring::new("# RETURNS the id\r\n").mentions_return());
        assert!(Docstring::new("Computes.\n   ## Return  ").mentions_return());
    }

    #[test]
    fn test_describes_return_needs_content() {
        assert!(!Docstring::new("Returns").describes_return());
        assert!(!Docstring::new("Returns it").describes_return());
        assert!(Docstring::new("Returns nil.").describes_return());
        assert!(Docstring::new("Returns the row count").describes_return());
    }

    #[test]
    fn test_mentions_parameter_markups() {
        assert!(Docstring::new("Uses +limit+ rows").mentions_parameter("limit"));
        assert!(Docstring::new("Uses `limit` rows").mentions_parameter("limit"));
        assert!(Docstring::new("limit - the row cap").mentions_parameter("limit"));
        assert!(!Docstring::new("unlimited rows").mentions_parameter("limit"));
        assert!(!Docstring::new("limited - nope").mentions_parameter("limit"));
        assert!(!Docstring::new("anything").mentions_parameter(""));
        assert!(Docstring::new("# opts.x - nested key").mentions_parameter("opts.x"));
        assert!(!Docstring::new("optsax - regex metachars escaped").mentions_parameter("opts.x"));
    }

    #[test]
    fn test_contains_code_example_fenced() {
        let doc = Docstring::new(indoc! {"
            Parses input.

            ```
            parse(\"x\")
            ```
        "});
        assert!(doc.contains_code_example());
    }

    #[test]
    fn test_contains_code_example_indented() {
        let doc = Docstring::new(indoc! {"
            Parses input.

              parse(\"x\")
        "});
        assert!(doc.contains_code_example());

        let wrapped = Docstring::new("Parses input\n  continued on the next line");
        assert!(!wrapped.contains_code_example());
    }

    #[test]
    fn test_nodoc_marker() {
        assert!(Docstring::new(":nodoc:").is_nodoc());
        assert!(!Docstring::new("documented").is_nodoc());
    }
}
