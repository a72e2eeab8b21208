//! A small regular-expression engine with greedy, non-backtracking
//! repetition semantics.
//!
//! A pattern string is tokenized, then parsed into an immutable tree of
//! matcher nodes; evaluation walks the tree against an input string and
//! reports success, the consumed prefix, and ordered capture groups.
//! Quantifiers consume as much as they can and never retry at a lower
//! count, so evaluation cost stays linear in the consumed input.
//!
//! A compiled [`Regex`] holds no mutable state and can be shared freely
//! across threads.

mod ast;
mod error;
mod lexer;
mod matcher;
mod parser;

pub use error::ParseError;

use ast::Node;

/// The outcome of one match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegResult {
    /// Did the pattern match?
    pub success: bool,
    /// The exact prefix of the input the match consumed. Empty when
    /// `success` is false, and meaningful only on success.
    pub coverage: String,
    /// Capture groups in order of appearance.
    pub captures: Vec<String>,
}

/// A compiled pattern: the original pattern text plus the matcher tree
/// built from it. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    tree: Node,
}

impl Regex {
    /// Compiles a pattern. Fails only on structurally malformed input:
    /// unbalanced delimiters, a non-numeric repetition bound, a dangling
    /// escape, or an empty bracket expression.
    pub fn new(pattern: &str) -> Result<Regex, ParseError> {
        let tokens = lexer::tokenize(pattern)?;
        let tree = parser::parse(&tokens)?;
        Ok(Regex {
            pattern: pattern.to_string(),
            tree,
        })
    }

    /// The pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Evaluates the pattern once against `text` from position 0; this is
    /// not a scan. The returned capture list always carries the entire
    /// subject string at index 0, ahead of any group captures.
    pub fn exec(&self, text: &str) -> RegResult {
        let mut captures = vec![text.to_string()];
        match self.tree.eval(text) {
            Some(hit) => {
                captures.extend(hit.captures);
                RegResult {
                    success: true,
                    coverage: text[..hit.len].to_string(),
                    captures,
                }
            }
            None => RegResult {
                success: false,
                coverage: String::new(),
                captures,
            },
        }
    }

    /// Whether `text` matches at position 0.
    pub fn is_match(&self, text: &str) -> bool {
        self.tree.eval(text).is_some()
    }

    /// Scans `text` left to right, evaluating at each offset, and returns
    /// the leftmost non-overlapping matches with their starting byte
    /// offsets. The scan advances by the consumed coverage after a match
    /// and by one character otherwise; a zero-length match also advances
    /// one character so the scan cannot stall on one offset.
    pub fn exec_all(&self, text: &str) -> Vec<(usize, RegResult)> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < text.len() {
            match self.tree.eval(&text[i..]) {
                Some(hit) => {
                    let result = RegResult {
                        success: true,
                        coverage: text[i..i + hit.len].to_string(),
                        captures: hit.captures,
                    };
                    matches.push((i, result));
                    i += if hit.len > 0 {
                        hit.len
                    } else {
                        char_width(&text[i..])
                    };
                }
                None => i += char_width(&text[i..]),
            }
        }
        matches
    }
}

fn char_width(s: &str) -> usize {
    s.chars().next().map_or(1, |c| c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn is_match_agrees_with_exec_success() {
        let cases = [
            ("a+", "aa"),
            ("a+", ""),
            ("[Gg]ab(e|riel)", "gabriel"),
            ("[Gg]ab(e|riel)", "sabe"),
            ("a{2,5}", "a"),
            ("c*", "ccc"),
        ];
        for (pattern, text) in cases {
            let regex = compiled(pattern);
            assert_eq!(regex.is_match(text), regex.exec(text).success);
        }
    }

    #[test]
    fn exec_prefixes_the_whole_subject_as_capture_zero() {
        let regex = compiled("(a)b");
        let result = regex.exec("ab");
        assert!(result.success);
        assert_eq!(result.coverage, "ab");
        assert_eq!(result.captures, vec!["ab".to_string(), "a".to_string()]);
    }

    #[test]
    fn failed_exec_still_carries_the_subject_capture() {
        let result = compiled("(a)b").exec("zz");
        assert!(!result.success);
        assert_eq!(result.coverage, "");
        assert_eq!(result.captures, vec!["zz".to_string()]);
    }

    #[test]
    fn sibling_and_nested_capture_ordering() {
        let result = compiled("(a)(b)").exec("ab");
        assert_eq!(&result.captures[1..], ["a".to_string(), "b".to_string()]);

        let result = compiled("((a)b)").exec("ab");
        assert_eq!(&result.captures[1..], ["ab".to_string(), "a".to_string()]);
    }

    #[test]
    fn empty_pattern_matches_the_empty_string() {
        let regex = compiled("");
        assert!(regex.exec("").success);
        assert!(regex.is_match("anything"));
        assert_eq!(regex.exec("anything").coverage, "");
    }

    #[test]
    fn star_patterns_always_match() {
        let regex = compiled("c*");
        assert!(regex.is_match(""));
        assert!(regex.is_match("c"));
        assert!(regex.is_match("ccc"));
    }

    #[test]
    fn braced_repetition_end_to_end() {
        assert!(compiled("a{2}").is_match("aa"));
        assert!(compiled("\\\\{3}").is_match("\\\\\\"));

        let regex = compiled("a{2,5}");
        assert!(regex.is_match("aa"));
        assert!(regex.is_match("aaaaa"));
        assert!(!regex.is_match("a"));
        assert!(regex.is_match("aaaaaa"));

        let regex = compiled("a{2,}");
        assert!(regex.is_match("aa"));
        assert!(!regex.is_match("a"));
        assert!(regex.is_match("aaaaaa"));
    }

    #[test]
    fn bracket_expressions_end_to_end() {
        let regex = compiled("[a-c]{3}");
        assert!(regex.is_match("acb"));
        assert!(!regex.is_match("adb"));

        assert!(!compiled("[a-c]").is_match(""));

        let negated = compiled("[^a-c]");
        assert!(negated.is_match("d"));
        assert!(!negated.is_match("c"));
    }

    #[test]
    fn class_escapes_end_to_end() {
        let regex = compiled(".[.]\\s\\t\\D\\T\\S");
        assert!(regex.is_match("a. \tfgh"));
    }

    #[test]
    fn alternation_with_captures_end_to_end() {
        let regex = compiled("[Gg]ab(e|riel)");
        assert!(regex.is_match("Gabe"));
        let result = regex.exec("Gabriel");
        assert!(result.success);
        assert_eq!(result.captures[1], "riel");
        assert!(regex.is_match("gabe"));
        assert!(regex.is_match("gabriel"));
        assert!(!regex.is_match("Gabnl"));
        assert!(!regex.is_match("sabe"));

        let regex = compiled("(asdf|h(i|j)k)\\w\\W");
        assert!(regex.is_match("hjka9"));
    }

    #[test]
    fn exec_all_reports_nonoverlapping_matches_with_offsets() {
        let regex = compiled("[Gg]ab(e|riel)");
        let matches = regex.exec_all("Gabe gabriel Gabriel");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].0, 0);
        assert_eq!(matches[1].0, 5);
        assert_eq!(matches[2].0, 13);
        assert_eq!(matches[0].1.coverage, "Gabe");
        assert_eq!(matches[1].1.coverage, "gabriel");
        assert_eq!(matches[1].1.captures, vec!["riel".to_string()]);
    }

    #[test]
    fn exec_all_returns_empty_for_no_matches() {
        assert!(compiled("xyz").exec_all("abc abc").is_empty());
    }

    #[test]
    fn exec_all_terminates_on_zero_length_matches() {
        let matches = compiled("a?").exec_all("bb");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|(_, r)| r.coverage.is_empty()));
    }

    #[test]
    fn compilation_is_deterministic() {
        let first = compiled("[Gg]ab(e|riel)?x{2,}");
        let second = compiled("[Gg]ab(e|riel)?x{2,}");
        for text in ["Gabxx", "gabrielxxx", "Gab", "nope"] {
            assert_eq!(first.exec(text), second.exec(text));
        }
    }

    #[test]
    fn malformed_patterns_fail_to_compile() {
        assert_eq!(Regex::new("ab)").unwrap_err(), ParseError::UnbalancedGroup);
        assert_eq!(Regex::new("ab\\").unwrap_err(), ParseError::DanglingEscape);
        assert_eq!(Regex::new("a[]").unwrap_err(), ParseError::EmptyBracket);
        assert_eq!(
            Regex::new("a{b}").unwrap_err(),
            ParseError::InvalidBound("b".to_string())
        );
    }
}
