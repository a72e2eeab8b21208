use crate::ast::Node;

/// A successful consumption: the byte length of the covered input prefix
/// and the capture groups recorded along the way. `len` always lies on a
/// char boundary. An unsuccessful match is represented by `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    pub len: usize,
    pub captures: Vec<String>,
}

impl Hit {
    fn plain(len: usize) -> Self {
        Hit {
            len,
            captures: Vec::new(),
        }
    }
}

/// Consumes the first character when the predicate accepts it.
fn one_char(input: &str, accept: impl Fn(char) -> bool) -> Option<Hit> {
    let c = input.chars().next()?;
    accept(c).then(|| Hit::plain(c.len_utf8()))
}

impl Node {
    /// Evaluates this node against the start of `input`. Repetition is
    /// greedy and never retried at a lower count: each quantifier stops at
    /// its child's first failure and the split point is final.
    pub(crate) fn eval(&self, input: &str) -> Option<Hit> {
        match self {
            Node::Literal(s) => input
                .starts_with(s.as_str())
                .then(|| Hit::plain(s.len())),
            Node::Digit => one_char(input, |c| c.is_ascii_digit()),
            // the literal byte range A..z, which takes in the six
            // punctuation characters between 'Z' and 'a'
            Node::Word => one_char(input, |c| ('A'..='z').contains(&c)),
            Node::Whitespace => one_char(input, |c| matches!(c, '\t' | '\r' | ' ' | '\n')),
            Node::Tab => one_char(input, |c| c == '\t'),
            Node::Any => one_char(input, |_| true),
            Node::Backslash => one_char(input, |c| c == '\\'),
            Node::Negate(inner) => {
                let c = input.chars().next()?;
                match inner.eval(input) {
                    Some(_) => None,
                    None => Some(Hit::plain(c.len_utf8())),
                }
            }
            Node::Set(members) => {
                // only a member's success flag matters; the set always
                // consumes exactly one character
                let c = input.chars().next()?;
                members
                    .iter()
                    .any(|member| member.eval(input).is_some())
                    .then(|| Hit::plain(c.len_utf8()))
            }
            Node::Range(lo, hi) => one_char(input, |c| *lo <= c && c <= *hi),
            Node::Option(inner) => Some(inner.eval(input).unwrap_or_else(|| Hit::plain(0))),
            Node::Repeat(inner, count) => {
                let mut hit = Hit::plain(0);
                for _ in 0..*count {
                    let step = inner.eval(&input[hit.len..])?;
                    hit.len += step.len;
                    hit.captures.extend(step.captures);
                }
                Some(hit)
            }
            Node::RangeRepeat(inner, min, max) => {
                // an unbounded max cannot repeat more often than the input
                // is long
                let attempts = max.unwrap_or(input.len());
                let mut hit = Hit::plain(0);
                let mut completed = 0;
                for _ in 0..attempts {
                    let Some(step) = inner.eval(&input[hit.len..]) else {
                        break;
                    };
                    hit.len += step.len;
                    hit.captures.extend(step.captures);
                    completed += 1;
                }
                (completed >= *min).then_some(hit)
            }
            Node::Star(inner) => {
                let mut len = 0;
                while len < input.len() {
                    let Some(step) = inner.eval(&input[len..]) else {
                        break;
                    };
                    if step.len == 0 {
                        // a zero-width success would never advance
                        break;
                    }
                    len += step.len;
                }
                // inner captures are dropped here; Plus keeps them
                Some(Hit::plain(len))
            }
            Node::Plus(inner) => {
                let mut hit = Hit::plain(0);
                let mut instances = 0;
                while hit.len < input.len() {
                    let Some(step) = inner.eval(&input[hit.len..]) else {
                        break;
                    };
                    instances += 1;
                    let advanced = step.len > 0;
                    hit.len += step.len;
                    hit.captures.extend(step.captures);
                    if !advanced {
                        break;
                    }
                }
                (instances > 0).then_some(hit)
            }
            Node::Concat(children) => {
                // a concatenation of nothing always fails
                if children.is_empty() {
                    return None;
                }
                let mut hit = Hit::plain(0);
                for child in children {
                    let step = child.eval(&input[hit.len..])?;
                    hit.len += step.len;
                    hit.captures.extend(step.captures);
                }
                Some(hit)
            }
            Node::Union(branches) => {
                for branch in branches {
                    if let Some(mut hit) = branch.eval(input) {
                        // the winning branch's coverage becomes its own
                        // trailing capture
                        hit.captures.push(input[..hit.len].to_string());
                        return Some(hit);
                    }
                }
                None
            }
            Node::Capture(inner) => {
                let hit = inner.eval(input)?;
                let mut captures = vec![input[..hit.len].to_string()];
                captures.extend(hit.captures);
                Some(Hit {
                    len: hit.len,
                    captures,
                })
            }
        }
    }
}
