/// One parsed construct of a pattern. A compiled pattern is a tree of these
/// nodes; the tree is built once by the parser and never mutated, so a
/// compiled pattern can be evaluated from any number of threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An exact run of characters, matched as a prefix. The empty literal
    /// matches any input, consuming nothing.
    Literal(String),
    /// `\d` — one ASCII digit.
    Digit,
    /// `\w` — one byte in the literal range `'A'..='z'`.
    Word,
    /// `\s` — tab, carriage return, space or newline.
    Whitespace,
    /// `\t` — one tab character.
    Tab,
    /// `.` — any single character.
    Any,
    /// `\\` — one literal backslash.
    Backslash,
    /// `[^...]` and the upper-case escapes: succeeds consuming one
    /// character wherever the child fails.
    Negate(Box<Node>),
    /// `[...]` — one character accepted by any member.
    Set(Vec<Node>),
    /// `a-z` inside a bracket expression, bounds inclusive.
    Range(char, char),
    /// `?` — zero or one of the child.
    Option(Box<Node>),
    /// `{n}` — exactly n applications of the child.
    Repeat(Box<Node>, usize),
    /// `{min,max}` — min to max applications, greedy; `None` max means
    /// unbounded.
    RangeRepeat(Box<Node>, usize, Option<usize>),
    /// `*` — zero or more, greedy. Inner captures are dropped.
    Star(Box<Node>),
    /// `+` — one or more, greedy. Inner captures are kept.
    Plus(Box<Node>),
    /// Sequential composition. A `Concat` of nothing always fails.
    Concat(Vec<Node>),
    /// `(a|b|c)` — first branch to succeed wins; its coverage is appended
    /// to its captures as a trailing capture.
    Union(Vec<Node>),
    /// `(...)` — forwards the child's result with the child's whole
    /// coverage prepended to its captures.
    Capture(Box<Node>),
}
