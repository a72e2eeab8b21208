use crate::ast::Node;
use crate::error::ParseError;
use crate::lexer::{self, SetToken, Token};

/// Parses a whole token sequence into one matcher node by repeatedly
/// peeling the trailing unit off the sequence, right to left, then wrapping
/// the collected units in a `Concat`. Zero tokens compile to the empty
/// literal, which matches only a zero-length prefix.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Ok(Node::Literal(String::new()));
    }
    let mut rest = tokens;
    let mut parts = Vec::new();
    while !rest.is_empty() {
        let (prefix, node) = split_trailing(rest)?;
        parts.push(node);
        rest = prefix;
    }
    parts.reverse();
    if parts.len() == 1 {
        Ok(parts.remove(0))
    } else {
        Ok(Node::Concat(parts))
    }
}

/// Removes one complete unit from the end of the sequence, returning the
/// remaining prefix and the unit's node. Dispatch is on the last token: a
/// closing delimiter pulls in its whole span, a quantifier peels the unit
/// before it, and anything else is a singular unit on its own.
fn split_trailing(tokens: &[Token]) -> Result<(&[Token], Node), ParseError> {
    let Some((last, head)) = tokens.split_last() else {
        // a `{...}` bound reached back past the start of the sequence
        return Err(ParseError::BareQuantifier);
    };
    if tokens.len() == 1 {
        return Ok((&tokens[..0], singular(last)));
    }

    match last {
        Token::Meta(')') => {
            let open =
                find_opener(tokens, '(', ')').ok_or(ParseError::UnbalancedGroup)?;
            let body = &tokens[..open];
            let inner = &tokens[open + 1..tokens.len() - 1];
            if has_top_level_pipe(inner) {
                Ok((body, Node::Union(split_union(inner)?)))
            } else {
                Ok((body, Node::Capture(Box::new(parse(inner)?))))
            }
        }
        Token::Meta('}') => {
            let open =
                find_opener(tokens, '{', '}').ok_or(ParseError::UnbalancedGroup)?;
            let bound = bound_text(&tokens[open..])?;
            let (body, target) = split_trailing(&tokens[..open])?;
            Ok((body, repeat_node(target, &bound)?))
        }
        Token::Meta(']') => {
            let open =
                find_opener(tokens, '[', ']').ok_or(ParseError::UnbalancedBracket)?;
            let contents: String = tokens[open + 1..tokens.len() - 1]
                .iter()
                .map(Token::text)
                .collect();
            Ok((&tokens[..open], set_node(&contents)?))
        }
        Token::Meta(quantifier @ ('*' | '+' | '?')) => {
            let (body, target) = split_trailing(head)?;
            let node = match quantifier {
                '*' => Node::Star(Box::new(target)),
                '+' => Node::Plus(Box::new(target)),
                _ => Node::Option(Box::new(target)),
            };
            Ok((body, node))
        }
        _ => Ok((head, singular(last))),
    }
}

/// Parses one literal or escape token as an atomic unit.
fn singular(token: &Token) -> Node {
    match token {
        Token::Meta('.') => Node::Any,
        Token::Meta(c) => Node::Literal(c.to_string()),
        Token::Escape(c) => escape_node(*c),
        Token::Literal(s) => Node::Literal(s.clone()),
    }
}

fn escape_node(c: char) -> Node {
    match c {
        'd' => Node::Digit,
        '\\' => Node::Backslash,
        's' => Node::Whitespace,
        't' => Node::Tab,
        'w' => Node::Word,
        'D' => Node::Negate(Box::new(Node::Digit)),
        'T' => Node::Negate(Box::new(Node::Tab)),
        'S' => Node::Negate(Box::new(Node::Whitespace)),
        'W' => Node::Negate(Box::new(Node::Word)),
        // any other escaped character stands for itself
        other => Node::Literal(other.to_string()),
    }
}

/// Rebuilds a bracket expression's contents as a set node, re-lexing the
/// raw text between the brackets.
fn set_node(contents: &str) -> Result<Node, ParseError> {
    if contents.is_empty() {
        return Err(ParseError::EmptyBracket);
    }
    let set_tokens = lexer::tokenize_set(contents);
    let (negated, members) = match set_tokens.split_first() {
        Some((SetToken::Negation, rest)) => (true, rest),
        _ => (false, &set_tokens[..]),
    };
    let children = members.iter().map(set_member).collect();
    let set = Node::Set(children);
    if negated {
        Ok(Node::Negate(Box::new(set)))
    } else {
        Ok(set)
    }
}

fn set_member(token: &SetToken) -> Node {
    match token {
        SetToken::Escape(c) => escape_node(*c),
        SetToken::Range(lo, hi) => Node::Range(*lo, *hi),
        // inside a set, `.` is a literal dot rather than a wildcard
        SetToken::Literal(s) => Node::Literal(s.clone()),
        SetToken::Negation => Node::Literal("^".to_string()),
    }
}

/// Extracts the text of a `{...}` bound span; the span must be exactly an
/// opener, one literal token, and a closer.
fn bound_text(span: &[Token]) -> Result<String, ParseError> {
    match span {
        [Token::Meta('{'), Token::Literal(text), Token::Meta('}')] => Ok(text.clone()),
        _ => {
            let raw: String = span[1..span.len() - 1].iter().map(Token::text).collect();
            Err(ParseError::InvalidBound(raw))
        }
    }
}

/// Builds the repeat node for a bound: `n` repeats exactly, `min,max`
/// repeats within bounds, an empty max means unbounded.
fn repeat_node(target: Node, bound: &str) -> Result<Node, ParseError> {
    let invalid = || ParseError::InvalidBound(bound.to_string());
    match bound.split_once(',') {
        Some((lower, upper)) => {
            let min = lower.parse().map_err(|_| invalid())?;
            let max = if upper.is_empty() {
                None
            } else {
                Some(upper.parse().map_err(|_| invalid())?)
            };
            Ok(Node::RangeRepeat(Box::new(target), min, max))
        }
        None => {
            let count = bound.parse().map_err(|_| invalid())?;
            Ok(Node::Repeat(Box::new(target), count))
        }
    }
}

/// Scans backward from the end for the opener matching the closing token
/// in last position, tracking nesting depth.
fn find_opener(tokens: &[Token], opener: char, closer: char) -> Option<usize> {
    let mut depth = 0i32;
    for (i, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::Meta(c) if *c == closer => depth += 1,
            Token::Meta(c) if *c == opener => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Whether a group's content holds a `|` outside any nested parens.
fn has_top_level_pipe(tokens: &[Token]) -> bool {
    let mut depth = 0i32;
    for token in tokens {
        match token {
            Token::Meta('(') => depth += 1,
            Token::Meta(')') => depth -= 1,
            Token::Meta('|') if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Splits a group's content on top-level `|` boundaries and parses each
/// branch; nested groups keep their interior pipes.
fn split_union(tokens: &[Token]) -> Result<Vec<Node>, ParseError> {
    let mut branches = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Meta('(') => depth += 1,
            Token::Meta(')') => depth -= 1,
            Token::Meta('|') if depth == 0 => {
                branches.push(parse(&tokens[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }
    branches.push(parse(&tokens[start..])?);
    Ok(branches)
}
