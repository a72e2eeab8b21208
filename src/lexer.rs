use crate::error::ParseError;

const STRUCTURAL: &str = "()[]{}|.+*?";

/// One lexed unit of a pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of plain characters.
    Literal(String),
    /// A single structural character: `( ) [ ] { } | . + * ?`.
    Meta(char),
    /// A backslash followed by exactly one character.
    Escape(char),
}

impl Token {
    /// The raw pattern text this token was lexed from.
    pub fn text(&self) -> String {
        match self {
            Token::Literal(s) => s.clone(),
            Token::Meta(c) => c.to_string(),
            Token::Escape(c) => format!("\\{c}"),
        }
    }
}

/// One lexed unit of a bracket expression's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetToken {
    /// A leading `^`.
    Negation,
    /// A backslash followed by exactly one character.
    Escape(char),
    /// A `lo-hi` triple, bounds inclusive.
    Range(char, char),
    /// A single character, or a dangling `x-` tail at end of input.
    Literal(String),
}

/// Splits a pattern into tokens, covering the whole string. Plain
/// characters accumulate into one `Literal`; structural characters and
/// escapes flush the accumulator and stand alone.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if !buffer.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut buffer)));
            }
            match chars.next() {
                Some(escaped) => tokens.push(Token::Escape(escaped)),
                None => return Err(ParseError::DanglingEscape),
            }
        } else if STRUCTURAL.contains(c) {
            if !buffer.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut buffer)));
            }
            tokens.push(Token::Meta(c));
        } else {
            buffer.push(c);
        }
    }
    if !buffer.is_empty() {
        tokens.push(Token::Literal(buffer));
    }
    Ok(tokens)
}

/// Splits the text between `[` and `]` (brackets excluded) into set tokens.
/// A `^` counts as the negation marker only in first position.
pub fn tokenize_set(contents: &str) -> Vec<SetToken> {
    let mut tokens = Vec::new();
    let mut chars = contents.chars().peekable();

    if chars.peek() == Some(&'^') {
        tokens.push(SetToken::Negation);
        chars.next();
    }

    // buffer holds at most two characters: a pending single, or "x-"
    // awaiting the upper bound of a range
    let mut buffer: Vec<char> = Vec::new();
    for c in chars {
        if buffer.is_empty() {
            buffer.push(c);
        } else if buffer.len() == 1 {
            let first = buffer[0];
            if first == '\\' {
                tokens.push(SetToken::Escape(c));
                buffer.clear();
            } else if c == '-' {
                buffer.push(c);
            } else {
                tokens.push(SetToken::Literal(first.to_string()));
                buffer.clear();
                buffer.push(c);
            }
        } else {
            tokens.push(SetToken::Range(buffer[0], c));
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        tokens.push(SetToken::Literal(buffer.into_iter().collect()));
    }
    tokens
}
