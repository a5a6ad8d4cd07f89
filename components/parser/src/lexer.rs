//! Brio lexer - tokenizes source code into tokens.
//!
//! The lexer pulls characters from the [`InputStream`] on demand and
//! produces one token per call; there is no separate tokenization pass.
//! A single token of lookahead is cached for [`peek_token`](Lexer::peek_token).

use std::fmt;

use core_types::{SourcePosition, SyntaxError};

use crate::input::InputStream;

/// Brio keyword types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// if keyword
    If,
    /// then keyword
    Then,
    /// else keyword
    Else,
    /// fun keyword
    Fun,
    /// true keyword
    True,
    /// false keyword
    False,
}

impl Keyword {
    /// The keyword's spelling in source text.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Fun => "fun",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brio punctuators (one-character delimiters)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Opening brace
    LBrace,
    /// Closing brace
    RBrace,
    /// Opening bracket
    LBracket,
    /// Closing bracket
    RBracket,
    /// Semicolon
    Semicolon,
    /// Comma
    Comma,
}

impl Punctuator {
    /// The punctuator's source character.
    pub fn symbol(self) -> char {
        match self {
            Punctuator::LParen => '(',
            Punctuator::RParen => ')',
            Punctuator::LBrace => '{',
            Punctuator::RBrace => '}',
            Punctuator::LBracket => '[',
            Punctuator::RBracket => ']',
            Punctuator::Semicolon => ';',
            Punctuator::Comma => ',',
        }
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier (variable name)
    Identifier(String),
    /// Number literal
    Number(f64),
    /// String literal
    String(String),
    /// Keyword
    Keyword(Keyword),
    /// Punctuator
    Punctuator(Punctuator),
    /// Operator: a maximal run of operator-charset characters. No
    /// validation happens here; unknown runs are rejected by the parser
    /// when they have no precedence.
    Operator(String),
    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Number(value) => write!(f, "number {}", value),
            Token::String(value) => write!(f, "string \"{}\"", value),
            Token::Keyword(keyword) => write!(f, "keyword '{}'", keyword),
            Token::Punctuator(punctuator) => write!(f, "'{}'", punctuator),
            Token::Operator(operator) => write!(f, "operator '{}'", operator),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Lexer for Brio source code
pub struct Lexer {
    input: InputStream,
    /// Single-token lookahead cache; `None` when no token is buffered.
    current_token: Option<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source code.
    pub fn new(source: &str) -> Self {
        Self::from_input(InputStream::new(source))
    }

    /// Create a lexer over an existing character cursor.
    pub fn from_input(input: InputStream) -> Self {
        Self {
            input,
            current_token: None,
        }
    }

    /// Consume and return the next token from the source.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        if let Some(token) = self.current_token.take() {
            return Ok(token);
        }
        self.scan_token()
    }

    /// Peek at the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token, SyntaxError> {
        if self.current_token.is_none() {
            self.current_token = Some(self.scan_token()?);
        }
        Ok(self.current_token.as_ref().expect("token was just cached"))
    }

    /// Check whether no more tokens remain.
    pub fn is_at_end(&mut self) -> Result<bool, SyntaxError> {
        Ok(matches!(self.peek_token()?, Token::Eof))
    }

    /// Build a syntax error at the current cursor position.
    pub fn fail(&self, message: impl Into<String>) -> SyntaxError {
        self.input.fail(message)
    }

    /// The current position of the underlying cursor.
    pub fn current_position(&self) -> SourcePosition {
        self.input.current_position()
    }

    fn scan_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace_and_comments();

        if self.input.is_at_end() {
            return Ok(Token::Eof);
        }

        let ch = self.input.peek();

        if ch == '"' {
            return Ok(self.scan_string());
        }
        if ch.is_ascii_digit() {
            return self.scan_number();
        }
        if is_identifier_start(ch) {
            return Ok(self.scan_identifier());
        }
        if let Some(punctuator) = punctuator_for(ch) {
            self.input.advance();
            return Ok(Token::Punctuator(punctuator));
        }
        if is_operator_char(ch) {
            return Ok(self.scan_operator());
        }

        // The character is not consumed, so the reported column is the
        // character's own.
        Err(self.input.fail(format!("Unexpected character: '{}'", ch)))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while !self.input.is_at_end() {
            match self.input.peek() {
                ' ' | '\t' | '\n' => {
                    self.input.advance();
                }
                '#' => {
                    // Line comment: runs to the end of the line.
                    while !self.input.is_at_end() && self.input.peek() != '\n' {
                        self.input.advance();
                    }
                    self.input.advance();
                }
                _ => break,
            }
        }
    }

    /// Scan a string literal. A backslash escapes exactly the following
    /// character; there are no named escape sequences. Reaching the end
    /// of input without a closing quote silently ends the string.
    fn scan_string(&mut self) -> Token {
        let mut value = String::new();
        let mut escaped = false;

        self.input.advance(); // opening quote

        while !self.input.is_at_end() {
            let ch = self.input.advance();
            if escaped {
                value.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                break;
            } else {
                value.push(ch);
            }
        }

        Token::String(value)
    }

    /// Scan a number literal: digits with at most one decimal point.
    /// A second decimal point terminates the number without being
    /// consumed; the stray `.` then fails downstream in the parser.
    fn scan_number(&mut self) -> Result<Token, SyntaxError> {
        let mut text = String::new();
        let mut has_dot = false;

        while !self.input.is_at_end() {
            let ch = self.input.peek();
            if ch == '.' {
                if has_dot {
                    break;
                }
                has_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            text.push(self.input.advance());
        }

        let value = text
            .parse::<f64>()
            .map_err(|_| self.input.fail(format!("Invalid number literal: '{}'", text)))?;
        Ok(Token::Number(value))
    }

    fn scan_identifier(&mut self) -> Token {
        let mut ident = String::new();

        while !self.input.is_at_end() && is_identifier_continue(self.input.peek()) {
            ident.push(self.input.advance());
        }

        match ident.as_str() {
            "if" => Token::Keyword(Keyword::If),
            "then" => Token::Keyword(Keyword::Then),
            "else" => Token::Keyword(Keyword::Else),
            "fun" => Token::Keyword(Keyword::Fun),
            "true" => Token::Keyword(Keyword::True),
            "false" => Token::Keyword(Keyword::False),
            _ => Token::Identifier(ident),
        }
    }

    /// Scan the maximal run of operator-charset characters, so `==`,
    /// `<=`, `&&` and `!=` each come out as a single token.
    fn scan_operator(&mut self) -> Token {
        let mut operator = String::new();

        while !self.input.is_at_end() && is_operator_char(self.input.peek()) {
            operator.push(self.input.advance());
        }

        Token::Operator(operator)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_identifier_continue(ch: char) -> bool {
    is_identifier_start(ch) || ch == '$' || ch.is_ascii_digit()
}

fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '<' | '>' | '!'
    )
}

fn punctuator_for(ch: char) -> Option<Punctuator> {
    match ch {
        '(' => Some(Punctuator::LParen),
        ')' => Some(Punctuator::RParen),
        '{' => Some(Punctuator::LBrace),
        '}' => Some(Punctuator::RBrace),
        '[' => Some(Punctuator::LBracket),
        ']' => Some(Punctuator::RBracket),
        ';' => Some(Punctuator::Semicolon),
        ',' => Some(Punctuator::Comma),
        _ => None,
    }
}
