//! Recursive descent parser for Brio.
//!
//! The parser pulls tokens from the [`Lexer`] (never characters) and
//! builds the AST in one pass. Binary and assignment expressions use
//! precedence climbing; call arguments, function parameters and blocks
//! share one generic delimited-list routine.

use core_types::SyntaxError;

use crate::ast::Node;
use crate::error::{expected_token, expected_variable_name, unexpected_token};
use crate::lexer::{Keyword, Lexer, Punctuator, Token};

/// Operator precedence table; higher binds tighter.
///
/// Operators absent from the table are never consumed as binary
/// operators, so a stray run like `<>` surfaces downstream as a
/// missing-semicolon or unexpected-token failure.
fn precedence(operator: &str) -> Option<u8> {
    match operator {
        "=" => Some(1),
        "||" => Some(2),
        "&&" => Some(3),
        "<" | ">" | "<=" | ">=" | "==" | "!=" => Some(7),
        "+" | "-" | "*" | "/" | "%" => Some(10),
        _ => None,
    }
}

/// Brio parser
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    /// Create a new parser for the given source code.
    pub fn new(source: &str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Create a parser over an existing token stream.
    pub fn from_lexer(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Parse the source into an AST.
    ///
    /// Returns the program root: always a [`Node::Block`], even for
    /// zero or one top-level expressions. Top-level expressions are
    /// separated by `;`, with no separator required after the last one.
    pub fn parse(&mut self) -> Result<Node, SyntaxError> {
        let mut statements = Vec::new();

        while !self.lexer.is_at_end()? {
            statements.push(self.parse_expression()?);
            if !self.lexer.is_at_end()? {
                self.expect_punctuator(Punctuator::Semicolon)?;
            }
        }

        Ok(Node::Block { statements })
    }

    fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let atom = self.parse_atom()?;
        let expression = self.maybe_binary(atom, 0)?;
        self.maybe_call(expression)
    }

    fn parse_atom(&mut self) -> Result<Node, SyntaxError> {
        let node = self.parse_primary()?;
        self.maybe_call(node)
    }

    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        if self.check_punctuator(Punctuator::LParen)? {
            self.lexer.next_token()?;
            let expression = self.parse_expression()?;
            self.expect_punctuator(Punctuator::RParen)?;
            return Ok(expression);
        }
        if self.check_punctuator(Punctuator::LBrace)? {
            return self.parse_block();
        }
        if self.check_keyword(Keyword::If)? {
            return self.parse_conditional();
        }
        if self.check_keyword(Keyword::True)? || self.check_keyword(Keyword::False)? {
            return self.parse_boolean();
        }
        if self.check_keyword(Keyword::Fun)? {
            self.lexer.next_token()?;
            return self.parse_function();
        }

        let token = self.lexer.next_token()?;
        match token {
            Token::Identifier(name) => Ok(Node::VariableReference { name }),
            Token::Number(value) => Ok(Node::NumberLiteral { value }),
            Token::String(value) => Ok(Node::StringLiteral { value }),
            other => Err(unexpected_token(&other, self.lexer.current_position())),
        }
    }

    /// Wrap an expression into a call node for as long as an argument
    /// list follows, so `f(x)(y)` chains.
    fn maybe_call(&mut self, mut expression: Node) -> Result<Node, SyntaxError> {
        while self.check_punctuator(Punctuator::LParen)? {
            let arguments = self.parse_delimited(
                Punctuator::LParen,
                Punctuator::RParen,
                Punctuator::Comma,
                Self::parse_expression,
            )?;
            expression = Node::Call {
                callee: Box::new(expression),
                arguments,
            };
        }
        Ok(expression)
    }

    /// Precedence climbing. Consumes operators whose precedence
    /// strictly exceeds `min_precedence`; the right operand climbs at
    /// the operator's own precedence so tighter operators bind deeper,
    /// then folding continues at the original threshold. All operators
    /// chain left-associatively, including `=`.
    fn maybe_binary(&mut self, mut left: Node, min_precedence: u8) -> Result<Node, SyntaxError> {
        loop {
            let operator = match self.lexer.peek_token()? {
                Token::Operator(operator) => operator.clone(),
                _ => break,
            };
            let op_precedence = match precedence(&operator) {
                Some(op_precedence) if op_precedence > min_precedence => op_precedence,
                _ => break,
            };

            self.lexer.next_token()?;
            let atom = self.parse_atom()?;
            let right = Box::new(self.maybe_binary(atom, op_precedence)?);

            left = if operator == "=" {
                Node::Assignment {
                    left: Box::new(left),
                    right,
                }
            } else {
                Node::BinaryOp {
                    operator,
                    left: Box::new(left),
                    right,
                }
            };
        }
        Ok(left)
    }

    /// Parse a begin/end-bracketed, separator-joined list of items.
    ///
    /// The separator is required between items but tolerated as absent
    /// before the end punctuator, and a trailing separator before the
    /// end punctuator is accepted.
    fn parse_delimited<T>(
        &mut self,
        begin: Punctuator,
        end: Punctuator,
        separator: Punctuator,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<Vec<T>, SyntaxError> {
        let mut items = Vec::new();
        let mut first = true;

        self.expect_punctuator(begin)?;

        while !self.lexer.is_at_end()? {
            if self.check_punctuator(end)? {
                break;
            }
            if first {
                first = false;
            } else {
                self.expect_punctuator(separator)?;
            }
            if self.check_punctuator(end)? {
                break;
            }
            items.push(parse_item(self)?);
        }

        self.expect_punctuator(end)?;

        Ok(items)
    }

    /// Parse a `{...}` block and apply the collapsing rules: zero
    /// statements collapse to `false`, one statement collapses to that
    /// statement itself.
    fn parse_block(&mut self) -> Result<Node, SyntaxError> {
        let mut statements = self.parse_delimited(
            Punctuator::LBrace,
            Punctuator::RBrace,
            Punctuator::Semicolon,
            Self::parse_expression,
        )?;

        Ok(match statements.len() {
            0 => Node::BooleanLiteral { value: false },
            1 => statements.remove(0),
            _ => Node::Block { statements },
        })
    }

    /// Parse an `if` conditional. The `then` keyword is required unless
    /// the branch starts with `{`.
    fn parse_conditional(&mut self) -> Result<Node, SyntaxError> {
        self.expect_keyword(Keyword::If)?;
        let condition = Box::new(self.parse_expression()?);

        if !self.check_punctuator(Punctuator::LBrace)? {
            self.expect_keyword(Keyword::Then)?;
        }
        let then_branch = Box::new(self.parse_expression()?);

        let else_branch = if self.check_keyword(Keyword::Else)? {
            self.lexer.next_token()?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        Ok(Node::Conditional {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_boolean(&mut self) -> Result<Node, SyntaxError> {
        let token = self.lexer.next_token()?;
        Ok(Node::BooleanLiteral {
            value: matches!(token, Token::Keyword(Keyword::True)),
        })
    }

    /// Parse a function literal; the `fun` keyword has already been
    /// consumed by the caller.
    fn parse_function(&mut self) -> Result<Node, SyntaxError> {
        let parameters = self.parse_delimited(
            Punctuator::LParen,
            Punctuator::RParen,
            Punctuator::Comma,
            Self::parse_variable_name,
        )?;
        let body = Box::new(self.parse_expression()?);

        Ok(Node::FunctionLiteral { parameters, body })
    }

    fn parse_variable_name(&mut self) -> Result<String, SyntaxError> {
        match self.lexer.next_token()? {
            Token::Identifier(name) => Ok(name),
            other => Err(expected_variable_name(
                &other,
                self.lexer.current_position(),
            )),
        }
    }

    fn check_punctuator(&mut self, expected: Punctuator) -> Result<bool, SyntaxError> {
        Ok(matches!(
            self.lexer.peek_token()?,
            Token::Punctuator(punctuator) if *punctuator == expected
        ))
    }

    fn expect_punctuator(&mut self, expected: Punctuator) -> Result<(), SyntaxError> {
        if self.check_punctuator(expected)? {
            self.lexer.next_token()?;
            return Ok(());
        }
        let got = self.lexer.peek_token()?.clone();
        Err(expected_token(
            &format!("'{}'", expected),
            &got,
            self.lexer.current_position(),
        ))
    }

    fn check_keyword(&mut self, expected: Keyword) -> Result<bool, SyntaxError> {
        Ok(matches!(
            self.lexer.peek_token()?,
            Token::Keyword(keyword) if *keyword == expected
        ))
    }

    fn expect_keyword(&mut self, expected: Keyword) -> Result<(), SyntaxError> {
        if self.check_keyword(expected)? {
            self.lexer.next_token()?;
            return Ok(());
        }
        let got = self.lexer.peek_token()?.clone();
        Err(expected_token(
            &format!("keyword '{}'", expected),
            &got,
            self.lexer.current_position(),
        ))
    }
}
