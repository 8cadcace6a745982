// Cursor parser for signature text
//
// Reads spanned tokens left to right. The cursor only moves forward; the
// optional value-reference and optional comma probes are the only
// primitives that look ahead without committing. Each parser value covers
// one signature fragment and holds no state across calls.

use crate::error::{ParseError, ParseResult, Span};
use crate::types::{ScalarType, Type};
use lexer::token::Token;

pub struct TypeParser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
    end: usize,
}

impl TypeParser {
    pub fn new(source: &str) -> Self {
        TypeParser {
            tokens: lexer::lex_spanned(source),
            pos: 0,
            end: source.len(),
        }
    }

    /// Span of the upcoming token, or an empty span at end of input
    pub fn current_location(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.end..self.end,
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn bump(&mut self) -> Option<(Token, Span)> {
        let entry = self.tokens.get(self.pos).cloned();
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    fn grammar_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::GrammarMismatch {
            message: message.into(),
            span: self.current_location(),
        }
    }

    // ==================== Primitives ====================

    /// Parse one bare identifier token
    pub fn parse_keyword(&mut self) -> ParseResult<(String, Span)> {
        match self.peek() {
            Some(Token::Identifier(_)) => match self.bump() {
                Some((Token::Identifier(name), span)) => Ok((name, span)),
                _ => Err(self.grammar_error("expected keyword")),
            },
            _ => Err(self.grammar_error("expected keyword")),
        }
    }

    pub fn parse_comma(&mut self) -> ParseResult<()> {
        match self.peek() {
            Some(Token::Comma) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.grammar_error("expected ','")),
        }
    }

    /// Consume a comma if one is next; never fails
    pub fn parse_optional_comma(&mut self) -> bool {
        if let Some(Token::Comma) = self.peek() {
            self.pos += 1;
            return true;
        }
        false
    }

    pub fn parse_colon(&mut self) -> ParseResult<()> {
        match self.peek() {
            Some(Token::Colon) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.grammar_error("expected ':'")),
        }
    }

    /// Parse an operand reference if one is next. This is the one
    /// speculative primitive: on a non-reference token the cursor does
    /// not move.
    pub fn parse_optional_value_ref(&mut self) -> Option<String> {
        match self.peek() {
            Some(Token::ValueRef(name)) => {
                let name = name.clone();
                self.pos += 1;
                Some(name)
            }
            _ => None,
        }
    }

    /// Parse one bare integer token
    pub fn parse_int(&mut self) -> ParseResult<(i64, Span)> {
        match self.peek() {
            Some(Token::Int(_)) => match self.bump() {
                Some((Token::Int(value), span)) => Ok((value, span)),
                _ => Err(self.grammar_error("expected integer literal")),
            },
            _ => Err(self.grammar_error("expected integer literal")),
        }
    }

    // ==================== Type grammar ====================

    /// Parse a single type: scalar, tensor, complex, tuple, or the
    /// general `(inputs...) -> result` function notation
    pub fn parse_type(&mut self) -> ParseResult<Type> {
        match self.peek() {
            Some(Token::LParen) => self.parse_function_type(),
            Some(Token::Identifier(_)) => {
                let (name, span) = self.parse_keyword()?;
                match name.as_str() {
                    "tensor" => self.parse_tensor_body(),
                    "complex" => self.parse_complex_body(),
                    "tuple" => self.parse_tuple_body(),
                    _ => match ScalarType::parse(&name) {
                        Some(scalar) => Ok(Type::Scalar(scalar)),
                        None => Err(ParseError::GrammarMismatch {
                            message: format!("unknown type '{}'", name),
                            span,
                        }),
                    },
                }
            }
            _ => Err(self.grammar_error("expected type")),
        }
    }

    /// Parse one or more comma-separated types
    pub fn parse_type_list(&mut self) -> ParseResult<Vec<Type>> {
        let mut types = vec![self.parse_type()?];
        while let Some(Token::Comma) = self.peek() {
            self.pos += 1;
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    fn parse_function_type(&mut self) -> ParseResult<Type> {
        self.expect(Token::LParen, "expected '('")?;

        let mut inputs = Vec::new();
        if !matches!(self.peek(), Some(Token::RParen)) {
            inputs.push(self.parse_type()?);
            while let Some(Token::Comma) = self.peek() {
                self.pos += 1;
                inputs.push(self.parse_type()?);
            }
        }
        self.expect(Token::RParen, "expected ')'")?;
        self.expect(Token::Arrow, "expected '->'")?;

        // Result side: one bare type, or a parenthesized list for the
        // zero- and multi-result forms
        let results = if matches!(self.peek(), Some(Token::LParen)) {
            self.pos += 1;
            let mut results = Vec::new();
            if !matches!(self.peek(), Some(Token::RParen)) {
                results.push(self.parse_type()?);
                while let Some(Token::Comma) = self.peek() {
                    self.pos += 1;
                    results.push(self.parse_type()?);
                }
            }
            self.expect(Token::RParen, "expected ')'")?;
            results
        } else {
            vec![self.parse_type()?]
        };

        Ok(Type::function(inputs, results))
    }

    fn parse_tensor_body(&mut self) -> ParseResult<Type> {
        self.expect(Token::Lt, "expected '<' after 'tensor'")?;

        let mut shape = Vec::new();
        while let Some(Token::Dim(dim)) = self.peek() {
            shape.push(*dim);
            self.pos += 1;
        }

        let element = self.parse_type()?;
        self.expect(Token::Gt, "expected '>' to close tensor type")?;
        Ok(Type::tensor(shape, element))
    }

    fn parse_complex_body(&mut self) -> ParseResult<Type> {
        self.expect(Token::Lt, "expected '<' after 'complex'")?;
        let element = self.parse_type()?;
        self.expect(Token::Gt, "expected '>' to close complex type")?;
        Ok(Type::complex(element))
    }

    fn parse_tuple_body(&mut self) -> ParseResult<Type> {
        self.expect(Token::Lt, "expected '<' after 'tuple'")?;

        let mut components = Vec::new();
        if !matches!(self.peek(), Some(Token::Gt)) {
            components.push(self.parse_type()?);
            while let Some(Token::Comma) = self.peek() {
                self.pos += 1;
                components.push(self.parse_type()?);
            }
        }
        self.expect(Token::Gt, "expected '>' to close tuple type")?;
        Ok(Type::tuple(components))
    }

    fn expect(&mut self, token: Token, message: &str) -> ParseResult<Span> {
        match self.peek() {
            Some(next) if *next == token => {
                let span = self.current_location();
                self.pos += 1;
                Ok(span)
            }
            _ => Err(self.grammar_error(message)),
        }
    }
}
