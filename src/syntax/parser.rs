use std::iter::Peekable;

use crate::{
    error::{ErrorKind, PResult},
    syntax::{lexer::Lexer, token::Token},
    value::Value,
};

/// Deepest list nesting a single value may have.
pub(crate) const MAX_DEPTH: usize = 1024;

pub(crate) struct Parser<'src> {
    lexer: Peekable<Lexer<'src>>,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src).peekable(),
            depth: 0,
        }
    }

    pub fn parse_value(&mut self) -> PResult<Value> {
        match self.lexer.next() {
            None => Err(ErrorKind::ParseError("Expected value, found EOF".into())),
            Some(Token::Number(s)) => Self::parse_integer(s),
            Some(Token::LBracket) => {
                if self.depth == MAX_DEPTH {
                    return Err(ErrorKind::InvalidInput(format!(
                        "Nesting deeper than {MAX_DEPTH} lists"
                    )));
                }
                self.depth += 1;
                let list = self.parse_list();
                self.depth -= 1;
                list
            }
            Some(Token::Invalid(c)) => Err(Self::unsupported(c)),
            Some(other) => Err(ErrorKind::ParseError(format!(
                "Expected value, found {other:?}"
            ))),
        }
    }

    /// Fails if anything but whitespace is left after the parsed value.
    pub fn finish(&mut self) -> PResult<()> {
        match self.lexer.next() {
            None => Ok(()),
            Some(Token::Invalid(c)) => Err(Self::unsupported(c)),
            Some(other) => Err(ErrorKind::ParseError(format!(
                "Expected end of input, found {other:?}"
            ))),
        }
    }

    fn parse_list(&mut self) -> PResult<Value> {
        let mut items = vec![];

        if let Some(Token::RBracket) = self.lexer.peek() {
            self.bump();
            return Ok(Value::List(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.lexer.next() {
                Some(Token::Comma) => (),
                Some(Token::RBracket) => return Ok(Value::List(items)),
                Some(Token::Invalid(c)) => return Err(Self::unsupported(c)),
                None => return Err(ErrorKind::ParseError("Unclosed `[`, found EOF".into())),
                Some(other) => {
                    return Err(ErrorKind::ParseError(format!(
                        "Expected `,` or `]`, found {other:?}"
                    )))
                }
            }
        }
    }

    fn parse_integer(s: &str) -> PResult<Value> {
        s.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ErrorKind::InvalidInput(format!("Integer `{s}` is out of range")))
    }

    fn unsupported(c: char) -> ErrorKind {
        ErrorKind::InvalidInput(format!(
            "Unexpected `{c}`, only integers and lists are supported"
        ))
    }

    #[inline(always)]
    fn bump(&mut self) {
        let _ = self.lexer.next();
    }
}
