use std::{iter::Peekable, str::CharIndices};

use super::token::Token;

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some((_, '[')) => Some(Token::LBracket),
            Some((_, ']')) => Some(Token::RBracket),
            Some((_, ',')) => Some(Token::Comma),
            Some((off, '-')) => {
                if matches!(self.chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
                    return Some(self.read_number(off));
                }
                Some(Token::Invalid('-'))
            }
            Some((off, c)) => {
                if c.is_whitespace() {
                    return self.next();
                }
                if c.is_ascii_digit() {
                    return Some(self.read_number(off));
                }

                Some(Token::Invalid(c))
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        Token::Number(self.slice_until(from_off, |c| !c.is_ascii_digit()))
    }
}

#[cfg(test)]
mod test {
    use super::{super::token::Token, Lexer};

    fn tokenize_str(s: &str) -> Vec<Token<'_>> {
        Lexer::new(s).collect()
    }

    #[test]
    fn read_number() {
        let tokens = tokenize_str("48$7 1024 \n9\n-8");
        let expected = &[
            Token::Number("48"),
            Token::Invalid('$'),
            Token::Number("7"),
            Token::Number("1024"),
            Token::Number("9"),
            Token::Number("-8"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_nested_list() {
        let tokens = tokenize_str("[[1],[2, 3]]");
        let expected = &[
            Token::LBracket,
            Token::LBracket,
            Token::Number("1"),
            Token::RBracket,
            Token::Comma,
            Token::LBracket,
            Token::Number("2"),
            Token::Comma,
            Token::Number("3"),
            Token::RBracket,
            Token::RBracket,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn lone_minus_is_invalid() {
        assert_eq!(
            tokenize_str("- 4"),
            &[Token::Invalid('-'), Token::Number("4")]
        );
    }

    #[test]
    fn number_stops_at_bracket() {
        assert_eq!(
            tokenize_str("10]"),
            &[Token::Number("10"), Token::RBracket]
        );
    }
}
