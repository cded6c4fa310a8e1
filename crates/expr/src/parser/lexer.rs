use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Spanned {
    pub token: Token,
    pub position: usize,
}

struct Lexer {
    src: Vec<char>,
    pos: usize,
}

/// Splits source text into tokens tagged with their character offset.
pub(super) fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Lexer {
        src: source.chars().collect(),
        pos: 0,
    };

    let mut tokens = Vec::new();
    while let Some(c) = lexer.peek() {
        if c.is_whitespace() {
            lexer.pos += 1;
            continue;
        }

        let position = lexer.pos;
        let token = if c.is_ascii_digit() || c == '.' {
            lexer.number()?
        } else if c.is_alphabetic() || c == '_' {
            lexer.ident()
        } else {
            lexer.pos += 1;
            match c {
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '^' => Token::Caret,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                found => return Err(ParseError::UnexpectedChar { found, position }),
            }
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

impl Lexer {
    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src.get(self.pos + offset).copied()
    }

    fn eat_digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        self.eat_digits();
        if self.peek() == Some('.') {
            self.pos += 1;
            self.eat_digits();
        }

        // An exponent needs digits, so `2e` stays `2` followed by the constant.
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = if matches!(self.peek_at(1), Some('+' | '-')) { 2 } else { 1 };
            if matches!(self.peek_at(digit_at), Some(c) if c.is_ascii_digit()) {
                self.pos += digit_at;
                self.eat_digits();
            }
        }

        let text: String = self.src[start..self.pos].iter().collect();
        text.parse()
            .map(Token::Number)
            .map_err(|_| ParseError::InvalidNumber {
                text,
                position: start,
            })
    }

    fn ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        Token::Ident(self.src[start..self.pos].iter().collect())
    }
}
