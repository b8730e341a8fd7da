//! Lexer: source text -> token stream.
//!
//! Whitespace and `//` line comments are skipped. Every token records the
//! byte offset of its first character. Identifiers that are not exactly one
//! of the recognized keywords (and a bare `|`) fail with `"unexpected
//! '<lexeme>'"`.

pub mod token;

pub use token::{Generator, Token, TokenKind};

use crate::error::{KernelError, Result};

pub struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.pos += 1;
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(b) = self.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Produce the full token stream, ending with a single `EOF` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia();
        let offset = self.pos;
        let b = match self.peek() {
            None => return Ok(Token::new(TokenKind::Eof, offset)),
            Some(b) => b,
        };

        match b {
            b'.' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::Dot, offset))
            }
            b'(' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::LParen, offset))
            }
            b')' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::RParen, offset))
            }
            b'@' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::At, offset))
            }
            b'^' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::Caret, offset))
            }
            b'~' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::Tilde, offset))
            }
            b'+' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::Plus, offset))
            }
            b'-' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::Minus, offset))
            }
            b'|' => {
                if self.peek_at(1) == Some(b'|') {
                    self.pos += 2;
                    Ok(Token::new(TokenKind::Parallel, offset))
                } else {
                    self.pos += 1;
                    Err(KernelError::lex(offset, "|"))
                }
            }
            b'0'..=b'9' => self.lex_number(offset),
            b if b.is_ascii_alphabetic() => self.lex_identifier(offset),
            other => {
                self.pos += 1;
                Err(KernelError::lex(offset, (other as char).to_string()))
            }
        }
    }

    fn lex_number(&mut self, offset: usize) -> Result<Token> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();
        let value: u64 = text
            .parse()
            .map_err(|_| KernelError::lex(offset, text.to_string()))?;
        Ok(Token::new(TokenKind::Number(value), offset))
    }

    fn lex_identifier(&mut self, offset: usize) -> Result<Token> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();

        if text == "R" {
            return Ok(Token::new(TokenKind::Rotate, offset));
        }
        if text == "D" {
            return Ok(Token::new(TokenKind::Triality, offset));
        }
        if text == "T" {
            return Ok(Token::new(TokenKind::Twist, offset));
        }
        if let Some(g) = Generator::from_str(text) {
            return Ok(Token::new(TokenKind::Generator(g), offset));
        }
        if let Some(rest) = text.strip_prefix('c') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                let n: u32 = rest
                    .parse()
                    .map_err(|_| KernelError::lex(offset, text.to_string()))?;
                return Ok(Token::new(TokenKind::Class(n), offset));
            }
        }
        Err(KernelError::lex(offset, text.to_string()))
    }
}

/// Tokenize `source` into a stream ending with `EOF`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}
