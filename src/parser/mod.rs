//! Recursive-descent parser for the sigil grammar.
//!
//! ```text
//! phrase     := transform "@" par | par
//! par        := seq ("||" seq)*
//! seq        := term ("." term)*
//! term       := op | "(" par ")" | transform "@" par
//! op         := GENERATOR "@" sigil
//! sigil      := CLASS [ "^" [ROTATE | TRIALITY | TWIST] ("+"|"-") NUMBER ] [ "~" ] [ "@" NUMBER ]
//! transform  := [ROTATE ("+"|"-") NUMBER] [TRIALITY ("+"|"-") NUMBER] [TWIST ("+"|"-") NUMBER] [TILDE]
//! ```

pub mod ast;

pub use ast::{Node, Sigil};

use crate::class::Transform;
use crate::error::{KernelError, Result};
use crate::lexer::{tokenize, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect_eof(&mut self) -> Result<()> {
        let tok = self.peek();
        if tok.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(KernelError::parse(tok.offset, "EOF", tok.kind_name()))
        }
    }

    fn expect(&mut self, expected: &'static str, matches: impl Fn(&TokenKind) -> bool) -> Result<Token> {
        let tok = self.peek().clone();
        if matches(&tok.kind) {
            Ok(self.advance())
        } else {
            Err(KernelError::parse(tok.offset, expected, tok.kind_name()))
        }
    }

    /// Parses the top-level phrase and checks that all tokens were
    /// consumed.
    pub fn parse_phrase(&mut self) -> Result<Node> {
        let node = self.parse_phrase_inner()?;
        self.expect_eof()?;
        Ok(node)
    }

    fn parse_phrase_inner(&mut self) -> Result<Node> {
        if self.transform_prefix_present() {
            let transform = self.parse_transform()?;
            self.expect("AT", |k| *k == TokenKind::At)?;
            let body = self.parse_par()?;
            Ok(Node::Transformed {
                transform,
                body: Box::new(body),
            })
        } else {
            self.parse_par()
        }
    }

    fn parse_par(&mut self) -> Result<Node> {
        let mut branches = vec![self.parse_seq()?];
        while self.peek().kind == TokenKind::Parallel {
            self.advance();
            branches.push(self.parse_seq()?);
        }
        Ok(Node::Parallel(branches))
    }

    fn parse_seq(&mut self) -> Result<Node> {
        let mut terms = vec![self.parse_term()?];
        while self.peek().kind == TokenKind::Dot {
            self.advance();
            terms.push(self.parse_term()?);
        }
        if terms.len() == 1 {
            Ok(terms.into_iter().next().unwrap())
        } else {
            Ok(Node::Sequential(terms))
        }
    }

    fn parse_term(&mut self) -> Result<Node> {
        match &self.peek().kind {
            TokenKind::Generator(_) => self.parse_op(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_par()?;
                self.expect("RPAREN", |k| *k == TokenKind::RParen)?;
                Ok(Node::Group(Box::new(inner)))
            }
            _ => {
                if self.transform_prefix_present() {
                    let transform = self.parse_transform()?;
                    self.expect("AT", |k| *k == TokenKind::At)?;
                    let body = self.parse_par()?;
                    Ok(Node::Transformed {
                        transform,
                        body: Box::new(body),
                    })
                } else {
                    let tok = self.peek().clone();
                    Err(KernelError::parse(tok.offset, "GENERATOR or LPAREN or transform", tok.kind_name()))
                }
            }
        }
    }

    fn parse_op(&mut self) -> Result<Node> {
        let gen_tok = self.expect("GENERATOR", |k| matches!(k, TokenKind::Generator(_)))?;
        let generator = match gen_tok.kind {
            TokenKind::Generator(g) => g,
            _ => unreachable!(),
        };
        self.expect("AT", |k| *k == TokenKind::At)?;
        let sigil = self.parse_sigil()?;
        Ok(Node::Operation { generator, sigil })
    }

    fn parse_sigil(&mut self) -> Result<Sigil> {
        let class_tok = self.expect("CLASS", |k| matches!(k, TokenKind::Class(_)))?;
        let class_n = match class_tok.kind {
            TokenKind::Class(n) => n,
            _ => unreachable!(),
        };
        if class_n > 95 {
            return Err(KernelError::range("class index", class_n as i64, 0, 95));
        }
        let mut sigil = Sigil::new(class_n as u8);

        if self.peek().kind == TokenKind::Caret {
            self.advance();
            // [ROTATE | TRIALITY | TWIST], defaulting to twist when absent.
            let axis = match self.peek().kind {
                TokenKind::Rotate => {
                    self.advance();
                    Axis::Rotate
                }
                TokenKind::Triality => {
                    self.advance();
                    Axis::Triality
                }
                TokenKind::Twist => {
                    self.advance();
                    Axis::Twist
                }
                _ => Axis::Twist,
            };
            let signed = self.parse_signed_number()?;
            match axis {
                Axis::Rotate => sigil.rotate = signed,
                Axis::Triality => sigil.triality = signed,
                Axis::Twist => sigil.twist = signed,
            }
        }

        if self.peek().kind == TokenKind::Tilde {
            self.advance();
            sigil.mirror = true;
        }

        if self.peek().kind == TokenKind::At {
            self.advance();
            let num_tok = self.expect("NUMBER", |k| matches!(k, TokenKind::Number(_)))?;
            let page = match num_tok.kind {
                TokenKind::Number(n) => n,
                _ => unreachable!(),
            };
            if page > 47 {
                return Err(KernelError::range("page", page as i64, 0, 47));
            }
            sigil.page = Some(page as u8);
        }

        Ok(sigil)
    }

    /// Whether at least one of R/D/T/tilde is present at the current
    /// position — the rule that makes a transform prefix recognized at
    /// all.
    fn transform_prefix_present(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Rotate | TokenKind::Triality | TokenKind::Twist | TokenKind::Tilde
        )
    }

    fn parse_transform(&mut self) -> Result<Transform> {
        let mut xf = Transform::default();
        if self.peek().kind == TokenKind::Rotate {
            self.advance();
            xf.r = self.parse_signed_number()?;
        }
        if self.peek().kind == TokenKind::Triality {
            self.advance();
            xf.d = self.parse_signed_number()?;
        }
        if self.peek().kind == TokenKind::Twist {
            self.advance();
            xf.t = self.parse_signed_number()?;
        }
        if self.peek().kind == TokenKind::Tilde {
            self.advance();
            xf.m = true;
        }
        Ok(xf)
    }

    fn parse_signed_number(&mut self) -> Result<i32> {
        let sign = match self.peek().kind {
            TokenKind::Plus => {
                self.advance();
                1i32
            }
            TokenKind::Minus => {
                self.advance();
                -1i32
            }
            _ => {
                let tok = self.peek().clone();
                return Err(KernelError::parse(tok.offset, "PLUS or MINUS", tok.kind_name()));
            }
        };
        let num_tok = self.expect("NUMBER", |k| matches!(k, TokenKind::Number(_)))?;
        let n = match num_tok.kind {
            TokenKind::Number(n) => n,
            _ => unreachable!(),
        };
        Ok(sign * n as i32)
    }
}

enum Axis {
    Rotate,
    Triality,
    Twist,
}

/// Parse `source` into a `Phrase` AST.
pub fn parse(source: &str) -> Result<Node> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse_phrase()
}
