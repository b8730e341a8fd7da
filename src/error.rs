//! Kernel error taxonomy.
//!
//! Every fallible operation in the kernel returns `Result<T, KernelError>`.
//! Mirrors the shape of a hand-rolled error enum (no `thiserror`): a plain
//! `#[derive(Debug, Clone, PartialEq)]` enum with a manual `Display` and
//! `std::error::Error` impl.

use std::fmt;

/// The six error kinds named in the kernel's error taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// An unexpected character or identifier during lexing.
    Lex { offset: usize, lexeme: String },

    /// A token-kind mismatch during parsing.
    Parse {
        offset: usize,
        expected: String,
        got: String,
    },

    /// A class index, page, byte, or belt address fell outside its valid
    /// range.
    Range {
        what: &'static str,
        value: i64,
        low: i64,
        high: i64,
    },

    /// An SGA transform or octonion verifier received a value that is not
    /// the kind of algebraic object it expects.
    Type { predicate: &'static str, detail: String },

    /// Group-algebra inversion was applied to a non-invertible element.
    Singular { detail: String },

    /// `T` or `project` was invoked on a non-rank-1 Clifford input.
    Rank { detail: String },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Lex { offset, lexeme } => {
                write!(f, "unexpected '{}' at offset {}", lexeme, offset)
            }
            KernelError::Parse {
                offset,
                expected,
                got,
            } => write!(
                f,
                "Expected {} but got {} at offset {}",
                expected, got, offset
            ),
            KernelError::Range {
                what,
                value,
                low,
                high,
            } => write!(
                f,
                "{} {} out of range [{}..{}]",
                what, value, low, high
            ),
            KernelError::Type { predicate, detail } => {
                write!(f, "type error in {}: {}", predicate, detail)
            }
            KernelError::Singular { detail } => write!(f, "element is not invertible: {}", detail),
            KernelError::Rank { detail } => write!(f, "rank error: {}", detail),
        }
    }
}

impl std::error::Error for KernelError {}

impl KernelError {
    pub fn range(what: &'static str, value: i64, low: i64, high: i64) -> Self {
        KernelError::Range {
            what,
            value,
            low,
            high,
        }
    }

    pub fn lex(offset: usize, lexeme: impl Into<String>) -> Self {
        KernelError::Lex {
            offset,
            lexeme: lexeme.into(),
        }
    }

    pub fn parse(offset: usize, expected: impl Into<String>, got: impl Into<String>) -> Self {
        KernelError::Parse {
            offset,
            expected: expected.into(),
            got: got.into(),
        }
    }

    pub fn type_error(predicate: &'static str, detail: impl Into<String>) -> Self {
        KernelError::Type {
            predicate,
            detail: detail.into(),
        }
    }

    pub fn singular(detail: impl Into<String>) -> Self {
        KernelError::Singular {
            detail: detail.into(),
        }
    }

    pub fn rank(detail: impl Into<String>) -> Self {
        KernelError::Rank {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display() {
        let e = KernelError::range("class index", 96, 0, 95);
        assert_eq!(e.to_string(), "class index 96 out of range [0..95]");
    }

    #[test]
    fn test_parse_display() {
        let e = KernelError::parse(7, "EOF", "CLASS");
        assert_eq!(e.to_string(), "Expected EOF but got CLASS at offset 7");
    }

    #[test]
    fn test_lex_display() {
        let e = KernelError::lex(3, "|");
        assert_eq!(e.to_string(), "unexpected '|' at offset 3");
    }
}
