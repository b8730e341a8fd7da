//! The dual-backend evaluator: each AST is walked twice, by two
//! independent pure backends.

pub mod literal;
pub mod operational;

pub use literal::{evaluate_literal, LiteralOutput};
pub use operational::{evaluate_operational, OperationalOutput};

use crate::error::Result;
use crate::parser::{parse, Node};

/// The combined result of evaluating a phrase with both backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluateResult {
    pub ast: Node,
    pub literal: LiteralOutput,
    pub operational: OperationalOutput,
}

/// `evaluate(source)`: parse then run both backends.
pub fn evaluate(source: &str) -> Result<EvaluateResult> {
    let ast = parse(source)?;
    let literal = evaluate_literal(&ast)?;
    let operational = evaluate_operational(&ast)?;
    Ok(EvaluateResult {
        ast,
        literal,
        operational,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_combines_both_backends() {
        let result = evaluate("mark@c21").unwrap();
        assert_eq!(result.literal.bytes, vec![0x2A]);
        assert_eq!(result.operational.words, vec!["mark"]);
    }
}
