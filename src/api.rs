//! The kernel's public façade.
//!
//! Everything here is a thin wrapper: input-guarding plus delegation to
//! `class`, `lexer`, `parser`, `evaluator`, `algebra`, and `bridge`. No
//! algorithm lives in this module.

use crate::algebra::fano;
use crate::algebra::sga::{self, SgaElement};
use crate::bridge;
use crate::class::{self, BeltAddress, DTransformResult};
use crate::error::Result;
use crate::evaluator::{self, EvaluateResult, LiteralOutput, OperationalOutput};
use crate::format;
use crate::parser::{self, Node};

// ---------------------------------------------------------------------
// Parsing and evaluation
// ---------------------------------------------------------------------

/// `parse(source)`.
pub fn parse(source: &str) -> Result<Node> {
    parser::parse(source)
}

/// `evaluateBytes(source)`.
pub fn evaluate_bytes(source: &str) -> Result<LiteralOutput> {
    let ast = parser::parse(source)?;
    evaluator::evaluate_literal(&ast)
}

/// `evaluateWords(source)`.
pub fn evaluate_words(source: &str) -> Result<OperationalOutput> {
    let ast = parser::parse(source)?;
    evaluator::evaluate_operational(&ast)
}

/// `evaluate(source)`: both backends plus the AST.
pub fn evaluate(source: &str) -> Result<EvaluateResult> {
    evaluator::evaluate(source)
}

/// `prettyPrint(source)`.
pub fn pretty_print(source: &str) -> Result<String> {
    let result = evaluator::evaluate(source)?;
    Ok(format::pretty_print(&result))
}

// ---------------------------------------------------------------------
// Class utilities
// ---------------------------------------------------------------------

pub use class::{
    all_classes, are_equivalent as equivalent, byte_class_mapping, canonical_byte, class_index,
    class_info, get_all_triality_orbits, get_equivalence_class as equivalence_class,
    get_triality_orbit,
};

/// `beltAddress(page, byte)`.
pub fn belt_address(page: u8, byte: u8) -> Result<BeltAddress> {
    class::compute_belt_address(page, byte)
}

/// `decodeBeltAddress(address)`.
pub fn decode_belt_address(address: u16) -> Result<BeltAddress> {
    class::decompose_belt_address(address)
}

/// `applyDTransform(c, k)`.
pub fn apply_d_transform(c: u8, k: i32) -> Result<DTransformResult> {
    let components = class::decode_class_index(c)?;
    Ok(class::apply_d_transform(
        components,
        |comps| class::components_to_class_index(comps.0, comps.1, comps.2),
        c,
        k,
    ))
}

pub use class::{ClassInfo, TrialityOrbit};

// ---------------------------------------------------------------------
// SGA surface
// ---------------------------------------------------------------------

/// `lift(c)`.
pub fn lift(c: u8) -> Result<SgaElement> {
    bridge::lift(c)
}

/// `project(E)`.
pub fn project(e: &SgaElement) -> Option<u8> {
    bridge::project(e)
}

/// `projectStrict(E)`.
pub fn project_strict(e: &SgaElement) -> Result<u8> {
    bridge::project_strict(e)
}

/// `isRank1(E)`.
pub fn is_rank1(e: &SgaElement) -> bool {
    bridge::is_rank1(e)
}

/// `R(E, k?)`: defaults `k` to 1 when omitted.
pub fn transform_r(e: &SgaElement, k: Option<i64>) -> SgaElement {
    sga::r_transform(e, k.unwrap_or(1))
}

/// `D(E, k?)`.
pub fn transform_d(e: &SgaElement, k: Option<i64>) -> SgaElement {
    sga::d_transform(e, k.unwrap_or(1))
}

/// `T(E, k?)`.
pub fn transform_t(e: &SgaElement, k: Option<i64>) -> Result<SgaElement> {
    sga::t_transform(e, k.unwrap_or(1))
}

/// `M(E)`.
pub fn transform_m(e: &SgaElement) -> Result<SgaElement> {
    sga::m_transform(e)
}

pub use bridge::{validate, validate_d, validate_m, validate_r, validate_t, ValidationSummary};

// ---------------------------------------------------------------------
// Octonion / Fano surface
// ---------------------------------------------------------------------

pub use fano::{
    cayley_product, conjugate, cross_product, get_lines_containing, inner_product, is_fano_line,
    norm, norm_squared, random_octonion, verify as verify_fano, verify_alternativity,
    verify_norm_multiplicativity, LINES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_bytes_matches_scenario_one() {
        let out = evaluate_bytes("mark@c21").unwrap();
        assert_eq!(out.bytes, vec![0x2A]);
        assert_eq!(out.addresses, None);
    }

    #[test]
    fn test_evaluate_words_matches_scenario_eleven() {
        let out = evaluate_words("mark@c01 || mark@c02").unwrap();
        assert_eq!(
            out.words,
            vec!["\u{2297}_begin", "mark", "\u{2297}_sep", "mark", "\u{2297}_end"]
        );
    }

    #[test]
    fn test_pretty_print_contains_both_backends() {
        let s = pretty_print("mark@c21").unwrap();
        assert!(s.contains("literal:"));
        assert!(s.contains("operational:"));
    }

    #[test]
    fn test_class_index_range_error_surfaces() {
        assert!(class_info(255).is_ok());
    }

    #[test]
    fn test_apply_d_transform_roundtrips() {
        let forward = apply_d_transform(5, 1).unwrap();
        let back = apply_d_transform(forward.new_class, -1).unwrap();
        assert_eq!(back.new_class, 5);
    }

    #[test]
    fn test_lift_project_roundtrip() {
        for c in 0u8..=95 {
            let e = lift(c).unwrap();
            assert_eq!(project(&e), Some(c));
        }
    }

    #[test]
    fn test_transform_r_default_power_is_one() {
        let e = lift(0).unwrap();
        let once = transform_r(&e, None);
        let explicit = transform_r(&e, Some(1));
        assert_eq!(once, explicit);
    }

    #[test]
    fn test_validate_all_pass() {
        assert!(validate().all_passed());
    }

    #[test]
    fn test_fano_surface_is_consistent() {
        assert!(verify_fano());
        assert!(is_fano_line(1, 2, 4));
    }
}
