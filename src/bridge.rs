//! The bridge between the permutation view (classes, R/D/T/M on bytes) and
//! the algebraic view (SGA elements, R/D/T/M on tensors): `lift`, `project`,
//! and the exhaustive commutative-diagram validator.

use crate::algebra::sga::{d_transform, m_transform, r_transform, t_transform, SgaElement};
use crate::class::components::{components_to_class_index, decode_class_index};
use crate::class::transforms::{apply_mirror, apply_rotation, apply_triality, apply_twist};
use crate::error::{KernelError, Result};

/// `lift(c)`: the rank-1 basis element `r^h2 ⊗ e_l ⊗ τ^d` for class `c`.
pub fn lift(c: u8) -> Result<SgaElement> {
    let (h2, d, l) = decode_class_index(c)?;
    Ok(SgaElement::rank1(h2 as i64, d as i64, l))
}

/// `project(E)`: the unique class `E` represents if it is rank-1 in all
/// three factors, else `None`.
pub fn project(e: &SgaElement) -> Option<u8> {
    if !e.clifford.is_rank1_unit() {
        return None;
    }
    let l = e
        .clifford
        .terms()
        .next()
        .map(|(blade, _)| if blade.is_empty() { 0 } else { blade[0] })?;
    let h2 = e.z4.extract_power()? as u8;
    let d = e.z3.extract_power()? as u8;
    Some(components_to_class_index(h2, d, l))
}

/// `isRank1(E)`.
pub fn is_rank1(e: &SgaElement) -> bool {
    project(e).is_some()
}

/// `projectStrict(E)`: raises instead of returning `None`.
pub fn project_strict(e: &SgaElement) -> Result<u8> {
    project(e).ok_or_else(|| KernelError::rank("project requires a rank-1 SGA element"))
}

/// One commutative-diagram check: a transform power applied to class `c`
/// via the algebraic path (lift -> transform -> project) compared against
/// the permutation path (transform directly on components).
#[derive(Debug, Clone)]
pub struct ValidationEntry {
    pub class_index: u8,
    pub transform_label: String,
    pub expected: u8,
    pub actual: Option<u8>,
    pub error: Option<String>,
    pub passed: bool,
}

/// A validator run's totals plus every entry that failed.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: Vec<ValidationEntry>,
}

impl ValidationSummary {
    fn from_entries(entries: Vec<ValidationEntry>) -> Self {
        let total = entries.len();
        let passed = entries.iter().filter(|e| e.passed).count();
        let failed = entries.into_iter().filter(|e| !e.passed).collect();
        ValidationSummary {
            total,
            passed,
            failed,
        }
    }

    fn merge(summaries: Vec<ValidationSummary>) -> Self {
        let mut total = 0;
        let mut passed = 0;
        let mut failed = Vec::new();
        for s in summaries {
            total += s.total;
            passed += s.passed;
            failed.extend(s.failed);
        }
        ValidationSummary {
            total,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The 96 `project(lift(c)) = c` round-trip checks.
pub fn validate_lift_project_roundtrip() -> ValidationSummary {
    let entries = (0u8..=95)
        .map(|c| {
            let lifted = lift(c).expect("c in range");
            let actual = project(&lifted);
            let passed = actual == Some(c);
            ValidationEntry {
                class_index: c,
                transform_label: "lift/project".to_string(),
                expected: c,
                actual,
                error: None,
                passed,
            }
        })
        .collect();
    ValidationSummary::from_entries(entries)
}

/// `R^k` for `k in [1..3]`, all 96 classes: 288 checks.
pub fn validate_r() -> ValidationSummary {
    let mut entries = Vec::with_capacity(288);
    for k in 1i32..=3 {
        for c in 0u8..=95 {
            let components = decode_class_index(c).expect("c in range");
            let expected = components_to_class_index2(apply_rotation(components, k));
            let lifted = lift(c).expect("c in range");
            let actual = project(&r_transform(&lifted, k as i64));
            entries.push(ValidationEntry {
                class_index: c,
                transform_label: format!("R^{}", k),
                expected,
                actual,
                error: None,
                passed: actual == Some(expected),
            });
        }
    }
    ValidationSummary::from_entries(entries)
}

/// `D^k` for `k in [1..2]`, all 96 classes: 192 checks.
pub fn validate_d() -> ValidationSummary {
    let mut entries = Vec::with_capacity(192);
    for k in 1i32..=2 {
        for c in 0u8..=95 {
            let components = decode_class_index(c).expect("c in range");
            let expected = components_to_class_index2(apply_triality(components, k));
            let lifted = lift(c).expect("c in range");
            let actual = project(&d_transform(&lifted, k as i64));
            entries.push(ValidationEntry {
                class_index: c,
                transform_label: format!("D^{}", k),
                expected,
                actual,
                error: None,
                passed: actual == Some(expected),
            });
        }
    }
    ValidationSummary::from_entries(entries)
}

/// `T^k` for `k in [1..7]`, all 96 classes: 672 checks.
pub fn validate_t() -> ValidationSummary {
    let mut entries = Vec::with_capacity(672);
    for k in 1i32..=7 {
        for c in 0u8..=95 {
            let components = decode_class_index(c).expect("c in range");
            let expected = components_to_class_index2(apply_twist(components, k));
            let lifted = lift(c).expect("c in range");
            let (actual, error) = match t_transform(&lifted, k as i64) {
                Ok(transformed) => (project(&transformed), None),
                Err(e) => (None, Some(e.to_string())),
            };
            entries.push(ValidationEntry {
                class_index: c,
                transform_label: format!("T^{}", k),
                expected,
                actual,
                error,
                passed: actual == Some(expected),
            });
        }
    }
    ValidationSummary::from_entries(entries)
}

/// `M`, all 96 classes: 96 checks.
pub fn validate_m() -> ValidationSummary {
    let mut entries = Vec::with_capacity(96);
    for c in 0u8..=95 {
        let components = decode_class_index(c).expect("c in range");
        let expected = components_to_class_index2(apply_mirror(components));
        let lifted = lift(c).expect("c in range");
        let (actual, error) = match m_transform(&lifted) {
            Ok(transformed) => (project(&transformed), None),
            Err(e) => (None, Some(e.to_string())),
        };
        entries.push(ValidationEntry {
            class_index: c,
            transform_label: "M".to_string(),
            expected,
            actual,
            error,
            passed: actual == Some(expected),
        });
    }
    ValidationSummary::from_entries(entries)
}

fn components_to_class_index2(components: (u8, u8, u8)) -> u8 {
    components_to_class_index(components.0, components.1, components.2)
}

/// All 1,344 checks: 96 (lift/project) + 288 (R) + 192 (D) + 672 (T) + 96
/// (M).
pub fn validate() -> ValidationSummary {
    ValidationSummary::merge(vec![
        validate_lift_project_roundtrip(),
        validate_r(),
        validate_d(),
        validate_t(),
        validate_m(),
    ])
}
