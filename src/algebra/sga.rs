//! The SGA element `Cl(0,7) ⊗ R[Z4] ⊗ R[Z3]` and the four transforms
//! R, D, T, M acting on it.

use super::clifford::Clifford;
use super::group_algebra::{CyclicElement, Z3, Z4};
use crate::error::{KernelError, Result};

/// A triple `(clifford, z4, z3)`, multiplied componentwise under each
/// factor's own product.
#[derive(Debug, Clone, PartialEq)]
pub struct SgaElement {
    pub clifford: Clifford,
    pub z4: CyclicElement,
    pub z3: CyclicElement,
}

impl SgaElement {
    pub fn new(clifford: Clifford, z4: CyclicElement, z3: CyclicElement) -> Result<Self> {
        if z4.n() != 4 {
            return Err(KernelError::type_error("SgaElement::new", "z4 factor must have order 4"));
        }
        if z3.n() != 3 {
            return Err(KernelError::type_error("SgaElement::new", "z3 factor must have order 3"));
        }
        Ok(SgaElement { clifford, z4, z3 })
    }

    /// The rank-1 basis element `r^h ⊗ e_l ⊗ τ^d` for `(h,d,l)`, `l=0`
    /// meaning the Clifford factor is the scalar `1`.
    pub fn rank1(h: i64, d: i64, l: u8) -> Self {
        let clifford = if l == 0 {
            Clifford::scalar(1.0)
        } else {
            Clifford::basis_vector(l)
        };
        SgaElement {
            clifford,
            z4: Z4::power(h),
            z3: Z3::power(d),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        SgaElement {
            clifford: self.clifford.mul(&other.clifford),
            z4: self.z4.mul(&other.z4),
            z3: self.z3.mul(&other.z3),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        SgaElement {
            clifford: self.clifford.add(&other.clifford),
            z4: self.z4.add(&other.z4),
            z3: self.z3.add(&other.z3),
        }
    }

    pub fn scale(&self, k: f64) -> Self {
        SgaElement {
            clifford: self.clifford.scale(k),
            z4: self.z4.scale(k),
            z3: self.z3.scale(k),
        }
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.clifford.approx_eq(&other.clifford)
            && self.z4.approx_eq(&other.z4)
            && self.z3.approx_eq(&other.z3)
    }

    pub fn grade_involution(&self) -> Self {
        SgaElement {
            clifford: self.clifford.grade_involution(),
            z4: self.z4.clone(),
            z3: self.z3.clone(),
        }
    }

    pub fn reversion(&self) -> Self {
        SgaElement {
            clifford: self.clifford.reversion(),
            z4: self.z4.clone(),
            z3: self.z3.clone(),
        }
    }

    pub fn clifford_conjugate(&self) -> Self {
        SgaElement {
            clifford: self.clifford.clifford_conjugate(),
            z4: self.z4.clone(),
            z3: self.z3.clone(),
        }
    }

    /// The current `l` reading of a rank-1 Clifford factor (the scalar `1`
    /// or a single `e_i`), or `None` if the Clifford factor isn't rank-1.
    /// `T` only permutes the Clifford factor (spec.md §4.7/§7: its
    /// `RankError` is scoped to "a non-rank-1 Clifford input"), so `z4`/`z3`
    /// are not required to be pure powers here.
    fn rank1_clifford_index(&self) -> Option<u8> {
        if !self.clifford.is_rank1_unit() {
            return None;
        }
        self.clifford
            .terms()
            .next()
            .map(|(blade, _)| if blade.is_empty() { 0 } else { blade[0] })
    }

    fn require_rank1_clifford(&self, predicate: &'static str) -> Result<u8> {
        self.rank1_clifford_index()
            .ok_or_else(|| KernelError::rank(format!("{} requires a rank-1 Clifford input", predicate)))
    }
}

/// `R^k`: left-multiply by `(1, r^k, τ⁰)`.
pub fn r_transform(e: &SgaElement, k: i64) -> SgaElement {
    let lifter = SgaElement {
        clifford: Clifford::scalar(1.0),
        z4: Z4::power(k),
        z3: Z3::power(0),
    };
    lifter.mul(e)
}

/// `D^k`: right-multiply by `(1, r⁰, τ^k)`.
pub fn d_transform(e: &SgaElement, k: i64) -> SgaElement {
    let lifter = SgaElement {
        clifford: Clifford::scalar(1.0),
        z4: Z4::power(0),
        z3: Z3::power(k),
    };
    e.mul(&lifter)
}

/// `T^k`: permutes the rank-1 Clifford component in an 8-cycle
/// `{scalar, e1, ..., e7}`, passing `z4`/`z3` through unchanged. Only
/// defined when the Clifford factor is rank-1; `z4`/`z3` need not be pure
/// powers.
pub fn t_transform(e: &SgaElement, k: i64) -> Result<SgaElement> {
    let l = e.require_rank1_clifford("T transform")?;
    let new_l = (l as i64 + k).rem_euclid(8) as u8;
    let clifford = if new_l == 0 {
        Clifford::scalar(1.0)
    } else {
        Clifford::basis_vector(new_l)
    };
    Ok(SgaElement {
        clifford,
        z4: e.z4.clone(),
        z3: e.z3.clone(),
    })
}

/// `M`: leaves clifford and z4 unchanged, inverts the z3 component.
pub fn m_transform(e: &SgaElement) -> Result<SgaElement> {
    let z3_inv = e.z3.invert()?;
    Ok(SgaElement {
        clifford: e.clifford.clone(),
        z4: e.z4.clone(),
        z3: z3_inv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_power_four_is_identity() {
        let e = SgaElement::rank1(1, 1, 3);
        let mut x = e.clone();
        for _ in 0..4 {
            x = r_transform(&x, 1);
        }
        assert!(x.approx_eq(&e));
    }

    #[test]
    fn test_d_power_three_is_identity() {
        let e = SgaElement::rank1(1, 1, 3);
        let mut x = e.clone();
        for _ in 0..3 {
            x = d_transform(&x, 1);
        }
        assert!(x.approx_eq(&e));
    }

    #[test]
    fn test_t_power_eight_is_identity() {
        let e = SgaElement::rank1(1, 1, 3);
        let mut x = e.clone();
        for _ in 0..8 {
            x = t_transform(&x, 1).unwrap();
        }
        assert!(x.approx_eq(&e));
    }

    #[test]
    fn test_m_squared_is_identity() {
        let e = SgaElement::rank1(1, 1, 3);
        let once = m_transform(&e).unwrap();
        let twice = m_transform(&once).unwrap();
        assert!(twice.approx_eq(&e));
    }

    #[test]
    fn test_r_and_d_commute() {
        let e = SgaElement::rank1(2, 1, 4);
        let rd = d_transform(&r_transform(&e, 1), 1);
        let dr = r_transform(&d_transform(&e, 1), 1);
        assert!(rd.approx_eq(&dr));
    }

    #[test]
    fn test_r_and_t_commute() {
        let e = SgaElement::rank1(2, 1, 4);
        let rt = t_transform(&r_transform(&e, 1), 1).unwrap();
        let tr = r_transform(&t_transform(&e, 1).unwrap(), 1);
        assert!(rt.approx_eq(&tr));
    }

    #[test]
    fn test_mdm_equals_d_squared() {
        let e = SgaElement::rank1(2, 1, 4);
        let mdm = m_transform(&d_transform(&m_transform(&e).unwrap(), 1).unwrap()).unwrap();
        // recompose: M(D(M(x)))
        let d2 = d_transform(&d_transform(&e, 1), 1);
        assert!(mdm.approx_eq(&d2));
    }

    #[test]
    fn test_t_on_higher_grade_fails() {
        let bivector = SgaElement {
            clifford: Clifford::basis_vector(1).mul(&Clifford::basis_vector(2)),
            z4: Z4::power(0),
            z3: Z3::power(0),
        };
        assert!(t_transform(&bivector, 1).is_err());
    }

    #[test]
    fn test_t_passes_through_non_power_z4() {
        // (1, 1+r, 1) is a valid SGA element (§4.7) whose clifford factor
        // is rank-1 but whose z4 factor is not a pure power; T must still
        // succeed and leave z4/z3 untouched.
        let e = SgaElement {
            clifford: Clifford::basis_vector(3),
            z4: Z4::element([1.0, 1.0, 0.0, 0.0]).unwrap(),
            z3: Z3::power(1),
        };
        let transformed = t_transform(&e, 2).unwrap();
        assert!(transformed.clifford.approx_eq(&Clifford::basis_vector(5)));
        assert!(transformed.z4.approx_eq(&e.z4));
        assert!(transformed.z3.approx_eq(&e.z3));
    }
}
