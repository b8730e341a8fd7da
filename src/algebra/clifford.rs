//! Cl(0,7): the sparse multivector algebra over seven generators e1..e7.
//!
//! A blade is represented as a sorted, deduplicated `Vec<u8>` of indices in
//! `[1..7]`; the empty vector is the scalar blade `"1"`. The implementation
//! adopts `e_i^2 = +1` (Cl(7,0) in the usual signature convention); see
//! DESIGN.md for why this convention was chosen over the alternative.

use std::collections::BTreeMap;

pub const EPSILON: f64 = 1e-10;

/// A blade: sorted, deduplicated generator indices. `[]` is the scalar.
pub type Blade = Vec<u8>;

/// A sparse multivector: blade -> real coefficient, with near-zero
/// coefficients never stored.
#[derive(Debug, Clone, Default)]
pub struct Clifford {
    terms: BTreeMap<Blade, f64>,
}

impl Clifford {
    pub fn zero() -> Self {
        Clifford {
            terms: BTreeMap::new(),
        }
    }

    pub fn scalar(x: f64) -> Self {
        let mut c = Clifford::zero();
        c.set(Vec::new(), x);
        c
    }

    /// The basis vector `e_i`, `i in [1..7]`.
    pub fn basis_vector(i: u8) -> Self {
        let mut c = Clifford::zero();
        c.set(vec![i], 1.0);
        c
    }

    /// Read-only access to the stored (blade, coefficient) pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&Blade, &f64)> {
        self.terms.iter()
    }

    pub fn coefficient(&self, blade: &[u8]) -> f64 {
        self.terms.get(blade).copied().unwrap_or(0.0)
    }

    fn set(&mut self, blade: Blade, coeff: f64) {
        if coeff.abs() < EPSILON {
            self.terms.remove(&blade);
        } else {
            self.terms.insert(blade, coeff);
        }
    }

    fn add_to(&mut self, blade: Blade, coeff: f64) {
        let existing = self.terms.get(&blade).copied().unwrap_or(0.0);
        self.set(blade, existing + coeff);
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn add(&self, other: &Clifford) -> Clifford {
        let mut result = self.clone();
        for (blade, coeff) in other.terms.iter() {
            result.add_to(blade.clone(), *coeff);
        }
        result
    }

    pub fn sub(&self, other: &Clifford) -> Clifford {
        self.add(&other.scale(-1.0))
    }

    pub fn scale(&self, k: f64) -> Clifford {
        let mut result = Clifford::zero();
        for (blade, coeff) in self.terms.iter() {
            result.set(blade.clone(), coeff * k);
        }
        result
    }

    pub fn neg(&self) -> Clifford {
        self.scale(-1.0)
    }

    /// Sorts `indices`, annihilating adjacent duplicate generators (sign
    /// +1 under `e_i^2 = +1`) and flipping sign on each transposition of
    /// distinct out-of-order generators. Returns the simplified blade and
    /// its accumulated sign.
    fn simplify(indices: &[u8]) -> (Blade, f64) {
        let mut result: Blade = Vec::with_capacity(indices.len());
        let mut sign = 1.0;
        for &idx in indices {
            let mut pos = result.len();
            while pos > 0 && result[pos - 1] > idx {
                pos -= 1;
                sign *= -1.0;
            }
            if pos > 0 && result[pos - 1] == idx {
                result.remove(pos - 1);
            } else {
                result.insert(pos, idx);
            }
        }
        (result, sign)
    }

    /// The geometric product.
    pub fn mul(&self, other: &Clifford) -> Clifford {
        let mut result = Clifford::zero();
        for (blade_a, coeff_a) in self.terms.iter() {
            for (blade_b, coeff_b) in other.terms.iter() {
                let mut concatenated = blade_a.clone();
                concatenated.extend(blade_b.iter().copied());
                let (blade, sign) = Clifford::simplify(&concatenated);
                result.add_to(blade, coeff_a * coeff_b * sign);
            }
        }
        result
    }

    /// Grade involution: flips sign on odd-grade blades.
    pub fn grade_involution(&self) -> Clifford {
        let mut result = Clifford::zero();
        for (blade, coeff) in self.terms.iter() {
            let sign = if blade.len() % 2 == 1 { -1.0 } else { 1.0 };
            result.set(blade.clone(), coeff * sign);
        }
        result
    }

    /// Reversion: sign `(-1)^(k(k-1)/2)` on grade-`k` blades.
    pub fn reversion(&self) -> Clifford {
        let mut result = Clifford::zero();
        for (blade, coeff) in self.terms.iter() {
            let k = blade.len() as i64;
            let sign = if (k * (k - 1) / 2) % 2 == 0 { 1.0 } else { -1.0 };
            result.set(blade.clone(), coeff * sign);
        }
        result
    }

    /// Clifford conjugation: grade involution composed with reversion.
    pub fn clifford_conjugate(&self) -> Clifford {
        self.grade_involution().reversion()
    }

    /// Keeps only blades of the given grade.
    pub fn grade_projection(&self, grade: usize) -> Clifford {
        let mut result = Clifford::zero();
        for (blade, coeff) in self.terms.iter() {
            if blade.len() == grade {
                result.set(blade.clone(), *coeff);
            }
        }
        result
    }

    pub fn scalar_part(&self) -> f64 {
        self.coefficient(&[])
    }

    pub fn vector_part(&self) -> Clifford {
        self.grade_projection(1)
    }

    /// Inner product of two vectors: `scalar_part((uv + vu) / 2)`.
    pub fn inner_product(&self, other: &Clifford) -> f64 {
        let uv = self.mul(other);
        let vu = other.mul(self);
        uv.add(&vu).scale(0.5).scalar_part()
    }

    pub fn approx_eq(&self, other: &Clifford) -> bool {
        let mut blades: Vec<&Blade> = self.terms.keys().chain(other.terms.keys()).collect();
        blades.sort();
        blades.dedup();
        blades
            .into_iter()
            .all(|b| (self.coefficient(b) - other.coefficient(b)).abs() < EPSILON)
    }

    /// Whether this element is a single unit blade (rank-1 support): the
    /// scalar `1`, or `e_i` alone with coefficient 1. Excludes higher-grade
    /// blades like `e1e2` even when they are the sole stored term.
    pub fn is_rank1_unit(&self) -> bool {
        self.terms.len() == 1
            && self
                .terms
                .iter()
                .next()
                .map(|(blade, c)| blade.len() <= 1 && (c - 1.0).abs() < EPSILON)
                .unwrap_or(false)
    }
}

impl PartialEq for Clifford {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_vector_squares_to_one() {
        let e1 = Clifford::basis_vector(1);
        let sq = e1.mul(&e1);
        assert!(sq.approx_eq(&Clifford::scalar(1.0)));
    }

    #[test]
    fn test_anticommutation() {
        let e1 = Clifford::basis_vector(1);
        let e2 = Clifford::basis_vector(2);
        let e12 = e1.mul(&e2);
        let e21 = e2.mul(&e1);
        assert!(e12.approx_eq(&e21.neg()));
    }

    #[test]
    fn test_triple_product_sign() {
        // e1 e2 e1 = -e2 under e_i^2 = +1.
        let e1 = Clifford::basis_vector(1);
        let e2 = Clifford::basis_vector(2);
        let result = e1.mul(&e2).mul(&e1);
        assert!(result.approx_eq(&e2.neg()));
    }

    #[test]
    fn test_four_annihilations_give_scalar() {
        let e1 = Clifford::basis_vector(1);
        let result = e1.mul(&e1).mul(&e1).mul(&e1);
        assert!(result.approx_eq(&Clifford::scalar(1.0)));
    }

    #[test]
    fn test_grade_involution_odd_flips() {
        let e1 = Clifford::basis_vector(1);
        assert!(e1.grade_involution().approx_eq(&e1.neg()));
        let one = Clifford::scalar(1.0);
        assert!(one.grade_involution().approx_eq(&one));
    }

    #[test]
    fn test_small_coefficients_dropped() {
        let mut c = Clifford::scalar(1.0);
        c = c.add(&Clifford::scalar(-1.0));
        assert!(c.is_zero());
    }

    #[test]
    fn test_inner_product_orthogonal_basis() {
        let e1 = Clifford::basis_vector(1);
        let e2 = Clifford::basis_vector(2);
        assert!((e1.inner_product(&e2)).abs() < EPSILON);
        assert!((e1.inner_product(&e1) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_is_rank1_unit() {
        assert!(Clifford::scalar(1.0).is_rank1_unit());
        assert!(Clifford::basis_vector(3).is_rank1_unit());
        assert!(!Clifford::scalar(2.0).is_rank1_unit());
        assert!(!Clifford::zero().is_rank1_unit());
    }

    #[test]
    fn test_is_rank1_unit_rejects_higher_grade() {
        let e12 = Clifford::basis_vector(1).mul(&Clifford::basis_vector(2));
        assert!(!e12.is_rank1_unit(), "e1e2 is a single unit term but grade 2, not rank-1");
    }
}
