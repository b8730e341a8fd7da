//! Group algebras R[Z4] and R[Z3]: fixed-length real vectors under cyclic
//! convolution. Both groups share one implementation parameterized by
//! their order `n` (4 or 3); [`Z4`] and [`Z3`] are thin constructors over
//! [`CyclicElement`].

use crate::error::{KernelError, Result};

pub const EPSILON: f64 = 1e-10;

/// An element of `R[Z_n]`: a length-`n` real vector indexed by group
/// element power.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicElement {
    n: usize,
    coeffs: Vec<f64>,
}

impl CyclicElement {
    fn new_checked(n: usize, coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.len() != n {
            return Err(KernelError::type_error(
                "CyclicElement::new",
                format!("expected {} coefficients, got {}", n, coeffs.len()),
            ));
        }
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(KernelError::type_error(
                "CyclicElement::new",
                "coefficients must be finite numbers",
            ));
        }
        Ok(CyclicElement { n, coeffs })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The unit vector at group element power `k`, reduced into
    /// `[0..n)`.
    pub fn unit_power(n: usize, k: i64) -> Self {
        let idx = k.rem_euclid(n as i64) as usize;
        let mut coeffs = vec![0.0; n];
        coeffs[idx] = 1.0;
        CyclicElement { n, coeffs }
    }

    pub fn identity(n: usize) -> Self {
        Self::unit_power(n, 0)
    }

    pub fn generator(n: usize) -> Self {
        Self::unit_power(n, 1)
    }

    pub fn add(&self, other: &Self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(a, b)| a + b)
            .collect();
        CyclicElement { n: self.n, coeffs }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    pub fn scale(&self, k: f64) -> Self {
        CyclicElement {
            n: self.n,
            coeffs: self.coeffs.iter().map(|a| a * k).collect(),
        }
    }

    /// Cyclic convolution: `(a*b)_k = sum_i a_i * b_{(k-i) mod n}`.
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.n;
        let mut result = vec![0.0; n];
        for k in 0..n {
            let mut acc = 0.0;
            for i in 0..n {
                let j = (k + n - i) % n;
                acc += self.coeffs[i] * other.coeffs[j];
            }
            result[k] = acc;
        }
        CyclicElement { n, coeffs: result }
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    /// `k` if this element is exactly (within tolerance) the unit vector
    /// at index `k`; `None` otherwise.
    pub fn extract_power(&self) -> Option<usize> {
        for k in 0..self.n {
            if self.approx_eq(&Self::unit_power(self.n, k as i64)) {
                return Some(k);
            }
        }
        None
    }

    /// Fast path for pure powers, else general inversion via the
    /// circulant matrix and Gaussian elimination with partial pivoting.
    pub fn invert(&self) -> Result<Self> {
        if let Some(k) = self.extract_power() {
            let inv_k = (self.n - k) % self.n;
            return Ok(Self::unit_power(self.n, inv_k as i64));
        }
        self.invert_general()
    }

    /// Builds the `n x n` circulant matrix `M` representing
    /// "multiply by self" (`M[i][j] = coeffs[(i-j) mod n]`) and solves
    /// `M x = e0` via Gaussian elimination with partial pivoting.
    fn invert_general(&self) -> Result<Self> {
        let n = self.n;
        let mut augmented: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let mut row: Vec<f64> = (0..n)
                    .map(|j| self.coeffs[(i + n - j) % n])
                    .collect();
                row.push(if i == 0 { 1.0 } else { 0.0 });
                row
            })
            .collect();

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| {
                    augmented[a][col]
                        .abs()
                        .partial_cmp(&augmented[b][col].abs())
                        .unwrap()
                })
                .unwrap();
            if augmented[pivot_row][col].abs() < EPSILON {
                return Err(KernelError::singular(format!(
                    "R[Z{}] element {:?} has no multiplicative inverse",
                    n, self.coeffs
                )));
            }
            augmented.swap(col, pivot_row);

            let pivot = augmented[col][col];
            for v in augmented[col].iter_mut() {
                *v /= pivot;
            }
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = augmented[row][col];
                if factor != 0.0 {
                    for c in 0..=n {
                        augmented[row][c] -= factor * augmented[col][c];
                    }
                }
            }
        }

        let coeffs = (0..n).map(|i| augmented[i][n]).collect();
        CyclicElement::new_checked(n, coeffs)
    }
}

/// Constructors for `R[Z4]`.
pub struct Z4;
impl Z4 {
    pub fn element(coeffs: [f64; 4]) -> Result<CyclicElement> {
        CyclicElement::new_checked(4, coeffs.to_vec())
    }
    pub fn identity() -> CyclicElement {
        CyclicElement::identity(4)
    }
    pub fn generator() -> CyclicElement {
        CyclicElement::generator(4)
    }
    pub fn power(k: i64) -> CyclicElement {
        CyclicElement::unit_power(4, k)
    }
}

/// Constructors for `R[Z3]`.
pub struct Z3;
impl Z3 {
    pub fn element(coeffs: [f64; 3]) -> Result<CyclicElement> {
        CyclicElement::new_checked(3, coeffs.to_vec())
    }
    pub fn identity() -> CyclicElement {
        CyclicElement::identity(3)
    }
    pub fn generator() -> CyclicElement {
        CyclicElement::generator(3)
    }
    pub fn power(k: i64) -> CyclicElement {
        CyclicElement::unit_power(3, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z4_power_cycle() {
        let r = Z4::generator();
        let mut x = Z4::identity();
        for _ in 0..4 {
            x = x.mul(&r);
        }
        assert!(x.approx_eq(&Z4::identity()));
    }

    #[test]
    fn test_z3_power_cycle() {
        let t = Z3::generator();
        let mut x = Z3::identity();
        for _ in 0..3 {
            x = x.mul(&t);
        }
        assert!(x.approx_eq(&Z3::identity()));
    }

    #[test]
    fn test_fast_path_inversion() {
        let r2 = Z4::power(2);
        let inv = r2.invert().unwrap();
        assert!(inv.approx_eq(&Z4::power(2))); // r^2 inverse is r^2 in Z4
        assert!(r2.mul(&inv).approx_eq(&Z4::identity()));
    }

    #[test]
    fn test_general_inversion() {
        // 1 + r in Z4: invertible (check against brute-force convolution).
        let x = Z4::element([1.0, 1.0, 0.0, 0.0]).unwrap();
        let inv = x.invert().unwrap();
        assert!(x.mul(&inv).approx_eq(&Z4::identity()));
    }

    #[test]
    fn test_singular_element_rejected() {
        // 1 + r^2 in Z4 is singular: (1+r^2)(1-r^2) = 1 - r^4 = 0, and
        // 1+r^2 is a zero divisor.
        let x = Z4::element([1.0, 0.0, 1.0, 0.0]).unwrap();
        assert!(x.invert().is_err());
    }

    #[test]
    fn test_singular_z3_element_rejected() {
        // 1 + t + t^2 in Z3 sums the full group algebra idempotent, which
        // is a zero divisor.
        let x = Z3::element([1.0, 1.0, 1.0]).unwrap();
        assert!(x.invert().is_err());
    }

    #[test]
    fn test_extract_power_none_for_general_element() {
        let x = Z4::element([1.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(x.extract_power(), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Z4::element([f64::NAN, 0.0, 0.0, 0.0]).is_err());
        assert!(Z4::element([f64::INFINITY, 0.0, 0.0, 0.0]).is_err());
    }
}
