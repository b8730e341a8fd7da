//! The Fano plane and the non-associative Cayley (octonion) product it
//! defines on the scalar+vector subspace `R ⊕ V` of Cl(0,7).

use super::clifford::{Clifford, EPSILON};
use crate::error::{KernelError, Result};
use rand::Rng;

/// The seven oriented triples of the Fano plane.
pub const LINES: [(u8, u8, u8); 7] = [
    (1, 2, 4),
    (2, 3, 5),
    (3, 4, 6),
    (4, 5, 7),
    (5, 6, 1),
    (6, 7, 2),
    (7, 1, 3),
];

/// `e_i × e_j -> (k, sign)`, built from the seven lines: each triple
/// `(i,j,k)` seeds `e_i×e_j=e_k`, `e_j×e_k=e_i`, `e_k×e_i=e_j`, with
/// reverses negated. `e_i × e_i = 0`.
fn cross_entry(i: u8, j: u8) -> Option<(u8, f64)> {
    if i == j {
        return None;
    }
    for &(a, b, c) in LINES.iter() {
        let forward = [(a, b, c, 1.0), (b, c, a, 1.0), (c, a, b, 1.0)];
        let reverse = [(b, a, c, -1.0), (c, b, a, -1.0), (a, c, b, -1.0)];
        for &(x, y, k, sign) in forward.iter().chain(reverse.iter()) {
            if x == i && y == j {
                return Some((k, sign));
            }
        }
    }
    None
}

/// Whether `(i,j,k)` is a cyclic rotation of one of the seven canonical
/// lines.
pub fn is_fano_line(i: u8, j: u8, k: u8) -> bool {
    LINES
        .iter()
        .any(|&(a, b, c)| [(a, b, c), (b, c, a), (c, a, b)].contains(&(i, j, k)))
}

/// The canonical lines containing generator index `i`.
pub fn get_lines_containing(i: u8) -> Vec<(u8, u8, u8)> {
    LINES
        .iter()
        .copied()
        .filter(|&(a, b, c)| a == i || b == i || c == i)
        .collect()
}

/// Exhaustively checks the cross-product table is anticommutative and
/// `e_i × e_i = 0` for all generator pairs.
pub fn verify() -> bool {
    for i in 1u8..=7 {
        if cross_entry(i, i).is_some() {
            return false;
        }
        for j in 1u8..=7 {
            if i == j {
                continue;
            }
            match (cross_entry(i, j), cross_entry(j, i)) {
                (Some((k1, s1)), Some((k2, s2))) => {
                    if k1 != k2 || (s1 + s2).abs() > EPSILON {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
    true
}

fn require_vector(v: &Clifford, predicate: &'static str) -> Result<()> {
    if v.terms().all(|(blade, _)| blade.len() <= 1) {
        Ok(())
    } else {
        Err(KernelError::type_error(
            predicate,
            "input must lie in the scalar+vector subspace (grade 0 or 1 only)",
        ))
    }
}

/// Cross product of two grade-1 elements via the Fano table.
pub fn cross_product(u: &Clifford, v: &Clifford) -> Result<Clifford> {
    require_vector(u, "crossProduct")?;
    require_vector(v, "crossProduct")?;
    let mut result = Clifford::zero();
    for i in 1u8..=7 {
        let ui = u.coefficient(&[i]);
        if ui == 0.0 {
            continue;
        }
        for j in 1u8..=7 {
            let vj = v.coefficient(&[j]);
            if vj == 0.0 {
                continue;
            }
            if let Some((k, sign)) = cross_entry(i, j) {
                let contribution = Clifford::basis_vector(k).scale(ui * vj * sign);
                result = result.add(&contribution);
            }
        }
    }
    Ok(result)
}

fn inner_product_vectors(u: &Clifford, v: &Clifford) -> f64 {
    (1u8..=7).map(|i| u.coefficient(&[i]) * v.coefficient(&[i])).sum()
}

/// The componentwise inner product of the vector parts of two
/// scalar+vector elements.
pub fn inner_product(x: &Clifford, y: &Clifford) -> Result<f64> {
    require_vector(x, "innerProduct")?;
    require_vector(y, "innerProduct")?;
    Ok(inner_product_vectors(&x.vector_part(), &y.vector_part()))
}

/// The Cayley (octonion) product: `(α+u)(β+v) = (αβ - <u,v>) + (αv + βu + u×v)`.
pub fn cayley_product(x: &Clifford, y: &Clifford) -> Result<Clifford> {
    require_vector(x, "cayleyProduct")?;
    require_vector(y, "cayleyProduct")?;
    let alpha = x.scalar_part();
    let beta = y.scalar_part();
    let u = x.vector_part();
    let v = y.vector_part();

    let scalar = alpha * beta - inner_product_vectors(&u, &v);
    let vector = u.scale(beta).add(&v.scale(alpha)).add(&cross_product(&u, &v)?);
    Ok(Clifford::scalar(scalar).add(&vector))
}

/// Negates the vector part, keeping the scalar.
pub fn conjugate(x: &Clifford) -> Result<Clifford> {
    require_vector(x, "conjugate")?;
    Ok(Clifford::scalar(x.scalar_part()).add(&x.vector_part().scale(-1.0)))
}

/// `alpha^2 + sum_i u_i^2`.
pub fn norm_squared(x: &Clifford) -> Result<f64> {
    require_vector(x, "normSquared")?;
    let alpha = x.scalar_part();
    let vector_sq: f64 = (1u8..=7).map(|i| x.coefficient(&[i]).powi(2)).sum();
    Ok(alpha * alpha + vector_sq)
}

pub fn norm(x: &Clifford) -> Result<f64> {
    Ok(norm_squared(x)?.sqrt())
}

/// `(xy)y - x(yy)` has all coefficients below EPSILON.
pub fn verify_alternativity(x: &Clifford, y: &Clifford) -> Result<bool> {
    let xy = cayley_product(x, y)?;
    let lhs = cayley_product(&xy, y)?;
    let yy = cayley_product(y, y)?;
    let rhs = cayley_product(x, &yy)?;
    Ok(lhs.sub(&rhs).is_zero())
}

/// `| |x*y| - |x|*|y| | < EPSILON`.
pub fn verify_norm_multiplicativity(x: &Clifford, y: &Clifford) -> Result<bool> {
    let xy = cayley_product(x, y)?;
    let lhs = norm(&xy)?;
    let rhs = norm(x)? * norm(y)?;
    Ok((lhs - rhs).abs() < EPSILON)
}

/// A random octonion with coefficients drawn from `[-1, 1]`.
pub fn random_octonion(rng: &mut impl Rng) -> Clifford {
    let mut e = Clifford::scalar(rng.gen_range(-1.0..=1.0));
    for i in 1u8..=7 {
        e = e.add(&Clifford::basis_vector(i).scale(rng.gen_range(-1.0..=1.0)));
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fano_table_is_consistent() {
        assert!(verify());
    }

    #[test]
    fn test_lines_containing() {
        let lines = get_lines_containing(1);
        assert!(lines.contains(&(1, 2, 4)));
        assert!(lines.contains(&(5, 6, 1)));
        assert!(lines.contains(&(7, 1, 3)));
    }

    #[test]
    fn test_is_fano_line_cyclic() {
        assert!(is_fano_line(1, 2, 4));
        assert!(is_fano_line(2, 4, 1));
        assert!(is_fano_line(4, 1, 2));
        assert!(!is_fano_line(2, 1, 4));
    }

    #[test]
    fn test_cross_product_anticommutes() {
        let e1 = Clifford::basis_vector(1);
        let e2 = Clifford::basis_vector(2);
        let a = cross_product(&e1, &e2).unwrap();
        let b = cross_product(&e2, &e1).unwrap();
        assert!(a.approx_eq(&b.scale(-1.0)));
    }

    #[test]
    fn test_alternativity_and_norm_multiplicativity_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let x = random_octonion(&mut rng);
            let y = random_octonion(&mut rng);
            assert!(verify_alternativity(&x, &y).unwrap());
            assert!(verify_norm_multiplicativity(&x, &y).unwrap());
        }
    }

    #[test]
    fn test_conjugate_negates_vector_part() {
        let x = Clifford::scalar(2.0).add(&Clifford::basis_vector(3).scale(5.0));
        let c = conjugate(&x).unwrap();
        assert!((c.scalar_part() - 2.0).abs() < EPSILON);
        assert!((c.coefficient(&[3]) + 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_inner_product_orthogonal_basis() {
        let e1 = Clifford::basis_vector(1);
        let e2 = Clifford::basis_vector(2);
        assert!((inner_product(&e1, &e2).unwrap()).abs() < EPSILON);
        assert!((inner_product(&e1, &e1).unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_reject_higher_grade_input() {
        let bivector = Clifford::basis_vector(1).mul(&Clifford::basis_vector(2));
        assert!(cayley_product(&bivector, &Clifford::scalar(1.0)).is_err());
    }
}
