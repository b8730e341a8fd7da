//! The four permutations R, D, T, M on class components, and their
//! combined application.

use super::components::Components;

/// Rotation: `h2 -> (h2 + k) mod 4`. `R^4 = id`.
pub fn apply_rotation((h2, d, l): Components, k: i32) -> Components {
    let shifted = (h2 as i32 + k).rem_euclid(4) as u8;
    (shifted, d, l)
}

/// Triality: `d -> (d + k) mod 3`. `D^3 = id`.
pub fn apply_triality((h2, d, l): Components, k: i32) -> Components {
    let shifted = (d as i32 + k).rem_euclid(3) as u8;
    (h2, shifted, l)
}

/// Twist: `l -> (l + k) mod 8`. `T^8 = id`.
pub fn apply_twist((h2, d, l): Components, k: i32) -> Components {
    let shifted = (l as i32 + k).rem_euclid(8) as u8;
    (h2, d, shifted)
}

/// Mirror: swaps `d=1 <-> d=2`, fixes `d=0`, `h2`, `l`. `M^2 = id`.
pub fn apply_mirror((h2, d, l): Components) -> Components {
    let d2 = match d {
        0 => 0,
        1 => 2,
        2 => 1,
        _ => unreachable!(),
    };
    (h2, d2, l)
}

/// A transform quadruple: signed shifts on R/D/T, a boolean flip on M.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform {
    pub r: i32,
    pub d: i32,
    pub t: i32,
    pub m: bool,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        r: 0,
        d: 0,
        t: 0,
        m: false,
    };

    pub fn is_identity(&self) -> bool {
        *self == Transform::IDENTITY
    }

    /// Composition of an outer transform with this (inner) one: R/D/T sum,
    /// M xors.
    pub fn compose(outer: Transform, inner: Transform) -> Transform {
        Transform {
            r: outer.r + inner.r,
            d: outer.d + inner.d,
            t: outer.t + inner.t,
            m: outer.m ^ inner.m,
        }
    }
}

/// Applies R, D, T, M in that fixed order. All four axes commute at the
/// component level so the order used here doesn't change the result.
pub fn apply_transforms(components: Components, xf: Transform) -> Components {
    let c = apply_rotation(components, xf.r);
    let c = apply_triality(c, xf.d);
    let c = apply_twist(c, xf.t);
    if xf.m {
        apply_mirror(c)
    } else {
        c
    }
}

/// The result shape of applying a triality shift to a class index, naming
/// both the old and new class/triality coordinate.
pub struct DTransformResult {
    pub old_class: u8,
    pub new_class: u8,
    pub d_old: u8,
    pub d_new: u8,
    pub h2: u8,
    pub l: u8,
}

pub fn apply_d_transform(
    components: Components,
    class_index: impl Fn(Components) -> u8,
    c: u8,
    k: i32,
) -> DTransformResult {
    let (h2, d_old, l) = components;
    let new_components = apply_triality(components, k);
    let (_, d_new, _) = new_components;
    DTransformResult {
        old_class: c,
        new_class: class_index(new_components),
        d_old,
        d_new,
        h2,
        l,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_order_four() {
        let c = (2, 1, 5);
        let mut x = c;
        for _ in 0..4 {
            x = apply_rotation(x, 1);
        }
        assert_eq!(x, c);
    }

    #[test]
    fn test_triality_order_three() {
        let c = (2, 1, 5);
        let mut x = c;
        for _ in 0..3 {
            x = apply_triality(x, 1);
        }
        assert_eq!(x, c);
    }

    #[test]
    fn test_twist_order_eight() {
        let c = (2, 1, 5);
        let mut x = c;
        for _ in 0..8 {
            x = apply_twist(x, 1);
        }
        assert_eq!(x, c);
    }

    #[test]
    fn test_mirror_order_two() {
        let c = (2, 1, 5);
        assert_eq!(apply_mirror(apply_mirror(c)), c);
    }

    #[test]
    fn test_mirror_swaps_one_and_two_fixes_zero() {
        assert_eq!(apply_mirror((0, 0, 0)).1, 0);
        assert_eq!(apply_mirror((0, 1, 0)).1, 2);
        assert_eq!(apply_mirror((0, 2, 0)).1, 1);
    }

    #[test]
    fn test_signed_rotation_negative() {
        let c = (0, 0, 0);
        assert_eq!(apply_rotation(c, -1).0, 3);
    }

    #[test]
    fn test_compose_transforms_sums_and_xors() {
        let outer = Transform {
            r: 1,
            d: 2,
            t: 3,
            m: true,
        };
        let inner = Transform {
            r: 1,
            d: 1,
            t: 1,
            m: true,
        };
        let composed = Transform::compose(outer, inner);
        assert_eq!(composed.r, 2);
        assert_eq!(composed.d, 3);
        assert_eq!(composed.t, 4);
        assert!(!composed.m);
    }
}
