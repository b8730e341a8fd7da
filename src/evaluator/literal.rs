//! The literal (byte/address) evaluation backend.

use crate::class::{
    apply_transforms, canonical_byte, components_to_class_index, compute_belt_address,
    decode_class_index, Transform,
};
use crate::error::Result;
use crate::parser::Node;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiteralOutput {
    pub bytes: Vec<u8>,
    pub addresses: Option<Vec<u16>>,
}

/// Evaluate the literal backend: collect leaf sigils in left-to-right
/// source order, producing a flat byte (and optional address) sequence.
pub fn evaluate_literal(node: &Node) -> Result<LiteralOutput> {
    let mut bytes = Vec::new();
    let mut addresses = Vec::new();
    let mut any_address = false;
    walk(node, Transform::IDENTITY, &mut bytes, &mut addresses, &mut any_address)?;
    Ok(LiteralOutput {
        bytes,
        addresses: if any_address { Some(addresses) } else { None },
    })
}

fn walk(
    node: &Node,
    outer: Transform,
    bytes: &mut Vec<u8>,
    addresses: &mut Vec<u16>,
    any_address: &mut bool,
) -> Result<()> {
    match node {
        Node::Operation { sigil, .. } => {
            let base = decode_class_index(sigil.class)?;
            let after_postfix = apply_transforms(base, sigil.postfix_transform());
            let (h2, d, l) = apply_transforms(after_postfix, outer);
            let c = components_to_class_index(h2, d, l);
            let byte = canonical_byte(c)?;
            bytes.push(byte);
            if let Some(page) = sigil.page {
                let addr = compute_belt_address(page, byte)?;
                addresses.push(addr.address);
                *any_address = true;
            } else {
                addresses.push(0);
            }
            Ok(())
        }
        Node::Sequential(terms) => {
            for term in terms {
                walk(term, outer, bytes, addresses, any_address)?;
            }
            Ok(())
        }
        Node::Parallel(branches) => {
            for branch in branches {
                walk(branch, outer, bytes, addresses, any_address)?;
            }
            Ok(())
        }
        Node::Transformed { transform, body } => {
            let combined = Transform::compose(outer, *transform);
            walk(body, combined, bytes, addresses, any_address)
        }
        Node::Group(inner) => walk(inner, outer, bytes, addresses, any_address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn bytes_of(src: &str) -> Vec<u8> {
        evaluate_literal(&parse(src).unwrap()).unwrap().bytes
    }

    #[test]
    fn test_scenario_1_mark() {
        assert_eq!(bytes_of("mark@c21"), vec![0x2A]);
    }

    #[test]
    fn test_scenario_2_sequential_parallel() {
        assert_eq!(
            bytes_of("evaluate@c21 . copy@c05 || swap@c72"),
            vec![0x2A, 0x0A, 0xC0]
        );
    }

    #[test]
    fn test_scenario_3_rotate_group() {
        assert_eq!(bytes_of("R+1@ (copy@c05 . evaluate@c21)"), vec![0x4A, 0x6A]);
    }

    #[test]
    fn test_scenario_4_caret_and_page() {
        let out = evaluate_literal(&parse("mark@c42^+3~@17").unwrap()).unwrap();
        assert_eq!(out.bytes, vec![0x5A]);
        assert_eq!(out.addresses, Some(vec![4442]));
    }

    #[test]
    fn test_scenario_5_twist() {
        assert_eq!(bytes_of("T+4@mark@c00"), vec![0x08]);
    }

    #[test]
    fn test_scenario_6_mirror_only() {
        assert_eq!(bytes_of("~@mark@c13"), vec![0x2A]);
    }

    #[test]
    fn test_scenario_7_rotate_and_twist() {
        assert_eq!(bytes_of("R+2 T+3@mark@c07"), vec![0x84]);
    }

    #[test]
    fn test_scenario_8_range_error() {
        assert!(parse("mark@c96").is_err());
    }

    #[test]
    fn test_no_addresses_when_no_page() {
        let out = evaluate_literal(&parse("mark@c21").unwrap()).unwrap();
        assert_eq!(out.addresses, None);
    }
}
