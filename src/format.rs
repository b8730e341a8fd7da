//! Pretty-printers: string renderings for bytes, belt addresses, words, and
//! class info. These back the library's `prettyPrint` and the `sigilc` CLI's
//! `eval`/`classify` output.

use crate::class::{BeltAddress, ClassInfo};
use crate::evaluator::EvaluateResult;

/// `0x2A` style hex rendering of a single byte.
pub fn format_byte(b: u8) -> String {
    format!("0x{}", hex::encode([b]).to_uppercase())
}

/// `[0x2A, 0x0A, 0xC0]` style rendering of a byte sequence.
pub fn format_bytes(bytes: &[u8]) -> String {
    let rendered: Vec<String> = bytes.iter().copied().map(format_byte).collect();
    format!("[{}]", rendered.join(", "))
}

/// `page:byte @ address` style rendering of a belt address.
pub fn format_belt_address(addr: &BeltAddress) -> String {
    format!(
        "page {} / byte {} -> address {}",
        addr.page, addr.byte, addr.address
    )
}

/// `"e1 e2 . e3"`-style rendering of an operational word sequence.
pub fn format_words(words: &[String]) -> String {
    words.join(" . ")
}

/// A multi-line block naming a class's index, decomposed components, and
/// canonical byte.
pub fn format_class_info(info: &ClassInfo) -> String {
    format!(
        "class {}\n  components: h2={} d={} l={}\n  canonical byte: {}",
        info.class_index,
        info.h2,
        info.d,
        info.l,
        format_byte(info.canonical_byte)
    )
}

/// `prettyPrint(source)`: a human-readable block listing both backends'
/// output for one evaluated source string.
pub fn pretty_print(result: &EvaluateResult) -> String {
    let mut lines = Vec::new();
    lines.push("literal:".to_string());
    lines.push(format!("  bytes: {}", format_bytes(&result.literal.bytes)));
    if let Some(addresses) = &result.literal.addresses {
        let rendered: Vec<String> = addresses.iter().map(|a| a.to_string()).collect();
        lines.push(format!("  addresses: [{}]", rendered.join(", ")));
    }
    lines.push("operational:".to_string());
    lines.push(format!("  words: {}", format_words(&result.operational.words)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_byte() {
        assert_eq!(format_byte(0x2A), "0x2A");
        assert_eq!(format_byte(0x0A), "0x0A");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x2A, 0x0A, 0xC0]), "[0x2A, 0x0A, 0xC0]");
    }

    #[test]
    fn test_format_belt_address() {
        let addr = BeltAddress {
            page: 1,
            byte: 2,
            address: 258,
        };
        assert_eq!(format_belt_address(&addr), "page 1 / byte 2 -> address 258");
    }

    #[test]
    fn test_format_words() {
        assert_eq!(format_words(&["e1".to_string(), "e2".to_string()]), "e1 . e2");
    }
}
