//! The operational (word) evaluation backend.

use crate::class::{apply_transforms, decode_class_index, Transform};
use crate::error::Result;
use crate::lexer::Generator;
use crate::parser::Node;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationalOutput {
    pub words: Vec<String>,
}

/// Evaluate the operational backend: lower each leaf to one or more
/// symbolic words describing the generator and the *effective* component
/// values (base class after postfix, after the accumulated outer
/// transform).
pub fn evaluate_operational(node: &Node) -> Result<OperationalOutput> {
    let words = walk(node, Transform::IDENTITY)?;
    Ok(OperationalOutput { words })
}

fn walk(node: &Node, outer: Transform) -> Result<Vec<String>> {
    match node {
        Node::Operation { generator, sigil } => {
            let base = decode_class_index(sigil.class)?;
            let after_postfix = apply_transforms(base, sigil.postfix_transform());
            let (h2, d, l) = apply_transforms(after_postfix, outer);
            Ok(words_for_generator(*generator, h2, d, l))
        }
        Node::Sequential(terms) => {
            // Rightmost term's words appear first: mathematical composition
            // order, `f . g` reads "f after g".
            let mut words = Vec::new();
            for term in terms.iter().rev() {
                words.extend(walk(term, outer)?);
            }
            Ok(words)
        }
        Node::Parallel(branches) => {
            if branches.len() < 2 {
                // A single-branch Parallel is transparent.
                return match branches.first() {
                    Some(branch) => walk(branch, outer),
                    None => Ok(Vec::new()),
                };
            }
            let mut words = vec!["\u{2297}_begin".to_string()];
            for (i, branch) in branches.iter().enumerate() {
                if i > 0 {
                    words.push("\u{2297}_sep".to_string());
                }
                words.extend(walk(branch, outer)?);
            }
            words.push("\u{2297}_end".to_string());
            Ok(words)
        }
        Node::Transformed { transform, body } => {
            let combined = Transform::compose(outer, *transform);
            let mut words = entry_words(transform);
            words.extend(walk(body, combined)?);
            words.extend(exit_words(transform));
            Ok(words)
        }
        Node::Group(inner) => walk(inner, outer),
    }
}

fn words_for_generator(generator: Generator, h2: u8, d: u8, l: u8) -> Vec<String> {
    match generator {
        Generator::Mark => vec!["mark".to_string()],
        Generator::Copy => vec![format!("copy[d={}]", d)],
        Generator::Swap => vec!["swap".to_string()],
        Generator::Merge => vec![format!("merge[d={}]", d)],
        Generator::Split => vec![format!("split[\u{2113}={}]", l)],
        Generator::Quote => vec![format!("quote[\u{2113}={}]", l)],
        Generator::Evaluate => vec![
            format!("phase[h\u{2082}={}]", h2),
            "evaluate".to_string(),
        ],
    }
}

fn entry_words(xf: &Transform) -> Vec<String> {
    let mut words = Vec::new();
    if xf.r != 0 {
        words.push(format!("\u{2192}\u{03c1}[{}]", xf.r));
    }
    if xf.d != 0 {
        words.push(format!("\u{2192}\u{03b4}[{}]", xf.d.rem_euclid(3)));
    }
    if xf.t != 0 {
        words.push(format!("\u{2192}\u{03c4}[{}]", xf.t));
    }
    if xf.m {
        words.push("\u{2192}\u{03bc}".to_string());
    }
    words
}

fn exit_words(xf: &Transform) -> Vec<String> {
    let mut words = Vec::new();
    if xf.r != 0 {
        words.push(format!("\u{2190}\u{03c1}[{}]", xf.r));
    }
    if xf.d != 0 {
        words.push(format!("\u{2190}\u{03b4}[{}]", xf.d.rem_euclid(3)));
    }
    if xf.t != 0 {
        words.push(format!("\u{2190}\u{03c4}[{}]", xf.t));
    }
    if xf.m {
        words.push("\u{2190}\u{03bc}".to_string());
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn words_of(src: &str) -> Vec<String> {
        evaluate_operational(&parse(src).unwrap()).unwrap().words
    }

    #[test]
    fn test_scenario_9_sequential_inversion() {
        assert_eq!(
            words_of("copy@c05 . evaluate@c40"),
            vec!["phase[h\u{2082}=1]", "evaluate", "copy[d=0]"]
        );
    }

    #[test]
    fn test_scenario_10_transform_entry_exit() {
        assert_eq!(
            words_of("R+1@mark@c00"),
            vec!["\u{2192}\u{03c1}[1]", "mark", "\u{2190}\u{03c1}[1]"]
        );
    }

    #[test]
    fn test_scenario_11_parallel_sentinels() {
        assert_eq!(
            words_of("mark@c01 || mark@c02"),
            vec!["\u{2297}_begin", "mark", "\u{2297}_sep", "mark", "\u{2297}_end"]
        );
    }

    #[test]
    fn test_single_branch_parallel_transparent() {
        assert_eq!(words_of("mark@c01"), vec!["mark"]);
    }

    #[test]
    fn test_swap_word() {
        assert_eq!(words_of("swap@c00"), vec!["swap"]);
    }

    #[test]
    fn test_split_and_quote_words() {
        assert_eq!(words_of("split@c05"), vec!["split[\u{2113}=5]"]);
        assert_eq!(words_of("quote@c05"), vec!["quote[\u{2113}=5]"]);
    }
}
