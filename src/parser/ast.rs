//! AST node types for the sigil grammar.

use crate::class::Transform;
use crate::lexer::Generator;

/// A leaf sigil: a class index plus optional postfix modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigil {
    pub class: u8,
    /// Postfix `^±k` modifiers, defaulting to twist when no axis letter
    /// follows the caret.
    pub rotate: i32,
    pub triality: i32,
    pub twist: i32,
    pub mirror: bool,
    pub page: Option<u8>,
}

impl Sigil {
    pub fn new(class: u8) -> Self {
        Sigil {
            class,
            ..Default::default()
        }
    }

    /// The sigil's own postfix modifiers as a [`Transform`].
    pub fn postfix_transform(&self) -> Transform {
        Transform {
            r: self.rotate,
            d: self.triality,
            t: self.twist,
            m: self.mirror,
        }
    }
}

/// An AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `generator@sigil`.
    Operation { generator: Generator, sigil: Sigil },
    /// Ordered list of terms, right-to-left execution in the operational
    /// view, left-to-right source order in the literal view.
    Sequential(Vec<Node>),
    /// Parallel branches, source order preserved.
    Parallel(Vec<Node>),
    /// A transform applied to a parallel body.
    Transformed {
        transform: Transform,
        body: Box<Node>,
    },
    /// Purely syntactic grouping, `"(" par ")"`.
    Group(Box<Node>),
}
