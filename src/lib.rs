//! # Atlas Sigil Algebra kernel
//!
//! A symbolic computation engine over a finite universe of 96 equivalence
//! classes of bytes. The kernel:
//!
//! - parses a domain-specific expression language (the *sigil grammar*)
//!   over that 96-class universe,
//! - evaluates each parsed phrase via two independent deterministic
//!   backends — a literal byte/address backend and an operational word
//!   backend — and
//! - provides an algebraic foundation, the Sigmatics Geometric Algebra
//!   `SGA = Cl(0,7) ⊗ R[Z4] ⊗ R[Z3]`, on top of which four transforms
//!   (`R`, `D`, `T`, `M`) act both as permutations on classes and as
//!   automorphisms on SGA elements, bridged by an exhaustive validator
//!   that proves the two views commute.
//!
//! ## Layers
//!
//! ```text
//! class        the 96-class equivalence structure, canonical bytes,
//!               the Belt address space, the four component-level
//!               transforms, triality orbits
//! lexer         source text -> token stream
//! parser        token stream -> AST (the sigil grammar)
//! evaluator     AST -> (bytes, addresses) and AST -> words, two
//!               independent pure passes
//! algebra       Cl(0,7), R[Z4], R[Z3], the SGA tensor element, the
//!               Fano/octonion channel
//! bridge        lift: class -> SGA, project: SGA -> class, and the
//!               1,344-check commutative-diagram validator
//! api           the public façade: parse/evaluate/pretty-print, class
//!               and belt utilities, the SGA/octonion surface
//! format        byte/address/word/class-info pretty-printers
//! ```
//!
//! ## Quick start
//!
//! ```
//! use sigil_algebra::api;
//!
//! let bytes = api::evaluate_bytes("mark@c21").unwrap();
//! assert_eq!(bytes.bytes, vec![0x2A]);
//!
//! let words = api::evaluate_words("copy@c05 . evaluate@c40").unwrap();
//! assert_eq!(words.words, vec!["phase[h\u{2082}=1]", "evaluate", "copy[d=0]"]);
//! ```
//!
//! ## Scope
//!
//! Single-threaded, synchronous, allocation-light, and total except where
//! the error taxonomy in [`error`] names a specific failure (range
//! violations, parse/lex mismatches, non-invertible group-algebra
//! elements, non-rank-1 inputs to `T`/`project`). There is no I/O, no
//! persistence, and no concurrency primitive anywhere in the crate —
//! every value is an immutable result of a pure function, so callers may
//! freely share values across threads.
//!
//! Out of scope (external collaborators, not part of this crate): web or
//! canvas visualizations, NP-hard solvers that merely consume
//! [`class::class_info`]/[`class::canonical_byte`]/[`class::class_index`]
//! as opaque functions, and any higher-level packaging story.

pub mod algebra;
pub mod api;
pub mod bridge;
pub mod class;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod lexer;
pub mod parser;

pub use error::{KernelError, Result};
