//! The algebraic layer: Clifford algebra, cyclic group algebras, the SGA
//! tensor element, and the Fano/octonion channel.

pub mod clifford;
pub mod fano;
pub mod group_algebra;
pub mod sga;

pub use clifford::Clifford;
pub use group_algebra::{CyclicElement, Z3, Z4};
pub use sga::SgaElement;
