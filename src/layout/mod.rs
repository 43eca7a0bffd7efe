//! Layout logic of the crate: the item calculus and the line breaking
//! engine itself.

pub mod constants;
pub mod paragraphs;
