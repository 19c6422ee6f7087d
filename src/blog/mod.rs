// Blog normalization — block schema, the two answer parsers, image slotting
// and final assembly.

pub mod assembler;
pub mod blocks;
pub mod error;
pub mod fallback;
pub mod slotter;
pub mod structured;

use assembler::PostFields;
use blocks::ContentBlock;

/// What either parser recovers from a raw answer: slotted content plus any
/// top-level fields the answer declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub content: Vec<ContentBlock>,
    pub fields: PostFields,
}
