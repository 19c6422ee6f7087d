// Blogsmith: normalize retrieval-augmented blog answers.
//
// This is the library root. `blog` holds the block schema and the
// normalization steps; `pipeline` wires them to their collaborators.

pub mod blog;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod sources;
pub mod store;
