// Answer and image sources — the collaborators the normalizer consumes.

pub mod documents;
pub mod images;
pub mod retrieval;
