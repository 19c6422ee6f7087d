// Pipelines — raw answer in, render-ready post out.

pub mod generate;
pub mod normalize;
