//! Text segmentation: token-bounded paragraph segments and candidate sentences.

pub mod segment;
pub mod sentences;


pub use segment::{Segment, paragraphs, split_into_segments};
pub use sentences::split_sentences;
