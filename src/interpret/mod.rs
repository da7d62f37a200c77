pub mod algorithm;
pub mod format;
pub mod model;
pub mod scoring;

pub use algorithm::interpret;
pub use model::{Assessment, AssessmentTone, DisplayModel, ScoreBand};
