// Résumé extraction: section segmentation, per-section entry accumulators and
// the vocabulary matcher. Everything below `handlers` is pure and never fails.

pub mod accumulator;
pub mod analyzer;
pub mod dates;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod pdf;
pub mod projects;
pub mod rules;
pub mod sections;
pub mod vocabulary;
