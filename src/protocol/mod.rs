//! Tolerant text protocols for parsing generator output.

pub mod markers;
pub mod segments;

pub use markers::{extract, ExtractedFields, MarkerProtocol, OccurrencePolicy};
pub use segments::{
    split, SegmentOrder, SegmentProtocol, Segments, ANSWER_LABEL, FALLBACK_SUMMARY_CHARS,
    SUMMARY_LABEL,
};
