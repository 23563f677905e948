//! Transcript normalization.
//!
//! The backend does not guarantee a transcript shape: the same content may
//! arrive as display text, a JSON segment list, or a stringified structure.
//! Each shape is handled by its own [`TranscriptStrategy`] and
//! [`TranscriptNormalizer`] tries them in order.

mod json_segments;
#[allow(clippy::module_inception)]
mod normalizer;
mod payload;
mod plain_text;
mod preformatted;
mod quoted_pairs;
mod structured;
mod transcript_strategy;

pub mod preview;
pub mod segment;

pub use json_segments::JsonSegmentsStrategy;
pub use normalizer::{normalize, TranscriptNormalizer};
pub use payload::TranscriptPayload;
pub use plain_text::{coerce_to_text, PlainTextStrategy};
pub use preformatted::PreformattedStrategy;
pub use preview::{preview, DEFAULT_PREVIEW_CHARS};
pub use quoted_pairs::QuotedPairsStrategy;
pub use segment::TranscriptSegment;
pub use structured::StructuredStrategy;
pub use transcript_strategy::TranscriptStrategy;
