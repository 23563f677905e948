use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::normalizer::plain_text::coerce_to_text;
use crate::normalizer::{
    JsonSegmentsStrategy, PlainTextStrategy, PreformattedStrategy, QuotedPairsStrategy,
    StructuredStrategy, TranscriptPayload, TranscriptStrategy,
};

/// Ordered pipeline of transcript strategies; the first one that produces
/// text wins.
pub struct TranscriptNormalizer {
    strategies: Vec<Box<dyn TranscriptStrategy>>,
}

impl Default for TranscriptNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptNormalizer {
    /// The standard pipeline: pre-formatted text, JSON segments, quoted
    /// pairs, structured values, plain text.
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn TranscriptStrategy>> = vec![
            Box::new(PreformattedStrategy::new()),
            Box::new(JsonSegmentsStrategy::new()),
        ];

        match QuotedPairsStrategy::new() {
            Ok(strategy) => strategies.push(Box::new(strategy)),
            Err(e) => warn!("Quoted-pair transcript recovery disabled: {}", e),
        }

        strategies.push(Box::new(StructuredStrategy::new()));
        strategies.push(Box::new(PlainTextStrategy::new()));

        Self { strategies }
    }

    pub fn with_strategies(strategies: Vec<Box<dyn TranscriptStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Normalize a payload. Never fails; if no strategy applies the payload
    /// is coerced to text.
    pub fn run(&self, payload: &TranscriptPayload) -> String {
        for strategy in &self.strategies {
            if let Some(text) = strategy.apply(payload) {
                debug!("Transcript normalized by {} ({} chars)", strategy.name(), text.len());
                return text;
            }
        }

        debug!("No transcript strategy applied, coercing payload to text");
        coerce_to_text(payload)
    }
}

/// Normalize a transcript payload with the standard pipeline.
pub fn normalize(payload: impl Into<TranscriptPayload>) -> String {
    static NORMALIZER: OnceLock<TranscriptNormalizer> = OnceLock::new();
    NORMALIZER
        .get_or_init(TranscriptNormalizer::new)
        .run(&payload.into())
}
