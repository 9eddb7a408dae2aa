mod audio_analysis_service;
mod audio_normalizer;
mod findings_parser;

pub use audio_analysis_service::{AnalysisError, AnalysisOutcome, AudioAnalysisService};
pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use findings_parser::{FindingsParseError, parse_findings, strip_json_fence};
