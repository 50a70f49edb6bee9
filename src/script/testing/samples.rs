//! Verified sample documents
//!
//! The files under `docs/samples/` are the canonical SmartScript sources for
//! tests. Load them through [`Samples`] instead of pasting template text into
//! test bodies.

use crate::script::ast::DocumentNode;
use crate::script::parser::parse_document;
use crate::script::processor::{process_source, ProcessingError, ProcessingSpec};
use std::fs;

/// Available sample files (canonical sources)
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-text-only.smscr",
    "010-echo-elements.smscr",
    "020-for-loop-simple.smscr",
    "030-for-loop-nested.smscr",
    "040-escapes.smscr",
    "050-kitchen-sink.smscr",
];

/// Format options for sample content
#[derive(Debug, Clone, PartialEq)]
pub enum SampleFormat {
    /// Raw string content
    String,
    /// Processed content using the specified format string
    Processed(String),
}

/// Main interface for accessing sample files
pub struct Samples;

impl Samples {
    fn samples_dir() -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/docs/samples")
    }

    fn sample_path(filename: &str) -> String {
        format!("{}/{}", Self::samples_dir(), filename)
    }

    fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(ProcessingError::FileNotFound(format!(
                "Sample '{}' is not available. Available samples: {:?}",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    /// Get sample content in the specified format
    pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;

        let path = Self::sample_path(filename);
        let content = fs::read_to_string(&path)
            .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))?;

        match format {
            SampleFormat::String => Ok(content),
            SampleFormat::Processed(format_str) => {
                let spec = ProcessingSpec::from_string(&format_str)?;
                process_source(&content, &spec)
            }
        }
    }

    pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::String)
    }

    pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
    }

    /// Read and parse a sample in one step
    pub fn get_document(filename: &str) -> Result<DocumentNode, ProcessingError> {
        let content = Self::get_string(filename)?;
        Ok(parse_document(&content)?)
    }

    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }
}
