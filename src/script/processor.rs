//! File processing API for SmartScript documents
//!
//! This module provides an extensible API for processing documents with
//! different stages (token, ast) and formats (simple, json, tag, ...). A
//! processing spec is written `<stage>-<format>`, e.g. `token-simple` or
//! `ast-treeviz`. The special spec `source` parses the document and prints the
//! regenerated SmartScript text.

use crate::script::ast::DocumentNode;
use crate::script::error::ParseError;
use crate::script::formats::{serialize_ast_tag, to_source, to_treeviz_str};
use crate::script::lexer::{tokenize, Token};
use crate::script::parser::parse_document;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Source,
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Source,
    Simple,
    Json,
    Yaml,
    AstTag,
    AstTreeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    pub fn source() -> Self {
        ProcessingSpec {
            stage: ProcessingStage::Source,
            format: OutputFormat::Source,
        }
    }

    /// Parse a format string like "source", "token-simple" or "ast-tag"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        if format_str == "source" {
            return Ok(Self::source());
        }

        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match (&stage, format) {
            (ProcessingStage::Token, "simple") => OutputFormat::Simple,
            (_, "json") => OutputFormat::Json,
            (ProcessingStage::Ast, "yaml") => OutputFormat::Yaml,
            (ProcessingStage::Ast, "tag") => OutputFormat::AstTag,
            (ProcessingStage::Ast, "treeviz") => OutputFormat::AstTreeviz,
            (ProcessingStage::Token, "tag" | "treeviz" | "yaml") => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with AST stage",
                    format
                )))
            }
            (ProcessingStage::Ast, "simple") => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with token stage".to_string(),
                ))
            }
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            Self::source(),
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::AstTag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::AstTreeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
        ]
    }

    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Source => return "source".to_string(),
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Source => "source",
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::AstTag => "tag",
            OutputFormat::AstTreeviz => "treeviz",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Parse(ParseError),
    Serialization(String),
    /// The regenerated source parsed to a different tree; carries that source
    RoundTripMismatch(String),
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Parse(err) => write!(f, "{}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::RoundTripMismatch(_) => {
                write!(f, "Regenerated source does not parse to the same document")
            }
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

/// Process document text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    debug!(spec = %spec.name(), bytes = source.len(), "processing document");
    match spec.stage {
        ProcessingStage::Source => Ok(to_source(&parse_document(source)?)),
        ProcessingStage::Token => {
            let tokens = tokenize(source).map_err(ParseError::from)?;
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::Ast => {
            let doc = parse_document(source)?;
            format_document(&doc, &spec.format)
        }
    }
}

/// Process a SmartScript file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = read_file(file_path.as_ref())?;
    process_source(&content, spec)
}

pub fn read_file(file_path: &Path) -> Result<String, ProcessingError> {
    fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProcessingError::FileNotFound(file_path.display().to_string()),
        _ => ProcessingError::IoError(e.to_string()),
    })
}

/// Parses, regenerates and re-parses a document, failing if the two trees
/// differ. Returns the first parse on success.
pub fn verify_round_trip(source: &str) -> Result<DocumentNode, ProcessingError> {
    let doc = parse_document(source)?;
    let regenerated = to_source(&doc);
    let reparsed = parse_document(&regenerated)?;
    if reparsed != doc {
        return Err(ProcessingError::RoundTripMismatch(regenerated));
    }
    debug!(nodes = doc.node_count(), "round trip verified");
    Ok(doc)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(|token| token.to_string()).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        _ => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} is not a token format",
            format
        ))),
    }
}

fn format_document(doc: &DocumentNode, format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::AstTag => Ok(serialize_ast_tag(doc)),
        OutputFormat::AstTreeviz => Ok(to_treeviz_str(doc)),
        OutputFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(doc).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        _ => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} is not a document format",
            format
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
