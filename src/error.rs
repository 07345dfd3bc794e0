//! Error and diagnostic types shared by every pipeline stage.
//!
//! A small `Span` for source position plus a single tagged error carrying
//! a `Display` impl that callers can surface verbatim.

/// Location of a token or AST node in the sanitized source.
///
/// Only the line is tracked — the grammar this crate parses never needs
/// column-accurate diagnostics, and inventing one would be scope creep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
}

impl Span {
    pub fn new(line: usize) -> Self {
        Self { line }
    }
}

/// The four error kinds a pipeline run can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Unsupported,
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Runtime => "Runtime",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Internal => "Internal",
        };
        f.write_str(name)
    }
}

/// A single, tagged pipeline failure.
///
/// `line` is `None` when the failing stage has no source position to
/// attach (e.g. an `Unsupported` or `Internal` error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Option<usize>,
}

impl CError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), line: None }
    }

    pub fn at(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self { kind, message: message.into(), line: Some(span.line) }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::at(ErrorKind::Syntax, message, span)
    }

    pub fn runtime(message: impl Into<String>, span: Span) -> Self {
        Self::at(ErrorKind::Runtime, message, span)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    pub fn internal(message: impl Into<String>, span: Span) -> Self {
        Self::at(ErrorKind::Internal, message, span)
    }
}

impl std::fmt::Display for CError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} error on line {}: {}", self.kind, line, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for CError {}
