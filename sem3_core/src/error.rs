use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum Sem3Error {
	#[error(transparent)]
	#[diagnostic(code(sem3::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid glob pattern: {0}")]
	#[diagnostic(code(sem3::invalid_pattern))]
	Pattern(#[from] glob::PatternError),

	#[error("invalid IRI: {0}")]
	#[diagnostic(code(sem3::invalid_iri))]
	Iri(#[from] oxrdf::IriParseError),

	#[error("unknown output format: {0}")]
	#[diagnostic(code(sem3::unknown_format))]
	UnknownFormat(String),

	#[error("serialization failed: {0}")]
	#[diagnostic(code(sem3::serialize))]
	Serialize(String),
}

pub type Sem3Result<T> = Result<T, Sem3Error>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
