//! Error types for RESP extraction and decoding.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// The closed set of reasons a buffer can fail to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The leading byte is not a known type marker
	#[error("invalid type")]
	InvalidType,

	/// Wrong number of terminator-separated segments
	#[error("invalid input parts")]
	InvalidInputParts,

	/// A segment is not numeric or not empty where it should be, or trailing
	/// data follows a value
	#[error("invalid input data")]
	InvalidInputData,

	/// Declared bulk string length differs from the payload length
	#[error("data mismatch")]
	DataMismatch,

	/// An array element could not be extracted
	#[error("failed extraction")]
	FailedExtraction,
}

/// The underlying error wrapped by a [`RespError`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Cause {
	#[error(transparent)]
	Resp(Box<RespError>),

	#[error(transparent)]
	ParseInt(#[from] std::num::ParseIntError),

	#[error(transparent)]
	Utf8(#[from] std::str::Utf8Error),

	/// Arrays nested deeper than the extractor accepts
	#[error("arrays nested deeper than {0} levels")]
	TooDeep(usize),
}

impl From<RespError> for Cause {
	fn from(e: RespError) -> Self {
		Cause::Resp(Box::new(e))
	}
}

/// A structured parse failure.
///
/// Carries the kind of failure, the name of the routine that produced it, the
/// raw input that routine was handed, and optionally the error it wraps. For
/// array failures the input is always the whole array buffer, never the
/// partially consumed remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct RespError {
	kind: ErrorKind,
	func: &'static str,
	input: Bytes,
	cause: Option<Cause>,
}

impl fmt::Display for RespError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "resp.{}: parsing {:?}: {}", self.func, self.input, self.kind)?;
		if let Some(cause) = &self.cause {
			write!(f, ": {cause}")?;
		}
		Ok(())
	}
}

impl std::error::Error for RespError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.cause.as_ref()? {
			Cause::Resp(inner) => Some(inner.as_ref()),
			Cause::ParseInt(e) => Some(e),
			Cause::Utf8(e) => Some(e),
			Cause::TooDeep(_) => None,
		}
	}
}

impl RespError {
	pub fn new(kind: ErrorKind, func: &'static str, input: Bytes) -> Self {
		Self {
			kind,
			func,
			input,
			cause: None,
		}
	}

	/// Attach the error this one wraps.
	pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
		self.cause = Some(cause.into());
		self
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	/// Name of the routine that produced the error.
	pub fn func(&self) -> &'static str {
		self.func
	}

	/// The raw input the producing routine was given.
	pub fn input(&self) -> &Bytes {
		&self.input
	}

	pub fn cause(&self) -> Option<&Cause> {
		self.cause.as_ref()
	}

	/// Reports whether this error, or any RESP error it wraps, has `kind`.
	pub fn is(&self, kind: ErrorKind) -> bool {
		let mut current = Some(self);
		while let Some(err) = current {
			if err.kind == kind {
				return true;
			}
			current = err.inner();
		}
		false
	}

	/// The innermost RESP error in the cause chain.
	pub fn root_cause(&self) -> &RespError {
		let mut current = self;
		while let Some(inner) = current.inner() {
			current = inner;
		}
		current
	}

	/// Whether this error is the nesting limit itself rather than a wrapper
	pub(crate) fn is_too_deep(&self) -> bool {
		matches!(self.cause, Some(Cause::TooDeep(_)))
	}

	fn inner(&self) -> Option<&RespError> {
		match &self.cause {
			Some(Cause::Resp(inner)) => Some(inner.as_ref()),
			_ => None,
		}
	}

	pub(crate) fn invalid_type(func: &'static str, input: &Bytes) -> Self {
		Self::new(ErrorKind::InvalidType, func, input.clone())
	}

	pub(crate) fn invalid_input_parts(func: &'static str, input: &Bytes) -> Self {
		Self::new(ErrorKind::InvalidInputParts, func, input.clone())
	}

	pub(crate) fn invalid_input_data(func: &'static str, input: &Bytes) -> Self {
		Self::new(ErrorKind::InvalidInputData, func, input.clone())
	}

	pub(crate) fn data_mismatch(func: &'static str, input: &Bytes) -> Self {
		Self::new(ErrorKind::DataMismatch, func, input.clone())
	}

	pub(crate) fn failed_extraction(func: &'static str, input: &Bytes) -> Self {
		Self::new(ErrorKind::FailedExtraction, func, input.clone())
	}
}
