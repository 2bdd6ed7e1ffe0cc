//! Whole-buffer decoding.
//!
//! Unlike extraction, decoding requires the input to hold exactly one value:
//! any byte left over after it is an error.

use bytes::Bytes;

use crate::error::RespError;
use crate::extract::bulk_string;
use crate::extract::extract_array;
use crate::extract::read_length;
use crate::extract::read_line;
use crate::types::RespValue;
use crate::utils::*;

/// Decode a buffer that must contain exactly one RESP value.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use resp::RespValue;
///
/// let value = resp::decode(&Bytes::from_static(b"*1\r\n$4\r\nPING\r\n")).unwrap();
/// assert_eq!(value, RespValue::array(vec![RespValue::bulk_string("PING")]));
///
/// let err = resp::decode(&Bytes::from_static(b"+OK\r\nEXTRA")).unwrap_err();
/// assert_eq!(err.kind(), resp::ErrorKind::InvalidInputData);
/// ```
pub fn decode(input: &Bytes) -> Result<RespValue, RespError> {
	match input.first() {
		Some(&SIMPLE_STRING) => decode_line("decode_simple_string", input).map(RespValue::SimpleString),
		Some(&ERROR) => decode_line("decode_error", input).map(RespValue::Error),
		Some(&INTEGER) => decode_integer(input),
		Some(&BULK_STRING) => decode_bulk_string(input),
		Some(&ARRAY) => decode_array(input),
		_ => Err(RespError::invalid_type("decode", input)),
	}
}

/// Split a single-line value on CRLF and require nothing after the terminator.
///
/// An embedded terminator yields a third segment and is reported as
/// `InvalidInputParts`; other trailing bytes are `InvalidInputData`.
fn decode_line(func: &'static str, input: &Bytes) -> Result<Bytes, RespError> {
	let pos = find_crlf(input).ok_or_else(|| RespError::invalid_input_parts(func, input))?;
	let tail = &input[pos + CRLF.len()..];
	if find_crlf(tail).is_some() {
		return Err(RespError::invalid_input_parts(func, input));
	}
	if !tail.is_empty() {
		return Err(RespError::invalid_input_data(func, input));
	}
	Ok(input.slice(1..pos))
}

fn decode_integer(input: &Bytes) -> Result<RespValue, RespError> {
	const FUNC: &str = "decode_integer";
	let digits = decode_line(FUNC, input)?;
	let n = parse_integer(&digits)
		.map_err(|e| RespError::invalid_input_data(FUNC, input).with_cause(e))?;
	Ok(RespValue::Integer(n))
}

fn decode_bulk_string(input: &Bytes) -> Result<RespValue, RespError> {
	const FUNC: &str = "decode_bulk_string";
	let (value, remainder) = bulk_string(FUNC, input)?;
	if !remainder.is_empty() {
		return Err(RespError::invalid_input_data(FUNC, input));
	}
	Ok(value)
}

fn decode_array(input: &Bytes) -> Result<RespValue, RespError> {
	const FUNC: &str = "decode_array";
	let (header, rest) = read_line(FUNC, ARRAY, input)?;
	if read_length(FUNC, &header, input)?.is_none() {
		if !rest.is_empty() {
			return Err(RespError::invalid_input_data(FUNC, input));
		}
		return Ok(RespValue::Array(None));
	}

	let (value, remainder) = extract_array(input)
		.map_err(|e| RespError::failed_extraction(FUNC, input).with_cause(e))?;
	if !remainder.is_empty() {
		return Err(RespError::invalid_input_data(FUNC, input));
	}
	Ok(value)
}
