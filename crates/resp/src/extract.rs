//! Prefix extraction.
//!
//! Every function here parses exactly one value from the front of its input
//! and hands back the unconsumed remainder. Array elements are extracted
//! recursively from whatever the previous element left behind, up to
//! [`MAX_DEPTH`] levels of nesting.

use bytes::Bytes;

use crate::error::Cause;
use crate::error::RespError;
use crate::types::RespValue;
use crate::utils::*;

/// A value parsed from the front of a buffer plus the bytes that follow it.
pub type Extracted = Result<(RespValue, Bytes), RespError>;

/// Deepest array nesting accepted, counting the outermost array as the first
/// level. Anything deeper fails with `InvalidInputData` and a
/// [`Cause::TooDeep`] cause instead of recursing further.
pub const MAX_DEPTH: usize = 512;

/// Extract one value of any type, dispatching on the leading byte.
pub fn extract(input: &Bytes) -> Extracted {
	extract_at(input, 0)
}

fn extract_at(input: &Bytes, depth: usize) -> Extracted {
	match input.first() {
		Some(&SIMPLE_STRING) => extract_simple_string(input),
		Some(&ERROR) => extract_error(input),
		Some(&INTEGER) => extract_integer(input),
		Some(&BULK_STRING) => extract_bulk_string(input),
		Some(&ARRAY) => array_at(input, depth),
		_ => Err(RespError::invalid_type("extract", input)),
	}
}

pub fn extract_simple_string(input: &Bytes) -> Extracted {
	let (text, rest) = read_line("extract_simple_string", SIMPLE_STRING, input)?;
	Ok((RespValue::SimpleString(text), rest))
}

pub fn extract_error(input: &Bytes) -> Extracted {
	let (text, rest) = read_line("extract_error", ERROR, input)?;
	Ok((RespValue::Error(text), rest))
}

pub fn extract_integer(input: &Bytes) -> Extracted {
	const FUNC: &str = "extract_integer";
	let (digits, rest) = read_line(FUNC, INTEGER, input)?;
	let n = parse_integer(&digits)
		.map_err(|e| RespError::invalid_input_data(FUNC, input).with_cause(e))?;
	Ok((RespValue::Integer(n), rest))
}

pub fn extract_bulk_string(input: &Bytes) -> Extracted {
	bulk_string("extract_bulk_string", input)
}

/// Extract an array, recursing into each element.
///
/// A failing element turns into a `FailedExtraction` error that wraps the
/// element's error and reports the whole `input`. The nesting limit error is
/// the exception: it reaches the caller unwrapped, reporting the array that
/// crossed [`MAX_DEPTH`].
pub fn extract_array(input: &Bytes) -> Extracted {
	array_at(input, 0)
}

fn array_at(input: &Bytes, depth: usize) -> Extracted {
	const FUNC: &str = "extract_array";
	if depth >= MAX_DEPTH {
		return Err(RespError::invalid_input_data(FUNC, input).with_cause(Cause::TooDeep(MAX_DEPTH)));
	}

	let (header, mut remainder) = read_line(FUNC, ARRAY, input)?;
	let Some(count) = read_length(FUNC, &header, input)? else {
		return Ok((RespValue::Array(None), remainder));
	};

	// Every element takes at least three bytes, so the remainder bounds the
	// allocation no matter what the header claims.
	let mut elements = Vec::with_capacity(count.min(remainder.len()));
	for _ in 0..count {
		let (element, rest) = extract_at(&remainder, depth + 1).map_err(|e| {
			if e.is_too_deep() {
				e
			} else {
				RespError::failed_extraction(FUNC, input).with_cause(e)
			}
		})?;
		elements.push(element);
		remainder = rest;
	}

	Ok((RespValue::Array(Some(elements)), remainder))
}

/// Bulk string parsing shared by extraction and decoding; `func` names the
/// caller in any error.
pub(crate) fn bulk_string(func: &'static str, input: &Bytes) -> Extracted {
	let (header, rest) = read_line(func, BULK_STRING, input)?;
	let Some(len) = read_length(func, &header, input)? else {
		return Ok((RespValue::BulkString(None), rest));
	};

	let terminated = len
		.checked_add(CRLF.len())
		.and_then(|end| rest.get(len..end))
		== Some(CRLF);
	if terminated {
		return Ok((
			RespValue::BulkString(Some(rest.slice(..len))),
			rest.slice(len + CRLF.len()..),
		));
	}

	// The payload is not where the header says it ends. If it ends anywhere
	// else the lengths disagree, otherwise the payload is unterminated.
	match find_crlf(&rest) {
		Some(_) => Err(RespError::data_mismatch(func, input)),
		None => Err(RespError::invalid_input_parts(func, input)),
	}
}

/// Check the type marker and split `input` on its first CRLF.
///
/// Returns the line without its marker and everything after the terminator.
pub(crate) fn read_line(func: &'static str, marker: u8, input: &Bytes) -> Result<(Bytes, Bytes), RespError> {
	if input.first() != Some(&marker) {
		return Err(RespError::invalid_type(func, input));
	}
	let pos = find_crlf(input).ok_or_else(|| RespError::invalid_input_parts(func, input))?;
	Ok((input.slice(1..pos), input.slice(pos + CRLF.len()..)))
}

/// Parse a bulk string length or array count header.
///
/// `None` means the null sentinel (`-1`); any other negative value is invalid.
pub(crate) fn read_length(func: &'static str, header: &[u8], input: &Bytes) -> Result<Option<usize>, RespError> {
	let n = parse_integer(header)
		.map_err(|e| RespError::invalid_input_data(func, input).with_cause(e))?;
	if n == NULL_LENGTH {
		return Ok(None);
	}
	usize::try_from(n)
		.map(Some)
		.map_err(|_| RespError::invalid_input_data(func, input))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::ErrorKind;

	fn b(s: &'static str) -> Bytes {
		Bytes::from_static(s.as_bytes())
	}

	#[rstest]
	#[case("+This is a simple string\r\n", "This is a simple string", "")]
	#[case("+\r\n", "", "")]
	#[case("+This is a simple string\r\nAnd this is the remainder\r\n", "This is a simple string", "And this is the remainder\r\n")]
	#[case("+This is a simple string\r\nAnd this \r is the remainder", "This is a simple string", "And this \r is the remainder")]
	fn test_extract_simple_string(#[case] input: &'static str, #[case] text: &'static str, #[case] rest: &'static str) {
		let (value, remainder) = extract_simple_string(&b(input)).unwrap();
		assert_eq!(value, RespValue::simple_string(text));
		assert_eq!(remainder, rest);
	}

	#[rstest]
	#[case("This is not a simple string", ErrorKind::InvalidType)]
	#[case("+This is not a simple string", ErrorKind::InvalidInputParts)]
	#[case("-wrong marker\r\n", ErrorKind::InvalidType)]
	fn test_extract_simple_string_invalid(#[case] input: &'static str, #[case] kind: ErrorKind) {
		let err = extract_simple_string(&b(input)).unwrap_err();
		assert_eq!(err.kind(), kind);
		assert_eq!(err.func(), "extract_simple_string");
		assert_eq!(err.input(), &b(input));
	}

	#[rstest]
	#[case("-This is an error string\r\n", "This is an error string", "")]
	#[case("-\r\n", "", "")]
	#[case("-ERR boom\r\n:1\r\n", "ERR boom", ":1\r\n")]
	fn test_extract_error(#[case] input: &'static str, #[case] text: &'static str, #[case] rest: &'static str) {
		let (value, remainder) = extract_error(&b(input)).unwrap();
		assert_eq!(value, RespValue::error(text));
		assert_eq!(remainder, rest);
	}

	#[test]
	fn test_extract_error_without_terminator() {
		let err = extract_error(&b("-This is not an error string")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidInputParts);
	}

	#[rstest]
	#[case(":12345\r\n", 12345, "")]
	#[case(":12345\r\nAnd this is the remainder\r\n", 12345, "And this is the remainder\r\n")]
	#[case(":-7\r\n:8\r\n", -7, ":8\r\n")]
	#[case(":+1000\r\n", 1000, "")]
	fn test_extract_integer(#[case] input: &'static str, #[case] n: i64, #[case] rest: &'static str) {
		let (value, remainder) = extract_integer(&b(input)).unwrap();
		assert_eq!(value, RespValue::Integer(n));
		assert_eq!(remainder, rest);
	}

	#[rstest]
	#[case(":\r\n", ErrorKind::InvalidInputData)]
	#[case(":123.45\r\n", ErrorKind::InvalidInputData)]
	#[case(":12345", ErrorKind::InvalidInputParts)]
	#[case("This is not an integer", ErrorKind::InvalidType)]
	fn test_extract_integer_invalid(#[case] input: &'static str, #[case] kind: ErrorKind) {
		let err = extract_integer(&b(input)).unwrap_err();
		assert_eq!(err.kind(), kind);
		assert_eq!(err.input(), &b(input));
	}

	#[test]
	fn test_extract_integer_keeps_parse_cause() {
		let err = extract_integer(&b(":foo\r\n")).unwrap_err();
		assert!(matches!(err.cause(), Some(crate::Cause::ParseInt(_))));
	}

	#[rstest]
	#[case("$6\r\nfoobar\r\n", Some("foobar"), "")]
	#[case("$6\r\nfoobar\r\n+hello\r\n-world\r\n", Some("foobar"), "+hello\r\n-world\r\n")]
	#[case("$0\r\n\r\n", Some(""), "")]
	#[case("$7\r\nfoo\nbar\r\n", Some("foo\nbar"), "")]
	#[case("$7\r\nfoo\rbar\r\n", Some("foo\rbar"), "")]
	#[case("$8\r\nfoo\r\nbar\r\n", Some("foo\r\nbar"), "")]
	#[case("$-1\r\n", None, "")]
	#[case("$-1\r\n:1\r\n", None, ":1\r\n")]
	fn test_extract_bulk_string(#[case] input: &'static str, #[case] payload: Option<&'static str>, #[case] rest: &'static str) {
		let (value, remainder) = extract_bulk_string(&b(input)).unwrap();
		assert_eq!(value, RespValue::BulkString(payload.map(b)));
		assert_eq!(remainder, rest);
	}

	#[rstest]
	#[case("This is not a bulk string", ErrorKind::InvalidType)]
	#[case("$6", ErrorKind::InvalidInputParts)]
	#[case("$6\r\nfoobar", ErrorKind::InvalidInputParts)]
	#[case("$-1.5\r\nhi\r\n", ErrorKind::InvalidInputData)]
	#[case("$-2\r\n", ErrorKind::InvalidInputData)]
	#[case("$6\r\nfoo\r\n", ErrorKind::DataMismatch)]
	#[case("$2\r\nfoo\r\n", ErrorKind::DataMismatch)]
	fn test_extract_bulk_string_invalid(#[case] input: &'static str, #[case] kind: ErrorKind) {
		let err = extract_bulk_string(&b(input)).unwrap_err();
		assert_eq!(err.kind(), kind);
		assert_eq!(err.input(), &b(input));
	}

	#[test]
	fn test_extract_array() {
		let (value, remainder) = extract_array(&b("*3\r\n:1\r\n:2\r\n:3\r\n")).unwrap();
		assert_eq!(
			value,
			RespValue::array(vec![RespValue::Integer(1), RespValue::Integer(2), RespValue::Integer(3)])
		);
		assert!(remainder.is_empty());
	}

	#[test]
	fn test_extract_empty_and_null_array() {
		let (value, remainder) = extract_array(&b("*0\r\n")).unwrap();
		assert_eq!(value, RespValue::array(vec![]));
		assert!(remainder.is_empty());

		let (value, remainder) = extract_array(&b("*-1\r\n:5\r\n")).unwrap();
		assert_eq!(value, RespValue::null_array());
		assert_eq!(remainder, ":5\r\n");
	}

	#[test]
	fn test_extract_array_mixed_elements() {
		let (value, _) = extract_array(&b("*4\r\n:1\r\n+hello!\r\n-world!\r\n$2\r\nhi\r\n")).unwrap();
		assert_eq!(
			value,
			RespValue::array(vec![
				RespValue::Integer(1),
				RespValue::simple_string("hello!"),
				RespValue::error("world!"),
				RespValue::bulk_string("hi"),
			])
		);
	}

	#[test]
	fn test_extract_array_nested() {
		let (value, remainder) = extract_array(&b("*3\r\n*3\r\n:1\r\n:2\r\n:3\r\n:2\r\n:3\r\n")).unwrap();
		assert_eq!(
			value,
			RespValue::array(vec![
				RespValue::array(vec![RespValue::Integer(1), RespValue::Integer(2), RespValue::Integer(3)]),
				RespValue::Integer(2),
				RespValue::Integer(3),
			])
		);
		assert!(remainder.is_empty());
	}

	#[test]
	fn test_extract_array_leaves_trailing_bytes() {
		let (value, remainder) = extract(&b("*3\r\n:1\r\n:2\r\n:3\r\n:4")).unwrap();
		assert_eq!(value.as_array().map(|a| a.len()), Some(3));
		assert_eq!(remainder, ":4");
	}

	#[test]
	fn test_extract_array_failed_element_reports_original_input() {
		let input = "*3\r\n:1\r\n:2\r\nThis is not an integer\r\n:4";
		let err = extract(&b(input)).unwrap_err();

		assert_eq!(err.kind(), ErrorKind::FailedExtraction);
		assert_eq!(err.func(), "extract_array");
		assert_eq!(err.input(), &b(input));

		let root = err.root_cause();
		assert_eq!(root.kind(), ErrorKind::InvalidType);
		assert_eq!(root.input(), &b("This is not an integer\r\n:4"));
	}

	#[test]
	fn test_extract_array_nested_failure_is_findable() {
		let err = extract(&b("*1\r\n*1\r\n$10\r\nfoo\r\n")).unwrap_err();
		assert!(err.is(ErrorKind::FailedExtraction));
		assert!(err.is(ErrorKind::DataMismatch));
		assert_eq!(err.root_cause().kind(), ErrorKind::DataMismatch);
	}

	#[rstest]
	#[case("This is not an array", ErrorKind::InvalidType)]
	#[case("*3", ErrorKind::InvalidInputParts)]
	#[case("*foo\r\n", ErrorKind::InvalidInputData)]
	#[case("*-5\r\n", ErrorKind::InvalidInputData)]
	#[case("*2\r\n:1\r\n", ErrorKind::FailedExtraction)]
	fn test_extract_array_invalid(#[case] input: &'static str, #[case] kind: ErrorKind) {
		let err = extract_array(&b(input)).unwrap_err();
		assert_eq!(err.kind(), kind);
	}

	#[rstest]
	#[case("")]
	#[case("hello")]
	#[case("_\r\n")]
	fn test_extract_unknown_type(#[case] input: &'static str) {
		let err = extract(&b(input)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidType);
		assert_eq!(err.func(), "extract");
	}

	fn nested(levels: usize) -> Bytes {
		Bytes::from("*1\r\n".repeat(levels) + ":1\r\n")
	}

	#[test]
	fn test_extract_array_at_depth_limit() {
		let (mut value, remainder) = extract_array(&nested(MAX_DEPTH)).unwrap();
		assert!(remainder.is_empty());

		let mut levels = 0;
		while let RespValue::Array(Some(mut items)) = value {
			levels += 1;
			value = items.remove(0);
		}
		assert_eq!(levels, MAX_DEPTH);
		assert_eq!(value, RespValue::Integer(1));
	}

	#[test]
	fn test_extract_array_past_depth_limit() {
		let input = nested(MAX_DEPTH + 1);
		let err = extract(&input).unwrap_err();

		assert_eq!(err.kind(), ErrorKind::InvalidInputData);
		assert_eq!(err.func(), "extract_array");
		assert!(matches!(err.cause(), Some(crate::Cause::TooDeep(MAX_DEPTH))));
		// Reported by the array that crossed the limit, not wrapped per level.
		assert_eq!(err.input(), &input.slice(MAX_DEPTH * 4..));
	}
}
