//! Utility functions and constants for the RESP wire format.

use memchr::memmem;

use crate::error::Cause;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Length header of a null bulk string or null array.
pub const NULL_LENGTH: i64 = -1;

/// Find the position of the first CRLF in a byte slice
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
	memmem::find(buf, CRLF)
}

/// Parse a signed decimal integer from a byte slice.
///
/// Accepts an optional leading `+` or `-` and leading zeros.
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, Cause> {
	let s = std::str::from_utf8(buf)?;
	Ok(s.parse::<i64>()?)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_find_crlf() {
		assert_eq!(find_crlf(b"hello\r\n"), Some(5));
		assert_eq!(find_crlf(b"hello"), None);
		assert_eq!(find_crlf(b"\r\n"), Some(0));
		assert_eq!(find_crlf(b"a\rb\nc\r\n"), Some(5));
	}

	#[rstest]
	#[case(b"123", 123)]
	#[case(b"-456", -456)]
	#[case(b"+1000", 1000)]
	#[case(b"00001000", 1000)]
	fn test_parse_integer(#[case] input: &[u8], #[case] expected: i64) {
		assert_eq!(parse_integer(input).unwrap(), expected);
	}

	#[rstest]
	#[case(b"abc")]
	#[case(b"")]
	#[case(b"12.5")]
	#[case(b"\xff1")]
	fn test_parse_integer_invalid(#[case] input: &[u8]) {
		assert!(parse_integer(input).is_err());
	}
}
