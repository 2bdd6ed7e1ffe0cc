//! RESP data types and value representation.

use bytes::Bytes;

/// Represents a RESP protocol value.
///
/// Bulk strings and arrays carry an `Option` payload: `None` is the null
/// sentinel (`$-1\r\n`, `*-1\r\n`), which is distinct from an empty payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespValue {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` when null
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`, or `*-1\r\n` when null
	Array(Option<Vec<RespValue>>),
}

impl RespValue {
	/// Check if the value is an error
	pub fn is_error(&self) -> bool {
		matches!(self, RespValue::Error(_))
	}

	/// Check if the value is a null bulk string or a null array
	pub fn is_null(&self) -> bool {
		matches!(self, RespValue::BulkString(None) | RespValue::Array(None))
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Try to convert to bytes
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Try to convert to integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			RespValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to convert to a present array
	pub fn as_array(&self) -> Option<&[RespValue]> {
		match self {
			RespValue::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|s| String::from_utf8_lossy(s).into_owned())
	}

	/// Try to consume and convert to Vec<RespValue>
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(a) => a,
			_ => None,
		}
	}

	/// Elements of an array; a null array yields an empty slice.
	///
	/// Returns `None` for non-array values.
	pub fn elements(&self) -> Option<&[RespValue]> {
		match self {
			RespValue::Array(Some(a)) => Some(a),
			RespValue::Array(None) => Some(&[]),
			_ => None,
		}
	}

	/// Append an element to an array, turning a null array into a present one.
	///
	/// Returns the element back if `self` is not an array.
	pub fn push(&mut self, element: RespValue) -> Result<(), RespValue> {
		match self {
			RespValue::Array(elements) => {
				elements.get_or_insert_with(Vec::new).push(element);
				Ok(())
			}
			_ => Err(element),
		}
	}

	// Convenience constructors

	/// Create a simple string value
	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	/// Create an error value
	pub fn error(e: impl Into<Bytes>) -> Self {
		RespValue::Error(e.into())
	}

	/// Create an integer value
	pub fn integer(i: i64) -> Self {
		RespValue::Integer(i)
	}

	/// Create a present bulk string value
	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(Some(s.into()))
	}

	/// Create a null bulk string
	pub fn null_bulk_string() -> Self {
		RespValue::BulkString(None)
	}

	/// Create a present array value from an iterator
	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(Some(items.into_iter().collect()))
	}

	/// Create a null array
	pub fn null_array() -> Self {
		RespValue::Array(None)
	}
}

// Convenient From implementations
impl From<&str> for RespValue {
	fn from(s: &str) -> Self {
		RespValue::bulk_string(Bytes::copy_from_slice(s.as_bytes()))
	}
}

impl From<String> for RespValue {
	fn from(s: String) -> Self {
		RespValue::bulk_string(s)
	}
}

impl From<&[u8]> for RespValue {
	fn from(b: &[u8]) -> Self {
		RespValue::bulk_string(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for RespValue {
	fn from(v: Vec<u8>) -> Self {
		RespValue::bulk_string(v)
	}
}

impl From<Bytes> for RespValue {
	fn from(b: Bytes) -> Self {
		RespValue::bulk_string(b)
	}
}

impl From<i64> for RespValue {
	fn from(i: i64) -> Self {
		RespValue::Integer(i)
	}
}

impl<T: Into<RespValue>> From<Vec<T>> for RespValue {
	fn from(v: Vec<T>) -> Self {
		RespValue::array(v.into_iter().map(Into::into))
	}
}

impl<T: Into<RespValue>> From<Option<T>> for RespValue {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => RespValue::BulkString(None),
		}
	}
}
