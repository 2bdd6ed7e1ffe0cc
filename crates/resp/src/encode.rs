//! Wire encoding for [`RespValue`] trees.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::RespValue;
use crate::utils::*;

/// Trait for encoding RESP values.
///
/// Encoding never fails: any value, decoded or built by hand, has a wire form.
pub trait RespEncoder {
	fn encode_to(&self, buf: &mut BytesMut);

	/// Exact number of bytes `encode_to` will write.
	fn encoded_len(&self) -> usize;

	fn encode(&self) -> Bytes {
		let mut buf = BytesMut::with_capacity(self.encoded_len());
		self.encode_to(&mut buf);
		buf.freeze()
	}
}

impl RespEncoder for RespValue {
	fn encode_to(&self, buf: &mut BytesMut) {
		match self {
			RespValue::SimpleString(s) => encode_line(buf, SIMPLE_STRING, s),
			RespValue::Error(e) => encode_line(buf, ERROR, e),
			RespValue::Integer(i) => encode_integer(buf, INTEGER, *i),
			RespValue::BulkString(None) => encode_integer(buf, BULK_STRING, NULL_LENGTH),
			RespValue::BulkString(Some(s)) => encode_bulk_string(buf, s),
			RespValue::Array(None) => encode_integer(buf, ARRAY, NULL_LENGTH),
			RespValue::Array(Some(arr)) => encode_array(buf, arr),
		}
	}

	fn encoded_len(&self) -> usize {
		match self {
			RespValue::SimpleString(s) | RespValue::Error(s) => 1 + s.len() + CRLF.len(),
			RespValue::Integer(i) => header_len(*i),
			RespValue::BulkString(None) | RespValue::Array(None) => header_len(NULL_LENGTH),
			RespValue::BulkString(Some(s)) => header_len(s.len() as i64) + s.len() + CRLF.len(),
			RespValue::Array(Some(arr)) => {
				header_len(arr.len() as i64) + arr.iter().map(RespEncoder::encoded_len).sum::<usize>()
			}
		}
	}
}

#[inline]
fn header_len(n: i64) -> usize {
	1 + n.to_string().len() + CRLF.len()
}

#[inline]
fn encode_line(buf: &mut BytesMut, marker: u8, s: &Bytes) {
	buf.put_u8(marker);
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

/// Integers, lengths and counts all share the `<marker><decimal>\r\n` shape.
#[inline]
fn encode_integer(buf: &mut BytesMut, marker: u8, i: i64) {
	buf.put_u8(marker);
	buf.put_slice(i.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: &Bytes) {
	encode_integer(buf, BULK_STRING, s.len() as i64);
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

fn encode_array(buf: &mut BytesMut, arr: &[RespValue]) {
	encode_integer(buf, ARRAY, arr.len() as i64);
	for value in arr {
		value.encode_to(buf);
	}
}
