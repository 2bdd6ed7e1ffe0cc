//! # RESP - Redis Serialization Protocol codec
//!
//! Converts between raw byte buffers and a [`RespValue`] tree.
//!
//! - [`extract`] parses one value from the *front* of a buffer and returns the
//!   unconsumed remainder. Arrays are built by extracting elements recursively,
//!   at most [`MAX_DEPTH`] arrays deep.
//! - [`decode`] parses a buffer that must hold exactly one value; trailing
//!   bytes are an error.
//! - [`RespEncoder`] turns any value back into wire bytes.
//!
//! Null bulk strings and null arrays (`$-1\r\n`, `*-1\r\n`) are `None`
//! payloads and never compare equal to their empty counterparts.
//!
//! Failures are [`RespError`]s carrying an [`ErrorKind`], the routine that
//! produced them, the raw input, and the error they wrap, if any.
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use resp::ErrorKind;
//! use resp::RespEncoder;
//! use resp::RespValue;
//!
//! let value = RespValue::array(vec![
//! 	RespValue::bulk_string("ECHO"),
//! 	RespValue::bulk_string("hi"),
//! ]);
//! let wire = value.encode();
//! assert_eq!(&wire[..], b"*2\r\n$4\r\nECHO\r\n$2\r\nhi\r\n");
//! assert_eq!(resp::decode(&wire).unwrap(), value);
//!
//! let (first, rest) = resp::extract(&Bytes::from_static(b":1\r\n:2\r\n")).unwrap();
//! assert_eq!(first, RespValue::Integer(1));
//! assert_eq!(&rest[..], b":2\r\n");
//!
//! let err = resp::decode(&Bytes::from_static(b"*1\r\n$10\r\nfoo\r\n")).unwrap_err();
//! assert!(err.is(ErrorKind::DataMismatch));
//! ```

mod decode;
mod encode;
mod error;
mod extract;
mod types;
mod utils;

pub use decode::decode;
pub use encode::RespEncoder;
pub use error::Cause;
pub use error::ErrorKind;
pub use error::RespError;
pub use extract::Extracted;
pub use extract::MAX_DEPTH;
pub use extract::extract;
pub use extract::extract_array;
pub use extract::extract_bulk_string;
pub use extract::extract_error;
pub use extract::extract_integer;
pub use extract::extract_simple_string;
pub use types::RespValue;
pub use utils::CRLF;
