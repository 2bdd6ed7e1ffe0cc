use bytes::Bytes;
use resp::RespValue;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCmdError {
	#[error("expected array")]
	NotArray,
	#[error("empty command")]
	Empty,
	#[error("invalid command name")]
	InvalidName,
	#[error("invalid argument at position {0}")]
	InvalidArgument(usize),
}

/// A request split into its upper-cased name and raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCmd {
	pub name: String,
	pub args: Vec<Bytes>,
}

impl TryFrom<RespValue> for ParsedCmd {
	type Error = ParseCmdError;

	fn try_from(value: RespValue) -> Result<Self, Self::Error> {
		let mut items = value.into_vec().ok_or(ParseCmdError::NotArray)?.into_iter();

		let name = match items.next() {
			None => return Err(ParseCmdError::Empty),
			Some(RespValue::BulkString(Some(b))) => std::str::from_utf8(&b)
				.map_err(|_| ParseCmdError::InvalidName)?
				.to_uppercase(),
			Some(_) => return Err(ParseCmdError::InvalidName),
		};

		let args = items
			.enumerate()
			.map(|(i, v)| match v {
				RespValue::BulkString(Some(b)) => Ok(b),
				_ => Err(ParseCmdError::InvalidArgument(i + 1)),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(ParsedCmd { name, args })
	}
}
