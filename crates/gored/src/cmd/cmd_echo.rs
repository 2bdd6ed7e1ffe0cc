use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;

/// ECHO command implementation
pub struct EchoCmd {
	meta: CmdMeta,
}

impl Default for EchoCmd {
	fn default() -> Self {
		Self {
			meta: CmdMeta::new("ECHO", 2),
		}
	}
}

impl Cmd for EchoCmd {
	fn meta(&self) -> &CmdMeta {
		&self.meta
	}

	fn do_cmd(&self, args: &[Bytes]) -> RespValue {
		RespValue::bulk_string(args[0].clone())
	}
}
