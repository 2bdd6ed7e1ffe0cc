use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;

/// PING command implementation
pub struct PingCmd {
	meta: CmdMeta,
}

impl Default for PingCmd {
	fn default() -> Self {
		Self {
			meta: CmdMeta::new("PING", 1),
		}
	}
}

impl Cmd for PingCmd {
	fn meta(&self) -> &CmdMeta {
		&self.meta
	}

	fn do_cmd(&self, _args: &[Bytes]) -> RespValue {
		RespValue::simple_string("PONG")
	}
}
