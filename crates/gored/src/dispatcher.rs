use resp::RespError;
use resp::RespValue;
use tracing::debug;
use tracing::warn;

use crate::cmd::CmdTable;
use crate::cmd::ParsedCmd;

/// Turns the outcome of decoding one read into the reply for it.
pub struct Dispatcher {
	cmd_table: CmdTable,
	lenient_decode: bool,
}

impl Dispatcher {
	pub fn new(cmd_table: CmdTable, lenient_decode: bool) -> Self {
		Self {
			cmd_table,
			lenient_decode,
		}
	}

	/// Reply for a decode result.
	///
	/// A decode failure becomes `-ERR Protocol error: ...`, or `+OK` when
	/// lenient decoding is on. Anything that is not a known command with the
	/// right number of arguments is acknowledged with `+OK`.
	pub fn respond(&self, decoded: Result<RespValue, RespError>) -> RespValue {
		match decoded {
			Ok(value) => self.dispatch(value),
			Err(e) if self.lenient_decode => {
				warn!(error = %e, "Acknowledging undecodable request");
				ok()
			}
			Err(e) => {
				warn!(error = %e, kind = ?e.root_cause().kind(), "Protocol error");
				RespValue::error(format!("ERR Protocol error: {}", e))
			}
		}
	}

	fn dispatch(&self, value: RespValue) -> RespValue {
		let parsed_cmd = match ParsedCmd::try_from(value) {
			Ok(cmd) => cmd,
			Err(e) => {
				debug!(reason = %e, "Not a command");
				return ok();
			}
		};

		debug!(
			command = %parsed_cmd.name,
			args = ?parsed_cmd.args,
			"Executing command"
		);

		match self.cmd_table.get_cmd(&parsed_cmd.name) {
			Some(cmd) => cmd.execute(&parsed_cmd.args),
			None => ok(),
		}
	}
}

impl Default for Dispatcher {
	fn default() -> Self {
		Self::new(CmdTable::new(), false)
	}
}

fn ok() -> RespValue {
	RespValue::simple_string("OK")
}
