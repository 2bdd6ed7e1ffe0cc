use bytes::Bytes;
use resp::RespValue;
use tracing::debug;

use super::cmd_meta::CmdMeta;

/// Command trait - all commands must implement this
pub trait Cmd: Send + Sync {
	/// Get command metadata
	fn meta(&self) -> &CmdMeta;

	/// Run the command; `args` excludes the command name and already passed
	/// the arity check.
	fn do_cmd(&self, args: &[Bytes]) -> RespValue;

	/// Execute the command.
	///
	/// A call with the wrong number of arguments is not this command, so it
	/// gets the default `+OK` acknowledgement like any unrecognized request.
	fn execute(&self, args: &[Bytes]) -> RespValue {
		if let Err(reason) = self.meta().validate_arity(args.len() + 1) {
			debug!(command = %self.meta().name, %reason, "Acknowledging request");
			return RespValue::simple_string("OK");
		}

		self.do_cmd(args)
	}
}
