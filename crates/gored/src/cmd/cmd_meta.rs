/// Immutable facts about a command
#[derive(Debug, Clone, Default)]
pub struct CmdMeta {
	pub name: String,
	/// Argument count including the command name.
	/// Positive means exactly this many, negative means at least `-arity`,
	/// zero means anything goes.
	pub arity: i16,
}

impl CmdMeta {
	pub fn new(name: &str, arity: i16) -> Self {
		Self {
			name: name.to_string(),
			arity,
		}
	}

	/// Check `arg_count` (command name included) against the arity
	pub fn validate_arity(&self, arg_count: usize) -> Result<(), String> {
		let ok = match self.arity {
			0 => true,
			n if n > 0 => arg_count == n as usize,
			n => arg_count >= n.unsigned_abs() as usize,
		};

		if ok {
			Ok(())
		} else {
			Err(format!(
				"ERR wrong number of arguments for '{}' command",
				self.name.to_lowercase()
			))
		}
	}
}
