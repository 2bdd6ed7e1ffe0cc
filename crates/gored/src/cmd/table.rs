use std::collections::HashMap;
use std::sync::Arc;

use super::Cmd;
use super::EchoCmd;
use super::PingCmd;

pub struct CmdTable {
	inner: HashMap<String, Arc<dyn Cmd>>,
}

impl Default for CmdTable {
	fn default() -> Self {
		Self::new()
	}
}

impl CmdTable {
	pub fn new() -> Self {
		let mut inner: HashMap<String, Arc<dyn Cmd>> = HashMap::new();
		inner.insert("PING".to_string(), Arc::new(PingCmd::default()));
		inner.insert("ECHO".to_string(), Arc::new(EchoCmd::default()));
		Self { inner }
	}

	/// Look up by upper-case name
	pub fn get_cmd(&self, name: &str) -> Option<&Arc<dyn Cmd>> {
		self.inner.get(name)
	}
}
