mod cmd_echo;
mod cmd_meta;
mod cmd_ping;
mod cmd_trait;
mod parsed_cmd;
mod table;

pub use cmd_echo::EchoCmd;
pub use cmd_meta::CmdMeta;
pub use cmd_ping::PingCmd;
pub use cmd_trait::Cmd;
pub use parsed_cmd::ParseCmdError;
pub use parsed_cmd::ParsedCmd;
pub use table::CmdTable;
