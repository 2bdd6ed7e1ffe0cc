use gored::config::Cli;
use gored::config::Parser;
use gored::config::ServerConfig;
use gored::logo;
use gored::server::Server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let config = ServerConfig::load(Cli::parse())?;

	telemetry::init(&config.log_level)?;

	logo::show_logo(&config.addr());

	Server::new(config).run().await
}
