use std::sync::Arc;

use bytes::Bytes;
use resp::RespEncoder;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::cmd::CmdTable;
use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;

pub struct Server {
	config: ServerConfig,
	dispatcher: Arc<Dispatcher>,
}

impl Server {
	// Create a new server instance
	pub fn new(config: ServerConfig) -> Self {
		let dispatcher = Arc::new(Dispatcher::new(CmdTable::new(), config.lenient_decode));
		Self { config, dispatcher }
	}

	pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let addr = self.config.addr();
		let listener = TcpListener::bind(&addr).await?;
		info!("Gored server listening on {}", addr);

		#[cfg(unix)]
		if self.config.config_file.is_some() {
			tokio::spawn(reload_on_hangup(self.config.clone()));
		}

		self.serve(listener).await
	}

	/// Accept connections on an already bound listener until the task is dropped.
	pub async fn serve(
		self,
		listener: TcpListener,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let read_buffer_size = self.config.read_buffer_size;

		loop {
			match listener.accept().await {
				Ok((socket, addr)) => {
					debug!("New client connected from {}", addr);
					let dispatcher = self.dispatcher.clone();

					tokio::spawn(async move {
						match handle_client(socket, dispatcher, read_buffer_size).await {
							Ok(()) => debug!("Client {} disconnected", addr),
							Err(e) => error!("Error handling client {}: {}", addr, e),
						}
					});
				}
				Err(e) => {
					error!("Error accepting connection: {}", e);
				}
			}
		}
	}
}

/// Re-apply the configured log level every time the process receives SIGHUP.
#[cfg(unix)]
async fn reload_on_hangup(config: ServerConfig) {
	use tokio::signal::unix::SignalKind;
	use tokio::signal::unix::signal;

	let mut hangup = match signal(SignalKind::hangup()) {
		Ok(hangup) => hangup,
		Err(e) => {
			error!("Failed to listen for SIGHUP: {}", e);
			return;
		}
	};

	while hangup.recv().await.is_some() {
		match config.reload_log_level() {
			Ok(level) => info!("Log level reloaded to {}", level),
			Err(e) => error!("Failed to reload log level: {}", e),
		}
	}
}

async fn handle_client(
	mut socket: TcpStream,
	dispatcher: Arc<Dispatcher>,
	read_buffer_size: usize,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let mut buffer = vec![0u8; read_buffer_size];

	loop {
		let n = match socket.read(&mut buffer).await {
			Ok(n) => n,
			Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => {
				// Connection reset by peer (e.g. client crashed or closed abruptly)
				debug!("Connection reset by peer");
				return Ok(());
			}
			Err(e) => return Err(e.into()),
		};

		if n == 0 {
			return Ok(());
		}

		// Every read is decoded on its own; values split across reads fail to decode.
		let input = Bytes::copy_from_slice(&buffer[..n]);
		let response = dispatcher.respond(resp::decode(&input));

		if let Err(e) = socket.write_all(&response.encode()).await {
			if e.kind() == std::io::ErrorKind::ConnectionReset {
				debug!("Connection reset by peer");
				return Ok(());
			}
			return Err(e.into());
		}
	}
}
