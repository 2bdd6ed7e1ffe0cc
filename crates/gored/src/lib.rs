//! A small RESP server answering `PING` and `ECHO` and acknowledging
//! everything else, built on the [`resp`] codec.

pub mod cmd;
pub mod config;
pub mod dispatcher;
pub mod logo;
pub mod server;
