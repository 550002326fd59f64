use std::path::PathBuf;

use clap::Parser;

/// Configuration for the keyword server
#[derive(Debug, Clone, Parser)]
#[command(name = "kw-gen-server")]
#[command(about = "HTTP front end for the SEO keyword generator")]
pub struct Config {
	/// Address to bind (default: 127.0.0.1)
	#[arg(long, env = "KW_GEN_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on (default: 5000)
	#[arg(short, long, env = "KW_GEN_PORT", default_value = "5000")]
	pub port: u16,

	/// TOML template table replacing the built-in categories
	#[arg(short, long, env = "KW_GEN_TEMPLATES")]
	pub templates: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, env = "KW_GEN_LOG_LEVEL", default_value = "info")]
	pub log_level: String,
}
