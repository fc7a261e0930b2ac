use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
	pub server_host: String,
	pub port: u16,
	pub store_path: PathBuf,
	pub upload_dir: PathBuf,
	pub max_upload_bytes: usize,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		Ok(Self {
			server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
			port: env::var("PORT")
				.unwrap_or_else(|_| "8080".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPort)?,
			store_path: env::var("STORE_PATH")
				.unwrap_or_else(|_| "technical_issue_log.xlsx".to_string())
				.into(),
			upload_dir: env::var("UPLOAD_DIR")
				.unwrap_or_else(|_| "uploads".to_string())
				.into(),
			max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
				.unwrap_or_else(|_| "52428800".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidUploadLimit)?,
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.server_host, self.port)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid port number")]
	InvalidPort,

	#[error("MAX_UPLOAD_BYTES must be a number")]
	InvalidUploadLimit,
}
