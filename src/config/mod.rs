use std::env;

#[derive(Clone, Debug)]
pub struct Config {
	pub server_host: String,
	pub server_port: u16,
	pub database_url: String,
	pub max_pool_size: u32,
	pub seed_billboards: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			server_host: "0.0.0.0".to_string(),
			server_port: 8080,
			database_url: "sqlite://maintenance.db".to_string(),
			max_pool_size: 5,
			seed_billboards: true,
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let defaults = Self::default();

		Ok(Self {
			server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
			server_port: match env::var("SERVER_PORT") {
				Ok(port) => port.parse().map_err(|_| ConfigError::InvalidPort)?,
				Err(_) => defaults.server_port,
			},
			database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
			max_pool_size: env::var("MAX_POOL_SIZE")
				.ok()
				.and_then(|v| v.parse().ok())
				.unwrap_or(defaults.max_pool_size),
			seed_billboards: match env::var("SEED_BILLBOARDS") {
				Ok(flag) => parse_flag(&flag).ok_or(ConfigError::InvalidFlag("SEED_BILLBOARDS"))?,
				Err(_) => defaults.seed_billboards,
			},
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.server_host, self.server_port)
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid port number")]
	InvalidPort,

	#[error("Invalid boolean value for {0}")]
	InvalidFlag(&'static str),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = Config::default();
		assert_eq!(config.server_addr(), "0.0.0.0:8080");
		assert!(config.seed_billboards);
	}

	#[test]
	fn test_parse_flag() {
		assert_eq!(parse_flag("TRUE"), Some(true));
		assert_eq!(parse_flag(" off "), Some(false));
		assert_eq!(parse_flag("maybe"), None);
	}
}
