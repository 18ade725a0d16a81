use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

/// Environment variables are read as `CAR_REGISTRY_HOST` and `CAR_REGISTRY_PORT`.
pub const ENV_PREFIX: &str = "CAR_REGISTRY";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4455;

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
}

impl Config {
	pub fn from_env() -> anyhow::Result<Config> {
		Config::load(config::Environment::with_prefix(ENV_PREFIX))
	}

	fn load(env: config::Environment) -> anyhow::Result<Config> {
		config::Config::builder()
			.set_default("host", DEFAULT_HOST)?
			.set_default("port", i64::from(DEFAULT_PORT))?
			.add_source(env.try_parsing(true))
			.build()
			.and_then(|settings| settings.try_deserialize())
			.with_context(|| format!("invalid {}_* settings", ENV_PREFIX))
	}

	pub fn socket_addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}
