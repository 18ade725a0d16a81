use anyhow::Context;
use axum::routing::{get, Router};
use hyper::StatusCode;

use cars::cars::{create_car, delete_car, get_car, get_cars, method_not_allowed, missing_id, update_car};
use registry::Registry;
use settings::Config;

mod cars;
mod error;
mod registry;
mod settings;

pub fn app(registry: Registry) -> Router {
	Router::new()
		.route("/cars", get(get_cars).post(create_car).fallback(method_not_allowed))
		// the catch-all never matches an empty id, so `/cars/` gets its own route
		.route("/cars/", get(missing_id).put(missing_id).delete(missing_id).fallback(method_not_allowed))
		.route(
			"/cars/*id",
			get(get_car).put(update_car).delete(delete_car).fallback(method_not_allowed),
		)
		.fallback(not_found)
		.with_state(registry)
}

async fn not_found() -> (StatusCode, &'static str) {
	(StatusCode::NOT_FOUND, "Not found")
}

async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => log::info!("shutting down, dropping all cars"),
		Err(e) => {
			log::error!("failed to listen for shutdown signal: {}", e);
			std::future::pending::<()>().await
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::from_env()?;
	let addr = config.socket_addr();
	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.with_context(|| format!("failed to bind {}", addr))?;

	log::info!("Server running on port: {}", config.port);
	axum::serve(listener, app(Registry::new()))
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("server error")?;
	Ok(())
}
