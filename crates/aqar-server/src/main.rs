// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Aqar listings server binary.

use axum::http::HeaderValue;
use clap::{Parser, Subcommand};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aqar_server::{create_app_state, create_router};
use aqar_server_db::{hash_token, StaffRepository, ROLE_ADMIN, ROLE_SALES};

/// Aqar server - HTTP backend for the Aqar real-estate site.
#[derive(Parser, Debug)]
#[command(name = "aqar-server", about = "Aqar real-estate listings server", version)]
struct Args {
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
	/// Generate a staff access token and store its hash
	CreateStaffToken {
		/// Role for the token: admin or sales
		#[arg(long)]
		role: String,
		/// Human-readable label, e.g. the holder's name
		#[arg(long)]
		label: String,
	},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("aqar-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = aqar_server_config::load_config()?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let pool = aqar_server_db::create_pool(
		&config.database.url,
		config.database.max_connections,
		std::time::Duration::from_secs(u64::from(config.database.busy_timeout_secs)),
	)
	.await?;
	aqar_server_db::run_migrations(&pool).await?;

	if let Some(Command::CreateStaffToken { role, label }) = args.command {
		return create_staff_token(StaffRepository::new(pool), &role, &label).await;
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		"starting aqar-server"
	);

	let state = create_app_state(pool);

	let cors = if config.cors.allowed_origins.is_empty() {
		CorsLayer::new()
			.allow_origin(Any)
			.allow_methods(Any)
			.allow_headers(Any)
	} else {
		let origins = config
			.cors
			.allowed_origins
			.iter()
			.filter_map(|o| o.parse::<HeaderValue>().ok())
			.collect::<Vec<_>>();
		CorsLayer::new()
			.allow_origin(origins)
			.allow_methods(Any)
			.allow_headers(Any)
	};

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(cors);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("received shutdown signal");
		}
	}

	tracing::info!("server shutdown complete");
	Ok(())
}

/// Generate a token, store its hash, and print the plaintext exactly once.
async fn create_staff_token(
	staff: StaffRepository,
	role: &str,
	label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	if role != ROLE_ADMIN && role != ROLE_SALES {
		return Err(format!("unknown role {role:?}, expected {ROLE_ADMIN} or {ROLE_SALES}").into());
	}

	let token = uuid::Uuid::new_v4().to_string();
	staff.create_token(&hash_token(&token), role, label).await?;

	println!("Staff token created (role: {role}, label: {label}).");
	println!("Token (shown once, store it now): {token}");
	Ok(())
}
