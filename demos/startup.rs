//! Demonstrates host startup: layer `appsettings.json` with prefixed environment variables,
//! register every external login provider, and refuse to start when any credential is missing.
//!
//! ```sh
//! OAUTH2DEMO_Authentication__Google__ClientId=abc cargo run --example startup -- appsettings.json
//! ```

// std
use std::{env, path::PathBuf};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
use tracing_subscriber::EnvFilter;
// self
use oauth2_external_login::{
	config::{EnvironmentConfig, JsonConfig, LayeredConfig},
	identity::IdentityOptions,
	scheme::SchemeRegistry,
	startup::configure_external_logins,
	url::Url,
};

const ENV_PREFIX: &str = "OAUTH2DEMO_";

fn main() -> Result<()> {
	color_eyre::install()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

	let content_root = env::current_dir()?;
	let explicit_path = env::args().nth(1).map(PathBuf::from);
	let settings_path =
		explicit_path.clone().unwrap_or_else(|| content_root.join("appsettings.json"));
	let mut config = LayeredConfig::new();

	// Only the default settings file is optional.
	if explicit_path.is_some() || settings_path.exists() {
		config.push(
			JsonConfig::from_path(&settings_path)
				.wrap_err_with(|| format!("loading {}", settings_path.display()))?,
		);
	}

	config.push(EnvironmentConfig::from_env(ENV_PREFIX));

	let identity = IdentityOptions::for_content_root(&content_root);

	tracing::info!(
		store = %identity.store.connection_string(),
		min_password_length = identity.password.required_length,
		"identity options applied"
	);

	let registry = SchemeRegistry::new();
	let ready = configure_external_logins(&config, &registry)
		.wrap_err("external login providers are not fully configured")?;
	let origin = Url::parse("https://localhost:5001")?;

	for scheme in registry.schemes() {
		tracing::info!(
			scheme = %scheme.registration.scheme,
			redirect = %scheme.registration.redirect_uri(&origin)?,
			"external login ready"
		);
	}

	tracing::info!(schemes = ?ready.schemes, "startup complete; serving requests");

	Ok(())
}
