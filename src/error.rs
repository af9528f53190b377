//! Crate-level error types shared by configuration, credential resolution, and registration.

// std
use std::path::PathBuf;
// self
use crate::{_prelude::*, startup::StartupPhase};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required provider credential is absent from configuration.
	#[error(transparent)]
	MissingCredential(#[from] crate::credential::MissingCredentialError),
	/// The authentication subsystem rejected a scheme registration.
	#[error(transparent)]
	Registration(#[from] crate::scheme::RegistrationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A startup step was invoked while the setup was in another phase.
	#[error("Startup step expects the {expected} phase but setup is {actual}.")]
	PhaseOrder {
		/// Phase the step requires.
		expected: StartupPhase,
		/// Phase the setup is currently in.
		actual: StartupPhase,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Settings file could not be read.
	#[error("Settings file `{}` could not be read.", .path.display())]
	SettingsRead {
		/// Path that failed to load.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Settings document is not valid JSON.
	#[error("Settings document is malformed at `{}`.", .source.path())]
	SettingsParse {
		/// Structured parsing failure carrying the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Settings document root must be a JSON object.
	#[error("Settings document root must be a JSON object.")]
	SettingsRoot,
	/// Settings document could not be assembled into a configuration tree.
	#[error("Settings document could not be loaded.")]
	SettingsLoad {
		/// Failure reported by the settings loader.
		#[source]
		source: config::ConfigError,
	},
	/// Provider endpoint could not be parsed.
	#[error("The {endpoint} endpoint of {provider} is not a valid URL.")]
	InvalidEndpoint {
		/// Provider display name.
		provider: &'static str,
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider endpoint must use HTTPS.
	#[error("The {endpoint} endpoint of {provider} must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Provider display name.
		provider: &'static str,
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Callback path must be an absolute request path.
	#[error("Callback path `{path}` must start with `/` and contain no whitespace.")]
	InvalidCallbackPath {
		/// Offending callback path.
		path: String,
	},
	/// Redirect URI cannot be built from the origin and callback path.
	#[error("Redirect URI could not be built.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
