//! Optional observability helpers for the startup routine.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `oauth2_external_login.startup` carrying the `stage`
//!   field, plus events for resolved/missing credentials and scheme registrations.
//! - Enable `metrics` to increment the `oauth2_external_login_registration_total` counter for
//!   every registration attempt, labeled by `provider` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Startup stages observed by the setup routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StartupStage {
	/// Reading credential pairs from configuration.
	ResolveCredentials,
	/// Registering schemes with the authentication subsystem.
	RegisterProviders,
	/// Freezing the scheme set.
	Seal,
}
impl StartupStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StartupStage::ResolveCredentials => "resolve_credentials",
			StartupStage::RegisterProviders => "register_providers",
			StartupStage::Seal => "seal",
		}
	}
}
impl Display for StartupStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationOutcome {
	/// The subsystem accepted the scheme.
	Registered,
	/// The subsystem rejected the scheme.
	Rejected,
}
impl RegistrationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationOutcome::Registered => "registered",
			RegistrationOutcome::Rejected => "rejected",
		}
	}
}
impl Display for RegistrationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
