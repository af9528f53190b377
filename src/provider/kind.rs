//! Closed set of external providers and their fixed configuration key paths.

// self
use crate::{_prelude::*, config::join_key};

/// Root section holding every provider's settings.
pub const AUTHENTICATION_SECTION: &str = "Authentication";
/// Field overriding a provider's callback path.
pub const CALLBACK_PATH_FIELD: &str = "CallbackPath";

/// External identity providers supported by the setup routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExternalProvider {
	/// Google accounts.
	Google,
	/// Microsoft personal and work accounts.
	Microsoft,
	/// Facebook accounts.
	Facebook,
	/// Twitter (X) accounts.
	Twitter,
}
impl ExternalProvider {
	/// Every provider, in resolution order.
	pub const ALL: [Self; 4] = [Self::Google, Self::Microsoft, Self::Facebook, Self::Twitter];

	/// Canonical scheme name registered with the authentication subsystem.
	pub const fn scheme_name(self) -> &'static str {
		match self {
			Self::Google => "Google",
			Self::Microsoft => "Microsoft",
			Self::Facebook => "Facebook",
			Self::Twitter => "Twitter",
		}
	}

	/// Human-facing label shown on login buttons.
	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Google => "Google",
			Self::Microsoft => "Microsoft",
			Self::Facebook => "Facebook",
			Self::Twitter => "Twitter",
		}
	}

	/// Configuration section holding this provider's settings.
	pub const fn config_section(self) -> &'static str {
		match self {
			Self::Google => "Authentication:Google",
			Self::Microsoft => "Authentication:Microsoft",
			Self::Facebook => "Authentication:Facebook",
			Self::Twitter => "Authentication:Twitter",
		}
	}

	/// Field label of the client identifier within the provider section.
	pub const fn id_field(self) -> &'static str {
		match self {
			Self::Google | Self::Microsoft => "ClientId",
			Self::Facebook => "AppId",
			Self::Twitter => "ApiKey",
		}
	}

	/// Field label of the client secret within the provider section.
	pub const fn secret_field(self) -> &'static str {
		match self {
			Self::Google | Self::Microsoft => "ClientSecret",
			Self::Facebook => "AppSecret",
			Self::Twitter => "ApiSecretKey",
		}
	}

	/// Full configuration key paths of the credential pair.
	pub const fn key_paths(self) -> ProviderKeyPaths {
		match self {
			Self::Google => ProviderKeyPaths {
				id: "Authentication:Google:ClientId",
				secret: "Authentication:Google:ClientSecret",
			},
			Self::Microsoft => ProviderKeyPaths {
				id: "Authentication:Microsoft:ClientId",
				secret: "Authentication:Microsoft:ClientSecret",
			},
			Self::Facebook => ProviderKeyPaths {
				id: "Authentication:Facebook:AppId",
				secret: "Authentication:Facebook:AppSecret",
			},
			Self::Twitter => ProviderKeyPaths {
				id: "Authentication:Twitter:ApiKey",
				secret: "Authentication:Twitter:ApiSecretKey",
			},
		}
	}

	/// Optional key overriding the default callback path.
	pub fn callback_path_key(self) -> String {
		join_key([self.config_section(), CALLBACK_PATH_FIELD])
	}

	/// Request path the middleware listens on for the provider's redirect.
	pub const fn default_callback_path(self) -> &'static str {
		match self {
			Self::Google => "/signin-google",
			Self::Microsoft => "/signin-microsoft",
			Self::Facebook => "/signin-facebook",
			Self::Twitter => "/signin-twitter",
		}
	}
}
impl Display for ExternalProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.scheme_name())
	}
}

/// Ordered pair of configuration keys for one provider's credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProviderKeyPaths {
	/// Key of the client identifier.
	pub id: &'static str,
	/// Key of the client secret.
	pub secret: &'static str,
}
