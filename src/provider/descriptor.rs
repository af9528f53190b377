//! Provider descriptors: the registration data paired with each resolved credential.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, error::ConfigError, provider::ExternalProvider};

/// Endpoint set the authentication middleware drives for a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the user agent is redirected to.
	pub authorization: Url,
	/// Token endpoint used for the code exchange.
	pub token: Url,
	/// Endpoint returning the signed-in user's profile claims.
	pub user_information: Url,
}
impl ProviderEndpoints {
	/// Parses and validates an endpoint set for `provider`.
	pub fn parse(
		provider: ExternalProvider,
		authorization: &str,
		token: &str,
		user_information: &str,
	) -> Result<Self, ConfigError> {
		let endpoints = Self {
			authorization: parse_endpoint(provider, "authorization", authorization)?,
			token: parse_endpoint(provider, "token", token)?,
			user_information: parse_endpoint(provider, "user information", user_information)?,
		};

		endpoints.validate(provider)?;

		Ok(endpoints)
	}

	/// Built-in endpoints published by each provider.
	pub fn builtin(provider: ExternalProvider) -> Result<Self, ConfigError> {
		match provider {
			ExternalProvider::Google => Self::parse(
				provider,
				"https://accounts.google.com/o/oauth2/v2/auth",
				"https://oauth2.googleapis.com/token",
				"https://www.googleapis.com/oauth2/v3/userinfo",
			),
			ExternalProvider::Microsoft => Self::parse(
				provider,
				"https://login.microsoftonline.com/common/oauth2/v2.0/authorize",
				"https://login.microsoftonline.com/common/oauth2/v2.0/token",
				"https://graph.microsoft.com/v1.0/me",
			),
			ExternalProvider::Facebook => Self::parse(
				provider,
				"https://www.facebook.com/v24.0/dialog/oauth",
				"https://graph.facebook.com/v24.0/oauth/access_token",
				"https://graph.facebook.com/v24.0/me",
			),
			ExternalProvider::Twitter => Self::parse(
				provider,
				"https://x.com/i/oauth2/authorize",
				"https://api.x.com/2/oauth2/token",
				"https://api.x.com/2/users/me",
			),
		}
	}

	/// Checks that every endpoint is an absolute HTTPS URL.
	pub fn validate(&self, provider: ExternalProvider) -> Result<(), ConfigError> {
		validate_endpoint(provider, "authorization", &self.authorization)?;
		validate_endpoint(provider, "token", &self.token)?;
		validate_endpoint(provider, "user information", &self.user_information)?;

		Ok(())
	}
}

/// Provider-specific options layered on top of the client credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderExtras {
	/// Requests the extended user profile (including email) after sign-in.
	pub retrieve_user_details: bool,
}
impl ProviderExtras {
	/// Extras every provider starts with; Twitter always retrieves extended profiles.
	pub const fn for_provider(provider: ExternalProvider) -> Self {
		match provider {
			ExternalProvider::Twitter => Self { retrieve_user_details: true },
			_ => Self { retrieve_user_details: false },
		}
	}

	/// Applies the fixed per-provider policy on top of caller-supplied extras.
	pub const fn enforce(self, provider: ExternalProvider) -> Self {
		match provider {
			ExternalProvider::Twitter => Self { retrieve_user_details: true },
			_ => self,
		}
	}

	/// Option-name view of the extras that differ from the defaults.
	pub fn to_map(self) -> BTreeMap<String, Value> {
		let mut map = BTreeMap::new();

		if self.retrieve_user_details {
			map.insert("retrieveUserDetails".into(), Value::Bool(true));
		}

		map
	}
}

/// Immutable registration data for one provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Provider the descriptor belongs to.
	pub provider: ExternalProvider,
	/// Endpoint definitions.
	pub endpoints: ProviderEndpoints,
	/// Scopes requested on every authorization.
	pub scopes: Vec<String>,
	/// Request path receiving the provider redirect.
	pub callback_path: String,
	/// Provider-specific extras.
	pub extras: ProviderExtras,
}
impl ProviderDescriptor {
	/// Built-in descriptor for `provider`.
	pub fn for_provider(provider: ExternalProvider) -> Result<Self, ConfigError> {
		Ok(Self {
			provider,
			endpoints: ProviderEndpoints::builtin(provider)?,
			scopes: default_scopes(provider).iter().map(|s| (*s).to_owned()).collect(),
			callback_path: provider.default_callback_path().to_owned(),
			extras: ProviderExtras::for_provider(provider),
		})
	}

	/// Built-in descriptors for every provider, in resolution order.
	pub fn builtin_set() -> Result<Vec<Self>, ConfigError> {
		ExternalProvider::ALL.into_iter().map(Self::for_provider).collect()
	}

	/// Canonical scheme name.
	pub fn scheme(&self) -> &'static str {
		self.provider.scheme_name()
	}

	/// Login-button label.
	pub fn display_name(&self) -> &'static str {
		self.provider.display_name()
	}

	/// Overrides the callback path after validating it.
	pub fn with_callback_path(mut self, path: impl Into<String>) -> Result<Self, ConfigError> {
		let path = path.into();

		validate_callback_path(&path)?;

		self.callback_path = path;

		Ok(self)
	}

	/// Overrides the endpoint set after validating it.
	pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Result<Self, ConfigError> {
		endpoints.validate(self.provider)?;

		self.endpoints = endpoints;

		Ok(self)
	}

	/// Overrides the requested scopes.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Overrides the extras; the per-provider policy is re-applied at registration.
	pub fn with_extras(mut self, extras: ProviderExtras) -> Self {
		self.extras = extras;

		self
	}
}

/// Validates a callback request path.
pub fn validate_callback_path(path: &str) -> Result<(), ConfigError> {
	if path.len() < 2 || !path.starts_with('/') || path.chars().any(char::is_whitespace) {
		Err(ConfigError::InvalidCallbackPath { path: path.to_owned() })
	} else {
		Ok(())
	}
}

fn default_scopes(provider: ExternalProvider) -> &'static [&'static str] {
	match provider {
		ExternalProvider::Google => &["openid", "profile", "email"],
		ExternalProvider::Microsoft => &["https://graph.microsoft.com/user.read"],
		ExternalProvider::Facebook => &["email"],
		ExternalProvider::Twitter => &["tweet.read", "users.read"],
	}
}

fn parse_endpoint(
	provider: ExternalProvider,
	endpoint: &'static str,
	raw: &str,
) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
		provider: provider.display_name(),
		endpoint,
		source,
	})
}

fn validate_endpoint(
	provider: ExternalProvider,
	endpoint: &'static str,
	url: &Url,
) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint {
			provider: provider.display_name(),
			endpoint,
			url: url.to_string(),
		})
	} else {
		Ok(())
	}
}
