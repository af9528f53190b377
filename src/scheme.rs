//! Authentication-subsystem contract and the scheme registrations it accepts.

pub mod registry;

pub use registry::SchemeRegistry;

// crates.io
use oauth2::{
	AuthType, AuthUrl, ClientId, ClientSecret as OAuthClientSecret, EndpointNotSet, EndpointSet,
	RedirectUrl, TokenUrl, basic::BasicClient,
};
// self
use crate::{
	_prelude::*,
	credential::ClientSecret,
	error::ConfigError,
	provider::{ExternalProvider, ProviderEndpoints, ProviderExtras, validate_callback_path},
};

/// OAuth 2.0 client with authorization and token endpoints configured.
pub type ConfiguredClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Host authentication middleware that accepts scheme registrations at startup.
///
/// Registrations are write-once: after [`seal`](Self::seal) the scheme set is read-only for
/// the lifetime of the process and every further registration is rejected.
pub trait AuthenticationSubsystem
where
	Self: Send + Sync,
{
	/// Registers a scheme, rejecting duplicates and malformed registrations.
	fn add_scheme(&self, registration: SchemeRegistration) -> Result<(), RegistrationError>;

	/// Freezes the scheme set.
	fn seal(&self);

	/// Returns true once the scheme set is frozen.
	fn is_sealed(&self) -> bool;

	/// Names of the registered schemes, sorted.
	fn scheme_names(&self) -> Vec<String>;
}

/// Errors raised by the authentication subsystem while registering schemes.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RegistrationError {
	/// A scheme with the same name is already registered.
	#[error("Scheme `{scheme}` is already registered.")]
	DuplicateScheme {
		/// Conflicting scheme name.
		scheme: String,
	},
	/// The registration is malformed.
	#[error("Scheme `{scheme}` is invalid: {reason}.")]
	InvalidScheme {
		/// Offending scheme name.
		scheme: String,
		/// What failed validation.
		reason: &'static str,
	},
	/// The descriptor and credential describe different providers.
	#[error("Credential for {credential} cannot be registered with the {descriptor} descriptor.")]
	ProviderMismatch {
		/// Provider of the credential.
		credential: ExternalProvider,
		/// Provider of the descriptor.
		descriptor: ExternalProvider,
	},
	/// The scheme set was sealed before this registration.
	#[error("Scheme `{scheme}` cannot be registered after startup completed.")]
	Sealed {
		/// Rejected scheme name.
		scheme: String,
	},
}

/// Everything the subsystem retains for one external-login scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRegistration {
	/// Scheme name, unique within the subsystem.
	pub scheme: String,
	/// Provider behind the scheme.
	pub provider: ExternalProvider,
	/// Login-button label.
	pub display_name: String,
	/// Client identifier issued by the provider.
	pub client_id: String,
	/// Client secret issued by the provider.
	pub client_secret: ClientSecret,
	/// Request path receiving the provider redirect.
	pub callback_path: String,
	/// Provider endpoints.
	pub endpoints: ProviderEndpoints,
	/// Scopes requested on every authorization.
	pub scopes: Vec<String>,
	/// Provider-specific extras.
	pub extras: ProviderExtras,
}
impl SchemeRegistration {
	/// Checks the invariants every subsystem enforces before accepting a scheme.
	pub fn validate(&self) -> Result<(), RegistrationError> {
		let invalid =
			|reason| RegistrationError::InvalidScheme { scheme: self.scheme.clone(), reason };

		if self.scheme.is_empty() {
			return Err(invalid("scheme name is empty"));
		}
		if self.scheme.chars().any(char::is_whitespace) {
			return Err(invalid("scheme name contains whitespace"));
		}
		if self.client_id.is_empty() {
			return Err(invalid("client id is empty"));
		}
		if self.client_secret.is_empty() {
			return Err(invalid("client secret is empty"));
		}
		if validate_callback_path(&self.callback_path).is_err() {
			return Err(invalid("callback path must be an absolute request path"));
		}
		if self.endpoints.validate(self.provider).is_err() {
			return Err(invalid("provider endpoints must use https"));
		}

		Ok(())
	}

	/// Absolute redirect URI for a host served at `origin`.
	pub fn redirect_uri(&self, origin: &Url) -> Result<Url, ConfigError> {
		origin.join(&self.callback_path).map_err(|source| ConfigError::InvalidRedirect { source })
	}

	/// Builds the OAuth 2.0 client the middleware drives for this scheme.
	///
	/// Twitter's `ApiKey`/`ApiSecretKey` pair is an OAuth 1.0a consumer key pair. The client
	/// built for Twitter targets X's OAuth 2.0 endpoints and only works when that pair holds
	/// the OAuth 2.0 client id and secret issued for the app. Hosts signing in with consumer
	/// keys must drive an OAuth 1.0a handshake from [`Self::client_id`] and
	/// [`Self::client_secret`] instead.
	pub fn oauth2_client(&self, origin: &Url) -> Result<ConfiguredClient, ConfigError> {
		let redirect = RedirectUrl::from_url(self.redirect_uri(origin)?);
		let mut client = BasicClient::new(ClientId::new(self.client_id.clone()))
			.set_client_secret(OAuthClientSecret::new(self.client_secret.expose().to_owned()))
			.set_auth_uri(AuthUrl::from_url(self.endpoints.authorization.clone()))
			.set_token_uri(TokenUrl::from_url(self.endpoints.token.clone()))
			.set_redirect_uri(redirect);

		if matches!(self.provider, ExternalProvider::Facebook) {
			client = client.set_auth_type(AuthType::RequestBody);
		}

		Ok(client)
	}
}

/// A registration as retained by a subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredScheme {
	/// Accepted registration.
	pub registration: SchemeRegistration,
	/// Instant the scheme was accepted.
	pub registered_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::ProviderDescriptor;

	fn registration(provider: ExternalProvider) -> SchemeRegistration {
		let descriptor = ProviderDescriptor::for_provider(provider)
			.expect("Built-in descriptor should validate.");

		SchemeRegistration {
			scheme: descriptor.scheme().to_owned(),
			provider,
			display_name: descriptor.display_name().to_owned(),
			client_id: "client-id".into(),
			client_secret: ClientSecret::new("client-secret"),
			callback_path: descriptor.callback_path,
			endpoints: descriptor.endpoints,
			scopes: descriptor.scopes,
			extras: descriptor.extras,
		}
	}

	#[test]
	fn validate_rejects_blank_fields() {
		assert!(registration(ExternalProvider::Google).validate().is_ok());

		let mut invalid = registration(ExternalProvider::Google);

		invalid.client_secret = ClientSecret::new("");

		assert!(matches!(
			invalid.validate(),
			Err(RegistrationError::InvalidScheme { reason: "client secret is empty", .. })
		));

		let mut invalid = registration(ExternalProvider::Google);

		invalid.scheme = "Google Login".into();

		assert!(invalid.validate().is_err());
	}

	#[test]
	fn validate_rejects_plain_http_endpoints() {
		let mut invalid = registration(ExternalProvider::Google);

		invalid.endpoints.token =
			Url::parse("http://tokens.example.com/token").expect("Endpoint fixture should parse.");

		assert!(matches!(
			invalid.validate(),
			Err(RegistrationError::InvalidScheme {
				reason: "provider endpoints must use https",
				..
			})
		));
	}

	#[test]
	fn serialized_registration_omits_the_client_secret() {
		let rendered = serde_json::to_string(&registration(ExternalProvider::Twitter))
			.expect("Registration should serialize.");

		assert!(rendered.contains("\"client_secret\":\"<redacted>\""));
		assert!(!rendered.contains("client-secret"));
	}

	#[test]
	fn redirect_uri_joins_origin_and_callback_path() {
		let origin = Url::parse("https://app.example.com/").expect("Origin fixture should parse.");
		let redirect = registration(ExternalProvider::Microsoft)
			.redirect_uri(&origin)
			.expect("Redirect URI should build.");

		assert_eq!(redirect.as_str(), "https://app.example.com/signin-microsoft");
	}

	#[test]
	fn oauth2_client_carries_endpoints_and_credentials() {
		let origin = Url::parse("https://app.example.com").expect("Origin fixture should parse.");
		let client = registration(ExternalProvider::Google)
			.oauth2_client(&origin)
			.expect("OAuth 2.0 client should build.");

		assert_eq!(client.client_id().as_str(), "client-id");
		assert_eq!(client.auth_uri().as_str(), "https://accounts.google.com/o/oauth2/v2/auth");
		assert_eq!(client.token_uri().as_str(), "https://oauth2.googleapis.com/token");
		assert_eq!(
			client.redirect_uri().map(|uri| uri.as_str().to_owned()),
			Some("https://app.example.com/signin-google".to_owned())
		);
	}

	#[test]
	fn twitter_client_passes_the_configured_key_pair_through() {
		let origin = Url::parse("https://app.example.com").expect("Origin fixture should parse.");
		let client = registration(ExternalProvider::Twitter)
			.oauth2_client(&origin)
			.expect("OAuth 2.0 client should build.");

		assert_eq!(client.client_id().as_str(), "client-id");
		assert_eq!(client.auth_uri().as_str(), "https://x.com/i/oauth2/authorize");
		assert!(matches!(client.auth_type(), AuthType::BasicAuth));
	}

	#[test]
	fn facebook_sends_credentials_in_the_request_body() {
		let origin = Url::parse("https://app.example.com").expect("Origin fixture should parse.");
		let client = registration(ExternalProvider::Facebook)
			.oauth2_client(&origin)
			.expect("OAuth 2.0 client should build.");

		assert!(matches!(client.auth_type(), AuthType::RequestBody));
	}
}
