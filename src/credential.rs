//! Provider credential resolution.
//!
//! [`CredentialResolver`] reads each provider's id/secret pair from a [`ConfigSource`] and turns
//! an absent value into a typed [`MissingCredentialError`] on the spot, so later stages only ever
//! see fully populated [`ProviderCredential`]s.

pub mod secret;

pub use secret::ClientSecret;

// self
use crate::{_prelude::*, config::ConfigSource, obs, provider::ExternalProvider};

/// Which half of a credential pair a lookup refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
	/// Client (app, API) identifier.
	Id,
	/// Client (app, API) secret.
	Secret,
}
impl CredentialField {
	/// Provider-specific field label (`ClientId`, `AppSecret`, ...).
	pub const fn label(self, provider: ExternalProvider) -> &'static str {
		match self {
			Self::Id => provider.id_field(),
			Self::Secret => provider.secret_field(),
		}
	}

	/// Full configuration key for this field of `provider`.
	pub const fn key(self, provider: ExternalProvider) -> &'static str {
		let paths = provider.key_paths();

		match self {
			Self::Id => paths.id,
			Self::Secret => paths.secret,
		}
	}
}

/// A required credential value is absent (or empty) in configuration.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{provider} authentication is not configured: `{key}` is missing.")]
pub struct MissingCredentialError {
	/// Provider whose credential is incomplete.
	pub provider: ExternalProvider,
	/// Missing half of the pair.
	pub field: CredentialField,
	/// Configuration key that was looked up.
	pub key: &'static str,
}
impl MissingCredentialError {
	/// Builds the error for `provider`'s `field`.
	pub const fn new(provider: ExternalProvider, field: CredentialField) -> Self {
		Self { provider, field, key: field.key(provider) }
	}

	/// Provider-specific label of the missing field.
	pub const fn field_name(&self) -> &'static str {
		self.field.label(self.provider)
	}
}

/// Fully resolved credential pair for one provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderCredential {
	/// Provider the credential belongs to.
	pub provider: ExternalProvider,
	/// Label of the identifier field.
	pub id_field: &'static str,
	/// Label of the secret field.
	pub secret_field: &'static str,
	/// Client identifier, copied verbatim from configuration.
	pub id: String,
	/// Client secret, copied verbatim from configuration.
	pub secret: ClientSecret,
}

/// Resolves provider credentials from a configuration source.
#[derive(Clone, Copy, Debug)]
pub struct CredentialResolver<'a, S>
where
	S: ?Sized + ConfigSource,
{
	source: &'a S,
}
impl<'a, S> CredentialResolver<'a, S>
where
	S: ?Sized + ConfigSource,
{
	/// Creates a resolver reading from `source`.
	pub fn new(source: &'a S) -> Self {
		Self { source }
	}

	/// Resolves one provider's credential pair.
	///
	/// The identifier is checked before the secret, so a provider missing both reports its
	/// identifier field.
	pub fn resolve(
		&self,
		provider: ExternalProvider,
	) -> Result<ProviderCredential, MissingCredentialError> {
		let id = self.lookup(provider, CredentialField::Id)?;
		let secret = ClientSecret::new(self.lookup(provider, CredentialField::Secret)?);

		obs::record_credential_resolved(provider, &secret);

		Ok(ProviderCredential {
			provider,
			id_field: provider.id_field(),
			secret_field: provider.secret_field(),
			id,
			secret,
		})
	}

	/// Resolves every provider in order, stopping at the first missing value.
	pub fn resolve_all(&self) -> Result<Vec<ProviderCredential>, MissingCredentialError> {
		ExternalProvider::ALL.into_iter().map(|provider| self.resolve(provider)).collect()
	}

	fn lookup(
		&self,
		provider: ExternalProvider,
		field: CredentialField,
	) -> Result<String, MissingCredentialError> {
		match self.source.get(field.key(provider)) {
			Some(value) if !value.is_empty() => Ok(value),
			_ => {
				let err = MissingCredentialError::new(provider, field);

				obs::record_credential_missing(&err);

				Err(err)
			},
		}
	}
}
