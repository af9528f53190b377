//! Binds resolved credentials to the authentication subsystem.

// self
use crate::{
	_prelude::*,
	credential::ProviderCredential,
	obs::{self, RegistrationOutcome},
	provider::ProviderDescriptor,
	scheme::{AuthenticationSubsystem, RegistrationError, SchemeRegistration},
};

/// Registers external-login schemes, one per resolved credential.
///
/// Registration is a one-time startup action: the first rejection is returned as-is and
/// nothing is retried.
#[derive(Debug)]
pub struct ProviderRegistrar<'a, A>
where
	A: ?Sized + AuthenticationSubsystem,
{
	subsystem: &'a A,
}
impl<'a, A> ProviderRegistrar<'a, A>
where
	A: ?Sized + AuthenticationSubsystem,
{
	/// Creates a registrar writing into `subsystem`.
	pub fn new(subsystem: &'a A) -> Self {
		Self { subsystem }
	}

	/// Registers `credential` under the canonical scheme of `descriptor`.
	pub fn register(
		&self,
		credential: ProviderCredential,
		descriptor: &ProviderDescriptor,
	) -> Result<(), RegistrationError> {
		if credential.provider != descriptor.provider {
			return Err(RegistrationError::ProviderMismatch {
				credential: credential.provider,
				descriptor: descriptor.provider,
			});
		}

		let provider = descriptor.provider;
		let registration = SchemeRegistration {
			scheme: descriptor.scheme().to_owned(),
			provider,
			display_name: descriptor.display_name().to_owned(),
			client_id: credential.id,
			client_secret: credential.secret,
			callback_path: descriptor.callback_path.clone(),
			endpoints: descriptor.endpoints.clone(),
			scopes: descriptor.scopes.clone(),
			extras: descriptor.extras.enforce(provider),
		};
		let result = self.subsystem.add_scheme(registration);

		obs::record_scheme_registration(provider, descriptor.scheme(), result.as_ref().copied());
		obs::record_registration_outcome(
			provider,
			if result.is_ok() {
				RegistrationOutcome::Registered
			} else {
				RegistrationOutcome::Rejected
			},
		);

		result
	}

	/// Registers each credential with the descriptor of its provider, stopping at the first
	/// failure. Returns the number of registered schemes.
	pub fn register_all(
		&self,
		credentials: Vec<ProviderCredential>,
		descriptors: &[ProviderDescriptor],
	) -> Result<usize, RegistrationError> {
		let mut registered = 0;

		for credential in credentials {
			let descriptor = descriptors
				.iter()
				.find(|d| d.provider == credential.provider)
				.ok_or_else(|| RegistrationError::InvalidScheme {
					scheme: credential.provider.scheme_name().to_owned(),
					reason: "no descriptor was supplied for the provider",
				})?;

			self.register(credential, descriptor)?;

			registered += 1;
		}

		Ok(registered)
	}
}
