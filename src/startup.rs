//! Linear startup sequence:
//! `Unconfigured → CredentialsResolved → ProvidersRegistered → Ready`.
//!
//! Each step only runs from the phase that precedes it. A failed step leaves the phase
//! untouched, so a host that aborts on the returned error never reaches [`StartupPhase::Ready`]
//! and never serves requests with a partial provider set.

// self
use crate::{
	_prelude::*,
	config::ConfigSource,
	credential::{CredentialResolver, ProviderCredential},
	obs::{StartupSpan, StartupStage},
	provider::{ProviderDescriptor, validate_callback_path},
	registrar::ProviderRegistrar,
	scheme::AuthenticationSubsystem,
};

/// Phases of the startup sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupPhase {
	/// Nothing has been read yet.
	Unconfigured,
	/// Every credential pair was resolved.
	CredentialsResolved,
	/// Every scheme was registered.
	ProvidersRegistered,
	/// The scheme set is sealed; the host may serve requests.
	Ready,
}
impl StartupPhase {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			StartupPhase::Unconfigured => "unconfigured",
			StartupPhase::CredentialsResolved => "credentials_resolved",
			StartupPhase::ProvidersRegistered => "providers_registered",
			StartupPhase::Ready => "ready",
		}
	}
}
impl Display for StartupPhase {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Proof that startup completed; carries the registered scheme names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyAuthentication {
	/// Registered scheme names, sorted.
	pub schemes: Vec<String>,
}
impl ReadyAuthentication {
	/// Phase reached by a completed startup.
	pub const fn phase(&self) -> StartupPhase {
		StartupPhase::Ready
	}
}

/// Drives the startup sequence against a configuration source and an authentication subsystem.
pub struct ExternalLoginSetup<'a, S, A>
where
	S: ?Sized + ConfigSource,
	A: ?Sized + AuthenticationSubsystem,
{
	config: &'a S,
	subsystem: &'a A,
	phase: StartupPhase,
	overrides: Vec<ProviderDescriptor>,
	descriptors: Vec<ProviderDescriptor>,
	credentials: Vec<ProviderCredential>,
}
impl<'a, S, A> ExternalLoginSetup<'a, S, A>
where
	S: ?Sized + ConfigSource,
	A: ?Sized + AuthenticationSubsystem,
{
	/// Creates a setup in [`StartupPhase::Unconfigured`].
	pub fn new(config: &'a S, subsystem: &'a A) -> Self {
		Self {
			config,
			subsystem,
			phase: StartupPhase::Unconfigured,
			overrides: Vec::new(),
			descriptors: Vec::new(),
			credentials: Vec::new(),
		}
	}

	/// Replaces the built-in descriptor of `descriptor.provider`.
	pub fn with_descriptor(mut self, descriptor: ProviderDescriptor) -> Self {
		self.overrides.retain(|d| d.provider != descriptor.provider);
		self.overrides.push(descriptor);

		self
	}

	/// Current phase.
	pub fn phase(&self) -> StartupPhase {
		self.phase
	}

	/// Resolves every credential pair and the descriptors they will be registered with.
	pub fn resolve_credentials(&mut self) -> Result<()> {
		self.expect_phase(StartupPhase::Unconfigured)?;

		let _guard = StartupSpan::new(StartupStage::ResolveCredentials).entered();
		let credentials = CredentialResolver::new(self.config).resolve_all()?;
		let descriptors = self.load_descriptors()?;

		self.credentials = credentials;
		self.descriptors = descriptors;
		self.phase = StartupPhase::CredentialsResolved;

		Ok(())
	}

	/// Registers one scheme per resolved credential.
	pub fn register_providers(&mut self) -> Result<()> {
		self.expect_phase(StartupPhase::CredentialsResolved)?;

		let _guard = StartupSpan::new(StartupStage::RegisterProviders).entered();

		ProviderRegistrar::new(self.subsystem)
			.register_all(self.credentials.clone(), &self.descriptors)?;

		self.credentials.clear();
		self.phase = StartupPhase::ProvidersRegistered;

		Ok(())
	}

	/// Seals the subsystem and reports the registered schemes.
	pub fn finish(mut self) -> Result<ReadyAuthentication> {
		self.expect_phase(StartupPhase::ProvidersRegistered)?;

		let _guard = StartupSpan::new(StartupStage::Seal).entered();

		self.subsystem.seal();
		self.phase = StartupPhase::Ready;

		Ok(ReadyAuthentication { schemes: self.subsystem.scheme_names() })
	}

	/// Runs every remaining step in order.
	pub fn run(mut self) -> Result<ReadyAuthentication> {
		if self.phase == StartupPhase::Unconfigured {
			self.resolve_credentials()?;
		}
		if self.phase == StartupPhase::CredentialsResolved {
			self.register_providers()?;
		}

		self.finish()
	}

	fn expect_phase(&self, expected: StartupPhase) -> Result<()> {
		if self.phase == expected {
			Ok(())
		} else {
			Err(Error::PhaseOrder { expected, actual: self.phase })
		}
	}

	fn load_descriptors(&self) -> Result<Vec<ProviderDescriptor>> {
		let mut descriptors = ProviderDescriptor::builtin_set()?;

		for descriptor in descriptors.iter_mut() {
			let custom = self.overrides.iter().find(|d| d.provider == descriptor.provider);

			if let Some(custom) = custom {
				custom.endpoints.validate(custom.provider)?;
				validate_callback_path(&custom.callback_path)?;

				*descriptor = custom.clone();
			}
			if let Some(path) = self.config.get(&descriptor.provider.callback_path_key()) {
				*descriptor = descriptor.clone().with_callback_path(path)?;
			}
		}

		Ok(descriptors)
	}
}
impl<S, A> Debug for ExternalLoginSetup<'_, S, A>
where
	S: ?Sized + ConfigSource,
	A: ?Sized + AuthenticationSubsystem,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ExternalLoginSetup")
			.field("phase", &self.phase)
			.field("descriptors", &self.descriptors.len())
			.field("credentials", &self.credentials.len())
			.finish()
	}
}

/// Resolves, registers, and seals every external login provider in one call.
pub fn configure_external_logins<S, A>(config: &S, subsystem: &A) -> Result<ReadyAuthentication>
where
	S: ?Sized + ConfigSource,
	A: ?Sized + AuthenticationSubsystem,
{
	ExternalLoginSetup::new(config, subsystem).run()
}
