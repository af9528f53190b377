// self
use crate::{
	_prelude::*,
	credential::{ClientSecret, MissingCredentialError},
	obs::StartupStage,
	provider::ExternalProvider,
	scheme::RegistrationError,
};

/// A span builder used by the startup routine.
#[derive(Clone, Debug)]
pub struct StartupSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StartupSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: StartupStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_external_login.startup", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for the rest of the current scope.
	pub fn entered(self) -> StartupSpanGuard {
		#[cfg(feature = "tracing")]
		{
			StartupSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			StartupSpanGuard {}
		}
	}
}

/// RAII guard returned by [`StartupSpan::entered`].
pub struct StartupSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for StartupSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("StartupSpanGuard(..)")
	}
}

/// Logs a resolved credential by provider and secret fingerprint only.
pub fn record_credential_resolved(provider: ExternalProvider, secret: &ClientSecret) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			provider = provider.scheme_name(),
			secret_fingerprint = %secret.fingerprint(),
			"resolved external login credential"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, secret);
	}
}

/// Logs a missing credential value.
pub fn record_credential_missing(err: &MissingCredentialError) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(
			provider = err.provider.scheme_name(),
			field = err.field_name(),
			key = err.key,
			"external login credential is missing"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}

/// Logs the result of a scheme registration.
pub fn record_scheme_registration(
	provider: ExternalProvider,
	scheme: &str,
	result: Result<(), &RegistrationError>,
) {
	#[cfg(feature = "tracing")]
	{
		match result {
			Ok(()) => tracing::info!(
				provider = provider.scheme_name(),
				scheme,
				"registered external login scheme"
			),
			Err(e) => tracing::error!(
				provider = provider.scheme_name(),
				scheme,
				error = %e,
				"external login scheme was rejected"
			),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, scheme, result);
	}
}
