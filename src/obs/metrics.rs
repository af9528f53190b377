// self
use crate::{obs::RegistrationOutcome, provider::ExternalProvider};

/// Records a registration outcome via the global metrics recorder (when enabled).
pub fn record_registration_outcome(provider: ExternalProvider, outcome: RegistrationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_external_login_registration_total",
			"provider" => provider.scheme_name(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_registration_outcome_without_recorder() {
		record_registration_outcome(ExternalProvider::Twitter, RegistrationOutcome::Rejected);
	}
}
