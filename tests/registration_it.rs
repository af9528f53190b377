// self
use oauth2_external_login::{
	config::MemoryConfig,
	credential::{ClientSecret, CredentialResolver, ProviderCredential},
	provider::{ExternalProvider, ProviderDescriptor, ProviderExtras},
	registrar::ProviderRegistrar,
	scheme::{RegistrationError, SchemeRegistry},
	url::Url,
};

fn full_config() -> MemoryConfig {
	ExternalProvider::ALL
		.into_iter()
		.flat_map(|provider| {
			let paths = provider.key_paths();

			[
				(paths.id, format!("{}-id", provider.scheme_name().to_lowercase())),
				(paths.secret, format!("{}-secret", provider.scheme_name().to_lowercase())),
			]
		})
		.collect()
}

fn descriptors() -> Vec<ProviderDescriptor> {
	ProviderDescriptor::builtin_set().expect("Built-in descriptors should validate.")
}

#[test]
fn all_four_providers_register_under_canonical_names() {
	let config = full_config();
	let registry = SchemeRegistry::new();
	let credentials =
		CredentialResolver::new(&config).resolve_all().expect("Every credential should resolve.");
	let registrar = ProviderRegistrar::new(&registry);
	let descriptors = descriptors();

	for credential in credentials {
		let descriptor = descriptors
			.iter()
			.find(|d| d.provider == credential.provider)
			.expect("Every provider should have a built-in descriptor.");

		registrar.register(credential, descriptor).expect("Registration should succeed.");
	}

	assert_eq!(registry.len(), 4);

	for provider in ExternalProvider::ALL {
		let scheme = registry
			.scheme(provider.scheme_name())
			.expect("Every provider should be registered under its scheme name.");
		let expected_prefix = provider.scheme_name().to_lowercase();

		assert_eq!(scheme.registration.provider, provider);
		assert_eq!(scheme.registration.client_id, format!("{expected_prefix}-id"));
		assert_eq!(scheme.registration.client_secret.expose(), format!("{expected_prefix}-secret"));
	}
}

#[test]
fn fifth_registration_with_a_used_name_is_a_duplicate() {
	let config = full_config();
	let registry = SchemeRegistry::new();
	let credentials =
		CredentialResolver::new(&config).resolve_all().expect("Every credential should resolve.");
	let registrar = ProviderRegistrar::new(&registry);

	registrar.register_all(credentials, &descriptors()).expect("Every provider should register.");

	let again = ProviderCredential {
		provider: ExternalProvider::Facebook,
		id_field: "AppId",
		secret_field: "AppSecret",
		id: "other-app".into(),
		secret: ClientSecret::new("other-secret"),
	};
	let descriptor = ProviderDescriptor::for_provider(ExternalProvider::Facebook)
		.expect("Facebook descriptor should validate.");
	let err = registrar
		.register(again, &descriptor)
		.expect_err("Registering Facebook twice must be rejected.");

	assert_eq!(err, RegistrationError::DuplicateScheme { scheme: "Facebook".into() });
	assert_eq!(registry.len(), 4);
	assert_eq!(
		registry
			.scheme("Facebook")
			.expect("Original Facebook scheme should remain.")
			.registration
			.client_id,
		"facebook-id"
	);
}

#[test]
fn twitter_extended_profile_flag_cannot_be_disabled() {
	let config = full_config();
	let registry = SchemeRegistry::new();
	let credential = CredentialResolver::new(&config)
		.resolve(ExternalProvider::Twitter)
		.expect("Twitter credential should resolve.");
	let descriptor = ProviderDescriptor::for_provider(ExternalProvider::Twitter)
		.expect("Twitter descriptor should validate.")
		.with_extras(ProviderExtras::default());

	ProviderRegistrar::new(&registry)
		.register(credential, &descriptor)
		.expect("Twitter registration should succeed.");

	let scheme = registry.scheme("Twitter").expect("Twitter should be registered.");

	assert!(scheme.registration.extras.retrieve_user_details);
	assert!(scheme.registration.extras.to_map().contains_key("retrieveUserDetails"));
}

#[test]
fn registered_schemes_build_oauth2_clients() {
	let config = full_config();
	let registry = SchemeRegistry::new();
	let credentials =
		CredentialResolver::new(&config).resolve_all().expect("Every credential should resolve.");

	ProviderRegistrar::new(&registry)
		.register_all(credentials, &descriptors())
		.expect("Every provider should register.");

	let origin = Url::parse("https://login.example.org").expect("Origin fixture should parse.");

	for scheme in registry.schemes() {
		let client = scheme
			.registration
			.oauth2_client(&origin)
			.expect("Every registered scheme should build an OAuth 2.0 client.");
		let redirect = client.redirect_uri().expect("Redirect URI should be configured.");

		assert_eq!(client.client_id().as_str(), scheme.registration.client_id);
		assert!(redirect.as_str().starts_with("https://login.example.org/signin-"));
	}
}
