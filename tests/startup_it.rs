// self
use oauth2_external_login::{
	config::{EnvironmentConfig, JsonConfig, LayeredConfig},
	credential::CredentialField,
	error::Error,
	provider::ExternalProvider,
	scheme::{AuthenticationSubsystem, RegistrationError, SchemeRegistry},
	startup::{ExternalLoginSetup, StartupPhase, configure_external_logins},
};

const APPSETTINGS: &str = r#"{
	"AllowedHosts": "*",
	"Authentication": {
		"Google": { "ClientId": "abc", "ClientSecret": "xyz" },
		"Microsoft": { "ClientId": "ms-id", "ClientSecret": "ms-secret" },
		"Facebook": { "AppId": "fb-id", "AppSecret": null },
		"Twitter": { "ApiKey": "tw-key", "ApiSecretKey": "tw-secret" }
	}
}"#;

fn settings() -> JsonConfig {
	JsonConfig::from_json_str(APPSETTINGS).expect("Settings fixture should parse.")
}

#[test]
fn null_setting_without_override_blocks_startup() {
	let config = settings();
	let registry = SchemeRegistry::new();
	let err = configure_external_logins(&config, &registry)
		.expect_err("A null Facebook secret must block startup.");

	match err {
		Error::MissingCredential(missing) => {
			assert_eq!(missing.provider, ExternalProvider::Facebook);
			assert_eq!(missing.field, CredentialField::Secret);
			assert_eq!(missing.field_name(), "AppSecret");
		},
		other => panic!("Unexpected startup error: {other}"),
	}

	assert!(registry.scheme_names().is_empty());
	assert!(!registry.is_sealed());
}

#[test]
fn environment_layer_completes_the_settings_file() {
	let env = EnvironmentConfig::from_vars(
		"OAUTH2DEMO_",
		[("OAUTH2DEMO_Authentication__Facebook__AppSecret", "fb-secret")],
	);
	let config = LayeredConfig::new().with_layer(settings()).with_layer(env);
	let registry = SchemeRegistry::new();
	let ready = configure_external_logins(&config, &registry).expect("Startup should complete.");

	assert_eq!(ready.phase(), StartupPhase::Ready);
	assert_eq!(ready.schemes, ["Facebook", "Google", "Microsoft", "Twitter"]);
	assert!(registry.is_sealed());

	let facebook = registry.scheme("Facebook").expect("Facebook should be registered.");

	assert_eq!(facebook.registration.client_id, "fb-id");
	assert_eq!(facebook.registration.client_secret.expose(), "fb-secret");
}

#[test]
fn preexisting_scheme_surfaces_duplicate_error_unchanged() {
	let env = EnvironmentConfig::from_vars(
		"APP_",
		[("APP_Authentication__Facebook__AppSecret", "fb-secret")],
	);
	let config = LayeredConfig::new().with_layer(settings()).with_layer(env);
	let registry = SchemeRegistry::new();
	let mut first = ExternalLoginSetup::new(&config, &registry);

	first.resolve_credentials().expect("Credentials should resolve.");
	first.register_providers().expect("Providers should register.");

	let mut second = ExternalLoginSetup::new(&config, &registry);

	second.resolve_credentials().expect("Credentials should resolve again.");

	let err = second.register_providers().expect_err("Registering every scheme twice must fail.");

	assert!(matches!(
		err,
		Error::Registration(RegistrationError::DuplicateScheme { ref scheme }) if scheme == "Google"
	));
	assert_eq!(second.phase(), StartupPhase::CredentialsResolved);
}

#[test]
fn sealed_subsystem_rejects_a_second_startup() {
	let env = EnvironmentConfig::from_vars(
		"APP_",
		[("APP_Authentication__Facebook__AppSecret", "fb-secret")],
	);
	let config = LayeredConfig::new().with_layer(settings()).with_layer(env);
	let registry = SchemeRegistry::new();

	configure_external_logins(&config, &registry).expect("First startup should complete.");

	let err = configure_external_logins(&config, &registry)
		.expect_err("A sealed subsystem must reject further registrations.");

	assert!(matches!(err, Error::Registration(RegistrationError::Sealed { .. })));
	assert_eq!(registry.len(), 4);
}
