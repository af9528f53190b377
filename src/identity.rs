//! Declarative identity settings: sign-in policy, password policy, role support, and the
//! location of the identity store.

// std
use std::path::{Path, PathBuf};
// self
use crate::_prelude::*;

/// Directory, relative to the content root, holding the identity database.
pub const DATA_DIRECTORY: &str = "Data";
/// File name of the identity database.
pub const DATABASE_FILE: &str = "oauth2.db";

/// Identity options applied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOptions {
	/// Sign-in requirements.
	pub sign_in: SignInOptions,
	/// Password complexity rules.
	pub password: PasswordPolicy,
	/// Whether role management is enabled on top of users.
	pub roles_enabled: bool,
	/// Identity store location.
	pub store: StoreOptions,
}
impl IdentityOptions {
	/// Default options with the identity store placed under `content_root`.
	pub fn for_content_root(content_root: impl AsRef<Path>) -> Self {
		Self {
			sign_in: SignInOptions::default(),
			password: PasswordPolicy::default(),
			roles_enabled: true,
			store: StoreOptions::in_content_root(content_root),
		}
	}
}

/// Sign-in requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInOptions {
	/// Users must confirm their account before signing in.
	pub require_confirmed_account: bool,
}
impl Default for SignInOptions {
	fn default() -> Self {
		Self { require_confirmed_account: true }
	}
}

/// Password complexity rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
	/// At least one ASCII digit.
	pub require_digit: bool,
	/// At least one lowercase letter.
	pub require_lowercase: bool,
	/// At least one uppercase letter.
	pub require_uppercase: bool,
	/// At least one character that is neither a letter nor a digit.
	pub require_non_alphanumeric: bool,
	/// Minimum length in characters.
	pub required_length: usize,
	/// Minimum number of distinct characters.
	pub required_unique_chars: usize,
}
impl PasswordPolicy {
	/// Checks `password`, reporting every violated rule.
	pub fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
		let mut violations = Vec::new();

		if password.chars().count() < self.required_length {
			violations.push(PasswordViolation::TooShort { required: self.required_length });
		}
		if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
			violations.push(PasswordViolation::MissingDigit);
		}
		if self.require_lowercase && !password.chars().any(char::is_lowercase) {
			violations.push(PasswordViolation::MissingLowercase);
		}
		if self.require_uppercase && !password.chars().any(char::is_uppercase) {
			violations.push(PasswordViolation::MissingUppercase);
		}
		if self.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
			violations.push(PasswordViolation::MissingNonAlphanumeric);
		}

		let mut distinct = password.chars().collect::<Vec<_>>();

		distinct.sort_unstable();
		distinct.dedup();

		if distinct.len() < self.required_unique_chars {
			violations.push(PasswordViolation::TooFewUniqueChars {
				required: self.required_unique_chars,
			});
		}

		if violations.is_empty() { Ok(()) } else { Err(PasswordPolicyError { violations }) }
	}
}
impl Default for PasswordPolicy {
	fn default() -> Self {
		Self {
			require_digit: false,
			require_lowercase: false,
			require_uppercase: false,
			require_non_alphanumeric: false,
			required_length: 6,
			required_unique_chars: 1,
		}
	}
}

/// Single password rule violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordViolation {
	/// Shorter than the required length.
	TooShort {
		/// Required minimum length.
		required: usize,
	},
	/// No digit present.
	MissingDigit,
	/// No lowercase letter present.
	MissingLowercase,
	/// No uppercase letter present.
	MissingUppercase,
	/// Only letters and digits present.
	MissingNonAlphanumeric,
	/// Too few distinct characters.
	TooFewUniqueChars {
		/// Required number of distinct characters.
		required: usize,
	},
}

/// Password rejected by a [`PasswordPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Password violates {} policy rule(s).", .violations.len())]
pub struct PasswordPolicyError {
	/// Every violated rule, in check order.
	pub violations: Vec<PasswordViolation>,
}

/// Identity store location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
	/// Path of the SQLite database file.
	pub database_path: PathBuf,
}
impl StoreOptions {
	/// Places the database at `<content_root>/Data/oauth2.db`.
	pub fn in_content_root(content_root: impl AsRef<Path>) -> Self {
		Self { database_path: content_root.as_ref().join(DATA_DIRECTORY).join(DATABASE_FILE) }
	}

	/// SQLite connection string for the store.
	pub fn connection_string(&self) -> String {
		format!("Data Source={}", self.database_path.display())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_policy_only_checks_length() {
		let policy = PasswordPolicy::default();

		assert!(policy.validate("abcdef").is_ok());
		assert!(policy.validate("aaaaaa").is_ok());

		let err = policy.validate("abc12").expect_err("Five characters must be too short.");

		assert_eq!(err.violations, [PasswordViolation::TooShort { required: 6 }]);
	}

	#[test]
	fn strict_policy_reports_every_violation() {
		let policy = PasswordPolicy {
			require_digit: true,
			require_lowercase: true,
			require_uppercase: true,
			require_non_alphanumeric: true,
			required_length: 8,
			required_unique_chars: 4,
		};
		let err = policy.validate("aaaa").expect_err("Weak password must be rejected.");

		assert_eq!(
			err.violations,
			[
				PasswordViolation::TooShort { required: 8 },
				PasswordViolation::MissingDigit,
				PasswordViolation::MissingUppercase,
				PasswordViolation::MissingNonAlphanumeric,
				PasswordViolation::TooFewUniqueChars { required: 4 },
			]
		);
		assert_eq!(err.to_string(), "Password violates 5 policy rule(s).");
		assert!(policy.validate("Str0ng!pass").is_ok());
	}

	#[test]
	fn identity_defaults_require_confirmation_and_roles() {
		let options = IdentityOptions::for_content_root("/srv/app");

		assert!(options.sign_in.require_confirmed_account);
		assert!(options.roles_enabled);
		assert_eq!(options.store.database_path, Path::new("/srv/app/Data/oauth2.db"));
		assert_eq!(options.store.connection_string(), "Data Source=/srv/app/Data/oauth2.db");
	}
}
