//! Environment-variable [`ConfigSource`].
//!
//! Variables named `<prefix>Authentication__Google__ClientId` map to the key
//! `Authentication:Google:ClientId`. Variables without the prefix are ignored.

// std
use std::env;
// self
use crate::{
	_prelude::*,
	config::{ConfigSource, KEY_DELIMITER},
};

/// Separator used in variable names in place of [`KEY_DELIMITER`].
pub const ENV_SEGMENT_SEPARATOR: &str = "__";

/// Snapshot of prefixed environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentConfig {
	prefix: String,
	entries: BTreeMap<String, String>,
}
impl EnvironmentConfig {
	/// Captures the current process environment.
	pub fn from_env(prefix: impl Into<String>) -> Self {
		Self::from_vars(prefix, env::vars())
	}

	/// Builds a snapshot from explicit variables.
	pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let prefix = prefix.into();
		let entries = vars
			.into_iter()
			.filter_map(|(name, value)| {
				let key = name.as_ref().strip_prefix(prefix.as_str())?;

				if key.is_empty() {
					return None;
				}

				Some((key.replace(ENV_SEGMENT_SEPARATOR, &KEY_DELIMITER.to_string()), value.into()))
			})
			.collect();

		Self { prefix, entries }
	}

	/// Prefix that selected variables from the environment.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Number of captured variables.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no variable carried the prefix.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
impl ConfigSource for EnvironmentConfig {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}
}
