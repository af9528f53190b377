//! Settings-document [`ConfigSource`] backed by a `config` JSON file source.

// std
use std::{fs, path::Path};
// crates.io
use config::{Config, File, FileFormat};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	config::{ConfigSource, KEY_DELIMITER},
	error::ConfigError,
};

/// Loaded JSON settings document.
///
/// Keys keep the case they have in the document. Array elements are addressed with numeric
/// segments (`Authentication:Twitter:Scopes:1`). Strings are returned verbatim; numbers and
/// booleans use their text form. `null` members and whole sections resolve as absent.
#[derive(Clone, Debug)]
pub struct JsonConfig(Config);
impl JsonConfig {
	/// Parses a settings document from text; the root must be an object.
	pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(text);
		let value: Value = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::SettingsParse { source })?;

		if !value.is_object() {
			return Err(ConfigError::SettingsRoot);
		}

		let settings = Config::builder()
			.add_source(File::from_str(text, FileFormat::Json))
			.build()
			.map_err(|source| ConfigError::SettingsLoad { source })?;

		Ok(Self(settings))
	}

	/// Reads and parses a settings file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path)
			.map_err(|source| ConfigError::SettingsRead { path: path.to_path_buf(), source })?;

		Self::from_json_str(&text)
	}
}
impl ConfigSource for JsonConfig {
	fn get(&self, key: &str) -> Option<String> {
		self.0.get_string(&settings_path(key)?).ok()
	}
}

// `Authentication:Twitter:Scopes:1` becomes `Authentication.Twitter.Scopes[1]`.
fn settings_path(key: &str) -> Option<String> {
	let mut path = String::with_capacity(key.len() + 2);

	for segment in key.split(KEY_DELIMITER) {
		if segment.is_empty() || segment.contains(['.', '[', ']']) {
			return None;
		}

		if segment.bytes().all(|b| b.is_ascii_digit()) {
			if path.is_empty() {
				return None;
			}

			path.push('[');
			path.push_str(segment);
			path.push(']');
		} else {
			if !path.is_empty() {
				path.push('.');
			}

			path.push_str(segment);
		}
	}

	Some(path)
}
