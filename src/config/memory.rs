//! In-process [`ConfigSource`] backed by an ordered map.

// self
use crate::{_prelude::*, config::ConfigSource};

/// Map-backed configuration source for tests, demos, and embedding hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryConfig(BTreeMap<String, String>);
impl MemoryConfig {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a value and returns the source.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);

		self
	}

	/// Adds or replaces a value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Removes a value, returning the previous entry.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.remove(key)
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no keys are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl ConfigSource for MemoryConfig {
	fn get(&self, key: &str) -> Option<String> {
		self.0.get(key).cloned()
	}
}
impl<K, V> FromIterator<(K, V)> for MemoryConfig
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
