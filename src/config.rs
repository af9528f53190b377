//! Hierarchical key-value configuration sources.
//!
//! Keys are colon-delimited, case-sensitive paths such as `Authentication:Google:ClientId`.
//! Every source answers lookups with `None` when a key is absent; settings documents treat a
//! JSON `null` the same way, so callers never observe a present-but-null value.

pub mod env;
pub mod json;
pub mod layered;
pub mod memory;

pub use env::EnvironmentConfig;
pub use json::JsonConfig;
pub use layered::LayeredConfig;
pub use memory::MemoryConfig;

// self
use crate::_prelude::*;

/// Separator between segments of a configuration key path.
pub const KEY_DELIMITER: char = ':';

/// Read-only lookup contract consumed during startup.
pub trait ConfigSource
where
	Self: Send + Sync,
{
	/// Returns the value stored under `key`, or `None` when the key is absent.
	fn get(&self, key: &str) -> Option<String>;

	/// Returns true when `key` resolves to a value.
	fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}
}
impl<T> ConfigSource for &T
where
	T: ?Sized + ConfigSource,
{
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}
}
impl<T> ConfigSource for Arc<T>
where
	T: ?Sized + ConfigSource,
{
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}
}
impl<T> ConfigSource for Box<T>
where
	T: ?Sized + ConfigSource,
{
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}
}

/// Joins path segments with [`KEY_DELIMITER`].
pub fn join_key<I, S>(segments: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut key = String::new();

	for segment in segments {
		if !key.is_empty() {
			key.push(KEY_DELIMITER);
		}

		key.push_str(segment.as_ref());
	}

	key
}
