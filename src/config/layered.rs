//! Ordered stack of [`ConfigSource`]s where later layers override earlier ones.

// self
use crate::{_prelude::*, config::ConfigSource};

/// Configuration assembled from several sources (settings file, environment, overrides).
#[derive(Clone, Default)]
pub struct LayeredConfig(Vec<Arc<dyn ConfigSource>>);
impl LayeredConfig {
	/// Creates an empty stack.
	pub fn new() -> Self {
		Self::default()
	}

	/// Pushes a layer on top of the stack and returns it.
	pub fn with_layer(mut self, source: impl 'static + ConfigSource) -> Self {
		self.push(source);

		self
	}

	/// Pushes a layer on top of the stack.
	pub fn push(&mut self, source: impl 'static + ConfigSource) {
		self.0.push(Arc::new(source));
	}

	/// Number of layers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no layer was added.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl ConfigSource for LayeredConfig {
	fn get(&self, key: &str) -> Option<String> {
		self.0.iter().rev().find_map(|layer| layer.get(key))
	}
}
impl Debug for LayeredConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "LayeredConfig({} layers)", self.0.len())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::{EnvironmentConfig, MemoryConfig};

	#[test]
	fn later_layers_win_and_gaps_fall_through() {
		let file = MemoryConfig::new()
			.with("Authentication:Google:ClientId", "file-id")
			.with("Authentication:Google:ClientSecret", "file-secret");
		let env = EnvironmentConfig::from_vars(
			"APP_",
			[("APP_Authentication__Google__ClientSecret", "env-secret")],
		);
		let config = LayeredConfig::new().with_layer(file).with_layer(env);

		assert_eq!(config.len(), 2);
		assert_eq!(config.get("Authentication:Google:ClientId").as_deref(), Some("file-id"));
		assert_eq!(config.get("Authentication:Google:ClientSecret").as_deref(), Some("env-secret"));
		assert_eq!(config.get("Authentication:Microsoft:ClientId"), None);
	}
}
