//! Thread-safe in-memory [`AuthenticationSubsystem`] implementation.

// std
use std::sync::atomic::{AtomicBool, Ordering};
// self
use crate::{
	_prelude::*,
	scheme::{AuthenticationSubsystem, RegisteredScheme, RegistrationError, SchemeRegistration},
};

type SchemeMap = Arc<RwLock<BTreeMap<String, RegisteredScheme>>>;

/// Scheme registry shared between the startup routine and request handlers.
///
/// Clones share the same underlying map, so a handle kept by the host observes every
/// registration made through another handle.
#[derive(Clone, Debug, Default)]
pub struct SchemeRegistry {
	schemes: SchemeMap,
	sealed: Arc<AtomicBool>,
}
impl SchemeRegistry {
	/// Creates an empty, unsealed registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up a registered scheme by name.
	pub fn scheme(&self, name: &str) -> Option<RegisteredScheme> {
		self.schemes.read().get(name).cloned()
	}

	/// Snapshot of every registered scheme, sorted by name.
	pub fn schemes(&self) -> Vec<RegisteredScheme> {
		self.schemes.read().values().cloned().collect()
	}

	/// Number of registered schemes.
	pub fn len(&self) -> usize {
		self.schemes.read().len()
	}

	/// Returns true when no scheme is registered.
	pub fn is_empty(&self) -> bool {
		self.schemes.read().is_empty()
	}

	fn insert_now(&self, registration: SchemeRegistration) -> Result<(), RegistrationError> {
		let mut guard = self.schemes.write();

		// Checked under the write lock so a concurrent `seal` cannot interleave.
		if self.sealed.load(Ordering::Acquire) {
			return Err(RegistrationError::Sealed { scheme: registration.scheme });
		}
		if guard.contains_key(&registration.scheme) {
			return Err(RegistrationError::DuplicateScheme { scheme: registration.scheme });
		}

		guard.insert(
			registration.scheme.clone(),
			RegisteredScheme { registration, registered_at: OffsetDateTime::now_utc() },
		);

		Ok(())
	}
}
impl AuthenticationSubsystem for SchemeRegistry {
	fn add_scheme(&self, registration: SchemeRegistration) -> Result<(), RegistrationError> {
		registration.validate()?;

		self.insert_now(registration)
	}

	fn seal(&self) {
		let _guard = self.schemes.write();

		self.sealed.store(true, Ordering::Release);
	}

	fn is_sealed(&self) -> bool {
		self.sealed.load(Ordering::Acquire)
	}

	fn scheme_names(&self) -> Vec<String> {
		self.schemes.read().keys().cloned().collect()
	}
}
