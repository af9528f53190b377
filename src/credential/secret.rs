//! Redacted client secret wrapper.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use serde::Serializer;
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// Client secret that keeps its value out of logs, debug output, and serialized snapshots.
///
/// Deserialization reads the plain value; serialization always writes the redaction marker.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns true when the secret holds no characters.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Base64 (no padding) SHA-256 digest of the secret, safe to log for correlation.
	pub fn fingerprint(&self) -> String {
		let mut hasher = Sha256::new();

		hasher.update(self.0.as_bytes());

		STANDARD_NO_PAD.encode(hasher.finalize())
	}
}
impl AsRef<str> for ClientSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&REDACTED).finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}
impl Serialize for ClientSecret {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}
