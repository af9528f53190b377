//! Fail-fast setup of external OAuth 2.0 login providers: resolve Google, Microsoft, Facebook,
//! and Twitter credentials from layered configuration and register one authentication scheme
//! per provider before the host starts serving requests.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod credential;
pub mod error;
pub mod identity;
pub mod obs;
pub mod provider;
pub mod registrar;
pub mod scheme;
pub mod startup;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use url;
#[cfg(test)] use {color_eyre as _, tempfile as _, tracing_subscriber as _};
