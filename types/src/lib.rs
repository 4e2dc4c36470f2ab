//! Fundamental types for the credential registry.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account addresses, token and native amounts, timestamps, registry parameters,
//! and the error taxonomy every component maps its failures onto.

pub mod address;
pub mod amount;
pub mod error;
pub mod params;
pub mod time;

pub use address::Address;
pub use amount::{NativeAmount, TokenAmount, NATIVE_UNIT};
pub use error::{ErrorKind, TypesError};
pub use params::{ForfeitPolicy, RegistryParams, RejectedEscrowPolicy};
pub use time::{Clock, SystemClock, Timestamp};
