//! Credential registry node: one owner for the token ledger, the employer
//! registry and the verification ledger.
//!
//! Every mutating call is a transaction: it either completes, including all
//! token movements, or leaves the whole state exactly as it was.

pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod tracing_spans;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use node::VeriNode;
