// Application layer - the orchestrator-facing client interface and its
// bark implementation. Domain mapping lives in `crate::domain`; this layer
// wires it to the transport.

pub mod error;
pub mod lnclient;
pub mod service;

pub use error::*;
pub use lnclient::*;
pub use service::*;
