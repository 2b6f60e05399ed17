pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod io;
pub mod transport;

pub use application::{BarkService, LnClient, LnClientError};
pub use config::Config;
pub use domain::*;
