pub mod api;
mod client;
pub mod routes;

pub use client::*;
