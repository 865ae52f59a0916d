//! # DCC API
//!
//! This library provides a thin asynchronous client for the DCC service
//! hosted at `https://highball.eu/dcc`. It builds request URLs against
//! that fixed base address and wraps the HTTP call itself, so consumers
//! never repeat the base address. It uses `tokio` for the async runtime
//! and `reqwest` for HTTP requests.

pub mod client;
pub mod error;
pub mod util;

pub use client::*;
pub use error::DccError;
pub use util::{api_url, build_url, BASE_URL};
