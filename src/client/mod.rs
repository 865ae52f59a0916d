mod client;
mod transport;

pub use client::DccClient;
pub use transport::{FetchTransport, ReqwestTransport, RequestOptions};
