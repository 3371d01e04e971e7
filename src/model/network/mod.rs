mod api;
mod error;
mod transport;

#[cfg(feature = "yew")]
mod http_transport;

#[cfg(test)]
mod memory_server;

pub use api::{encode_component, RosterApi};
pub use error::{RosterError, FALLBACK_ERROR_TEXT};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

#[cfg(feature = "yew")]
pub use http_transport::HttpTransport;

#[cfg(test)]
pub(crate) use memory_server::MemoryServer;
