// Client module - game service access
pub mod api;
pub mod transport;

pub use api::SimeisClient;
pub use transport::{unwrap_envelope, HttpTransport, Transport};
