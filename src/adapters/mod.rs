// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod sink;

pub use http::ReqwestTransport;
pub use sink::{MemorySink, StdoutSink};
