pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{MemorySink, ReqwestTransport, StdoutSink};
pub use config::ClientConfig;
pub use crate::core::{view::ViewEngine, OutputFormat, ViewOptions};
pub use utils::error::{Result, ViewError};
