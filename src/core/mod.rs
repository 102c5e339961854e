pub mod classifier;
pub mod fetcher;
pub mod normalizer;
pub mod query;
pub mod renderer;
pub mod view;

pub use crate::domain::model::{
    Identifier, IdentifierKind, OutputFormat, Query, QueryMode, RawResponse, ResourceSet,
    SearchResponse, ViewOptions,
};
pub use crate::domain::ports::{ConfigProvider, Method, OutputSink, Transport};
pub use crate::utils::error::Result;
pub use fetcher::ResourceFetcher;
