use crate::core::{
    classifier, normalizer, query, renderer, ConfigProvider, OutputSink, ResourceFetcher,
    Transport, ViewOptions,
};
use crate::utils::error::Result;

/// Runs one `app view` invocation: classify, build the query, fetch,
/// normalize, then render into the sink.
pub struct ViewEngine<T: Transport> {
    base_url: String,
    fetcher: ResourceFetcher<T>,
}

impl<T: Transport> ViewEngine<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher: ResourceFetcher::new(transport),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, transport: T) -> Self {
        Self::new(config.base_url(), transport)
    }

    /// Returns the number of blocks emitted.
    pub async fn run(&self, options: &ViewOptions, sink: &mut dyn OutputSink) -> Result<usize> {
        let identifier = classifier::classify(&options.args)?;
        let query = query::build_query(&self.base_url, &identifier, options.show_all)?;

        let body = self.fetcher.fetch(&query.url).await?;
        let set = normalizer::normalize(&body, query.mode)?;
        tracing::debug!(
            "Normalized {:?} response: {} record(s), total count {}",
            set.mode(),
            set.records().len(),
            set.total_count()
        );

        let emitted = renderer::render(&set, options.format, sink)?;
        tracing::debug!("Rendered {} block(s) as {}", emitted, options.format);
        Ok(emitted)
    }
}
