use crate::core::{OutputFormat, OutputSink, ResourceSet};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{json, Value};

/// Pretty-prints a document with serde_json's two-space indent and converts
/// it to YAML when asked.
pub fn render_document<T: Serialize>(document: &T, format: OutputFormat) -> Result<String> {
    let pretty = serde_json::to_string_pretty(document)?;
    match format {
        OutputFormat::Json => Ok(pretty),
        OutputFormat::Yaml => json_to_yaml(&pretty),
    }
}

/// Re-reads rendered JSON and writes it as YAML. Object keys come out sorted.
pub fn json_to_yaml(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// Renders a result set and emits it to `sink`, returning the number of
/// blocks written. Name matches fan out into one block per record, each
/// emitted as soon as it is rendered.
pub fn render(set: &ResourceSet, format: OutputFormat, sink: &mut dyn OutputSink) -> Result<usize> {
    match set {
        ResourceSet::Single(document) => {
            sink.emit(&render_document(document, format)?)?;
            Ok(1)
        }
        ResourceSet::Listing(records) => {
            let wrapper = json!({ "applications": records });
            sink.emit(&render_document(&wrapper, format)?)?;
            Ok(1)
        }
        ResourceSet::Matches { records, .. } => {
            for record in records {
                sink.emit(&render_document(record, format)?)?;
            }
            Ok(records.len())
        }
    }
}
