use crate::core::{QueryMode, ResourceSet, SearchResponse};
use crate::utils::error::{Result, ViewError};
use serde_json::Value;

pub fn normalize(body: &[u8], mode: QueryMode) -> Result<ResourceSet> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| ViewError::malformed(e.to_string()))?;

    match mode {
        QueryMode::FetchById => {
            if !document.is_object() {
                return Err(ViewError::malformed("expected an application object"));
            }
            Ok(ResourceSet::Single(document))
        }
        QueryMode::ListAll => normalize_listing(document),
        QueryMode::SearchByName => normalize_matches(document),
    }
}

fn normalize_listing(mut document: Value) -> Result<ResourceSet> {
    let applications = document
        .get_mut("applications")
        .map(Value::take)
        .ok_or_else(|| ViewError::malformed("missing field `applications`"))?;

    match applications {
        Value::Array(records) => {
            tracing::debug!("Listed {} applications", records.len());
            Ok(ResourceSet::Listing(records))
        }
        other => Err(ViewError::malformed(format!(
            "field `applications` is not an array: {}",
            other
        ))),
    }
}

fn normalize_matches(document: Value) -> Result<ResourceSet> {
    let response: SearchResponse =
        serde_json::from_value(document).map_err(|e| ViewError::malformed(e.to_string()))?;

    tracing::debug!(
        "Search matched {} applications (page {:?}, page size {:?})",
        response.total_count,
        response.page,
        response.page_size
    );
    if response.total_count == 0 {
        return Err(ViewError::NoMatch);
    }
    if response.applications.is_empty() {
        return Err(ViewError::malformed(format!(
            "total_count is {} but no applications were returned",
            response.total_count
        )));
    }
    if response.total_count > 1 {
        tracing::warn!(
            "{} applications share this name, showing all of them",
            response.total_count
        );
    }

    Ok(ResourceSet::Matches {
        total_count: response.total_count,
        records: response.applications,
    })
}
