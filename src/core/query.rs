use crate::core::{Identifier, IdentifierKind, Query, QueryMode};
use crate::utils::error::{Result, ViewError};

pub const APPLICATION_PATH: &str = "/api/application";

/// Page size used when listing everything; there is no further pagination.
pub const LIST_ALL_PAGE_SIZE: u32 = 10000;

pub fn build_query(base_url: &str, identifier: &Identifier, show_all: bool) -> Result<Query> {
    let query = match (identifier.kind, show_all) {
        (IdentifierKind::Absent, false) => return Err(ViewError::MissingSelector),
        (IdentifierKind::Absent, true) => Query {
            mode: QueryMode::ListAll,
            url: format!(
                "{}{}?page_size={}",
                base_url, APPLICATION_PATH, LIST_ALL_PAGE_SIZE
            ),
        },
        (_, true) => return Err(ViewError::ConflictingSelectors),
        (IdentifierKind::UuidV4, false) => Query {
            mode: QueryMode::FetchById,
            url: format!("{}{}/{}", base_url, APPLICATION_PATH, identifier.name),
        },
        (IdentifierKind::FreeTextName, false) => Query {
            mode: QueryMode::SearchByName,
            url: format!("{}{}?search={}", base_url, APPLICATION_PATH, identifier.name),
        },
    };

    tracing::debug!("Selected {:?} query: {}", query.mode, query.url);
    Ok(query)
}
