use crate::core::{Identifier, IdentifierKind};
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

const UUID_V4_PATTERN: &str =
    "^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-4[a-fA-F0-9]{3}-[89abAB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$";

static UUID_V4: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(UUID_V4_PATTERN));

/// Separator used to keep a multi-word name as one URL query token.
pub const NAME_SEPARATOR: &str = "%20";

pub fn classify(args: &[String]) -> Result<Identifier> {
    let name = args.join(NAME_SEPARATOR);

    let kind = if name.is_empty() {
        IdentifierKind::Absent
    } else if uuid_v4()?.is_match(&name) {
        IdentifierKind::UuidV4
    } else {
        IdentifierKind::FreeTextName
    };

    tracing::debug!("Classified identifier {:?} as {:?}", name, kind);
    Ok(Identifier { name, kind })
}

fn uuid_v4() -> Result<&'static Regex> {
    UUID_V4.as_ref().map_err(|e| e.clone().into())
}
