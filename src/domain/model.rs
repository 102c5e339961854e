use crate::utils::error::{Result, ViewError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Absent,
    UuidV4,
    FreeTextName,
}

/// Caller input after classification. `name` is the positional arguments
/// joined with `%20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub kind: IdentifierKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    ListAll,
    FetchById,
    SearchByName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: QueryMode,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ViewError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Flags captured once at invocation start. The pipeline never reads flags
/// from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub args: Vec<String>,
    pub show_all: bool,
    pub format: OutputFormat,
}

impl ViewOptions {
    pub fn new(args: Vec<String>, show_all: bool, format: &str) -> Result<Self> {
        Ok(Self {
            args,
            show_all,
            format: format.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Body of a name search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub applications: Vec<Value>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let records: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(records.unwrap_or_default())
}

/// Normalized result of a query, tagged by the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceSet {
    Single(Value),
    Listing(Vec<Value>),
    Matches { total_count: u64, records: Vec<Value> },
}

impl ResourceSet {
    pub fn mode(&self) -> QueryMode {
        match self {
            ResourceSet::Single(_) => QueryMode::FetchById,
            ResourceSet::Listing(_) => QueryMode::ListAll,
            ResourceSet::Matches { .. } => QueryMode::SearchByName,
        }
    }

    pub fn records(&self) -> &[Value] {
        match self {
            ResourceSet::Single(document) => std::slice::from_ref(document),
            ResourceSet::Listing(records) => records,
            ResourceSet::Matches { records, .. } => records,
        }
    }

    pub fn total_count(&self) -> u64 {
        match self {
            ResourceSet::Single(_) => 1,
            ResourceSet::Listing(records) => records.len() as u64,
            ResourceSet::Matches { total_count, .. } => *total_count,
        }
    }
}
