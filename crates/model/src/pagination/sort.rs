use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Direction of a single sort key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn invert(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One entry of an ordered sort key list.
///
/// `column` is handed to the query builder verbatim and may be qualified
/// (`"users.id"`). `output` is the key under which the column appears in a
/// selected row; when absent it is derived from the column reference.
///
/// The last field of a sort set must reference a non-nullable column that
/// uniquely identifies a row; that precondition is the caller's to uphold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortField {
    pub column: String,
    pub output: Option<String>,
    pub direction: SortDirection,
}

impl SortField {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        SortField {
            column: column.into(),
            output: None,
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        SortField::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        SortField::new(column, SortDirection::Desc)
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The row key this field is read back under: the explicit `output`, or
    /// the part of the column reference after the last `.`.
    pub fn output_key(&self) -> &str {
        match &self.output {
            Some(output) => output,
            None => self
                .column
                .rsplit_once('.')
                .map(|(_, column)| column)
                .unwrap_or(&self.column),
        }
    }

    pub fn invert(&self) -> Self {
        SortField {
            column: self.column.clone(),
            output: self.output.clone(),
            direction: self.direction.invert(),
        }
    }
}

/// Flips every direction while preserving columns and outputs; used to run
/// backward pagination through the forward predicate builder.
pub fn invert_sorts(sorts: &[SortField]) -> Vec<SortField> {
    sorts.iter().map(SortField::invert).collect()
}

/// Derives the stable fingerprint of a sort set.
///
/// Tokens minted under one ordering are refused under any other by comparing
/// this signature; it must not change across processes or releases for a
/// structurally identical sort set.
pub fn sort_signature(sorts: &[SortField]) -> String {
    let canonical = sorts
        .iter()
        .map(|s| format!("{}:{}", s.output_key(), s.direction.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    let digest = Sha256::digest(canonical.as_bytes());
    format!("{digest:x}")[..8].to_string()
}
