//! Field and row type definitions

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::duration::DurationFormat;
use crate::utils::error::PermissionError;

/// Value of a single cell as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "'{}'", s),
        }
    }
}

static NULL_CELL: CellValue = CellValue::Null;

/// Table row: id, decimal order and the cell values keyed by field name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    pub order: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: u64, order: impl Into<String>) -> Self {
        Self {
            id,
            order: order.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Cell value of `name`; a missing cell reads as null
    pub fn value(&self, name: &str) -> &CellValue {
        self.values.get(name).unwrap_or(&NULL_CELL)
    }
}

/// Field type options relevant to sorting and formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub duration_format: DurationFormat,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    /// Turn an ascending comparison into one for this direction
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(PermissionError::parsing(format!("Invalid sort order: {}", s))),
        }
    }
}

/// One sort key of a table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSort {
    /// Field name in the rows
    pub field: String,
    /// Field type key, e.g. `duration`
    pub field_type: String,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub options: Field,
}
