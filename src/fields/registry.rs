//! Field types and their registry

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt::Debug;

use super::duration::duration_seconds;
use super::sort::{Comparator, compare_nullable};
use super::types::{CellValue, Field, Row, SortOrder};
use crate::utils::error::{PermissionError, Result};

/// Behaviour of a column type that matters for sorting and display
pub trait FieldType: Send + Sync + Debug {
    fn type_name(&self) -> &'static str;

    fn can_sort_in_view(&self, _field: &Field) -> bool {
        true
    }

    /// Comparator ordering rows by the cell named `name`
    fn get_sort(&self, name: &str, order: SortOrder, field: &Field) -> Comparator<Row>;

    /// Human readable cell text, `None` for empty or unparseable cells
    fn format_value(&self, value: &CellValue, field: &Field) -> Option<String>;
}

fn numeric_sort(name: &str, order: SortOrder, key: fn(&CellValue) -> Option<f64>) -> Comparator<Row> {
    let name = name.to_string();
    Box::new(move |a: &Row, b: &Row| {
        order.apply(compare_nullable(key(a.value(&name)), key(b.value(&name))))
    })
}

/// Durations stored as seconds or as duration text
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationFieldType;

impl FieldType for DurationFieldType {
    fn type_name(&self) -> &'static str {
        "duration"
    }

    fn get_sort(&self, name: &str, order: SortOrder, _field: &Field) -> Comparator<Row> {
        numeric_sort(name, order, duration_seconds)
    }

    fn format_value(&self, value: &CellValue, field: &Field) -> Option<String> {
        duration_seconds(value).map(|seconds| field.duration_format.format(seconds))
    }
}

fn number_value(value: &CellValue) -> Option<f64> {
    let number = match value {
        CellValue::Null => None,
        CellValue::Number(n) => Some(*n),
        CellValue::Text(text) => text.trim().parse::<f64>().ok(),
    };
    number.filter(|n| n.is_finite())
}

/// Plain numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFieldType;

impl FieldType for NumberFieldType {
    fn type_name(&self) -> &'static str {
        "number"
    }

    fn get_sort(&self, name: &str, order: SortOrder, _field: &Field) -> Comparator<Row> {
        numeric_sort(name, order, number_value)
    }

    fn format_value(&self, value: &CellValue, _field: &Field) -> Option<String> {
        number_value(value).map(|n| n.to_string())
    }
}

static DEFAULT_FIELD_TYPES: Lazy<FieldTypeRegistry> = Lazy::new(FieldTypeRegistry::with_defaults);

/// Process-wide field type registry
pub fn default_field_types() -> &'static FieldTypeRegistry {
    &DEFAULT_FIELD_TYPES
}

/// Lookup table from type key to field type
#[derive(Debug)]
pub struct FieldTypeRegistry {
    types: BTreeMap<&'static str, Box<dyn FieldType>>,
}

impl FieldTypeRegistry {
    pub fn with_defaults() -> Self {
        let defaults: [Box<dyn FieldType>; 2] = [Box::new(DurationFieldType), Box::new(NumberFieldType)];
        Self {
            types: defaults
                .into_iter()
                .map(|field_type| (field_type.type_name(), field_type))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Result<&dyn FieldType> {
        self.types
            .get(key)
            .map(|field_type| field_type.as_ref())
            .ok_or_else(|| PermissionError::unknown_field_type(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}

impl Default for FieldTypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
