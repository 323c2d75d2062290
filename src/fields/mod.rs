//! Table field types and row sorting
//!
//! Each field type hands out a comparator for its cells. Comparators are composed
//! with [`SortChain`]; a view's sorts are applied in order and the default row
//! order breaks the remaining ties.

mod duration;
mod registry;
mod sort;
mod types;

pub use duration::{
    DurationFormat, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, duration_seconds,
    parse_duration,
};
pub use registry::{
    DurationFieldType, FieldType, FieldTypeRegistry, NumberFieldType, default_field_types,
};
pub use sort::{
    Comparator, SortChain, compare_decimal_strings, compare_nullable, default_row_order,
    sort_rows, view_sort_chain,
};
pub use types::{CellValue, Field, Row, SortOrder, ViewSort};
