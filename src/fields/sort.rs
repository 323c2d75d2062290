//! Multi-key sorting of rows

use std::cmp::Ordering;
use tracing::debug;

use super::registry::FieldTypeRegistry;
use super::types::{Row, ViewSort};
use crate::utils::error::Result;

/// Boxed comparator as handed out by field types
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Chain of comparators; later ones only break ties of earlier ones
pub struct SortChain<T> {
    comparators: Vec<Comparator<T>>,
}

impl<T> SortChain<T> {
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Start a chain with `cmp` as primary key
    pub fn first_by<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::new().then_by(cmp)
    }

    /// Append a tie-breaking key
    pub fn then_by<F>(self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.then_by_boxed(Box::new(cmp))
    }

    pub fn then_by_boxed(mut self, cmp: Comparator<T>) -> Self {
        self.comparators.push(cmp);
        self
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort; items equal under every key keep their relative order
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }
}

impl<T> Default for SortChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SortChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortChain")
            .field("keys", &self.comparators.len())
            .finish()
    }
}

/// Ascending comparison of optional keys; missing keys sort first.
///
/// Keys are finite, so `-0.0` and `0.0` compare equal.
pub fn compare_nullable(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn split_decimal(value: &str) -> Option<(bool, &str, &str)> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let integer = integer.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');
    Some((negative && !(integer.is_empty() && fraction.is_empty()), integer, fraction))
}

fn compare_magnitude(a: (&str, &str), b: (&str, &str)) -> Ordering {
    a.0.len()
        .cmp(&b.0.len())
        .then_with(|| a.0.cmp(b.0))
        .then_with(|| a.1.cmp(b.1))
}

/// Compare decimal strings such as row orders without losing precision.
///
/// Falls back to plain string comparison when either side is not a decimal.
pub fn compare_decimal_strings(a: &str, b: &str) -> Ordering {
    match (split_decimal(a), split_decimal(b)) {
        (Some((a_neg, a_int, a_frac)), Some((b_neg, b_int, b_frac))) => match (a_neg, b_neg) {
            (false, false) => compare_magnitude((a_int, a_frac), (b_int, b_frac)),
            (true, true) => compare_magnitude((b_int, b_frac), (a_int, a_frac)),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        },
        _ => a.cmp(b),
    }
}

/// Default row order: by decimal `order`, then by `id`
pub fn default_row_order(a: &Row, b: &Row) -> Ordering {
    compare_decimal_strings(&a.order, &b.order).then_with(|| a.id.cmp(&b.id))
}

/// Sort chain for a view: its sorts in order, then the default row order
pub fn view_sort_chain(sorts: &[ViewSort], registry: &FieldTypeRegistry) -> Result<SortChain<Row>> {
    let mut chain = SortChain::new();

    for sort in sorts {
        let field_type = registry.get(&sort.field_type)?;
        if !field_type.can_sort_in_view(&sort.options) {
            debug!(field = %sort.field, "Field type cannot be sorted in a view, skipping");
            continue;
        }
        chain = chain.then_by_boxed(field_type.get_sort(&sort.field, sort.order, &sort.options));
    }

    Ok(chain.then_by(default_row_order))
}

/// Sort rows the way a view with `sorts` displays them
pub fn sort_rows(rows: &mut [Row], sorts: &[ViewSort], registry: &FieldTypeRegistry) -> Result<()> {
    let chain = view_sort_chain(sorts, registry)?;
    chain.sort(rows);
    Ok(())
}
