//! Field comparison used by every sortable list

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{FieldValue, Record, SortDirection};

/// Total order over optional field values.
///
/// Missing values (and NaN) are the greatest value, so they sort last
/// ascending and first descending. Numbers order before text when a field
/// mixes both kinds.
pub fn compare_values(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (present(a), present(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => compare_text(x, y),
        (Some(FieldValue::Number(_)), Some(FieldValue::Text(_))) => Ordering::Less,
        (Some(FieldValue::Text(_)), Some(FieldValue::Number(_))) => Ordering::Greater,
    }
}

fn present(value: Option<FieldValue<'_>>) -> Option<FieldValue<'_>> {
    match value {
        Some(FieldValue::Number(n)) if n.is_nan() => None,
        other => other,
    }
}

/// Collation-style text ordering.
///
/// Letters compare first without accents or case, so "apple" < "Banana" and
/// "Éclair" < "Fan". Ties break on accents, then on case, then on the raw
/// string, which keeps the order total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| a.nfd().cmp(b.nfd()))
        .then_with(|| a.cmp(b))
}

/// Decomposed, lowercased characters with combining marks dropped
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compare two records on `field` in the given direction
pub fn compare_by_field<R: Record + ?Sized>(
    a: &R,
    b: &R,
    field: &str,
    direction: SortDirection,
) -> Ordering {
    let ordering = compare_values(a.field(field), b.field(field));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable sort of records on one field
pub fn sort_by_field<R: Record>(records: &mut [R], field: &str, direction: SortDirection) {
    records.sort_by(|a, b| compare_by_field(a, b, field, direction));
}
