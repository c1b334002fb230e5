//! Search, filter, sort and paginate a list of records
//!
//! The pipeline order is fixed: search text, then each active filter, then a
//! stable sort, then the page slice. Every step is total; a page beyond the
//! data yields no items but still reports the correct totals.

use rayon::prelude::*;

use crate::types::{PageResult, Record, ViewParameters};

use super::compare::compare_by_field;
use super::ListSchema;

/// Threshold for using parallel search (record count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Compute the page of `records` selected by `params`
pub fn compute_page<R>(records: &[R], params: &ViewParameters, schema: &ListSchema) -> PageResult<R>
where
    R: Record + Clone + Sync,
{
    let matching = filter_and_sort(records, params, schema);
    let total_matching = matching.len();
    let page_size = params.page_size.max(1);

    let start = params.page.max(1).saturating_sub(1).saturating_mul(page_size);
    let items: Vec<R> = if start >= total_matching {
        Vec::new()
    } else {
        matching
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    };

    PageResult {
        items,
        total_matching,
        total_pages: total_pages(total_matching, page_size),
    }
}

/// `ceil(total / page_size)`, zero for an empty list
pub fn total_pages(total_matching: usize, page_size: usize) -> usize {
    if total_matching == 0 {
        0
    } else {
        total_matching.div_ceil(page_size.max(1))
    }
}

/// Search, filter and sort without paginating; borrows from `records`
pub fn filter_and_sort<'a, R>(
    records: &'a [R],
    params: &ViewParameters,
    schema: &ListSchema,
) -> Vec<&'a R>
where
    R: Record + Sync,
{
    let mut matching = search(records, &params.search_text, schema.search_fields);

    for (name, value) in params.active_filters() {
        matching.retain(|r| matches_filter(*r, name, value));
    }

    let direction = params.sort_direction;
    matching.sort_by(|a, b| compare_by_field(*a, *b, &params.sort_field, direction));
    matching
}

/// Keep records where any of `fields` contains `text`, ignoring case.
/// Blank text keeps everything.
pub fn search<'a, R>(records: &'a [R], text: &str, fields: &[&str]) -> Vec<&'a R>
where
    R: Record + Sync,
{
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    // rayon collect keeps input order
    if records.len() > PARALLEL_SEARCH_THRESHOLD {
        records
            .par_iter()
            .filter(|r| matches_search(*r, &needle, fields))
            .collect()
    } else {
        records
            .iter()
            .filter(|r| matches_search(*r, &needle, fields))
            .collect()
    }
}

/// Case-insensitive substring match over the searchable fields.
/// `needle` must already be lowercase.
pub fn matches_search<R: Record + ?Sized>(record: &R, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|name| match record.field(name) {
        Some(value) => value.to_string().to_lowercase().contains(needle),
        None => false,
    })
}

/// Exact, case-sensitive filter match; a missing field never matches
pub fn matches_filter<R: Record + ?Sized>(record: &R, name: &str, value: &str) -> bool {
    record
        .field(name)
        .map(|field| field.matches_exact(value))
        .unwrap_or(false)
}
