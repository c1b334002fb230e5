//! View state transitions and the client-side list view-model

use crate::types::{PageResult, PageToken, Record, ViewAction, ViewParameters};

use super::page::compute_page;
use super::window::compute_window;
use super::ListSchema;

impl ViewParameters {
    /// Apply one user interaction.
    ///
    /// Every change to search, filters, sort or page size returns to page 1;
    /// only [`ViewAction::GoToPage`] moves between pages.
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetSearch(text) => {
                self.search_text = text;
                self.page = 1;
            }
            ViewAction::SetFilter { name, value } => {
                self.filters.insert(name, value);
                self.page = 1;
            }
            ViewAction::ClearFilters => {
                self.filters.clear();
                self.search_text.clear();
                self.page = 1;
            }
            ViewAction::SortBy(field) => {
                if field == self.sort_field {
                    self.sort_direction = self.sort_direction.toggled();
                } else {
                    self.sort_field = field;
                    self.sort_direction = Default::default();
                }
                self.page = 1;
            }
            ViewAction::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            ViewAction::GoToPage(page) => {
                self.page = page.max(1);
            }
        }
    }

    /// Pure form of [`apply`](Self::apply)
    pub fn reduce(&self, action: ViewAction) -> ViewParameters {
        let mut next = self.clone();
        next.apply(action);
        next
    }
}

/// A client-side list: the full record set, its view parameters and the
/// current page, recomputed on every dispatch.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    records: Vec<R>,
    schema: ListSchema,
    params: ViewParameters,
    result: PageResult<R>,
}

impl<R> ListView<R>
where
    R: Record + Clone + Sync,
{
    /// Create a view sorted by the schema's default field
    pub fn new(records: Vec<R>, schema: ListSchema) -> Self {
        Self::with_params(records, schema, ViewParameters::new(schema.default_sort))
    }

    pub fn with_params(records: Vec<R>, schema: ListSchema, params: ViewParameters) -> Self {
        let result = compute_page(&records, &params, &schema);
        Self {
            records,
            schema,
            params,
            result,
        }
    }

    /// Apply an interaction and recompute the page
    pub fn dispatch(&mut self, action: ViewAction) -> &PageResult<R> {
        self.params.apply(action);
        self.recompute();
        &self.result
    }

    /// Replace the record set (e.g. after a refetch).
    ///
    /// If the current page no longer exists the view moves to the last page.
    pub fn set_records(&mut self, records: Vec<R>) -> &PageResult<R> {
        self.records = records;
        self.recompute();
        if self.result.total_pages > 0 && self.params.page > self.result.total_pages {
            self.params.page = self.result.total_pages;
            self.recompute();
        }
        &self.result
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    pub fn result(&self) -> &PageResult<R> {
        &self.result
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Page buttons for the current result
    pub fn window(&self) -> Vec<PageToken> {
        compute_window(self.params.page, self.result.total_pages)
    }

    /// Query string for fetching this view from a server-paginated endpoint
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }

    fn recompute(&mut self) {
        self.result = compute_page(&self.records, &self.params, &self.schema);
    }
}
