//! List view state: parameters, actions and page results

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter value meaning "no constraint"
pub const ALL: &str = "all";

/// Page sizes offered by the page-size selector
pub const PAGE_SIZES: &[usize] = &[5, 10, 20, 25, 50, 100];

/// Page size used when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
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

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction '{}'", other)),
        }
    }
}

/// User-controlled search/filter/sort/page state of one list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewParameters {
    #[serde(rename = "searchText", default)]
    pub search_text: String,
    /// Filter name to selected value; [`ALL`] or absence means unconstrained
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(rename = "sortField")]
    pub sort_field: String,
    #[serde(rename = "sortDirection", default)]
    pub sort_direction: SortDirection,
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

impl ViewParameters {
    /// Fresh parameters sorted ascending by `sort_field`
    pub fn new(sort_field: impl Into<String>) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort_field: sort_field.into(),
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.sort_direction = direction;
        self
    }

    /// Filters that actually constrain the list, in name order
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, v)| is_active_filter_value(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when a search or any filter narrows the list
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty() || self.active_filters().next().is_some()
    }
}

fn is_active_filter_value(value: &str) -> bool {
    !value.is_empty() && value != ALL
}

/// A user interaction that changes [`ViewParameters`]
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SetSearch(String),
    SetFilter { name: String, value: String },
    ClearFilters,
    /// Sort header click: same field toggles direction, new field sorts ascending
    SortBy(String),
    SetPageSize(usize),
    GoToPage(usize),
}

/// One page of a filtered and sorted list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalMatching")]
    pub total_matching: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_matching: 0,
            total_pages: 0,
        }
    }
}

/// A page-number button or a gap marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}
