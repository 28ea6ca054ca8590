//! What the list is currently showing.

/// Which input drives the list.
///
/// The search term only exists while searching, so a page and a term can
/// never both be applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Driven by the page cursor
    #[default]
    Paginated,
    /// Driven by a client-side text filter over the whole collection
    Search { term: String },
}

/// Page cursor, page size and mode.
///
/// `page` is kept while searching but has no effect until the list returns
/// to [`ListMode::Paginated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub mode: ListMode,
    /// 1-based page number, always ≥ 1
    pub page: u64,
    /// Items per page, always > 0
    pub page_size: u64,
}

impl ListQuery {
    /// Paginated query at page 1. A zero `page_size` is raised to 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            mode: ListMode::Paginated,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, ListMode::Search { .. })
    }

    pub fn search_term(&self) -> Option<&str> {
        match &self.mode {
            ListMode::Search { term } => Some(term),
            ListMode::Paginated => None,
        }
    }

    /// The remote call this query maps to.
    pub fn request(&self) -> FetchRequest {
        match &self.mode {
            ListMode::Paginated => FetchRequest::Page {
                page: self.page,
                page_size: self.page_size,
            },
            ListMode::Search { term } => FetchRequest::Search { term: term.clone() },
        }
    }
}

/// A single remote call issued by the list controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Page { page: u64, page_size: u64 },
    Search { term: String },
}

impl FetchRequest {
    pub fn is_search(&self) -> bool {
        matches!(self, FetchRequest::Search { .. })
    }
}
