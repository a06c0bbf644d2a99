use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_PAGE_SIZE: usize = 100;

/// 1-indexed page selection, normalized from raw query values. Out-of-range
/// input is clamped rather than rejected. The fields stay private so a
/// `PageParams` can only exist in normalized form (`limit >= 1`), which
/// `paginate` divides by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageParams {
    page: usize,
    limit: usize,
}

impl PageParams {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> PageParams {
        PageParams {
            page: page.map(|page| (page as usize).max(1)).unwrap_or(1),
            limit: limit
                .map(|limit| (limit as usize).min(MAX_PAGE_SIZE).max(1))
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for PageParams {
    fn default() -> PageParams {
        PageParams::new(None, None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

/// Slices an already filtered and sorted collection. A page past the end
/// yields an empty list, not an error.
pub fn paginate<T>(items: Vec<T>, params: PageParams) -> (Vec<T>, Pagination) {
    let total = items.len();
    let pagination = Pagination {
        page: params.page,
        limit: params.limit,
        total,
        pages: (total + params.limit - 1) / params.limit,
    };

    let page_items = items
        .into_iter()
        .skip((params.page - 1) * params.limit)
        .take(params.limit)
        .collect();

    (page_items, pagination)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Lenient: unknown tokens fall back to `None` so callers can apply
    /// their own default instead of rejecting the request.
    pub fn parse(value: &str) -> Option<SortDirection> {
        match value {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}
