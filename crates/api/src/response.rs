//! Paginated response envelope.
//!
//! Note listings use page-number pagination with a fixed page size and
//! a `{ count, next, previous, results }` body; `next`/`previous` are
//! relative URLs or null at either end.

use serde::Serialize;

/// One page of results.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// Assemble a page envelope.
    ///
    /// `page` is 1-based and must already be known to be within range;
    /// `base_path` is the listing URL without pagination parameters and
    /// `extra_query` carries any filter parameters to preserve across
    /// page links (e.g. `category_id=3`).
    pub fn new(
        results: Vec<T>,
        count: i64,
        page: i64,
        page_size: i64,
        base_path: &str,
        extra_query: Option<&str>,
    ) -> Self {
        let total_pages = if count == 0 {
            1
        } else {
            (count + page_size - 1) / page_size
        };

        let link = |p: i64| {
            let mut url = format!("{base_path}?page={p}");
            if let Some(extra) = extra_query {
                url.push('&');
                url.push_str(extra);
            }
            url
        };

        Page {
            count,
            next: (page < total_pages).then(|| link(page + 1)),
            previous: (page > 1).then(|| link(page - 1)),
            results,
        }
    }
}
