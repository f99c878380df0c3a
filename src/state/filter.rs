//! Symbol filtering and pagination.
//!
//! The Dashboard and Screener views share this module: a pure substring
//! filter over an ordered listing plus a 1-indexed, clamped pager. The
//! functions here hold no hidden state; every result is derived from the
//! listing and a [`ListingQuery`].

/// Items that can be filtered by their identifier.
pub trait Keyed {
    /// The identifier matched against the search query.
    fn key(&self) -> &str;
}

/// Filter a listing down to items whose key contains the normalized query
/// as a substring, preserving the original relative order.
///
/// An empty or whitespace-only query returns the full listing.
pub fn filter_by_key<'a, T: Keyed>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.key().to_lowercase().contains(&normalized))
        .collect()
}

/// Total page count for a filtered listing.
///
/// Never zero: an empty listing still has one (empty) page so pagination
/// chrome stays stable.
pub fn total_pages(filtered_len: usize, page_size: usize) -> usize {
    filtered_len.div_ceil(page_size).max(1)
}

/// Search term and current page for a single view's listing.
///
/// The page is 1-indexed. Changing the search term always resets the page
/// to 1, so a stale page from a narrower result set is never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    search: String,
    page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current search term, as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search term and reset the page to 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Pull a stale page back into `[1, total_pages]` after the listing
    /// changes underneath the query, e.g. on a data reload.
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// Request a page change. Requests outside `[1, total_pages]` are
    /// silent no-ops. Returns whether the page changed.
    pub fn request_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }
}

/// A derived page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<'a, T> {
    /// The visible slice, at most `page_size` items.
    pub items: Vec<&'a T>,
    /// Count of items in the whole filtered listing.
    pub total_items: usize,
    /// Total page count, always at least 1.
    pub total_pages: usize,
    /// The 1-indexed page the slice was taken from.
    pub page: usize,
}

/// Slice the requested page out of an already filtered listing.
pub fn paginate<'a, T>(
    filtered: Vec<&'a T>,
    query: &ListingQuery,
    page_size: usize,
) -> PageResult<'a, T> {
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);
    // Query transitions keep the page in bounds; min() guards slicing anyway.
    let page = query.page().min(total_pages);
    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    PageResult {
        items,
        total_items,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct Sym(&'static str);

    impl Keyed for Sym {
        fn key(&self) -> &str {
            self.0
        }
    }

    fn sample_listing() -> Vec<Sym> {
        ["TCS", "TATASTEEL", "HCL", "ITC", "TATACAP", "INFY", "RELIANCE"]
            .into_iter()
            .map(Sym)
            .collect()
    }

    fn symbols<'a>(filtered: &[&'a Sym]) -> Vec<&'a str> {
        filtered.iter().map(|s| s.0).collect()
    }

    #[test]
    fn empty_query_returns_full_listing() {
        let listing = sample_listing();
        let filtered = filter_by_key(&listing, "");
        assert_eq!(filtered.len(), listing.len());
        let padded = filter_by_key(&listing, "   ");
        assert_eq!(symbols(&padded), symbols(&filtered));
    }

    #[test]
    fn filtering_is_case_insensitive() {
        let listing = sample_listing();
        let lower = symbols(&filter_by_key(&listing, "tcs"));
        let upper = symbols(&filter_by_key(&listing, "TCS"));
        assert_eq!(lower, upper);
        assert_eq!(lower, vec!["TCS"]);
    }

    #[test]
    fn filtering_preserves_order() {
        let listing = sample_listing();
        let filtered = filter_by_key(&listing, "ta");
        assert_eq!(symbols(&filtered), vec!["TATASTEEL", "TATACAP"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let listing = sample_listing();
        let once: Vec<Sym> = filter_by_key(&listing, "t")
            .into_iter()
            .map(|s| Sym(s.0))
            .collect();
        let twice = filter_by_key(&once, "t");
        assert_eq!(symbols(&twice).len(), once.len());
    }

    #[test]
    fn no_match_yields_empty_result() {
        let listing = sample_listing();
        let filtered = filter_by_key(&listing, "zzz");
        assert!(filtered.is_empty());
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(7, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn set_search_resets_page() {
        let mut query = ListingQuery::new();
        assert!(query.request_page(2, 3));
        assert_eq!(query.page(), 2);
        query.set_search("ta");
        assert_eq!(query.page(), 1);
        assert_eq!(query.search(), "ta");
    }

    #[test]
    fn out_of_range_page_requests_are_no_ops() {
        let mut query = ListingQuery::new();
        assert!(query.request_page(2, 2));
        assert!(!query.request_page(0, 2));
        assert_eq!(query.page(), 2);
        assert!(!query.request_page(3, 2));
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn clamp_pulls_a_stale_page_back_into_range() {
        let mut query = ListingQuery::new();
        assert!(query.request_page(3, 3));
        query.clamp(2);
        assert_eq!(query.page(), 2);
        query.clamp(0);
        assert_eq!(query.page(), 1);
        query.clamp(5);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn first_page_of_full_listing() {
        let listing = sample_listing();
        let query = ListingQuery::new();
        let page = paginate(filter_by_key(&listing, query.search()), &query, 5);
        assert_eq!(
            symbols(&page.items),
            vec!["TCS", "TATASTEEL", "HCL", "ITC", "TATACAP"]
        );
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let listing = sample_listing();
        let mut query = ListingQuery::new();
        assert!(query.request_page(2, 2));
        let page = paginate(filter_by_key(&listing, query.search()), &query, 5);
        assert_eq!(symbols(&page.items), vec!["INFY", "RELIANCE"]);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn narrowing_search_clamps_to_single_page() {
        let listing = sample_listing();
        let mut query = ListingQuery::new();
        assert!(query.request_page(2, 2));
        query.set_search("ta");
        let page = paginate(filter_by_key(&listing, query.search()), &query, 5);
        assert_eq!(symbols(&page.items), vec!["TATASTEEL", "TATACAP"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn empty_filtered_listing_keeps_one_stable_page() {
        let listing = sample_listing();
        let mut query = ListingQuery::new();
        query.set_search("zzz");
        let page = paginate(filter_by_key(&listing, query.search()), &query, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }
}
