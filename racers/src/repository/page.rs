use crate::collection::Document;
use crate::common::{lenient_int, Value, PARAM_PAGE, PARAM_PER_PAGE, PARAM_SORT};
use crate::racer::Racer;

/// One page of racers together with the total number of matches.
///
/// ```rust
/// use racers::repository::Page;
///
/// let page = Page::new(vec![], 2, 10, 25);
/// assert_eq!(page.total_pages(), 3);
/// assert_eq!(page.offset(), 10);
/// assert_eq!(page.previous_page(), Some(1));
/// assert_eq!(page.next_page(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Page {
    records: Vec<Racer>,
    page: u64,
    per_page: u64,
    total: u64,
}

impl Page {
    pub fn new(records: Vec<Racer>, page: u64, per_page: u64, total: u64) -> Page {
        Page {
            records,
            page,
            per_page,
            total,
        }
    }

    pub fn records(&self) -> &[Racer] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Racer> {
        self.records
    }

    /// The 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of racers matching the filter across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Number of racers on the pages before this one.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub fn previous_page(&self) -> Option<u64> {
        if self.page > 1 {
            Some(self.page - 1)
        } else {
            None
        }
    }

    pub fn next_page(&self) -> Option<u64> {
        if self.page < self.total_pages() {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// `true` when the page lies past the last page. The first page of an
    /// empty result is in bounds.
    pub fn is_out_of_bounds(&self) -> bool {
        self.page > self.total_pages().max(1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Racer> {
        self.records.iter()
    }
}

impl IntoIterator for Page {
    type Item = Racer;
    type IntoIter = std::vec::IntoIter<Racer>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Racer;
    type IntoIter = std::slice::Iter<'a, Racer>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// What [paginate](crate::repository::RacerRepository::paginate) should
/// fetch.
///
/// Unset page and page size fall back to the first page and the
/// repository's default page size. Both are clamped to at least 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    page: Option<u64>,
    per_page: Option<u64>,
    filter: Option<Document>,
    sort: Option<Document>,
}

impl PageRequest {
    pub fn new() -> PageRequest {
        PageRequest::default()
    }

    /// Reads a request from raw caller parameters.
    ///
    /// `page` and `per_page` are read leniently as integers, so `"2"` works.
    /// `sort` must be a nested document. The whole parameter set doubles as
    /// the filter; keys that are not racer fields are dropped later.
    ///
    /// ```rust
    /// use racers::doc;
    /// use racers::repository::PageRequest;
    ///
    /// let request = PageRequest::from_params(&doc! {
    ///     page: "2",
    ///     per_page: 10,
    ///     gender: "F",
    ///     sort: { secs: 1 },
    /// });
    /// assert_eq!(request.page_number(), Some(2));
    /// assert_eq!(request.page_size(), Some(10));
    /// ```
    pub fn from_params(params: &Document) -> PageRequest {
        PageRequest {
            page: positive_param(params, PARAM_PAGE),
            per_page: positive_param(params, PARAM_PER_PAGE),
            filter: Some(params.clone()),
            sort: params
                .get(PARAM_SORT)
                .and_then(|v| v.as_document())
                .cloned(),
        }
    }

    pub fn page(mut self, page: u64) -> PageRequest {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u64) -> PageRequest {
        self.per_page = Some(per_page);
        self
    }

    pub fn filter(mut self, filter: Document) -> PageRequest {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: Document) -> PageRequest {
        self.sort = Some(sort);
        self
    }

    pub fn page_number(&self) -> Option<u64> {
        self.page
    }

    pub fn page_size(&self) -> Option<u64> {
        self.per_page
    }

    pub fn filter_params(&self) -> Option<&Document> {
        self.filter.as_ref()
    }

    pub fn sort_params(&self) -> Option<&Document> {
        self.sort.as_ref()
    }
}

fn positive_param(params: &Document, key: &str) -> Option<u64> {
    match params.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(lenient_int(value).max(1) as u64),
    }
}
