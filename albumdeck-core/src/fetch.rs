use crate::{Dataset, Page};

/// The default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// A remote source of paged items.
pub trait PageSource {
    /// The error returned when a page request fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch up to `limit` items starting at `offset`, along with the total
    /// number of items available.
    fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<Page, Self::Error>;
}

/// A page request failed while assembling the dataset.
#[derive(Debug)]
pub struct FetchError {
    /// The offset of the page that failed.
    pub offset: usize,
    /// The underlying error from the page source.
    pub source: Box<dyn std::error::Error + Send + Sync>,
}
impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not fetch page at offset {}: {}",
            self.offset, self.source
        )
    }
}
impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Fetches every page from `source` and flattens them into one [`Dataset`].
///
/// The first page decides the total; further pages are requested at offsets
/// `page_size`, `2 * page_size`, ... until the total is covered. Any failure
/// discards everything fetched so far.
pub fn fetch_all<S: PageSource>(source: &mut S, page_size: usize) -> Result<Dataset, FetchError> {
    let page_size = page_size.max(1);

    let first = fetch_page(source, 0, page_size)?;
    let total = first.total;
    tracing::debug!("fetched first page: {} items, {total} total", first.items.len());

    let mut entries = Vec::with_capacity(total);
    entries.extend(first.items);

    let mut offset = page_size;
    while offset < total {
        let page = fetch_page(source, offset, page_size)?;
        tracing::debug!("fetched page at offset {offset}: {} items", page.items.len());
        entries.extend(page.items);
        offset += page_size;
    }

    tracing::info!("fetched {} of {total} items", entries.len());
    Ok(Dataset::from(entries))
}

fn fetch_page<S: PageSource>(
    source: &mut S,
    offset: usize,
    page_size: usize,
) -> Result<Page, FetchError> {
    source
        .fetch_page(offset, page_size)
        .map_err(|e| FetchError {
            offset,
            source: Box::new(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatasetEntry, ItemId};

    #[derive(Debug)]
    struct PageError;
    impl std::fmt::Display for PageError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "page error")
        }
    }
    impl std::error::Error for PageError {}

    struct FakeSource {
        items: Vec<DatasetEntry>,
        fail_at: Option<usize>,
        requests: Vec<(usize, usize)>,
    }
    impl FakeSource {
        fn new(total: usize) -> Self {
            Self {
                items: (0..total).map(entry).collect(),
                fail_at: None,
                requests: vec![],
            }
        }
    }
    impl PageSource for FakeSource {
        type Error = PageError;

        fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<Page, PageError> {
            self.requests.push((offset, limit));
            if self.fail_at == Some(offset) {
                return Err(PageError);
            }
            let end = (offset + limit).min(self.items.len());
            Ok(Page {
                items: self.items[offset.min(end)..end].to_vec(),
                total: self.items.len(),
            })
        }
    }

    fn entry(i: usize) -> DatasetEntry {
        DatasetEntry {
            title: format!("A{i}").into(),
            artist: format!("Artist {i}").into(),
            id: ItemId(format!("spotify:album:{i}")),
        }
    }

    #[test]
    fn test_fetch_completeness() {
        let p = 25;
        for total in [0, 1, p - 1, p, p + 1, 2 * p, 3 * p + 7] {
            let mut source = FakeSource::new(total);
            let dataset = fetch_all(&mut source, p).unwrap();
            assert_eq!(dataset.len(), total, "total {total}");
            for (i, e) in dataset.entries().iter().enumerate() {
                assert_eq!(e, &entry(i));
            }
        }
    }

    #[test]
    fn test_fetch_request_offsets() {
        let mut source = FakeSource::new(60);
        fetch_all(&mut source, 25).unwrap();
        assert_eq!(source.requests, vec![(0, 25), (25, 25), (50, 25)]);

        let mut source = FakeSource::new(25);
        fetch_all(&mut source, 25).unwrap();
        assert_eq!(source.requests, vec![(0, 25)]);
    }

    #[test]
    fn test_fetch_empty_source_is_not_an_error() {
        let mut source = FakeSource::new(0);
        let dataset = fetch_all(&mut source, 25).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_fetch_failure_discards_partial_results() {
        let mut source = FakeSource::new(80);
        source.fail_at = Some(50);
        let err = fetch_all(&mut source, 25).unwrap_err();
        assert_eq!(err.offset, 50);
        assert_eq!(
            err.to_string(),
            "could not fetch page at offset 50: page error"
        );
        // Nothing after the failing page is requested.
        assert_eq!(source.requests.last(), Some(&(50, 25)));
    }

    #[test]
    fn test_fetch_first_page_failure() {
        let mut source = FakeSource::new(10);
        source.fail_at = Some(0);
        assert_eq!(fetch_all(&mut source, 25).unwrap_err().offset, 0);
    }

    #[test]
    fn test_fetch_short_pages_still_terminate() {
        // The source claims more items than it actually serves.
        struct Liar;
        impl PageSource for Liar {
            type Error = PageError;
            fn fetch_page(&mut self, offset: usize, _limit: usize) -> Result<Page, PageError> {
                let items = if offset == 0 { vec![entry(0)] } else { vec![] };
                Ok(Page { items, total: 60 })
            }
        }
        let dataset = fetch_all(&mut Liar, 25).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
