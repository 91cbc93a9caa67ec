//! Token-source seam between the engine and the rendering host.
//!
//! The aligner only needs ordered page → line → word access to whatever the
//! host extracted from its text layer, so the engine takes a [`TokenSource`]
//! rather than any particular document representation.

/// Ordered access to the rendered document's word tokens.
///
/// `page` and `line` indices are zero-based and dense; implementations must
/// return the same tokens for the same indices across calls within one
/// alignment run.
pub trait TokenSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Number of text lines on a page.
    fn line_count(&self, page: usize) -> usize;

    /// Word tokens of one line, in reading order.
    fn line(&self, page: usize, line: usize) -> &[String];
}

/// In-memory token stream: pages of lines of whitespace-split words.
#[derive(Clone, Debug, Default)]
pub struct DocumentText {
    pages: Vec<Vec<Vec<String>>>,
}

impl DocumentText {
    /// Build from already-tokenized pages.
    pub fn new(pages: Vec<Vec<Vec<String>>>) -> Self {
        Self { pages }
    }

    /// Build from page texts, splitting each line on whitespace.
    pub fn from_pages<P, L>(pages: P) -> Self
    where
        P: IntoIterator<Item = L>,
        L: IntoIterator<Item = String>,
    {
        let pages = pages
            .into_iter()
            .map(|lines| {
                lines
                    .into_iter()
                    .map(|line| line.split_whitespace().map(str::to_owned).collect())
                    .collect()
            })
            .collect();

        Self { pages }
    }

    /// Build from plain text, treating form feeds as page breaks and
    /// newlines as line breaks.
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_pages(
            text.split('\u{000C}')
                .map(|page| page.lines().map(str::to_owned).collect::<Vec<_>>()),
        )
    }
}

impl TokenSource for DocumentText {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn line_count(&self, page: usize) -> usize {
        self.pages.get(page).map_or(0, Vec::len)
    }

    fn line(&self, page: usize, line: usize) -> &[String] {
        self.pages
            .get(page)
            .and_then(|lines| lines.get(line))
            .map_or(&[], Vec::as_slice)
    }
}

/// Page-completion gate for the one-shot alignment run.
///
/// Alignment scans the whole token stream synchronously, so it must fire only
/// once, after every page unit has been materialized. The host reports each
/// completed page; [`RenderProgress::is_complete`] tells it when to run.
#[derive(Clone, Copy, Debug)]
pub struct RenderProgress {
    rendered: usize,
    expected: usize,
}

impl RenderProgress {
    pub fn new(expected: usize) -> Self {
        Self {
            rendered: 0,
            expected,
        }
    }

    /// Record one completed page unit. Returns true once all pages are in.
    pub fn page_rendered(&mut self) -> bool {
        self.rendered += 1;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.rendered >= self.expected
    }
}
