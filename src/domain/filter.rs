use crate::domain::Record;

/// Current values of the search box and the tag selector.
///
/// An empty `query` or `tag` means "no constraint" for that control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub tag: String,
}

impl FilterState {
    pub fn new<Q: Into<String>, T: Into<String>>(query: Q, tag: T) -> Self {
        Self { query: query.into(), tag: tag.into() }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.tag.is_empty()
    }

    /// Compile the state once for a pass over the catalog.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher { needle: self.query.to_lowercase(), tag: &self.tag }
    }
}

/// A filter with its query already case-folded.
#[derive(Debug)]
pub struct Matcher<'a> {
    needle: String,
    tag: &'a str,
}

impl Matcher<'_> {
    pub fn matches(&self, record: &Record) -> bool {
        let text_ok = self.needle.is_empty() || record.haystack().contains(&self.needle);
        let tag_ok = self.tag.is_empty() || record.has_tag(self.tag);
        text_ok && tag_ok
    }
}
