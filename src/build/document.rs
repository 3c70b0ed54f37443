use crate::types::SearchDocument;

/// A page whose search document has been extracted but not yet merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedPage {
    pub url: String,
    pub search_id: Option<String>,
    pub document: SearchDocument,
}

impl ExtractedPage {
    pub fn new(url: impl Into<String>, search_id: Option<&str>, document: SearchDocument) -> Self {
        Self {
            url: url.into(),
            search_id: search_id.filter(|id| !id.is_empty()).map(str::to_string),
            document,
        }
    }
}
