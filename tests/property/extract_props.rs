//! Property tests for extraction over generated pages.

use crate::common::page;
use pagedex::extract::{parse_html, ContentSelectors};
use pagedex::{extract_all, extract_first, normalize_text, Extractor};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..6).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_pages_without_container_extract_nothing(paragraphs in prop::collection::vec(sentence(), 0..5)) {
        let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
        let html = format!("<html><body><h1>Outside</h1>{}</body></html>", body);
        let doc = parse_html(&html);
        let selectors = ContentSelectors::default();

        prop_assert_eq!(extract_first(&doc, &selectors.title), None);
        prop_assert_eq!(extract_first(&doc, &selectors.subtitle), None);
        prop_assert_eq!(extract_all(&doc, &selectors.body), "");
    }

    #[test]
    fn prop_body_is_joined_paragraphs(title in sentence(), paragraphs in prop::collection::vec(sentence(), 1..6)) {
        let inner: String = paragraphs.iter().map(|p| format!("<p>\n  {}\n</p>", p)).collect();
        let html = page(&format!("<h1>{}</h1>{}", title, inner));

        let doc = Extractor::default().extract(&html);
        prop_assert_eq!(doc.title, Some(title));
        prop_assert_eq!(doc.body, paragraphs.join(" "));
    }

    #[test]
    fn prop_extracted_fields_are_normalized(title in sentence(), text in sentence()) {
        let html = page(&format!("<h2>  {}\r\n</h2><div>\t{}  </div>", title, text));
        let doc = Extractor::default().extract(&html);

        let t = doc.title.clone().unwrap_or_default();
        prop_assert_eq!(normalize_text(&t), t);
        prop_assert_eq!(normalize_text(&doc.body), doc.body);
    }
}
