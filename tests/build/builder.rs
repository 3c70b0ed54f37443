//! Tests for accumulate-then-flush builds.

use crate::common::{load_index, page};
use pagedex::build::ExtractedPage;
use pagedex::{process_page, IndexBuilder, SearchDocument};
use std::fs;
use tempfile::TempDir;

fn sample_pages() -> Vec<(String, &'static str, Option<&'static str>)> {
    vec![
        (page("<h1>Home</h1><p>welcome</p>"), "/", None),
        (page("<header><h2>About</h2></header><p>who</p>"), "/about/", None),
        (page("<h1>Post</h1><h3>Sub</h3><p>words</p>"), "/blog/post/", Some("blog")),
        (page("<h1>Home v2</h1><p>welcome back</p>"), "/", None),
    ]
}

#[test]
fn test_flush_matches_sequential_processing() {
    let sequential = TempDir::new().unwrap();
    for (html, url, search_id) in sample_pages() {
        process_page(&html, url, sequential.path(), search_id).unwrap();
    }

    let batched = TempDir::new().unwrap();
    let mut builder = IndexBuilder::default();
    for (html, url, search_id) in sample_pages() {
        builder.add_page(&html, url, search_id).unwrap();
    }
    builder.flush(batched.path()).unwrap();

    for file in ["search.json", "search_blog.json"] {
        assert_eq!(
            load_index(&sequential.path().join(file)),
            load_index(&batched.path().join(file)),
            "{} differs between sequential and batched builds",
            file
        );
    }
}

#[test]
fn test_flush_keeps_existing_entries() {
    let temp_dir = TempDir::new().unwrap();
    process_page(&page("<h1>Old page</h1>"), "/old/", temp_dir.path(), None).unwrap();

    let mut builder = IndexBuilder::default();
    builder.add_page(&page("<h1>New page</h1>"), "/new/", None).unwrap();
    builder.flush(temp_dir.path()).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert!(index.contains("/old/"));
    assert!(index.contains("/new/"));
}

#[test]
fn test_flush_last_page_wins() {
    let temp_dir = TempDir::new().unwrap();
    let mut builder = IndexBuilder::default();
    builder.add_page(&page("<h1>First</h1>"), "/a/", None).unwrap();
    builder.add_page(&page("<h1>Second</h1>"), "/a/", None).unwrap();
    let summary = builder.flush(temp_dir.path()).unwrap();

    assert_eq!(summary.pages, 1);
    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.get("/a/").unwrap().title.as_deref(), Some("Second"));
}

#[test]
fn test_flush_malformed_partition_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("search_blog.json"), "[]").unwrap();

    let mut builder = IndexBuilder::default();
    builder
        .add(ExtractedPage::new("/b/", Some("blog"), SearchDocument::default()))
        .unwrap();

    let result = builder.flush(temp_dir.path());
    assert!(matches!(result, Err(pagedex::Error::MalformedIndex { .. })));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("search_blog.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_parallel_extraction_single_writer() {
    use std::thread;

    // Extract on many threads, merge through one builder.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let html = page(&format!("<h1>Page {}</h1><p>body {}</p>", i, i));
                let doc = pagedex::Extractor::default().extract(&html);
                ExtractedPage::new(format!("/p/{}/", i), None, doc)
            })
        })
        .collect();

    let mut builder = IndexBuilder::default();
    for handle in handles {
        builder.add(handle.join().unwrap()).unwrap();
    }

    let temp_dir = TempDir::new().unwrap();
    builder.flush(temp_dir.path()).unwrap();
    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.len(), 8, "no update may be lost");
}
