//! Tests for single-page processing.

use crate::common::{load_index, load_json, make_doc, page};
use pagedex::{process_page, process_page_with, Error, Extractor};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_process_page_scenario_basic_article() {
    let temp_dir = TempDir::new().unwrap();
    let html = "<article><h1>Hi</h1><p>Hello there.</p></article>";

    let out = process_page(html, "/a/", temp_dir.path(), None).unwrap();
    assert_eq!(out, html, "HTML must pass through unchanged");

    let json = load_json(&temp_dir.path().join("search.json"));
    assert_eq!(
        json,
        serde_json::json!({"/a/": {"title": "Hi", "subtitle": null, "body": "Hello there."}})
    );
}

#[test]
fn test_process_page_whitespace_heavy_text() {
    let temp_dir = TempDir::new().unwrap();
    let html = page("<h1>T</h1><p>Line1\n\n  Line2</p>");
    process_page(&html, "/ws/", temp_dir.path(), None).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.get("/ws/").unwrap().body, "Line1 Line2");
}

#[test]
fn test_process_two_urls_in_sequence() {
    let temp_dir = TempDir::new().unwrap();
    process_page(&page("<h1>One</h1><p>first</p>"), "/one/", temp_dir.path(), None).unwrap();
    process_page(&page("<h1>Two</h1><p>second</p>"), "/two/", temp_dir.path(), None).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("/one/"), Some(&make_doc(Some("One"), None, "first")));
    assert_eq!(index.get("/two/"), Some(&make_doc(Some("Two"), None, "second")));
}

#[test]
fn test_process_same_url_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    process_page(&page("<h1>Old</h1><h3>Sub</h3><p>old</p>"), "/a/", temp_dir.path(), None).unwrap();
    process_page(&page("<h1>New</h1><p>new</p>"), "/a/", temp_dir.path(), None).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("/a/"), Some(&make_doc(Some("New"), None, "new")));
}

#[test]
fn test_process_page_without_container() {
    let temp_dir = TempDir::new().unwrap();
    process_page("<p>no article here</p>", "/bare/", temp_dir.path(), None).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.get("/bare/"), Some(&make_doc(None, None, "")));
}

#[test]
fn test_process_page_unchanged_skips_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("search.json");
    let html = page("<h1>Same</h1><p>text</p>");

    process_page(&html, "/a/", temp_dir.path(), None).unwrap();
    // Replace the file with an equivalent but differently formatted document.
    fs::write(&path, r#"{"/a/":{"title":"Same","subtitle":null,"body":"text"}}"#).unwrap();

    process_page(&html, "/a/", temp_dir.path(), None).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"/a/":{"title":"Same","subtitle":null,"body":"text"}}"#,
        "identical entry should not trigger a rewrite"
    );
}

#[test]
fn test_process_page_malformed_index() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("search.json");
    fs::write(&path, r#""not an object""#).unwrap();

    let err = process_page(&page("<h1>x</h1>"), "/a/", temp_dir.path(), None).unwrap_err();
    assert!(matches!(err, Error::MalformedIndex { .. }));
    assert!(
        err.to_string().contains("search.json"),
        "Error should name the index file: {}",
        err
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), r#""not an object""#);
}

#[test]
fn test_process_page_creates_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("public/site");
    process_page(&page("<h1>x</h1>"), "/a/", &output, None).unwrap();
    assert!(output.join("search.json").exists());
}

#[test]
fn test_process_page_with_custom_container() {
    let temp_dir = TempDir::new().unwrap();
    let extractor = Extractor::for_container("div.content").unwrap();
    let html = "<div class=\"content\"><h2>Custom</h2><p>inside</p></div><article><h1>No</h1></article>";

    process_page_with(&extractor, html, "/c/", temp_dir.path(), None).unwrap();

    let index = load_index(&temp_dir.path().join("search.json"));
    assert_eq!(index.get("/c/"), Some(&make_doc(Some("Custom"), None, "inside")));
}

#[cfg(unix)]
#[test]
fn test_process_page_keeps_index_readable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("search.json");
    process_page(&page("<h1>One</h1><p>first</p>"), "/one/", temp_dir.path(), None).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    process_page(&page("<h1>Two</h1><p>second</p>"), "/two/", temp_dir.path(), None).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644, "rewrite changed mode to {:o}", mode);
    assert_eq!(load_index(&path).len(), 2);
}
