mod mock_catalog_source;
mod mock_clipboard;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_clipboard::MockClipboard;

/// Two-record catalog used across command tests.
pub const SAMPLE_CATALOG: &str = r#"[
    {"id": 1, "title": "Alpha", "body": "b", "tags": ["x"], "code": "c1"},
    {"id": 2, "title": "Beta", "body": "b", "tags": ["y"], "code": "c2"}
]"#;
