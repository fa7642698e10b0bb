use figma_layers_lib::{
    core::{errors::AppError, types::FigmaFile},
    extract::layers::find_page,
};

fn sample_file() -> FigmaFile {
    serde_json::from_value(serde_json::json!({
        "name": "Design System",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {"id": "0:1", "name": "Cover", "type": "CANVAS"},
                {"id": "0:2", "name": "Page1", "type": "CANVAS"},
                {"id": "0:3", "name": "Page1", "type": "CANVAS"},
                {"id": "0:4", "name": "Notes", "type": "FRAME"}
            ]
        },
        "components": {
            "12:34": {"key": "abc", "name": "Button", "description": ""}
        }
    }))
    .expect("file should deserialize")
}

#[test]
fn selects_first_canvas_with_exact_name() {
    let file = sample_file();
    let page = find_page(&file.document.children, "Page1").expect("page should exist");
    assert_eq!(page.id, "0:2");
}

#[test]
fn missing_page_is_reported_by_name() {
    let file = sample_file();
    let err = find_page(&file.document.children, "Missing").expect_err("expected lookup failure");
    assert!(matches!(err, AppError::PageNotFound(ref name) if name == "Missing"));
    assert_eq!(err.to_string(), "page 'Missing' was not found");
}

#[test]
fn lookup_is_case_sensitive_and_requires_canvas_type() {
    let file = sample_file();
    assert!(find_page(&file.document.children, "page1").is_err());
    assert!(find_page(&file.document.children, "Notes").is_err());
    assert!(find_page(&[], "Cover").is_err());
}

#[test]
fn components_are_kept_as_opaque_values() {
    let file = sample_file();
    assert_eq!(file.components.len(), 1);
    assert_eq!(file.components["12:34"]["name"], "Button");
}
