use crate::routes::{root, tasku};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        tasku::tasku
    ),
    tags(
        (name = "Tasku", description = "Tasku API endpoints"),
    ),
    info(
        title = "Tasku API",
        description = "Tasku backend API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, ["/", "/taskus"]);
    }

    #[test]
    fn tasku_is_documented_as_plain_text() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let ok = &doc["paths"]["/taskus"]["get"]["responses"]["200"];
        assert!(ok["content"]["text/plain"].is_object());
        assert_eq!(doc["info"]["title"], Value::from("Tasku API"));
    }
}
