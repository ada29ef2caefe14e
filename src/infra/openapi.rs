//! OpenAPI configuration.

use crate::core::greeting::greeting_record::Greeting;
use crate::feature::greeting::greeting_api;
use crate::infra::error::ErrorBody;
use utoipa::OpenApi;

/// OpenApi configuration.
#[derive(OpenApi)]
#[openapi(
    paths(greeting_api::greeting),
    components(schemas(Greeting, ErrorBody))
)]
#[derive(Clone, Copy, Debug)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn documents_greeting_endpoint() {
        let doc = ApiDoc::openapi();
        let path = doc.paths.paths.get("/greeting").expect("missing /greeting");
        let json = serde_json::to_value(path).unwrap();
        assert_eq!("name", json["get"]["parameters"][0]["name"]);
        assert_eq!("query", json["get"]["parameters"][0]["in"]);
        assert_eq!(
            "#/components/schemas/ErrorBody",
            json["get"]["responses"]["400"]["content"]["application/json"]["schema"]["$ref"]
        );
        let schemas = doc.components.expect("missing components").schemas;
        assert!(schemas.contains_key("Greeting"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
