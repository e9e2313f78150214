//! Print the OpenAPI document as JSON, for CI artefacts and client codegen.

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    println!("{}", ApiDoc::openapi().to_json().unwrap());
}
