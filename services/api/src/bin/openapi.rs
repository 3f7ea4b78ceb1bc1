//! services/api/src/bin/openapi.rs
//!
//! Prints the OpenAPI document for the trivia API.
//!
//! `openapi` writes `openapi.json`, `openapi <path>` writes to `<path>`, and
//! `openapi -` writes to stdout.

use std::io::Write;
use trivia_api::web::rest::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = ApiDoc::openapi();
    let rendered = doc.to_pretty_json()?;

    match std::env::args().nth(1).as_deref() {
        Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
        target => {
            let path = target.unwrap_or("openapi.json");
            std::fs::write(path, rendered)?;
            eprintln!("Wrote {} paths to {}", doc.paths.paths.len(), path);
        }
    }
    Ok(())
}
