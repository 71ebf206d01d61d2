//! Print the OpenAPI document as JSON.

use std::io::Write;

use utoipa::OpenApi;
use yelp::doc::ApiDoc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi().to_pretty_json()?;
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
