//! Example: Composing a stacked diagram from in-memory records
//!
//! This example demonstrates how to build a `DiagramSet` programmatically
//! and compose it, without reading a directory.

use c4stack::{
    StackBuilder,
    config::AppConfig,
    level::Level,
    record::{DiagramRecord, DiagramSet},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = StackBuilder::new(AppConfig::default().with_title("Online Shop"));

    // Parse a document the way a directory load would
    let context = builder.parse(
        r##"<svg width="400" height="300" viewBox="0 0 400 300">
  <g class="link"><a href="#container"><rect width="120" height="60"/><text y="30">Shop</text></a></g>
</svg>"##,
        Level::Context,
    )?;

    // Or construct a record directly from already cleaned markup
    let container = DiagramRecord::new(
        Level::Container,
        "0 0 500 400",
        500.0,
        400.0,
        r#"<rect width="100" height="50"/>"#,
    );

    let diagrams: DiagramSet = [context, container].into_iter().collect();
    let svg = builder.render_svg(&diagrams)?;

    println!("{svg}");
    Ok(())
}
