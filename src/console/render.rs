use clap::ValueEnum;

use crate::binding::OutputEvent;
use crate::cart::ViewSnapshot;
use crate::catalog::{Catalog, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header, one line per row, footer.
    #[default]
    Text,
    /// One JSON object per output event.
    Json,
}

/// Render one output event. `catalog` is the most recently loaded product list.
pub fn render(event: &OutputEvent, catalog: &Catalog, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(event)
            .unwrap_or_else(|err| format!("{{\"error\":\"{}\"}}", err)),
        OutputFormat::Text => match event {
            OutputEvent::ProductsLoaded { products } => render_loaded(products),
            OutputEvent::ViewUpdated(snapshot) => render_table(snapshot, catalog),
        },
    }
}

fn render_loaded(products: &[Product]) -> String {
    format!("Loaded {} products", products.len())
}

fn render_table(snapshot: &ViewSnapshot, catalog: &Catalog) -> String {
    let mut lines = vec![snapshot.header_title()];
    for row in snapshot.rows(catalog) {
        let heart = if row.is_liked { "♥" } else { "♡" };
        lines.push(format!(
            "  [{:>3}] {} #{} {}",
            row.quantity,
            heart,
            row.product.id,
            row.label()
        ));
    }
    lines.push(snapshot.footer_title());
    lines.join("\n")
}
