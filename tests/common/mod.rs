//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use cartbind::binding::{input_channel, InputSender, OutputEvent, OutputStream, ViewModel};
use cartbind::cart::ViewSnapshot;
use cartbind::catalog::{Catalog, Product};
use cartbind::config::ReducerConfig;

/// Upper bound for any single wait. Time is paused in these tests, so this
/// only turns a hang into a failure.
pub const WAIT: Duration = Duration::from_secs(30);

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::default())
}

pub fn reducer_config(load_delay_ms: u64, emit_on_reset: bool) -> ReducerConfig {
    ReducerConfig {
        load_delay_ms,
        emit_on_reset,
    }
}

/// Start a subscription over the default catalog.
pub fn subscribe(config: ReducerConfig) -> (InputSender, OutputStream) {
    let (sender, inputs) = input_channel();
    let outputs = ViewModel::new(catalog(), config).transform(inputs);
    (sender, outputs)
}

pub async fn next_event(outputs: &mut OutputStream) -> OutputEvent {
    tokio::time::timeout(WAIT, outputs.next())
        .await
        .expect("timed out waiting for output")
        .expect("output stream ended")
}

pub async fn next_view(outputs: &mut OutputStream) -> ViewSnapshot {
    match next_event(outputs).await {
        OutputEvent::ViewUpdated(snapshot) => {
            assert_consistent(&snapshot, &Catalog::default());
            snapshot
        }
        other => panic!("Expected ViewUpdated, got {:?}", other),
    }
}

pub async fn next_products(outputs: &mut OutputStream) -> Vec<Product> {
    match next_event(outputs).await {
        OutputEvent::ProductsLoaded { products } => products,
        other => panic!("Expected ProductsLoaded, got {:?}", other),
    }
}

/// Send `Initialize` and consume the load pair.
pub async fn load(sender: &InputSender, outputs: &mut OutputStream) -> ViewSnapshot {
    sender.initialize().unwrap();
    next_products(outputs).await;
    next_view(outputs).await
}

/// Assert nothing is emitted within `WAIT`. Only meaningful when no load is pending.
pub async fn assert_quiet(outputs: &mut OutputStream) {
    if let Ok(Some(event)) = tokio::time::timeout(WAIT, outputs.next()).await {
        panic!("Expected no output, got {:?}", event);
    }
}

/// Totals must match the quantities in the snapshot.
pub fn assert_consistent(snapshot: &ViewSnapshot, catalog: &Catalog) {
    let count: u64 = snapshot
        .quantity_by_product_id
        .values()
        .map(|&q| u64::from(q))
        .sum();
    let cost: u128 = catalog
        .products()
        .iter()
        .map(|p| u128::from(snapshot.quantity(p.id)) * u128::from(p.price))
        .sum();
    assert_eq!(snapshot.total_item_count, count, "item count diverged");
    assert_eq!(snapshot.total_cost, cost, "total cost diverged");
}
