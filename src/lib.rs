//! Reactive cart/likes view model for a product list.
//!
//! A view binding feeds [`binding::InputEvent`]s to a [`binding::ViewModel`],
//! which owns the cart state and answers with [`binding::OutputEvent`]
//! snapshots for the list to re-render.

pub mod binding;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod console;
pub mod logging;
pub mod mvi;
