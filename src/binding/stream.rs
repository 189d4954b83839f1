use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::catalog::ProductId;

use super::events::{CellAction, InputEvent, OutputEvent};

/// The view model is gone; nothing will consume further input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("view model subscription closed")]
pub struct SubscriptionClosed;

pub type InputReceiver = mpsc::UnboundedReceiver<InputEvent>;

/// Create the input side of a subscription.
pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (InputSender { tx }, rx)
}

/// Cloneable producer of input events.
///
/// Sending never blocks and never runs the view model inline, so no output
/// can be observed before `send` returns.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl InputSender {
    pub fn send(&self, event: InputEvent) -> Result<(), SubscriptionClosed> {
        self.tx.send(event).map_err(|_| SubscriptionClosed)
    }

    pub fn initialize(&self) -> Result<(), SubscriptionClosed> {
        self.send(InputEvent::Initialize)
    }

    pub fn cell(&self, product_id: ProductId, action: CellAction) -> Result<(), SubscriptionClosed> {
        self.send(InputEvent::Cell { product_id, action })
    }

    pub fn reset(&self) -> Result<(), SubscriptionClosed> {
        self.send(InputEvent::Reset)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Ordered, unbounded sequence of output events.
///
/// Ends once the input side is closed and every pending emission has been
/// delivered. Dropping it tears the subscription down.
#[derive(Debug)]
pub struct OutputStream {
    rx: mpsc::UnboundedReceiver<OutputEvent>,
}

impl OutputStream {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<OutputEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next event. `None` means the subscription has ended.
    pub async fn next(&mut self) -> Option<OutputEvent> {
        self.rx.recv().await
    }

    /// Next event if one is already queued.
    pub fn try_next(&mut self) -> Option<OutputEvent> {
        self.rx.try_recv().ok()
    }

    /// Stop accepting emissions while keeping already queued events readable.
    pub fn close(&mut self) {
        self.rx.close();
    }
}

impl Stream for OutputStream {
    type Item = OutputEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
