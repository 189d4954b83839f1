use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc::{self, error::SendError};
use tokio::time::Sleep;
use tracing::{debug, warn};

use crate::cart::{CartReducer, CartState};
use crate::catalog::Catalog;
use crate::config::ReducerConfig;
use crate::mvi::Reducer;

use super::events::{InputEvent, OutputEvent};
use super::stream::{InputReceiver, OutputStream};

/// Sole owner of the cart state and source of every output snapshot.
pub struct ViewModel {
    catalog: Arc<Catalog>,
    config: ReducerConfig,
}

impl ViewModel {
    pub fn new(catalog: Arc<Catalog>, config: ReducerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Start the subscription: consume `inputs` in order and emit outputs.
    ///
    /// The view model is moved into a task on the current tokio runtime, so a
    /// subscription cannot be restarted once its stream has ended. Must be
    /// called from within a runtime.
    pub fn transform(self, inputs: InputReceiver) -> OutputStream {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(Session::new(self, tx).run(inputs));
        OutputStream::new(rx)
    }
}

type Emit = Result<(), SendError<OutputEvent>>;

struct Session {
    catalog: Arc<Catalog>,
    config: ReducerConfig,
    state: CartState,
    out: mpsc::UnboundedSender<OutputEvent>,
    /// Armed by `Initialize`, cleared once the load has been emitted.
    pending_load: Option<Pin<Box<Sleep>>>,
    /// Inputs received while a load is pending, replayed after it fires.
    backlog: VecDeque<InputEvent>,
}

impl Session {
    fn new(view_model: ViewModel, out: mpsc::UnboundedSender<OutputEvent>) -> Self {
        Self {
            catalog: view_model.catalog,
            config: view_model.config,
            state: CartState::default(),
            out,
            pending_load: None,
            backlog: VecDeque::new(),
        }
    }

    async fn run(mut self, mut inputs: InputReceiver) {
        let mut inputs_open = true;

        loop {
            if !inputs_open && self.pending_load.is_none() {
                debug!("inputs closed, ending subscription");
                break;
            }

            let step = tokio::select! {
                biased;

                () = self.out.closed() => {
                    debug!("output stream dropped, ending subscription");
                    break;
                }
                () = load_elapsed(&mut self.pending_load) => self.finish_load(),
                event = inputs.recv(), if inputs_open => match event {
                    Some(event) => self.handle(event),
                    None => {
                        inputs_open = false;
                        Ok(())
                    }
                },
            };

            if step.is_err() {
                debug!("output stream dropped, ending subscription");
                break;
            }
        }
    }

    fn handle(&mut self, event: InputEvent) -> Emit {
        if self.pending_load.is_some() {
            debug!(?event, "load pending, queueing input");
            self.backlog.push_back(event);
            return Ok(());
        }

        debug!(?event, "input");
        match event {
            InputEvent::Initialize => {
                self.pending_load = Some(Box::pin(tokio::time::sleep(self.config.load_delay())));
                Ok(())
            }
            InputEvent::Cell { product_id, .. } if !self.catalog.contains(product_id) => {
                warn!(product_id, "cell event for product outside the catalog ignored");
                Ok(())
            }
            InputEvent::Cell { .. } => {
                self.apply(&event);
                self.emit_view()
            }
            InputEvent::Reset => {
                self.apply(&event);
                if self.config.emit_on_reset {
                    self.emit_view()
                } else {
                    Ok(())
                }
            }
        }
    }

    fn apply(&mut self, event: &InputEvent) {
        let Some(intent) = event.intent() else {
            return;
        };
        let before = std::mem::take(&mut self.state);
        self.state = CartReducer::reduce(before.clone(), intent);
        self.log_changes(&before);
    }

    fn finish_load(&mut self) -> Emit {
        self.pending_load = None;
        self.emit(OutputEvent::ProductsLoaded {
            products: self.catalog.products().to_vec(),
        })?;
        self.emit_view()?;

        while self.pending_load.is_none() {
            let Some(event) = self.backlog.pop_front() else {
                break;
            };
            self.handle(event)?;
        }
        Ok(())
    }

    fn emit_view(&self) -> Emit {
        self.emit(OutputEvent::ViewUpdated(self.state.snapshot(&self.catalog)))
    }

    fn emit(&self, event: OutputEvent) -> Emit {
        self.out.send(event)
    }

    fn log_changes(&self, before: &CartState) {
        if before.quantity_by_product_id() != self.state.quantity_by_product_id() {
            for product in self.catalog.products() {
                let quantity = self.state.quantity(product.id);
                if quantity > 0 {
                    debug!(product = %product.name, quantity, "cart");
                }
            }
        }
        if before.liked_product_ids() != self.state.liked_product_ids() {
            let liked: Vec<&str> = self
                .catalog
                .products()
                .iter()
                .filter(|p| self.state.is_liked(p.id))
                .map(|p| p.name.as_str())
                .collect();
            debug!(?liked, "likes");
        }
    }
}

/// Resolves when the pending load is due; never resolves when none is armed.
fn load_elapsed(pending: &mut Option<Pin<Box<Sleep>>>) -> impl Future<Output = ()> + '_ {
    async move {
        match pending {
            Some(sleep) => sleep.as_mut().await,
            None => std::future::pending().await,
        }
    }
}
