//! Line-oriented view binding.
//!
//! Reads gesture commands from an async reader, forwards them through one
//! [`RowBinding`] per visible row, and writes every output event it receives.

mod command;
mod render;

pub use command::{Command, CommandError};
pub use render::{render, OutputFormat};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::binding::{
    CellAction, InputSender, OutputEvent, OutputStream, RowBinding, SubscriptionClosed,
};
use crate::cart::ViewSnapshot;
use crate::catalog::{Catalog, ProductId};
use crate::config::ViewConfig;

/// What the console did with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Sent,
    /// Rejected by the view before reaching the view model.
    Rejected(String),
    Quit,
}

pub struct Console {
    sender: Option<InputSender>,
    view: ViewConfig,
    format: OutputFormat,
    /// Row content source, set by `ProductsLoaded`.
    catalog: Catalog,
    rows: Vec<RowBinding>,
    snapshot: ViewSnapshot,
    /// Whether the view model answers `Reset` with a `ViewUpdated`.
    reset_emits_update: bool,
    /// Output events the view model still owes for commands already sent.
    /// `run` reads no further command while this is non-zero.
    owed: usize,
}

impl Console {
    pub fn new(sender: InputSender, view: ViewConfig, format: OutputFormat) -> Self {
        Self {
            sender: Some(sender),
            view,
            format,
            catalog: Catalog::new(Vec::new()),
            rows: Vec::new(),
            snapshot: ViewSnapshot::default(),
            reset_emits_update: true,
            owed: 0,
        }
    }

    /// Match the view model's `emit_on_reset` setting.
    pub fn reset_emits_update(mut self, emits: bool) -> Self {
        self.reset_emits_update = emits;
        self
    }

    /// True while an answer to an earlier command has not arrived yet.
    pub fn awaiting_output(&self) -> bool {
        self.owed > 0
    }

    /// Latest snapshot received from the view model.
    pub fn snapshot(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    /// Number of rows currently bound.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Turn a command into input events.
    pub fn dispatch(&mut self, command: Command) -> Result<Dispatch, SubscriptionClosed> {
        let Some(sender) = &self.sender else {
            return Err(SubscriptionClosed);
        };

        let dispatch = match command {
            Command::Quit => Ok(Dispatch::Quit),
            Command::Init => sender.initialize().map(|_| Dispatch::Sent),
            Command::Reset => sender.reset().map(|_| Dispatch::Sent),
            Command::SetQuantity {
                product_id,
                quantity,
            } => self.stepper(product_id, quantity),
            Command::Increment { product_id } => {
                let quantity = self.snapshot.quantity(product_id).saturating_add(1);
                self.stepper(product_id, quantity)
            }
            Command::Decrement { product_id } => {
                let quantity = self.snapshot.quantity(product_id).saturating_sub(1);
                self.stepper(product_id, quantity)
            }
            Command::Heart { product_id } => self.gesture(product_id, CellAction::HeartToggled),
        }?;

        if dispatch == Dispatch::Sent {
            self.owed += match command {
                // ProductsLoaded plus its ViewUpdated.
                Command::Init => 2,
                Command::Reset => {
                    // Reset clears everything, so the next inc/dec starts from zero.
                    self.snapshot = ViewSnapshot::default();
                    usize::from(self.reset_emits_update)
                }
                _ => 1,
            };
        }
        Ok(dispatch)
    }

    /// Apply an output event to the view and render it.
    pub fn on_output(&mut self, event: &OutputEvent) -> String {
        self.owed = self.owed.saturating_sub(1);
        match event {
            OutputEvent::ProductsLoaded { products } => {
                self.catalog = Catalog::new(products.clone());
                self.rebind_rows();
            }
            OutputEvent::ViewUpdated(snapshot) => {
                self.snapshot = snapshot.clone();
            }
        }
        render(event, &self.catalog, self.format)
    }

    /// Drop every input handle so the view model can finish its stream.
    pub fn close_input(&mut self) {
        for row in &mut self.rows {
            row.unbind();
        }
        self.sender = None;
    }

    /// Drive the session until `reader` is exhausted (or `quit`) and the
    /// view model has delivered its last event.
    ///
    /// Commands are read one at a time: the next line is only read once the
    /// outputs owed for the previous command have been rendered, so a gesture
    /// that follows `init` always finds its row bound.
    pub async fn run<R, W>(
        mut self,
        reader: R,
        mut writer: W,
        mut outputs: OutputStream,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut reading = true;

        loop {
            tokio::select! {
                line = lines.next_line(), if reading && !self.awaiting_output() => {
                    let Some(line) = line? else {
                        reading = false;
                        self.close_input();
                        continue;
                    };
                    let command = match line.parse::<Command>() {
                        Ok(command) => command,
                        Err(CommandError::Empty) => continue,
                        Err(err) => {
                            writer.write_all(format!("error: {}\n", err).as_bytes()).await?;
                            writer.flush().await?;
                            continue;
                        }
                    };
                    match self.dispatch(command) {
                        Ok(Dispatch::Sent) => {}
                        Ok(Dispatch::Rejected(reason)) => {
                            writer.write_all(format!("error: {}\n", reason).as_bytes()).await?;
                            writer.flush().await?;
                        }
                        Ok(Dispatch::Quit) | Err(SubscriptionClosed) => {
                            reading = false;
                            self.close_input();
                        }
                    }
                }
                event = outputs.next() => {
                    let Some(event) = event else {
                        break;
                    };
                    let text = self.on_output(&event);
                    writer.write_all(text.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                }
            }
        }

        Ok(())
    }

    fn stepper(&self, product_id: ProductId, quantity: u32) -> Result<Dispatch, SubscriptionClosed> {
        let clamped = quantity.min(self.view.max_quantity);
        if clamped != quantity {
            tracing::debug!(product_id, quantity, clamped, "stepper value clamped");
        }
        self.gesture(product_id, CellAction::QuantityChanged(clamped))
    }

    fn gesture(&self, product_id: ProductId, action: CellAction) -> Result<Dispatch, SubscriptionClosed> {
        match self.rows.iter().find(|row| row.product_id() == Some(product_id)) {
            Some(row) => row.emit(action).map(|_| Dispatch::Sent),
            None => Ok(Dispatch::Rejected(format!(
                "no row shows product {}",
                product_id
            ))),
        }
    }

    fn rebind_rows(&mut self) {
        let Some(sender) = &self.sender else {
            return;
        };
        self.rows
            .resize_with(self.catalog.len(), RowBinding::new);
        for (row, product) in self.rows.iter_mut().zip(self.catalog.products()) {
            row.bind(product.id, sender);
        }
    }
}
