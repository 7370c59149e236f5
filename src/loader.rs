//! Background screen loading
//!
//! Runs each fetch on its own tokio task and hands the result back to the
//! event loop over a channel, so the UI keeps drawing while a request is in
//! flight. Results are applied by the navigator, which discards any that
//! were superseded.

use tokio::sync::mpsc;

use crate::fetch::{Fetched, MenuSource};
use crate::nav::Ticket;

/// Message sent from a load task to the main loop
#[derive(Debug, Clone)]
pub struct LoadMessage {
    pub ticket: Ticket,
    pub fetched: Fetched,
}

/// Spawns load tasks and collects their results
pub struct Loader {
    sender: mpsc::UnboundedSender<LoadMessage>,
    receiver: mpsc::UnboundedReceiver<LoadMessage>,
}

impl Loader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Fetches `ticket`'s frame in the background
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S>(&self, source: S, ticket: Ticket)
    where
        S: MenuSource + Send + Sync + 'static,
    {
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let fetched = source.fetch(&ticket.frame, ticket.mode).await;
            // The receiver only goes away on shutdown
            let _ = tx.send(LoadMessage { ticket, fetched });
        });
    }

    /// Returns a finished load without blocking
    pub fn try_recv(&mut self) -> Option<LoadMessage> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next finished load
    pub async fn recv(&mut self) -> Option<LoadMessage> {
        self.receiver.recv().await
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
