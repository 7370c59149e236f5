//! Navigation history and the controller that drives screen loads
//!
//! The navigator owns a stack of request frames whose top is always the
//! screen being shown. Loads are split into `begin` and `complete` so the
//! event loop can run the fetch in the background; every load carries a
//! sequence number and only the latest one may update the display.

use crate::data::{parse_screen, Depth, Screen};
use crate::fetch::{FetchMode, FetchSource, Fetched, MenuSource};

/// Request parameters that reproduce one screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavFrame {
    pub depth: Depth,
    /// Name of the item selected on the previous screen, `"0"` at the root
    pub discriminator: String,
}

impl NavFrame {
    pub fn new(depth: Depth, discriminator: impl Into<String>) -> Self {
        Self {
            depth,
            discriminator: discriminator.into(),
        }
    }

    /// The top-level category screen
    pub fn root() -> Self {
        Self::new(Depth::Categories, "0")
    }
}

/// Stack of visited frames
///
/// The bottom frame has no predecessor and is never popped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHistory {
    frames: Vec<NavFrame>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: NavFrame) {
        self.frames.push(frame);
    }

    /// Drops the top frame and returns the new top
    ///
    /// Returns `None` without changing anything when one frame or fewer remain.
    pub fn pop(&mut self) -> Option<&NavFrame> {
        if self.frames.len() < 2 {
            return None;
        }
        self.frames.pop();
        self.frames.last()
    }

    /// The frame currently displayed
    pub fn current(&self) -> Option<&NavFrame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn frames(&self) -> &[NavFrame] {
        &self.frames
    }
}

/// A load that has been started and awaits its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub frame: NavFrame,
    pub mode: FetchMode,
}

/// Drives fetch, parse and display for the current frame
#[derive(Debug)]
pub struct Navigator<S> {
    source: S,
    history: NavHistory,
    screen: Screen,
    loading: bool,
    /// Where the displayed payload came from
    last_source: Option<FetchSource>,
    seq: u64,
}

impl<S: MenuSource> Navigator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            history: NavHistory::new(),
            screen: Screen::Empty,
            loading: false,
            last_source: None,
            seq: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn history(&self) -> &NavHistory {
        &self.history
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_source(&self) -> Option<FetchSource> {
        self.last_source
    }

    /// The back control is shown only when there is somewhere to go back to
    pub fn back_visible(&self) -> bool {
        self.history.len() > 1
    }

    /// Starts loading `frame`
    ///
    /// Clears the display and, unless this is a back navigation, pushes the
    /// frame onto the history. The returned ticket must be passed to
    /// [`Navigator::complete`] together with the fetched payload.
    pub fn begin(&mut self, frame: NavFrame, is_back: bool) -> Ticket {
        self.begin_with_mode(frame, is_back, FetchMode::PreferCache)
    }

    fn begin_with_mode(&mut self, frame: NavFrame, is_back: bool, mode: FetchMode) -> Ticket {
        self.seq += 1;
        self.screen = Screen::Empty;
        self.loading = true;
        if !is_back {
            self.history.push(frame.clone());
        }
        tracing::debug!(seq = self.seq, depth = %frame.depth, dat = %frame.discriminator, is_back, "loading screen");
        Ticket {
            seq: self.seq,
            frame,
            mode,
        }
    }

    /// Installs the result of a load
    ///
    /// Returns `false` and leaves the display untouched if a newer load was
    /// started after `ticket`.
    pub fn complete(&mut self, ticket: &Ticket, fetched: Fetched) -> bool {
        if ticket.seq != self.seq {
            tracing::debug!(seq = ticket.seq, latest = self.seq, "dropping superseded load");
            return false;
        }
        self.screen = parse_screen(&fetched.payload, ticket.frame.depth);
        self.last_source = Some(fetched.source);
        self.loading = false;
        true
    }

    /// Loads `frame` and displays it
    pub async fn enter(&mut self, frame: NavFrame, is_back: bool) {
        let ticket = self.begin(frame, is_back);
        self.run(ticket).await;
    }

    async fn run(&mut self, ticket: Ticket) {
        let fetched = self.source.fetch(&ticket.frame, ticket.mode).await;
        self.complete(&ticket, fetched);
    }

    /// Starts loading the frame below the current one
    ///
    /// Returns `None` when there is no previous frame.
    pub fn begin_back(&mut self) -> Option<Ticket> {
        let previous = self.history.pop()?.clone();
        Some(self.begin(previous, true))
    }

    /// Returns to the previous screen; a no-op at the root
    pub async fn go_back(&mut self) {
        if let Some(ticket) = self.begin_back() {
            self.run(ticket).await;
        }
    }

    /// Clears the history and starts a forced reload of the root
    pub fn begin_reset(&mut self) -> Ticket {
        self.history.clear();
        self.begin_with_mode(NavFrame::root(), false, FetchMode::Refresh)
    }

    /// Clears the history and reloads the root from the endpoint
    pub async fn reset(&mut self) {
        let ticket = self.begin_reset();
        self.run(ticket).await;
    }

    /// The frame reached by selecting `name` on the current screen
    ///
    /// `None` at the detail depth or before anything was loaded.
    pub fn next_frame(&self, name: &str) -> Option<NavFrame> {
        let depth = self.history.current()?.depth.next()?;
        Some(NavFrame::new(depth, name))
    }

    /// Starts the forward transition for a selected row
    pub fn begin_select(&mut self, name: &str) -> Option<Ticket> {
        let frame = self.next_frame(name)?;
        Some(self.begin(frame, false))
    }

    /// Drills into the selected row
    pub async fn select(&mut self, name: &str) {
        if let Some(ticket) = self.begin_select(name) {
            self.run(ticket).await;
        }
    }
}
