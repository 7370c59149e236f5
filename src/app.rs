//! Application state management for the game menu
//!
//! This module contains the main application state, handling keyboard input
//! and routing finished loads from the background loader into the navigator.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{MenuItem, Screen};
use crate::fetch::MenuClient;
use crate::loader::{LoadMessage, Loader};
use crate::nav::{NavFrame, Navigator, Ticket};

/// Main application struct managing state and data
pub struct App {
    /// Index of currently selected row in a menu screen
    pub selected_index: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Base URL for download links on the detail screen
    pub download_base: String,
    navigator: Navigator<MenuClient>,
    loader: Loader,
}

impl App {
    /// Creates a new App from the startup configuration
    pub fn new(config: &StartupConfig) -> Self {
        let client = MenuClient::new(config.endpoint.clone(), config.timeout)
            .with_cache(config.cache_manager());
        Self::with_client(client, config.download_base.clone())
    }

    /// Creates a new App around an existing client
    pub fn with_client(client: MenuClient, download_base: String) -> Self {
        Self {
            selected_index: 0,
            should_quit: false,
            show_help: false,
            download_base,
            navigator: Navigator::new(client),
            loader: Loader::new(),
        }
    }

    pub fn navigator(&self) -> &Navigator<MenuClient> {
        &self.navigator
    }

    /// Starts loading the top-level categories
    pub fn start(&mut self) {
        let ticket = self.navigator.begin(NavFrame::root(), false);
        self.spawn(ticket);
    }

    fn spawn(&mut self, ticket: Ticket) {
        self.selected_index = 0;
        self.loader.spawn(self.navigator.source().clone(), ticket);
    }

    /// Applies every finished load; returns whether the display changed
    pub fn poll_loads(&mut self) -> bool {
        let mut changed = false;
        while let Some(message) = self.loader.try_recv() {
            changed |= self.apply(message);
        }
        changed
    }

    /// Waits for the next finished load and applies it
    pub async fn wait_for_load(&mut self) -> bool {
        match self.loader.recv().await {
            Some(message) => self.apply(message),
            None => false,
        }
    }

    fn apply(&mut self, message: LoadMessage) -> bool {
        let applied = self.navigator.complete(&message.ticket, message.fetched);
        if applied {
            self.selected_index = 0;
        }
        applied
    }

    /// Rows of the current menu screen, empty elsewhere
    pub fn items(&self) -> &[MenuItem] {
        match self.navigator.screen() {
            Screen::Menu { items, .. } => items,
            _ => &[],
        }
    }

    /// Returns the currently selected row, if any
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items().get(self.selected_index)
    }

    /// Names along the current path, root excluded
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.navigator
            .history()
            .frames()
            .iter()
            .skip(1)
            .map(|f| f.discriminator.as_str())
            .collect()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit the application
    /// - `Up`/`k`, `Down`/`j`: Move selection
    /// - `Enter`: Open the selected row
    /// - `Esc`/`Backspace`/`b`: Go back one screen
    /// - `r`: Reload the top level from the endpoint
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('r') => {
                let ticket = self.navigator.begin_reset();
                self.spawn(ticket);
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                if let Some(ticket) = self.navigator.begin_back() {
                    self.spawn(ticket);
                }
            }
            _ if self.navigator.is_loading() => {}
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection_down();
            }
            KeyCode::Enter => {
                let Some(name) = self.selected_item().map(|item| item.name.clone()) else {
                    return;
                };
                if let Some(ticket) = self.navigator.begin_select(&name) {
                    self.spawn(ticket);
                }
            }
            _ => {}
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.items().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.items().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }
}
