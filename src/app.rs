//! Application state and run orchestration
//!
//! This module sequences the single-shot pipeline (fetch → cache-write →
//! cache-read → aggregate/search) and holds the state driving the terminal
//! dashboard.

use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;
use tracing::debug;

use crate::config::CACHE_KEY;
use crate::data::{FetchError, PresidentsClient, TermRecord};
use crate::stats::TermReport;
use crate::store::{StoreError, TermStore};

/// Errors that can abort a run
///
/// Every step of the pipeline is fatal on failure; there is no retry and no
/// partial output.
#[derive(Debug, Error)]
pub enum AppError {
    /// Fetching the dataset from the API failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The document store failed during the cache round-trip
    #[error("document store failure: {0}")]
    Store(#[from] StoreError),

    /// The document vanished between the write and the read-back
    #[error("document '{0}' missing from store after write")]
    MissingDocument(String),
}

/// Runs the fetch → cache-write → cache-read → aggregate pipeline
///
/// Statistics are computed from the copy read back out of the store, not
/// from the in-memory fetch result, so every run exercises the full cache
/// path. The steps run strictly in sequence.
///
/// # Arguments
/// * `client` - The presidents API client
/// * `store` - A connected document store gateway
/// * `query` - Name fragment for the search step
pub async fn load_report(
    client: &PresidentsClient,
    store: &mut TermStore,
    query: &str,
) -> Result<TermReport, AppError> {
    let fetched = client.fetch_presidents().await?;
    debug!(records = fetched.len(), "fetched dataset");

    store.put_document(CACHE_KEY, &fetched).await?;

    let cached: Vec<TermRecord> = store
        .get_document(CACHE_KEY)
        .await?
        .ok_or_else(|| AppError::MissingDocument(CACHE_KEY.to_string()))?;
    debug!(records = cached.len(), "read dataset back from store");

    Ok(TermReport::from_records(cached, query, Local::now().year()))
}

/// Application state enum representing the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial state while the pipeline is running
    Loading,
    /// Statistics dashboard once the report is available
    Dashboard,
}

/// Main application struct managing view state and the loaded report
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// The loaded report, present once the pipeline finishes
    pub report: Option<TermReport>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
}

impl App {
    /// Creates a new App in the loading state
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            report: None,
            should_quit: false,
        }
    }

    /// Installs a loaded report and switches to the dashboard view
    pub fn set_report(&mut self, report: TermReport) {
        self.report = Some(report);
        self.state = AppState::Dashboard;
    }

    /// Handles a keyboard event
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
