use std::sync::mpsc;
use std::thread;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;

use crate::model::Todo;
use crate::model::config::Config;

/// Error fetching or decoding the remote todo list.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Shape of one record at the endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RemoteTodo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Fetch the todo list and augment each record with the fields the
/// endpoint does not provide.
pub fn fetch_todos(config: &Config) -> Result<Vec<Todo>, FetchError> {
    let url = format!("{}?_limit={}", config.api.url, config.api.limit);
    let response = reqwest::blocking::get(&url)?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let records: Vec<RemoteTodo> = response.json()?;
    Ok(augment(records, config))
}

/// Attach a description (initially the title) and a synthetic creation
/// date drawn uniformly from the configured window, independently per
/// record, exactly once — the dates are never recomputed afterwards.
pub fn augment(records: Vec<RemoteTodo>, config: &Config) -> Vec<Todo> {
    let (start, end) = config.dates.window();
    let mut rng = rand::thread_rng();
    records
        .into_iter()
        .map(|r| Todo {
            id: r.id,
            completed: r.completed,
            description: r.title.clone(),
            creation_date: random_instant(&mut rng, start, end),
            title: r.title,
        })
        .collect()
}

fn random_instant(
    rng: &mut impl Rng,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let lo = start.timestamp_millis();
    let hi = end.timestamp_millis();
    if lo >= hi {
        return start;
    }
    DateTime::from_timestamp_millis(rng.gen_range(lo..hi)).unwrap_or(start)
}

/// Result of the background fetch, delivered to the TUI event loop.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Vec<Todo>),
    Failed(String),
}

/// One-shot background fetch. Spawn it at startup (or on manual refresh)
/// and poll each tick; the thread sends exactly one message and exits.
/// There is no cancellation — a stale loader is simply dropped.
pub struct TodoLoader {
    rx: mpsc::Receiver<LoadEvent>,
}

impl TodoLoader {
    pub fn spawn(config: Config) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let event = match fetch_todos(&config) {
                Ok(todos) => LoadEvent::Loaded(todos),
                Err(e) => LoadEvent::Failed(e.to_string()),
            };
            let _ = tx.send(event);
        });
        TodoLoader { rx }
    }

    /// Non-blocking poll for the fetch result, if it has arrived.
    pub fn poll(&self) -> Option<LoadEvent> {
        self.rx.try_recv().ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
