// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::env;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteCache, NoteService};
use crate::domain::{Note, StoreError};

/// A collaborator call observed by the mocks, in invocation order.
///
/// Save calls carry the number of notes passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CacheGet,
    CacheSave(usize),
    ServiceGet,
    ServiceSave(usize),
}

/// Call log shared between a mock cache and a mock service
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        lock(&self.0).clone()
    }

    fn record(&self, call: Call) {
        lock(&self.0).push(call);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory cache double with configurable failures.
///
/// Saved notes are appended to the stored list, like the real caches.
///
/// # Examples
///
/// ```
/// use notekeeper::util::testing::{CallLog, MockNoteCache};
///
/// let log = CallLog::new();
/// let cache = MockNoteCache::builder()
///     .with_read_failure("locked")
///     .with_log(log.clone())
///     .build();
/// ```
pub struct MockNoteCache {
    notes: Mutex<Vec<Note>>,
    read_failure: Option<String>,
    write_failure: Option<String>,
    log: CallLog,
}

impl MockNoteCache {
    pub fn builder() -> MockNoteCacheBuilder {
        MockNoteCacheBuilder::new()
    }

    /// Notes currently held by the cache
    pub fn stored(&self) -> Vec<Note> {
        lock(&self.notes).clone()
    }
}

#[async_trait]
impl NoteCache for MockNoteCache {
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.log.record(Call::CacheGet);
        match &self.read_failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(self.stored()),
        }
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.log.record(Call::CacheSave(notes.len()));
        match &self.write_failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => {
                lock(&self.notes).extend_from_slice(notes);
                Ok(())
            }
        }
    }
}

/// Builder for MockNoteCache
pub struct MockNoteCacheBuilder {
    notes: Vec<Note>,
    read_failure: Option<String>,
    write_failure: Option<String>,
    log: CallLog,
}

impl MockNoteCacheBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            read_failure: None,
            write_failure: None,
            log: CallLog::new(),
        }
    }

    /// Notes the cache holds before the first call
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    /// Make get_notes fail with StoreError::Unavailable
    pub fn with_read_failure(mut self, message: &str) -> Self {
        self.read_failure = Some(message.to_string());
        self
    }

    /// Make save_notes fail with StoreError::Unavailable
    pub fn with_write_failure(mut self, message: &str) -> Self {
        self.write_failure = Some(message.to_string());
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn build(self) -> MockNoteCache {
        MockNoteCache {
            notes: Mutex::new(self.notes),
            read_failure: self.read_failure,
            write_failure: self.write_failure,
            log: self.log,
        }
    }
}

impl Default for MockNoteCacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote service double with canned notes and configurable failures
pub struct MockNoteService {
    notes: Vec<Note>,
    read_failure: Option<String>,
    write_failure: Option<String>,
    log: CallLog,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }
}

#[async_trait]
impl NoteService for MockNoteService {
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.log.record(Call::ServiceGet);
        match &self.read_failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(self.notes.clone()),
        }
    }

    async fn save_data(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.log.record(Call::ServiceSave(notes.len()));
        match &self.write_failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(()),
        }
    }
}

/// Builder for MockNoteService
pub struct MockNoteServiceBuilder {
    notes: Vec<Note>,
    read_failure: Option<String>,
    write_failure: Option<String>,
    log: CallLog,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            read_failure: None,
            write_failure: None,
            log: CallLog::new(),
        }
    }

    /// Notes returned by get_notes
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_read_failure(mut self, message: &str) -> Self {
        self.read_failure = Some(message.to_string());
        self
    }

    pub fn with_write_failure(mut self, message: &str) -> Self {
        self.write_failure = Some(message.to_string());
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            notes: self.notes,
            read_failure: self.read_failure,
            write_failure: self.write_failure,
            log: self.log,
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["rusqlite", "mio", "tokio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
