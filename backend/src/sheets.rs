//! Spreadsheet-shaped storage.
//!
//! Events live in spreadsheet shape: one row per event, a separate admins
//! sheet. The whole book sits in a [`SheetBook`] guarded by an `RwLock`,
//! with an optional JSON snapshot on disk.

use interfacing::{Event, EventForm, ThemeConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

pub fn now_rfc3339() -> String {
    humantime::format_rfc3339_seconds(std::time::SystemTime::now()).to_string()
}

#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error("row not found")]
    NotFound,

    #[error("row with the same name and date exists")]
    Duplicate,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("snapshot io failure")]
    Io(#[source] anyhow::Error),
}

impl From<SheetError> for crate::error::ApiError {
    fn from(value: SheetError) -> Self {
        match value {
            SheetError::NotFound => Self::EntryNotFound,
            SheetError::Duplicate => Self::DuplicateEvent,
            SheetError::InvalidInput(_) => Self::BadRequest,
            SheetError::Io(e) => Self::UnexpectedError(e),
        }
    }
}

/// One row of the events sheet. Column order mirrors the sheet header:
/// Event Name, Events, Date, Time, Location, Description, Attendee List,
/// Picture URL, File IDs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct EventRow {
    event_name: String,
    category: String,
    date: String,
    time: String,
    location: String,
    description: String,
    attendee_list: String,
    picture_url: String,
    file_ids: String,
}

impl EventRow {
    fn id(&self) -> String {
        Event::compose_id(&self.event_name, &self.date)
    }

    fn project(&self) -> Event {
        Event {
            id: self.id(),
            event_name: self.event_name.clone(),
            category: self.category.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            attendee_list: self.attendee_list.clone(),
            picture_url: self.picture_url.clone(),
            file_ids: self.file_ids.clone(),
        }
    }

    fn from_form(form: &EventForm) -> Self {
        Self {
            event_name: form.event_name.trim().to_owned(),
            category: form.category.clone(),
            date: form.date.trim().to_owned(),
            time: form.time.clone(),
            location: form.location.clone(),
            description: form.description.clone(),
            attendee_list: form.attendee_list.clone(),
            picture_url: form.picture_url.clone(),
            file_ids: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct SheetBook {
    events: Vec<EventRow>,
    admins: Vec<String>,
    active_theme: ThemeConfig,
}

pub struct SheetStore {
    book: RwLock<SheetBook>,
    snapshot: Option<PathBuf>,
}

impl SheetStore {
    /// Loads the snapshot when it exists, otherwise starts an empty book.
    /// An empty admins sheet is seeded with the fallback admin so the
    /// instance never starts unmanageable.
    pub fn init(snapshot: Option<PathBuf>, fallback_admin: &str) -> Self {
        let mut book = snapshot
            .as_deref()
            .and_then(|path| match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<SheetBook>(&contents) {
                    Ok(book) => Some(book),
                    Err(e) => {
                        tracing::warn!("Malformed sheet snapshot, starting empty: {}", e);
                        None
                    }
                },
                Err(_) => None,
            })
            .unwrap_or_default();

        if book.admins.is_empty() {
            book.admins.push(normalize_email(fallback_admin));
        }

        Self {
            book: RwLock::new(book),
            snapshot,
        }
    }

    fn persist(&self, book: &SheetBook) -> Result<(), SheetError> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };

        let write = || -> Result<(), anyhow::Error> {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let contents = serde_json::to_string_pretty(book)?;
            std::fs::write(path, contents)?;
            Ok(())
        };

        write().map_err(SheetError::Io)
    }

    /// Rows with an empty name are skipped, the rest sorted by date.
    pub async fn events(&self) -> Vec<Event> {
        let book = self.book.read().await;

        let mut events = book
            .events
            .iter()
            .filter(|row| !row.event_name.trim().is_empty())
            .map(EventRow::project)
            .collect::<Vec<_>>();

        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    pub async fn event(&self, id: &str) -> Option<Event> {
        let book = self.book.read().await;
        book.events
            .iter()
            .find(|row| row.id() == id)
            .map(EventRow::project)
    }

    pub async fn add_event(&self, form: &EventForm) -> Result<Event, SheetError> {
        let row = validated_row(form)?;

        let mut book = self.book.write().await;
        if book.events.iter().any(|existing| existing.id() == row.id()) {
            return Err(SheetError::Duplicate);
        }

        book.events.push(row.clone());
        self.persist(&book)?;
        Ok(row.project())
    }

    /// The id may change when name or date change; moving onto another
    /// existing row is rejected.
    pub async fn update_event(&self, id: &str, form: &EventForm) -> Result<Event, SheetError> {
        let mut row = validated_row(form)?;

        let mut book = self.book.write().await;
        let pos = book
            .events
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(SheetError::NotFound)?;

        if row.id() != id
            && book
                .events
                .iter()
                .any(|existing| existing.id() == row.id())
        {
            return Err(SheetError::Duplicate);
        }

        // attachments survive edits of the other columns
        row.file_ids = book.events[pos].file_ids.clone();
        book.events[pos] = row;

        let event = book.events[pos].project();
        self.persist(&book)?;
        Ok(event)
    }

    pub async fn delete_event(&self, id: &str) -> Result<Event, SheetError> {
        let mut book = self.book.write().await;
        let pos = book
            .events
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(SheetError::NotFound)?;

        let removed = book.events.remove(pos);
        self.persist(&book)?;
        Ok(removed.project())
    }

    pub async fn append_file_id(&self, id: &str, file_id: &str) -> Result<(), SheetError> {
        let mut book = self.book.write().await;
        let row = book
            .events
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(SheetError::NotFound)?;

        let mut ids = split_ids(&row.file_ids);
        ids.push(file_id.to_owned());
        row.file_ids = ids.join(",");

        self.persist(&book)
    }

    pub async fn remove_file_id(&self, id: &str, file_id: &str) -> Result<(), SheetError> {
        let mut book = self.book.write().await;
        let row = book
            .events
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(SheetError::NotFound)?;

        let mut ids = split_ids(&row.file_ids);
        let before = ids.len();
        ids.retain(|existing| existing != file_id);
        if ids.len() == before {
            return Err(SheetError::NotFound);
        }
        row.file_ids = ids.join(",");

        self.persist(&book)
    }

    pub async fn is_admin(&self, email: &str) -> bool {
        let email = normalize_email(email);
        let book = self.book.read().await;
        book.admins.contains(&email)
    }

    pub async fn theme(&self) -> ThemeConfig {
        self.book.read().await.active_theme.clone()
    }

    pub async fn set_theme(&self, config: ThemeConfig) -> Result<(), SheetError> {
        let mut book = self.book.write().await;
        book.active_theme = config;
        self.persist(&book)
    }
}

fn validated_row(form: &EventForm) -> Result<EventRow, SheetError> {
    if form.event_name.trim().is_empty() {
        return Err(SheetError::InvalidInput("event name is required".into()));
    }
    if form.date.trim().is_empty() {
        return Err(SheetError::InvalidInput("date is required".into()));
    }
    Ok(EventRow::from_form(form))
}

fn split_ids(file_ids: &str) -> Vec<String> {
    file_ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
