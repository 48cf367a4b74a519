mod imports;

mod admin;
mod attachment;
mod event;
mod theme;

pub use admin::AdminCheck;
pub use attachment::{AttachmentReceipt, AttachmentUpload};
pub use event::{Event, EventForm, EventsResponse};
pub use theme::{Festival, Mode, ThemeChangeForm, ThemeConfig, SUPPORTED_FESTIVALS};
