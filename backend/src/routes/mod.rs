mod imports;

mod admin_check;
mod attachments;
mod events;
mod health_check;
mod theme;

pub use admin_check::*;
pub use attachments::*;
pub use events::*;
pub use health_check::*;
pub use theme::*;
