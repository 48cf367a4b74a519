pub mod imports;

mod events;
mod header;

pub mod admin;
pub mod decorations;
pub mod theme;

pub use decorations::Decorations;
pub use events::EventList;
pub use header::Header;
pub use theme::{FestivalCtx, FestivalCtxSub, ThoranamGate, WithFestivalTheme};
