pub mod applier;
pub mod bus;
pub mod cache;
pub mod festival_ctx;
pub mod festivals;
pub mod session;
pub mod thoranam;

pub use festival_ctx::{ActiveFestival, FestivalCtx, FestivalCtxSub, WithFestivalTheme};
pub use thoranam::ThoranamGate;
