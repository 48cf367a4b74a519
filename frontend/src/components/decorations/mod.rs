pub mod catalog;
pub mod comp;
pub mod engine;
pub mod pool;

pub use comp::Decorations;
