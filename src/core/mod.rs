pub mod export;
pub mod logic;
pub mod week;

pub use logic::LogStore;
