pub mod language;

pub use language::French;
