pub mod language;

pub use language::Spanish;
