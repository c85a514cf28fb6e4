pub mod context;
pub mod debounce;
pub mod dictionary;
pub mod error;
pub mod features;
pub mod fuzzy;
pub mod language;
pub mod phonetic;
pub mod prefs;
pub mod ranker;
pub mod recency;
pub mod resolver;
pub mod session;
pub mod store;

#[cfg(test)]
mod testutil;

pub use self::error::{LoadError, StoreError};
pub use self::language::Language;
pub use self::session::LexiconSession;
pub use self::store::LexicalStore;
