pub mod irregular;
pub mod language;
pub mod loader;

#[cfg(test)]
mod tests;

pub use language::German;
pub use loader::GermanLoader;
