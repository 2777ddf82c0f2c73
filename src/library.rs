//! Track catalog: scanning the songs directory and addressing tracks by position.

mod catalog;
mod model;
mod scan;

pub use catalog::Catalog;
pub use model::Track;

#[cfg(test)]
mod tests;
