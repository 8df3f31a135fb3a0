//! Photo catalogs that back the search signals.
//!
//! [`InMemoryCatalog`] keeps the whole catalog in memory and implements every
//! collaborator trait in [`crate::search::signals`]. It is what the server
//! runs on when no external index is configured, and what the tests use.

pub mod memory;
mod text;

pub use memory::InMemoryCatalog;
