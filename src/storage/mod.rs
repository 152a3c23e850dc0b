//! Key-value persistence for per-user portal state.
//!
//! The portal kept recent searches and onboarding progress in the browser's
//! local storage. [`KeyValueStore`] is that seam: string keys, string (JSON)
//! values, with an in-memory backend for tests and a JSON-file backend for
//! the server binary.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;
