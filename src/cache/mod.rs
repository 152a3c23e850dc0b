//! Caching for assembled record bundles.
//!
//! Bundles are expensive to assemble (seven collection fetches per patient),
//! so they are kept for a configurable time-to-live.

pub mod bundle_cache;

pub use bundle_cache::BundleCache;
