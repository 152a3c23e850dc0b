mod assembly;
mod snapshot_source;
mod traits;

pub use assembly::{assemble_bundle, BundleAssembly};
pub use snapshot_source::SnapshotRecordSource;
pub use traits::{CollectionFetch, RecordSource};
