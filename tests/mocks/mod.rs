mod failing_store;
mod mock_record_source;

#[allow(unused_imports)]
pub use failing_store::FailingStore;
#[allow(unused_imports)]
pub use mock_record_source::MockRecordSource;
