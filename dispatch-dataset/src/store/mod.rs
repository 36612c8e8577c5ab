mod dataset_store;
mod fs;
mod store_error;

pub use dataset_store::DatasetStore;
pub use store_error::StoreError;
