pub mod cloud_storage_reducer;

pub use cloud_storage_reducer::reduce_cloud_storage;
