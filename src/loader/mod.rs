pub mod loader;

pub use loader::{Loader, PartitionedRecords};
