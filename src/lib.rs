pub mod orchestrator;
pub mod loader;
pub mod analyzer;
pub mod transactions;
pub mod users;

pub use orchestrator::run;
pub use loader::{Loader, PartitionedRecords};
pub use analyzer::PercentileAnalyzer;
pub use transactions::TransactionRecord;
pub use users::user_stats::UserStats;
