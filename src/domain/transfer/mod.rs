// Transfer domain module
// Business rules of the transfer market: error taxonomy, commission split,
// in-memory trade settlement, and the immutable trade record

pub mod errors;
pub mod fees;
pub mod record;
pub mod settlement;

// Re-export main types for convenience
pub use errors::{TransferError, TransferResult};
pub use record::{TradeReceipt, TransferRecord};
