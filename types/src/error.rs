use thiserror::Error;

/// Errors a session operation can report.
///
/// Every variant is recoverable by the caller and every failing operation
/// leaves the session untouched; there are no partial mutations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("insufficient funds: have {available}, need {needed}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("item {id} is not in the inventory")]
    ItemNotOwned { id: u64 },

    #[error("unknown container id {id}")]
    UnknownContainer { id: u32 },

    #[error("cannot {action} while {phase}")]
    InvalidOperation {
        action: &'static str,
        phase: &'static str,
    },
}
