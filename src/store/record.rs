//! The typed row shared by every collection.

use serde::{Deserialize, Serialize};

/// One row of tabular data: a member's name, a monetary amount, and a
/// workflow status.
///
/// JSON field names preserve the original service's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Nama")]
    pub name: String,

    #[serde(rename = "jumlah_bayar_kas")]
    pub amount: f64,

    pub status: String,
}

impl Record {
    /// Status set by check-in.
    pub const PENDING: &'static str = "Pending";
    /// Status set by a positive approval.
    pub const APPROVED: &'static str = "Approved";
    /// Status set by a negative approval.
    pub const REJECTED: &'static str = "Rejected";

    /// Create a record in the `Pending` state, as produced by check-in.
    pub fn pending(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            status: Self::PENDING.to_string(),
        }
    }
}
