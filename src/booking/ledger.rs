//! Credit ledger arithmetic

/// A user's credit position: everything ever purchased against the bookings
/// currently holding a credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditLedger {
    pub purchased: i64,
    pub active_bookings: i64,
}

impl CreditLedger {
    pub fn new(purchased: i64, active_bookings: i64) -> Self {
        Self {
            purchased,
            active_bookings,
        }
    }

    /// Unspent credits. Negative means the user is already overbooked.
    pub fn remaining(&self) -> i64 {
        self.purchased - self.active_bookings
    }

    /// Whether one more booking may draw on this ledger
    pub fn has_credit(&self) -> bool {
        self.active_bookings < self.purchased
    }
}
