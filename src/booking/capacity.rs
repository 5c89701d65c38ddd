//! Course seat accounting

/// Active participants of a course against its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatUsage {
    pub active: i64,
    pub capacity: i64,
}

impl SeatUsage {
    pub fn new(active: i64, capacity: i64) -> Self {
        Self { active, capacity }
    }

    /// Equality means full; there is no waitlist.
    pub fn is_full(&self) -> bool {
        self.active >= self.capacity
    }

    pub fn seats_left(&self) -> i64 {
        (self.capacity - self.active).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_at_capacity() {
        assert!(!SeatUsage::new(0, 1).is_full());
        assert!(SeatUsage::new(1, 1).is_full());
        assert!(SeatUsage::new(2, 1).is_full());
    }

    #[test]
    fn test_zero_capacity_course_is_always_full() {
        assert!(SeatUsage::new(0, 0).is_full());
        assert_eq!(SeatUsage::new(0, 0).seats_left(), 0);
    }

    #[test]
    fn test_seats_left() {
        assert_eq!(SeatUsage::new(3, 10).seats_left(), 7);
        assert_eq!(SeatUsage::new(12, 10).seats_left(), 0);
    }
}
