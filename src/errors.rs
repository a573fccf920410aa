use core::fmt;

/// Error returned by a push when the deque is full and its grower refused to make room.
///
/// The deque is left exactly as it was before the push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapacityError {
    /// Capacity of the deque at the time growth was refused
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque is full: growth refused at capacity {}", self.capacity)
    }
}

impl core::error::Error for CapacityError {}

#[cfg(feature = "defmt")]
impl defmt::Format for CapacityError {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "deque is full: growth refused at capacity {=usize}",
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::CapacityError;

    #[test]
    fn display() {
        let err = CapacityError { capacity: 4 };
        assert_eq!(
            err.to_string(),
            "deque is full: growth refused at capacity 4"
        );
    }
}
