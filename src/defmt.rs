//! Defmt implementations for index-deque types

use defmt::Formatter;

use crate::{deque::sentinel, IndexDeque, Snapshot};

impl defmt::Format for Snapshot {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(
            fmt,
            "IndexDeque{{head: {=isize}, tail: {=isize}, length: {=usize}, pivot: {=usize}}}",
            sentinel(self.head),
            sentinel(self.tail),
            self.length,
            self.pivot
        )
    }
}

impl<G> defmt::Format for IndexDeque<G> {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::Format::format(&self.snapshot(), fmt)
    }
}
