use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::{deque::sentinel, IndexDeque, Snapshot};

impl uDisplay for Snapshot {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(
            f,
            "IndexDeque{{head: {}, tail: {}, length: {}, pivot: {}}}",
            sentinel(self.head),
            sentinel(self.tail),
            self.length,
            self.pivot
        )
    }
}

impl<G> uDisplay for IndexDeque<G> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(&self.snapshot(), f)
    }
}
