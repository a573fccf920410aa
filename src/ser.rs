use serde::ser::{Serialize, Serializer};

use crate::IndexDeque;

/// Serializes the bookkeeping state as a [`Snapshot`](crate::Snapshot); the grower is skipped.
impl<G> Serialize for IndexDeque<G> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot().serialize(serializer)
    }
}
