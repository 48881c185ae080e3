use burn::data::dataset::Dataset;

use crate::data::store::IndexedSampleStore;
use crate::domain::sample::Sample;

/// Lets a store feed Burn's DataLoader directly.
///
/// Burn's trait has no error channel and its iterators stop at the
/// first None, so None is reserved for `index >= len`. A failed read
/// inside the valid range panics with the StoreError, the same way
/// Burn's own file-backed datasets fail. Call
/// `IndexedSampleStore::get` to handle the error instead.
impl Dataset<Sample> for IndexedSampleStore {
    fn get(&self, index: usize) -> Option<Sample> {
        if index >= IndexedSampleStore::len(self) {
            return None;
        }
        match IndexedSampleStore::get(self, index) {
            Ok(sample) => Some(sample),
            Err(e) => panic!("Failed to read sample {} of {}: {}", index, self.name(), e),
        }
    }

    fn len(&self) -> usize {
        IndexedSampleStore::len(self)
    }
}
