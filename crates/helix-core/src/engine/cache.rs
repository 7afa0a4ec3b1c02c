use crate::core::geometry::{HelixCoordinateSet, HelixParams};
use crate::engine::error::HelixError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, trace};

/// Memoized helix coordinates for one set of [`HelixParams`].
///
/// Entries are keyed by base-pair count only and are never evicted, so the
/// cache grows by one coordinate set per distinct count requested. Callers
/// control that key space (typically one or two counts per run).
///
/// The cache is safe to share between threads. A miss builds the complete
/// coordinate set without holding any lock and only then publishes it; when two
/// threads miss on the same count at once, both compute, the first to publish
/// wins, and both receive the published value.
#[derive(Debug, Default)]
pub struct HelixCache {
    params: HelixParams,
    entries: RwLock<HashMap<usize, Arc<HelixCoordinateSet>>>,
}

impl HelixCache {
    pub fn new(params: HelixParams) -> Self {
        Self {
            params,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn params(&self) -> &HelixParams {
        &self.params
    }

    /// Returns the coordinates for `base_pairs`, computing them on first use.
    ///
    /// Repeated calls with the same count return the same shared allocation.
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::InvalidArgument`] if `base_pairs` is zero.
    pub fn coordinates(&self, base_pairs: usize) -> Result<Arc<HelixCoordinateSet>, HelixError> {
        if base_pairs == 0 {
            return Err(HelixError::InvalidArgument(
                "base-pair count must be positive".to_string(),
            ));
        }

        if let Some(hit) = self.read_entries().get(&base_pairs) {
            trace!(base_pairs, "Helix cache hit.");
            return Ok(Arc::clone(hit));
        }

        let computed = Arc::new(self.compute(base_pairs));
        let mut entries = self.write_entries();
        Ok(Arc::clone(entries.entry(base_pairs).or_insert(computed)))
    }

    pub fn contains(&self, base_pairs: usize) -> bool {
        self.read_entries().contains_key(&base_pairs)
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    #[instrument(level = "debug", skip(self))]
    fn compute(&self, base_pairs: usize) -> HelixCoordinateSet {
        debug!("Helix cache miss, generating coordinates.");
        HelixCoordinateSet::generate(base_pairs, &self.params)
    }

    // Entries are only ever inserted whole, so a poisoned lock still guards a
    // consistent map.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<usize, Arc<HelixCoordinateSet>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<usize, Arc<HelixCoordinateSet>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn zero_base_pairs_is_an_invalid_argument() {
        let cache = HelixCache::default();
        assert!(matches!(
            cache.coordinates(0),
            Err(HelixError::InvalidArgument(_))
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn coordinates_have_requested_length() {
        let cache = HelixCache::default();
        for n in [1, 10, 257] {
            let coords = cache.coordinates(n).unwrap();
            assert_eq!(coords.strand_a().len(), n);
            assert_eq!(coords.strand_b().len(), n);
        }
    }

    #[test]
    fn repeated_requests_return_the_same_allocation() {
        let cache = HelixCache::default();
        let first = cache.coordinates(50).unwrap();
        let second = cache.coordinates(50).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_counts_are_cached_independently() {
        let cache = HelixCache::default();
        let small = cache.coordinates(3).unwrap();
        let large = cache.coordinates(30).unwrap();

        assert_eq!(small.len(), 3);
        assert_eq!(large.len(), 30);
        assert!(cache.contains(3));
        assert!(cache.contains(30));
        assert!(!cache.contains(4));

        let small_again = cache.coordinates(3).unwrap();
        assert!(Arc::ptr_eq(&small, &small_again));
        assert_eq!(*small_again, HelixCoordinateSet::generate(3, &HelixParams::default()));
    }

    #[test]
    fn cached_values_follow_the_cache_params() {
        let params = HelixParams {
            radius: 1.5,
            vertical_stretch: 0.25,
        };
        let cache = HelixCache::new(params);
        assert_eq!(cache.params(), &params);
        assert_eq!(
            *cache.coordinates(12).unwrap(),
            HelixCoordinateSet::generate(12, &params)
        );
    }

    #[test]
    fn concurrent_first_requests_agree_on_one_published_value() {
        let cache = HelixCache::default();

        let results: Vec<Arc<HelixCoordinateSet>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| cache.coordinates(4096).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let published = cache.coordinates(4096).unwrap();
        for coords in &results {
            assert_eq!(coords.len(), 4096);
            assert!(Arc::ptr_eq(coords, &published));
        }
        assert_eq!(cache.len(), 1);
    }
}
