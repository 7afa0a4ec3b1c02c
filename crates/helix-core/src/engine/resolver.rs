use crate::core::models::genotype::{BaseSymbolPair, GenotypeRecord};
use crate::engine::partition;
use std::convert::Infallible;

/// Resolves the strand-A and strand-B base symbols of every record.
///
/// The two returned vectors are index-aligned with `records`. Short genotype
/// strings are repaired with the defaults documented on
/// [`BaseSymbolPair::from_genotype`]; symbols are not checked against any
/// alphabet here, the palette lookup during assembly does that.
pub fn resolve(records: &[GenotypeRecord]) -> (Vec<char>, Vec<char>) {
    records.iter().map(GenotypeRecord::base_pair).map(split).unzip()
}

/// Same as [`resolve`], processed in contiguous chunks of `chunk_size` records
/// that may run on worker threads. The output is identical to [`resolve`].
pub fn resolve_partitioned(records: &[GenotypeRecord], chunk_size: usize) -> (Vec<char>, Vec<char>) {
    let pairs: Result<Vec<BaseSymbolPair>, Infallible> =
        partition::map_ranges(records.len(), chunk_size, |range| {
            Ok(records[range].iter().map(GenotypeRecord::base_pair).collect())
        });
    match pairs {
        Ok(pairs) => pairs.into_iter().map(split).unzip(),
        Err(never) => match never {},
    }
}

fn split(pair: BaseSymbolPair) -> (char, char) {
    (pair.strand_a, pair.strand_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(genotypes: &[&str]) -> Vec<GenotypeRecord> {
        genotypes
            .iter()
            .enumerate()
            .map(|(i, g)| GenotypeRecord::new(format!("rs{}", i), "1", i as u64, *g))
            .collect()
    }

    #[test]
    fn empty_batch_resolves_to_empty_sequences() {
        assert_eq!(resolve(&[]), (vec![], vec![]));
        assert_eq!(resolve_partitioned(&[], 16), (vec![], vec![]));
    }

    #[test]
    fn two_letter_genotype_splits_across_strands() {
        let (a, b) = resolve(&records(&["AG"]));
        assert_eq!(a, vec!['A']);
        assert_eq!(b, vec!['G']);
    }

    #[test]
    fn empty_genotype_resolves_to_documented_defaults() {
        let (a, b) = resolve(&records(&[""]));
        assert_eq!(a, vec!['A']);
        assert_eq!(b, vec!['T']);
    }

    #[test]
    fn mixed_batch_keeps_index_alignment() {
        let (a, b) = resolve(&records(&["AG", "CT", "A", "", "GG"]));
        assert_eq!(a, vec!['A', 'C', 'A', 'A', 'G']);
        assert_eq!(b, vec!['G', 'T', 'T', 'T', 'G']);
    }

    #[test]
    fn unexpected_symbols_are_passed_through() {
        let (a, b) = resolve(&records(&["-N"]));
        assert_eq!((a[0], b[0]), ('-', 'N'));
    }

    #[test]
    fn partitioned_resolution_matches_sequential_for_any_chunk_size() {
        let genotypes: Vec<&str> = ["AG", "CT", "A", "", "TT", "GC", "C"]
            .iter()
            .cycle()
            .take(1_001)
            .copied()
            .collect();
        let batch = records(&genotypes);
        let expected = resolve(&batch);

        for chunk_size in [0, 1, 2, 7, 64, 1_000, 1_001, 5_000] {
            assert_eq!(resolve_partitioned(&batch, chunk_size), expected);
        }
    }
}
