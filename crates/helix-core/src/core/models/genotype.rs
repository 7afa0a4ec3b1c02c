/// Strand-A base used when a genotype string has no first character.
pub const DEFAULT_STRAND_A_BASE: char = 'A';

/// Strand-B base used when a genotype string has no second character.
pub const DEFAULT_STRAND_B_BASE: char = 'T';

/// A single marker read from a raw genotype export.
///
/// Records are created by the parser, one per data row, and are never mutated
/// afterwards. The genotype is kept exactly as exported: it is usually two
/// characters over `{A, T, C, G}`, but shorter strings and other characters are
/// accepted here and dealt with further down the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenotypeRecord {
    /// Marker identifier, e.g. `rs548049170`.
    pub id: String,
    /// Chromosome label as written in the file (`1`..`22`, `X`, `Y`, `MT`, ...).
    pub chromosome: String,
    /// Base position on the chromosome.
    pub position: u64,
    /// Allele pair, zero to two characters in well-formed exports.
    pub genotype: String,
}

impl GenotypeRecord {
    pub fn new(
        id: impl Into<String>,
        chromosome: impl Into<String>,
        position: u64,
        genotype: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            chromosome: chromosome.into(),
            position,
            genotype: genotype.into(),
        }
    }

    /// Derives the per-strand base symbols for this record.
    #[inline]
    pub fn base_pair(&self) -> BaseSymbolPair {
        BaseSymbolPair::from_genotype(&self.genotype)
    }
}

/// The two base symbols drawn for one rung of the helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseSymbolPair {
    pub strand_a: char,
    pub strand_b: char,
}

impl BaseSymbolPair {
    /// Splits a genotype string into strand symbols.
    ///
    /// The first character goes to strand A and the second to strand B. Missing
    /// characters are replaced by [`DEFAULT_STRAND_A_BASE`] and
    /// [`DEFAULT_STRAND_B_BASE`] so that truncated rows in noisy exports still
    /// render; the repair is silent. Characters past the second are
    /// ignored, and no alphabet check happens here.
    pub fn from_genotype(genotype: &str) -> Self {
        let mut chars = genotype.chars();
        Self {
            strand_a: chars.next().unwrap_or(DEFAULT_STRAND_A_BASE),
            strand_b: chars.next().unwrap_or(DEFAULT_STRAND_B_BASE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_genotype_maps_each_character_to_its_strand() {
        let pair = BaseSymbolPair::from_genotype("AG");
        assert_eq!(pair.strand_a, 'A');
        assert_eq!(pair.strand_b, 'G');
    }

    #[test]
    fn empty_genotype_falls_back_to_both_defaults() {
        let pair = BaseSymbolPair::from_genotype("");
        assert_eq!(
            pair,
            BaseSymbolPair {
                strand_a: DEFAULT_STRAND_A_BASE,
                strand_b: DEFAULT_STRAND_B_BASE,
            }
        );
    }

    #[test]
    fn single_character_genotype_only_repairs_strand_b() {
        let pair = BaseSymbolPair::from_genotype("C");
        assert_eq!(pair.strand_a, 'C');
        assert_eq!(pair.strand_b, 'T');
    }

    #[test]
    fn characters_beyond_the_second_are_ignored() {
        let pair = BaseSymbolPair::from_genotype("GCA");
        assert_eq!(pair.strand_a, 'G');
        assert_eq!(pair.strand_b, 'C');
    }

    #[test]
    fn out_of_alphabet_symbols_pass_through_unchanged() {
        let pair = BaseSymbolPair::from_genotype("--");
        assert_eq!(pair.strand_a, '-');
        assert_eq!(pair.strand_b, '-');
    }

    #[test]
    fn record_base_pair_uses_its_genotype() {
        let record = GenotypeRecord::new("rs1", "1", 100, "CT");
        assert_eq!(
            record.base_pair(),
            BaseSymbolPair {
                strand_a: 'C',
                strand_b: 'T'
            }
        );
    }
}
