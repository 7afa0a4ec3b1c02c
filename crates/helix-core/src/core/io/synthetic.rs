use crate::core::io::ancestry::{AncestryFile, AncestryHeader};
use crate::core::models::genotype::GenotypeRecord;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{self, Write};

pub const CHROMOSOMES: [&str; 25] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];

/// Upper bound for generated positions, the length of chromosome 1 in GRCh37.
pub const MAX_POSITION: u64 = 249_250_621;

pub const MAX_RSID: u64 = 999_999_999;

const BASES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Rows written between two calls of the progress callback.
pub const PROGRESS_STRIDE: usize = 10_000;

pub fn default_header() -> AncestryHeader {
    AncestryHeader {
        comment_lines: vec![
            "#AncestryDNA raw data export".to_string(),
            format!("#Generated by dnahelix v{}", env!("CARGO_PKG_VERSION")),
            "#RSID\tCHROMOSOME\tPOSITION\tGENOTYPE".to_string(),
        ],
    }
}

/// Draws one well-formed record: a random chromosome, position, id and a
/// two-base genotype.
pub fn random_record(rng: &mut impl Rng) -> GenotypeRecord {
    let chromosome = CHROMOSOMES.choose(rng).copied().unwrap_or("1");
    let position = rng.gen_range(1..=MAX_POSITION);
    let rsid = rng.gen_range(1..=MAX_RSID);
    let genotype: String = (0..2)
        .map(|_| BASES.choose(rng).copied().unwrap_or('A'))
        .collect();
    GenotypeRecord::new(format!("rs{}", rsid), chromosome, position, genotype)
}

/// Streams a header and `count` random records to `writer`.
///
/// Records are written as they are drawn, so memory use does not grow with
/// `count`. Seeding `rng` makes the output reproducible. `on_rows` receives
/// the number of rows written since its previous call, every
/// [`PROGRESS_STRIDE`] rows and once more for the remainder.
pub fn write_synthetic(
    writer: &mut impl Write,
    header: &AncestryHeader,
    count: usize,
    rng: &mut impl Rng,
    mut on_rows: impl FnMut(u64),
) -> io::Result<()> {
    AncestryFile::write_header(header, writer)?;

    for i in 0..count {
        AncestryFile::write_record(&random_record(rng), writer)?;
        let written = i + 1;
        if written % PROGRESS_STRIDE == 0 {
            on_rows(PROGRESS_STRIDE as u64);
        } else if written == count {
            on_rows((written % PROGRESS_STRIDE) as u64);
        }
    }

    Ok(())
}
