use crate::core::io::traits::GenotypeFile;
use crate::core::models::genotype::GenotypeRecord;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

const COMMENT_MARKER: char = '#';
const FIELD_DELIMITER: char = '\t';
const PROJECTED_FIELDS: usize = 4;

/// Comment lines found in the file, without their line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestryHeader {
    pub comment_lines: Vec<String>,
}

#[derive(Debug, Error)]
pub enum GenotypeFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: GenotypeParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenotypeParseErrorKind {
    #[error("Expected at least 4 tab-separated fields, found {found}")]
    TooFewFields { found: usize },
    #[error("Invalid position '{value}', expected an unsigned integer")]
    InvalidPosition { value: String },
}

/// Tab-delimited raw genotype export (`id`, `chromosome`, `position`,
/// `genotype`), as produced by consumer genotyping services.
///
/// Lines starting with `#` are header comments and blank lines are skipped.
/// Every other line must have at least four fields; columns past the fourth
/// are ignored.
pub struct AncestryFile;

impl AncestryFile {
    /// Writes one record as a data row.
    pub fn write_record(record: &GenotypeRecord, writer: &mut impl Write) -> io::Result<()> {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            record.id, record.chromosome, record.position, record.genotype
        )
    }

    /// Writes header lines, adding the comment marker where it is missing.
    pub fn write_header(header: &AncestryHeader, writer: &mut impl Write) -> io::Result<()> {
        for line in &header.comment_lines {
            if line.starts_with(COMMENT_MARKER) {
                writeln!(writer, "{}", line)?;
            } else {
                writeln!(writer, "{}{}", COMMENT_MARKER, line)?;
            }
        }
        Ok(())
    }

    fn parse_row(line: &str, line_num: usize) -> Result<GenotypeRecord, GenotypeFileError> {
        let fields: Vec<&str> = line
            .splitn(PROJECTED_FIELDS + 1, FIELD_DELIMITER)
            .map(str::trim)
            .collect();
        if fields.len() < PROJECTED_FIELDS {
            return Err(GenotypeFileError::Parse {
                line: line_num,
                kind: GenotypeParseErrorKind::TooFewFields {
                    found: fields.len(),
                },
            });
        }

        let position = fields[2].parse().map_err(|_| GenotypeFileError::Parse {
            line: line_num,
            kind: GenotypeParseErrorKind::InvalidPosition {
                value: fields[2].to_string(),
            },
        })?;

        Ok(GenotypeRecord::new(fields[0], fields[1], position, fields[3]))
    }
}

impl GenotypeFile for AncestryFile {
    type Metadata = AncestryHeader;
    type Error = GenotypeFileError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(Vec<GenotypeRecord>, Self::Metadata), Self::Error> {
        let mut records = Vec::new();
        let mut header = AncestryHeader::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let line = line.trim_end_matches('\r');

            if line.starts_with(COMMENT_MARKER) {
                header.comment_lines.push(line.to_string());
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            records.push(Self::parse_row(line, line_num)?);
        }

        Ok((records, header))
    }

    fn write_to(
        records: &[GenotypeRecord],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        Self::write_header(metadata, writer)?;
        for record in records {
            Self::write_record(record, writer)?;
        }
        Ok(())
    }
}

/// Parses a genotype export into its records, in file order.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Vec<GenotypeRecord>, GenotypeFileError> {
    AncestryFile::read_from_path(path).map(|(records, _)| records)
}
