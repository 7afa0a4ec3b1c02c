use crate::core::models::genotype::GenotypeRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing raw genotype exports.
///
/// Implementors handle one concrete layout (delimiter, comment syntax, column
/// order) and expose it as an ordered list of [`GenotypeRecord`]s plus
/// whatever header information the layout carries.
pub trait GenotypeFile {
    /// Header information preserved alongside the records.
    type Metadata;

    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads every record from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the records in file order and the header metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a data row is malformed. No partial
    /// result is returned.
    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(Vec<GenotypeRecord>, Self::Metadata), Self::Error>;

    /// Writes a header and records to a writer.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, in order.
    /// * `metadata` - The header to emit before the records.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        records: &[GenotypeRecord],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads every record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Vec<GenotypeRecord>, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a header and records to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        records: &[GenotypeRecord],
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
