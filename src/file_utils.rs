use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Open a file for buffered reading
    pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, AppError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AppError::file(path, e))?;
        Ok(BufReader::new(file))
    }

    /// Create (or truncate) a file for buffered writing
    pub fn create_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, AppError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| AppError::file(path, e))?;
        Ok(BufWriter::new(file))
    }

    // @checks: Both paths name the same existing file
    pub fn same_file<P1: AsRef<Path>, P2: AsRef<Path>>(a: P1, b: P2) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Open the input and output of a conversion together
    ///
    /// The input is opened first so a missing input never truncates or
    /// creates the output. Refuses to write over the input itself.
    pub fn open_pair<P1: AsRef<Path>, P2: AsRef<Path>>(
        input: P1,
        output: P2,
    ) -> Result<(BufReader<File>, BufWriter<File>), AppError> {
        let input = input.as_ref();
        let output = output.as_ref();

        if Self::same_file(input, output) {
            return Err(AppError::Usage(format!(
                "input and output are the same file: {}",
                input.display()
            )));
        }

        let reader = Self::open_reader(input)?;
        let writer = Self::create_writer(output)?;
        debug!("Opened {:?} -> {:?}", input, output);

        Ok((reader, writer))
    }
}
