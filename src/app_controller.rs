use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{SrtReader, SrtWriter};
use crate::word_splitter::{ConversionSession, WordSplitter};

// @module: Application controller for subtitle conversion

/// Counters for one finished conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Entries read from the input
    pub entries: usize,

    /// Entries that produced no cues
    pub skipped_entries: usize,

    /// Cues written to the output
    pub cues: usize,
}

/// Main application controller for word splitting
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Convert `input` into a word-per-cue file at `output`
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input: P1,
        output: P2,
    ) -> Result<ConversionStats, AppError> {
        let input = input.as_ref();
        let output = output.as_ref();
        let start_time = Instant::now();

        let (reader, writer) = FileManager::open_pair(input, output)?;
        let stats = self.run(reader, writer, output)?;

        info!(
            "Converted {:?}: {} entries -> {} cues ({} skipped) in {:.2?}",
            input,
            stats.entries,
            stats.cues,
            stats.skipped_entries,
            start_time.elapsed()
        );

        Ok(stats)
    }

    /// Run the conversion over any reader/writer pair
    ///
    /// The writer is flushed before returning successfully. On error the
    /// output may hold the cues written so far.
    pub fn convert<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<ConversionStats, AppError> {
        self.run(reader, writer, Path::new("<output>"))
    }

    // @returns: Stats; write failures are reported against `output`
    fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
        output: &Path,
    ) -> Result<ConversionStats, AppError> {
        let mut session = ConversionSession::new(WordSplitter::with_config(&self.config.splitting));
        let mut writer = SrtWriter::new(writer);
        let mut stats = ConversionStats::default();

        for entry in SrtReader::new(reader) {
            let entry = entry?;
            stats.entries += 1;

            let cues = session.process(&entry)?;
            if cues.is_empty() {
                stats.skipped_entries += 1;
                continue;
            }

            debug!("Entry at line {}: {} cues", entry.line, cues.len());
            for cue in &cues {
                writer.write_cue(cue).map_err(|e| AppError::file(output, e))?;
            }
        }

        stats.cues = writer.cues_written();
        writer.finish().map_err(|e| AppError::file(output, e))?;

        Ok(stats)
    }
}
