use std::borrow::Cow;
use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::timecode::Timecode;

// @module: SRT reading and writing

// @const: Entry marker (a line of digits only)
static INDEX_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

const TIME_RANGE_ARROW: &str = "-->";

// @struct: Single subtitle entry read from the input
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    // @field: 1-based line of the index marker, for diagnostics
    pub line: usize,

    // @field: Start time
    pub start: Timecode,

    // @field: End time
    pub end: Timecode,

    // @field: Text line (space-delimited words)
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(line: usize, start: Timecode, end: Timecode, text: impl Into<String>) -> Self {
        SubtitleEntry {
            line,
            start,
            end,
            text: text.into(),
        }
    }

    /// Words of the text line, split on ASCII whitespace only
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_ascii_whitespace()
    }

    /// `end - start`, or `None` when the entry ends before it starts
    pub fn duration(&self) -> Option<Timecode> {
        self.end.checked_sub(&self.start)
    }
}

// @struct: Single-word output cue
#[derive(Debug, Clone, PartialEq)]
pub struct WordCue {
    // @field: Output sequence number, 1-based across the whole file
    pub index: usize,

    pub start: Timecode,

    pub end: Timecode,

    pub word: String,
}

impl fmt::Display for WordCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} {} {}", self.start, TIME_RANGE_ARROW, self.end)?;
        writeln!(f, "{}", self.word)?;
        writeln!(f)
    }
}

/// Lazy reader of subtitle entries from a line-based SRT stream
///
/// Only a line made of digits starts an entry; every other line outside
/// an entry is skipped. Lines are read as bytes, and invalid UTF-8 is
/// replaced with U+FFFD instead of failing. The iterator stops after the
/// first error.
pub struct SrtReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> SrtReader<R> {
    /// Create a reader over a buffered stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    // @returns: Next line without its CR / leading BOM, None at end of input
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
        self.line_number += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        if self.line_number == 1 {
            if let Some(rest) = bytes.strip_prefix(b"\xef\xbb\xbf") {
                bytes = rest;
            }
        }

        let line = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = line {
            trace!("Replaced invalid UTF-8 at line {}", self.line_number);
        }
        Some(Ok(line.into_owned()))
    }

    // @reads: Time-range and text lines following an index marker
    fn read_entry(&mut self, marker_line: usize) -> Result<SubtitleEntry, SubtitleError> {
        let range_line_number = self.line_number + 1;
        let range_line = match self.next_line() {
            Some(line) => line?,
            None => {
                return Err(SubtitleError::MalformedTimeRange {
                    line: range_line_number,
                    reason: "unexpected end of input".to_string(),
                });
            }
        };

        let (start, end) = parse_time_range(&range_line, range_line_number)?;

        // A missing text line reads as an entry without words
        let text = match self.next_line() {
            Some(line) => line?,
            None => String::new(),
        };

        Ok(SubtitleEntry::new(marker_line, start, end, text))
    }
}

impl<R: BufRead> Iterator for SrtReader<R> {
    type Item = Result<SubtitleEntry, SubtitleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.next_line() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                Some(Ok(line)) => line,
            };

            if INDEX_LINE_REGEX.is_match(&line) {
                let result = self.read_entry(self.line_number);
                if result.is_err() {
                    self.finished = true;
                }
                return Some(result);
            }

            trace!("Skipping line {}: {:?}", self.line_number, line);
        }
    }
}

/// Parse a `START --> END` line into its two timecodes
fn parse_time_range(line: &str, line_number: usize) -> Result<(Timecode, Timecode), SubtitleError> {
    let mut tokens = line.split_whitespace();
    let (Some(start), Some(arrow), Some(end)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(SubtitleError::MalformedTimeRange {
            line: line_number,
            reason: format!("expected 'START --> END', found {:?}", line),
        });
    };

    if arrow != TIME_RANGE_ARROW {
        warn!("Unexpected separator {:?} in time range at line {}", arrow, line_number);
    }

    let trailing: Vec<&str> = tokens.collect();
    if !trailing.is_empty() {
        debug!("Ignoring trailing tokens at line {}: {}", line_number, trailing.join(" "));
    }

    Ok((Timecode::parse(start)?, Timecode::parse(end)?))
}

/// Parse SRT content held in memory into subtitle entries
pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    SrtReader::new(content.as_bytes()).collect()
}

/// Sequential writer of word cues
pub struct SrtWriter<W: Write> {
    writer: W,
    cues_written: usize,
}

impl<W: Write> SrtWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cues_written: 0,
        }
    }

    /// Append one 4-line cue block
    pub fn write_cue(&mut self, cue: &WordCue) -> io::Result<()> {
        write!(self.writer, "{}", cue)?;
        self.cues_written += 1;
        Ok(())
    }

    pub fn cues_written(&self) -> usize {
        self.cues_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
