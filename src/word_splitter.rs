/*!
 * Per-word splitting of subtitle entries.
 *
 * An entry's time span is divided evenly between its words using
 * truncating millisecond division. The remainder is dropped, so the last
 * cue may end up to `word_count - 1` milliseconds before the entry did.
 */

use log::{trace, warn};

use crate::app_config::{EmptyEntryPolicy, SplitConfig};
use crate::errors::SubtitleError;
use crate::subtitle_processor::{SubtitleEntry, WordCue};

/// Splits entries into single-word cues
#[derive(Debug, Clone, Default)]
pub struct WordSplitter {
    empty_entries: EmptyEntryPolicy,
}

impl WordSplitter {
    pub fn new(empty_entries: EmptyEntryPolicy) -> Self {
        Self { empty_entries }
    }

    pub fn with_config(config: &SplitConfig) -> Self {
        Self::new(config.empty_entries)
    }

    /// Split one entry, numbering cues from `next_index`
    ///
    /// Returns the cues in word order and the index to use for the next
    /// entry. An entry without words yields no cues under
    /// `EmptyEntryPolicy::Skip` and leaves the index untouched.
    pub fn split(
        &self,
        entry: &SubtitleEntry,
        next_index: usize,
    ) -> Result<(Vec<WordCue>, usize), SubtitleError> {
        let words: Vec<&str> = entry.words().collect();
        if words.is_empty() {
            return match self.empty_entries {
                EmptyEntryPolicy::Skip => {
                    warn!("Skipping entry at line {} without words", entry.line);
                    Ok((Vec::new(), next_index))
                }
                EmptyEntryPolicy::Fail => Err(SubtitleError::EmptyEntry { line: entry.line }),
            };
        }

        let duration = entry.duration().ok_or(SubtitleError::InvertedTimeRange {
            line: entry.line,
            start: entry.start,
            end: entry.end,
        })?;
        let time_per_word = duration / words.len() as u64;
        trace!(
            "Entry at line {}: {} words, {} ms each",
            entry.line,
            words.len(),
            time_per_word.to_milliseconds()
        );

        let mut current = entry.start;
        let mut index = next_index;
        let cues: Vec<WordCue> = words
            .into_iter()
            .map(|word| {
                let next = current + time_per_word;
                let cue = WordCue {
                    index,
                    start: current,
                    end: next,
                    word: word.to_string(),
                };
                current = next;
                index += 1;
                cue
            })
            .collect();

        Ok((cues, index))
    }
}

/// Splitter plus the running output index for one file
#[derive(Debug)]
pub struct ConversionSession {
    splitter: WordSplitter,
    next_index: usize,
}

impl ConversionSession {
    /// Start a session whose first cue is numbered 1
    pub fn new(splitter: WordSplitter) -> Self {
        Self {
            splitter,
            next_index: 1,
        }
    }

    /// Split an entry and advance the running index
    pub fn process(&mut self, entry: &SubtitleEntry) -> Result<Vec<WordCue>, SubtitleError> {
        let (cues, next_index) = self.splitter.split(entry, self.next_index)?;
        self.next_index = next_index;
        Ok(cues)
    }

    /// Number of cues produced so far
    pub fn cues_produced(&self) -> usize {
        self.next_index - 1
    }
}
