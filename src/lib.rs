/*!
 * # wordcue - one subtitle cue per word
 *
 * A Rust library that rewrites SubRip (SRT) subtitles so that every word
 * of a dialogue line becomes its own cue, with the original time span
 * divided evenly between the words.
 *
 * ## Features
 *
 * - Lazy, line-based SRT reading
 * - Integer millisecond timing (truncating, remainder dropped)
 * - Sequential renumbering of the generated cues across the whole file
 * - Configurable handling of entries without words
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: `HH:MM:SS,mmm` parsing, formatting and arithmetic
 * - `subtitle_processor`: SRT entry reader and cue writer
 * - `word_splitter`: per-word timing and the running cue index
 * - `app_controller`: conversion driver over files or streams
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod timecode;
pub mod word_splitter;

// Re-export main types for easier usage
pub use app_config::{Config, EmptyEntryPolicy};
pub use app_controller::{ConversionStats, Controller};
pub use errors::{AppError, SubtitleError};
pub use subtitle_processor::{SrtReader, SrtWriter, SubtitleEntry, WordCue};
pub use timecode::Timecode;
pub use word_splitter::{ConversionSession, WordSplitter};
