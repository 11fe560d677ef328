//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text before it is passed to the tokenizer.
//! Each filter reports the edits it made as [`Transformation`]s so the
//! pipeline can map token offsets back to the original text.
//!
//! # Available Filters
//!
//! - [`stage_direction::StageDirectionCharFilter`] - Blanks out play-script
//!   speaker labels and stage directions, line by line
//!
//! # Examples
//!
//! ```
//! use folio::analysis::char_filter::CharFilter;
//! use folio::analysis::char_filter::stage_direction::StageDirectionCharFilter;
//!
//! let filter = StageDirectionCharFilter::new().unwrap();
//! let (text, _) = filter.filter("PANDARUS.\nWhat, art thou gone?");
//! assert_eq!(text, "\nWhat, art thou gone?");
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the transformations that produced it,
    /// ordered by position.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod stage_direction;
