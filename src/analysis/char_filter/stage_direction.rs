//! Stage direction char filter.
//!
//! Play scripts interleave dialogue with speaker labels (`TROILUS.`), act and
//! scene headings (`ACT I`), bracketed directions (`[Exit Pandarus.]`) and
//! entrance lines (`Enter Pandarus and Troilus.`). This filter replaces every
//! such line with an empty line so only dialogue reaches the tokenizer.
//!
//! A line is a stage direction when any of these holds:
//!
//! 1. it is wrapped in square brackets,
//! 2. it begins with two or more consecutive uppercase ASCII letters,
//! 3. it begins with the marker word (default `Enter`).
//!
//! Line count is preserved, so line numbers in the output match the input.

use log::debug;
use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{FolioError, Result};

/// Default marker word that introduces an entrance line.
pub const DEFAULT_DIRECTION_MARKER: &str = "Enter";

/// A char filter that blanks out stage-direction lines.
#[derive(Clone, Debug)]
pub struct StageDirectionCharFilter {
    pattern: Regex,
    marker: String,
}

impl StageDirectionCharFilter {
    /// Create a filter using the default `Enter` marker.
    pub fn new() -> Result<Self> {
        Self::with_marker(DEFAULT_DIRECTION_MARKER)
    }

    /// Create a filter with a custom marker word.
    pub fn with_marker(marker: &str) -> Result<Self> {
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(FolioError::invalid_argument(format!(
                "direction marker must be a single non-empty word, got {marker:?}"
            )));
        }

        let pattern = format!(
            r"^(?:\[.*\]|[A-Z]{{2,}}.*|{}\b.*)$",
            regex::escape(marker)
        );
        let pattern = Regex::new(&pattern)
            .map_err(|e| FolioError::analysis(format!("Invalid direction pattern: {e}")))?;

        Ok(StageDirectionCharFilter {
            pattern,
            marker: marker.to_string(),
        })
    }

    /// The marker word for entrance lines.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check whether a single line (without its `\n`) is a stage direction.
    pub fn is_direction(&self, line: &str) -> bool {
        self.pattern.is_match(line.strip_suffix('\r').unwrap_or(line))
    }
}

impl CharFilter for StageDirectionCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut line_start = 0;

        for (i, line) in input.split('\n').enumerate() {
            if i > 0 {
                output.push('\n');
            }

            let line_end = line_start + line.len();
            if !line.is_empty() && self.is_direction(line) {
                let at = output.len();
                transformations.push(Transformation::new(line_start, line_end, at, at));
            } else {
                output.push_str(line);
            }

            // Skip past the '\n' separator.
            line_start = line_end + 1;
        }

        debug!(
            "stage direction filter blanked {} line(s)",
            transformations.len()
        );

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "stage_direction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_label_is_blanked() {
        let filter = StageDirectionCharFilter::new().unwrap();
        assert!(filter.is_direction("TROILUS."));
        assert!(filter.is_direction("ACT 1"));
        assert!(filter.is_direction("SCENE II. Troy. A street."));
    }

    #[test]
    fn test_dialogue_is_kept() {
        let filter = StageDirectionCharFilter::new().unwrap();
        assert!(!filter.is_direction("Sweet Pandarus-"));
        assert!(!filter.is_direction("I cannot fight upon this argument;"));
        assert!(!filter.is_direction(""));
        // A single capital is an ordinary sentence start.
        assert!(!filter.is_direction("O Pandarus! I tell thee, Pandarus"));
    }

    #[test]
    fn test_bracketed_direction_is_blanked() {
        let filter = StageDirectionCharFilter::new().unwrap();
        assert!(filter.is_direction("[Exit Pandarus. An alarum.]"));
        assert!(filter.is_direction("[Alarum.]\r"));
        assert!(!filter.is_direction("[Aside] but not closed"));
    }

    #[test]
    fn test_marker_line_is_blanked() {
        let filter = StageDirectionCharFilter::new().unwrap();
        assert!(filter.is_direction("Enter Pandarus and Troilus."));
        assert!(!filter.is_direction("Entertain no such thought."));

        let custom = StageDirectionCharFilter::with_marker("Exeunt").unwrap();
        assert!(custom.is_direction("Exeunt omnes."));
        assert!(!custom.is_direction("Enter Pandarus."));
    }

    #[test]
    fn test_invalid_marker() {
        assert!(StageDirectionCharFilter::with_marker("").is_err());
        assert!(StageDirectionCharFilter::with_marker("Re enter").is_err());
    }

    #[test]
    fn test_filter_preserves_line_count() {
        let filter = StageDirectionCharFilter::new().unwrap();
        let input = "TROILUS.\nSweet Pandarus-\n\n[Exit Pandarus. An alarum.]\nPeace, you ungracious clamours!";
        let (output, transformations) = filter.filter(input);

        assert_eq!(
            output,
            "\nSweet Pandarus-\n\n\nPeace, you ungracious clamours!"
        );
        assert_eq!(output.split('\n').count(), input.split('\n').count());
        assert_eq!(transformations.len(), 2);
        assert_eq!(transformations[0], Transformation::new(0, 8, 0, 0));
        // "[Exit ...]" starts after "TROILUS.\nSweet Pandarus-\n\n" (26 bytes).
        assert_eq!(transformations[1].original_start, 26);
        assert_eq!(transformations[1].original_end, 53);
        assert_eq!(transformations[1].new_start, 18);
        assert_eq!(transformations[1].new_end, 18);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StageDirectionCharFilter::new().unwrap().name(), "stage_direction");
    }
}
