//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{FolioArgs, OutputFormat};
use crate::error::Result;
use crate::fetch::FetchFailure;
use crate::inspect::MatchSpan;

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Result of `clean`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanResult {
    pub file: String,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub top: Vec<(String, u64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

/// Result of `lines`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinesResult {
    pub file: String,
    pub lines: usize,
    pub empty_lines: usize,
    pub max_tokens: usize,
    /// `(low, high, count)` per bin.
    pub histogram: Vec<(usize, usize, u64)>,
}

/// Result of `sentences`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentencesResult {
    pub file: String,
    pub sentences: usize,
    pub distinct_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<SentenceDetail>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceDetail {
    pub index: usize,
    pub text: String,
    pub tokens: Vec<String>,
}

/// Result of `find`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindResult {
    pub pattern: String,
    pub matches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<MatchSpan>,
}

/// Result of `corpus`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusResult {
    pub requested: usize,
    pub retrieved: usize,
    pub failures: Vec<FetchFailure>,
    pub documents: Vec<DocumentSummary>,
    pub vocabulary_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_top: Option<DocumentTop>,
    pub top_terms: Vec<(String, u64)>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub source: String,
    /// First characters of the extracted text.
    pub preview: String,
    pub tokens: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub token: String,
    pub id: Option<u32>,
    pub document_frequency: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentTop {
    pub index: usize,
    pub top: Vec<(String, u64)>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &FolioArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &FolioArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FolioArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn print_ranking(title: &str, ranking: &[(String, u64)]) {
    println!("{title}");
    println!("{}", "─".repeat(title.chars().count()));
    let width = ranking
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);
    for (i, (token, count)) in ranking.iter().enumerate() {
        println!("{:>3}. {token:<width$}  {count}", i + 1);
    }
}

impl HumanOutput for CleanResult {
    fn print_human(&self) {
        println!("File: {}", self.file);
        println!(
            "Tokens: {} ({} distinct)",
            self.total_tokens, self.distinct_tokens
        );
        println!();
        print_ranking("Most common tokens:", &self.top);
        if let Some(tokens) = &self.tokens {
            println!();
            println!("{}", tokens.join(" "));
        }
    }
}

impl HumanOutput for LinesResult {
    fn print_human(&self) {
        println!("File: {}", self.file);
        println!(
            "Lines: {} ({} without words), longest: {} words",
            self.lines, self.empty_lines, self.max_tokens
        );
        println!();

        let peak = self
            .histogram
            .iter()
            .map(|&(_, _, count)| count)
            .max()
            .unwrap_or(0)
            .max(1);
        for &(low, high, count) in &self.histogram {
            let bar = "█".repeat(((count * 40).div_ceil(peak)) as usize);
            println!("{low:>4}-{high:<4} {count:>6} {bar}");
        }
    }
}

impl HumanOutput for SentencesResult {
    fn print_human(&self) {
        println!("File: {}", self.file);
        println!("Sentences: {}", self.sentences);
        println!("Distinct words: {}", self.distinct_words);
        if let Some(detail) = &self.sentence {
            println!();
            println!("Sentence {}: {}", detail.index, detail.text);
            println!("Tokens ({}): {:?}", detail.tokens.len(), detail.tokens);
        }
    }
}

impl HumanOutput for FindResult {
    fn print_human(&self) {
        match &self.first {
            Some(span) => println!("{} {} {:?}", span.start, span.end, span.text),
            None if self.matches.is_empty() => println!("No match for {:?}", self.pattern),
            None => {
                println!("{} match(es) for {:?}:", self.matches.len(), self.pattern);
                println!("{:?}", self.matches);
            }
        }
    }
}

impl HumanOutput for CorpusResult {
    fn print_human(&self) {
        println!(
            "Retrieved {} of {} documents",
            self.retrieved, self.requested
        );
        for failure in &self.failures {
            println!("  skipped {}: {}", failure.url, failure.reason);
        }
        println!();

        for (i, document) in self.documents.iter().enumerate() {
            println!(
                "Document {i}: {} ({} tokens)\n  {}",
                document.source, document.tokens, document.preview
            );
        }
        println!();
        println!("Vocabulary size: {}", self.vocabulary_size);

        if let Some(lookup) = &self.lookup {
            match lookup.id {
                Some(id) => println!(
                    "Id of {:?}: {id} (in {} document(s))",
                    lookup.token, lookup.document_frequency
                ),
                None => println!("{:?} is not in the vocabulary", lookup.token),
            }
        }

        if let Some(document_top) = &self.document_top {
            println!();
            print_ranking(
                &format!("Most common tokens in document {}:", document_top.index),
                &document_top.top,
            );
        }

        println!();
        print_ranking("Most common tokens in the corpus:", &self.top_terms);
    }
}
