//! Command implementations for the folio CLI.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::stage_direction::StageDirectionCharFilter;
use crate::analysis::token_filter::stop::EARLY_MODERN_STOP_WORDS;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::cleaner::TextCleaner;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{CleanConfig, FolioConfig};
use crate::corpus::Corpus;
use crate::error::{FolioError, Result};
use crate::fetch::{DocumentFetcher, HttpFetcher, fetch_batch};
use crate::frequency::FrequencyTable;
use crate::inspect::{Histogram, LINE_LENGTH_EDGES, PatternSearch, line_token_counts};

/// Number of characters shown when previewing a document.
const PREVIEW_CHARS: usize = 70;

/// Execute a CLI command.
pub fn execute_command(args: FolioArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Clean(clean_args) => {
            let result = clean_file(clean_args, &config)?;
            output_result("Cleaned text", &result, &args)
        }
        Command::Lines(lines_args) => {
            let result = count_lines(lines_args, &config)?;
            output_result("Words per line", &result, &args)
        }
        Command::Sentences(sentences_args) => {
            let result = split_sentences(sentences_args)?;
            output_result("Sentences", &result, &args)
        }
        Command::Find(find_args) => {
            let result = find_pattern(find_args)?;
            output_result("Pattern search", &result, &args)
        }
        Command::Corpus(corpus_args) => {
            let mut fetch_config = config.fetch.clone();
            if let Some(timeout) = corpus_args.timeout {
                fetch_config.timeout_secs = timeout;
            }
            let fetcher = HttpFetcher::new(&fetch_config)?;
            let result = build_corpus(corpus_args, &config, &fetcher)?;
            output_result("Corpus", &result, &args)
        }
    }
}

/// Load the configuration file named on the command line, or the defaults.
pub fn load_config(args: &FolioArgs) -> Result<FolioConfig> {
    match &args.config {
        Some(path) => FolioConfig::from_file(path),
        None => Ok(FolioConfig::default()),
    }
}

/// Apply command line cleaning options on top of a configuration.
pub fn apply_clean_options(config: &CleanConfig, options: &CleanOptions) -> CleanConfig {
    let mut config = config.clone();
    if options.strip_directions {
        config.strip_stage_directions = true;
    }
    if options.early_modern {
        config = config.with_extra_stopwords(EARLY_MODERN_STOP_WORDS);
    }
    config = config.with_extra_stopwords(&options.stopwords);
    if let Some(min_length) = options.min_length {
        config.min_token_length = min_length;
    }
    if options.no_lemmatize {
        config.lemmatize = false;
    }
    config
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        FolioError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })
}

fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    flat.trim().chars().take(PREVIEW_CHARS).collect()
}

/// Clean a file and rank its tokens.
pub fn clean_file(args: &CleanArgs, config: &FolioConfig) -> Result<CleanResult> {
    let text = read_text(&args.file)?;
    let cleaner = TextCleaner::new(apply_clean_options(&config.clean, &args.options))?;
    let tokens = cleaner.clean(&text)?;
    let table = FrequencyTable::from_tokens(&tokens);

    info!(
        "{}: {} token(s) after cleaning",
        args.file.display(),
        tokens.len()
    );

    Ok(CleanResult {
        file: args.file.display().to_string(),
        total_tokens: tokens.len(),
        distinct_tokens: table.len(),
        top: table.most_common(args.top),
        tokens: args.tokens.then_some(tokens),
    })
}

/// Count `\w+` words on every line and bin the counts.
pub fn count_lines(args: &LinesArgs, config: &FolioConfig) -> Result<LinesResult> {
    let mut text = read_text(&args.file)?;
    if args.strip_directions {
        let filter = StageDirectionCharFilter::with_marker(&config.clean.direction_marker)?;
        text = filter.filter(&text).0;
    }

    let counts = line_token_counts(&text, &RegexTokenizer::new()?)?;
    let edges = args.bins.as_deref().unwrap_or(LINE_LENGTH_EDGES);
    let histogram = Histogram::from_values(&counts, edges)?;

    Ok(LinesResult {
        file: args.file.display().to_string(),
        lines: counts.len(),
        empty_lines: counts.iter().filter(|&&c| c == 0).count(),
        max_tokens: counts.iter().copied().max().unwrap_or(0),
        histogram: histogram.bins().collect(),
    })
}

/// Split a file into sentences, optionally tokenizing one of them.
pub fn split_sentences(args: &SentencesArgs) -> Result<SentencesResult> {
    let text = read_text(&args.file)?;
    let sentences = SentenceTokenizer::new().split_sentences(&text);
    let word_tokenizer = WordTokenizer::new();

    let distinct_words: HashSet<String> = word_tokenizer.tokenize(&text)?.map(|t| t.text).collect();

    let sentence = match args.index {
        Some(index) => {
            let text = sentences.get(index).ok_or_else(|| {
                FolioError::invalid_argument(format!(
                    "sentence index {index} out of range (found {} sentences)",
                    sentences.len()
                ))
            })?;
            Some(SentenceDetail {
                index,
                text: text.clone(),
                tokens: word_tokenizer.tokenize(text)?.map(|t| t.text).collect(),
            })
        }
        None => None,
    };

    Ok(SentencesResult {
        file: args.file.display().to_string(),
        sentences: sentences.len(),
        distinct_words: distinct_words.len(),
        sentence,
    })
}

/// Search a file with a regular expression.
pub fn find_pattern(args: &FindArgs) -> Result<FindResult> {
    let text = read_text(&args.file)?;
    let search = PatternSearch::new(&args.pattern)?;

    let (matches, first) = if args.first {
        (Vec::new(), search.find_first(&text))
    } else {
        let matches = search.find_all(&text).into_iter().map(String::from).collect();
        (matches, None)
    };

    Ok(FindResult {
        pattern: args.pattern.clone(),
        matches,
        first,
    })
}

/// Fetch the URLs, read the files, clean everything and build a corpus.
pub fn build_corpus(
    args: &CorpusArgs,
    config: &FolioConfig,
    fetcher: &dyn DocumentFetcher,
) -> Result<CorpusResult> {
    if args.urls.is_empty() && args.files.is_empty() {
        return Err(FolioError::invalid_argument(
            "give at least one --url or --file",
        ));
    }

    let report = fetch_batch(fetcher, &args.urls);

    let mut sources = Vec::with_capacity(report.retrieved() + args.files.len());
    let mut texts = Vec::with_capacity(sources.capacity());
    for document in &report.documents {
        sources.push(document.url.clone());
        texts.push(document.paragraph_text());
    }
    for file in &args.files {
        sources.push(file.display().to_string());
        texts.push(read_text(file)?);
    }

    let cleaner = TextCleaner::new(apply_clean_options(&config.clean, &args.options))?;
    let cleaned = cleaner.clean_all(&texts)?;
    let corpus = Corpus::from_documents(&cleaned);
    debug!(
        "corpus of {} document(s), {} distinct token(s)",
        corpus.len(),
        corpus.dictionary().len()
    );

    let documents = sources
        .into_iter()
        .zip(&texts)
        .zip(corpus.documents())
        .map(|((source, text), bow)| DocumentSummary {
            source,
            preview: preview(text),
            tokens: bow.total(),
        })
        .collect();

    let lookup = args.lookup.as_ref().map(|token| {
        let token = token.to_lowercase();
        let id = corpus.dictionary().token_to_id(&token);
        LookupResult {
            document_frequency: id.map_or(0, |id| corpus.dictionary().document_frequency(id)),
            token,
            id,
        }
    });

    let document_top = match args.doc {
        Some(index) => {
            let top = corpus.document_top_terms(index, args.top).ok_or_else(|| {
                FolioError::invalid_argument(format!(
                    "document index {index} out of range (corpus has {} documents)",
                    corpus.len()
                ))
            })?;
            Some(DocumentTop { index, top })
        }
        None => None,
    };

    Ok(CorpusResult {
        requested: args.urls.len() + args.files.len(),
        retrieved: report.retrieved() + args.files.len(),
        failures: report.failures,
        documents,
        vocabulary_size: corpus.dictionary().len(),
        lookup,
        document_top,
        top_terms: corpus.top_terms(args.top),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn temp_text(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_apply_clean_options() {
        let options = CleanOptions {
            strip_directions: true,
            early_modern: true,
            stopwords: vec!["Lord".to_string()],
            min_length: Some(3),
            no_lemmatize: true,
        };
        let config = apply_clean_options(&CleanConfig::default(), &options);

        assert!(config.strip_stage_directions);
        assert!(config.extra_stopwords.contains("thou"));
        assert!(config.extra_stopwords.contains("lord"));
        assert_eq!(config.min_token_length, 3);
        assert!(!config.lemmatize);
    }

    #[test]
    fn test_clean_file() {
        let file = temp_text("TROILUS.\nThou art my lord, my lord of Troy.\nEnter HECTOR");
        let args = CleanArgs {
            file: file.path().to_path_buf(),
            top: 2,
            tokens: true,
            options: CleanOptions {
                strip_directions: true,
                early_modern: true,
                ..Default::default()
            },
        };

        let result = clean_file(&args, &FolioConfig::default()).unwrap();
        assert_eq!(result.total_tokens, 3);
        assert_eq!(result.distinct_tokens, 2);
        assert_eq!(result.top, vec![("lord".to_string(), 2), ("troy".to_string(), 1)]);
        assert_eq!(
            result.tokens,
            Some(vec!["lord".to_string(), "lord".to_string(), "troy".to_string()])
        );
    }

    #[test]
    fn test_clean_missing_file() {
        let args = CleanArgs {
            file: PathBuf::from("/nonexistent/troilus.txt"),
            top: 5,
            tokens: false,
            options: CleanOptions::default(),
        };
        assert!(matches!(
            clean_file(&args, &FolioConfig::default()),
            Err(FolioError::Io(_))
        ));
    }

    #[test]
    fn test_count_lines() {
        let file = temp_text("ACT 1\n\nCall here my varlet; I'll unarm again.\n[Exit.]");
        let args = LinesArgs {
            file: file.path().to_path_buf(),
            strip_directions: true,
            bins: Some(vec![0, 1, 5, 10]),
        };

        let result = count_lines(&args, &FolioConfig::default()).unwrap();
        assert_eq!(result.lines, 4);
        assert_eq!(result.empty_lines, 3);
        assert_eq!(result.max_tokens, 8);
        assert_eq!(result.histogram, vec![(0, 1, 3), (1, 5, 0), (5, 10, 1)]);
    }

    #[test]
    fn test_split_sentences() {
        let file = temp_text("Is Hector armed? He is. Troy stands!");
        let args = SentencesArgs {
            file: file.path().to_path_buf(),
            index: Some(1),
        };

        let result = split_sentences(&args).unwrap();
        assert_eq!(result.sentences, 3);
        let detail = result.sentence.unwrap();
        assert_eq!(detail.text, "He is.");
        assert_eq!(detail.tokens, vec!["He", "is"]);

        let args = SentencesArgs {
            file: file.path().to_path_buf(),
            index: Some(7),
        };
        assert!(split_sentences(&args).is_err());
    }

    #[test]
    fn test_find_pattern() {
        let file = temp_text("Is Hector armed? Hector is.");
        let mut args = FindArgs {
            file: file.path().to_path_buf(),
            pattern: "Hector".to_string(),
            first: false,
        };

        assert_eq!(find_pattern(&args).unwrap().matches.len(), 2);

        args.first = true;
        let first = find_pattern(&args).unwrap().first.unwrap();
        assert_eq!((first.start, first.end), (3, 9));
    }

    #[test]
    fn test_build_corpus_skips_failures() {
        let fetcher = StaticFetcher::new()
            .with_page(
                "https://example.org/revenue",
                "<p>Revenue grows when customers return.</p><p>Customers matter.</p>",
            )
            .with_page("https://example.org/cost", "<p>Acquisition costs fell.</p>");
        let notes = temp_text("Customers and costs.");

        let args = CorpusArgs {
            urls: vec![
                "https://example.org/revenue".to_string(),
                "https://example.org/down".to_string(),
                "https://example.org/cost".to_string(),
            ],
            files: vec![notes.path().to_path_buf()],
            lookup: Some("Customer".to_string()),
            doc: Some(0),
            top: 2,
            timeout: None,
            options: CleanOptions::default(),
        };

        let result = build_corpus(&args, &FolioConfig::default(), &fetcher).unwrap();
        assert_eq!(result.requested, 4);
        assert_eq!(result.retrieved, 3);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.documents.len(), 3);
        assert_eq!(
            result.documents[0].preview,
            "Revenue grows when customers return. Customers matter."
        );

        let lookup = result.lookup.unwrap();
        assert_eq!(lookup.id, Some(2));
        assert_eq!(lookup.document_frequency, 2);

        assert_eq!(
            result.document_top.unwrap().top,
            vec![("customer".to_string(), 2), ("revenue".to_string(), 1)]
        );
        assert_eq!(
            result.top_terms,
            vec![("customer".to_string(), 3), ("cost".to_string(), 2)]
        );
    }

    #[test]
    fn test_build_corpus_needs_input() {
        let args = CorpusArgs {
            urls: vec![],
            files: vec![],
            lookup: None,
            doc: None,
            top: 10,
            timeout: None,
            options: CleanOptions::default(),
        };
        assert!(build_corpus(&args, &FolioConfig::default(), &StaticFetcher::new()).is_err());
    }
}
