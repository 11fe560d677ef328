//! Noun lemmatizer.
//!
//! Reduces plural nouns to their singular base form using the detachment
//! rules of WordNet's morphological processor for nouns, plus an exception
//! table for irregular plurals. Without a lexicon to validate candidates the
//! rules are ordered from most to least specific, and words whose `-s` is not
//! a plural marker (`glass`, `bonus`, `analysis`, `news`) are left alone.
//!
//! Verbs, adjectives and adverbs are not touched: `running` stays `running`.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::lemma::Lemmatizer;
//! use folio::analysis::token_filter::lemma::noun::NounLemmatizer;
//!
//! let lemmatizer = NounLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("companies"), "company");
//! assert_eq!(lemmatizer.lemmatize("churches"), "church");
//! assert_eq!(lemmatizer.lemmatize("women"), "woman");
//! assert_eq!(lemmatizer.lemmatize("business"), "business");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::analysis::token_filter::lemma::Lemmatizer;

/// Irregular plural → singular.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("gentlemen", "gentleman"),
    ("noblemen", "nobleman"),
    ("kinsmen", "kinsman"),
    ("countrymen", "countryman"),
    ("horsemen", "horseman"),
    ("businessmen", "businessman"),
    ("salesmen", "salesman"),
    ("chairmen", "chairman"),
    ("statesmen", "statesman"),
    ("workmen", "workman"),
    ("craftsmen", "craftsman"),
    ("fishermen", "fisherman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("dice", "die"),
    ("oxen", "ox"),
    ("brethren", "brother"),
    ("kine", "cow"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("media", "medium"),
    ("indices", "index"),
    ("appendices", "appendix"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("alumni", "alumnus"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("stimuli", "stimulus"),
    ("quizzes", "quiz"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("torpedoes", "torpedo"),
    ("embargoes", "embargo"),
    ("volcanoes", "volcano"),
    ("wolves", "wolf"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("selves", "self"),
    ("halves", "half"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("elves", "elf"),
    ("sheaves", "sheaf"),
];

/// Words ending in `s` that are already in base form.
const INVARIANT: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "economics", "politics",
    "analytics", "ethics", "always", "perhaps", "towards", "afterwards", "sometimes", "besides",
    "thus", "whereas", "various", "yes", "plus", "lens", "bias", "gas", "canvas", "atlas",
    "alias", "chaos", "pathos", "ethos", "cosmos", "kudos", "achilles", "diomedes", "hercules",
    "ulysses", "socrates", "aeneas", "thersites", "menelaus", "troilus", "pandarus",
];

/// Singulars ending in `ie` whose plural would otherwise take the `ies → y` rule.
const IE_SINGULARS: &[&str] = &[
    "movie", "cookie", "calorie", "zombie", "rookie", "brownie", "pie", "tie", "lie", "die",
    "hippie", "prairie", "genie", "auntie", "goalie", "selfie", "sortie", "eyrie", "lingerie",
];

/// Singulars ending in `che` whose plural would otherwise take the `ches → ch` rule.
const CHE_SINGULARS: &[&str] = &[
    "ache", "headache", "toothache", "backache", "earache", "heartache", "niche", "cache",
    "cliche", "moustache", "mustache", "avalanche", "psyche", "creche", "quiche", "panache",
];

/// Singulars ending in `use` that follow a consonant (`excuse`, `abuse`).
const USE_SINGULARS: &[&str] = &[
    "use", "excuse", "abuse", "fuse", "muse", "refuse", "ruse", "accuse", "misuse", "recluse",
];

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

static INVARIANT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INVARIANT.iter().copied().collect());

static IE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IE_SINGULARS.iter().copied().collect());

static CHE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CHE_SINGULARS.iter().copied().collect());

static USE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| USE_SINGULARS.iter().copied().collect());

/// Rule-based noun lemmatizer.
#[derive(Debug, Clone)]
pub struct NounLemmatizer {
    min_length: usize,
}

impl NounLemmatizer {
    /// Create a noun lemmatizer. Words of three characters or fewer are
    /// returned unchanged (`gas`, `bus`, `its`).
    pub fn new() -> Self {
        NounLemmatizer { min_length: 4 }
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// `word` with its last `n` bytes replaced by `suffix`.
    fn replace_tail(word: &str, n: usize, suffix: &str) -> String {
        format!("{}{}", &word[..word.len() - n], suffix)
    }

    fn strip_plural(&self, word: &str) -> Option<String> {
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return None;
        }

        if let Some(stem) = word.strip_suffix("ies") {
            let singular = format!("{stem}ie");
            if IE_SET.contains(singular.as_str()) || stem.len() < 2 {
                return Some(singular);
            }
            return Some(format!("{stem}y"));
        }

        if word.ends_with("sses") || word.ends_with("shes") || word.ends_with("xes") {
            return Some(Self::replace_tail(word, 2, ""));
        }

        if word.ends_with("ches") {
            let singular = Self::replace_tail(word, 1, "");
            if CHE_SET.contains(singular.as_str()) {
                return Some(singular);
            }
            return Some(Self::replace_tail(word, 2, ""));
        }

        if let Some(stem) = word.strip_suffix("uses") {
            // "bonuses" → "bonus" but "houses" → "house".
            let consonant_before = stem.chars().last().is_some_and(|c| !Self::is_vowel(c));
            let singular = Self::replace_tail(word, 1, "");
            if consonant_before && !USE_SET.contains(singular.as_str()) {
                return Some(Self::replace_tail(word, 2, ""));
            }
            return Some(singular);
        }

        word.strip_suffix('s').map(str::to_string)
    }
}

impl Default for NounLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(singular) = IRREGULAR.get(word) {
            return (*singular).to_string();
        }

        if word.chars().count() < self.min_length || INVARIANT_SET.contains(word) {
            return word.to_string();
        }

        self.strip_plural(word).unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "noun"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("customers"), "customer");
        assert_eq!(lemmatizer.lemmatize("articles"), "article");
        assert_eq!(lemmatizer.lemmatize("houses"), "house");
        assert_eq!(lemmatizer.lemmatize("cases"), "case");
        assert_eq!(lemmatizer.lemmatize("archives"), "archive");
    }

    #[test]
    fn test_suffix_rules() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("strategies"), "strategy");
        assert_eq!(lemmatizer.lemmatize("businesses"), "business");
        assert_eq!(lemmatizer.lemmatize("wishes"), "wish");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("approaches"), "approach");
        assert_eq!(lemmatizer.lemmatize("headaches"), "headache");
        assert_eq!(lemmatizer.lemmatize("bonuses"), "bonus");
        assert_eq!(lemmatizer.lemmatize("causes"), "cause");
        assert_eq!(lemmatizer.lemmatize("excuses"), "excuse");
        assert_eq!(lemmatizer.lemmatize("movies"), "movie");
        assert_eq!(lemmatizer.lemmatize("ties"), "tie");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("men"), "man");
        assert_eq!(lemmatizer.lemmatize("wolves"), "wolf");
        assert_eq!(lemmatizer.lemmatize("criteria"), "criterion");
    }

    #[test]
    fn test_base_forms_unchanged() {
        let lemmatizer = NounLemmatizer::new();

        for word in [
            "business", "glass", "bonus", "analysis", "news", "achilles", "troilus", "gas",
            "running", "lord", "data",
        ] {
            assert_eq!(lemmatizer.lemmatize(word), word, "{word} should be unchanged");
        }
    }

    #[test]
    fn test_lemmas_are_fixed_points() {
        let lemmatizer = NounLemmatizer::new();

        for word in [
            "companies", "glasses", "bonuses", "houses", "women", "media", "churches",
            "headaches", "alumni", "dice", "knives", "excuses",
        ] {
            let lemma = lemmatizer.lemmatize(word);
            assert_eq!(lemmatizer.lemmatize(&lemma), lemma, "{word} → {lemma} is not stable");
        }
    }
}
