use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;
use tracing::warn;

/// How free-text search matches a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Regular expression, case-insensitive.
    Regex,
    /// Fuzzy match with a score threshold.
    Fuzzy,
}

impl SearchMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "substring" => Some(SearchMode::Substring),
            "regex" => Some(SearchMode::Regex),
            "fuzzy" => Some(SearchMode::Fuzzy),
            _ => None,
        }
    }
}

const DEFAULT_FUZZY_THRESHOLD: i64 = 0;

/// A compiled text matcher for one search pattern.
///
/// Built once per derivation so the pattern is lowered/compiled a single
/// time rather than per cell. An invalid regex logs a warning and matches
/// nothing; it is user input, not an error condition.
pub struct TextMatcher {
    mode: SearchMode,
    pattern: String,
    lowered: String,
    regex: Option<Regex>,
    fuzzy: SkimMatcherV2,
    fuzzy_threshold: i64,
}

impl TextMatcher {
    pub fn new(mode: SearchMode, pattern: &str) -> Self {
        let regex = match mode {
            SearchMode::Regex if !pattern.is_empty() => {
                match Regex::new(&format!("(?i){}", pattern)) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!(target: "search", "Invalid regex pattern: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        Self {
            mode,
            pattern: pattern.to_string(),
            lowered: pattern.to_lowercase(),
            regex,
            fuzzy: SkimMatcherV2::default(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    pub fn substring(pattern: &str) -> Self {
        Self::new(SearchMode::Substring, pattern)
    }

    pub fn with_fuzzy_threshold(mut self, threshold: i64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// An empty pattern is "no search", it constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        match self.mode {
            SearchMode::Substring => value.to_lowercase().contains(&self.lowered),
            SearchMode::Regex => self
                .regex
                .as_ref()
                .map(|re| re.is_match(value))
                .unwrap_or(false),
            SearchMode::Fuzzy => self
                .fuzzy
                .fuzzy_match(value, &self.pattern)
                .map(|score| score > self.fuzzy_threshold)
                .unwrap_or(false),
        }
    }
}

impl Clone for TextMatcher {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            pattern: self.pattern.clone(),
            lowered: self.lowered.clone(),
            regex: self.regex.clone(),
            // SkimMatcherV2 is stateless config, a fresh one is equivalent
            fuzzy: SkimMatcherV2::default(),
            fuzzy_threshold: self.fuzzy_threshold,
        }
    }
}
