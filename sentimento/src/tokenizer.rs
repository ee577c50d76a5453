use std::io::BufRead;

use hashbrown::HashSet;

use crate::errors::Result;
use crate::stemmer::stem;

/// Characters that separate tokens.
pub const DELIMITERS: &[char] = &[
    ' ', ',', '"', ':', ';', '.', '\t', '\n', '!', '-', '?', '@', '%', '(', ')', '`', '/', '=',
    '\\', '~', '#', '$', '^', '&', '*', '_', '|', '[', ']', '{', '}', '<', '>', '+',
];

/// Characters removed from the inside of a token.
pub const STRIPPED_CHARS: &[char] = &['\'', '(', ')', '[', ']', '{', '}'];

/// Set of words excluded from documents.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads stop-words, one word per line. Words are lowercased and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut words = HashSet::new();
        for line in rdr.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Checks if the given lowercased token is a stop-word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for StopWords
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Normalizer turning a raw review text into stems.
///
/// # Examples
///
/// ```
/// use sentimento::{StopWords, Tokenizer};
///
/// let tokenizer = Tokenizer::new(["the", "is"].into_iter().collect::<StopWords>());
/// assert_eq!(vec!["batteri", "great"], tokenizer.tokenize("The battery is GREAT!"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    /// Creates a new tokenizer.
    ///
    /// # Arguments
    ///
    /// * `stop_words` - Words dropped from every document.
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Splits a text into lowercased tokens, drops stop-words, and removes quotes and brackets.
    ///
    /// Stop-words are matched before quotes are removed.
    pub fn normalize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(DELIMITERS)
            .filter(|token| !token.trim().is_empty())
            .map(str::to_lowercase)
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| token.replace(STRIPPED_CHARS, ""))
            .filter(|token| !token.trim().is_empty())
    }

    /// Normalizes a text and stems each token.
    ///
    /// # Arguments
    ///
    /// * `text` - A raw text.
    ///
    /// # Returns
    ///
    /// Stems in the order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text).map(|token| stem(&token)).collect()
    }
}
