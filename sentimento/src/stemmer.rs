//! Porter suffix-stripping stemmer.
//!
//! M.F. Porter. 1980. An algorithm for suffix stripping. Program, 14(3), pp. 130-137.
//!
//! The input must already be lowercased. Words with two or fewer characters are returned as is.

// Compound suffixes collapsed in step 3.
const STEP3_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP4_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP5_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

struct Stemmer {
    b: Vec<char>,

    // Length of the stem in front of the last matched suffix.
    j: usize,
}

impl Stemmer {
    fn new(word: Vec<char>) -> Self {
        Self { b: word, j: 0 }
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Counts vowel-consonant sequences in `b[..j]`.
    ///
    /// ```text
    /// <c><v>       gives 0
    /// <c>vc<v>     gives 1
    /// <c>vcvc<v>   gives 2
    /// ```
    fn measure(&self) -> usize {
        let j = self.j;
        let mut n = 0;
        let mut i = 0;
        while i < j && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < j && !self.is_consonant(i) {
                i += 1;
            }
            if i >= j {
                return n;
            }
            n += 1;
            while i < j && self.is_consonant(i) {
                i += 1;
            }
            if i >= j {
                return n;
            }
        }
    }

    fn has_vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.is_consonant(i))
    }

    fn is_double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// Checks `b[i-2..=i]` is consonant-vowel-consonant and the last one is not w, x, or y.
    /// e.g. cav(e), lov(e), hop(e), crim(e), but not snow, box, tray.
    fn is_cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// Checks the word ends with `suffix`. On success, `j` is moved in front of the suffix.
    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count();
        if len > self.b.len() {
            return false;
        }
        let start = self.b.len() - len;
        if self.b[start..].iter().copied().eq(suffix.chars()) {
            self.j = start;
            true
        } else {
            false
        }
    }

    /// Replaces everything after the stem with `s`.
    fn set_to(&mut self, s: &str) {
        self.b.truncate(self.j);
        self.b.extend(s.chars());
    }

    fn replace_if_measured(&mut self, s: &str) {
        if self.measure() > 0 {
            self.set_to(s);
        }
    }

    fn last_char(&self) -> Option<char> {
        self.b.last().copied()
    }

    /// Removes plurals and -ed or -ing.
    fn step1(&mut self) {
        if self.last_char() == Some('s') {
            if self.ends("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != 's' {
                self.b.pop();
            }
        }
        if self.ends("eed") {
            if self.measure() > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.has_vowel_in_stem() {
            self.b.truncate(self.j);
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.is_double_consonant(self.b.len() - 1) {
                if !matches!(self.last_char(), Some('l' | 's' | 'z')) {
                    self.b.pop();
                }
            } else if self.measure() == 1 && self.is_cvc(self.b.len() - 1) {
                self.b.push('e');
            }
        }
    }

    /// Turns terminal y to i when there is another vowel in the stem.
    fn step2(&mut self) {
        if self.ends("y") && self.has_vowel_in_stem() {
            let last = self.b.len() - 1;
            self.b[last] = 'i';
        }
    }

    /// Maps double suffixes to single ones.
    fn step3(&mut self) {
        if self.b.len() < 2 {
            return;
        }
        for &(suffix, replacement) in STEP3_RULES {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Deals with -ic-, -full, -ness etc.
    fn step4(&mut self) {
        for &(suffix, replacement) in STEP4_RULES {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Takes off -ant, -ence etc. in context <c>vcvc<v>.
    fn step5(&mut self) {
        if self.b.len() < 2 {
            return;
        }
        let matched = STEP5_SUFFIXES.iter().any(|&suffix| {
            if !self.ends(suffix) {
                return false;
            }
            // -ion is only removed after s or t.
            suffix != "ion" || (self.j >= 1 && matches!(self.b[self.j - 1], 's' | 't'))
        });
        if matched && self.measure() > 1 {
            self.b.truncate(self.j);
        }
    }

    /// Removes a final -e and a double l if the measure allows.
    fn step6(&mut self) {
        self.j = self.b.len();
        if self.last_char() == Some('e') {
            let m = self.measure();
            let len = self.b.len();
            if m > 1 || (m == 1 && !(len >= 2 && self.is_cvc(len - 2))) {
                self.b.pop();
            }
        }
        // A trailing vowel never changes the measure.
        self.j = self.b.len();
        if self.last_char() == Some('l')
            && self.is_double_consonant(self.b.len() - 1)
            && self.measure() > 1
        {
            self.b.pop();
        }
    }

    fn into_string(self) -> String {
        self.b.into_iter().collect()
    }
}

/// Stems a word.
///
/// # Arguments
///
/// * `word` - A lowercased word.
///
/// # Returns
///
/// The stem of `word`. Never longer than `word`.
///
/// # Examples
///
/// ```
/// use sentimento::stemmer::stem;
///
/// assert_eq!("caress", stem("caresses"));
/// assert_eq!("happi", stem("happiness"));
/// assert_eq!("gener", stem("generalization"));
/// ```
pub fn stem(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_string();
    }
    let mut stemmer = Stemmer::new(chars);
    stemmer.step1();
    stemmer.step2();
    stemmer.step3();
    stemmer.step4();
    stemmer.step5();
    stemmer.step6();
    stemmer.into_string()
}

/// Removes plurals and -ed or -ing only, i.e., runs the first step of [`stem`].
///
/// # Examples
///
/// ```
/// use sentimento::stemmer::strip_inflections;
///
/// assert_eq!("agree", strip_inflections("agreed"));
/// assert_eq!("disable", strip_inflections("disabled"));
/// ```
pub fn strip_inflections(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_string();
    }
    let mut stemmer = Stemmer::new(chars);
    stemmer.step1();
    stemmer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFLECTIONS: &[(&str, &str)] = &[
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("ties", "ti"),
        ("caress", "caress"),
        ("cats", "cat"),
        ("feed", "feed"),
        ("agreed", "agree"),
        ("disabled", "disable"),
        ("matting", "mat"),
        ("mating", "mate"),
        ("meeting", "meet"),
        ("milling", "mill"),
        ("messing", "mess"),
        ("meetings", "meet"),
    ];

    #[test]
    fn test_strip_inflections() {
        for &(word, expected) in INFLECTIONS {
            assert_eq!(expected, strip_inflections(word), "word: {word}");
        }
    }

    #[test]
    fn test_stem_inflections() {
        for &(word, expected) in INFLECTIONS {
            let expected = match word {
                // The final -e is removed in the last step.
                "agreed" => "agre",
                "disabled" => "disabl",
                _ => expected,
            };
            assert_eq!(expected, stem(word), "word: {word}");
        }
    }

    #[test]
    fn test_stem_short_words() {
        for word in ["", "a", "is", "by", "ss", "ed", "\u{e9}t"] {
            assert_eq!(word, stem(word));
        }
    }

    #[test]
    fn test_stem_terminal_y() {
        assert_eq!("happi", stem("happy"));
        assert_eq!("sky", stem("sky"));
    }

    #[test]
    fn test_stem_double_suffixes() {
        assert_eq!("relat", stem("relational"));
        assert_eq!("condit", stem("conditional"));
        assert_eq!("gener", stem("generalization"));
        assert_eq!("happi", stem("happiness"));
    }

    #[test]
    fn test_stem_e_restoration() {
        assert_eq!("hop", stem("hopping"));
        assert_eq!("hope", stem("hoping"));
        assert_eq!("conflat", stem("conflated"));
    }

    #[test]
    fn test_stem_never_grows() {
        for word in [
            "conflated", "relational", "sensational", "hopeful", "goodness", "electrical",
            "adjustment", "controlling", "rolling", "agreement",
        ] {
            assert!(stem(word).chars().count() <= word.chars().count());
        }
    }

    #[test]
    fn test_stem_reaches_fixed_point() {
        for word in [
            "generalizations", "happiness", "connections", "relational", "products", "batteries",
            "disappointed", "recommended", "excellent", "terrible", "quality", "worked",
        ] {
            let mut w = word.to_string();
            let mut fixed = false;
            for _ in 0..10 {
                let next = stem(&w);
                if next == w {
                    fixed = true;
                    break;
                }
                w = next;
            }
            assert!(fixed, "word: {word}");
        }
    }
}
