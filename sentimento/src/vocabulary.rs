use bincode::{
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};

use crate::class::{Class, N_CLASSES};

/// A term and its occurrence counts.
#[derive(Clone, Debug, PartialEq, Eq, Decode, Encode)]
pub struct VocabularyEntry {
    term: String,
    counts: [u64; N_CLASSES],
}

impl VocabularyEntry {
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Occurrence counts indexed by [`Class::index()`].
    ///
    /// In the Bernoulli setting, these are numbers of documents containing the term.
    pub fn counts(&self) -> &[u64; N_CLASSES] {
        &self.counts
    }

    pub fn count(&self, class: Class) -> u64 {
        self.counts[class.index()]
    }
}

/// Ordered set of terms.
///
/// Terms are kept sorted for binary search. Each term gets an ID when it is inserted for the
/// first time; the ID never changes while the sorted position of the term moves as other terms
/// are inserted.
///
/// # Examples
///
/// ```
/// use sentimento::{Class, Vocabulary};
///
/// let mut vocab = Vocabulary::new();
/// let good = vocab.insert_or_increment("good", Class::Positive);
/// let bad = vocab.insert_or_increment("bad", Class::Negative);
/// vocab.insert_or_increment("good", Class::VeryPositive);
///
/// assert_eq!(Some(good), vocab.find("good"));
/// assert_eq!(Some(bad), vocab.find("bad"));
/// assert_eq!(&[0, 0, 1, 1], vocab.entry(good).counts());
/// assert_eq!(vec!["bad", "good"], vocab.iter_sorted().map(|(_, e)| e.term()).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    // Indexed by ID.
    entries: Vec<VocabularyEntry>,

    // Sorted position to ID.
    sorted_ids: Vec<usize>,

    // Per-document tracking for the Bernoulli model. Indexed by ID.
    seen: Vec<bool>,
    seen_ids: Vec<usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    fn search(&self, term: &str) -> Result<usize, usize> {
        self.sorted_ids
            .binary_search_by(|&id| self.entries[id].term.as_str().cmp(term))
    }

    /// Finds the ID of a term.
    pub fn find(&self, term: &str) -> Option<usize> {
        self.search(term).ok().map(|pos| self.sorted_ids[pos])
    }

    /// Gets the sorted position at which `term` is or would be placed.
    pub fn insertion_point(&self, term: &str) -> usize {
        self.search(term).unwrap_or_else(|pos| pos)
    }

    fn insert_at(&mut self, pos: usize, term: &str, class: Class) -> usize {
        let id = self.entries.len();
        let mut counts = [0; N_CLASSES];
        counts[class.index()] = 1;
        self.entries.push(VocabularyEntry {
            term: term.to_string(),
            counts,
        });
        self.sorted_ids.insert(pos, id);
        self.seen.push(false);
        id
    }

    /// Counts an occurrence of a term in a document of `class`, inserting the term if it is new.
    ///
    /// # Returns
    ///
    /// The ID of the term.
    pub fn insert_or_increment(&mut self, term: &str, class: Class) -> usize {
        match self.search(term) {
            Ok(pos) => {
                let id = self.sorted_ids[pos];
                self.entries[id].counts[class.index()] += 1;
                id
            }
            Err(pos) => self.insert_at(pos, term, class),
        }
    }

    /// Like [`Vocabulary::insert_or_increment()`], but counts each term at most once until
    /// [`Vocabulary::reset_document_tracking()`] is called.
    pub fn insert_once_per_document(&mut self, term: &str, class: Class) -> usize {
        let id = match self.search(term) {
            Ok(pos) => {
                let id = self.sorted_ids[pos];
                if !self.seen[id] {
                    self.entries[id].counts[class.index()] += 1;
                }
                id
            }
            Err(pos) => self.insert_at(pos, term, class),
        };
        if !self.seen[id] {
            self.seen[id] = true;
            self.seen_ids.push(id);
        }
        id
    }

    /// Forgets which terms were seen in the current document. Counts are kept.
    pub fn reset_document_tracking(&mut self) {
        for id in self.seen_ids.drain(..) {
            self.seen[id] = false;
        }
    }

    /// Gets an entry by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn entry(&self, id: usize) -> &VocabularyEntry {
        &self.entries[id]
    }

    /// Iterates entries in ID order.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Iterates `(id, entry)` pairs in ascending term order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (usize, &VocabularyEntry)> + '_ {
        self.sorted_ids.iter().map(|&id| (id, &self.entries[id]))
    }

    /// Sum of the counts of all terms in a class.
    pub fn class_total(&self, class: Class) -> u64 {
        self.entries.iter().map(|e| e.count(class)).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Context> Decode<Context> for Vocabulary {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let entries = Vec::<VocabularyEntry>::decode(decoder)?;
        let mut sorted_ids: Vec<usize> = (0..entries.len()).collect();
        sorted_ids.sort_unstable_by(|&a, &b| entries[a].term.cmp(&entries[b].term));
        for w in sorted_ids.windows(2) {
            if entries[w[0]].term == entries[w[1]].term {
                return Err(DecodeError::OtherString(format!(
                    "duplicated term in vocabulary: {}",
                    entries[w[0]].term
                )));
            }
        }
        let seen = vec![false; entries.len()];
        Ok(Self {
            entries,
            sorted_ids,
            seen,
            seen_ids: vec![],
        })
    }
}
bincode::impl_borrow_decode!(Vocabulary);

impl Encode for Vocabulary {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.entries, encoder)?;
        Ok(())
    }
}
