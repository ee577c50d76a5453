use std::fmt;
use std::str::FromStr;

use bincode::{Decode, Encode};

use crate::class::{Class, N_CLASSES};
use crate::errors::{Result, SentimentoError};
use crate::utils::ClassMemo;
use crate::vocabulary::Vocabulary;

/// Event model of documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Decode, Encode)]
pub enum EventModel {
    /// A document is a sequence of term occurrences.
    Multinomial,

    /// A document is a set of present and absent terms.
    Bernoulli,
}

impl FromStr for EventModel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multinomial" => Ok(Self::Multinomial),
            "bernoulli" => Ok(Self::Bernoulli),
            _ => Err("Could not parse an event model"),
        }
    }
}

impl fmt::Display for EventModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Multinomial => write!(f, "multinomial"),
            Self::Bernoulli => write!(f, "bernoulli"),
        }
    }
}

/// Number of training documents and the prior of a class.
#[derive(Clone, Copy, Debug, PartialEq, Decode, Encode)]
pub struct ClassStatistics {
    pub(crate) document_count: u64,
    pub(crate) prior: f64,
}

impl ClassStatistics {
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }
}

/// Smoothed term probabilities indexed by term ID and [`Class::index()`].
#[derive(Clone, Debug, PartialEq, Decode, Encode)]
pub struct ProbabilityTable {
    pub(crate) probs: Vec<[f64; N_CLASSES]>,
}

impl ProbabilityTable {
    /// Gets the probability of a term in a class.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline(always)]
    pub fn get(&self, id: usize, class: Class) -> f64 {
        self.probs[id][class.index()]
    }

    /// Gets probabilities of a term for all classes.
    pub fn row(&self, id: usize) -> &[f64; N_CLASSES] {
        &self.probs[id]
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}

/// Computes class priors.
///
/// # Errors
///
/// [`SentimentoError::DegenerateModel`] will be returned if there is no document.
pub fn priors(class_document_counts: &[u64; N_CLASSES]) -> Result<[ClassStatistics; N_CLASSES]> {
    let total: u64 = class_document_counts.iter().sum();
    if total == 0 {
        return Err(SentimentoError::degenerate_model("no training documents"));
    }
    Ok(class_document_counts.map(|document_count| ClassStatistics {
        document_count,
        prior: document_count as f64 / total as f64,
    }))
}

/// Naive Bayes estimator with Laplace smoothing.
pub struct Estimator {
    event_model: EventModel,
    denominators: ClassMemo<f64>,
}

impl Estimator {
    pub fn new(event_model: EventModel) -> Self {
        Self {
            event_model,
            denominators: ClassMemo::new(),
        }
    }

    pub fn event_model(&self) -> EventModel {
        self.event_model
    }

    fn denominator(
        &mut self,
        vocabulary: &Vocabulary,
        class_document_counts: &[u64; N_CLASSES],
        class: Class,
    ) -> f64 {
        let event_model = self.event_model;
        self.denominators.get_or_insert_with(class, || match event_model {
            EventModel::Multinomial => {
                vocabulary.class_total(class) as f64 + vocabulary.len() as f64
            }
            EventModel::Bernoulli => class_document_counts[class.index()] as f64 + 2.,
        })
    }

    /// Estimates term probabilities and class priors.
    ///
    /// * Multinomial: `P(t|c) = (count(t,c) + 1) / (sum of count(*,c) + |V|)`
    /// * Bernoulli: `P(t|c) = (docs(t,c) + 1) / (docs(c) + 2)`
    ///
    /// # Arguments
    ///
    /// * `vocabulary` - Terms with counts. For the Bernoulli model, counts must be numbers of
    ///   documents.
    /// * `class_document_counts` - Numbers of training documents of each class.
    ///
    /// # Errors
    ///
    /// [`SentimentoError::DegenerateModel`] will be returned if there is no document or no term.
    pub fn estimate(
        &mut self,
        vocabulary: &Vocabulary,
        class_document_counts: &[u64; N_CLASSES],
    ) -> Result<(ProbabilityTable, [ClassStatistics; N_CLASSES])> {
        self.denominators.reset();
        let stats = priors(class_document_counts)?;
        if vocabulary.is_empty() {
            return Err(SentimentoError::degenerate_model("vocabulary is empty"));
        }
        let mut probs = Vec::with_capacity(vocabulary.len());
        for entry in vocabulary.entries() {
            let mut row = [0.; N_CLASSES];
            for class in Class::ALL {
                let denominator = self.denominator(vocabulary, class_document_counts, class);
                if denominator == 0. {
                    return Err(SentimentoError::degenerate_model(format!(
                        "probability denominator of class {class} is zero"
                    )));
                }
                row[class.index()] = (entry.count(class) as f64 + 1.) / denominator;
            }
            probs.push(row);
        }
        Ok((ProbabilityTable { probs }, stats))
    }
}
