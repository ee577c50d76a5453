use crate::class::{Class, N_CLASSES};
use crate::errors::Result;
use crate::estimator::{Estimator, EventModel};
use crate::model::Model;
use crate::vocabulary::Vocabulary;

/// Trainer.
///
/// A trainer is used for one category only. Create a new trainer for the next category.
///
/// # Examples
///
/// ```
/// use sentimento::{Class, EventModel, Tokenizer, Trainer};
///
/// let tokenizer = Tokenizer::default();
/// let mut trainer = Trainer::new(EventModel::Multinomial);
/// trainer.push_document(&tokenizer.tokenize("Great sound, great price"), Class::VeryPositive);
/// trainer.push_document(&tokenizer.tokenize("Broke after a week"), Class::VeryNegative);
///
/// let model = trainer.train().unwrap();
/// assert_eq!(7, model.vocabulary().len());
/// ```
pub struct Trainer {
    event_model: EventModel,
    vocabulary: Vocabulary,
    class_document_counts: [u64; N_CLASSES],
}

impl Trainer {
    /// Creates a new trainer.
    ///
    /// # Arguments
    ///
    /// * `event_model` - The event model the probabilities are estimated for.
    pub fn new(event_model: EventModel) -> Self {
        Self {
            event_model,
            vocabulary: Vocabulary::new(),
            class_document_counts: [0; N_CLASSES],
        }
    }

    /// Adds a document to the dataset.
    ///
    /// # Arguments
    ///
    /// * `stems` - Stems of the document. It may be empty.
    /// * `class` - The class of the document.
    pub fn push_document<S>(&mut self, stems: &[S], class: Class)
    where
        S: AsRef<str>,
    {
        match self.event_model {
            EventModel::Multinomial => {
                for s in stems {
                    self.vocabulary.insert_or_increment(s.as_ref(), class);
                }
            }
            EventModel::Bernoulli => {
                for s in stems {
                    self.vocabulary.insert_once_per_document(s.as_ref(), class);
                }
                self.vocabulary.reset_document_tracking();
            }
        }
        self.class_document_counts[class.index()] += 1;
    }

    /// Gets the number of documents.
    pub fn n_documents(&self) -> u64 {
        self.class_document_counts.iter().sum()
    }

    /// Gets the number of distinct terms.
    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Estimates probabilities and builds a model.
    ///
    /// # Errors
    ///
    /// [`SentimentoError::DegenerateModel`](crate::errors::SentimentoError::DegenerateModel) will
    /// be returned if no document or no term was given. The trainer is consumed either way.
    pub fn train(self) -> Result<Model> {
        let mut estimator = Estimator::new(self.event_model);
        let (probabilities, class_stats) =
            estimator.estimate(&self.vocabulary, &self.class_document_counts)?;
        Ok(Model {
            vocabulary: self.vocabulary,
            probabilities,
            class_stats,
            event_model: self.event_model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::SentimentoError;

    #[test]
    fn test_push_document_multinomial() {
        let mut trainer = Trainer::new(EventModel::Multinomial);
        trainer.push_document(&["good", "good", "great"], Class::Positive);
        trainer.push_document(&["good"], Class::Positive);
        let good = trainer.vocabulary().find("good").unwrap();
        assert_eq!(3, trainer.vocabulary().entry(good).count(Class::Positive));
        assert_eq!(2, trainer.n_documents());
        assert_eq!(2, trainer.n_terms());
    }

    #[test]
    fn test_push_document_bernoulli() {
        let mut trainer = Trainer::new(EventModel::Bernoulli);
        trainer.push_document(&["good", "good", "great"], Class::Positive);
        trainer.push_document(&["good"], Class::Positive);
        trainer.push_document(&["great", "great"], Class::Negative);
        let vocab = trainer.vocabulary();
        let good = vocab.find("good").unwrap();
        let great = vocab.find("great").unwrap();
        assert_eq!(2, vocab.entry(good).count(Class::Positive));
        assert_eq!(1, vocab.entry(great).count(Class::Positive));
        assert_eq!(1, vocab.entry(great).count(Class::Negative));
    }

    #[test]
    fn test_empty_document_is_counted() {
        let mut trainer = Trainer::new(EventModel::Multinomial);
        trainer.push_document::<&str>(&[], Class::Negative);
        trainer.push_document(&["fine"], Class::Positive);
        let model = trainer.train().unwrap();
        assert_eq!(0.5, model.class_statistics(Class::Negative).prior());
    }

    #[test]
    fn test_train_without_documents() {
        let trainer = Trainer::new(EventModel::Bernoulli);
        assert!(matches!(
            trainer.train(),
            Err(SentimentoError::DegenerateModel(_))
        ));
    }

    #[test]
    fn test_train_without_terms() {
        let mut trainer = Trainer::new(EventModel::Multinomial);
        trainer.push_document::<&str>(&[], Class::Positive);
        assert!(matches!(
            trainer.train(),
            Err(SentimentoError::DegenerateModel(_))
        ));
    }
}
