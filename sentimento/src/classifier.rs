use hashbrown::HashSet;

use crate::class::{Class, N_CLASSES};
use crate::estimator::EventModel;
use crate::model::Model;
use crate::utils::argmax;

/// Classifier.
///
/// # Examples
///
/// ```
/// use sentimento::{Class, Classifier, EventModel, Tokenizer, Trainer};
///
/// let tokenizer = Tokenizer::default();
/// let mut trainer = Trainer::new(EventModel::Multinomial);
/// trainer.push_document(&tokenizer.tokenize("good great good"), Class::VeryPositive);
/// trainer.push_document(&tokenizer.tokenize("bad terrible bad"), Class::VeryNegative);
/// let classifier = Classifier::new(trainer.train().unwrap());
///
/// assert_eq!(Class::VeryPositive, classifier.classify(&tokenizer.tokenize("good good")));
/// ```
pub struct Classifier {
    model: Model,

    // ln(1 / |V|), used for terms out of the vocabulary.
    unknown_log_prob: f64,
}

impl Classifier {
    /// Creates a new classifier.
    ///
    /// # Arguments
    ///
    /// * `model` - A trained model.
    pub fn new(model: Model) -> Self {
        let unknown_log_prob = (1. / model.vocabulary.len() as f64).ln();
        Self {
            model,
            unknown_log_prob,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Gives the model back.
    pub fn into_model(self) -> Model {
        self.model
    }

    /// Computes the log-likelihood of each class.
    ///
    /// Multinomial scores are natural logarithms, Bernoulli scores are binary logarithms.
    ///
    /// # Arguments
    ///
    /// * `stems` - Stems of a document.
    ///
    /// # Returns
    ///
    /// Scores indexed by [`Class::index()`].
    pub fn scores<S>(&self, stems: &[S]) -> [f64; N_CLASSES]
    where
        S: AsRef<str>,
    {
        match self.model.event_model {
            EventModel::Multinomial => self.multinomial_scores(stems),
            EventModel::Bernoulli => self.bernoulli_scores(stems),
        }
    }

    fn multinomial_scores<S>(&self, stems: &[S]) -> [f64; N_CLASSES]
    where
        S: AsRef<str>,
    {
        let mut scores = self.model.class_stats.map(|s| s.prior.ln());
        for stem in stems {
            match self.model.vocabulary.find(stem.as_ref()) {
                Some(id) => {
                    let probs = self.model.probabilities.row(id);
                    for (score, p) in scores.iter_mut().zip(probs) {
                        *score += p.ln();
                    }
                }
                None => {
                    for score in &mut scores {
                        *score += self.unknown_log_prob;
                    }
                }
            }
        }
        scores
    }

    fn bernoulli_scores<S>(&self, stems: &[S]) -> [f64; N_CLASSES]
    where
        S: AsRef<str>,
    {
        let present: HashSet<usize> = stems
            .iter()
            .filter_map(|s| self.model.vocabulary.find(s.as_ref()))
            .collect();
        let mut scores = self.model.class_stats.map(|s| s.prior.log2());
        for id in 0..self.model.vocabulary.len() {
            let probs = self.model.probabilities.row(id);
            let is_present = present.contains(&id);
            for (score, &p) in scores.iter_mut().zip(probs) {
                *score += if is_present { p.log2() } else { (1. - p).log2() };
            }
        }
        scores
    }

    /// Predicts the class of a document.
    ///
    /// # Arguments
    ///
    /// * `stems` - Stems of a document.
    ///
    /// # Returns
    ///
    /// The class with the highest score. Ties go to the class with the lowest index.
    pub fn classify<S>(&self, stems: &[S]) -> Class
    where
        S: AsRef<str>,
    {
        let scores = self.scores(stems);
        Class::ALL[argmax(&scores)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::trainer::Trainer;

    fn train(event_model: EventModel, docs: &[(&[&str], Class)]) -> Classifier {
        let mut trainer = Trainer::new(event_model);
        for &(stems, class) in docs {
            trainer.push_document(stems, class);
        }
        Classifier::new(trainer.train().unwrap())
    }

    #[test]
    fn test_classify_multinomial() {
        let classifier = train(
            EventModel::Multinomial,
            &[
                (&["good", "great", "good"], Class::VeryPositive),
                (&["bad", "terribl", "bad"], Class::VeryNegative),
            ],
        );
        assert_eq!(Class::VeryPositive, classifier.classify(&["good", "good"]));
        assert_eq!(Class::VeryNegative, classifier.classify(&["bad"]));
    }

    #[test]
    fn test_multinomial_scores() {
        let classifier = train(
            EventModel::Multinomial,
            &[
                (&["good"], Class::VeryPositive),
                (&["bad"], Class::VeryNegative),
            ],
        );
        let scores = classifier.scores(&["good", "unseen"]);
        // ln(1/2) + ln(2/3) + ln(1/2)
        let expected = 0.5f64.ln() + (2. / 3_f64).ln() + 0.5f64.ln();
        assert!((scores[Class::VeryPositive.index()] - expected).abs() < 1e-12);
        assert_eq!(f64::NEG_INFINITY, scores[Class::Negative.index()]);
    }

    #[test]
    fn test_bernoulli_scores() {
        let classifier = train(
            EventModel::Bernoulli,
            &[
                (&["good"], Class::VeryPositive),
                (&["bad"], Class::VeryNegative),
            ],
        );
        let scores = classifier.scores(&["good", "good"]);
        // P(good|5) = 2/3, P(bad|5) = 1/3
        let expected = 0.5f64.log2() + (2. / 3_f64).log2() + (1. - 1. / 3_f64).log2();
        assert!((scores[Class::VeryPositive.index()] - expected).abs() < 1e-12);
        assert_eq!(Class::VeryPositive, classifier.classify(&["good"]));
        assert_eq!(Class::VeryNegative, classifier.classify(&["bad", "unseen"]));
    }

    #[test]
    fn test_single_class_collapses() {
        for event_model in [EventModel::Multinomial, EventModel::Bernoulli] {
            let classifier = train(
                event_model,
                &[
                    (&["fine", "product"], Class::Negative),
                    (&["poor"], Class::Negative),
                ],
            );
            for doc in [&["fine"][..], &["great", "great"], &[], &["poor", "product"]] {
                assert_eq!(Class::Negative, classifier.classify(doc));
            }
        }
    }

    #[test]
    fn test_tie_goes_to_lowest_class() {
        let classifier = train(
            EventModel::Multinomial,
            &[
                (&["same"], Class::Negative),
                (&["same"], Class::VeryPositive),
            ],
        );
        assert_eq!(Class::Negative, classifier.classify(&["same"]));
        assert_eq!(Class::Negative, classifier.classify::<&str>(&[]));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = train(
            EventModel::Bernoulli,
            &[
                (&["loud", "clear"], Class::Positive),
                (&["noisi", "loud"], Class::Negative),
                (&["clear", "cheap"], Class::VeryPositive),
            ],
        );
        let doc = ["loud", "cheap", "other"];
        let first = classifier.scores(&doc);
        for _ in 0..5 {
            assert_eq!(first, classifier.scores(&doc));
        }
    }
}
