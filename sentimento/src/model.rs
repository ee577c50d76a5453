use std::io::{Read, Write};

use bincode::{Decode, Encode};

use crate::class::{Class, N_CLASSES};
use crate::errors::{Result, SentimentoError};
use crate::estimator::{ClassStatistics, EventModel, ProbabilityTable};
use crate::vocabulary::Vocabulary;

/// Model data.
#[derive(Clone, Debug, Decode, Encode)]
pub struct Model {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) probabilities: ProbabilityTable,
    pub(crate) class_stats: [ClassStatistics; N_CLASSES],
    pub(crate) event_model: EventModel,
}

impl Model {
    /// Exports the model data.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        bincode::encode_into_std_write(self, wtr, bincode::config::standard())?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Returns
    ///
    /// A model data read from `rdr`.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is.
    /// [`SentimentoError::InvalidModel`] will be returned if the data is inconsistent.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let model: Self = bincode::decode_from_std_read(rdr, bincode::config::standard())?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(SentimentoError::invalid_model("vocabulary is empty"));
        }
        if self.vocabulary.len() != self.probabilities.len() {
            return Err(SentimentoError::invalid_model(format!(
                "{} terms but {} probability rows",
                self.vocabulary.len(),
                self.probabilities.len()
            )));
        }
        // log2(1 - p) must stay finite for the Bernoulli model.
        let max_prob_ok = |p: f64| match self.event_model {
            EventModel::Multinomial => p <= 1.,
            EventModel::Bernoulli => p < 1.,
        };
        for row in &self.probabilities.probs {
            if row.iter().any(|&p| !(p > 0. && max_prob_ok(p))) {
                return Err(SentimentoError::invalid_model(format!(
                    "probability out of range for the {} model",
                    self.event_model
                )));
            }
        }
        let n_documents = self.n_documents();
        if n_documents == 0 {
            return Err(SentimentoError::invalid_model("no training documents"));
        }
        for stats in &self.class_stats {
            let expected = stats.document_count as f64 / n_documents as f64;
            if !((0. ..=1.).contains(&stats.prior) && (stats.prior - expected).abs() <= 1e-9) {
                return Err(SentimentoError::invalid_model(format!(
                    "prior {} does not match {} of {n_documents} documents",
                    stats.prior, stats.document_count
                )));
            }
        }
        let prior_sum: f64 = self.class_stats.iter().map(|s| s.prior).sum();
        if !((prior_sum - 1.).abs() <= 1e-6) {
            return Err(SentimentoError::invalid_model(format!(
                "priors sum to {prior_sum}"
            )));
        }
        Ok(())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    pub fn class_statistics(&self, class: Class) -> &ClassStatistics {
        &self.class_stats[class.index()]
    }

    pub fn event_model(&self) -> EventModel {
        self.event_model
    }

    /// Total number of training documents.
    pub fn n_documents(&self) -> u64 {
        self.class_stats.iter().map(|s| s.document_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::trainer::Trainer;

    fn build_model() -> Model {
        let mut trainer = Trainer::new(EventModel::Bernoulli);
        trainer.push_document(&["good", "great"], Class::VeryPositive);
        trainer.push_document(&["bad"], Class::Negative);
        trainer.train().unwrap()
    }

    #[test]
    fn test_write_read() {
        let model = build_model();
        let mut data = vec![];
        model.write(&mut data).unwrap();
        let restored = Model::read(&mut data.as_slice()).unwrap();

        assert_eq!(EventModel::Bernoulli, restored.event_model());
        assert_eq!(model.vocabulary().entries(), restored.vocabulary().entries());
        assert_eq!(model.probabilities(), restored.probabilities());
        assert_eq!(2, restored.n_documents());
        assert_eq!(
            1,
            restored.class_statistics(Class::Negative).document_count()
        );
    }

    #[test]
    fn test_read_inconsistent() {
        let mut model = build_model();
        model.probabilities.probs.pop();
        let mut data = vec![];
        model.write(&mut data).unwrap();
        assert!(matches!(
            Model::read(&mut data.as_slice()),
            Err(SentimentoError::InvalidModel(_))
        ));
    }

    fn assert_rejected(model: &Model) {
        let mut data = vec![];
        model.write(&mut data).unwrap();
        assert!(matches!(
            Model::read(&mut data.as_slice()),
            Err(SentimentoError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_read_invalid_priors() {
        let mut model = build_model();
        model.class_stats[0].prior = f64::NAN;
        model.class_stats[3].prior = f64::NAN;
        assert_rejected(&model);

        let mut model = build_model();
        model.class_stats[0].prior = 2.;
        model.class_stats[3].prior = -1.;
        assert_rejected(&model);

        // Sums to 1 but disagrees with the document counts.
        let mut model = build_model();
        model.class_stats[1].prior = 0.25;
        model.class_stats[3].prior = 0.75;
        assert_rejected(&model);

        let mut model = build_model();
        for stats in &mut model.class_stats {
            stats.document_count = 0;
        }
        assert_rejected(&model);
    }

    #[test]
    fn test_read_bernoulli_certain_probability() {
        let mut model = build_model();
        model.probabilities.probs[0][0] = 1.;
        assert_rejected(&model);

        model.event_model = EventModel::Multinomial;
        let mut data = vec![];
        model.write(&mut data).unwrap();
        assert!(Model::read(&mut data.as_slice()).is_ok());
    }

    #[test]
    fn test_read_nan_probability() {
        let mut model = build_model();
        model.probabilities.probs[1][2] = f64::NAN;
        assert_rejected(&model);
    }

    #[test]
    fn test_read_broken_data() {
        let data = [0xffu8; 3];
        assert!(Model::read(&mut &data[..]).is_err());
    }
}
