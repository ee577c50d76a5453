//! Train, test, and evaluate a category.
//!
//! Every category gets its own model. Nothing is shared between two calls of [`run_category()`].

use std::fmt;
use std::io::Write;

use crate::classifier::Classifier;
use crate::corpus::LabeledDocument;
use crate::errors::Result;
use crate::estimator::EventModel;
use crate::evaluator::{ConfusionMatrix, PredictionRecord};
use crate::model::Model;
use crate::tokenizer::Tokenizer;
use crate::trainer::Trainer;

/// Trains a model from labeled documents.
///
/// # Errors
///
/// [`SentimentoError::DegenerateModel`](crate::errors::SentimentoError::DegenerateModel) will be
/// returned if there is no document or no term survived tokenization.
pub fn train_model<'a, I>(
    documents: I,
    tokenizer: &Tokenizer,
    event_model: EventModel,
) -> Result<Model>
where
    I: IntoIterator<Item = &'a LabeledDocument>,
{
    let mut trainer = Trainer::new(event_model);
    for doc in documents {
        trainer.push_document(&tokenizer.tokenize(&doc.text), doc.class);
    }
    trainer.train()
}

/// Result of testing a model.
#[derive(Clone, Debug, Default)]
pub struct TestReport {
    predictions: Vec<PredictionRecord>,
    confusion_matrix: ConfusionMatrix,
}

impl TestReport {
    /// Predictions in the order of the test documents.
    pub fn predictions(&self) -> &[PredictionRecord] {
        &self.predictions
    }

    pub fn confusion_matrix(&self) -> &ConfusionMatrix {
        &self.confusion_matrix
    }

    /// Writes one `actual predicted` pair of ratings per line.
    pub fn write_labels<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        for record in &self.predictions {
            writeln!(wtr, "{record}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.confusion_matrix.fmt(f)
    }
}

/// Classifies labeled documents and compares predictions with the labels.
pub fn test_model<'a, I>(classifier: &Classifier, documents: I, tokenizer: &Tokenizer) -> TestReport
where
    I: IntoIterator<Item = &'a LabeledDocument>,
{
    let mut report = TestReport::default();
    for doc in documents {
        let predicted = classifier.classify(&tokenizer.tokenize(&doc.text));
        let record = PredictionRecord::new(doc.class, predicted);
        report.confusion_matrix.add(record);
        report.predictions.push(record);
    }
    report
}

/// Outputs of a category.
pub struct CategoryOutcome {
    pub model: Model,
    pub report: TestReport,
}

/// Trains a fresh model on `train_documents` and tests it on `test_documents`.
///
/// # Errors
///
/// Errors of [`train_model()`] are returned as is. No partial model is returned.
///
/// # Examples
///
/// ```
/// use sentimento::corpus::LabeledDocument;
/// use sentimento::pipeline::run_category;
/// use sentimento::{Class, EventModel, Tokenizer};
///
/// let train = [
///     LabeledDocument::new(Class::VeryPositive, "good great good"),
///     LabeledDocument::new(Class::VeryNegative, "bad terrible bad"),
/// ];
/// let test = [LabeledDocument::new(Class::Positive, "good good")];
/// let outcome = run_category(&train, &test, &Tokenizer::default(), EventModel::Multinomial)
///     .unwrap();
///
/// assert_eq!(Class::VeryPositive, outcome.report.predictions()[0].predicted);
/// assert_eq!(Some(100.), outcome.report.confusion_matrix().accuracy());
/// ```
pub fn run_category<'a, I, J>(
    train_documents: I,
    test_documents: J,
    tokenizer: &Tokenizer,
    event_model: EventModel,
) -> Result<CategoryOutcome>
where
    I: IntoIterator<Item = &'a LabeledDocument>,
    J: IntoIterator<Item = &'a LabeledDocument>,
{
    let model = train_model(train_documents, tokenizer, event_model)?;
    let classifier = Classifier::new(model);
    let report = test_model(&classifier, test_documents, tokenizer);
    Ok(CategoryOutcome {
        model: classifier.into_model(),
        report,
    })
}
