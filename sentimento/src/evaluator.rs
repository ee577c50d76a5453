use std::fmt;

use crate::class::Class;

/// A pair of an actual class and a predicted class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictionRecord {
    pub actual: Class,
    pub predicted: Class,
}

impl PredictionRecord {
    pub fn new(actual: Class, predicted: Class) -> Self {
        Self { actual, predicted }
    }
}

impl fmt::Display for PredictionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.actual, self.predicted)
    }
}

/// Binary confusion matrix.
///
/// The classes are collapsed into negative and positive with [`Class::is_positive()`].
///
/// # Examples
///
/// ```
/// use sentimento::{Class, ConfusionMatrix, PredictionRecord};
///
/// let cm = ConfusionMatrix::from_predictions(&[
///     PredictionRecord::new(Class::VeryPositive, Class::Positive),
///     PredictionRecord::new(Class::Negative, Class::Positive),
/// ]);
/// assert_eq!(1, cm.true_positives());
/// assert_eq!(1, cm.false_positives());
/// assert_eq!(Some(50.), cm.accuracy());
/// assert_eq!(Some(100.), cm.recall());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    tp: usize,
    fp: usize,
    tn: usize,
    fn_: usize,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts predictions.
    pub fn from_predictions(predictions: &[PredictionRecord]) -> Self {
        let mut cm = Self::new();
        for &record in predictions {
            cm.add(record);
        }
        cm
    }

    /// Counts one prediction.
    pub fn add(&mut self, record: PredictionRecord) {
        match (record.actual.is_positive(), record.predicted.is_positive()) {
            (true, true) => self.tp += 1,
            (false, true) => self.fp += 1,
            (false, false) => self.tn += 1,
            (true, false) => self.fn_ += 1,
        }
    }

    pub fn true_positives(&self) -> usize {
        self.tp
    }

    pub fn false_positives(&self) -> usize {
        self.fp
    }

    pub fn true_negatives(&self) -> usize {
        self.tn
    }

    pub fn false_negatives(&self) -> usize {
        self.fn_
    }

    /// Number of counted predictions.
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Percentage of correct predictions, or [`None`] if nothing was counted.
    pub fn accuracy(&self) -> Option<f64> {
        percentage(self.tp + self.tn, self.total())
    }

    /// Percentage of correct positive predictions, or [`None`] if nothing was predicted
    /// positive.
    pub fn precision(&self) -> Option<f64> {
        percentage(self.tp, self.tp + self.fp)
    }

    /// Percentage of positive documents predicted positive, or [`None`] if there is no positive
    /// document.
    pub fn recall(&self) -> Option<f64> {
        percentage(self.tp, self.tp + self.fn_)
    }
}

fn percentage(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64 * 100.)
    }
}

struct Metric(Option<f64>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "undefined"),
        }
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "True +ves:   {}", self.tp)?;
        writeln!(f, "False +ves:  {}", self.fp)?;
        writeln!(f, "True -ves:   {}", self.tn)?;
        writeln!(f, "False -ves:  {}", self.fn_)?;
        writeln!(f, "Accuracy:    {}", Metric(self.accuracy()))?;
        writeln!(f, "Precision:   {}", Metric(self.precision()))?;
        write!(f, "Recall:      {}", Metric(self.recall()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(actual: u8, predicted: u8) -> PredictionRecord {
        PredictionRecord::new(
            Class::from_rating(actual).unwrap(),
            Class::from_rating(predicted).unwrap(),
        )
    }

    #[test]
    fn test_confusion_counts() {
        let cm = ConfusionMatrix::from_predictions(&[
            record(5, 4),
            record(4, 4),
            record(1, 5),
            record(2, 1),
            record(2, 2),
            record(5, 2),
        ]);
        assert_eq!(2, cm.true_positives());
        assert_eq!(1, cm.false_positives());
        assert_eq!(2, cm.true_negatives());
        assert_eq!(1, cm.false_negatives());
        assert_eq!(6, cm.total());
    }

    #[test]
    fn test_metrics() {
        let cm = ConfusionMatrix::from_predictions(&[
            record(5, 5),
            record(4, 5),
            record(4, 1),
            record(1, 4),
            record(1, 2),
        ]);
        assert!((cm.accuracy().unwrap() - 60.).abs() < 1e-9);
        assert!((cm.precision().unwrap() - 200. / 3.).abs() < 1e-9);
        assert!((cm.recall().unwrap() - 200. / 3.).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_metrics() {
        let cm = ConfusionMatrix::new();
        assert_eq!(None, cm.accuracy());
        assert_eq!(None, cm.precision());
        assert_eq!(None, cm.recall());

        let cm = ConfusionMatrix::from_predictions(&[record(1, 2), record(2, 1)]);
        assert_eq!(Some(100.), cm.accuracy());
        assert_eq!(None, cm.precision());
        assert_eq!(None, cm.recall());
    }

    #[test]
    fn test_accuracy_range() {
        let mut cm = ConfusionMatrix::new();
        for (a, p) in [(1, 5), (2, 4), (4, 1), (5, 2)] {
            cm.add(record(a, p));
            let accuracy = cm.accuracy().unwrap();
            assert!((0. ..=100.).contains(&accuracy));
        }
        assert_eq!(Some(0.), cm.accuracy());
    }

    #[test]
    fn test_display() {
        let cm = ConfusionMatrix::from_predictions(&[record(5, 4), record(1, 1)]);
        assert_eq!(
            "True +ves:   1\n\
             False +ves:  0\n\
             True -ves:   1\n\
             False -ves:  0\n\
             Accuracy:    100\n\
             Precision:   100\n\
             Recall:      100",
            cm.to_string()
        );
        assert!(ConfusionMatrix::new()
            .to_string()
            .ends_with("Recall:      undefined"));
        assert_eq!("5 4", record(5, 4).to_string());
    }
}
