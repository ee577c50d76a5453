//! Labeled corpus format.
//!
//! Each line is a review rating and a review text separated by a tab character:
//!
//! ```text
//! 5	Great sound for the price.
//! 1.0	Broke after a week.
//! ```

use crate::class::Class;
use crate::errors::{Result, SentimentoError};

/// A review text with its class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledDocument {
    pub class: Class,
    pub text: String,
}

impl LabeledDocument {
    pub fn new<S>(class: Class, text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            class,
            text: text.into(),
        }
    }
}

/// Parses a labeled line.
///
/// The rating is parsed as a floating-point number and truncated, so `4.0` and `4.5` are both
/// rating 4.
///
/// # Returns
///
/// A labeled document, or [`None`] if the review is neutral (rating 3).
///
/// # Errors
///
/// [`SentimentoError::InvalidArgument`] will be returned if the line has no tab character or the
/// rating is out of range. [`SentimentoError::ParseFloatError`] will be returned if the rating is
/// not a number.
///
/// # Examples
///
/// ```
/// use sentimento::corpus::parse_line;
/// use sentimento::Class;
///
/// let doc = parse_line("4.0\tWorks fine").unwrap().unwrap();
/// assert_eq!(Class::Positive, doc.class);
/// assert_eq!("Works fine", doc.text);
///
/// assert!(parse_line("3\tMeh").unwrap().is_none());
/// ```
pub fn parse_line(line: &str) -> Result<Option<LabeledDocument>> {
    let (rating, text) = line
        .split_once('\t')
        .ok_or_else(|| SentimentoError::invalid_argument("line", "no tab character"))?;
    let rating: f64 = rating.trim().parse()?;
    if !(1. ..6.).contains(&rating) {
        return Err(SentimentoError::invalid_argument(
            "line",
            format!("rating {rating} is out of range"),
        ));
    }
    let rating = rating as u8;
    if rating == 3 {
        return Ok(None);
    }
    // Ratings are 1..=5 here and 3 was handled above.
    let class = Class::from_rating(rating)
        .ok_or_else(|| SentimentoError::invalid_argument("line", "invalid rating"))?;
    Ok(Some(LabeledDocument::new(class, text)))
}
