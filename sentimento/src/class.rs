use std::fmt;

use bincode::{Decode, Encode};

/// The number of sentiment classes.
pub const N_CLASSES: usize = 4;

/// Sentiment class of a review.
///
/// Reviews are rated from 1 to 5. Neutral reviews (rating 3) do not belong to any class.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Decode, Encode)]
#[repr(u8)]
pub enum Class {
    /// Rating 1.
    VeryNegative = 0,

    /// Rating 2.
    Negative = 1,

    /// Rating 4.
    Positive = 2,

    /// Rating 5.
    VeryPositive = 3,
}

impl Class {
    /// All classes in index order.
    pub const ALL: [Self; N_CLASSES] = [
        Self::VeryNegative,
        Self::Negative,
        Self::Positive,
        Self::VeryPositive,
    ];

    /// Gets a class of a given rating.
    ///
    /// # Arguments
    ///
    /// * `rating` - A review rating.
    ///
    /// # Returns
    ///
    /// A class, or [`None`] if the rating is neutral or out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentimento::Class;
    ///
    /// assert_eq!(Some(Class::Positive), Class::from_rating(4));
    /// assert_eq!(None, Class::from_rating(3));
    /// ```
    pub const fn from_rating(rating: u8) -> Option<Self> {
        match rating {
            1 => Some(Self::VeryNegative),
            2 => Some(Self::Negative),
            4 => Some(Self::Positive),
            5 => Some(Self::VeryPositive),
            _ => None,
        }
    }

    /// Gets a class of a given dense index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < N_CLASSES {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the rating this class stands for.
    pub const fn rating(self) -> u8 {
        match self {
            Self::VeryNegative => 1,
            Self::Negative => 2,
            Self::Positive => 4,
            Self::VeryPositive => 5,
        }
    }

    /// Returns the dense index of this class.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` if this class lies in the upper half of the ordered classes.
    pub const fn is_positive(self) -> bool {
        self.index() >= N_CLASSES / 2
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_roundtrip() {
        for (i, &c) in Class::ALL.iter().enumerate() {
            assert_eq!(i, c.index());
            assert_eq!(Some(c), Class::from_index(i));
        }
        assert_eq!(None, Class::from_index(N_CLASSES));
    }

    #[test]
    fn test_class_from_rating() {
        assert_eq!(Some(Class::VeryNegative), Class::from_rating(1));
        assert_eq!(Some(Class::Negative), Class::from_rating(2));
        assert_eq!(None, Class::from_rating(3));
        assert_eq!(Some(Class::Positive), Class::from_rating(4));
        assert_eq!(Some(Class::VeryPositive), Class::from_rating(5));
        assert_eq!(None, Class::from_rating(0));
        assert_eq!(None, Class::from_rating(6));
    }

    #[test]
    fn test_class_polarity() {
        assert!(!Class::VeryNegative.is_positive());
        assert!(!Class::Negative.is_positive());
        assert!(Class::Positive.is_positive());
        assert!(Class::VeryPositive.is_positive());
    }

    #[test]
    fn test_class_display() {
        assert_eq!("5", Class::VeryPositive.to_string());
    }
}
