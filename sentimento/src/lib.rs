#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Sentimento
//!
//! Sentimento is a Naive Bayes classifier of review sentiment.
//!
//! Reviews rated 1, 2, 4, and 5 are classified into four classes. Texts are split into tokens,
//! stop-words are removed, and the tokens are reduced with the Porter stemmer.
//!
//! ## Examples
//!
//! ```
//! use sentimento::{Class, Classifier, EventModel, StopWords, Tokenizer, Trainer};
//!
//! let tokenizer = Tokenizer::new(["the", "a"].into_iter().collect::<StopWords>());
//!
//! let mut trainer = Trainer::new(EventModel::Multinomial);
//! trainer.push_document(&tokenizer.tokenize("The sound is amazing"), Class::VeryPositive);
//! trainer.push_document(&tokenizer.tokenize("A waste of money"), Class::VeryNegative);
//! let model = trainer.train().unwrap();
//!
//! let classifier = Classifier::new(model);
//! let stems = tokenizer.tokenize("amazing sound");
//! assert_eq!(Class::VeryPositive, classifier.classify(&stems));
//! ```
//!
//! Models can be stored with [`Model::write()`] and loaded with [`Model::read()`].

mod class;
mod classifier;
mod estimator;
mod evaluator;
mod model;
mod tokenizer;
mod trainer;
mod utils;
mod vocabulary;

pub mod corpus;
pub mod errors;
pub mod pipeline;
pub mod stemmer;

pub use class::{Class, N_CLASSES};
pub use classifier::Classifier;
pub use estimator::{ClassStatistics, Estimator, EventModel, ProbabilityTable};
pub use evaluator::{ConfusionMatrix, PredictionRecord};
pub use model::Model;
pub use tokenizer::{StopWords, Tokenizer};
pub use trainer::Trainer;
pub use vocabulary::{Vocabulary, VocabularyEntry};
