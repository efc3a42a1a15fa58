pub mod config;
pub mod error;
pub mod lemmatizer;
pub mod lexical;
pub mod metrics;
pub mod pos_tagger;
pub mod preprocess;
pub mod sentence_splitter;
pub mod sentiment;
pub mod syllables;

// Re-export main types for convenient access
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use lexical::{LexiconSet, StopwordSet};
pub use metrics::{MetricsAccumulator, MetricsRecord, TextAnalyzer};
pub use preprocess::{PreprocessedSentence, Preprocessor};
pub use sentence_splitter::SentenceSplitter;
pub use sentiment::sentiment_scores;
