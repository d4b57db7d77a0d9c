pub mod similarity;
pub mod tokenizer;
pub mod vector_space;

pub use similarity::{cosine_similarity, score_corpus};
pub use vector_space::{TermVector, VectorSpace};
