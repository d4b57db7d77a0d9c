use std::collections::{HashMap, HashSet};

use super::tokenizer::tokenize;

/// Dense TF-IDF weighted term vector, L2-normalized at construction.
pub type TermVector = Vec<f64>;

/// Vector space fitted over one pool of texts at request time. The space is
/// immutable once fitted; query vectors are only comparable to corpus
/// vectors produced by the same instance.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    corpus: Vec<TermVector>,
}

impl VectorSpace {
    /// Build vocabulary, smoothed IDF weights and normalized corpus vectors
    /// over the pool texts, one vector per text in pool order.
    pub fn fit(texts: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                let index = match vocabulary.get(term) {
                    Some(&index) => index,
                    None => {
                        let index = vocabulary.len();
                        vocabulary.insert(term.to_string(), index);
                        document_frequency.push(0);
                        index
                    }
                };
                document_frequency[index] += 1;
            }
        }

        let total = texts.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + total) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let corpus = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            corpus,
        }
    }

    /// Project a query text into the fitted vocabulary. Unknown tokens are
    /// dropped; known tokens reuse the fitted IDF weights.
    pub fn project(&self, text: &str) -> TermVector {
        weigh(&tokenize(text), &self.vocabulary, &self.idf)
    }

    /// A space fitted over texts that produced no tokens at all. Similarity
    /// against it is always zero, never an error.
    pub fn is_degenerate(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn corpus(&self) -> &[TermVector] {
        &self.corpus
    }

    pub fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}

fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f64]) -> TermVector {
    let mut vector = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(&index) = vocabulary.get(token) {
            vector[index] += idf[index];
        }
    }
    l2_normalize(&mut vector);
    vector
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.iter_mut() {
            *weight /= norm;
        }
    }
}
