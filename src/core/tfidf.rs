use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Hard cap on vocabulary size so vectorization stays bounded
/// regardless of batch size.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Errors that can occur during batch vectorization
#[derive(Debug, Error)]
pub enum VectorizeError {
    #[error("empty vocabulary: every document in the batch normalized to nothing")]
    EmptyVocabulary,
}

/// Common English stop words, excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am",
    "an", "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "cannot",
    "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "ever", "every", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "much", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "upon",
    "us", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "within", "without",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Sparse, L2-normalized TF-IDF vector for a single document.
///
/// Keys index into the batch-local vocabulary; documents whose every
/// term falls outside the vocabulary hold an empty map (zero vector).
#[derive(Debug, Clone)]
pub struct DocumentVector {
    weights: HashMap<u32, f64>,
}

/// Per-batch TF-IDF vectorizer over unigrams and bigrams.
///
/// The vocabulary is fit from exactly one batch of documents and is
/// never reused: scores are only meaningful relative to the batch they
/// were computed in. Callers construct a fresh vectorizer per request.
#[derive(Debug)]
pub struct TfidfVectorizer {
    max_features: usize,
    stop_words: HashSet<&'static str>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Fit the vocabulary on `documents` and return one L2-normalized
    /// TF-IDF vector per document, in input order.
    ///
    /// Uses the smooth-idf formulation: `idf = ln((1 + n) / (1 + df)) + 1`
    /// over raw term counts. When the joint vocabulary exceeds
    /// `max_features` it is truncated preferring terms with higher
    /// corpus-wide document frequency (ties broken lexicographically).
    pub fn fit_transform(
        &self,
        documents: &[String],
    ) -> Result<Vec<DocumentVector>, VectorizeError> {
        let term_counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|doc| self.count_terms(doc))
            .collect();

        let mut document_frequency: HashMap<&str, u32> = HashMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let (vocabulary, frequencies) = self.select_vocabulary(&document_frequency);

        let doc_count = documents.len() as f64;
        let idf: Vec<f64> = frequencies
            .iter()
            .map(|&df| ((1.0 + doc_count) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = term_counts
            .iter()
            .map(|counts| {
                let mut weights: HashMap<u32, f64> = HashMap::new();
                for (term, &count) in counts {
                    if let Some(&index) = vocabulary.get(term.as_str()) {
                        weights.insert(index, count as f64 * idf[index as usize]);
                    }
                }

                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in weights.values_mut() {
                        *weight /= norm;
                    }
                }

                DocumentVector { weights }
            })
            .collect();

        Ok(vectors)
    }

    /// Count unigram and bigram occurrences in one normalized document,
    /// skipping stop words. Bigrams are formed over the surviving token
    /// stream and keyed as the two tokens joined by a space.
    fn count_terms(&self, document: &str) -> HashMap<String, u32> {
        let tokens: Vec<&str> = document
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        let mut counts = HashMap::new();
        for token in &tokens {
            *counts.entry((*token).to_string()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
        counts
    }

    /// Assign vocabulary indices, truncating to `max_features` by
    /// descending document frequency. Returns the term-to-index map and
    /// the document frequency per index.
    fn select_vocabulary(
        &self,
        document_frequency: &HashMap<&str, u32>,
    ) -> (HashMap<String, u32>, Vec<u32>) {
        let mut terms: Vec<(&str, u32)> = document_frequency
            .iter()
            .map(|(&term, &df)| (term, df))
            .collect();

        if terms.len() > self.max_features {
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            terms.truncate(self.max_features);
        }

        // Deterministic index assignment
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut frequencies = Vec::with_capacity(terms.len());
        for (index, (term, df)) in terms.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index as u32);
            frequencies.push(df);
        }
        (vocabulary, frequencies)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

/// Cosine similarity between two L2-normalized vectors.
///
/// Reduces to the dot product since both vectors are unit length; the
/// result lies in [0, 1] because all weights are non-negative.
#[inline]
pub fn cosine_similarity(a: &DocumentVector, b: &DocumentVector) -> f64 {
    let (small, large) = if a.weights.len() <= b.weights.len() {
        (a, b)
    } else {
        (b, a)
    };

    let dot: f64 = small
        .weights
        .iter()
        .filter_map(|(index, weight)| large.weights.get(index).map(|other| weight * other))
        .sum();

    dot.min(1.0).max(0.0)
}
