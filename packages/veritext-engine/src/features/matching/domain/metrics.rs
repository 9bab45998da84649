//! Similarity Metrics
//!
//! Whole-text similarity measures used by the score combiner and the
//! paraphrase detector:
//! - Cosine similarity (word-frequency vectors)
//! - Jaccard similarity (word sets)
//!
//! Both tokenize through the normalizer, so casing and punctuation never
//! influence the scores.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::normalize::TextNormalizer;

/// Cosine similarity over word-frequency vectors
///
/// cos(A, B) = (A · B) / (||A|| * ||B||)
///
/// Vectors span the union vocabulary of both texts. Returns a value in
/// [0.0, 1.0]; 0.0 when either vector has zero magnitude (no usable words).
pub fn cosine_similarity(text1: &str, text2: &str) -> f64 {
    let words1 = TextNormalizer::split_into_words(text1);
    let words2 = TextNormalizer::split_into_words(text2);

    // Union vocabulary with stable indices
    let mut vocab: FxHashMap<&str, usize> = FxHashMap::default();
    for word in words1.iter().chain(words2.iter()) {
        let next = vocab.len();
        vocab.entry(word.as_str()).or_insert(next);
    }

    let mut vec1 = vec![0.0f64; vocab.len()];
    let mut vec2 = vec![0.0f64; vocab.len()];
    for word in &words1 {
        vec1[vocab[word.as_str()]] += 1.0;
    }
    for word in &words2 {
        vec2[vocab[word.as_str()]] += 1.0;
    }

    let dot: f64 = vec1.iter().zip(vec2.iter()).map(|(a, b)| a * b).sum();
    let norm1: f64 = vec1.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm2: f64 = vec2.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    (dot / (norm1 * norm2)).clamp(0.0, 1.0)
}

/// Jaccard similarity over word sets
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
///
/// Returns a value in [0.0, 1.0]; 0.0 when the union is empty.
pub fn jaccard_similarity(text1: &str, text2: &str) -> f64 {
    let set1: FxHashSet<String> = TextNormalizer::split_into_words(text1).into_iter().collect();
    let set2: FxHashSet<String> = TextNormalizer::split_into_words(text2).into_iter().collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    intersection as f64 / union as f64
}
