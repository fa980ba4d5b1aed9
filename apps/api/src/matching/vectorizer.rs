//! Vocabulary Vectorizer — TF-IDF over whole skill phrases.
//!
//! A term here is an entire comma-delimited skill ("machine learning" is one
//! dimension, not two), lowercased for comparison. The model is fit once over
//! the job corpus at startup and reused for every query; the query never
//! participates in the fit, so scores are stable across requests.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Vocabulary plus IDF weights, fit from the corpus skill documents.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    /// skill phrase (lowercased) → stable dimension index, first-seen order
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
}

/// An L2-normalized sparse vector in the model's dimension space.
/// Weights are sorted by dimension so the dot product is a linear merge.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    weights: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product of two unit vectors, i.e. their cosine similarity.
    /// Either side being the zero vector yields 0, never NaN.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.weights.len() && j < other.weights.len() {
            let (da, wa) = self.weights[i];
            let (db, wb) = other.weights[j];
            match da.cmp(&db) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

impl TfIdfModel {
    /// Fits vocabulary and IDF weights from the corpus skill sets only.
    ///
    /// IDF is the smoothed form `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit(corpus_skillsets: &[Vec<String>]) -> Self {
        let n = corpus_skillsets.len() as f64;
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for skillset in corpus_skillsets {
            let unique: HashSet<String> =
                skillset.iter().map(|s| s.to_lowercase()).collect();
            for term in unique {
                let next_dim = vocabulary.len();
                match vocabulary.entry(term) {
                    Entry::Occupied(entry) => doc_freq[*entry.get()] += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(next_dim);
                        doc_freq.push(1);
                    }
                }
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        TfIdfModel { vocabulary, idf }
    }

    /// Transforms a skill token sequence into an L2-normalized TF-IDF vector.
    /// Out-of-vocabulary terms contribute nothing; an empty skill set yields
    /// the zero vector.
    pub fn transform(&self, skillset: &[String]) -> SparseVector {
        let mut tf: HashMap<usize, f64> = HashMap::new();
        for skill in skillset {
            if let Some(&idx) = self.vocabulary.get(&skill.to_lowercase()) {
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f64)> = tf
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        weights.sort_unstable_by_key(|&(idx, _)| idx);

        let norm: f64 = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }

        SparseVector { weights }
    }

    pub fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skillset(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fit_builds_one_dimension_per_distinct_phrase() {
        let corpus = vec![
            skillset(&["sql", "excel"]),
            skillset(&["python", "machine learning", "sql"]),
        ];
        let model = TfIdfModel::fit(&corpus);
        // "machine learning" is one atomic dimension, not two
        assert_eq!(model.dimensions(), 4);
    }

    #[test]
    fn test_terms_compare_case_insensitively() {
        let corpus = vec![skillset(&["SQL", "Excel"])];
        let model = TfIdfModel::fit(&corpus);
        let upper = model.transform(&skillset(&["SQL"]));
        let lower = model.transform(&skillset(&["sql"]));
        assert_eq!(upper, lower);
        assert!(!upper.is_zero());
    }

    #[test]
    fn test_transform_is_unit_length() {
        let corpus = vec![
            skillset(&["sql", "excel"]),
            skillset(&["python", "ml", "sql"]),
        ];
        let model = TfIdfModel::fit(&corpus);
        let vec = model.transform(&skillset(&["python", "sql"]));
        let norm: f64 = vec.weights.iter().map(|(_, w)| w * w).sum::<f64>();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_terms_contribute_zero_weight() {
        let corpus = vec![skillset(&["sql", "excel"])];
        let model = TfIdfModel::fit(&corpus);
        let vec = model.transform(&skillset(&["cobol", "fortran"]));
        assert!(vec.is_zero());
    }

    #[test]
    fn test_empty_skillset_is_zero_vector() {
        let corpus = vec![skillset(&["sql"])];
        let model = TfIdfModel::fit(&corpus);
        let vec = model.transform(&[]);
        assert!(vec.is_zero());
        assert_eq!(vec.dot(&model.transform(&skillset(&["sql"]))), 0.0);
    }

    #[test]
    fn test_duplicate_mentions_amplify_term_frequency() {
        let corpus = vec![
            skillset(&["sql", "excel"]),
            skillset(&["python", "excel"]),
        ];
        let model = TfIdfModel::fit(&corpus);
        let once = model.transform(&skillset(&["sql", "excel"]));
        let twice = model.transform(&skillset(&["sql", "sql", "excel"]));
        let reference = model.transform(&skillset(&["sql"]));
        // More mentions of "sql" pull the vector closer to pure "sql"
        assert!(twice.dot(&reference) > once.dot(&reference));
    }

    #[test]
    fn test_rarer_term_carries_more_weight() {
        // "sql" appears in both documents, "figma" in one
        let corpus = vec![
            skillset(&["sql", "figma"]),
            skillset(&["sql", "excel"]),
        ];
        let model = TfIdfModel::fit(&corpus);
        let doc = model.transform(&skillset(&["sql", "figma"]));
        let sql_probe = model.transform(&skillset(&["sql"]));
        let figma_probe = model.transform(&skillset(&["figma"]));
        assert!(doc.dot(&figma_probe) > doc.dot(&sql_probe));
    }

    #[test]
    fn test_dot_is_symmetric() {
        let corpus = vec![
            skillset(&["sql", "excel"]),
            skillset(&["python", "sql"]),
        ];
        let model = TfIdfModel::fit(&corpus);
        let a = model.transform(&skillset(&["sql", "excel"]));
        let b = model.transform(&skillset(&["python", "sql"]));
        assert!((a.dot(&b) - b.dot(&a)).abs() < 1e-12);
    }
}
