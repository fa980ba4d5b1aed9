//! Match Result Assembler — joins ranked (index, score) pairs back to the
//! corpus records they point at, preserving the ranker's order exactly.

use crate::matching::{JobRecord, MatchError, MatchResult};

/// Pure join. `IndexOutOfRange` is a consistency defect between ranker and
/// assembler, unreachable when both ran against the same corpus snapshot.
pub fn assemble(
    ranked: &[(usize, f64)],
    corpus: &[JobRecord],
) -> Result<Vec<MatchResult>, MatchError> {
    ranked
        .iter()
        .map(|&(job_index, score)| {
            let record = corpus.get(job_index).ok_or(MatchError::IndexOutOfRange {
                index: job_index,
                len: corpus.len(),
            })?;
            Ok(MatchResult {
                job_index,
                title: record.title.clone(),
                skills: record.skills.clone(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: "Data Analyst".to_string(),
                skills: vec!["sql".to_string(), "excel".to_string()],
            },
            JobRecord {
                title: "ML Engineer".to_string(),
                skills: vec!["python".to_string(), "ml".to_string()],
            },
        ]
    }

    #[test]
    fn test_join_preserves_order_and_fields() {
        let results = assemble(&[(1, 0.9), (0, 0.4)], &corpus()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].job_index, 1);
        assert_eq!(results[0].title, "ML Engineer");
        assert_eq!(results[0].skills, vec!["python", "ml"]);
        assert_eq!(results[0].score, 0.9);
        assert_eq!(results[1].job_index, 0);
        assert_eq!(results[1].title, "Data Analyst");
    }

    #[test]
    fn test_out_of_range_index_is_a_defect() {
        let err = assemble(&[(5, 0.1)], &corpus()).unwrap_err();
        assert!(matches!(
            err,
            MatchError::IndexOutOfRange { index: 5, len: 2 }
        ));
    }

    #[test]
    fn test_empty_ranking_yields_empty_results() {
        assert!(assemble(&[], &corpus()).unwrap().is_empty());
    }
}
