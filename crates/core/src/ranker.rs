//! Ordering and de-duplication of match results.

use std::collections::HashMap;

use api_shared::wire::MatchResult;

/// Sorts results by likelihood, highest first.
///
/// The sort is stable: results with equal likelihood keep the order the matcher found them in.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.likelihood.cmp(&a.likelihood));
    results
}

/// Collapses repeated illnesses, keeping the most likely entry for each name.
///
/// Output order is the order in which each illness was first seen. On equal likelihood the
/// earlier entry wins.
pub fn dedup_by_illness(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut index_by_illness: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<MatchResult> = Vec::with_capacity(results.len());

    for result in results {
        match index_by_illness.get(&result.illness) {
            Some(&i) => {
                if result.likelihood > unique[i].likelihood {
                    unique[i] = result;
                }
            }
            None => {
                index_by_illness.insert(result.illness.clone(), unique.len());
                unique.push(result);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::wire::Severity;

    fn result(illness: &str, likelihood: u8) -> MatchResult {
        MatchResult {
            illness: illness.into(),
            likelihood,
            severity: Severity::Low,
            recommendation: format!("{illness}-{likelihood}"),
            seek_medical_attention: false,
        }
    }

    #[test]
    fn rank_orders_by_likelihood_descending() {
        let ranked = rank(vec![result("a", 10), result("b", 70), result("c", 40)]);
        let likelihoods: Vec<u8> = ranked.iter().map(|r| r.likelihood).collect();
        assert_eq!(likelihoods, vec![70, 40, 10]);
    }

    #[test]
    fn rank_is_stable_for_ties() {
        let ranked = rank(vec![
            result("first", 35),
            result("top", 60),
            result("second", 35),
            result("third", 35),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.illness.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn rank_output_is_non_increasing_for_matcher_output() {
        let ranked = rank(crate::matcher::analyze(
            "severe headache, chest pain, fatigue and a rash after travel",
            &[],
        ));
        assert!(ranked
            .windows(2)
            .all(|w| w[0].likelihood >= w[1].likelihood));
    }

    #[test]
    fn rank_handles_empty_input() {
        assert!(rank(vec![]).is_empty());
    }

    #[test]
    fn dedup_keeps_highest_likelihood_in_first_seen_order() {
        let unique = dedup_by_illness(vec![
            result("flu", 20),
            result("cold", 50),
            result("flu", 45),
            result("cold", 50),
        ]);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].illness, "flu");
        assert_eq!(unique[0].likelihood, 45);
        assert_eq!(unique[1].illness, "cold");
        assert_eq!(unique[1].recommendation, "cold-50");
    }
}
