//! Symptom matching against the condition catalog.

use api_shared::wire::{MatchResult, SymptomCheckReq, SymptomCheckRes};

use crate::catalog::{catalog, unknown_condition};
use crate::ranker::{dedup_by_illness, rank};

/// Joins the free-text description and the selected symptom labels into the single string the
/// catalog patterns are evaluated against. Blank parts are skipped.
pub fn evaluation_text(free_text: &str, selected_symptoms: &[String]) -> String {
    std::iter::once(free_text)
        .chain(selected_symptoms.iter().map(String::as_str))
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Evaluates symptom input against every catalog rule.
///
/// Results are emitted in catalog order: a rule's own conditions first, then the conditions of
/// each of its sub-rules that also matched. Nothing is merged, so the same illness can appear
/// more than once. When no rule matches the result is exactly one "Unknown Condition" entry.
pub fn analyze(free_text: &str, selected_symptoms: &[String]) -> Vec<MatchResult> {
    let text = evaluation_text(free_text, selected_symptoms);
    let mut results = Vec::new();

    for rule in catalog() {
        if !rule.pattern.matches(&text) {
            continue;
        }
        tracing::debug!(category = rule.category, "condition rule matched");
        results.extend(rule.conditions.iter().map(|c| c.to_result()));

        for sub_rule in &rule.sub_rules {
            if sub_rule.pattern.matches(&text) {
                results.extend(sub_rule.conditions.iter().map(|c| c.to_result()));
            }
        }
    }

    if results.is_empty() {
        results.push(unknown_condition());
    }

    results
}

/// Answer a symptom-checker request: matches ranked most likely first.
///
/// With `dedupe` set, each illness appears once at its highest likelihood.
pub fn check_symptoms(req: &SymptomCheckReq) -> SymptomCheckRes {
    let mut results = analyze(
        req.symptoms.as_deref().unwrap_or_default(),
        &req.selected_symptoms,
    );
    if req.dedupe {
        results = dedup_by_illness(results);
    }
    SymptomCheckRes {
        predictions: rank(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNKNOWN_CONDITION;

    fn illnesses(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.illness.as_str()).collect()
    }

    fn labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn evaluation_text_skips_blank_parts() {
        assert_eq!(
            evaluation_text("", &labels(&["Fever", " ", "Cough"])),
            "Fever, Cough"
        );
        assert_eq!(evaluation_text("tired", &[]), "tired");
    }

    #[test]
    fn fever_and_cough_include_cold_and_influenza() {
        for (text, selected) in [
            ("fever and cough", vec![]),
            ("", labels(&["Fever", "Cough"])),
            ("I have a FEVER", labels(&["cough"])),
        ] {
            let results = analyze(text, &selected);
            let names = illnesses(&results);
            assert!(names.contains(&"Common Cold"), "{names:?}");
            assert!(names.contains(&"Influenza"), "{names:?}");
        }
    }

    #[test]
    fn no_match_yields_single_unknown_condition() {
        for text in ["", "   ", "xyz", "green tongue"] {
            let results = analyze(text, &[]);
            assert_eq!(results.len(), 1, "input {text:?}");
            assert_eq!(results[0].illness, UNKNOWN_CONDITION);
            assert_eq!(results[0].likelihood, 30);
            assert!(!results[0].seek_medical_attention);
        }
    }

    #[test]
    fn sub_rules_require_parent_match() {
        // "travel" alone matches no parent, so the malaria gate is never opened.
        let results = analyze("recent travel", &[]);
        assert_eq!(illnesses(&results), vec![UNKNOWN_CONDITION]);

        let results = analyze("fever after travel to a tropical area", &[]);
        let names = illnesses(&results);
        assert!(names.contains(&"Malaria"));
        assert!(names.contains(&"Dengue Fever"));
    }

    #[test]
    fn sub_rule_results_follow_parent_results() {
        let results = analyze("cough with night sweats", &[]);
        let names = illnesses(&results);
        let bronchitis = names.iter().position(|n| *n == "Bronchitis").unwrap();
        let tb = names.iter().position(|n| *n == "Tuberculosis").unwrap();
        assert_eq!(tb, bronchitis + 1);
    }

    #[test]
    fn multiplicity_is_preserved() {
        // "pain" fires both the head and gastrointestinal rules; "chest pain" additionally
        // fires GERD, heart failure and hypertension. Every emission is kept.
        let results = analyze("chest pain", &[]);
        let names = illnesses(&results);
        assert_eq!(
            names,
            vec![
                "Bronchitis",
                "Sinusitis",
                "Gastroenteritis",
                "Gastroesophageal Reflux Disease (GERD)",
                "Heart Failure",
                "Hypertension (High Blood Pressure)",
            ]
        );
    }

    #[test]
    fn check_symptoms_ranks_and_optionally_dedupes() {
        let mut req = SymptomCheckReq {
            symptoms: Some("headache and a rash after travel".into()),
            selected_symptoms: vec![],
            dedupe: false,
        };
        let full = check_symptoms(&req).predictions;
        assert_eq!(full[0].illness, "Contact Dermatitis");

        req.dedupe = true;
        let unique = check_symptoms(&req).predictions;
        let mut names: Vec<&str> = unique.iter().map(|r| r.illness.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(unique.windows(2).all(|w| w[0].likelihood >= w[1].likelihood));
    }

    #[test]
    fn checkbox_selection_scenario() {
        let results = analyze("", &labels(&["Fever", "Cough", "Sore throat"]));
        assert_eq!(
            illnesses(&results),
            vec!["Common Cold", "Influenza", "Bronchitis"]
        );
    }
}
