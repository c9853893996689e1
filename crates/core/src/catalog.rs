//! The condition catalog.
//!
//! A fixed, two-level rule tree. Each top-level [`ConditionRule`] fires when the evaluation text
//! contains any of its keywords; its [`SubRule`]s are only considered once the parent fired and
//! fire when their own keywords are also present. A rule may emit several conditions, or none
//! at all when it exists purely to gate its sub-rules.
//!
//! Rule order and condition order within a rule are significant: they define the match order the
//! ranker uses to break likelihood ties.

use std::sync::LazyLock;

use api_shared::wire::{MatchResult, Severity};
use regex::Regex;

/// Static description of a condition a rule can emit.
#[derive(Clone, Copy, Debug)]
pub struct Condition {
    pub illness: &'static str,
    pub likelihood: u8,
    pub severity: Severity,
    pub recommendation: &'static str,
    pub seek_medical_attention: bool,
}

impl Condition {
    pub fn to_result(&self) -> MatchResult {
        MatchResult {
            illness: self.illness.to_string(),
            likelihood: self.likelihood,
            severity: self.severity,
            recommendation: self.recommendation.to_string(),
            seek_medical_attention: self.seek_medical_attention,
        }
    }
}

/// Case-insensitive "contains any of these keywords" test.
#[derive(Debug)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    fn new(keywords: &'static [&'static str]) -> Self {
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            regex: Regex::new(&format!("(?i)(?:{alternation})"))
                .expect("Invalid condition catalog pattern"),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// A rule that is only evaluated after its parent rule matched.
#[derive(Debug)]
pub struct SubRule {
    pub pattern: KeywordPattern,
    pub conditions: Vec<Condition>,
}

/// A top-level catalog rule.
#[derive(Debug)]
pub struct ConditionRule {
    /// Human-readable category label, used in logs only.
    pub category: &'static str,
    pub pattern: KeywordPattern,
    pub conditions: Vec<Condition>,
    pub sub_rules: Vec<SubRule>,
}

const fn condition(
    illness: &'static str,
    likelihood: u8,
    severity: Severity,
    recommendation: &'static str,
    seek_medical_attention: bool,
) -> Condition {
    Condition {
        illness,
        likelihood,
        severity,
        recommendation,
        seek_medical_attention,
    }
}

fn rule(
    category: &'static str,
    keywords: &'static [&'static str],
    conditions: Vec<Condition>,
    sub_rules: Vec<SubRule>,
) -> ConditionRule {
    ConditionRule {
        category,
        pattern: KeywordPattern::new(keywords),
        conditions,
        sub_rules,
    }
}

fn sub_rule(keywords: &'static [&'static str], conditions: Vec<Condition>) -> SubRule {
    SubRule {
        pattern: KeywordPattern::new(keywords),
        conditions,
    }
}

static CATALOG: LazyLock<Vec<ConditionRule>> = LazyLock::new(|| {
    use Severity::{High, Low, Medium};

    vec![
        rule(
            "cold and flu",
            &[
                "fever",
                "temperature",
                "chills",
                "sweating",
                "cough",
                "sore throat",
                "runny nose",
                "congestion",
            ],
            vec![
                condition(
                    "Common Cold",
                    65,
                    Low,
                    "Rest, drink fluids, and take over-the-counter cold medications if needed.",
                    false,
                ),
                condition(
                    "Influenza",
                    45,
                    Medium,
                    "Rest, stay hydrated, and take fever reducers. Monitor symptoms for worsening.",
                    false,
                ),
            ],
            vec![],
        ),
        rule(
            "respiratory",
            &[
                "cough",
                "phlegm",
                "mucus",
                "chest",
                "breathing",
                "shortness of breath",
                "wheezing",
            ],
            vec![condition(
                "Bronchitis",
                40,
                Medium,
                "Rest, use a humidifier, and drink plenty of fluids. Avoid smoke and pollutants.",
                false,
            )],
            vec![
                sub_rule(
                    &["night", "sweat", "weight loss", "fatigue", "persistent"],
                    vec![condition(
                        "Tuberculosis",
                        25,
                        High,
                        "Seek medical attention for proper diagnosis and treatment.",
                        true,
                    )],
                ),
                sub_rule(
                    &[
                        "wheezing",
                        "shortness of breath",
                        "chest tightness",
                        "difficulty breathing",
                    ],
                    vec![condition(
                        "Asthma",
                        35,
                        Medium,
                        "Use prescribed inhalers if available. Avoid triggers. Seek medical attention if breathing becomes difficult.",
                        false,
                    )],
                ),
            ],
        ),
        rule(
            "head",
            &["headache", "pain", "pressure", "sinus", "nasal"],
            vec![condition(
                "Sinusitis",
                55,
                Low,
                "Use saline nasal spray, take decongestants, and apply warm compresses.",
                false,
            )],
            vec![
                sub_rule(
                    &["severe", "worst", "vomiting", "stiff neck", "light", "sensitivity"],
                    vec![condition(
                        "Meningitis",
                        15,
                        High,
                        "Seek immediate medical attention for diagnosis and treatment.",
                        true,
                    )],
                ),
                sub_rule(
                    &[
                        "migraine",
                        "aura",
                        "visual",
                        "nausea",
                        "light sensitivity",
                        "sound sensitivity",
                    ],
                    vec![condition(
                        "Migraine",
                        50,
                        Medium,
                        "Rest in a dark, quiet room. Take prescribed migraine medication if available.",
                        false,
                    )],
                ),
            ],
        ),
        rule(
            "gastrointestinal",
            &["diarrhea", "vomiting", "nausea", "stomach", "abdominal", "pain"],
            vec![condition(
                "Gastroenteritis",
                70,
                Medium,
                "Stay hydrated, eat bland foods, and rest. Seek medical attention if symptoms persist.",
                false,
            )],
            vec![
                sub_rule(
                    &["blood in stool", "black stool", "severe pain", "persistent"],
                    vec![condition(
                        "Gastrointestinal Bleeding",
                        20,
                        High,
                        "Seek immediate medical attention.",
                        true,
                    )],
                ),
                sub_rule(
                    &[
                        "heartburn",
                        "acid reflux",
                        "chest pain",
                        "bitter taste",
                        "regurgitation",
                    ],
                    vec![condition(
                        "Gastroesophageal Reflux Disease (GERD)",
                        45,
                        Low,
                        "Avoid trigger foods, eat smaller meals, don't lie down after eating, and consider over-the-counter antacids.",
                        false,
                    )],
                ),
            ],
        ),
        rule(
            "skin",
            &["rash", "itching", "skin", "spots", "bumps"],
            vec![condition(
                "Contact Dermatitis",
                60,
                Low,
                "Avoid irritants, use anti-itch creams, and take antihistamines if needed.",
                false,
            )],
            vec![
                sub_rule(
                    &["fever", "joint pain", "muscle pain", "headache"],
                    vec![condition(
                        "Measles",
                        20,
                        High,
                        "Seek medical attention for diagnosis and treatment.",
                        true,
                    )],
                ),
                sub_rule(
                    &["blisters", "painful", "cluster", "tingling"],
                    vec![condition(
                        "Herpes Zoster (Shingles)",
                        30,
                        Medium,
                        "Seek medical attention for antiviral medication, especially if caught early.",
                        true,
                    )],
                ),
            ],
        ),
        rule(
            "infectious",
            &["fever", "fatigue", "joint pain", "muscle pain", "headache", "rash"],
            vec![],
            vec![sub_rule(
                &["mosquito", "tropical", "travel"],
                vec![
                    condition(
                        "Malaria",
                        35,
                        High,
                        "Seek immediate medical attention for testing and treatment.",
                        true,
                    ),
                    condition(
                        "Dengue Fever",
                        30,
                        High,
                        "Seek medical attention. Stay hydrated and take fever reducers (avoid aspirin).",
                        true,
                    ),
                ],
            )],
        ),
        rule(
            "diabetes",
            &["thirst", "frequent urination", "weight loss", "fatigue", "hunger"],
            vec![condition(
                "Diabetes",
                40,
                High,
                "Seek medical attention for proper diagnosis and management.",
                true,
            )],
            vec![],
        ),
        rule(
            "heart failure",
            &["chest pain", "shortness of breath", "fatigue", "swelling", "legs"],
            vec![condition(
                "Heart Failure",
                25,
                High,
                "Seek immediate medical attention.",
                true,
            )],
            vec![],
        ),
        rule(
            "hypertension",
            &[
                "headache",
                "dizziness",
                "blurred vision",
                "chest pain",
                "shortness of breath",
            ],
            vec![condition(
                "Hypertension (High Blood Pressure)",
                35,
                High,
                "Seek medical attention for proper diagnosis and management.",
                true,
            )],
            vec![],
        ),
    ]
});

/// The full catalog, in evaluation order.
pub fn catalog() -> &'static [ConditionRule] {
    &CATALOG
}

/// Synthetic result returned when nothing in the catalog matches.
pub fn unknown_condition() -> MatchResult {
    condition(
        crate::constants::UNKNOWN_CONDITION,
        crate::constants::UNKNOWN_CONDITION_LIKELIHOOD,
        Severity::Medium,
        "Monitor your symptoms. If they persist or worsen, consult a healthcare provider.",
        false,
    )
    .to_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_case_insensitive() {
        let pattern = KeywordPattern::new(&["sore throat", "cough"]);
        assert!(pattern.matches("Sore Throat since Monday"));
        assert!(pattern.matches("COUGHING"));
        assert!(!pattern.matches("sore neck"));
    }

    #[test]
    fn keywords_are_matched_literally() {
        let pattern = KeywordPattern::new(&["gerd (reflux)"]);
        assert!(pattern.matches("possible GERD (reflux)"));
        assert!(!pattern.matches("gerd reflux"));
    }

    #[test]
    fn likelihoods_stay_in_percent_range() {
        for rule in catalog() {
            let subs = rule.sub_rules.iter().flat_map(|s| s.conditions.iter());
            for condition in rule.conditions.iter().chain(subs) {
                assert!(
                    condition.likelihood <= 100,
                    "{} has likelihood {}",
                    condition.illness,
                    condition.likelihood
                );
            }
        }
    }

    #[test]
    fn gate_only_rules_have_sub_rules() {
        for rule in catalog() {
            if rule.conditions.is_empty() {
                assert!(!rule.sub_rules.is_empty(), "{} emits nothing", rule.category);
            }
        }
    }
}
