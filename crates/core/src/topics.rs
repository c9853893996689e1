//! Health information topics.
//!
//! Six static articles, listed in display order. Health-info answers point at them by id.

use std::sync::LazyLock;

use api_shared::wire::{HealthInfoRes, HealthTopic};

use crate::responder::health_info_reply;
use crate::{PortalError, PortalResult};

fn topic(id: &str, title: &str, description: &str, content: &str) -> HealthTopic {
    HealthTopic {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
    }
}

static TOPICS: LazyLock<Vec<HealthTopic>> = LazyLock::new(|| {
    vec![
        topic(
            "tb",
            "Tuberculosis (TB)",
            "Information about TB symptoms, prevention, and treatment",
            r#"Tuberculosis (TB) is a bacterial infection that primarily affects the lungs. It is caused by Mycobacterium tuberculosis.

Symptoms:
- Persistent cough that lasts more than 3 weeks
- Coughing up blood or mucus
- Chest pain, or pain with breathing or coughing
- Unintentional weight loss
- Fatigue
- Fever
- Night sweats
- Chills
- Loss of appetite

Prevention:
- BCG vaccination for children
- Early detection and treatment
- Good ventilation in homes and workplaces
- Covering mouth when coughing or sneezing

Treatment:
- TB is treated with antibiotics for at least 6 months
- It's essential to complete the full course of treatment
- Directly Observed Treatment (DOT) may be used to ensure medication adherence"#,
        ),
        topic(
            "hiv",
            "HIV/AIDS",
            "Resources for HIV prevention, testing, and management",
            r#"HIV (Human Immunodeficiency Virus) is a virus that attacks the body's immune system. If not treated, it can lead to AIDS (Acquired Immunodeficiency Syndrome).

Symptoms:
- Many people don't have symptoms in the early stages
- Flu-like symptoms within 2-4 weeks after infection
- Later symptoms include weight loss, fever, night sweats, and fatigue

Prevention:
- Using condoms during sex
- Not sharing needles
- Pre-exposure prophylaxis (PrEP) for high-risk individuals
- Post-exposure prophylaxis (PEP) within 72 hours of potential exposure

Testing:
- Regular testing is recommended for those at risk
- Home testing kits are available
- Free testing is available at many clinics

Treatment:
- Antiretroviral therapy (ART) can control the virus
- With proper treatment, people with HIV can live long, healthy lives
- Treatment also prevents transmission to others"#,
        ),
        topic(
            "malaria",
            "Malaria",
            "Prevention and treatment of malaria in endemic areas",
            r#"Malaria is a serious disease caused by a parasite that is transmitted through the bite of infected mosquitoes.

Symptoms:
- Fever
- Chills
- Headache
- Nausea and vomiting
- Muscle pain and fatigue

Prevention:
- Use insecticide-treated bed nets
- Apply mosquito repellent
- Wear long-sleeved clothing
- Take antimalarial medications when traveling to endemic areas
- Eliminate standing water where mosquitoes breed

Treatment:
- Early diagnosis and treatment is critical
- Antimalarial medications
- Supportive care for complications"#,
        ),
        topic(
            "common-illnesses",
            "Common Illnesses",
            "Information about common illnesses and self-care",
            r#"Common illnesses include colds, flu, diarrhea, and minor infections. Many can be managed at home with proper care.

Cold and Flu:
- Rest and stay hydrated
- Over-the-counter medications for symptom relief
- Wash hands frequently to prevent spread

Diarrhea:
- Stay hydrated with water and electrolyte solutions
- Eat bland foods
- Seek medical attention if severe or persistent

Fever:
- Rest and stay cool
- Take appropriate fever reducers
- Seek medical attention for high or persistent fevers

When to seek medical help:
- Symptoms persist or worsen after several days
- High fever (above 39°C/102°F)
- Difficulty breathing
- Severe pain
- Confusion or unusual drowsiness"#,
        ),
        topic(
            "medications",
            "Medications Guide",
            "Information about common medications and proper usage",
            r#"Proper medication use is important for effective treatment and to avoid complications.

General Guidelines:
- Always follow prescription instructions
- Complete the full course of antibiotics
- Store medications properly
- Check expiration dates
- Don't share prescription medications

Common Medications:
- Painkillers: Paracetamol, ibuprofen
- Antibiotics: Only use when prescribed for bacterial infections
- Antimalarials: Follow dosing schedule exactly
- ARVs: Take consistently at the same time each day

Side Effects:
- All medications can have side effects
- Report severe side effects to a healthcare provider
- Don't stop medication without consulting a healthcare provider"#,
        ),
        topic(
            "preventive-care",
            "Preventive Care",
            "Tips for staying healthy and preventing illness",
            r#"Preventive care helps you stay healthy and catch potential health problems early.

Vaccinations:
- Keep vaccinations up to date for all family members
- Follow the recommended childhood vaccination schedule
- Get seasonal flu vaccines

Regular Check-ups:
- Annual health examinations
- Regular blood pressure checks
- TB screening in high-risk areas
- HIV testing as recommended

Healthy Lifestyle:
- Balanced diet rich in fruits and vegetables
- Regular physical activity
- Adequate sleep
- Stress management
- Avoid smoking and limit alcohol

Hygiene:
- Regular handwashing
- Safe food preparation
- Clean drinking water
- Proper waste disposal"#,
        ),
    ]
});

/// All topics in display order.
pub fn all_topics() -> &'static [HealthTopic] {
    &TOPICS
}

/// Look up a topic by id.
///
/// # Errors
///
/// Returns [`PortalError::NotFound`] if no topic has the given id.
pub fn find_topic(id: &str) -> PortalResult<HealthTopic> {
    TOPICS
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .ok_or_else(|| PortalError::NotFound("Topic not found".into()))
}

/// Answer a health question and attach the related topic, if the matching rule names one.
///
/// # Errors
///
/// Returns [`PortalError::Validation`] if the question is blank.
pub fn answer_question(question: &str) -> PortalResult<HealthInfoRes> {
    let question = crate::validation::require_text(question, "Question is required")?;
    let reply = health_info_reply(question.as_str());

    let related_topic = match reply.related_topic_id.as_deref() {
        Some(id) => Some(find_topic(id)?),
        None => None,
    };

    Ok(HealthInfoRes {
        answer: reply.text,
        related_topic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_topics_in_display_order() {
        let ids: Vec<&str> = all_topics().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "tb",
                "hiv",
                "malaria",
                "common-illnesses",
                "medications",
                "preventive-care"
            ]
        );
    }

    #[test]
    fn find_topic_reports_missing_ids() {
        assert_eq!(find_topic("malaria").unwrap().title, "Malaria");
        assert!(matches!(
            find_topic("scurvy"),
            Err(PortalError::NotFound(_))
        ));
    }

    #[test]
    fn every_reply_topic_resolves() {
        for question in ["tb", "hiv", "malaria", "pill", "diet"] {
            let res = answer_question(question).unwrap();
            assert!(res.related_topic.is_some(), "question {question:?}");
        }
    }

    #[test]
    fn answer_carries_full_topic() {
        let res = answer_question("Is sputum a sign of TB?").unwrap();
        let topic = res.related_topic.unwrap();
        assert_eq!(topic.id, "tb");
        assert!(topic.content.starts_with("Tuberculosis (TB) is a bacterial infection"));
    }

    #[test]
    fn unmatched_question_has_no_topic() {
        let res = answer_question("broken arm").unwrap();
        assert!(res.related_topic.is_none());
    }

    #[test]
    fn blank_question_is_rejected() {
        let err = answer_question("  ").unwrap_err();
        assert!(matches!(err, PortalError::Validation(m) if m == "Question is required"));
    }
}
