//! First-match-wins keyword responders.
//!
//! A responder is an ordered list of `(trigger, reply)` rules. The input is lowercased once and
//! the first rule whose trigger fires decides the reply; later rules are never consulted. The
//! tables overlap on purpose ("fever" is a chatbot fever keyword and a health-info malaria
//! keyword, "cough" precedes "tb" in the chatbot), so the order below is part of the behaviour.

use std::sync::LazyLock;

use api_shared::wire::ChatbotRes;

use crate::validation::require_text;
use crate::PortalResult;

/// Substring trigger over lowercased input.
#[derive(Clone, Debug)]
pub enum Trigger {
    Keyword(&'static str),
    AnyOf(Vec<Trigger>),
    AllOf(Vec<Trigger>),
}

impl Trigger {
    /// Fires when any keyword occurs in the input.
    pub fn any(keywords: &[&'static str]) -> Self {
        Trigger::AnyOf(keywords.iter().copied().map(Trigger::Keyword).collect())
    }

    /// Fires when every keyword occurs in the input.
    pub fn all(keywords: &[&'static str]) -> Self {
        Trigger::AllOf(keywords.iter().copied().map(Trigger::Keyword).collect())
    }

    /// `lowered` must already be lowercase.
    pub fn fires(&self, lowered: &str) -> bool {
        match self {
            Trigger::Keyword(k) => lowered.contains(k),
            Trigger::AnyOf(triggers) => triggers.iter().any(|t| t.fires(lowered)),
            Trigger::AllOf(triggers) => triggers.iter().all(|t| t.fires(lowered)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct KeywordRule {
    pub trigger: Trigger,
    pub text: &'static str,
    pub related_topic_id: Option<&'static str>,
}

/// The reply chosen for an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub related_topic_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct KeywordResponder {
    rules: Vec<KeywordRule>,
    fallback: &'static str,
}

impl KeywordResponder {
    pub fn new(rules: Vec<KeywordRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Returns the reply of the first rule that fires, or the fallback with no related topic.
    pub fn respond(&self, input: &str) -> Reply {
        let lowered = input.to_lowercase();
        match self.rules.iter().find(|rule| rule.trigger.fires(&lowered)) {
            Some(rule) => Reply {
                text: rule.text.to_string(),
                related_topic_id: rule.related_topic_id.map(str::to_string),
            },
            None => Reply {
                text: self.fallback.to_string(),
                related_topic_id: None,
            },
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

fn reply(trigger: Trigger, text: &'static str) -> KeywordRule {
    KeywordRule {
        trigger,
        text,
        related_topic_id: None,
    }
}

fn answer(trigger: Trigger, text: &'static str, topic_id: &'static str) -> KeywordRule {
    KeywordRule {
        trigger,
        text,
        related_topic_id: Some(topic_id),
    }
}

pub const CHATBOT_GREETING: &str = "Hello! How can I assist with your health questions today?";

pub const CHATBOT_FALLBACK: &str = "I understand you're asking about health information. For more specific guidance, could you provide more details about your question or concern? I'm here to help with health information, but remember I'm not a replacement for professional medical advice.";

pub const HEALTH_INFO_FALLBACK: &str = "I don't have specific information about that health topic. Please consult a healthcare professional for accurate advice.";

static CHATBOT: LazyLock<KeywordResponder> = LazyLock::new(|| {
    KeywordResponder::new(
        vec![
            reply(Trigger::any(&["hello", "hi", "hey"]), CHATBOT_GREETING),
            reply(
                Trigger::AnyOf(vec![
                    Trigger::Keyword("headache"),
                    Trigger::all(&["head", "pain"]),
                ]),
                "Headaches can be caused by various factors including stress, dehydration, lack of sleep, or eye strain. For occasional headaches, rest, hydration, and over-the-counter pain relievers may help. If headaches are severe, persistent, or accompanied by other symptoms, please consult a healthcare provider.",
            ),
            reply(
                Trigger::any(&["fever", "temperature"]),
                "Fever is often a sign that your body is fighting an infection. Rest, stay hydrated, and take fever-reducing medication if needed. If the fever is high (above 39°C/102°F), persists for more than three days, or is accompanied by severe symptoms, please seek medical attention.",
            ),
            reply(
                Trigger::any(&["cough", "cold", "flu"]),
                "For coughs, colds, and flu-like symptoms, rest and hydration are important. Over-the-counter medications can help manage symptoms. If you have difficulty breathing, chest pain, or symptoms that worsen or don't improve after a week, please consult a healthcare provider.",
            ),
            reply(
                Trigger::any(&["tb", "tuberculosis"]),
                "Tuberculosis (TB) is a serious bacterial infection that mainly affects the lungs. Symptoms include persistent cough (often with blood), chest pain, fatigue, weight loss, fever, and night sweats. If you suspect TB, it's important to get tested at a clinic. TB is treatable with antibiotics, but the full course of treatment must be completed.",
            ),
            reply(
                Trigger::any(&["hiv", "aids"]),
                "HIV is a virus that attacks the immune system. Early testing and treatment are crucial. With proper antiretroviral therapy (ART), people with HIV can live long, healthy lives. If you're concerned about HIV, please visit a clinic for confidential testing and counseling.",
            ),
            reply(
                Trigger::any(&["clinic", "doctor", "hospital"]),
                "If you need to visit a clinic, you can use our Clinic Queue feature to find nearby clinics and join the queue remotely. This can help reduce your waiting time. Would you like me to help you find a clinic near you?",
            ),
            reply(
                Trigger::any(&["medicine", "medication", "pill"]),
                "It's important to take medications as prescribed by your healthcare provider. Our app can help you set up medication reminders. If you have questions about specific medications, please consult your healthcare provider or pharmacist.",
            ),
            reply(
                Trigger::Keyword("thank"),
                "You're welcome! If you have any other health questions, feel free to ask. I'm here to help.",
            ),
        ],
        CHATBOT_FALLBACK,
    )
});

static HEALTH_INFO: LazyLock<KeywordResponder> = LazyLock::new(|| {
    KeywordResponder::new(
        vec![
            answer(
                Trigger::any(&["tb", "tuberculosis", "cough", "lung", "sputum"]),
                "Tuberculosis (TB) is a bacterial infection that primarily affects the lungs. Common symptoms include a persistent cough lasting more than 3 weeks, coughing up blood, chest pain, weight loss, fatigue, fever, and night sweats. If you suspect TB, it's important to get tested at a clinic. TB is treatable with a course of antibiotics that typically lasts 6 months.",
                "tb",
            ),
            answer(
                Trigger::any(&["hiv", "aids", "cd4", "immune", "virus", "arv"]),
                "HIV is a virus that attacks the immune system. Many people don't have symptoms in early stages, but may experience flu-like symptoms 2-4 weeks after infection. HIV is preventable through safe sex practices and not sharing needles. It's manageable with antiretroviral therapy (ART), allowing people to live long, healthy lives. Regular testing is recommended for those at risk.",
                "hiv",
            ),
            answer(
                Trigger::any(&["malaria", "mosquito", "fever", "chills", "headache"]),
                "Malaria is caused by a parasite transmitted through mosquito bites. Symptoms include fever, chills, headache, nausea, and fatigue. Prevention methods include using insecticide-treated bed nets, applying mosquito repellent, and taking antimalarial medications when in endemic areas. If you suspect malaria, seek medical attention promptly as early treatment is critical.",
                "malaria",
            ),
            answer(
                Trigger::any(&["medicine", "medication", "pill", "drug", "dosage", "prescription"]),
                "Always follow prescription instructions when taking medications. Complete the full course of antibiotics even if you feel better. Store medications properly and check expiration dates. Don't share prescription medications with others. If you experience severe side effects, contact a healthcare provider immediately.",
                "medications",
            ),
            answer(
                Trigger::any(&["prevent", "healthy", "lifestyle", "exercise", "diet", "nutrition"]),
                "Preventive care includes staying up to date with vaccinations, getting regular check-ups, maintaining a healthy lifestyle with a balanced diet and regular physical activity, practicing good hygiene, and avoiding risky behaviors like smoking. Regular screenings can help catch potential health problems early when they're easier to treat.",
                "preventive-care",
            ),
        ],
        HEALTH_INFO_FALLBACK,
    )
});

/// Canned chatbot reply for a free-form message.
pub fn chatbot_reply(message: &str) -> Reply {
    CHATBOT.respond(message)
}

/// Answer a chatbot message.
///
/// # Errors
///
/// Returns `PortalError::Validation` if the message is blank.
pub fn chat(message: &str) -> PortalResult<ChatbotRes> {
    let message = require_text(message, "Message is required")?;
    Ok(ChatbotRes {
        response: chatbot_reply(message.as_str()).text,
    })
}

/// Canned answer to a health question, with the id of the related topic when one applies.
pub fn health_info_reply(question: &str) -> Reply {
    HEALTH_INFO.respond(question)
}
