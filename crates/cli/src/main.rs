use clap::{Parser, Subcommand};
use healthassist_core::wire::{Severity, SymptomCheckReq};
use healthassist_core::{clinics, matcher, responder, topics};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "healthassist")]
#[command(about = "HealthAssist community health portal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check symptoms and list likely conditions, most likely first
    Check {
        /// Free-text description of the symptoms
        text: Option<String>,
        /// A symptom label, as ticked in the checklist (repeatable)
        #[arg(long = "symptom", short = 's')]
        symptoms: Vec<String>,
        /// Show each illness once, at its highest likelihood
        #[arg(long)]
        dedupe: bool,
    },
    /// Send a message to the health chatbot
    Chat {
        message: String,
    },
    /// Ask a health-information question
    Ask {
        question: String,
    },
    /// List clinics that accept queue claims
    Clinics,
    /// List health-information topics
    Topics,
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "HIGH",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            text,
            symptoms,
            dedupe,
        }) => {
            let res = matcher::check_symptoms(&SymptomCheckReq {
                symptoms: text,
                selected_symptoms: symptoms,
                dedupe,
            });
            for prediction in res.predictions {
                println!(
                    "{:>3}%  {} ({} severity)",
                    prediction.likelihood,
                    prediction.illness,
                    severity_label(prediction.severity)
                );
                println!("      {}", prediction.recommendation);
                if prediction.seek_medical_attention {
                    println!("      Seek medical attention.");
                }
            }
        }
        Some(Commands::Chat { message }) => match responder::chat(&message) {
            Ok(res) => println!("{}", res.response),
            Err(e) => eprintln!("Error: {}", e),
        },
        Some(Commands::Ask { question }) => match topics::answer_question(&question) {
            Ok(res) => {
                println!("{}", res.answer);
                if let Some(topic) = res.related_topic {
                    println!();
                    println!("Related topic: {} ({})", topic.title, topic.id);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        },
        Some(Commands::Clinics) => {
            for clinic in clinics::all_clinics() {
                println!(
                    "{}. {}, {} | {} | open {} | wait {}",
                    clinic.id,
                    clinic.name,
                    clinic.address,
                    clinic.phone,
                    clinic.opening_hours,
                    clinic.wait_time
                );
                println!("   Services: {}", clinic.services.join(", "));
            }
        }
        Some(Commands::Topics) => {
            for topic in topics::all_topics() {
                println!("{:<18} {}: {}", topic.id, topic.title, topic.description);
            }
        }
        None => {
            println!("Use 'healthassist --help' for commands");
        }
    }

    Ok(())
}
