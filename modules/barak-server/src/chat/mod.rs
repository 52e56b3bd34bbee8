//! The chat pipeline: prompt the model, parse its reply into criteria,
//! classify the intent, derive display tags, and compose the response.
//!
//! Anticipated failures (completion error, unparseable reply, ambiguous
//! intent) degrade the message text; the response shape never changes.

pub mod criteria;
pub mod intent;
pub mod prompt;
pub mod tags;

use serde::Serialize;
use tracing::{info, warn};

use crate::search::PropertyRecord;
use crate::AppState;
use criteria::{parse_criteria, SearchCriteria};
use intent::{classify_action, Intent};
use prompt::extraction_prompt;
use tags::{generate_tags, summary, SmartTag};

pub const CLARIFICATION_MESSAGE: &str =
    "Je n'ai pas bien compris votre projet : souhaitez-vous acheter ou louer ? \
     Précisez-le et je lance la recherche.";

pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Désolé, je n'ai pas réussi à analyser votre demande. Pouvez-vous la reformuler ?";

pub const COMPLETION_FAILED_MESSAGE: &str =
    "Désolé, je rencontre un problème technique pour analyser votre demande. \
     Pouvez-vous réessayer dans un instant ?";

pub const EXTRACTION_DISABLED_MESSAGE: &str =
    "L'assistant de recherche est momentanément indisponible. Merci de réessayer plus tard.";

/// Outcome of criteria extraction, one variant per designed branch — no
/// boolean flags, no sentinel empty records.
#[derive(Debug)]
pub enum Extraction {
    /// Clear buy-or-rent intent; the search may proceed.
    Actionable {
        intent: Intent,
        criteria: SearchCriteria,
    },
    /// Parsed fine, but the stated action is missing or ambiguous.
    NeedsClarification,
    /// The model's reply was not a JSON object.
    Failed,
}

/// Classify a raw model completion.
pub fn extract(raw_completion: &str) -> Extraction {
    match parse_criteria(raw_completion) {
        None => Extraction::Failed,
        Some(criteria) => match classify_action(criteria.normalized_action().as_deref()) {
            Some(intent) => Extraction::Actionable { intent, criteria },
            None => Extraction::NeedsClarification,
        },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub ai_message: String,
    pub properties: Vec<PropertyRecord>,
    pub smart_tags: Vec<SmartTag>,
}

impl ChatResponse {
    fn message_only(message: impl Into<String>) -> Self {
        Self {
            ai_message: message.into(),
            properties: Vec::new(),
            smart_tags: Vec::new(),
        }
    }
}

/// Run the full pipeline for one user message. Infallible by design: every
/// anticipated failure is absorbed into the response body.
pub async fn handle_message(state: &AppState, message: &str) -> ChatResponse {
    let Some(ai) = state.ai.as_ref() else {
        warn!("chat request received while criteria extraction is disabled");
        return ChatResponse::message_only(EXTRACTION_DISABLED_MESSAGE);
    };

    let completion = match ai.complete(&extraction_prompt(message)).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "completion service call failed");
            return ChatResponse::message_only(COMPLETION_FAILED_MESSAGE);
        }
    };

    match extract(&completion) {
        Extraction::Failed => {
            warn!("model reply was not a JSON object");
            ChatResponse::message_only(EXTRACTION_FAILED_MESSAGE)
        }
        Extraction::NeedsClarification => ChatResponse::message_only(CLARIFICATION_MESSAGE),
        Extraction::Actionable { intent, criteria } => {
            let smart_tags = generate_tags(&criteria);
            let properties = match state.search.search(&criteria).await {
                Ok(found) => found,
                Err(e) => {
                    // Search failure degrades to an empty listing, not an error.
                    warn!(error = %e, "property search failed");
                    Vec::new()
                }
            };
            info!(intent = ?intent, tags = smart_tags.len(), "actionable query");
            ChatResponse {
                ai_message: confirmation_message(intent, &smart_tags),
                properties,
                smart_tags,
            }
        }
    }
}

fn confirmation_message(intent: Intent, tags: &[SmartTag]) -> String {
    if tags.is_empty() {
        match intent {
            Intent::Buy => "Ok, je lance une recherche de biens à acheter.".to_string(),
            Intent::Rent => "Ok, je lance une recherche de biens à louer.".to_string(),
        }
    } else {
        format!("Ok, je cherche : {}.", summary(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_actionable() {
        let outcome = extract(r#"{"action": "buy", "location": "Lyon"}"#);
        assert!(matches!(
            outcome,
            Extraction::Actionable { intent: Intent::Buy, .. }
        ));
    }

    #[test]
    fn extract_ambiguous_action() {
        assert!(matches!(
            extract(r#"{"action": "find"}"#),
            Extraction::NeedsClarification
        ));
        assert!(matches!(extract(r#"{}"#), Extraction::NeedsClarification));
        assert!(matches!(
            extract(r#"{"action": null}"#),
            Extraction::NeedsClarification
        ));
    }

    #[test]
    fn extract_failure_on_non_json() {
        assert!(matches!(extract("sorry, here is prose"), Extraction::Failed));
        assert!(matches!(extract("[\"buy\"]"), Extraction::Failed));
    }

    #[test]
    fn confirmation_with_tags_lists_them() {
        let tags = vec![
            SmartTag { text: "Appartement".into() },
            SmartTag { text: "250 000€".into() },
        ];
        assert_eq!(
            confirmation_message(Intent::Buy, &tags),
            "Ok, je cherche : Appartement, 250 000€."
        );
    }

    #[test]
    fn confirmation_without_tags_references_intent() {
        assert_eq!(
            confirmation_message(Intent::Rent, &[]),
            "Ok, je lance une recherche de biens à louer."
        );
    }
}
