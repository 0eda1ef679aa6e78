//! Simulated travel concierge
//!
//! The concierge panel on the home page answers with canned text after a
//! fixed delay. There is no inference behind it: replies are picked by
//! keyword from a small table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delay before the concierge "answers"
pub const REPLY_DELAY_MS: u32 = 1200;

/// Greeting shown when the conversation is empty
pub const GREETING: &str =
    "Hola! I'm your Medellín scout. Ask me about coffee, hikes, food or a day plan.";

const FALLBACK_REPLY: &str = "Good question! A local scout will add that to your trip board. \
     Meanwhile, try asking about coffee farms, Comuna 13 or a one-day itinerary.";

/// Keyword table, checked in order; the first match wins
const CANNED_REPLIES: &[(&[&str], &str)] = &[
    (
        &["coffee", "café", "cafe"],
        "Try a morning at Pergamino in El Poblado, then a half-day coffee farm tour in \
         Santa Elena. Most tours include pickup around 8am.",
    ),
    (
        &["hike", "hiking", "nature", "park"],
        "Parque Arví is a cable-car ride away: take Metrocable line L from Santo Domingo. \
         Trails are easy and the air is cool, bring a light jacket.",
    ),
    (
        &["food", "eat", "dinner", "nightlife", "bar"],
        "For dinner, Provenza has great options within a few blocks. \
         Start with a bandeja paisa at lunch and keep the evening for Parque Lleras.",
    ),
    (
        &["plan", "itinerary", "day", "trip"],
        "Here's a simple day: Comuna 13 graffiti tour in the morning, lunch in Laureles, \
         Botero Plaza in the afternoon, and sunset from Pueblito Paisa.",
    ),
];

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Traveler,
    Concierge,
}

/// One message in the conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConciergeMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
}

impl ConciergeMessage {
    pub fn traveler(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Traveler,
            text: text.into(),
        }
    }

    pub fn concierge(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Concierge,
            text: text.into(),
        }
    }
}

/// Concierge errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConciergeError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("the concierge is still replying")]
    ReplyPending,

    #[error("stored conversation could not be read: {0}")]
    CorruptHistory(String),
}

/// Validate traveler input, returning the trimmed text
///
/// Only one reply is in flight at a time: input is refused while
/// `reply_pending` is set.
pub fn prepare_message(
    text: &str,
    reply_pending: bool,
) -> Result<ConciergeMessage, ConciergeError> {
    if reply_pending {
        return Err(ConciergeError::ReplyPending);
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConciergeError::EmptyMessage);
    }
    Ok(ConciergeMessage::traveler(trimmed))
}

/// Canned reply for a traveler message
pub fn reply_to(text: &str) -> ConciergeMessage {
    let lowered = text.to_lowercase();
    let reply = CANNED_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY);
    ConciergeMessage::concierge(reply)
}

/// Serialize a conversation for session storage
pub fn encode_history(messages: &[ConciergeMessage]) -> String {
    // a Vec of plain structs always serializes
    serde_json::to_string(messages).unwrap_or_default()
}

/// Read a conversation back from session storage
pub fn decode_history(raw: &str) -> Result<Vec<ConciergeMessage>, ConciergeError> {
    serde_json::from_str(raw).map_err(|e| ConciergeError::CorruptHistory(e.to_string()))
}
