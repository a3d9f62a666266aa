use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Records
// ============================================================================

/// One inbound customer message and its reply status.
///
/// `reply` is `Some` if and only if `replied` is true; the store upholds this
/// on every transition. A replied record is never reverted to unreplied.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageRecord {
    pub id: String,
    pub customer: String,
    pub body: String,
    /// RFC 3339 UTC timestamp, assigned at creation and never changed.
    pub received_at: String,
    pub replied: bool,
    pub reply: Option<String>,
}

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only copy of the full mailbox state, handed to the frontend after
/// every transition so it re-renders from authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MailboxSnapshot {
    pub records: Vec<MessageRecord>,
    pub selected_id: Option<String>,
    pub draft_reply: String,
    pub draft_customer: String,
    pub draft_body: String,
    /// Derived: records with `replied == false`. Never stored in the mailbox.
    pub unreplied_count: usize,
}

// ============================================================================
// Reply catalog
// ============================================================================

/// A frequently asked question paired with its canned answer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// The static quick-reply / FAQ catalog shown in the reply panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReplyCatalog {
    pub quick_replies: Vec<String>,
    pub common_questions: Vec<FaqEntry>,
}
