//! The message mailbox store.
//!
//! Holds every customer message for the session plus the transient drafts the
//! user is composing. All state lives in memory; nothing survives app exit.
//! Transitions are plain methods so the whole table is unit-testable without
//! a running Tauri app — the command layer just locks the state mutex and
//! calls one method per intent.
//!
//! Invalid input (empty-after-trim text, no selection) is a silent no-op,
//! never an error. Trim is applied for the emptiness check only; stored text
//! is always the raw input.

pub mod catalog;
pub mod model;

use chrono::{Duration, Utc};

use self::model::{MailboxSnapshot, MessageRecord};

/// In-memory mailbox state. Created once at startup via [`Mailbox::seeded`]
/// and owned by `AppState` behind a mutex for the life of the session.
#[derive(Debug, Clone)]
pub struct Mailbox {
    /// Most recent first; new records are prepended.
    records: Vec<MessageRecord>,
    /// Record currently open in the reply panel, if any. Not validated
    /// against `records` — the frontend only passes ids it was handed.
    selected_id: Option<String>,
    draft_reply: String,
    draft_customer: String,
    draft_body: String,
}

impl Mailbox {
    /// Empty mailbox with no records and no drafts.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected_id: None,
            draft_reply: String::new(),
            draft_customer: String::new(),
            draft_body: String::new(),
        }
    }

    /// Session seed: three example conversations, one already answered.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let at = |minutes_ago: i64| (now - Duration::minutes(minutes_ago)).to_rfc3339();

        let mut mailbox = Self::new();
        mailbox.records = vec![
            MessageRecord {
                id: uuid::Uuid::new_v4().to_string(),
                customer: "John Smith".into(),
                body: "Is this still available?".into(),
                received_at: at(15),
                replied: false,
                reply: None,
            },
            MessageRecord {
                id: uuid::Uuid::new_v4().to_string(),
                customer: "Sarah Johnson".into(),
                body: "Hi, I'm interested in this item. Can you tell me more about its condition?"
                    .into(),
                received_at: at(45),
                replied: false,
                reply: None,
            },
            MessageRecord {
                id: uuid::Uuid::new_v4().to_string(),
                customer: "Mike Wilson".into(),
                body: "What's your lowest price? Can you deliver?".into(),
                received_at: at(120),
                replied: true,
                reply: Some("The price is $50 firm. I can deliver within 10 miles for free.".into()),
            },
        ];
        mailbox
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Open a message in the reply panel (`None` clears the selection).
    /// Always resets the reply draft.
    pub fn select_message(&mut self, id: Option<String>) {
        self.selected_id = id;
        self.draft_reply.clear();
    }

    /// Replace the reply draft verbatim. No trimming, no length limit.
    pub fn set_draft_reply(&mut self, text: String) {
        self.draft_reply = text;
    }

    /// Overwrite the reply draft with a catalog string. Last write wins.
    pub fn apply_quick_reply(&mut self, text: String) {
        self.set_draft_reply(text);
    }

    /// Replace the new-message form's customer field verbatim.
    pub fn set_draft_customer(&mut self, text: String) {
        self.draft_customer = text;
    }

    /// Replace the new-message form's body field verbatim.
    pub fn set_draft_body(&mut self, text: String) {
        self.draft_body = text;
    }

    /// Commit the reply draft to the selected record.
    ///
    /// No-op unless a record is selected and the draft is non-empty after
    /// trimming. Stores the raw, untrimmed draft; then clears both the draft
    /// and the selection. Re-replying to an answered record overwrites its
    /// reply text.
    pub fn send_reply(&mut self) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        if self.draft_reply.trim().is_empty() {
            return;
        }
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            // Dangling selection (id not in the mailbox): nothing to commit.
            return;
        };

        record.replied = true;
        record.reply = Some(std::mem::take(&mut self.draft_reply));
        self.selected_id = None;

        tracing::debug!(id = %id, "reply committed");
    }

    /// Inject a simulated inbound message at the top of the list.
    ///
    /// No-op if either input is empty after trimming. Stores the raw inputs
    /// and clears both form drafts.
    pub fn add_simulated_message(&mut self, customer: String, body: String) {
        if customer.trim().is_empty() || body.trim().is_empty() {
            return;
        }

        let record = MessageRecord {
            id: uuid::Uuid::new_v4().to_string(),
            customer,
            body,
            received_at: Utc::now().to_rfc3339(),
            replied: false,
            reply: None,
        };
        tracing::debug!(id = %record.id, "simulated message added");

        self.records.insert(0, record);
        self.draft_customer.clear();
        self.draft_body.clear();
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Records with no reply yet. Recomputed on demand, never stored.
    pub fn unreplied_count(&self) -> usize {
        self.records.iter().filter(|r| !r.replied).count()
    }

    /// Full read-only copy for the rendering layer.
    pub fn snapshot(&self) -> MailboxSnapshot {
        MailboxSnapshot {
            records: self.records.clone(),
            selected_id: self.selected_id.clone(),
            draft_reply: self.draft_reply.clone(),
            draft_customer: self.draft_customer.clone(),
            draft_body: self.draft_body.clone(),
            unreplied_count: self.unreplied_count(),
        }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreplied_seed_id(mailbox: &Mailbox) -> String {
        mailbox
            .records()
            .iter()
            .find(|r| !r.replied)
            .map(|r| r.id.clone())
            .unwrap()
    }

    #[test]
    fn test_seed_shape() {
        let mailbox = Mailbox::seeded();
        assert_eq!(mailbox.records().len(), 3);
        assert_eq!(mailbox.unreplied_count(), 2);

        // reply present exactly on the replied record
        for rec in mailbox.records() {
            assert_eq!(rec.reply.is_some(), rec.replied);
        }

        let snap = mailbox.snapshot();
        assert_eq!(snap.selected_id, None);
        assert_eq!(snap.draft_reply, "");
        assert_eq!(snap.unreplied_count, 2);
    }

    #[test]
    fn test_select_resets_draft() {
        let mut mailbox = Mailbox::seeded();
        mailbox.set_draft_reply("half-typed".into());

        let id = unreplied_seed_id(&mailbox);
        mailbox.select_message(Some(id.clone()));

        let snap = mailbox.snapshot();
        assert_eq!(snap.selected_id, Some(id));
        assert_eq!(snap.draft_reply, "");
    }

    #[test]
    fn test_select_none_clears_selection() {
        let mut mailbox = Mailbox::seeded();
        mailbox.select_message(Some(unreplied_seed_id(&mailbox)));
        mailbox.select_message(None);
        assert_eq!(mailbox.snapshot().selected_id, None);
    }

    #[test]
    fn test_send_reply_happy_path() {
        let mut mailbox = Mailbox::seeded();
        let id = unreplied_seed_id(&mailbox);

        mailbox.select_message(Some(id.clone()));
        mailbox.set_draft_reply("Yes it's available".into());
        mailbox.send_reply();

        let rec = mailbox.records().iter().find(|r| r.id == id).unwrap();
        assert!(rec.replied);
        assert_eq!(rec.reply.as_deref(), Some("Yes it's available"));

        let snap = mailbox.snapshot();
        assert_eq!(snap.selected_id, None);
        assert_eq!(snap.draft_reply, "");
        assert_eq!(snap.unreplied_count, 1);
    }

    #[test]
    fn test_send_reply_without_selection_is_noop() {
        let mut mailbox = Mailbox::seeded();
        mailbox.set_draft_reply("orphan text".into());

        let before = mailbox.snapshot();
        mailbox.send_reply();
        let after = mailbox.snapshot();

        assert_eq!(after.unreplied_count, before.unreplied_count);
        assert_eq!(after.records.len(), before.records.len());
        for (a, b) in after.records.iter().zip(before.records.iter()) {
            assert_eq!(a.replied, b.replied);
            assert_eq!(a.reply, b.reply);
        }
    }

    #[test]
    fn test_send_reply_whitespace_draft_is_noop() {
        let mut mailbox = Mailbox::seeded();
        let id = unreplied_seed_id(&mailbox);

        mailbox.select_message(Some(id.clone()));
        mailbox.set_draft_reply("   ".into());
        mailbox.send_reply();

        let rec = mailbox.records().iter().find(|r| r.id == id).unwrap();
        assert!(!rec.replied);
        assert_eq!(rec.reply, None);
        // selection and draft are untouched by a no-op send
        assert_eq!(mailbox.snapshot().selected_id, Some(id));
        assert_eq!(mailbox.snapshot().draft_reply, "   ");
    }

    #[test]
    fn test_send_reply_stores_untrimmed_text() {
        let mut mailbox = Mailbox::seeded();
        let id = unreplied_seed_id(&mailbox);

        mailbox.select_message(Some(id.clone()));
        mailbox.set_draft_reply("  padded reply  ".into());
        mailbox.send_reply();

        let rec = mailbox.records().iter().find(|r| r.id == id).unwrap();
        assert_eq!(rec.reply.as_deref(), Some("  padded reply  "));
    }

    #[test]
    fn test_send_reply_dangling_selection_is_noop() {
        let mut mailbox = Mailbox::seeded();
        mailbox.select_message(Some("no-such-id".into()));
        mailbox.set_draft_reply("hello?".into());

        let before = mailbox.unreplied_count();
        mailbox.send_reply();
        assert_eq!(mailbox.unreplied_count(), before);
    }

    #[test]
    fn test_re_reply_overwrites() {
        let mut mailbox = Mailbox::seeded();
        let id = mailbox
            .records()
            .iter()
            .find(|r| r.replied)
            .map(|r| r.id.clone())
            .unwrap();

        mailbox.select_message(Some(id.clone()));
        mailbox.set_draft_reply("Actually, price dropped to $40.".into());
        mailbox.send_reply();

        let rec = mailbox.records().iter().find(|r| r.id == id).unwrap();
        assert!(rec.replied);
        assert_eq!(rec.reply.as_deref(), Some("Actually, price dropped to $40."));
    }

    #[test]
    fn test_quick_reply_then_manual_edit_last_write_wins() {
        let mut mailbox = Mailbox::seeded();
        mailbox.apply_quick_reply("Thanks for your interest!".into());
        mailbox.set_draft_reply("custom text".into());
        assert_eq!(mailbox.snapshot().draft_reply, "custom text");
    }

    #[test]
    fn test_add_simulated_message_prepends() {
        let mut mailbox = Mailbox::seeded();
        mailbox.set_draft_customer("Alice".into());
        mailbox.set_draft_body("Hi".into());
        mailbox.add_simulated_message("Alice".into(), "Hi".into());

        assert_eq!(mailbox.records().len(), 4);
        let first = &mailbox.records()[0];
        assert_eq!(first.customer, "Alice");
        assert_eq!(first.body, "Hi");
        assert!(!first.replied);
        assert_eq!(first.reply, None);

        // form drafts are cleared on commit
        let snap = mailbox.snapshot();
        assert_eq!(snap.draft_customer, "");
        assert_eq!(snap.draft_body, "");
    }

    #[test]
    fn test_add_simulated_message_keeps_raw_input() {
        let mut mailbox = Mailbox::seeded();
        mailbox.add_simulated_message(" Alice ".into(), " Hi there ".into());
        assert_eq!(mailbox.records()[0].customer, " Alice ");
        assert_eq!(mailbox.records()[0].body, " Hi there ");
    }

    #[test]
    fn test_add_simulated_message_blank_inputs_are_noops() {
        let mut mailbox = Mailbox::seeded();
        mailbox.add_simulated_message("".into(), "something".into());
        assert_eq!(mailbox.records().len(), 3);
        mailbox.add_simulated_message("Name".into(), "".into());
        assert_eq!(mailbox.records().len(), 3);
        mailbox.add_simulated_message("  ".into(), "  \t ".into());
        assert_eq!(mailbox.records().len(), 3);
    }

    #[test]
    fn test_add_preserves_existing_order() {
        let mut mailbox = Mailbox::seeded();
        let before: Vec<String> = mailbox.records().iter().map(|r| r.id.clone()).collect();
        mailbox.add_simulated_message("Alice".into(), "Hi".into());
        let after: Vec<String> = mailbox.records()[1..].iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let mut mailbox = Mailbox::seeded();
        for i in 0..50 {
            mailbox.add_simulated_message(format!("Customer {i}"), "Hello".into());
        }
        let mut ids: Vec<&str> = mailbox.records().iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 53);
    }

    #[test]
    fn test_catalog_is_nonempty() {
        let catalog = catalog::reply_catalog();
        assert_eq!(catalog.quick_replies.len(), 8);
        assert_eq!(catalog.common_questions.len(), 5);
        assert!(catalog
            .common_questions
            .iter()
            .all(|f| !f.question.is_empty() && !f.answer.is_empty()));
    }
}
