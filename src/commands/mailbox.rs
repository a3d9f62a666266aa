use std::sync::Arc;
use tauri::State;

use crate::error::AppError;
use crate::mailbox::catalog;
use crate::mailbox::model::{MailboxSnapshot, ReplyCatalog};
use crate::mailbox::Mailbox;
use crate::AppState;

/// Run one store transition under the state mutex and return a fresh
/// snapshot. Transitions never fail; the only error here is a poisoned lock.
fn with_mailbox<F>(state: &State<'_, Arc<AppState>>, f: F) -> Result<MailboxSnapshot, AppError>
where
    F: FnOnce(&mut Mailbox),
{
    let mut mailbox = state
        .mailbox
        .lock()
        .map_err(|_| AppError::State("mailbox state lock poisoned".into()))?;
    f(&mut mailbox);
    Ok(mailbox.snapshot())
}

#[tauri::command]
pub fn mailbox_snapshot(state: State<'_, Arc<AppState>>) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |_| {})
}

#[tauri::command]
#[tracing::instrument(skip(state))]
pub fn select_message(
    state: State<'_, Arc<AppState>>,
    id: Option<String>,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.select_message(id))
}

#[tauri::command]
pub fn set_draft_reply(
    state: State<'_, Arc<AppState>>,
    text: String,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.set_draft_reply(text))
}

#[tauri::command]
pub fn apply_quick_reply(
    state: State<'_, Arc<AppState>>,
    text: String,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.apply_quick_reply(text))
}

#[tauri::command]
pub fn set_draft_customer(
    state: State<'_, Arc<AppState>>,
    text: String,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.set_draft_customer(text))
}

#[tauri::command]
pub fn set_draft_body(
    state: State<'_, Arc<AppState>>,
    text: String,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.set_draft_body(text))
}

#[tauri::command]
#[tracing::instrument(skip(state))]
pub fn send_reply(state: State<'_, Arc<AppState>>) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.send_reply())
}

#[tauri::command]
#[tracing::instrument(skip(state))]
pub fn add_simulated_message(
    state: State<'_, Arc<AppState>>,
    customer: String,
    body: String,
) -> Result<MailboxSnapshot, AppError> {
    with_mailbox(&state, |m| m.add_simulated_message(customer, body))
}

#[tauri::command]
pub fn reply_catalog() -> ReplyCatalog {
    catalog::reply_catalog()
}
