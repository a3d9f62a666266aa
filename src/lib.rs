mod commands;
mod error;
mod logging;
pub mod mailbox;

use std::sync::{Arc, Mutex};

use mailbox::Mailbox;

/// Shared application state accessible from all Tauri commands.
///
/// The mailbox mutex serializes every transition: Tauri may invoke commands
/// from multiple threads, and each intent must complete before the next is
/// observed.
pub struct AppState {
    pub mailbox: Mutex<Mailbox>,
}

pub fn run() {
    logging::init();

    tracing::info!(
        "Starting Marketplace Messenger v{}",
        env!("CARGO_PKG_VERSION")
    );

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            let mailbox = Mailbox::seeded();
            tracing::info!(
                records = mailbox.records().len(),
                unreplied = mailbox.unreplied_count(),
                "Mailbox seeded"
            );

            app.manage(Arc::new(AppState {
                mailbox: Mutex::new(mailbox),
            }));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Mailbox — reads
            commands::mailbox::mailbox_snapshot,
            commands::mailbox::reply_catalog,
            // Mailbox — transitions
            commands::mailbox::select_message,
            commands::mailbox::set_draft_reply,
            commands::mailbox::apply_quick_reply,
            commands::mailbox::set_draft_customer,
            commands::mailbox::set_draft_body,
            commands::mailbox::send_reply,
            commands::mailbox::add_simulated_message,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
