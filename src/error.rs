use serde::Serialize;

/// App-wide error type. Every fallible command returns `Result<T, AppError>`.
/// Serializes cleanly for Tauri IPC so the frontend gets structured error
/// messages.
///
/// Invalid user input is never an error: the mailbox store handles empty
/// text, absent selection, and unknown ids as silent no-ops. These variants
/// cover host-level faults only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("State error: {0}")]
    State(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Tauri requires `Serialize` on command return errors.
/// We serialize as `{ error: "...", kind: "..." }` for frontend consumption.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("AppError", 2)?;
        s.serialize_field("error", &self.to_string())?;
        s.serialize_field(
            "kind",
            match self {
                AppError::State(_) => "state",
                AppError::Serde(_) => "serde",
            },
        )?;
        s.end()
    }
}
