use crate::domain::constants::EXPORT_FILE_NAME;
use crate::domain::models::{ExportReport, State};

/// Writes the full `users` and `services` collections to a single pretty-JSON
/// document. Diagnostic dump only; nothing reads it back.
pub fn export_state(state: &State, out: Option<&str>) -> anyhow::Result<ExportReport> {
    let path = out.unwrap_or(EXPORT_FILE_NAME);
    std::fs::write(path, serde_json::to_string_pretty(state)?)?;
    Ok(ExportReport {
        path: path.to_string(),
        users: state.users.len(),
        services: state.services.len(),
    })
}
