use crate::domain::models::{Limits, LimitsFile};
use crate::services::store::limits_path;

/// Moderation and posting limits, overridable through an optional
/// `limits.toml` in the config dir. Missing file or missing keys fall back to
/// the shipped defaults; a malformed file is a real error, unlike corrupt
/// state files.
pub fn load_limits() -> anyhow::Result<Limits> {
    let path = limits_path()?;
    if !path.exists() {
        return Ok(Limits::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let file: LimitsFile = toml::from_str(&raw)?;
    Ok(file.limits)
}
