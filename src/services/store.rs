use crate::domain::models::{Listing, State, User};
use crate::services::seed;
use std::collections::HashMap;
use std::path::PathBuf;

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/kampusskill"))
}

fn users_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("users.json"))
}

fn services_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("services.json"))
}

pub fn favorites_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("favorites.json"))
}

pub fn limits_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("limits.toml"))
}

/// Best-effort append-only log of mutating operations.
pub fn audit(action: &str, data: serde_json::Value) {
    let path = match config_dir() {
        Ok(dir) => dir.join("audit.jsonl"),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

/// Loads both collections, seeding on first run and reconciling the listing
/// collection against the in-code seed set on every subsequent run. Any parse
/// or read failure resets both collections to the seed defaults; the store is
/// never left partially corrupt.
pub fn load_state() -> anyhow::Result<State> {
    match try_load() {
        Ok(state) => Ok(state),
        Err(err) => {
            tracing::warn!(error = %err, "state files unreadable, resetting to seed data");
            let state = State {
                users: seed::seed_users(),
                services: seed::seed_listings(),
            };
            save_users(&state)?;
            save_services(&state)?;
            Ok(state)
        }
    }
}

fn try_load() -> anyhow::Result<State> {
    let users = match read_json::<Vec<User>>(users_path()?)? {
        Some(users) => users,
        None => {
            let users = seed::seed_users();
            write_json(users_path()?, &users)?;
            users
        }
    };

    let services = match read_json::<Vec<Listing>>(services_path()?)? {
        Some(stored) => {
            let merged = reconcile_listings(stored, seed::seed_listings());
            write_json(services_path()?, &merged)?;
            merged
        }
        None => {
            let services = seed::seed_listings();
            write_json(services_path()?, &services)?;
            services
        }
    };

    Ok(State { users, services })
}

/// Merges previously stored listings with the current in-code seed set.
///
/// Seed-origin entries (seed id scheme) are replaced wholesale so shipped demo
/// data can evolve; user-created entries are carried over untouched. Duplicate
/// ids resolve last-write-wins while keeping first-occurrence order, and the
/// merge is idempotent: feeding its output back in yields the same collection.
pub fn reconcile_listings(stored: Vec<Listing>, seeds: Vec<Listing>) -> Vec<Listing> {
    let user_created = stored.into_iter().filter(|l| !l.is_seed());

    let mut merged: Vec<Listing> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for listing in seeds.into_iter().chain(user_created) {
        match slot.get(&listing.id) {
            Some(&i) => merged[i] = listing,
            None => {
                slot.insert(listing.id.clone(), merged.len());
                merged.push(listing);
            }
        }
    }
    merged
}

pub fn save_users(state: &State) -> anyhow::Result<()> {
    write_json(users_path()?, &state.users)
}

pub fn save_services(state: &State) -> anyhow::Result<()> {
    write_json(services_path()?, &state.services)
}

fn read_json<T: serde::de::DeserializeOwned>(path: PathBuf) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

fn write_json<T: serde::Serialize>(path: PathBuf, data: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(data)?)?;
    Ok(())
}
