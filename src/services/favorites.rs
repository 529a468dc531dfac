//! Per-machine favorites: a flat id list in its own file, independent of the
//! user collections and of login state.

use crate::services::store::favorites_path;

pub fn load_favorites() -> anyhow::Result<Vec<String>> {
    let path = favorites_path()?;
    if !path.exists() {
        return Ok(vec![]);
    }
    let raw = std::fs::read_to_string(path)?;
    // Unparseable favorites degrade to an empty set.
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

fn save_favorites(favorites: &[String]) -> anyhow::Result<()> {
    let path = favorites_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(favorites)?)?;
    Ok(())
}

/// Returns false when the id was already a favorite.
pub fn add_favorite(listing_id: &str) -> anyhow::Result<bool> {
    let mut favorites = load_favorites()?;
    if favorites.iter().any(|id| id == listing_id) {
        return Ok(false);
    }
    favorites.push(listing_id.to_string());
    save_favorites(&favorites)?;
    Ok(true)
}

/// Returns false when the id was not a favorite.
pub fn remove_favorite(listing_id: &str) -> anyhow::Result<bool> {
    let mut favorites = load_favorites()?;
    let before = favorites.len();
    favorites.retain(|id| id != listing_id);
    if favorites.len() == before {
        return Ok(false);
    }
    save_favorites(&favorites)?;
    Ok(true)
}

pub fn is_favorite(listing_id: &str) -> anyhow::Result<bool> {
    Ok(load_favorites()?.iter().any(|id| id == listing_id))
}
