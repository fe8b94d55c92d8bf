// src/domain/favorites.rs

/// Value-semantic toggle over the favorites id list: removes `id` if
/// present, appends it otherwise. Insertion order of the remaining ids is
/// preserved, so the operation is its own inverse.
pub fn toggle(favorites: &[String], id: &str) -> Vec<String> {
    if favorites.iter().any(|f| f == id) {
        favorites.iter().filter(|f| *f != id).cloned().collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(id.to_string());
        next
    }
}
