use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub photo: Url,
    pub text: String,
}

/// Ordered, fixed list of profile cards, loaded once at startup and
/// identified by position only.
pub struct ProfileBook {
    profiles: Vec<Profile>,
}

impl ProfileBook {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let profiles: Vec<Profile> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if profiles.is_empty() {
            bail!("{} contains no profiles", path.display());
        }
        Ok(Self { profiles })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Resolves a signed index onto the list, wrapping in both
    /// directions. The returned index is the canonical one the caller
    /// should encode into navigation payloads.
    pub fn get(&self, index: i64) -> (usize, &Profile) {
        let wrapped = index.rem_euclid(self.profiles.len() as i64) as usize;
        (wrapped, &self.profiles[wrapped])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_of(n: usize) -> ProfileBook {
        let profiles = (0..n)
            .map(|i| Profile {
                photo: Url::parse(&format!("https://example.com/{}.jpg", i)).unwrap(),
                text: format!("card {}", i),
            })
            .collect();
        ProfileBook { profiles }
    }

    #[test]
    fn test_in_range_index_is_identity() {
        let book = book_of(3);
        assert_eq!(book.get(0).0, 0);
        assert_eq!(book.get(2).0, 2);
    }

    #[test]
    fn test_next_wraps_forward() {
        // "next" from the last card lands on the first one.
        let book = book_of(3);
        assert_eq!(book.get(2 + 1).0, 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        // "prev" from the first card lands on the last one.
        let book = book_of(3);
        assert_eq!(book.get(0 - 1).0, 2);
    }

    #[test]
    fn test_far_out_of_range_indices() {
        let book = book_of(3);
        assert_eq!(book.get(7).0, 1);
        assert_eq!(book.get(-7).0, 2);
    }

    #[test]
    fn test_get_returns_matching_profile() {
        let book = book_of(3);
        let (index, profile) = book.get(-1);
        assert_eq!(index, 2);
        assert_eq!(profile.text, "card 2");
    }

    #[test]
    fn test_load_rejects_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(ProfileBook::load(&path).is_err());
    }

    #[test]
    fn test_load_parses_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(
            &path,
            r#"[{"photo": "https://example.com/a.jpg", "text": "Алина, 24"}]"#,
        )
        .unwrap();
        let book = ProfileBook::load(&path).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(0).1.text, "Алина, 24");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProfileBook::load(&dir.path().join("nope.json")).is_err());
    }
}
