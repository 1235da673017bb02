//! Word-to-group map of the group-order benchmark

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::loader::DictionaryLoader;
use crate::error::BenchError;
use crate::persistence;

/// Group id of a word (1-based)
pub type GroupId = u32;

/// Maps each benchmark word to its group. Keys are looked up verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupMap {
    groups: BTreeMap<String, GroupId>,
}

impl GroupMap {
    pub fn new(groups: BTreeMap<String, GroupId>) -> Self {
        Self { groups }
    }

    /// Random vocabulary: `num_words` distinct lowercase ASCII words of
    /// `word_length` letters, each assigned a uniform group in `1..=num_groups`.
    ///
    /// `num_words` must not exceed 26^word_length.
    pub fn generate<R: Rng>(
        rng: &mut R,
        num_words: usize,
        word_length: usize,
        num_groups: GroupId,
    ) -> Self {
        let mut words = BTreeSet::new();
        while words.len() < num_words {
            let word: String = (0..word_length)
                .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                .collect();
            words.insert(word);
        }

        let groups = words
            .into_iter()
            .map(|word| {
                let group = rng.gen_range(1..=num_groups);
                (word, group)
            })
            .collect();

        Self { groups }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let content = DictionaryLoader::read_text(path)?;
        serde_json::from_str(&content).map_err(|source| BenchError::GroupData {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BenchError> {
        persistence::write_json(path.as_ref(), self)
    }

    pub fn group_of(&self, word: &str) -> Option<GroupId> {
        self.groups.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Words in alphabetical order with their group
    pub fn iter(&self) -> impl Iterator<Item = (&str, GroupId)> {
        self.groups.iter().map(|(w, g)| (w.as_str(), *g))
    }
}

impl<S: Into<String>> FromIterator<(S, GroupId)> for GroupMap {
    fn from_iter<I: IntoIterator<Item = (S, GroupId)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().map(|(w, g)| (w.into(), g)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let map = GroupMap::generate(&mut rng, 400, 5, 4);

        assert_eq!(map.len(), 400);
        for (word, group) in map.iter() {
            assert_eq!(word.len(), 5);
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
            assert!((1..=4).contains(&group));
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = GroupMap::generate(&mut StdRng::seed_from_u64(42), 50, 5, 4);
        let b = GroupMap::generate(&mut StdRng::seed_from_u64(42), 50, 5, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_save_and_load_keep_keys_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sgb_word_data.json");
        let map: GroupMap = [("zebra", 1), ("Apple", 3)].into_iter().collect();

        map.save(&path).unwrap();
        let loaded = GroupMap::load(&path).unwrap();

        assert_eq!(loaded, map);
        assert_eq!(loaded.group_of("Apple"), Some(3));
        assert_eq!(loaded.group_of("apple"), None);
    }

    #[test]
    fn test_load_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            GroupMap::load(&path),
            Err(BenchError::GroupData { .. })
        ));
    }
}
