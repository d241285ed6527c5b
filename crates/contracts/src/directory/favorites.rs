use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::item::ItemId;
use super::store::DirectoryStore;

/// Набор избранного. Живёт ровно столько, сколько представление директории,
/// никуда не сохраняется и не влияет на фильтрацию.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet(BTreeSet<ItemId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Посев из записей, отмеченных `is_favorite` в фикстуре
    pub fn seeded(store: &DirectoryStore) -> Self {
        Self(
            store
                .items()
                .iter()
                .filter(|item| item.is_favorite)
                .map(|item| item.id.clone())
                .collect(),
        )
    }

    /// Переключить членство. Возвращает новое состояние: `true` если id теперь в наборе.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.clone());
            true
        }
    }

    /// Чистая версия [`FavoriteSet::toggle`]
    pub fn toggled(&self, id: &ItemId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn is_favorite(&self, id: &ItemId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }
}

impl FromIterator<ItemId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::store::tests::{config, item, sample_store};
    use crate::directory::{DirectoryStore, ItemKind, ItemStatus};

    #[test]
    fn test_toggle_is_involutive() {
        let sets = [
            FavoriteSet::new(),
            ["1", "5"].into_iter().map(ItemId::new).collect::<FavoriteSet>(),
        ];
        for set in sets {
            for id in ["1", "2", "5", "unknown"].map(ItemId::new) {
                assert_eq!(set.toggled(&id).toggled(&id), set);
            }
        }
    }

    #[test]
    fn test_toggle_flips_exactly_one_membership() {
        let set: FavoriteSet = ["2"].into_iter().map(ItemId::new).collect();
        for id in ["1", "2", "3"].map(ItemId::new) {
            let next = set.toggled(&id);
            assert_ne!(next.is_favorite(&id), set.is_favorite(&id));
            for other in ["1", "2", "3"].map(ItemId::new) {
                if other != id {
                    assert_eq!(next.is_favorite(&other), set.is_favorite(&other));
                }
            }
        }
    }

    #[test]
    fn test_toggle_reports_new_membership() {
        let mut set = FavoriteSet::new();
        let id = ItemId::new("3");
        assert!(set.toggle(&id));
        assert!(set.is_favorite(&id));
        assert!(!set.toggle(&id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_seeded_from_fixture_flags() {
        assert!(FavoriteSet::seeded(&sample_store()).is_empty());

        let mut starred = item("2", ItemKind::Explore, "Beta", ItemStatus::Warning, "A");
        starred.is_favorite = true;
        let store = DirectoryStore::load(config(vec![
            item("1", ItemKind::Dashboard, "Alpha", ItemStatus::Operational, "A"),
            starred,
        ]))
        .unwrap();
        let set = FavoriteSet::seeded(&store);
        assert_eq!(set.len(), 1);
        assert!(set.is_favorite(&ItemId::new("2")));
    }
}
