//! Directory Store: упорядоченный, провалидированный набор записей одного домена.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::item::{DirectoryItem, ItemId};
use crate::error::DirectoryError;

/// Параметры одного представления директории: метка домена,
/// объявленный список поддоменов и записи фикстуры.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub domain: String,
    pub subdomains: Vec<String>,
    #[serde(default, rename = "item")]
    pub items: Vec<DirectoryItem>,
}

/// Количество записей в объявленном поддомене (нулевые включаются).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainCount {
    pub subdomain: String,
    pub count: usize,
}

/// Провалидированное хранилище. Создаётся только через [`DirectoryStore::load`],
/// поэтому любое значение этого типа удовлетворяет инвариантам данных.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStore {
    domain: String,
    subdomains: Vec<String>,
    items: Vec<DirectoryItem>,
}

impl DirectoryStore {
    /// Загрузить и провалидировать конфигурацию. Падает на первом нарушении.
    pub fn load(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let DirectoryConfig {
            domain,
            subdomains,
            items,
        } = config;

        if domain.trim().is_empty() {
            return Err(DirectoryError::EmptyDomainLabel);
        }

        let mut declared = HashSet::new();
        for subdomain in &subdomains {
            if subdomain.trim().is_empty() {
                return Err(DirectoryError::InvalidSubdomainList(
                    "subdomain name must not be empty".into(),
                ));
            }
            if !declared.insert(subdomain.as_str()) {
                return Err(DirectoryError::InvalidSubdomainList(format!(
                    "subdomain {:?} declared twice",
                    subdomain
                )));
            }
        }

        let mut seen_ids = HashSet::new();
        for item in &items {
            validate_item(item, &domain, &declared)?;
            if !seen_ids.insert(item.id.as_str()) {
                return Err(DirectoryError::DuplicateId(item.id.0.clone()));
            }
        }

        Ok(Self {
            domain,
            subdomains,
            items,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Объявленные поддомены в порядке объявления
    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    /// Записи в исходном порядке
    pub fn items(&self) -> &[DirectoryItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&DirectoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_declared_subdomain(&self, subdomain: &str) -> bool {
        self.subdomains.iter().any(|s| s == subdomain)
    }

    /// Уникальные владельцы, отсортированные по возрастанию
    pub fn owner_options(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.owner.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn subdomain_counts(&self) -> Vec<SubdomainCount> {
        self.subdomains
            .iter()
            .map(|subdomain| SubdomainCount {
                subdomain: subdomain.clone(),
                count: self
                    .items
                    .iter()
                    .filter(|item| &item.subdomain == subdomain)
                    .count(),
            })
            .collect()
    }
}

fn validate_item(
    item: &DirectoryItem,
    domain: &str,
    declared: &HashSet<&str>,
) -> Result<(), DirectoryError> {
    let id = item.id.as_str();
    if id.trim().is_empty() {
        return Err(DirectoryError::EmptyField {
            id: id.to_string(),
            field: "id",
        });
    }

    let required = [
        ("name", &item.name),
        ("description", &item.description),
        ("owner", &item.owner),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DirectoryError::EmptyField {
                id: id.to_string(),
                field,
            });
        }
    }

    if item.domain != domain {
        return Err(DirectoryError::DomainMismatch {
            id: id.to_string(),
            expected: domain.to_string(),
            found: item.domain.clone(),
        });
    }

    if !declared.contains(item.subdomain.as_str()) {
        return Err(DirectoryError::UndeclaredSubdomain {
            id: id.to_string(),
            subdomain: item.subdomain.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::directory::item::{ItemKind, ItemStatus};

    pub(crate) fn item(
        id: &str,
        kind: ItemKind,
        subdomain: &str,
        status: ItemStatus,
        owner: &str,
    ) -> DirectoryItem {
        DirectoryItem {
            id: ItemId::new(id),
            kind,
            name: format!("Item {}", id),
            domain: "Test".to_string(),
            subdomain: subdomain.to_string(),
            description: format!("Description of item {}", id),
            status,
            owner: owner.to_string(),
            is_favorite: false,
        }
    }

    pub(crate) fn config(items: Vec<DirectoryItem>) -> DirectoryConfig {
        DirectoryConfig {
            domain: "Test".to_string(),
            subdomains: vec!["Alpha".into(), "Beta".into(), "Empty".into()],
            items,
        }
    }

    /// 8 записей, 3 из них Critical
    pub(crate) fn sample_store() -> DirectoryStore {
        use ItemKind::*;
        use ItemStatus::*;
        DirectoryStore::load(config(vec![
            item("1", Dashboard, "Alpha", Operational, "Team B"),
            item("2", Explore, "Alpha", Critical, "Team A"),
            item("3", Dashboard, "Beta", Warning, "Team B"),
            item("4", Dashboard, "Beta", Critical, "Team C"),
            item("5", Explore, "Beta", Operational, "Team A"),
            item("6", Dashboard, "Alpha", Warning, "Team C"),
            item("7", Explore, "Alpha", Operational, "Team B"),
            item("8", Dashboard, "Beta", Critical, "Team A"),
        ]))
        .expect("sample store is valid")
    }

    #[test]
    fn test_load_keeps_original_order() {
        let store = sample_store();
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(store.len(), 8);
        assert_eq!(store.domain(), "Test");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let items = vec![
            item("1", ItemKind::Dashboard, "Alpha", ItemStatus::Operational, "A"),
            item("1", ItemKind::Explore, "Beta", ItemStatus::Warning, "B"),
        ];
        assert_eq!(
            DirectoryStore::load(config(items)),
            Err(DirectoryError::DuplicateId("1".into()))
        );
    }

    #[test]
    fn test_undeclared_subdomain_rejected() {
        let items = vec![item(
            "1",
            ItemKind::Dashboard,
            "Gamma",
            ItemStatus::Operational,
            "A",
        )];
        assert!(matches!(
            DirectoryStore::load(config(items)),
            Err(DirectoryError::UndeclaredSubdomain { .. })
        ));
    }

    #[test]
    fn test_domain_mismatch_rejected() {
        let mut foreign = item("1", ItemKind::Dashboard, "Alpha", ItemStatus::Operational, "A");
        foreign.domain = "Finance".into();
        assert!(matches!(
            DirectoryStore::load(config(vec![foreign])),
            Err(DirectoryError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut nameless = item("1", ItemKind::Dashboard, "Alpha", ItemStatus::Operational, "A");
        nameless.name = "  ".into();
        assert_eq!(
            DirectoryStore::load(config(vec![nameless])),
            Err(DirectoryError::EmptyField {
                id: "1".into(),
                field: "name"
            })
        );

        let blank_id = item("", ItemKind::Dashboard, "Alpha", ItemStatus::Operational, "A");
        assert!(matches!(
            DirectoryStore::load(config(vec![blank_id])),
            Err(DirectoryError::EmptyField { field: "id", .. })
        ));
    }

    #[test]
    fn test_empty_domain_label_rejected() {
        let mut cfg = config(vec![]);
        cfg.domain = " ".into();
        let err = DirectoryStore::load(cfg).unwrap_err();
        assert_eq!(err, DirectoryError::EmptyDomainLabel);
        assert!(!err.to_string().contains("Item"));
    }

    #[test]
    fn test_duplicate_subdomain_declaration_rejected() {
        let mut cfg = config(vec![]);
        cfg.subdomains.push("Alpha".into());
        assert!(matches!(
            DirectoryStore::load(cfg),
            Err(DirectoryError::InvalidSubdomainList(_))
        ));
    }

    #[test]
    fn test_owner_options_sorted_and_unique() {
        let store = sample_store();
        assert_eq!(store.owner_options(), vec!["Team A", "Team B", "Team C"]);
    }

    #[test]
    fn test_subdomain_counts_include_empty_declared() {
        let counts = sample_store().subdomain_counts();
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.subdomain.as_str(), c.count))
            .collect();
        assert_eq!(pairs, vec![("Alpha", 4), ("Beta", 4), ("Empty", 0)]);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = sample_store();
        assert!(store.contains(&ItemId::new("3")));
        assert!(!store.contains(&ItemId::new("42")));
        assert_eq!(store.get(&ItemId::new("4")).map(|i| i.status), Some(ItemStatus::Critical));
    }
}
