//! Встроенные каталоги доменов.
//!
//! Каждый домен описан одним TOML-документом, который вкомпилирован в бинарник
//! и разбирается при создании представления. Некорректный документ это ошибка
//! загрузки, а не молчаливо пропущенные записи.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::directory::{DirectoryConfig, DirectoryStore};
use crate::error::DirectoryError;
use crate::hub::HubConfig;

const FINANCE_CATALOG: &str = include_str!("../../catalog/finance.toml");
const MERCHANDISING_CATALOG: &str = include_str!("../../catalog/merchandising.toml");
const STORE_SELLING_CATALOG: &str = include_str!("../../catalog/store_selling.toml");

/// Бизнес-домены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Finance,
    Merchandising,
    StoreSelling,
}

impl Domain {
    /// Сегмент пути в URL
    pub fn slug(&self) -> &'static str {
        match self {
            Domain::Finance => "finance",
            Domain::Merchandising => "merchandising",
            Domain::StoreSelling => "store-selling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Finance => "Finance",
            Domain::Merchandising => "Merchandising",
            Domain::StoreSelling => "Store Selling",
        }
    }

    pub fn all() -> [Domain; 3] {
        [Domain::Finance, Domain::Merchandising, Domain::StoreSelling]
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "finance" => Some(Domain::Finance),
            "merchandising" => Some(Domain::Merchandising),
            "store-selling" => Some(Domain::StoreSelling),
            _ => None,
        }
    }

    pub fn hub_path(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn directory_path(&self) -> String {
        format!("/{}/directory", self.slug())
    }

    fn source(&self) -> &'static str {
        match self {
            Domain::Finance => FINANCE_CATALOG,
            Domain::Merchandising => MERCHANDISING_CATALOG,
            Domain::StoreSelling => STORE_SELLING_CATALOG,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Информационная карточка в шапке директории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Тексты страницы директории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPage {
    pub title: String,
    pub subtitle: String,
    #[serde(default, rename = "info")]
    pub info_cards: Vec<InfoCard>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    hub: HubConfig,
    page: DirectoryPage,
    directory: DirectoryConfig,
}

/// Разобранный и провалидированный каталог одного домена
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCatalog {
    pub domain: Domain,
    pub hub: HubConfig,
    pub page: DirectoryPage,
    pub store: Arc<DirectoryStore>,
}

impl DomainCatalog {
    pub fn load(domain: Domain) -> Result<Self, DirectoryError> {
        Self::parse(domain, domain.source())
    }

    /// Разобрать TOML-документ каталога и проверить инварианты
    pub fn parse(domain: Domain, source: &str) -> Result<Self, DirectoryError> {
        let document: CatalogDocument =
            toml::from_str(source).map_err(|e| DirectoryError::Parse {
                domain: domain.display_name().to_string(),
                message: e.to_string(),
            })?;

        if document.directory.domain != domain.display_name() {
            return Err(DirectoryError::Parse {
                domain: domain.display_name().to_string(),
                message: format!(
                    "catalog declares domain {:?}",
                    document.directory.domain
                ),
            });
        }

        document.hub.validate()?;
        let store = DirectoryStore::load(document.directory)?;

        Ok(Self {
            domain,
            hub: document.hub,
            page: document.page,
            store: Arc::new(store),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{
        apply, DirectoryAction, DirectoryState, Facet, FilterState, ItemId, ItemKind, ItemStatus,
    };

    #[test]
    fn test_all_embedded_catalogs_load() {
        for domain in Domain::all() {
            let catalog = DomainCatalog::load(domain).unwrap();
            assert_eq!(catalog.store.len(), 8, "{}", domain);
            assert_eq!(catalog.store.subdomains().len(), 4, "{}", domain);
            assert_eq!(catalog.store.domain(), domain.display_name());
            assert_eq!(catalog.page.info_cards.len(), 2);
            assert_eq!(catalog.hub.resources.len(), 2);
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for domain in Domain::all() {
            assert_eq!(Domain::from_slug(domain.slug()), Some(domain));
        }
        assert_eq!(Domain::from_slug("alerts"), None);
        assert_eq!(Domain::StoreSelling.directory_path(), "/store-selling/directory");
    }

    #[test]
    fn test_merchandising_pricing_explore() {
        let catalog = DomainCatalog::load(Domain::Merchandising).unwrap();
        let filters = FilterState::default()
            .with_subdomain(Some("Pricing & Promotions".into()))
            .with_kind(Some(ItemKind::Explore));
        let result = apply(&catalog.store, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Markdown Effectiveness Explore");
    }

    #[test]
    fn test_finance_critical_items() {
        let catalog = DomainCatalog::load(Domain::Finance).unwrap();
        let filters = FilterState::default().with_status(Some(ItemStatus::Critical));
        let names: Vec<&str> = apply(&catalog.store, &filters)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["OPEX Variance by Region", "Margin Analysis Explore"]);
    }

    #[test]
    fn test_owner_from_other_domain_matches_nothing() {
        let catalog = DomainCatalog::load(Domain::StoreSelling).unwrap();
        let filters = FilterState::default().with_owner(Some("Pricing Team".into()));
        assert!(apply(&catalog.store, &filters).is_empty());

        // через селектор такое значение не выбрать
        let state = DirectoryState::new(catalog.store.clone());
        assert!(state
            .reduce(DirectoryAction::SelectFacet(Facet::Owner, "Pricing Team".into()))
            .is_err());
    }

    #[test]
    fn test_finance_owner_options() {
        let catalog = DomainCatalog::load(Domain::Finance).unwrap();
        assert_eq!(
            catalog.store.owner_options(),
            vec!["AP Team", "Finance Analytics Team", "Regional Finance"]
        );
    }

    #[test]
    fn test_merchandising_empty_owner_after_favorite() {
        let catalog = DomainCatalog::load(Domain::Merchandising).unwrap();
        let state = DirectoryState::new(catalog.store.clone())
            .reduce(DirectoryAction::ToggleFavorite(ItemId::new("3")))
            .unwrap()
            .reduce(DirectoryAction::SelectFacet(Facet::Owner, "Pricing Team".into()))
            .unwrap();
        let view = state.view();
        assert!(view.items.iter().all(|item| item.id.as_str() != "3"));
        assert!(state.is_favorite(&ItemId::new("3")));
    }

    #[test]
    fn test_only_merchandising_has_tools() {
        let merch = DomainCatalog::load(Domain::Merchandising).unwrap();
        assert_eq!(merch.hub.tools.len(), 3);
        assert_eq!(merch.hub.tools.iter().filter(|t| t.coming_soon).count(), 1);
        assert!(!DomainCatalog::load(Domain::Finance).unwrap().hub.has_tools());
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let source = FINANCE_CATALOG.replacen("status = \"Critical\"", "status = \"Broken\"", 1);
        assert!(matches!(
            DomainCatalog::parse(Domain::Finance, &source),
            Err(DirectoryError::Parse { .. })
        ));

        assert!(matches!(
            DomainCatalog::parse(Domain::Merchandising, FINANCE_CATALOG),
            Err(DirectoryError::Parse { .. })
        ));
    }

    #[test]
    fn test_undeclared_subdomain_in_catalog() {
        let source = FINANCE_CATALOG.replacen(
            "subdomain = \"AP & AR\"",
            "subdomain = \"Treasury\"",
            1,
        );
        assert!(matches!(
            DomainCatalog::parse(Domain::Finance, &source),
            Err(DirectoryError::UndeclaredSubdomain { .. })
        ));
    }
}
