//! Filter engine: четыре независимых фасета, объединённых логическим И.
//!
//! Все функции чистые. Движок никогда не переупорядочивает записи и не
//! делает нечёткого сопоставления: установленный фасет совпадает только
//! с точно равным значением поля.

use serde::{Deserialize, Serialize};

use super::item::{DirectoryItem, ItemKind, ItemStatus};
use super::store::DirectoryStore;
use crate::error::DirectoryError;

/// Значение селектора, означающее "без фильтра".
pub const MATCH_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Одно независимое измерение фильтрации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Type,
    Subdomain,
    Owner,
    Status,
}

impl Facet {
    pub fn all() -> [Facet; 4] {
        [Facet::Type, Facet::Subdomain, Facet::Owner, Facet::Status]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Type => "Type",
            Facet::Subdomain => "Subdomain",
            Facet::Owner => "Owner",
            Facet::Status => "Status",
        }
    }

    /// Ключ в query string
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Type => "type",
            Facet::Subdomain => "subdomain",
            Facet::Owner => "owner",
            Facet::Status => "status",
        }
    }

    /// Подпись синтетической опции "все"
    pub fn all_label(&self) -> &'static str {
        match self {
            Facet::Type => "All Types",
            Facet::Subdomain => "All Subdomains",
            Facet::Owner => "All Owners",
            Facet::Status => "All Status",
        }
    }
}

/// Опция селектора фасета. `value == None` для синтетической опции "все".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: Option<String>,
    pub label: String,
}

impl FacetOption {
    fn match_all(facet: Facet) -> Self {
        Self {
            value: None,
            label: facet.all_label().to_string(),
        }
    }

    fn exact(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            label: value.to_string(),
        }
    }

    /// Значение для `<option value=...>`
    pub fn select_value(&self) -> &str {
        self.value.as_deref().unwrap_or(MATCH_ALL)
    }
}

/// Список опций фасета: "все" первой, затем фиксированное перечисление
/// (тип, статус, объявленные поддомены) или отсортированные владельцы.
pub fn facet_options(store: &DirectoryStore, facet: Facet) -> Vec<FacetOption> {
    let values: Vec<String> = match facet {
        Facet::Type => ItemKind::all().iter().map(|k| k.as_str().to_string()).collect(),
        Facet::Subdomain => store.subdomains().to_vec(),
        Facet::Owner => store.owner_options(),
        Facet::Status => ItemStatus::all()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    };

    std::iter::once(FacetOption::match_all(facet))
        .chain(values.iter().map(|v| FacetOption::exact(v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Выбор по четырём фасетам. `None` означает "не задан" и совпадает со всем.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub kind: Option<ItemKind>,
    pub subdomain: Option<String>,
    pub owner: Option<String>,
    pub status: Option<ItemStatus>,
}

impl FilterState {
    pub fn with_kind(self, kind: Option<ItemKind>) -> Self {
        Self { kind, ..self }
    }

    pub fn with_subdomain(self, subdomain: Option<String>) -> Self {
        Self { subdomain, ..self }
    }

    pub fn with_owner(self, owner: Option<String>) -> Self {
        Self { owner, ..self }
    }

    pub fn with_status(self, status: Option<ItemStatus>) -> Self {
        Self { status, ..self }
    }

    pub fn cleared(self, facet: Facet) -> Self {
        match facet {
            Facet::Type => self.with_kind(None),
            Facet::Subdomain => self.with_subdomain(None),
            Facet::Owner => self.with_owner(None),
            Facet::Status => self.with_status(None),
        }
    }

    /// Установить фасет из сырого значения селектора.
    ///
    /// `"all"` сбрасывает фасет. Значение вне списка опций фасета отклоняется,
    /// поэтому состояние никогда не бывает частично невалидным.
    pub fn select(
        self,
        store: &DirectoryStore,
        facet: Facet,
        raw: &str,
    ) -> Result<Self, DirectoryError> {
        if raw == MATCH_ALL {
            return Ok(self.cleared(facet));
        }

        let invalid = || DirectoryError::InvalidFacetValue {
            facet,
            value: raw.to_string(),
        };

        match facet {
            Facet::Type => {
                let kind = ItemKind::from_label(raw).ok_or_else(invalid)?;
                Ok(self.with_kind(Some(kind)))
            }
            Facet::Status => {
                let status = ItemStatus::from_label(raw).ok_or_else(invalid)?;
                Ok(self.with_status(Some(status)))
            }
            Facet::Subdomain => {
                if !store.is_declared_subdomain(raw) {
                    return Err(invalid());
                }
                Ok(self.with_subdomain(Some(raw.to_string())))
            }
            Facet::Owner => {
                if !store.items().iter().any(|item| item.owner == raw) {
                    return Err(invalid());
                }
                Ok(self.with_owner(Some(raw.to_string())))
            }
        }
    }

    /// Текущее значение фасета в виде строки селектора
    pub fn value(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Type => self.kind.map(|k| k.as_str().to_string()),
            Facet::Subdomain => self.subdomain.clone(),
            Facet::Owner => self.owner.clone(),
            Facet::Status => self.status.map(|s| s.as_str().to_string()),
        }
    }

    pub fn is_set(&self, facet: Facet) -> bool {
        self.value(facet).is_some()
    }

    pub fn is_unset(&self) -> bool {
        self.active_count() == 0
    }

    /// Установленные фасеты с их значениями, в фиксированном порядке фасетов
    pub fn active_facets(&self) -> Vec<(Facet, String)> {
        Facet::all()
            .into_iter()
            .filter_map(|facet| self.value(facet).map(|value| (facet, value)))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        Facet::all().iter().filter(|f| self.is_set(**f)).count()
    }

    /// Проверка одной записи по всем установленным фасетам
    pub fn matches(&self, item: &DirectoryItem) -> bool {
        let matches_kind = self.kind.map_or(true, |kind| item.kind == kind);
        let matches_subdomain = self
            .subdomain
            .as_deref()
            .map_or(true, |subdomain| item.subdomain == subdomain);
        let matches_owner = self
            .owner
            .as_deref()
            .map_or(true, |owner| item.owner == owner);
        let matches_status = self.status.map_or(true, |status| item.status == status);

        matches_kind && matches_subdomain && matches_owner && matches_status
    }
}

/// Отфильтровать хранилище, сохраняя исходный относительный порядок.
pub fn apply<'a>(store: &'a DirectoryStore, filters: &FilterState) -> Vec<&'a DirectoryItem> {
    store
        .items()
        .iter()
        .filter(|item| filters.matches(item))
        .collect()
}

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Отфильтрованный список, готовый к рендерингу.
///
/// `filtered == false` означает, что ни один фасет не установлен и список
/// совпадает с хранилищем; пустой список при `filtered == true` это
/// состояние "ничего не найдено".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    pub items: Vec<DirectoryItem>,
    pub filtered: bool,
}

impl DerivedView {
    pub fn compute(store: &DirectoryStore, filters: &FilterState) -> Self {
        Self {
            items: apply(store, filters).into_iter().cloned().collect(),
            filtered: !filters.is_unset(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        !self.filtered
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::store::tests::sample_store;

    fn ids(items: &[&DirectoryItem]) -> Vec<String> {
        items.iter().map(|i| i.id.0.clone()).collect()
    }

    fn single_facet_filters(store: &DirectoryStore) -> Vec<FilterState> {
        let mut all = Vec::new();
        for facet in Facet::all() {
            for option in facet_options(store, facet) {
                if let Some(value) = option.value {
                    all.push(FilterState::default().select(store, facet, &value).unwrap());
                }
            }
        }
        all
    }

    #[test]
    fn test_unset_filters_return_full_store() {
        let store = sample_store();
        let result = apply(&store, &FilterState::default());
        assert_eq!(result.len(), store.len());
        assert!(result.iter().zip(store.items()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_status_critical_keeps_relative_order() {
        let store = sample_store();
        let filters = FilterState::default().with_status(Some(ItemStatus::Critical));
        assert_eq!(ids(&apply(&store, &filters)), vec!["2", "4", "8"]);
    }

    #[test]
    fn test_single_facet_is_sound_and_complete() {
        let store = sample_store();
        for filters in single_facet_filters(&store) {
            let result = apply(&store, &filters);
            for item in store.items() {
                let included = result.iter().any(|r| r.id == item.id);
                assert_eq!(included, filters.matches(item), "filters {:?}", filters);
            }
            assert!(result.iter().all(|item| filters.matches(item)));
        }
    }

    #[test]
    fn test_combined_facets_are_intersection() {
        let store = sample_store();
        let kind = FilterState::default().with_kind(Some(ItemKind::Dashboard));
        let owner = FilterState::default().with_owner(Some("Team B".into()));
        let subdomain = FilterState::default().with_subdomain(Some("Beta".into()));

        let combined = FilterState::default()
            .with_kind(Some(ItemKind::Dashboard))
            .with_owner(Some("Team B".into()))
            .with_subdomain(Some("Beta".into()));

        let expected: Vec<String> = ids(&apply(&store, &kind))
            .into_iter()
            .filter(|id| ids(&apply(&store, &owner)).contains(id))
            .filter(|id| ids(&apply(&store, &subdomain)).contains(id))
            .collect();

        assert_eq!(ids(&apply(&store, &combined)), expected);
        assert_eq!(expected, vec!["3"]);
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let store = sample_store();
        let filters = FilterState::default().with_subdomain(Some("Empty".into()));
        let view = DerivedView::compute(&store, &filters);
        assert!(view.is_empty());
        assert!(!view.is_unfiltered());

        let unfiltered = DerivedView::compute(&store, &FilterState::default());
        assert!(unfiltered.is_unfiltered());
        assert_eq!(unfiltered.len(), 8);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let store = sample_store();
        let filters = FilterState::default().with_kind(Some(ItemKind::Explore));
        assert_eq!(apply(&store, &filters), apply(&store, &filters));
    }

    #[test]
    fn test_select_rejects_illegal_values() {
        let store = sample_store();
        let state = FilterState::default();

        let err = state.clone().select(&store, Facet::Status, "Degraded").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::InvalidFacetValue {
                facet: Facet::Status,
                value: "Degraded".into()
            }
        );
        assert!(state.clone().select(&store, Facet::Owner, "Nobody").is_err());
        assert!(state.clone().select(&store, Facet::Subdomain, "Gamma").is_err());
        assert!(state.clone().select(&store, Facet::Type, "dashboard").is_err());
    }

    #[test]
    fn test_select_all_clears_facet() {
        let store = sample_store();
        let state = FilterState::default()
            .select(&store, Facet::Owner, "Team A")
            .unwrap()
            .select(&store, Facet::Type, "Explore")
            .unwrap();
        assert_eq!(state.active_count(), 2);

        let state = state.select(&store, Facet::Owner, MATCH_ALL).unwrap();
        assert_eq!(state.owner, None);
        assert_eq!(state.kind, Some(ItemKind::Explore));
        assert_eq!(
            state.active_facets(),
            vec![(Facet::Type, "Explore".to_string())]
        );
    }

    #[test]
    fn test_declared_empty_subdomain_is_selectable() {
        let store = sample_store();
        let state = FilterState::default().select(&store, Facet::Subdomain, "Empty");
        assert!(state.is_ok());
    }

    #[test]
    fn test_facet_options_prepend_match_all() {
        let store = sample_store();
        let owners = facet_options(&store, Facet::Owner);
        assert_eq!(owners[0].value, None);
        assert_eq!(owners[0].label, "All Owners");
        assert_eq!(owners[0].select_value(), MATCH_ALL);
        let values: Vec<&str> = owners[1..].iter().map(|o| o.select_value()).collect();
        assert_eq!(values, vec!["Team A", "Team B", "Team C"]);

        let subdomains = facet_options(&store, Facet::Subdomain);
        assert_eq!(subdomains.len(), 4);
        assert_eq!(subdomains[3].label, "Empty");

        let statuses = facet_options(&store, Facet::Status);
        let labels: Vec<&str> = statuses.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Status", "Operational", "Warning", "Critical"]);
    }
}
