//! Явный контейнер состояния директории: значение + чистые переходы.
//!
//! Слой рендеринга держит `DirectoryState` в сигнале и только подписывается
//! на него; вся логика переходов проверяется тестами без DOM.

use std::sync::Arc;

use super::favorites::FavoriteSet;
use super::filter::{facet_options, DerivedView, Facet, FacetOption, FilterState};
use super::item::ItemId;
use super::store::DirectoryStore;
use crate::error::DirectoryError;

/// Действие пользователя над директорией
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    /// Сырое значение селектора; `"all"` сбрасывает фасет
    SelectFacet(Facet, String),
    ClearFacet(Facet),
    ClearAll,
    ToggleFavorite(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    store: Arc<DirectoryStore>,
    pub filters: FilterState,
    pub favorites: FavoriteSet,
}

impl DirectoryState {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        let favorites = FavoriteSet::seeded(&store);
        Self {
            store,
            filters: FilterState::default(),
            favorites,
        }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    /// Применить действие. При ошибке исходное состояние не меняется
    /// (оно потреблено, но вызывающий держит копию в сигнале).
    pub fn reduce(self, action: DirectoryAction) -> Result<Self, DirectoryError> {
        match action {
            DirectoryAction::SelectFacet(facet, raw) => {
                let filters = self.filters.clone().select(&self.store, facet, &raw)?;
                Ok(Self { filters, ..self })
            }
            DirectoryAction::ClearFacet(facet) => {
                let filters = self.filters.clone().cleared(facet);
                Ok(Self { filters, ..self })
            }
            DirectoryAction::ClearAll => Ok(Self {
                filters: FilterState::default(),
                ..self
            }),
            DirectoryAction::ToggleFavorite(id) => {
                if !self.store.contains(&id) {
                    return Err(DirectoryError::UnknownItem(id.0));
                }
                let favorites = self.favorites.toggled(&id);
                Ok(Self { favorites, ..self })
            }
        }
    }

    /// Подставить готовый набор фильтров (например, восстановленный из URL)
    pub fn with_filters(self, filters: FilterState) -> Self {
        Self { filters, ..self }
    }

    pub fn view(&self) -> DerivedView {
        DerivedView::compute(&self.store, &self.filters)
    }

    pub fn is_favorite(&self, id: &ItemId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn options(&self, facet: Facet) -> Vec<FacetOption> {
        facet_options(&self.store, facet)
    }
}
