use crate::shared::query::{current_search, filters_from_query};
use contracts::directory::{DirectoryAction, DirectoryState, DirectoryStore};
use leptos::prelude::*;
use std::sync::Arc;

/// Создать состояние директории для одного монтирования представления.
///
/// Фильтры восстанавливаются из URL, избранное посевается из фикстуры.
pub fn create_state(store: Arc<DirectoryStore>) -> RwSignal<DirectoryState> {
    let (filters, rejected) = filters_from_query(&store, &current_search());
    for err in rejected {
        log::warn!("Ignoring filter from URL: {}", err);
    }
    RwSignal::new(DirectoryState::new(store).with_filters(filters))
}

/// Применить действие к состоянию. Отклонённое действие оставляет состояние как было.
pub fn dispatch(state: RwSignal<DirectoryState>, action: DirectoryAction) {
    log::debug!("directory action: {:?}", action);
    let current = state.get_untracked();
    match current.reduce(action) {
        Ok(next) => state.set(next),
        Err(err) => log::warn!("Directory action rejected: {}", err),
    }
}
