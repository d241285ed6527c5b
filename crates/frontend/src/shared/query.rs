//! Синхронизация состояния фильтров с query string (`?type=...&owner=...`).
//!
//! Значения в URL не доверенные: каждое проходит через тот же переход
//! `FilterState::select`, что и выбор в селекторе, а невалидные отбрасываются.

use contracts::directory::{DirectoryStore, Facet, FilterState};
use contracts::DirectoryError;
use serde::Deserialize;
use std::collections::BTreeMap;
use web_sys::window;

/// Глубина вложенности ключей `a[b][c]`, которую разбирает serde_qs
const QUERY_MAX_DEPTH: usize = 5;

/// Сырые значения фасетов из URL, до проверки по каталогу.
/// Посторонние параметры (utm и т.п.) игнорируются.
#[derive(Debug, Default, Deserialize)]
struct QueryFilters {
    #[serde(rename = "type")]
    kind: Option<String>,
    subdomain: Option<String>,
    owner: Option<String>,
    status: Option<String>,
}

impl QueryFilters {
    /// Последнее вхождение ключа побеждает
    fn merge(&mut self, other: QueryFilters) {
        if other.kind.is_some() {
            self.kind = other.kind;
        }
        if other.subdomain.is_some() {
            self.subdomain = other.subdomain;
        }
        if other.owner.is_some() {
            self.owner = other.owner;
        }
        if other.status.is_some() {
            self.status = other.status;
        }
    }

    fn value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Type => self.kind.as_deref(),
            Facet::Subdomain => self.subdomain.as_deref(),
            Facet::Owner => self.owner.as_deref(),
            Facet::Status => self.status.as_deref(),
        }
    }
}

/// Сериализовать установленные фасеты; пустая строка если фильтров нет
pub fn filters_to_query(filters: &FilterState) -> String {
    let params: BTreeMap<&str, String> = filters
        .active_facets()
        .into_iter()
        .map(|(facet, value)| (facet.key(), value))
        .collect();
    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(&params) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Failed to serialize filters into URL query: {}", err);
            String::new()
        }
    }
}

/// Разобрать query string попарно: битый параметр не роняет остальные
fn parse_query(query: &str) -> (QueryFilters, Vec<DirectoryError>) {
    let config = serde_qs::Config::new(QUERY_MAX_DEPTH, false);
    let mut params = QueryFilters::default();
    let mut errors = Vec::new();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
    {
        match config.deserialize_str::<QueryFilters>(pair) {
            Ok(parsed) => params.merge(parsed),
            Err(err) => errors.push(DirectoryError::InvalidQuery {
                pair: pair.to_string(),
                message: err.to_string(),
            }),
        }
    }
    (params, errors)
}

/// Восстановить фильтры из query string. Возвращает состояние из валидных
/// значений и список отклонённых (битые параметры и недопустимые значения).
pub fn filters_from_query(
    store: &DirectoryStore,
    query: &str,
) -> (FilterState, Vec<DirectoryError>) {
    let (params, mut rejected) = parse_query(query);

    let mut filters = FilterState::default();
    for facet in Facet::all() {
        let Some(raw) = params.value(facet) else {
            continue;
        };
        match filters.clone().select(store, facet, raw) {
            Ok(next) => filters = next,
            Err(err) => rejected.push(err),
        }
    }
    (filters, rejected)
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Заменить query string без навигации и без записи в историю
pub fn replace_search(query: &str) {
    let new_search = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };

    // Only update URL if it actually changed
    if current_search() == new_search {
        return;
    }

    let Some(w) = window() else {
        return;
    };
    let path = w.location().pathname().unwrap_or_default();
    if let Ok(history) = w.history() {
        if let Err(err) = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, new_search)),
        ) {
            log::warn!("Failed to update URL query: {:?}", err);
        }
    }
}
