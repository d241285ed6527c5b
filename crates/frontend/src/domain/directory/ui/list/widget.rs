use super::item_card::ItemCard;
use super::state::{create_state, dispatch};
use crate::layout::global_context::use_global_context;
use crate::shared::components::filter_panel::{FilterBar, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::FacetSelect;
use crate::shared::icons::icon;
use crate::shared::query::{filters_to_query, replace_search};
use contracts::catalog::{Domain, DomainCatalog};
use contracts::directory::{DerivedView, DirectoryAction, Facet, ItemId, MATCH_ALL};
use leptos::prelude::*;

/// Страница директории домена: фильтры, избранное, список карточек.
///
/// Каталог грузится при монтировании; ошибка загрузки рендерит панель ошибки
/// вместо пустого списка.
#[component]
pub fn DomainDirectory(domain: Domain) -> impl IntoView {
    match DomainCatalog::load(domain) {
        Ok(catalog) => view! { <DirectoryView catalog=catalog /> }.into_any(),
        Err(err) => {
            log::error!("Failed to load {} directory: {}", domain, err);
            view! {
                <div class="page">
                    <PageHeader
                        title=format!("{} Directory", domain.display_name())
                        breadcrumbs=vec![
                            (domain.display_name().to_string(), Some(domain.hub_path())),
                            ("Directory".to_string(), None),
                        ]
                    >
                        {()}
                    </PageHeader>
                    <div class="alert alert--error">
                        "Catalog could not be loaded: " {err.to_string()}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn DirectoryView(catalog: DomainCatalog) -> impl IntoView {
    let ctx = use_global_context();
    let DomainCatalog {
        domain, page, store, ..
    } = catalog;

    log::debug!("Directory {} loaded: {} items", domain, store.len());

    let state = create_state(store);

    // Производный вид пересчитывается только при смене фильтров
    let filters = Memo::new(move |_| state.with(|s| s.filters.clone()));
    let view_memo = Memo::new(move |_| {
        let filters = filters.get();
        state.with_untracked(|s| DerivedView::compute(s.store(), &filters))
    });
    let active_count = Signal::derive(move || filters.with(|f| f.active_count()));

    // Состояние фильтров -> query string
    Effect::new(move |_| {
        let query = filters.with(filters_to_query);
        replace_search(&query);
    });

    let on_clear_all = Callback::new(move |_| dispatch(state, DirectoryAction::ClearAll));
    let on_toggle_favorite =
        Callback::new(move |id: ItemId| dispatch(state, DirectoryAction::ToggleFavorite(id)));

    let selects = Facet::all()
        .into_iter()
        .map(|facet| {
            let options = state.with_untracked(|s| s.options(facet));
            let value = Signal::derive(move || {
                filters
                    .with(|f| f.value(facet))
                    .unwrap_or_else(|| MATCH_ALL.to_string())
            });
            let on_change = Callback::new(move |raw: String| {
                dispatch(state, DirectoryAction::SelectFacet(facet, raw))
            });
            view! {
                <FacetSelect facet=facet value=value options=options on_change=on_change />
            }
        })
        .collect_view();

    let filter_tags = move || {
        filters
            .get()
            .active_facets()
            .into_iter()
            .map(|(facet, value)| {
                let on_remove =
                    Callback::new(move |_| dispatch(state, DirectoryAction::ClearFacet(facet)));
                view! {
                    <FilterTag label=format!("{}: {}", facet.label(), value) on_remove=on_remove />
                }
            })
            .collect_view()
    };

    let result_count = move || {
        let view = view_memo.get();
        if view.filtered {
            format!("{} of {} items", view.len(), state.with_untracked(|s| s.store().len()))
        } else {
            format!("{} items", view.len())
        }
    };

    view! {
        <div class="page directory-page">
            <PageHeader
                title=page.title.clone()
                subtitle=page.subtitle.clone()
                breadcrumbs=vec![
                    (domain.display_name().to_string(), Some(domain.hub_path())),
                    ("Directory".to_string(), None),
                ]
            >
                {()}
            </PageHeader>

            <div class="directory-page__info">
                {page
                    .info_cards
                    .into_iter()
                    .map(|card| view! {
                        <div class="info-card">
                            <div class="info-card__icon">{icon(&card.icon)}</div>
                            <div>
                                <h3 class="info-card__title">{card.title}</h3>
                                <p class="info-card__description">{card.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <FilterBar
                active_filters_count=active_count
                on_clear_all=on_clear_all
                filter_content=Box::new(move || selects.into_any())
                filter_tags=std::sync::Arc::new(move || view! { {filter_tags} }.into_any())
            />

            <div class="directory-page__count">{result_count}</div>

            <Show
                when=move || !view_memo.with(|v| v.is_empty())
                fallback=|| view! {
                    <div class="directory-page__empty">
                        "No results found. Try adjusting your filters."
                    </div>
                }
            >
                <div class="directory-page__grid">
                    <For
                        each=move || view_memo.get().items.into_iter().enumerate()
                        key=|(index, item)| (item.id.clone(), *index)
                        children=move |(index, item)| {
                            let id = item.id.clone();
                            let is_favorite =
                                Signal::derive(move || state.with(|s| s.is_favorite(&id)));
                            view! {
                                <ItemCard
                                    item=item
                                    index=index
                                    is_favorite=is_favorite
                                    show_meta=ctx.admin_mode
                                    on_toggle_favorite=on_toggle_favorite
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
