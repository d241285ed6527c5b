use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::catalog::{Domain, DomainCatalog};
use leptos::prelude::*;
use leptos_router::components::A;

/// Стартовая страница: карточка на каждый домен
#[component]
pub fn HomePage() -> impl IntoView {
    let cards = Domain::all()
        .into_iter()
        .enumerate()
        .map(|(index, domain)| {
            let subtitle = match DomainCatalog::load(domain) {
                Ok(catalog) => catalog.hub.subtitle,
                Err(err) => {
                    log::error!("Failed to load {} catalog: {}", domain, err);
                    String::new()
                }
            };
            view! {
                <CardAnimated delay_ms=stagger_delay(index) class="home-card">
                    <h2 class="home-card__title">{domain.display_name()}</h2>
                    <p class="home-card__description">{subtitle}</p>
                    <div class="home-card__links">
                        <A href=domain.hub_path()>
                            <span class="home-card__link">"Open hub"</span>
                        </A>
                        <A href=domain.directory_path()>
                            <span class="home-card__link">
                                {icon("layout-grid")}
                                "Directory"
                            </span>
                        </A>
                    </div>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <div class="page home-page">
            <PageHeader
                title="Data Directory"
                subtitle="Dashboards and explores across business domains".to_string()
            >
                <A href="/navigation-search">
                    <span class="button button--secondary">
                        {icon("search")}
                        "Find Dashboards"
                    </span>
                </A>
            </PageHeader>
            <div class="home-page__grid">{cards}</div>
        </div>
    }
}
