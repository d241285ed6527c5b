use super::cards::{ResourceCardView, ToolCardView};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::catalog::{Domain, DomainCatalog};
use leptos::prelude::*;
use leptos_router::components::A;

/// Хаб домена: ресурсы, инструменты и переход в директорию.
#[component]
pub fn DomainHub(domain: Domain) -> impl IntoView {
    let catalog = match DomainCatalog::load(domain) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to load {} hub: {}", domain, err);
            return view! {
                <div class="page">
                    <div class="alert alert--error">
                        "Hub could not be loaded: " {err.to_string()}
                    </div>
                </div>
            }
            .into_any();
        }
    };

    let hub = catalog.hub;
    let tools_heading = hub
        .tools_heading
        .clone()
        .unwrap_or_else(|| "Tools".to_string());
    let tools_subtitle = hub.tools_subtitle.clone();
    let has_tools = hub.has_tools();
    let tools = hub.tools;
    let item_count = catalog.store.len();

    view! {
        <div class="page hub-page">
            <PageHeader
                title=hub.title
                subtitle=hub.subtitle
                breadcrumbs=vec![(hub.breadcrumb, None)]
            >
                <A href=domain.directory_path()>
                    <span class="button button--primary">
                        {icon("layout-grid")}
                        {format!("Browse directory ({})", item_count)}
                    </span>
                </A>
            </PageHeader>

            <section class="hub-page__section">
                <div class="hub-page__grid">
                    {hub
                        .resources
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ResourceCardView card=card index=index /> })
                        .collect_view()}
                </div>
            </section>

            {has_tools.then(|| view! {
                <section class="hub-page__section">
                    <h2 class="hub-page__heading">{tools_heading}</h2>
                    {tools_subtitle.map(|s| view! { <p class="hub-page__subtitle">{s}</p> })}
                    <div class="hub-page__grid">
                        {tools
                            .into_iter()
                            .enumerate()
                            .map(|(index, card)| view! { <ToolCardView card=card index=index /> })
                            .collect_view()}
                    </div>
                </section>
            })}
        </div>
    }
    .into_any()
}
