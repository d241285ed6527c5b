use crate::domain::directory::ui::list::DomainDirectory;
use crate::domain::hub::ui::DomainHub;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::navigation_search::NavigationSearchPage;
use crate::system::pages::not_found::NotFoundPage;
use contracts::catalog::Domain;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Домен из сегмента `:domain`; `None` для неизвестного slug
fn use_domain_param() -> Memo<Option<Domain>> {
    let params = use_params_map();
    Memo::new(move |_| {
        let slug = params.read().get("domain").unwrap_or_default();
        let domain = Domain::from_slug(&slug);
        if domain.is_none() {
            log::warn!("Unknown domain in URL: {:?}", slug);
        }
        domain
    })
}

#[component]
fn HubRoute() -> impl IntoView {
    let domain = use_domain_param();
    move || match domain.get() {
        Some(domain) => view! { <DomainHub domain=domain /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Новое монтирование на каждый домен: состояние директории не переживает
/// переход между доменами
#[component]
fn DirectoryRoute() -> impl IntoView {
    let domain = use_domain_param();
    move || match domain.get() {
        Some(domain) => view! { <DomainDirectory domain=domain /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/navigation-search") view=NavigationSearchPage />
                    <Route path=path!("/:domain") view=HubRoute />
                    <Route path=path!("/:domain/directory") view=DirectoryRoute />
                </Routes>
            </Shell>
        </Router>
    }
}
