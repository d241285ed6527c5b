use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - заголовок страницы с хлебными крошками
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Breadcrumb trail after "Home": (label, href). The last entry is the current page.
    #[prop(optional)]
    breadcrumbs: Vec<(String, Option<String>)>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let has_breadcrumbs = !breadcrumbs.is_empty();

    view! {
        <div class="page-header">
            {has_breadcrumbs.then(|| view! {
                <nav class="breadcrumb" aria-label="breadcrumb">
                    <A href="/">
                        <span class="breadcrumb__link">"Home"</span>
                    </A>
                    {breadcrumbs
                        .into_iter()
                        .map(|(label, href)| {
                            let crumb = match href {
                                Some(href) => view! {
                                    <A href=href>
                                        <span class="breadcrumb__link">{label}</span>
                                    </A>
                                }.into_any(),
                                None => view! {
                                    <span class="breadcrumb__page">{label}</span>
                                }.into_any(),
                            };
                            view! {
                                <span class="breadcrumb__separator">{icon("chevron-right")}</span>
                                {crumb}
                            }
                        })
                        .collect_view()}
                </nav>
            })}
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
                <div class="page-header__actions">
                    {children()}
                </div>
            </div>
        </div>
    }
}
