//! Navbar component - application top navigation bar.
//!
//! Contains:
//! - Application title (link to home)
//! - Links to every domain hub
//! - Admin mode switch

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::catalog::Domain;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Switch;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();

    let navbar_class = move || {
        if ctx.scrolled.get() {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    };

    // Лог при переключении, сам флаг меняет Switch
    Effect::new(move |prev: Option<bool>| {
        let admin = ctx.admin_mode.get();
        if prev.is_some() {
            log::info!("Admin mode {}", if admin { "enabled" } else { "disabled" });
        }
        admin
    });

    view! {
        <header class=navbar_class>
            <div class="navbar__brand">
                <A href="/">
                    <span class="navbar__title">"Data Directory"</span>
                </A>
            </div>

            <nav class="navbar__links">
                {Domain::all()
                    .into_iter()
                    .map(|domain| {
                        view! {
                            <A href=domain.hub_path()>
                                <span class="navbar__link">{domain.display_name()}</span>
                            </A>
                        }
                    })
                    .collect_view()}
                <A href="/navigation-search">
                    <span class="navbar__link">
                        {icon("search")}
                        "Find Dashboards"
                    </span>
                </A>
            </nav>

            <div class="navbar__actions">
                {move || ctx.admin_mode.get().then(|| icon("shield"))}
                <Switch checked=ctx.admin_mode label="Admin" />
            </div>
        </header>
    }
}
