use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Scroll state for the navbar shadow; listener lives as long as the app.
    ctx.init_scroll_tracking();

    view! {
        <AppRoutes />
    }
}
