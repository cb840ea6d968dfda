mod avatar;
mod blog;
mod credentials;
mod dialog;
mod header;
mod hero;
mod homepage;
mod image;
mod projects;
mod starfield;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Portfolio of a machine learning engineer and blockchain developer"
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="alternate" type="application/rss+xml" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/flexyledger-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Flexyledger - {title}") />
        <Router>
            <Routes fallback=|| {
                view! {
                    <div class="flex items-center justify-center min-h-screen bg-black">
                        <div class="animate-pulse text-cyan-400">"Page not found."</div>
                    </div>
                }
            }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section with id {id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll down by one viewport height.
pub(crate) fn scroll_past_fold() {
    let window = window();
    let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(height);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
