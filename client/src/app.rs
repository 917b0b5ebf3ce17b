//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{about::AboutPage, app_detail::AppDetailPage, blog_post::BlogPostPage, home::HomePage};
use crate::state::{posts::PostsState, ui::UiState};
use crate::util::dark_mode::boot_script;

pub const SITE_TITLE: &str = "Siva Krishna";
pub const AUTHOR_NAME: &str = "Siva Krishna";
pub const AUTHOR_IMAGE: &str = "/images/author.svg";
pub const AUTHOR_BIO: &str = "a designer focused on User Centered Design, Interaction Design and Visual design to create delightful experiences.";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The boot script runs before first paint so a stored or OS-level dark
/// preference does not flash the light theme while the WASM loads.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let posts = RwSignal::new(PostsState::default());

    provide_context(ui);
    provide_context(posts);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=AUTHOR_BIO/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                <Route path=(StaticSegment("apps"), ParamSegment("slug")) view=AppDetailPage/>
            </Routes>
        </Router>
    }
}
