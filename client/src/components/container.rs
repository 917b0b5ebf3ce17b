//! Page frame shared by every route: header, main column, footer.

use leptos::prelude::*;

use crate::app::AUTHOR_NAME;
use crate::components::header::Header;

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">{children()}</main>
            <footer class="page__footer">
                <span>{AUTHOR_NAME}</span>
            </footer>
        </div>
    }
}
