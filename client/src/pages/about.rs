//! About page.

use leptos::prelude::*;

use crate::app::{AUTHOR_BIO, AUTHOR_NAME};
use crate::components::container::Container;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Container>
            <section class="about">
                <h1 class="section-title">"About"</h1>
                <p>
                    "I'm "
                    <span class="accent">{AUTHOR_NAME}</span>
                    ", "
                    {AUTHOR_BIO}
                </p>
                <p>
                    "Most of my spare time goes into small macOS utilities. "
                    <a href="/#work">"See the apps"</a>
                    " or read the latest "
                    <a href="/#articles">"articles"</a>
                    "."
                </p>
            </section>
        </Container>
    }
}
