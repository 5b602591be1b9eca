//! About Page
//!
//! Static background on the climate paradox and the site's mission.

use leptos::*;

use paradox::page::{AboutPage, MISSION};

use crate::components::ContentCard;
use crate::state::use_page;

#[component]
pub fn About() -> impl IntoView {
    let page = use_page(AboutPage);

    view! {
        <div class="space-y-10">
            {page.render(|view| view! {
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-green-900">{view.title}</h1>
                    <p class="text-gray-600 mt-2">{view.tagline}</p>
                </div>
                <div class="grid md:grid-cols-2 gap-6">
                    {view.sections.iter().map(|block| view! { <ContentCard block=*block /> }).collect_view()}
                </div>
            })}

            <section>
                <h2 class="text-2xl font-semibold text-center mb-6">"Our Mission"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {MISSION.iter().map(|block| view! { <ContentCard block=*block /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
