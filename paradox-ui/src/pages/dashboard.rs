//! Dashboard Page
//!
//! Headline numbers, the emissions comparison and the impact map.

use leptos::*;
use leptos_router::*;

use paradox::page::DashboardPage;
use paradox::viz::adapt_all;

use crate::components::{ClimateChart, ImpactMap, StatGrid};
use crate::state::use_page;

/// Latest series from the backend shown under the featured charts
const LATEST_SERIES: usize = 2;

#[component]
pub fn Dashboard() -> impl IntoView {
    let page = use_page(DashboardPage);

    view! {
        <div class="space-y-10">
            // Hero
            <section class="text-center py-8">
                <h1 class="text-4xl font-bold text-green-900">"The Climate Paradox"</h1>
                <p class="text-lg text-gray-600 mt-3 max-w-2xl mx-auto">
                    "Kenya contributes less than 0.1% of global emissions, yet millions of Kenyans \
                     face drought, floods and food insecurity driven by climate change."
                </p>
                <div class="flex justify-center space-x-4 mt-6">
                    <A href="/petition" class="px-6 py-3 bg-green-700 hover:bg-green-800 text-white rounded-lg font-medium">
                        "Sign the Petition"
                    </A>
                    <A href="/stories" class="px-6 py-3 bg-white border border-green-700 text-green-800 rounded-lg font-medium">
                        "Read Stories"
                    </A>
                </div>
            </section>

            {page.render(|view| {
                let latest = adapt_all(view.climate.iter().take(LATEST_SERIES));
                view! {
                    <StatGrid cards=view.stat_cards() />

                    <section class="grid md:grid-cols-2 gap-6">
                        {view.featured_charts()
                            .into_iter()
                            .map(|series| view! { <ClimateChart series=series /> })
                            .collect_view()}
                    </section>

                    <ImpactMap sites=view.impact_sites() />

                    {(!latest.is_empty()).then(|| view! {
                        <section>
                            <h2 class="text-2xl font-semibold mb-4">"From the Data"</h2>
                            <div class="grid md:grid-cols-2 gap-6">
                                {latest
                                    .into_iter()
                                    .map(|series| view! { <ClimateChart series=series /> })
                                    .collect_view()}
                            </div>
                            <A href="/data" class="inline-block mt-4 text-green-700 hover:underline">
                                "Explore all climate data →"
                            </A>
                        </section>
                    })}
                }
            })}
        </div>
    }
}
