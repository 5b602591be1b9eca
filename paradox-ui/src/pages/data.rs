//! Data Page
//!
//! Every climate series, filtered by category on the client.

use leptos::*;

use paradox::page::data::{EMPTY_HINT, EMPTY_TITLE};
use paradox::page::{category_label, CategoryFilter, DataPage, KEY_INSIGHTS};
use paradox::viz::adapt;

use crate::components::{ClimateChart, ContentCard};
use crate::state::use_page;

#[component]
pub fn Data() -> impl IntoView {
    let page = use_page(DataPage);
    let filter = create_rw_signal(CategoryFilter::All);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-green-900">"Climate Data"</h1>
                <p class="text-gray-600 mt-1">"Explore how climate change affects Kenya"</p>
            </div>

            {page.render(move |view| {
                let categories = view.categories.clone();
                view! {
                    <div class="flex items-center space-x-3">
                        <label class="text-sm text-gray-600">"Category"</label>
                        <select
                            on:change=move |ev| filter.set(CategoryFilter::parse(&event_target_value(&ev)))
                            prop:value=move || filter.with(|f| f.as_str().to_string())
                            class="border border-gray-300 rounded-lg px-4 py-2"
                        >
                            <option value=CategoryFilter::ALL>"All Categories"</option>
                            {categories
                                .into_iter()
                                .map(|c| {
                                    let label = category_label(&c);
                                    view! { <option value=c>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    {move || {
                        let charts: Vec<_> = filter.with(|f| {
                            view.filtered(f)
                                .map(|s| (adapt(s), s.source.clone()))
                                .collect()
                        });
                        if charts.is_empty() {
                            view! {
                                <div class="text-center py-16 text-gray-500">
                                    <h3 class="text-xl font-semibold">{EMPTY_TITLE}</h3>
                                    <p class="mt-2">{EMPTY_HINT}</p>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 gap-6">
                                    {charts
                                        .into_iter()
                                        .map(|(series, source)| {
                                            let caption = (!source.is_empty()).then_some(source);
                                            view! { <ClimateChart series=series caption=caption /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }}
                }
            })}

            <section>
                <h2 class="text-2xl font-semibold mb-4">"Key Insights"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {KEY_INSIGHTS.iter().map(|block| view! { <ContentCard block=*block /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
