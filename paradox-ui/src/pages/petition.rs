//! Petition Page
//!
//! Totals, demands, the signing form and recent supporters.

use leptos::*;

use paradox::page::petition::EMPTY_SUPPORTERS;
use paradox::page::{PetitionPage, DEMANDS};
use paradox::{PetitionSignature, PetitionStats};

use crate::components::{ContentCard, PetitionForm, StatGrid};
use crate::state::use_page;

#[component]
pub fn Petition() -> impl IntoView {
    let page = use_page(PetitionPage);

    // Refetch so the totals and the supporters list include the new signature
    let on_created = Callback::new(move |_signature: PetitionSignature| page.reload.call(()));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-green-900">"Climate Justice Petition"</h1>
                <p class="text-gray-600 mt-1">"Demand action for communities on the front line"</p>
            </div>

            {page.render(|view| view! {
                <StatGrid cards=view.stat_cards() />
                <GoalProgress stats=view.stats.clone() />
            })}

            <section class="grid md:grid-cols-3 gap-6">
                {DEMANDS.iter().map(|block| view! { <ContentCard block=*block /> }).collect_view()}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <PetitionForm on_created=on_created />

                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Supporters"</h2>
                    {page.render(|view| view! { <SupporterList signatures=view.signatures /> })}
                </section>
            </div>
        </div>
    }
}

#[component]
fn GoalProgress(stats: PetitionStats) -> impl IntoView {
    let percent = stats.progress() * 100.0;

    view! {
        <div>
            <div class="w-full bg-gray-200 rounded-full h-4">
                <div class="bg-green-600 h-4 rounded-full" style=format!("width: {:.1}%", percent) />
            </div>
            <p class="text-sm text-gray-600 mt-2">
                {format!("{:.1}% of our goal of {}", percent, paradox::page::format_count(PetitionStats::GOAL))}
            </p>
        </div>
    }
}

#[component]
fn SupporterList(signatures: Vec<PetitionSignature>) -> impl IntoView {
    if signatures.is_empty() {
        return view! { <p class="text-gray-500">{EMPTY_SUPPORTERS}</p> }.into_view();
    }

    view! {
        <ul class="divide-y divide-gray-100">
            {signatures
                .into_iter()
                .map(|signature| {
                    let comment = signature.comment.clone().filter(|c| !c.trim().is_empty());
                    view! {
                        <li class="py-3">
                            <div class="flex justify-between">
                                <span class="font-medium">{signature.display_name().to_string()}</span>
                                <span class="text-sm text-gray-500">{signature.display_date()}</span>
                            </div>
                            <div class="text-sm text-gray-500">{signature.place()}</div>
                            {comment.map(|c| view! { <p class="text-sm text-gray-700 italic mt-1">{format!("\"{}\"", c)}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
