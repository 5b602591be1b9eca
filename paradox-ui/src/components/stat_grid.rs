//! Stat Grid Component
//!
//! A row of headline numbers.

use leptos::*;

use paradox::page::StatCard;

#[component]
pub fn StatGrid(cards: Vec<StatCard>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="bg-white rounded-xl shadow p-5 text-center">
                        <div class="text-3xl font-bold text-green-700">{card.value}</div>
                        <div class="text-sm text-gray-500 mt-1">{card.label}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
