//! Content Card Component

use leptos::*;

use paradox::page::ContentBlock;

/// A heading, optional body text and bullet points
#[component]
pub fn ContentCard(block: ContentBlock) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-lg font-semibold text-green-800 mb-2">{block.heading}</h3>
            {(!block.body.is_empty()).then(|| view! { <p class="text-gray-700 mb-3">{block.body}</p> })}
            <ul class="list-disc list-inside space-y-1 text-gray-700">
                {block.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
            </ul>
        </div>
    }
}
