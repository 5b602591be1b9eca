//! Stories Page
//!
//! Moderated community stories and the share-a-story form.

use leptos::*;

use paradox::page::stories::{EMPTY_HINT, EMPTY_TITLE};
use paradox::page::{StoriesPage, StoriesView};
use paradox::Story;

use crate::components::{StatGrid, StoryForm};
use crate::state::use_page;

#[component]
pub fn Stories() -> impl IntoView {
    let page = use_page(StoriesPage);
    let (show_form, set_show_form) = create_signal(false);

    // New stories await moderation, so only the stats move
    let on_created = Callback::new(move |_story: Story| page.reload.call(()));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-green-900">"Community Stories"</h1>
                    <p class="text-gray-600 mt-1">"Voices from communities living with climate change"</p>
                </div>
                <button
                    on:click=move |_| set_show_form.update(|shown| *shown = !*shown)
                    class="px-5 py-2 bg-green-700 hover:bg-green-800 text-white rounded-lg font-medium"
                >
                    {move || if show_form.get() { "Close" } else { "Share Your Story" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <StoryForm on_created=on_created />
            </Show>

            {page.render(|view| view! {
                <StatGrid cards=view.stat_cards() />
                <StoryList stories=view.stories />
            })}
        </div>
    }
}

#[component]
fn StoryList(stories: Vec<Story>) -> impl IntoView {
    if stories.is_empty() {
        return view! {
            <div class="text-center py-16 text-gray-500">
                <div class="text-5xl mb-3">"📖"</div>
                <h3 class="text-xl font-semibold">{EMPTY_TITLE}</h3>
                <p class="mt-2">{EMPTY_HINT}</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {stories
                .into_iter()
                .map(|story| view! {
                    <article class="bg-white rounded-xl shadow p-6">
                        <div class="flex items-center justify-between text-sm text-gray-500 mb-2">
                            <span class="px-2 py-1 bg-green-100 text-green-800 rounded">{story.category.label()}</span>
                            <span>{story.display_date()}</span>
                        </div>
                        <h3 class="text-lg font-semibold">{story.title.clone()}</h3>
                        <p class="text-gray-700 mt-2">{story.excerpt(StoriesView::EXCERPT_CHARS)}</p>
                        <div class="text-sm text-gray-500 mt-4">
                            {format!("{} · {}", story.author, story.place())}
                        </div>
                    </article>
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
