//! Share-a-Story Form

use leptos::*;

use paradox::forms::{FormPhase, StoryDraft};
use paradox::models::{Story, StoryCategory};
use paradox::page::stories::{SUBMITTED_BODY, SUBMITTED_TITLE};

use super::CountySelect;
use crate::state::FormHandle;

const INPUT_CLASS: &str =
    "w-full border border-gray-300 rounded-lg px-4 py-2 focus:border-green-600 focus:outline-none";

#[component]
pub fn StoryForm(
    /// Runs after the backend accepted the story
    on_created: Callback<Story>,
) -> impl IntoView {
    let form = FormHandle::<StoryDraft>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(move |story| on_created.call(story));
    };

    let editor = move || {
        view! {
            <form
                on:submit=on_submit
                on:input=move |ev| form.on_input(ev)
                on:change=move |ev| form.on_input(ev)
                class="bg-white rounded-xl shadow p-6 space-y-4"
            >
                <h3 class="text-xl font-semibold">"Share Your Story"</h3>

                <input name="title" type="text" placeholder="Story title" required=true
                    prop:value=move || form.text("title") class=INPUT_CLASS />
                <textarea name="content" rows="6" placeholder="Tell us how climate change has affected you"
                    required=true prop:value=move || form.text("content") class=INPUT_CLASS />

                <div class="grid md:grid-cols-2 gap-4">
                    <input name="author" type="text" placeholder="Your name" required=true
                        prop:value=move || form.text("author") class=INPUT_CLASS />
                    <input name="email" type="email" placeholder="Email (not published)" required=true
                        prop:value=move || form.text("email") class=INPUT_CLASS />
                    <input name="location" type="text" placeholder="Town or village" required=true
                        prop:value=move || form.text("location") class=INPUT_CLASS />
                    <CountySelect name="county" value=Signal::derive(move || form.text("county")) />
                </div>

                <select name="category" prop:value=move || form.text("category") class=INPUT_CLASS>
                    {StoryCategory::all()
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>

                <label class="flex items-center space-x-2 text-sm text-gray-700">
                    <input name="consent" type="checkbox" prop:checked=move || form.flag("consent") />
                    <span>"I consent to my story being published on this site"</span>
                </label>

                <button
                    type="submit"
                    disabled=move || form.is_submitting()
                    class="w-full bg-green-700 hover:bg-green-800 disabled:bg-gray-400 text-white rounded-lg py-3 font-semibold"
                >
                    {move || if form.is_submitting() { "Submitting..." } else { "Submit Story" }}
                </button>
            </form>
        }
    };

    view! {
        <Show when=move || form.phase() == FormPhase::Submitted fallback=editor>
            <div class="bg-green-50 border border-green-200 rounded-xl p-6 text-center">
                <h3 class="text-xl font-semibold text-green-800">{SUBMITTED_TITLE}</h3>
                <p class="text-green-700 mt-2">{SUBMITTED_BODY}</p>
                <button
                    on:click=move |_| form.reopen()
                    class="mt-4 px-5 py-2 bg-green-700 hover:bg-green-800 text-white rounded-lg"
                >
                    "Share another story"
                </button>
            </div>
        </Show>
    }
}
