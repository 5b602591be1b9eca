//! Petition Signing Form

use leptos::*;

use paradox::forms::{FormPhase, SignatureDraft};
use paradox::models::PetitionSignature;
use paradox::page::petition::{SUBMITTED_BODY, SUBMITTED_TITLE};

use super::CountySelect;
use crate::state::FormHandle;

const INPUT_CLASS: &str =
    "w-full border border-gray-300 rounded-lg px-4 py-2 focus:border-green-600 focus:outline-none \
     disabled:bg-gray-100";

#[component]
pub fn PetitionForm(
    /// Runs after the backend recorded the signature
    on_created: Callback<PetitionSignature>,
) -> impl IntoView {
    let form = FormHandle::<SignatureDraft>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(move |signature| on_created.call(signature));
    };

    let name_disabled = move || !form.with_draft(SignatureDraft::name_enabled);

    let editor = move || {
        view! {
            <form
                on:submit=on_submit
                on:input=move |ev| form.on_input(ev)
                on:change=move |ev| form.on_input(ev)
                class="bg-white rounded-xl shadow p-6 space-y-4"
            >
                <h3 class="text-xl font-semibold">"Sign the Petition"</h3>

                <input name="name" type="text" placeholder="Full name"
                    disabled=name_disabled
                    prop:value=move || form.text("name") class=INPUT_CLASS />
                <input name="email" type="email" placeholder="Email (not published)" required=true
                    prop:value=move || form.text("email") class=INPUT_CLASS />

                <div class="grid md:grid-cols-2 gap-4">
                    <input name="location" type="text" placeholder="Town or village" required=true
                        prop:value=move || form.text("location") class=INPUT_CLASS />
                    <CountySelect name="county" value=Signal::derive(move || form.text("county")) />
                </div>

                <textarea name="comment" rows="3" placeholder="Why are you signing? (optional)"
                    prop:value=move || form.text("comment") class=INPUT_CLASS />

                <label class="flex items-center space-x-2 text-sm text-gray-700">
                    <input name="isAnonymous" type="checkbox" prop:checked=move || form.flag("isAnonymous") />
                    <span>"Sign anonymously"</span>
                </label>

                <button
                    type="submit"
                    disabled=move || form.is_submitting()
                    class="w-full bg-green-700 hover:bg-green-800 disabled:bg-gray-400 text-white rounded-lg py-3 font-semibold"
                >
                    {move || if form.is_submitting() { "Signing..." } else { "Sign Petition" }}
                </button>
            </form>
        }
    };

    view! {
        <Show when=move || form.phase() == FormPhase::Submitted fallback=editor>
            <div class="bg-green-50 border border-green-200 rounded-xl p-8 text-center">
                <div class="text-5xl mb-3">"✅"</div>
                <h3 class="text-2xl font-semibold text-green-800">{SUBMITTED_TITLE}</h3>
                <p class="text-green-700 mt-2">{SUBMITTED_BODY}</p>
                <button
                    on:click=move |_| form.reopen()
                    class="mt-4 px-5 py-2 bg-green-700 hover:bg-green-800 text-white rounded-lg"
                >
                    "Sign for someone else"
                </button>
            </div>
        </Show>
    }
}
