//! County Select Component

use leptos::*;

use paradox::models::KENYA_COUNTIES;

/// `<select>` over the Kenyan counties. Changes bubble to the form's handler.
#[component]
pub fn CountySelect(
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <select
            name=name
            required=true
            prop:value=move || value.get()
            class="w-full border border-gray-300 rounded-lg px-4 py-2 focus:border-green-600 focus:outline-none"
        >
            <option value="">"Select County"</option>
            {KENYA_COUNTIES
                .iter()
                .map(|county| view! { <option value=*county>{*county}</option> })
                .collect_view()}
        </select>
    }
}
