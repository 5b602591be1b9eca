//! Navigation Component
//!
//! Header navigation bar with brand and page links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-green-800 shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌍"</span>
                        <span class="text-xl font-bold text-white">"Climate Paradox Kenya"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/data" label="Data" />
                        <NavLink href="/stories" label="Stories" />
                        <NavLink href="/petition" label="Petition" />
                        <NavLink href="/about" label="About" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-green-100 hover:text-white hover:bg-green-700 transition-colors"
            active_class="bg-green-900 text-white"
        >
            {label}
        </A>
    }
}
