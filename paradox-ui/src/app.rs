//! App Root Component
//!
//! Route table, persistent header and footer, and the backend handle.

use leptos::*;
use leptos_router::*;

use crate::api::{self, GlooBackend};
use crate::components::Nav;
use crate::pages::{About, Dashboard, Data, Petition, Stories};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // The only shared value: a read-only backend handle
    provide_context(GlooBackend::new(&api::get_api_base()));

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/data" view=Data />
                        <Route path="/stories" view=Stories />
                        <Route path="/petition" view=Petition />
                        <Route path="/about" view=About />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-green-900 text-green-100 py-8 mt-12">
            <div class="container mx-auto px-4 grid md:grid-cols-3 gap-6 text-sm">
                <div>
                    <h4 class="font-semibold text-white mb-2">"Climate Paradox Kenya"</h4>
                    <p>"Highlighting climate injustice and amplifying Kenyan voices."</p>
                </div>
                <div>
                    <h4 class="font-semibold text-white mb-2">"Take Action"</h4>
                    <ul class="space-y-1">
                        <li><A href="/petition" class="hover:underline">"Sign the petition"</A></li>
                        <li><A href="/stories" class="hover:underline">"Share your story"</A></li>
                        <li><A href="/data" class="hover:underline">"Explore the data"</A></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold text-white mb-2">"Backend"</h4>
                    <p class="break-all">{api::get_api_base()}</p>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-700 hover:bg-green-800 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
