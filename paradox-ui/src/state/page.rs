//! Page load lifecycle bound to a component's mount

use leptos::*;

use paradox::page::{load, Liveness, Page, PageState};

use crate::api::GlooBackend;
use crate::components::{ErrorBanner, Loading};

/// The backend handle provided by the app root
pub fn use_backend() -> GlooBackend {
    use_context::<GlooBackend>().unwrap_or_else(GlooBackend::from_storage)
}

/// A mounted page's state plus a way to refetch it
pub struct PageHandle<V: 'static> {
    pub state: RwSignal<PageState<V>>,
    pub reload: Callback<()>,
}

impl<V: 'static> Clone for PageHandle<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for PageHandle<V> {}

/// Fetch `page` now and again on every `reload`.
///
/// Results that arrive after the owning component unmounts are dropped.
pub fn use_page<P>(page: P) -> PageHandle<P::View>
where
    P: Page + Copy + 'static,
    P::View: Clone + 'static,
{
    let backend = use_backend();
    let state = create_rw_signal(PageState::<P::View>::Loading);
    let liveness = mount_liveness();

    let reload = Callback::new(move |_: ()| {
        state.set(PageState::Loading);
        let backend = backend.clone();
        let liveness = liveness.clone();
        spawn_local(async move {
            let outcome = load(&page, &backend).await;
            if let PageState::Failed(message) = &outcome {
                web_sys::console::error_1(
                    &format!("Error fetching {} data: {}", P::NAME, message).into(),
                );
            }
            settle(&liveness, P::NAME, state, outcome);
        });
    });

    reload.call(());

    PageHandle { state, reload }
}

/// A [`Liveness`] that flips when the current owner is cleaned up
fn mount_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_unmount = liveness.clone();
    on_cleanup(move || on_unmount.unmount());
    liveness
}

/// Write a finished load into `state` unless the page is gone.
/// Returns whether the state was written.
fn settle<V: 'static>(
    liveness: &Liveness,
    page: &'static str,
    state: RwSignal<PageState<V>>,
    outcome: PageState<V>,
) -> bool {
    match liveness.deliver(page, outcome) {
        Some(outcome) => state.try_set(outcome).is_none(),
        None => false,
    }
}

impl<V: Clone + 'static> PageHandle<V> {
    /// Spinner while loading, a retry banner on failure, `ready` otherwise
    pub fn render<F, IV>(self, ready: F) -> impl Fn() -> View
    where
        F: Fn(V) -> IV + 'static,
        IV: IntoView,
    {
        move || match self.state.get() {
            PageState::Loading => view! { <Loading /> }.into_view(),
            PageState::Failed(message) => {
                view! { <ErrorBanner message=message on_retry=self.reload /> }.into_view()
            }
            PageState::Ready(view) => ready(view).into_view(),
        }
    }
}
