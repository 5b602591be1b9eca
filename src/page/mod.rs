//! Page Controllers
//!
//! Every route has a [`Page`]: a named fetch set that produces the page's view
//! model. [`PageController`] drives the lifecycle shared by all of them:
//!
//! ```text
//! mount --> Loading --fetch ok--> Ready(view)
//!                   \-fetch err-> Failed(message)
//! ```
//!
//! Fetches within a page run concurrently and are joined; the first failure
//! settles the whole page as `Failed`. Outcomes arriving after the page was
//! unmounted are dropped through [`Liveness`].

pub mod about;
pub mod dashboard;
pub mod data;
pub mod petition;
pub mod stories;

pub use about::{AboutPage, AboutView, MISSION};
pub use dashboard::{
    featured_charts, DashboardPage, DashboardView, ImpactSite, Severity, IMPACT_SITES, MAP_CENTER,
    MAP_ZOOM,
};
pub use data::{category_label, CategoryFilter, DataPage, DataView, KEY_INSIGHTS};
pub use petition::{PetitionPage, PetitionView, DEMANDS};
pub use stories::{StoriesPage, StoriesView};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::client::{Backend, ClientResult};

/// A route's data dependencies
#[async_trait(?Send)]
pub trait Page {
    type View;

    /// Name used in log fields
    const NAME: &'static str;

    /// Issue every fetch the page needs and build its view
    async fn fetch(&self, backend: &dyn Backend) -> ClientResult<Self::View>;
}

/// Load state of one mounted page
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState<V> {
    #[default]
    Loading,
    Ready(V),
    /// Load failed; carries the user-facing message
    Failed(String),
}

impl<V> PageState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            PageState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Flag shared between a mounted page and its in-flight fetches
///
/// Cloned into every fetch; flipped once when the page unmounts.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Pass `value` through while the page is mounted, drop it afterwards
    pub fn deliver<T>(&self, page: &'static str, value: T) -> Option<T> {
        if self.is_alive() {
            Some(value)
        } else {
            debug!(page, "Discarding result for unmounted page");
            None
        }
    }
}

/// Run a page's fetch set and fold the outcome into a [`PageState`]
pub async fn load<P: Page>(page: &P, backend: &dyn Backend) -> PageState<P::View> {
    match page.fetch(backend).await {
        Ok(view) => {
            info!(page = P::NAME, "Page data loaded");
            PageState::Ready(view)
        }
        Err(e) => {
            error!(page = P::NAME, error = %e, "Error fetching page data");
            PageState::Failed(e.user_message())
        }
    }
}

/// Owns one page's state for the lifetime of a mount
pub struct PageController<P: Page> {
    page: P,
    state: PageState<P::View>,
    liveness: Liveness,
}

impl<P: Page> PageController<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            state: PageState::Loading,
            liveness: Liveness::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn state(&self) -> &PageState<P::View> {
        &self.state
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Enter `Loading`, fetch, and settle. Also used for refetches.
    pub async fn mount(&mut self, backend: &dyn Backend) -> &PageState<P::View> {
        self.state = PageState::Loading;
        let outcome = load(&self.page, backend).await;
        self.settle(outcome);
        &self.state
    }

    /// Store an outcome unless the page has been unmounted. Returns whether it was stored.
    pub fn settle(&mut self, outcome: PageState<P::View>) -> bool {
        match self.liveness.deliver(P::NAME, outcome) {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    pub fn unmount(&self) {
        self.liveness.unmount();
    }
}

/// One headline number on a stats grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub value: String,
    pub label: &'static str,
}

impl StatCard {
    pub fn new(value: impl ToString, label: &'static str) -> Self {
        Self {
            value: value.to_string(),
            label,
        }
    }
}

/// A titled block of static copy with optional bullet points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    pub heading: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
}

/// Group digits with commas: 100000 -> "100,000"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
