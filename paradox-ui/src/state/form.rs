//! Form flows driven by DOM input events

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use paradox::forms::{Draft, FieldChange, FormFlow, FormPhase, InputKind, Submit};

use crate::api::GlooBackend;
use crate::js_bridge;
use crate::state::use_backend;

/// Read the changed field off an `input`/`change` event
pub fn field_change(ev: &web_sys::Event) -> Option<FieldChange> {
    let target = ev.target()?;

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let mut change = FieldChange::new(
            input.name(),
            InputKind::from_dom(&input.type_()),
            input.value(),
        );
        change.checked = input.checked();
        return Some(change);
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(FieldChange::new(area.name(), InputKind::TextArea, area.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(FieldChange::new(select.name(), InputKind::Select, select.value()));
    }
    None
}

/// A [`FormFlow`] in a signal.
///
/// `phase` and `submitting` are memos so views that branch on them are not
/// rebuilt on every keystroke.
pub struct FormHandle<D: 'static> {
    flow: RwSignal<FormFlow<D>>,
    phase: Memo<FormPhase>,
    submitting: Memo<bool>,
    backend: StoredValue<GlooBackend>,
}

impl<D: 'static> Clone for FormHandle<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for FormHandle<D> {}

impl<D> FormHandle<D>
where
    D: Submit + 'static,
    D::Created: 'static,
{
    pub fn new() -> Self {
        let flow = create_rw_signal(FormFlow::<D>::new());
        Self {
            flow,
            phase: create_memo(move |_| flow.with(|f| f.phase())),
            submitting: create_memo(move |_| flow.with(|f| f.is_submitting())),
            backend: store_value(use_backend()),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Current text of a field, for `prop:value`
    pub fn text(&self, name: &str) -> String {
        self.flow.with(|f| {
            f.draft()
                .field(name)
                .and_then(|v| v.as_text().map(str::to_string))
                .unwrap_or_default()
        })
    }

    /// Current state of a checkbox field, for `prop:checked`
    pub fn flag(&self, name: &str) -> bool {
        self.flow.with(|f| {
            f.draft()
                .field(name)
                .and_then(|v| v.as_flag())
                .unwrap_or(false)
        })
    }

    /// Read-only access to the draft
    pub fn with_draft<O>(&self, f: impl FnOnce(&D) -> O) -> O {
        self.flow.with(|flow| f(flow.draft()))
    }

    /// `on:input` / `on:change` handler for any field
    pub fn on_input(&self, ev: web_sys::Event) {
        if let Some(change) = field_change(&ev) {
            self.apply(&change);
        }
    }

    /// Write one field into the draft
    pub fn apply(&self, change: &FieldChange) {
        let result = self.flow.try_update(|f| f.change(change));
        if let Some(Err(e)) = result {
            web_sys::console::warn_1(&e.to_string().into());
        }
    }

    /// Validate, send, and reconcile.
    ///
    /// Validation failures and backend errors raise a blocking alert; the
    /// draft is kept either way. `on_created` runs only after a confirmed
    /// success, while the component is still mounted.
    pub fn submit(&self, on_created: impl Fn(D::Created) + 'static) {
        let snapshot = match self.flow.try_update(|f| f.begin()) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                js_bridge::alert(&e.to_string());
                return;
            }
            None => return,
        };

        let backend = self.backend.get_value();
        let flow = self.flow;
        spawn_local(async move {
            let result = snapshot.send(&backend).await;
            match flow.try_update(|f| f.finish(result)) {
                Some(Ok(created)) => on_created(created),
                Some(Err(message)) => js_bridge::alert(&message),
                None => web_sys::console::log_1(
                    &format!("Discarding {} result after unmount", D::KIND).into(),
                ),
            }
        });
    }

    /// Back from the confirmation to an empty form
    pub fn reopen(&self) {
        self.flow.update(|f| f.reopen());
    }
}

impl<D> Default for FormHandle<D>
where
    D: Submit + 'static,
    D::Created: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
