use std::future::Future;

use contracts::shared::errors::FetchError;
use leptos::prelude::*;

use super::page_load::{LoadPhase, PageLoad};

/// Phase of a page load without its data, for the page shell to branch on.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(FetchError),
}

/// Reactive handle around [`PageLoad`] owned by a page component.
///
/// The signal lives as long as the page; when navigation unmounts the page
/// the signal is disposed and a fetch that settles afterwards finds nothing to
/// update. `status` only changes with the phase, so a selection change does
/// not rebuild the page around it.
pub struct PageState<T: 'static, S: 'static> {
    inner: RwSignal<PageLoad<T, S>>,
    status: Memo<LoadStatus>,
}

impl<T: 'static, S: 'static> Clone for PageState<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: 'static> Copy for PageState<T, S> {}

impl<T, S> PageState<T, S>
where
    T: Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let inner = RwSignal::new(PageLoad::new());
        let status = Memo::new(move |_| {
            inner.with(|state| match state.phase() {
                LoadPhase::Loading => LoadStatus::Loading,
                LoadPhase::Ready(_) => LoadStatus::Ready,
                LoadPhase::Failed(err) => LoadStatus::Failed(err.clone()),
            })
        });
        Self { inner, status }
    }

    /// Start a fetch and apply its result when it settles.
    pub fn load<F, I>(&self, fetch: F, initial: I)
    where
        F: Future<Output = Result<T, FetchError>> + 'static,
        I: FnOnce(&T) -> Option<S> + 'static,
    {
        let Some(ticket) = self.inner.try_update(PageLoad::begin) else {
            return;
        };
        let inner = self.inner;
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch.await;
            if let Err(err) = &result {
                log::error!("page load failed: {}", err);
            }
            let applied = inner.try_update(|state| state.finish(ticket, result, initial));
            if applied != Some(true) {
                log::warn!("discarding stale page load result");
            }
        });
    }

    /// Pure selection change; notifies subscribers only when it changed.
    pub fn select(&self, item: S) {
        self.inner.maybe_update(|state| state.select(item));
    }

    pub fn status(&self) -> LoadStatus {
        self.status.get()
    }

    pub fn selection(&self) -> Option<S> {
        self.inner.with(|state| state.selection().cloned())
    }

    /// Read the fetched data, if any, without cloning it.
    pub fn with_data<U>(&self, f: impl FnOnce(Option<&T>) -> U) -> U {
        self.inner.with(|state| f(state.data()))
    }
}

impl<T, S> Default for PageState<T, S>
where
    T: Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
