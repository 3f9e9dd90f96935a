//! Load/select state shared by every data-backed page.
//!
//! A page starts in `Loading`, leaves it exactly once per load when the fetch
//! settles, and keeps a selection that only exists while data is present.
//! Each load is stamped with a [`LoadTicket`]; a result carrying an older
//! ticket than the latest `begin` is dropped instead of overwriting fresher
//! state.

use contracts::shared::errors::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase<T> {
    Loading,
    Ready(T),
    /// The store could not be read; distinct from an empty `Ready`
    Failed(FetchError),
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// `T` is what the page fetched, `S` what the user can pick inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLoad<T, S> {
    phase: LoadPhase<T>,
    selection: Option<S>,
    generation: u64,
}

impl<T, S> Default for PageLoad<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> PageLoad<T, S> {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            selection: None,
            generation: 0,
        }
    }

    /// Enter `Loading` for a new fetch; earlier tickets become stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.selection = None;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a settled fetch.
    ///
    /// `initial` picks the starting selection from fresh data. Returns
    /// `false` and leaves the state untouched when `ticket` is stale.
    pub fn finish<I>(&mut self, ticket: LoadTicket, result: Result<T, FetchError>, initial: I) -> bool
    where
        I: FnOnce(&T) -> Option<S>,
    {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(data) => {
                self.selection = initial(&data);
                self.phase = LoadPhase::Ready(data);
            }
            Err(err) => {
                self.selection = None;
                self.phase = LoadPhase::Failed(err);
            }
        }
        true
    }

    pub fn phase(&self) -> &LoadPhase<T> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.phase {
            LoadPhase::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&S> {
        self.selection.as_ref()
    }
}

impl<T, S: PartialEq> PageLoad<T, S> {
    /// Change the selection without re-fetching.
    ///
    /// Ignored unless data is present. Returns whether anything changed, so
    /// picking the current item again is a no-op.
    pub fn select(&mut self, item: S) -> bool {
        if self.data().is_none() || self.selection.as_ref() == Some(&item) {
            return false;
        }
        self.selection = Some(item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Page = PageLoad<Vec<&'static str>, &'static str>;

    fn first(items: &Vec<&'static str>) -> Option<&'static str> {
        items.first().copied()
    }

    #[test]
    fn test_starts_loading_without_selection() {
        let page = Page::new();
        assert!(page.is_loading());
        assert!(page.selection().is_none());
        assert!(page.data().is_none());
    }

    #[test]
    fn test_finish_moves_to_ready_with_initial_selection() {
        let mut page = Page::new();
        let ticket = page.begin();
        assert!(page.finish(ticket, Ok(vec!["a", "b"]), first));
        assert_eq!(page.data(), Some(&vec!["a", "b"]));
        assert_eq!(page.selection(), Some(&"a"));
    }

    #[test]
    fn test_empty_result_is_ready_not_failed() {
        let mut page = Page::new();
        let ticket = page.begin();
        page.finish(ticket, Ok(vec![]), first);
        assert_eq!(page.phase(), &LoadPhase::Ready(vec![]));
        assert!(page.selection().is_none());
        assert!(page.error().is_none());
    }

    #[test]
    fn test_fetch_fault_is_distinct_from_empty() {
        let mut page = Page::new();
        let ticket = page.begin();
        page.finish(ticket, Err(FetchError::Network("offline".into())), first);
        assert!(!page.is_loading());
        assert!(page.data().is_none());
        assert_eq!(page.error(), Some(&FetchError::Network("offline".into())));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut page = Page::new();
        let old = page.begin();
        let new = page.begin();

        assert!(!page.finish(old, Ok(vec!["stale"]), first));
        assert!(page.is_loading());

        assert!(page.finish(new, Ok(vec!["fresh"]), first));
        assert_eq!(page.selection(), Some(&"fresh"));

        // A late answer to the first request still cannot land.
        assert!(!page.finish(old, Ok(vec!["stale"]), first));
        assert_eq!(page.data(), Some(&vec!["fresh"]));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut page = Page::new();
        let ticket = page.begin();
        page.finish(ticket, Ok(vec!["a", "b"]), first);

        let mut once = page.clone();
        assert!(once.select("b"));

        let mut twice = page.clone();
        assert!(twice.select("b"));
        assert!(!twice.select("b"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_before_data_is_ignored() {
        let mut page = Page::new();
        page.begin();
        assert!(!page.select("a"));
        assert!(page.selection().is_none());
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut page = Page::new();
        let ticket = page.begin();
        page.finish(ticket, Ok(vec!["a"]), first);
        page.begin();
        assert!(page.is_loading());
        assert!(page.selection().is_none());
    }
}
