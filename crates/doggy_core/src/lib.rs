use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display value of the always-present combo box entry that represents
/// "no breed chosen". Never a valid search parameter.
pub const PLACEHOLDER_OPTION: &str = "Select a breed";

/// Errors produced by the dog API collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("network request failed: {0}")]
    Network(String),
    /// The service answered but not with success.
    #[error("service returned status {0}")]
    Status(String),
    /// The response body did not match the expected shape.
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// The HTTP collaborator as seen by the application. The production
/// implementation talks to dog.ceo; tests substitute a scripted mock.
pub trait DogApi: Send + Sync {
    fn fetch_breeds(&self) -> Result<Vec<String>, ApiError>;
    fn fetch_images_for_breed(&self, breed: &str) -> Result<Vec<String>, ApiError>;
}

/// What the results panel should render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchState {
    /// No search started since construction.
    #[default]
    Idle,
    /// A search is in flight.
    Loading,
    /// The most recent search succeeded.
    Loaded,
    /// The most recent search failed.
    Failed,
}

/// Handle for one issued search. The token ties a completion back to the
/// request that produced it so stale responses can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub breed: String,
    pub token: u64,
}

/// State machine behind the search screen. Pure and synchronous: callers
/// perform the actual fetches and feed completions back in, which keeps the
/// whole interaction testable without a UI or a network.
#[derive(Debug, Default)]
pub struct SearchModel {
    breeds: Vec<String>,
    breeds_ready: bool,
    breed_error: Option<String>,
    selected: Option<String>,
    state: SearchState,
    results: Vec<String>,
    ever_loaded: bool,
    search_error: Option<String>,
    token: u64,
}

impl SearchModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion of the one-time breed list fetch. Duplicate names are
    /// dropped, keeping the first occurrence so the served order survives.
    pub fn breeds_loaded(&mut self, breeds: Vec<String>) {
        if self.breeds_ready {
            tracing::debug!("breed list already loaded; ignoring repeat delivery");
            return;
        }
        let mut unique: Vec<String> = Vec::with_capacity(breeds.len());
        for breed in breeds {
            if !unique.contains(&breed) {
                unique.push(breed);
            }
        }
        self.breeds = unique;
        self.breeds_ready = true;
        self.breed_error = None;
    }

    /// Failure of the breed list fetch. The combo box stays placeholder-only
    /// and the trigger stays disabled since nothing can be selected.
    pub fn breeds_failed(&mut self, err: &ApiError) {
        tracing::warn!("breed list fetch failed: {err}");
        self.breed_error = Some(err.to_string());
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn breed_error(&self) -> Option<&str> {
        self.breed_error.as_deref()
    }

    /// User picked an entry in the combo box. Picking the placeholder clears
    /// the selection; names not in the loaded list are rejected. Returns
    /// whether anything changed, so re-selecting the current breed is
    /// observably a no-op.
    pub fn select_breed(&mut self, value: &str) -> bool {
        let next = if value == PLACEHOLDER_OPTION {
            None
        } else if self.breeds.iter().any(|b| b == value) {
            Some(value.to_string())
        } else {
            tracing::debug!("ignoring selection of unknown breed {value:?}");
            return false;
        };
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    pub fn selected_breed(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// What the combo box displays: the selected breed, or the placeholder.
    pub fn display_value(&self) -> &str {
        self.selected.as_deref().unwrap_or(PLACEHOLDER_OPTION)
    }

    /// The search trigger is enabled iff a breed is selected and no search
    /// is currently in flight.
    pub fn can_search(&self) -> bool {
        self.selected.is_some() && self.state != SearchState::Loading
    }

    /// Starts a search for the selected breed. Returns the ticket the caller
    /// must pass back to [`finish_search`](Self::finish_search), or `None`
    /// when searching is not permitted right now.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.can_search() {
            return None;
        }
        let breed = self.selected.clone()?;
        self.token += 1;
        self.state = SearchState::Loading;
        self.search_error = None;
        Some(SearchTicket {
            breed,
            token: self.token,
        })
    }

    /// Applies a search completion. A completion only settles the search
    /// currently in flight: responses carrying an older ticket, or arriving
    /// after their ticket was already settled, are discarded. Returns
    /// whether the completion was applied.
    pub fn finish_search(&mut self, token: u64, outcome: Result<Vec<String>, ApiError>) -> bool {
        if token != self.token || self.state != SearchState::Loading {
            tracing::debug!(
                "discarding stale or duplicate search response (token {token}, current {})",
                self.token
            );
            return false;
        }
        match outcome {
            Ok(urls) => {
                self.results = urls;
                self.ever_loaded = true;
                self.state = SearchState::Loaded;
            }
            Err(err) => {
                tracing::warn!("image search failed: {err}");
                self.results.clear();
                self.search_error = Some(err.to_string());
                self.state = SearchState::Failed;
            }
        }
        true
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Image URLs of the most recent successful search.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// The "N results" caption, present only once results are on screen.
    pub fn results_caption(&self) -> Option<String> {
        (self.state == SearchState::Loaded).then(|| format!("{} results", self.results.len()))
    }

    /// The single placeholder image is shown until the first search ever
    /// succeeds, except while a search is in flight.
    pub fn shows_placeholder(&self) -> bool {
        !self.ever_loaded && self.state != SearchState::Loading
    }

    pub fn search_error(&self) -> Option<&str> {
        self.search_error.as_deref()
    }
}
