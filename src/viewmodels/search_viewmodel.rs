// ============================================================================
// SEARCH VIEWMODEL - Station form + availability results
// ============================================================================

use crate::models::Train;
use crate::services::ApiError;
use crate::utils::constants::SEARCH_FALLBACK;

#[derive(Clone, Debug, PartialEq)]
pub struct SearchForm {
    pub source: String,
    pub destination: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            source: "Station A".to_string(),
            destination: "Station B".to_string(),
        }
    }
}

impl SearchForm {
    pub fn swapped(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Train>),
    Failed(String),
}

impl SearchState {
    pub fn from_result(result: Result<Vec<Train>, ApiError>) -> Self {
        match result {
            Ok(trains) => SearchState::Loaded(trains),
            Err(ApiError::Rejected(message)) => SearchState::Failed(message),
            Err(_) => SearchState::Failed(SEARCH_FALLBACK.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn trains(&self) -> &[Train] {
        match self {
            SearchState::Loaded(trains) => trains,
            _ => &[],
        }
    }

    /// Results heading, only once a search has completed
    pub fn heading(&self) -> Option<String> {
        match self {
            SearchState::Loaded(trains) if trains.is_empty() => Some("No trains found".to_string()),
            SearchState::Loaded(trains) => Some(format!("Available Trains ({})", trains.len())),
            _ => None,
        }
    }
}
