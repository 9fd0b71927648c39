//! Control states of the movie-search workflow.

use crate::control_enum;

control_enum! {
    /// Workflow phase: where the user is between query, results, and detail.
    pub enum SearchPhase {
        /// Nothing shown yet; waiting for the app-navigation event.
        Start,
        /// A search is in flight for the query held in the extended state.
        Querying,
        ResultsShown,
        ResultsError,
        /// A detail lookup is in flight for the selected movie.
        DetailQuerying,
        DetailShown,
        DetailError,
    }
    error: [ResultsError, DetailError]
}
