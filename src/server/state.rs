use crate::suggest::SuggestionEngine;

/// Shared request state. The engine's catalog is immutable, so no locking.
pub struct AppState {
    pub engine: SuggestionEngine,
}
