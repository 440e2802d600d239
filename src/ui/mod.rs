/// UI layer: render-only functions over [`crate::state::AppState`].
pub mod panels;
pub mod results;
