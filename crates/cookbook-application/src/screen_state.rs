//! In-memory state owned by the profile screen.

use cookbook_core::recipe::Recipe;
use cookbook_core::resource::ResourceHandle;

use crate::notice::Notice;

/// Mutable state behind [`crate::ProfileScreen`].
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// Text shown in the name field.
    pub display_name: String,
    /// Bytes of the picture currently displayed.
    pub display_image: Option<Vec<u8>>,
    /// Image picked since the screen was opened. Kept until teardown.
    pub pending_image: Option<ResourceHandle>,
    /// Recipe list, rebuilt wholesale on each successful fetch.
    pub recipes: Vec<Recipe>,
    /// Incremented on every full refresh of `recipes`.
    pub recipes_revision: u64,
    /// Notices not yet consumed by the view.
    pub notices: Vec<Notice>,
}

/// Read-only copy of the renderable parts of [`ScreenState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub display_name: String,
    pub display_image: Option<Vec<u8>>,
    pub pending_image: Option<ResourceHandle>,
    pub recipes: Vec<Recipe>,
    pub recipes_revision: u64,
}

impl From<&ScreenState> for ScreenSnapshot {
    fn from(state: &ScreenState) -> Self {
        Self {
            display_name: state.display_name.clone(),
            display_image: state.display_image.clone(),
            pending_image: state.pending_image.clone(),
            recipes: state.recipes.clone(),
            recipes_revision: state.recipes_revision,
        }
    }
}
