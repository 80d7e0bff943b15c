use crate::domain::product::model::{ImageBuffer, ProductDetail};

/// What the detail screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    /// Nothing has arrived yet. A failed detail fetch leaves the screen here.
    #[default]
    Loading,
    Loaded {
        detail: ProductDetail,
        image: Option<ImageBuffer>,
    },
}

impl ScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }
}
