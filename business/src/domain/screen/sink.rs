use super::model::ScreenState;

/// Destination of screen state updates, owned by the presentation layer.
///
/// A sink stops being live once its screen is dismissed; callers must check
/// [`ScreenSink::is_live`] before publishing.
pub trait ScreenSink: Send + Sync {
    fn is_live(&self) -> bool;
    fn publish(&self, state: ScreenState);
}
