use tokio::sync::watch;

use business::domain::screen::model::ScreenState;
use business::domain::screen::sink::ScreenSink;

/// [`ScreenSink`] writing into a watch channel whose receiver is the screen.
///
/// Dropping the receiver dismisses the screen and makes the sink dead.
pub struct WatchScreenSink {
    sender: watch::Sender<ScreenState>,
}

impl WatchScreenSink {
    /// Creates a sink and the receiver the screen renders from, starting in
    /// [`ScreenState::Loading`].
    pub fn channel() -> (Self, watch::Receiver<ScreenState>) {
        let (sender, receiver) = watch::channel(ScreenState::Loading);
        (Self { sender }, receiver)
    }
}

impl ScreenSink for WatchScreenSink {
    fn is_live(&self) -> bool {
        !self.sender.is_closed()
    }

    fn publish(&self, state: ScreenState) {
        if self.sender.send(state).is_err() {
            tracing::debug!(target: "product_screen", "screen closed while publishing");
        }
    }
}
