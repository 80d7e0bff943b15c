use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] backed by `tracing`, all events under one target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_screen", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_screen", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_screen", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_screen", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: tracing::Level, log: impl FnOnce(&TracingLogger)) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(level)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || log(&TracingLogger));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn should_emit_every_level_under_product_screen_target() {
        let output = capture(tracing::Level::DEBUG, |logger| {
            logger.info("fetching");
            logger.warn("status 500");
            logger.error("fetch.network");
            logger.debug("raw body");
        });

        assert!(output.contains("INFO product_screen: fetching"));
        assert!(output.contains("WARN product_screen: status 500"));
        assert!(output.contains("ERROR product_screen: fetch.network"));
        assert!(output.contains("DEBUG product_screen: raw body"));
    }

    #[test]
    fn should_drop_debug_events_above_debug_level() {
        let output = capture(tracing::Level::INFO, |logger| {
            logger.debug("raw body");
            logger.info("decoded");
        });

        assert!(!output.contains("raw body"));
        assert!(output.contains("decoded"));
    }
}
