//! Log events emitted on rejected and lax constructions.

use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use super::common::{color_indices, mapping_without, Color};
use totalmap::TotalMap;
use tracing::Level;

/// Shared buffer handed to the fmt subscriber as its writer.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a DEBUG-level subscriber and return everything it logged.
fn logs_of<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn rejected_mapping_logs_debug() {
    let logs = logs_of(|| {
        let raw = mapping_without(&Color::Blue, Color::index);
        assert!(TotalMap::try_from_map(raw).is_err());
    });

    assert!(logs.contains("DEBUG"), "{}", logs);
    assert!(logs.contains("rejected incomplete mapping"), "{}", logs);
    assert!(logs.contains("missing=1"), "{}", logs);
    assert!(logs.contains("domain=3"), "{}", logs);
}

#[test]
fn complete_mapping_logs_nothing() {
    let logs = logs_of(|| {
        let raw = color_indices().into_inner();
        assert!(TotalMap::try_from_map(raw).is_ok());
    });

    assert!(logs.is_empty(), "{}", logs);
}

#[test]
fn short_literal_logs_error_before_panicking() {
    let logs = logs_of(|| {
        let result = panic::catch_unwind(|| TotalMap::<bool, u8>::from_pairs([(true, 1)]));
        assert!(result.is_err());
    });

    assert!(logs.contains("ERROR"), "{}", logs);
    assert!(
        logs.contains("total map literal does not cover its key domain"),
        "{}",
        logs
    );
}

#[cfg(feature = "serde")]
#[test]
fn unchecked_decode_of_a_gap_logs_warn() {
    use totalmap::serialization::unchecked::Unchecked;

    let logs = logs_of(|| {
        let Unchecked(map) =
            serde_json::from_str::<Unchecked<Color, u8>>(r#"{"Red":1}"#).unwrap();
        assert!(!map.is_complete());
    });

    assert!(logs.contains("WARN"), "{}", logs);
    assert!(
        logs.contains("adopted incomplete mapping without validation"),
        "{}",
        logs
    );
    assert!(logs.contains("missing=2"), "{}", logs);
}

#[cfg(feature = "serde")]
#[test]
fn unchecked_decode_of_a_complete_map_is_silent() {
    use totalmap::serialization::unchecked::Unchecked;

    let logs = logs_of(|| {
        let json = serde_json::to_string(&color_indices()).unwrap();
        let Unchecked(map) = serde_json::from_str::<Unchecked<Color, u8>>(&json).unwrap();
        assert!(map.is_complete());
    });

    assert!(logs.is_empty(), "{}", logs);
}
