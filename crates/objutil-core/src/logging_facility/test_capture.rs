//! In-memory event capture for logging assertions
//!
//! A process-wide subscriber records every event's fields as strings.
//! The buffer is shared by all tests in a binary, so each test filters it
//! by an `op` (or field values) only it emits.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use objutil_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};

/// One recorded event: its level and every field rendered as a string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    fn is(&self, op: &str, event: Option<&str>) -> bool {
        self.op() == Some(op) && event.map_or(true, |name| self.event() == Some(name))
    }
}

/// Renders every field into the map; strings stay unquoted
struct StringFields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for StringFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

struct Recorder(EventLog);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut StringFields(&mut fields));

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Handle onto the process-wide capture buffer
#[derive(Clone)]
pub struct TestCapture {
    log: EventLog,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events of one operation, optionally narrowed to one event name
    pub fn events_for(&self, op: &str, event: Option<&str>) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics when no event with this `op` and `event` was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let total = self.events().len();
        assert!(
            !self.events_for(op, Some(event)).is_empty(),
            "Expected event op={} event={} among {} captured events",
            op,
            event,
            total
        );
    }

    pub fn clear(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber on first use and return its handle
///
/// Fails loudly if another global subscriber was installed first, e.g. by
/// [`init`](super::init).
///
/// ```
/// use objutil_core::logging_facility::test_capture::init_test_capture;
/// use objutil_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            tracing_subscriber::registry()
                .with(Recorder(Arc::clone(&log)))
                .init();
            TestCapture { log }
        })
        .clone()
}
