//! In-memory capture of clinic log events
//!
//! Each event is recorded as a flat map of its fields rendered as text. The
//! operation fields and the entity an event concerns are lifted into typed
//! fields, so a test can select the events of a single store.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use petclinic_core_types::schema::{
    FIELD_COMPONENT, FIELD_ENTITY_ID, FIELD_ENTITY_KIND, FIELD_EVENT, FIELD_OP,
};
use petclinic_core_types::EntityKind;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded log event
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    /// Set when `entity_kind` names a known kind
    pub entity_kind: Option<EntityKind>,
    pub entity_id: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: BTreeMap<String, String>) -> Self {
        let component = fields.get(FIELD_COMPONENT).cloned();
        let op = fields.get(FIELD_OP).cloned();
        let event = fields.get(FIELD_EVENT).cloned();
        let entity_kind = fields
            .get(FIELD_ENTITY_KIND)
            .and_then(|name| EntityKind::from_name(name));
        let entity_id = fields.get(FIELD_ENTITY_ID).cloned();
        Self {
            level,
            component,
            op,
            event,
            entity_kind,
            entity_id,
            fields,
        }
    }

    /// True when the event carries `field` with exactly `value`
    pub fn has_field(&self, field: &str, value: &str) -> bool {
        self.fields.get(field).map(String::as_str) == Some(value)
    }

    /// True for the `event` phase of `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }

    /// True when the event concerns the `kind` entity stored under `id`
    pub fn concerns(&self, kind: EntityKind, id: &str) -> bool {
        self.entity_kind == Some(kind) && self.entity_id.as_deref() == Some(id)
    }
}

/// Numbers and booleans arrive through `record_debug`
#[derive(Default)]
struct FieldRecorder(BTreeMap<String, String>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), recorder.0);
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Shared view of the events recorded so far
#[derive(Clone, Debug, Default)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            events: Arc::clone(&self.events),
        }
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn select(&self, keep: impl Fn(&CapturedEvent) -> bool) -> Vec<CapturedEvent> {
        self.recorded().iter().filter(|e| keep(e)).cloned().collect()
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.recorded().clone()
    }

    /// Events of the `event` phase of `op`
    pub fn find(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.select(|e| e.is(op, event))
    }

    /// Events of the `event` phase of `op` that concern entities of `kind`
    pub fn find_for(&self, kind: EntityKind, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.select(|e| e.entity_kind == Some(kind) && e.is(op, event))
    }

    /// # Panics
    ///
    /// Panics if no `event` phase of `op` was recorded
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        assert!(
            !self.find(op, event).is_empty(),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            self.recorded().len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// The process-wide capture, installed as the global subscriber on first use
///
/// Events from concurrently running tests land in the same buffer, so
/// assertions should filter on fields unique to the test.
///
/// # Example
///
/// ```
/// use petclinic_core::logging_facility::test_capture::init_test_capture;
/// use petclinic_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            // Another global subscriber may already own this process; capture then stays empty.
            let _ = tracing_subscriber::registry()
                .with(capture.layer())
                .try_init();
            capture
        })
        .clone()
}
