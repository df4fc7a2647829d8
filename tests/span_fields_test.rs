use book_resource::controller::{BookController, Request};
use book_resource::store::mock::MockBookStore;
use book_resource::store::UpdateOptions;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

type Recorded = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// Records each new span's name and its `id` field.
struct SpanRecorder(Recorded);

struct IdVisitor(Option<String>);

impl Visit for IdVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "id" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "id" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for SpanRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let mut visitor = IdVisitor(None);
        attrs.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((attrs.metadata().name().to_string(), visitor.0));
    }
}

#[tokio::test]
async fn test_operation_spans_carry_the_id() {
    let recorded: Recorded = Arc::default();
    let subscriber = tracing_subscriber::registry().with(SpanRecorder(recorded.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = MockBookStore::new();
    store.expect_fetch_by_id("7").return_ok(None);
    store
        .expect_update_by_id("8", Default::default(), UpdateOptions::returning_updated())
        .return_ok(None);
    store.expect_remove_by_id("9").return_ok(None);
    store.expect_fetch_all().return_ok(vec![]);

    let controller = BookController::new(store.clone());
    controller.get_by_id(&Request::new().with_id("7")).await.unwrap();
    controller.update(&Request::new().with_id("8")).await.unwrap();
    controller.delete(&Request::new().with_id("9")).await.unwrap();
    controller.list(&Request::new()).await.unwrap();
    store.verify();

    let spans = recorded.lock().unwrap().clone();
    let id_of = |name: &str| {
        spans
            .iter()
            .find(|(span, _)| span == name)
            .map(|(_, id)| id.clone())
            .unwrap_or_else(|| panic!("no {name} span recorded"))
    };

    assert_eq!(id_of("get_by_id"), Some("7".to_string()));
    assert_eq!(id_of("update"), Some("8".to_string()));
    assert_eq!(id_of("delete"), Some("9".to_string()));
    assert_eq!(id_of("list"), None);
}
