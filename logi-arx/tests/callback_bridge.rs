//! Session behaviour against a stand-in for the applet SDK that records calls
//! and fires events through the registered callback context.

use std::os::raw::c_int;
use std::sync::Arc;

use logi_arx::{
    ArxApi, ArxCallbackContext, ArxErrorCode, ArxEvent, ArxEventType, ArxSession,
};
use logi_native::WideCString;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Init(String, String),
    AddFileAs(String, String, String),
    AddContentAs(Vec<u8>, c_int, String, String),
    AddUtf8StringAs(String, String, String),
    AddImageFromBitmap(usize, c_int, c_int, String),
    SetIndex(String),
    SetTagPropertyById(String, String, String),
    SetTagsPropertyByClass(String, String, String),
    SetTagContentById(String, String),
    SetTagsContentByClass(String, String),
    Shutdown,
}

/// Records calls and keeps the callback context the session registered
#[derive(Default)]
struct FakeArx {
    calls: Mutex<Vec<Call>>,
    context: Mutex<Option<ArxCallbackContext>>,
    last_error: c_int,
    /// Fire a focus event from inside `init`, as the real SDK may
    focus_on_init: bool,
    /// Behave like a library without the shutdown export
    no_shutdown: bool,
}

impl FakeArx {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, call: Call) -> bool {
        self.calls.lock().push(call);
        true
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Invoke the native callback the way the SDK's thread would
    fn fire(&self, event_type: c_int, value: c_int, arg: &str) {
        let ctx = (*self.context.lock()).expect("init registered a context");
        let arg = WideCString::new(arg);
        unsafe { (ctx.callback)(event_type, value, arg.as_ptr(), ctx.context) };
    }
}

fn s(w: &WideCString) -> String {
    w.to_string_lossy()
}

impl ArxApi for FakeArx {
    fn init(&self, id: &WideCString, name: &WideCString, ctx: &ArxCallbackContext) -> bool {
        *self.context.lock() = Some(*ctx);
        if self.focus_on_init {
            unsafe { (ctx.callback)(0x01, 0x01, std::ptr::null(), ctx.context) };
        }
        self.record(Call::Init(s(id), s(name)))
    }
    fn add_file_as(&self, path: &WideCString, name: &WideCString, mime: &WideCString) -> bool {
        self.record(Call::AddFileAs(s(path), s(name), s(mime)))
    }
    fn add_content_as(
        &self,
        content: &[u8],
        size: c_int,
        name: &WideCString,
        mime: &WideCString,
    ) -> bool {
        self.record(Call::AddContentAs(content.to_vec(), size, s(name), s(mime)))
    }
    fn add_utf8_string_as(
        &self,
        content: &WideCString,
        name: &WideCString,
        mime: &WideCString,
    ) -> bool {
        self.record(Call::AddUtf8StringAs(s(content), s(name), s(mime)))
    }
    fn add_image_from_bitmap(
        &self,
        bitmap: &[u8],
        width: c_int,
        height: c_int,
        name: &WideCString,
    ) -> bool {
        self.record(Call::AddImageFromBitmap(bitmap.len(), width, height, s(name)))
    }
    fn set_index(&self, name: &WideCString) -> bool {
        self.record(Call::SetIndex(s(name)))
    }
    fn set_tag_property_by_id(
        &self,
        id: &WideCString,
        prop: &WideCString,
        value: &WideCString,
    ) -> bool {
        self.record(Call::SetTagPropertyById(s(id), s(prop), s(value)))
    }
    fn set_tags_property_by_class(
        &self,
        class: &WideCString,
        prop: &WideCString,
        value: &WideCString,
    ) -> bool {
        self.record(Call::SetTagsPropertyByClass(s(class), s(prop), s(value)))
    }
    fn set_tag_content_by_id(&self, id: &WideCString, content: &WideCString) -> bool {
        self.record(Call::SetTagContentById(s(id), s(content)))
    }
    fn set_tags_content_by_class(&self, class: &WideCString, content: &WideCString) -> bool {
        self.record(Call::SetTagsContentByClass(s(class), s(content)))
    }
    fn get_last_error(&self) -> Option<c_int> {
        Some(self.last_error)
    }
    fn shutdown(&self) -> bool {
        if self.no_shutdown {
            return false;
        }
        self.record(Call::Shutdown)
    }
}

fn collector() -> (Arc<Mutex<Vec<ArxEvent>>>, impl Fn(&ArxEvent) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |event: &ArxEvent| sink.lock().push(event.clone()))
}

#[test]
fn events_reach_the_registered_handler() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let (seen, handler) = collector();

    assert!(session.init_with("com.example.test", "Test", handler));
    assert!(session.is_active());
    fake.fire(0x04, 0, "button");
    fake.fire(0x08, 0x02, "");

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].tag(), Some("button"));
    assert_eq!(seen[1].event_type, ArxEventType::MobileDeviceArrival);
    assert_eq!(seen[1].arg, None);
    assert_eq!(
        fake.calls()[0],
        Call::Init("com.example.test".into(), "Test".into())
    );
}

#[test]
fn reinit_replaces_the_handler() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let (first_seen, first) = collector();
    let (second_seen, second) = collector();

    session.init_with("id", "first", first);
    session.init_with("id", "second", second);
    fake.fire(0x01, 0x10, "");

    assert!(first_seen.lock().is_empty());
    assert_eq!(second_seen.lock().len(), 1);
}

#[test]
fn shutdown_clears_the_registration() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let (seen, handler) = collector();
    let mut rx = session.subscribe();

    session.init_with("id", "name", handler);
    assert!(session.shutdown());
    assert!(!session.is_active());
    assert!(!session.bridge().is_registered());

    fake.fire(0x02, 0, "");
    assert!(seen.lock().is_empty());
    assert!(rx.try_recv().is_err());
    assert_eq!(fake.calls().last(), Some(&Call::Shutdown));
}

#[test]
fn missing_shutdown_export_keeps_the_session_active() {
    let fake = Arc::new(FakeArx {
        no_shutdown: true,
        ..FakeArx::default()
    });
    let session = ArxSession::with_api(fake.clone());
    let (seen, handler) = collector();

    session.init_with("id", "name", handler);
    assert!(!session.shutdown());
    assert!(session.is_active());
    assert!(session.bridge().is_registered());

    // The SDK may still be calling back, so the handler must still be there
    fake.fire(0x02, 0, "");
    assert_eq!(seen.lock().len(), 1);
    assert!(!fake.calls().contains(&Call::Shutdown));
}

#[test]
fn events_fired_during_init_reach_the_new_handler() {
    let fake = Arc::new(FakeArx {
        focus_on_init: true,
        ..FakeArx::default()
    });
    let session = ArxSession::with_api(fake.clone());
    let (first_seen, first) = collector();
    let (second_seen, second) = collector();

    assert!(session.init_with("id", "first", first));
    assert_eq!(first_seen.lock().len(), 1);

    assert!(session.init_with("id", "second", second));
    assert_eq!(first_seen.lock().len(), 1);
    let seen = second_seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].event_type, ArxEventType::FocusActive);
    assert_eq!(seen[0].arg, None);
}

#[test]
fn default_handler_when_none_given() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let mut rx = session.subscribe();

    assert!(session.init("id", "name", None));
    assert!(session.bridge().is_registered());
    fake.fire(0x01, 0x01, "");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.event_type, ArxEventType::FocusActive);
}

#[test]
fn handler_panic_does_not_escape() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let mut rx = session.subscribe();

    session.init_with("id", "name", |_: &ArxEvent| panic!("handler failure"));
    fake.fire(0x04, 0, "tag");

    // Subscribers still see the event
    assert_eq!(rx.try_recv().unwrap().tag(), Some("tag"));
}

#[test]
fn subscribers_receive_events_on_another_thread() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());
    let mut rx = session.subscribe();
    session.init("id", "name", None);

    let consumer = std::thread::spawn(move || rx.blocking_recv().unwrap());
    fake.fire(0x10, 0x05, "");

    let event = consumer.join().unwrap();
    assert_eq!(event.event_type, ArxEventType::MobileDeviceRemoval);
    assert_eq!(event.value, 5);
}

#[test]
fn content_calls_forward_arguments() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());

    assert!(session.add_file_as("C:\\img\\logo.png", "logo.png", Some("image/png")));
    assert!(session.add_content_as(b"abc", "data.bin", None));
    assert!(session.add_utf8_string_as("<p>hi</p>", "index.html", Some("text/html")));
    assert!(session.add_image_from_bitmap(&[0; 16], 2, 2, "px.png"));
    assert!(session.set_index("index.html"));
    assert!(session.set_tag_property_by_id("title", "style.color", "red"));
    assert!(session.set_tags_property_by_class("cell", "style.display", "none"));
    assert!(session.set_tag_content_by_id("title", "Hello"));
    assert!(session.set_tags_content_by_class("cell", "-"));

    assert_eq!(
        fake.calls(),
        vec![
            Call::AddFileAs("C:\\img\\logo.png".into(), "logo.png".into(), "image/png".into()),
            Call::AddContentAs(b"abc".to_vec(), 3, "data.bin".into(), String::new()),
            Call::AddUtf8StringAs("<p>hi</p>".into(), "index.html".into(), "text/html".into()),
            Call::AddImageFromBitmap(16, 2, 2, "px.png".into()),
            Call::SetIndex("index.html".into()),
            Call::SetTagPropertyById("title".into(), "style.color".into(), "red".into()),
            Call::SetTagsPropertyByClass("cell".into(), "style.display".into(), "none".into()),
            Call::SetTagContentById("title".into(), "Hello".into()),
            Call::SetTagsContentByClass("cell".into(), "-".into()),
        ]
    );
}

#[test]
fn short_bitmaps_are_rejected_before_the_native_call() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());

    assert!(!session.add_image_from_bitmap(&[0; 15], 2, 2, "px.png"));
    assert!(!session.add_image_from_bitmap(&[0; 16], -2, -2, "px.png"));
    assert!(fake.calls().is_empty());
}

#[test]
fn string_content_with_nul_is_rejected_before_the_native_call() {
    let fake = FakeArx::new();
    let session = ArxSession::with_api(fake.clone());

    assert!(!session.add_utf8_string_as("<p>a\0b</p>", "index.html", Some("text/html")));
    assert!(fake.calls().is_empty());
}

#[test]
fn last_error_is_decoded() {
    let fake = Arc::new(FakeArx {
        last_error: 3,
        ..FakeArx::default()
    });
    let session = ArxSession::with_api(fake);
    assert_eq!(session.get_last_error(), Some(ArxErrorCode::WrongFilePath));
}

#[test]
fn drop_shuts_down_an_active_session() {
    let fake = FakeArx::new();
    {
        let session = ArxSession::with_api(fake.clone());
        session.init("id", "name", None);
    }
    assert_eq!(fake.calls().last(), Some(&Call::Shutdown));
}

#[test]
fn unavailable_session_returns_false_everywhere() {
    let session = ArxSession::unavailable();
    let (seen, handler) = collector();

    assert!(!session.init_with("id", "name", handler));
    assert!(!session.bridge().is_registered());
    assert!(!session.add_file_as("a", "b", None));
    assert!(!session.add_content_as(b"x", "b", None));
    assert!(!session.add_utf8_string_as("x", "b", None));
    assert!(!session.add_image_from_bitmap(&[0; 4], 1, 1, "b"));
    assert!(!session.set_index("b"));
    assert!(!session.set_tag_property_by_id("a", "b", "c"));
    assert!(!session.set_tags_property_by_class("a", "b", "c"));
    assert!(!session.set_tag_content_by_id("a", "b"));
    assert!(!session.set_tags_content_by_class("a", "b"));
    assert_eq!(session.get_last_error(), None);
    assert!(!session.shutdown());
    assert!(seen.lock().is_empty());
}
