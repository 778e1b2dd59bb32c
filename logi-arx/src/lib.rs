//! Safe bindings for the Logitech Gaming Arx Control applet SDK
//!
//! An applet is a small web page that Arx Control shows on a phone or tablet.
//! [`ArxSession`] uploads its files and updates tags; events from the device
//! (focus changes, taps, devices coming and going) arrive on the handler given
//! to [`ArxSession::init`] and on [`ArxSession::subscribe`].
//!
//! ```no_run
//! use logi_arx::ArxSession;
//!
//! let arx = ArxSession::load_or_unavailable(None);
//! arx.init_with("com.example.applet", "Example", |event| println!("{event}"));
//! arx.add_utf8_string_as("<html><body id=\"body\"></body></html>", "index.html", Some("text/html"));
//! arx.set_index("index.html");
//! arx.shutdown();
//! ```

pub mod api;
pub mod bridge;
pub mod constants;
pub mod event;
pub mod session;

pub use api::{ArxApi, NativeArxApi};
pub use bridge::{
    arx_event_trampoline, ArxCallback, ArxCallbackContext, ArxHandler, EventBridge,
    EVENT_CHANNEL_CAPACITY,
};
pub use constants::{ArxDeviceType, ArxErrorCode, ArxEventType, Orientation, EVENT_ARG_LEN};
pub use event::ArxEvent;
pub use session::{ArxSession, BITMAP_BYTES_PER_PIXEL};

pub use tokio::sync::broadcast;
