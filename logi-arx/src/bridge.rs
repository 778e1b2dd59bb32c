//! Callback bridge between the applet SDK and Rust handlers
//!
//! The SDK reports events by calling a C function pointer from one of its own
//! threads, passing back an opaque context pointer it was given at init time.
//! [`arx_event_trampoline`] is that function; the context is the address of
//! the session's [`EventBridge`], which holds the current handler and a
//! broadcast channel for callers that prefer to consume events on their own
//! thread.

use std::ffi::c_void;
use std::os::raw::c_int;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use logi_native::wide::read_bounded;
use logi_native::WChar;

use crate::constants::EVENT_ARG_LEN;
use crate::event::ArxEvent;

/// Broadcast channel capacity for event subscribers
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Caller-supplied event handler
pub type ArxHandler = Arc<dyn Fn(&ArxEvent) + Send + Sync>;

/// Native callback prototype: `(eventType, eventValue, eventArg, context)`
pub type ArxCallback = unsafe extern "C" fn(c_int, c_int, *const WChar, *mut c_void);

/// `logiArxCbContext` as passed to `LogiArxInit`
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct ArxCallbackContext {
    pub callback: ArxCallback,
    pub context: *mut c_void,
}

// SAFETY: `context` points at an `EventBridge`, which is Send + Sync; the
// struct itself is only read.
unsafe impl Send for ArxCallbackContext {}
unsafe impl Sync for ArxCallbackContext {}

/// Handler slot plus event fan-out for one applet session
pub struct EventBridge {
    handler: RwLock<Option<ArxHandler>>,
    events_tx: broadcast::Sender<ArxEvent>,
}

impl EventBridge {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            handler: RwLock::new(None),
            events_tx,
        }
    }

    /// Install `handler`, or the logging handler when `None`.
    /// Replaces any earlier registration.
    pub fn register(&self, handler: Option<ArxHandler>) {
        let handler = handler.unwrap_or_else(default_handler);
        *self.handler.write() = Some(handler);
    }

    /// Drop the registration; later events are discarded
    pub fn clear(&self) {
        *self.handler.write() = None;
    }

    pub fn is_registered(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Receive a copy of every event delivered while registered
    pub fn subscribe(&self) -> broadcast::Receiver<ArxEvent> {
        self.events_tx.subscribe()
    }

    /// Deliver `event` to the handler and subscribers.
    ///
    /// Returns `false` if nothing is registered. A panicking handler is
    /// logged and subscribers still receive the event.
    pub fn dispatch(&self, event: ArxEvent) -> bool {
        // Clone out so the handler may re-enter the session
        let Some(handler) = self.handler.read().clone() else {
            debug!("Dropping Arx event with no registration: {}", event);
            return false;
        };

        if catch_unwind(AssertUnwindSafe(|| handler(&event))).is_err() {
            error!("Arx event handler panicked on {}", event);
        }

        // No receivers is not an error
        let _ = self.events_tx.send(event);
        true
    }

    /// Native callback context pointing at this bridge.
    ///
    /// The pointer is valid for as long as this `Arc` (or a clone) is alive.
    pub fn callback_context(self: &Arc<Self>) -> ArxCallbackContext {
        ArxCallbackContext {
            callback: arx_event_trampoline,
            context: Arc::as_ptr(self) as *mut c_void,
        }
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBridge")
            .field("registered", &self.is_registered())
            .field("subscribers", &self.events_tx.receiver_count())
            .finish()
    }
}

fn default_handler() -> ArxHandler {
    Arc::new(|event: &ArxEvent| {
        info!(
            event_type = event.event_type.code(),
            value = event.value,
            arg = event.arg.as_deref().unwrap_or(""),
            "Arx event: {}",
            event
        );
    })
}

/// Entry point handed to `LogiArxInit`
///
/// # Safety
/// `context` must be null or come from [`EventBridge::callback_context`] with
/// the bridge still alive. `event_arg` must be null or point to at least
/// [`EVENT_ARG_LEN`] readable units or a NUL-terminated string.
pub unsafe extern "C" fn arx_event_trampoline(
    event_type: c_int,
    event_value: c_int,
    event_arg: *const WChar,
    context: *mut c_void,
) {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        if context.is_null() {
            error!("Arx callback without context (event 0x{:02x})", event_type);
            return;
        }
        // SAFETY: non-null contexts come from `callback_context`.
        let bridge = unsafe { &*(context as *const EventBridge) };
        // SAFETY: the SDK passes a buffer of at most EVENT_ARG_LEN units.
        let arg = unsafe { read_bounded(event_arg, EVENT_ARG_LEN) };
        bridge.dispatch(ArxEvent::from_raw(event_type, event_value, arg));
    }));
    if outcome.is_err() {
        error!("Panic while dispatching Arx event 0x{:02x}", event_type);
    }
}
