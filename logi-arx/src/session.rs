//! Safe applet session

use std::os::raw::c_int;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

use logi_native::{NativeError, NativeLibrary, SdkLibrary, WideCString};

use crate::api::{ArxApi, NativeArxApi};
use crate::bridge::{ArxCallbackContext, ArxHandler, EventBridge};
use crate::constants::ArxErrorCode;
use crate::event::ArxEvent;

/// Bytes per pixel of a bitmap passed to `add_image_from_bitmap`
pub const BITMAP_BYTES_PER_PIXEL: usize = 4;

/// Handle to the Arx Control applet SDK
///
/// Owns the [`EventBridge`] that receives this applet's events. Like
/// `LedSdk`, a session without a library returns `false` / `None` from every
/// method.
pub struct ArxSession {
    api: Option<Arc<dyn ArxApi>>,
    bridge: Arc<EventBridge>,
    // Handed to the SDK by address; must not move while initialised
    callback_context: Box<ArxCallbackContext>,
    active: AtomicBool,
}

impl ArxSession {
    /// Locate and load `LogitechGArxControl.dll`
    pub fn load(explicit: Option<&Path>) -> Result<Self, NativeError> {
        let library = NativeLibrary::load(SdkLibrary::ArxControl, explicit)?;
        Ok(Self::with_api(Arc::new(NativeArxApi::new(library))))
    }

    /// Like [`ArxSession::load`], degrading to an unavailable session on failure
    pub fn load_or_unavailable(explicit: Option<&Path>) -> Self {
        match Self::load(explicit) {
            Ok(session) => session,
            Err(e) => {
                warn!("Arx Control SDK unavailable: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self::from_parts(None)
    }

    /// Session over any [`ArxApi`] implementation
    pub fn with_api(api: Arc<dyn ArxApi>) -> Self {
        Self::from_parts(Some(api))
    }

    fn from_parts(api: Option<Arc<dyn ArxApi>>) -> Self {
        let bridge = Arc::new(EventBridge::new());
        let callback_context = Box::new(bridge.callback_context());
        Self {
            api,
            bridge,
            callback_context,
            active: AtomicBool::new(false),
        }
    }

    pub fn is_available(&self) -> bool {
        self.api.is_some()
    }

    /// Whether `init` succeeded and `shutdown` has not been called since
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Event bridge of this session
    pub fn bridge(&self) -> &Arc<EventBridge> {
        &self.bridge
    }

    /// Receive every event delivered to this applet on a channel
    pub fn subscribe(&self) -> broadcast::Receiver<ArxEvent> {
        self.bridge.subscribe()
    }

    fn call<F>(&self, entry: &str, f: F) -> bool
    where
        F: FnOnce(&dyn ArxApi) -> bool,
    {
        let Some(api) = self.api.as_deref() else {
            trace!("{}: Arx SDK unavailable", entry);
            return false;
        };
        let ok = f(api);
        if !ok {
            debug!("{} reported failure", entry);
        }
        ok
    }

    /// Register the applet with Arx Control.
    ///
    /// `handler` receives every event from the SDK's own thread; `None`
    /// installs a handler that only logs. Calling `init` again replaces the
    /// handler.
    pub fn init(&self, identifier: &str, friendly_name: &str, handler: Option<ArxHandler>) -> bool {
        if self.api.is_none() {
            trace!("LogiArxInit: Arx SDK unavailable");
            return false;
        }

        // Registered first: the SDK may deliver focus events before returning
        self.bridge.register(handler);

        let identifier = WideCString::new(identifier);
        let friendly_name = WideCString::new(friendly_name);
        let ok = self.call("LogiArxInit", |api| {
            api.init(&identifier, &friendly_name, &self.callback_context)
        });
        if ok {
            self.active.store(true, Ordering::Release);
            info!("Arx applet {} initialised", identifier.to_string_lossy());
        }
        ok
    }

    /// [`ArxSession::init`] with a closure handler
    pub fn init_with<F>(&self, identifier: &str, friendly_name: &str, handler: F) -> bool
    where
        F: Fn(&ArxEvent) + Send + Sync + 'static,
    {
        self.init(identifier, friendly_name, Some(Arc::new(handler)))
    }

    /// Send a local file to the device as `file_name`
    pub fn add_file_as(&self, file_path: &str, file_name: &str, mime_type: Option<&str>) -> bool {
        let (file_path, file_name) = (WideCString::new(file_path), WideCString::new(file_name));
        let mime_type = mime(mime_type);
        self.call("LogiArxAddFileAs", |api| {
            api.add_file_as(&file_path, &file_name, &mime_type)
        })
    }

    /// Send raw bytes to the device as `file_name`
    pub fn add_content_as(&self, content: &[u8], file_name: &str, mime_type: Option<&str>) -> bool {
        let Ok(size) = c_int::try_from(content.len()) else {
            warn!(
                "Refusing {} byte content for {}: too large",
                content.len(),
                file_name
            );
            return false;
        };
        let file_name = WideCString::new(file_name);
        let mime_type = mime(mime_type);
        self.call("LogiArxAddContentAs", |api| {
            api.add_content_as(content, size, &file_name, &mime_type)
        })
    }

    /// Send a string (HTML, CSS, script) to the device as `file_name`
    ///
    /// Content with an interior NUL is refused: the SDK would only store the
    /// part before it.
    pub fn add_utf8_string_as(
        &self,
        content: &str,
        file_name: &str,
        mime_type: Option<&str>,
    ) -> bool {
        if content.contains('\0') {
            warn!("Refusing string content for {}: interior NUL", file_name);
            return false;
        }
        let (content, file_name) = (WideCString::new(content), WideCString::new(file_name));
        let mime_type = mime(mime_type);
        self.call("LogiArxAddUTF8StringAs", |api| {
            api.add_utf8_string_as(&content, &file_name, &mime_type)
        })
    }

    /// Send a `width` x `height` 32-bit bitmap, stored on the device as PNG
    pub fn add_image_from_bitmap(
        &self,
        bitmap: &[u8],
        width: i32,
        height: i32,
        file_name: &str,
    ) -> bool {
        if !bitmap_fits(bitmap.len(), width, height) {
            warn!(
                "Refusing {}x{} bitmap for {}: {} bytes supplied",
                width,
                height,
                file_name,
                bitmap.len()
            );
            return false;
        }
        let file_name = WideCString::new(file_name);
        self.call("LogiArxAddImageFromBitmap", |api| {
            api.add_image_from_bitmap(bitmap, width, height, &file_name)
        })
    }

    /// Make a previously sent file the applet's start page
    pub fn set_index(&self, file_name: &str) -> bool {
        let file_name = WideCString::new(file_name);
        self.call("LogiArxSetIndex", |api| api.set_index(&file_name))
    }

    pub fn set_tag_property_by_id(&self, tag_id: &str, property: &str, new_value: &str) -> bool {
        let (tag_id, property) = (WideCString::new(tag_id), WideCString::new(property));
        let new_value = WideCString::new(new_value);
        self.call("LogiArxSetTagPropertyById", |api| {
            api.set_tag_property_by_id(&tag_id, &property, &new_value)
        })
    }

    pub fn set_tags_property_by_class(
        &self,
        tags_class: &str,
        property: &str,
        new_value: &str,
    ) -> bool {
        let (tags_class, property) = (WideCString::new(tags_class), WideCString::new(property));
        let new_value = WideCString::new(new_value);
        self.call("LogiArxSetTagsPropertyByClass", |api| {
            api.set_tags_property_by_class(&tags_class, &property, &new_value)
        })
    }

    /// Replace the inner HTML of the tag with id `tag_id`
    pub fn set_tag_content_by_id(&self, tag_id: &str, new_content: &str) -> bool {
        let (tag_id, new_content) = (WideCString::new(tag_id), WideCString::new(new_content));
        self.call("LogiArxSetTagContentById", |api| {
            api.set_tag_content_by_id(&tag_id, &new_content)
        })
    }

    /// Replace the inner HTML of every tag of class `tags_class`
    pub fn set_tags_content_by_class(&self, tags_class: &str, new_content: &str) -> bool {
        let (tags_class, new_content) =
            (WideCString::new(tags_class), WideCString::new(new_content));
        self.call("LogiArxSetTagsContentByClass", |api| {
            api.set_tags_content_by_class(&tags_class, &new_content)
        })
    }

    /// Error recorded by the most recent failing call
    pub fn get_last_error(&self) -> Option<ArxErrorCode> {
        let api = self.api.as_deref()?;
        api.get_last_error().map(ArxErrorCode::from_code)
    }

    /// Remove the applet and drop the handler registration
    pub fn shutdown(&self) -> bool {
        let issued = self.call("LogiArxShutdown", |api| api.shutdown());
        if issued {
            self.bridge.clear();
            self.active.store(false, Ordering::Release);
        }
        issued
    }
}

impl Drop for ArxSession {
    fn drop(&mut self) {
        // The SDK holds pointers into this session until it is shut down
        if self.is_active() {
            debug!("Shutting down Arx applet on drop");
            self.shutdown();
        }
    }
}

impl std::fmt::Debug for ArxSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxSession")
            .field("available", &self.is_available())
            .field("active", &self.is_active())
            .field("bridge", &self.bridge)
            .finish()
    }
}

/// Missing MIME types go over the wire as ""
fn mime(mime_type: Option<&str>) -> WideCString {
    mime_type.map(WideCString::new).unwrap_or_default()
}

fn bitmap_fits(len: usize, width: i32, height: i32) -> bool {
    let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
        return false;
    };
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BITMAP_BYTES_PER_PIXEL))
        .is_some_and(|needed| len >= needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_default_is_empty() {
        assert!(mime(None).is_empty());
        assert_eq!(mime(Some("text/html")).to_string_lossy(), "text/html");
    }

    #[test]
    fn test_bitmap_fits() {
        assert!(bitmap_fits(16, 2, 2));
        assert!(bitmap_fits(20, 2, 2));
        assert!(!bitmap_fits(15, 2, 2));
        assert!(!bitmap_fits(16, -2, -2));
        assert!(bitmap_fits(0, 0, 10));
    }

    #[test]
    fn test_unavailable_session() {
        let session = ArxSession::unavailable();
        assert!(!session.is_available());
        assert!(!session.init("id", "name", None));
        assert!(!session.bridge().is_registered());
        assert!(!session.shutdown());
        assert_eq!(session.get_last_error(), None);
    }
}
