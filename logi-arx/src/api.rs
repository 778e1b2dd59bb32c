//! Arx Control SDK entry points
//!
//! Same seam as the LED crate: [`ArxApi`] mirrors the exports of
//! `LogitechGArxControl.dll` at native width, [`NativeArxApi`] resolves them
//! from a loaded library.

use std::ffi::c_void;
use std::os::raw::c_int;

use tracing::warn;

use logi_native::{NativeLibrary, WChar, WideCString};

use crate::bridge::ArxCallbackContext;

/// Native applet SDK surface
pub trait ArxApi: Send + Sync {
    /// `context` must stay valid until [`ArxApi::shutdown`]
    fn init(
        &self,
        identifier: &WideCString,
        friendly_name: &WideCString,
        context: &ArxCallbackContext,
    ) -> bool;
    fn add_file_as(
        &self,
        file_path: &WideCString,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool;
    /// `size` is the length of `content` in bytes
    fn add_content_as(
        &self,
        content: &[u8],
        size: c_int,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool;
    fn add_utf8_string_as(
        &self,
        content: &WideCString,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool;
    /// `bitmap` holds at least `width * height * 4` bytes
    fn add_image_from_bitmap(
        &self,
        bitmap: &[u8],
        width: c_int,
        height: c_int,
        file_name: &WideCString,
    ) -> bool;
    fn set_index(&self, file_name: &WideCString) -> bool;
    fn set_tag_property_by_id(
        &self,
        tag_id: &WideCString,
        property: &WideCString,
        new_value: &WideCString,
    ) -> bool;
    fn set_tags_property_by_class(
        &self,
        tags_class: &WideCString,
        property: &WideCString,
        new_value: &WideCString,
    ) -> bool;
    fn set_tag_content_by_id(&self, tag_id: &WideCString, new_content: &WideCString) -> bool;
    fn set_tags_content_by_class(
        &self,
        tags_class: &WideCString,
        new_content: &WideCString,
    ) -> bool;
    /// `None` if the library does not export `LogiArxGetLastError`
    fn get_last_error(&self) -> Option<c_int>;
    /// `true` once the (void) export has been called
    fn shutdown(&self) -> bool;
}

type FnInit =
    unsafe extern "C" fn(*const WChar, *const WChar, *const ArxCallbackContext) -> bool;
type FnWide1 = unsafe extern "C" fn(*const WChar) -> bool;
type FnWide2 = unsafe extern "C" fn(*const WChar, *const WChar) -> bool;
type FnWide3 = unsafe extern "C" fn(*const WChar, *const WChar, *const WChar) -> bool;
type FnContent = unsafe extern "C" fn(*const c_void, c_int, *const WChar, *const WChar) -> bool;
type FnBitmap = unsafe extern "C" fn(*const u8, c_int, c_int, *const WChar) -> bool;
type FnLastError = unsafe extern "C" fn() -> c_int;
type FnShutdown = unsafe extern "C" fn();

/// Entry points resolved from a loaded `LogitechGArxControl.dll`
pub struct NativeArxApi {
    library: NativeLibrary,
    init: Option<FnInit>,
    add_file_as: Option<FnWide3>,
    add_content_as: Option<FnContent>,
    add_utf8_string_as: Option<FnWide3>,
    add_image_from_bitmap: Option<FnBitmap>,
    set_index: Option<FnWide1>,
    set_tag_property_by_id: Option<FnWide3>,
    set_tags_property_by_class: Option<FnWide3>,
    set_tag_content_by_id: Option<FnWide2>,
    set_tags_content_by_class: Option<FnWide2>,
    get_last_error: Option<FnLastError>,
    shutdown: Option<FnShutdown>,
}

impl NativeArxApi {
    pub fn new(library: NativeLibrary) -> Self {
        // SAFETY: each type alias matches the prototype in
        // LogitechGArxControlLib.h.
        unsafe {
            Self {
                init: library.symbol("LogiArxInit"),
                add_file_as: library.symbol("LogiArxAddFileAs"),
                add_content_as: library.symbol("LogiArxAddContentAs"),
                add_utf8_string_as: library.symbol("LogiArxAddUTF8StringAs"),
                add_image_from_bitmap: library.symbol("LogiArxAddImageFromBitmap"),
                set_index: library.symbol("LogiArxSetIndex"),
                set_tag_property_by_id: library.symbol("LogiArxSetTagPropertyById"),
                set_tags_property_by_class: library.symbol("LogiArxSetTagsPropertyByClass"),
                set_tag_content_by_id: library.symbol("LogiArxSetTagContentById"),
                set_tags_content_by_class: library.symbol("LogiArxSetTagsContentByClass"),
                get_last_error: library.symbol("LogiArxGetLastError"),
                shutdown: library.symbol("LogiArxShutdown"),
                library,
            }
        }
    }

    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }
}

macro_rules! call {
    ($self:ident . $entry:ident ( $($arg:expr),* )) => {
        match $self.$entry {
            // SAFETY: resolved with its exact prototype; the library is never
            // unloaded and every pointer argument outlives the call.
            Some(f) => unsafe { f($($arg),*) },
            None => {
                warn!("Arx SDK entry point for {} is not exported", stringify!($entry));
                false
            }
        }
    };
}

impl ArxApi for NativeArxApi {
    fn init(
        &self,
        identifier: &WideCString,
        friendly_name: &WideCString,
        context: &ArxCallbackContext,
    ) -> bool {
        call!(self.init(
            identifier.as_ptr(),
            friendly_name.as_ptr(),
            context as *const ArxCallbackContext
        ))
    }

    fn add_file_as(
        &self,
        file_path: &WideCString,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool {
        call!(self.add_file_as(file_path.as_ptr(), file_name.as_ptr(), mime_type.as_ptr()))
    }

    fn add_content_as(
        &self,
        content: &[u8],
        size: c_int,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool {
        call!(self.add_content_as(
            content.as_ptr() as *const c_void,
            size,
            file_name.as_ptr(),
            mime_type.as_ptr()
        ))
    }

    fn add_utf8_string_as(
        &self,
        content: &WideCString,
        file_name: &WideCString,
        mime_type: &WideCString,
    ) -> bool {
        call!(self.add_utf8_string_as(content.as_ptr(), file_name.as_ptr(), mime_type.as_ptr()))
    }

    fn add_image_from_bitmap(
        &self,
        bitmap: &[u8],
        width: c_int,
        height: c_int,
        file_name: &WideCString,
    ) -> bool {
        call!(self.add_image_from_bitmap(bitmap.as_ptr(), width, height, file_name.as_ptr()))
    }

    fn set_index(&self, file_name: &WideCString) -> bool {
        call!(self.set_index(file_name.as_ptr()))
    }

    fn set_tag_property_by_id(
        &self,
        tag_id: &WideCString,
        property: &WideCString,
        new_value: &WideCString,
    ) -> bool {
        call!(self.set_tag_property_by_id(tag_id.as_ptr(), property.as_ptr(), new_value.as_ptr()))
    }

    fn set_tags_property_by_class(
        &self,
        tags_class: &WideCString,
        property: &WideCString,
        new_value: &WideCString,
    ) -> bool {
        call!(self.set_tags_property_by_class(
            tags_class.as_ptr(),
            property.as_ptr(),
            new_value.as_ptr()
        ))
    }

    fn set_tag_content_by_id(&self, tag_id: &WideCString, new_content: &WideCString) -> bool {
        call!(self.set_tag_content_by_id(tag_id.as_ptr(), new_content.as_ptr()))
    }

    fn set_tags_content_by_class(
        &self,
        tags_class: &WideCString,
        new_content: &WideCString,
    ) -> bool {
        call!(self.set_tags_content_by_class(tags_class.as_ptr(), new_content.as_ptr()))
    }

    fn get_last_error(&self) -> Option<c_int> {
        match self.get_last_error {
            // SAFETY: no arguments; the library stays loaded.
            Some(f) => Some(unsafe { f() }),
            None => {
                warn!("Arx SDK entry point for get_last_error is not exported");
                None
            }
        }
    }

    fn shutdown(&self) -> bool {
        match self.shutdown {
            Some(f) => {
                // SAFETY: no arguments; the library stays loaded.
                unsafe { f() };
                true
            }
            None => {
                warn!("Arx SDK entry point for shutdown is not exported");
                false
            }
        }
    }
}
