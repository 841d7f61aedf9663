//! Memory utilities for FFI
//!
//! This module owns the thread-local last-error slot and the bounded
//! copy into caller-provided message buffers.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    // Interior NULs cannot be represented; keep the text before the first one.
    let mut bytes = err.into().into_bytes();
    if let Some(nul) = bytes.iter().position(|&b| b == 0) {
        bytes.truncate(nul);
    }
    let error_string = CString::new(bytes).unwrap_or_default();

    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(error_string);
    });
}

/// Clear the last error message
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Copy `message` into a caller buffer of `capacity` bytes.
///
/// At most `capacity - 1` bytes of the message are copied and the buffer is
/// always NUL-terminated. A null buffer or zero capacity writes nothing.
/// Returns the number of message bytes written, excluding the terminator.
///
/// # Safety
/// When non-null, `buffer` must be valid for writes of `capacity` bytes.
pub unsafe fn write_bounded(message: &str, buffer: *mut c_char, capacity: usize) -> usize {
    if buffer.is_null() || capacity == 0 {
        return 0;
    }

    let len = message.len().min(capacity - 1);
    ptr::copy_nonoverlapping(message.as_ptr() as *const c_char, buffer, len);
    *buffer.add(len) = 0;
    len
}

/// Borrow the bytes of a C string, `None` for a null pointer
///
/// # Safety
/// When non-null, the pointer must be a valid null-terminated C string that
/// outlives the returned slice
pub unsafe fn c_str_bytes<'a>(s: *const c_char) -> Option<&'a [u8]> {
    if s.is_null() {
        None
    } else {
        Some(CStr::from_ptr(s).to_bytes())
    }
}

/// Get the last error message
///
/// # Safety
/// Returns a pointer that should NOT be freed by the caller. It stays valid
/// until the next call on this thread that sets or clears the error.
#[no_mangle]
pub unsafe extern "C" fn voicehealth_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message
#[no_mangle]
pub extern "C" fn voicehealth_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handling() {
        set_last_error("Test error");
        unsafe {
            let error = voicehealth_get_last_error();
            assert!(!error.is_null());
            let error_str = CStr::from_ptr(error).to_str().unwrap();
            assert_eq!(error_str, "Test error");
        }

        clear_last_error();
        unsafe {
            let error = voicehealth_get_last_error();
            assert!(error.is_null());
        }
    }

    #[test]
    fn test_interior_nul_truncated() {
        set_last_error("before\0after");
        unsafe {
            let error = CStr::from_ptr(voicehealth_get_last_error());
            assert_eq!(error.to_str().unwrap(), "before");
        }
        clear_last_error();
    }

    #[test]
    fn test_write_bounded_fits() {
        let mut buf = [0x7f as c_char; 32];
        let written = unsafe { write_bounded("Malformed JSON", buf.as_mut_ptr(), buf.len()) };
        assert_eq!(written, 14);
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "Malformed JSON");
    }

    #[test]
    fn test_write_bounded_truncates() {
        let mut buf = [0x7f as c_char; 9];
        let written = unsafe { write_bounded("Malformed JSON", buf.as_mut_ptr(), 6) };
        assert_eq!(written, 5);
        assert_eq!(buf[5], 0);
        // Nothing past the declared capacity is touched.
        assert_eq!(buf[6], 0x7f);
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "Malfo");
    }

    #[test]
    fn test_write_bounded_degenerate_buffers() {
        let mut buf = [0x7f as c_char; 4];
        assert_eq!(unsafe { write_bounded("x", buf.as_mut_ptr(), 0) }, 0);
        assert_eq!(buf[0], 0x7f);

        assert_eq!(unsafe { write_bounded("x", ptr::null_mut(), 16) }, 0);

        assert_eq!(unsafe { write_bounded("abc", buf.as_mut_ptr(), 1) }, 0);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn test_c_str_bytes() {
        let owned = CString::new("{}").unwrap();
        unsafe {
            assert_eq!(c_str_bytes(owned.as_ptr()), Some(&b"{}"[..]));
            assert_eq!(c_str_bytes(ptr::null()), None);
        }
    }
}
