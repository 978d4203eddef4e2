//! C ABI over JSON.
//!
//! Requests and responses are NUL-terminated UTF-8 JSON strings. Every
//! string returned by this module must be released with
//! [`trip_cost_free_string`].
//!
//! Request: `{"vehicle": Vehicle, "route": Route, "travelers"?: n, "config"?: CostConfig}`
//!
//! Response: `{"ok": TripExpenses}` or `{"error": "message"}`

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::{Deserialize, Serialize};

use crate::evaluation::ExpenseCalculator;
use crate::models::{Route, TripExpenses, Vehicle};
use crate::pricing::CostConfig;

#[derive(Debug, Deserialize)]
struct ComputeRequest {
    vehicle: Vehicle,
    route: Route,
    #[serde(default)]
    travelers: Option<u32>,
    #[serde(default)]
    config: Option<CostConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum ComputeResponse {
    Ok(TripExpenses),
    Error(String),
}

fn compute(request: &str) -> Result<TripExpenses, String> {
    let request: ComputeRequest =
        serde_json::from_str(request).map_err(|e| format!("invalid request: {e}"))?;
    let calculator = ExpenseCalculator::new(request.config.unwrap_or_default())
        .map_err(|e| e.to_string())?;
    let travelers = request
        .travelers
        .unwrap_or(calculator.config().default_travelers);
    calculator
        .compute(&request.vehicle, &request.route, travelers)
        .map_err(|e| e.to_string())
}

fn handle_request(request: &str) -> String {
    let response = match compute(request) {
        Ok(expenses) => ComputeResponse::Ok(expenses),
        Err(message) => {
            log::warn!("ffi request rejected: {message}");
            ComputeResponse::Error(message)
        }
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!("{{\"error\":\"failed to encode response: {e}\"}}"))
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Computes trip expenses from a JSON request.
///
/// Returns a newly allocated JSON response, or null if the response could
/// not be encoded as a C string.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn trip_cost_compute_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return into_c_string(handle_request_error("request is null"));
    }
    // SAFETY: non-null and NUL-terminated per the function contract.
    let request = unsafe { CStr::from_ptr(request) };
    match request.to_str() {
        Ok(json) => into_c_string(handle_request(json)),
        Err(e) => into_c_string(handle_request_error(&format!("request is not UTF-8: {e}"))),
    }
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn trip_cost_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: allocated by `CString::into_raw` in this module.
        drop(unsafe { CString::from_raw(s) });
    }
}

fn handle_request_error(message: &str) -> String {
    serde_json::to_string(&ComputeResponse::Error(message.to_string()))
        .unwrap_or_else(|_| "{\"error\":\"invalid request\"}".to_string())
}
