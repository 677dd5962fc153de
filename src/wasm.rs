//! WASM bindings for beammech
//!
//! Runs the solver directly in the browser. Input and output are JSON strings
//! so the binding can be called from a Web Worker without shared memory.

use wasm_bindgen::prelude::*;

use crate::model::Problem;
use crate::results::SolveResponse;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Solve a beam problem
///
/// Takes a problem as JSON (the same format as problem files) and returns
/// a JSON response with the solution or an error message.
#[wasm_bindgen]
pub fn solve(problem_json: &str) -> String {
    let start = js_sys::Date::now();

    let mut response = match Problem::from_json(problem_json) {
        Ok(mut problem) => {
            let result = problem.solve().and_then(|_| problem.solution().cloned());
            SolveResponse::from_result(result)
        }
        Err(e) => SolveResponse::failure(format!("Failed to parse problem: {}", e)),
    };
    response.ms_elapsed = Some((js_sys::Date::now() - start) as u64);

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
