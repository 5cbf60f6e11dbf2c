//! Execute-then-check control flow
//!
//! Firmware often runs a step, inspects the value it returned and, if the
//! value signals trouble, reports it and either carries on or leaves the
//! enclosing loop. [`check`] and [`check_result`] run the report and return
//! a [`ControlFlow`] so the caller picks the exit:
//!
//! ```ignore
//! loop {
//!     let flow = check(sensor.read(), |v| *v == 0xFFFF, |_| warn!("sensor open"));
//!     let Continue(value) = flow else { break };
//!     // ... use value
//! }
//! ```

use core::ops::ControlFlow;

/// Run `on_error` if `is_error` holds for `value`
///
/// Returns `Break(value)` when the check flagged an error, `Continue(value)`
/// otherwise. The value is handed back either way.
pub fn check<T>(
    value: T,
    is_error: impl FnOnce(&T) -> bool,
    on_error: impl FnOnce(&T),
) -> ControlFlow<T, T> {
    if is_error(&value) {
        on_error(&value);
        ControlFlow::Break(value)
    } else {
        ControlFlow::Continue(value)
    }
}

/// Run `on_error` if `result` is an `Err`
///
/// Returns `Break(err)` on failure, `Continue(ok)` on success.
pub fn check_result<T, E>(result: Result<T, E>, on_error: impl FnOnce(&E)) -> ControlFlow<E, T> {
    match result {
        Ok(value) => ControlFlow::Continue(value),
        Err(e) => {
            on_error(&e);
            ControlFlow::Break(e)
        }
    }
}
