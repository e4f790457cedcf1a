//! Host functions the keymap can trigger.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ToggleFn = &'static (dyn Fn() + Sync);

struct Hooks {
    rgb_toggle: Option<ToggleFn>,
}

const fn default_hooks() -> Hooks {
    Hooks { rgb_toggle: None }
}

static HOOKS: CriticalSectionMutex<RefCell<Hooks>> =
    CriticalSectionMutex::new(RefCell::new(default_hooks()));

/// Fire the RGB matrix toggle, when one is registered.
pub fn rgb_toggle() {
    HOOKS.lock(|r| {
        let guard = r.borrow();
        if let Some(f) = guard.rgb_toggle {
            f();
        }
    });
}

/// Register the function that turns the RGB matrix on and off.
///
/// ```ignore
/// use pumpkin_keymap::hooks::handle_rgb_toggle;
///
/// fn toggle() {
///     // flip the matrix driver's enable flag
/// }
///
/// handle_rgb_toggle(Some(&toggle));
/// ```
pub fn handle_rgb_toggle(value: Option<ToggleFn>) {
    HOOKS.lock(|r| {
        r.borrow_mut().rgb_toggle = value;
    });
}
