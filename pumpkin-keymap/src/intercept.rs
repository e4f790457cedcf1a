//! Key-event interception rules.
//!
//! The host key processor calls [Interceptor::handle] for every key
//! transition before its own handling. The answer says whether default
//! processing should continue; side effects go out through the report
//! channel, the layer-lock flag and the registered RGB hook.

use embassy_sync::blocking_mutex::raw::RawMutex;
use pumpkin_common::keycodes::{keys, mod_mask};

use crate::{
    dual_action, hooks,
    layer_lock::LayerLock,
    report::{KeyEvent, ReportChannel},
    snapshot::Snapshot,
};

/// One key transition, tap-or-hold already classified by the host.
///
/// A non-zero `tap_count` means the dual-role timer resolved this key as a
/// tap; plain keys always arrive with a count of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub pressed: bool,
    pub tap_count: u8,
}

impl KeyRecord {
    pub fn down() -> Self {
        Self {
            pressed: true,
            tap_count: 0,
        }
    }

    pub fn up() -> Self {
        Self {
            pressed: false,
            tap_count: 0,
        }
    }

    pub fn tap(pressed: bool) -> Self {
        Self {
            pressed,
            tap_count: 1,
        }
    }

    pub fn is_tap(&self) -> bool {
        self.tap_count != 0
    }
}

// The braces macro emits up to eleven events in one call.
const MIN_REPORT_BUFFER_SIZE: usize = 12;

const fn assert_sizes<const REPORT_BUFFER_SIZE: usize>() -> bool {
    assert!(REPORT_BUFFER_SIZE >= MIN_REPORT_BUFFER_SIZE);
    true
}

pub struct Interceptor<'c, M: RawMutex, const REPORT_BUFFER_SIZE: usize> {
    layer_lock: LayerLock,
    channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>,
}

impl<'c, M: RawMutex, const REPORT_BUFFER_SIZE: usize> Interceptor<'c, M, REPORT_BUFFER_SIZE> {
    const OKAY: bool = assert_sizes::<REPORT_BUFFER_SIZE>();

    pub fn new(channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>) -> Self {
        assert!(Self::OKAY);
        Self {
            layer_lock: LayerLock::default(),
            channel,
        }
    }

    /// Read by the host layer stack to keep locked layers active.
    pub fn layer_lock(&self) -> &LayerLock {
        &self.layer_lock
    }

    /// Answers true when default processing should continue.
    pub fn handle(&mut self, code: u16, record: KeyRecord, snapshot: &Snapshot) -> bool {
        if self.layer_lock.process(code, &record) {
            return false;
        }

        match code {
            // Ctrl on hold, layer lock on tap.
            dual_action::CTRL_INSERT => {
                if record.is_tap() {
                    if record.pressed {
                        self.layer_lock.invert(snapshot.highest_layer());
                    }
                    false
                } else {
                    true
                }
            }
            // Ctrl on hold, RGB matrix toggle on tap.
            dual_action::CTRL_RGB if record.is_tap() && record.pressed => {
                hooks::rgb_toggle();
                false
            }
            keys::LEFT_BRACKET => {
                if record.pressed {
                    self.braces(snapshot);
                }
                false
            }
            _ => true,
        }
    }

    /// Types one of `[]` `{}` `«»` `<>` from the modifiers active when the
    /// key went down, then steps the cursor back between the pair.
    fn braces(&mut self, snapshot: &Snapshot) {
        let held = snapshot.mods;
        let combined = snapshot.mods | snapshot.oneshot_mods;

        self.channel.report(KeyEvent::ClearOneshot);
        if held != 0 {
            self.channel.report(KeyEvent::Modifiers(held, false));
        }

        if combined & mod_mask::SHIFT != 0 {
            self.tap_pair(mod_mask::LEFT_SHIFT, keys::LEFT_BRACKET, keys::RIGHT_BRACKET);
        } else if combined & mod_mask::ALT != 0 {
            // AltGr-composed brackets give guillemets on the host layout.
            self.tap_pair(mod_mask::RIGHT_ALT, keys::LEFT_BRACKET, keys::RIGHT_BRACKET);
        } else if combined & mod_mask::CTRL != 0 {
            self.tap_pair(mod_mask::LEFT_SHIFT, keys::COMMA, keys::DOT);
        } else {
            self.tap_pair(0, keys::LEFT_BRACKET, keys::RIGHT_BRACKET);
        }

        self.tap(keys::LEFT);
        if held != 0 {
            self.channel.report(KeyEvent::Modifiers(held, true));
        }
    }

    fn tap_pair(&self, wrap: u8, open: u16, close: u16) {
        if wrap != 0 {
            self.channel.report(KeyEvent::Modifiers(wrap, true));
        }
        self.tap(open);
        self.tap(close);
        if wrap != 0 {
            self.channel.report(KeyEvent::Modifiers(wrap, false));
        }
    }

    fn tap(&self, code: u16) {
        self.channel.report(KeyEvent::basic(code, true));
        self.channel.report(KeyEvent::basic(code, false));
    }
}

#[cfg(test)]
#[path = "intercept_test.rs"]
mod test;
