//! Per-LED color rules, evaluated every refresh tick.

use pumpkin_common::{
    color::{hsv_to_rgb, Hsv, Rgb},
    keycodes::{key_range, keys, mod_mask},
};

use crate::{dual_action, layout, snapshot::Snapshot};

/// Receives the colors computed for one refresh tick.
pub trait LedSink {
    fn set_color(&mut self, index: u8, color: Rgb);
}

/// Color every LED whose index falls inside `[led_min, led_max)` from the
/// code its position binds on the topmost active layer. LEDs whose code
/// matches no rule are skipped, not painted black. Always answers false:
/// no lower-priority provider runs after this one.
pub fn paint(led_min: u8, led_max: u8, snapshot: &Snapshot, sink: &mut impl LedSink) -> bool {
    let layer = snapshot.highest_layer();
    for row in 0..layout::ROW_COUNT {
        for column in 0..layout::COL_COUNT {
            let Some(index) = layout::led_index(row, column) else {
                continue;
            };
            if index < led_min || index >= led_max {
                continue;
            }
            let code = layout::keycode_at(layer, row, column);
            if let Some(hsv) = color_for(code, snapshot) {
                sink.set_color(index, hsv_to_rgb(hsv));
            }
        }
    }
    false
}

/// Classify one code, first match wins. `None` leaves the LED unlit.
pub fn color_for(code: u16, snapshot: &Snapshot) -> Option<Hsv> {
    let mut hsv = Hsv {
        h: 0,
        s: 255,
        v: snapshot.max_brightness,
    };
    match code {
        key_range::FW_RESET_TO_USB_BOOT | key_range::FW_CLEAR_SETTINGS => hsv.h = 3,
        dual_action::CTRL_INSERT => hsv.h = 3,
        keys::RIGHT..=keys::UP => hsv.h = snapshot.ambient.h,
        keys::F1..=keys::F12 => hsv.h = snapshot.ambient.h,
        keys::KP_1..=keys::KP_0 => hsv.h = snapshot.ambient.h,
        keys::KP_MINUS => hsv.h = 172,
        keys::KP_PLUS => hsv.h = 255,
        keys::KP_EQUAL => hsv.h = 85,
        dual_action::SHIFT_LEFT | dual_action::SHIFT_RIGHT => {
            if !snapshot.caps_lock {
                return None;
            }
            hsv.h = snapshot.ambient.h;
        }
        #[cfg(feature = "mousekeys")]
        key_range::MOUSE_MIN..=key_range::MOUSE_MAX => hsv.h = 40,
        key_range::RGB_TOGGLE..=key_range::RGB_SPEED_DOWN => {
            // Six-step hue wheel over the rgb-control cluster, alternating
            // half brightness flipped by a held left shift. Keep the bit
            // arithmetic as is.
            let offset = code - key_range::RGB_MIN;
            hsv.h = snapshot
                .ambient
                .h
                .wrapping_add((((offset + 3) >> 1) % 6 * 85 >> 1) as u8);
            hsv.v = snapshot.max_brightness;
            let shift_held = (snapshot.mods & mod_mask::LEFT_SHIFT != 0) as u16;
            let inc = ((offset + shift_held) & 1) as u8;
            hsv.v >>= 1 - inc;
        }
        _ => return None,
    }
    Some(hsv)
}

#[cfg(test)]
#[path = "indicator_test.rs"]
mod test;
