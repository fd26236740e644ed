//! Fixed-point linear ramps over a parameter table.

use super::parameter_store::{Channel, ParameterStore};

/// Writes a ramp of `width - 1` frames following `frame`.
///
/// `delta` is a two's complement byte spread over `width` steps. The integer
/// part is added every frame and the remainder is accumulated Bresenham
/// style. A positive correction is never applied while the value is 0, a
/// negative one always is, so the end points are only approached.
pub fn interpolate(store: &mut ParameterStore, channel: Channel, width: u8, frame: u8, delta: u8) {
    if width == 0 {
        return;
    }

    let signed_delta = delta as i8;
    let negative = signed_delta < 0;
    let remainder = (signed_delta.wrapping_abs() as u8) % width;
    let div = (i32::from(signed_delta) / i32::from(width)) as u8;

    let mut error: u8 = 0;
    let mut frame = frame;
    let mut value = store.read(channel, frame).wrapping_add(div);

    for _ in 1..width {
        error = error.wrapping_add(remainder);
        if error >= width {
            error -= width;
            if negative {
                value = value.wrapping_sub(1);
            } else if value != 0 {
                value = value.wrapping_add(1);
            }
        }
        frame = frame.wrapping_add(1);
        store.write(channel, frame, value);
        value = value.wrapping_add(div);
    }
}
