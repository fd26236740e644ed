//! Pitch blending between phoneme midpoints.

use super::linear_interpolator::interpolate;
use super::parameter_store::{Channel, ParameterStore};

/// Blends the pitch table from the middle of phoneme `pos` to the middle of
/// phoneme `pos + 1`.
///
/// `elapsed` is the frame offset of the boundary between the two phonemes
/// and `phase_start` the first frame of the ramp, shared with the formant
/// channels.
pub fn interpolate_pitch(
    store: &mut ParameterStore,
    durations: &[u8],
    pos: usize,
    elapsed: u8,
    phase_start: u8,
) {
    let cur_half = duration_at(durations, pos) / 2;
    let next_half = duration_at(durations, pos + 1) / 2;
    let width = cur_half.wrapping_add(next_half);

    let end = store.read(Channel::Pitch, elapsed.wrapping_add(next_half));
    let start = store.read(Channel::Pitch, elapsed.wrapping_sub(cur_half));

    interpolate(
        store,
        Channel::Pitch,
        width,
        phase_start,
        end.wrapping_sub(start),
    );
}

#[inline]
pub(crate) fn duration_at(durations: &[u8], pos: usize) -> u8 {
    durations.get(pos).copied().unwrap_or(0)
}
