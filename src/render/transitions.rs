//! Transition scheduling across an utterance.
//!
//! Every boundary between two phonemes gets a window of frames in which the
//! formant channels are ramped from the value just before the window to the
//! value just after it. Pitch uses its own window spanning the two phoneme
//! midpoints. Only the frames inside the windows are touched, the
//! steady-state values elsewhere are left as they are.

use super::blend_table::{BlendPhases, BlendRankTable};
use super::linear_interpolator::interpolate;
use super::parameter_store::{Channel, ParameterStore};
use super::pitch_interpolator::{duration_at, interpolate_pitch};
use super::PHONEME_END;

/// Frame window around a single phoneme boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransitionWindow {
    /// Frame preceding the first interpolated frame.
    pub phase_start: u8,
    /// Frame holding the target value of the ramp.
    pub speed_counter: u8,
    pub width: u8,
}

impl TransitionWindow {
    /// Places the window around the boundary at frame `elapsed`.
    pub fn new(elapsed: u8, phases: BlendPhases) -> Self {
        Self {
            phase_start: elapsed.wrapping_sub(phases.phase1),
            speed_counter: elapsed.wrapping_add(phases.phase2),
            width: phases.width(),
        }
    }

    /// Widths of 0 and 1, and widths that wrap past 129, are not blended.
    #[inline]
    pub fn is_blendable(&self) -> bool {
        (self.width.wrapping_sub(2) & 128) == 0
    }
}

#[derive(Debug, Clone)]
pub struct TransitionScheduler<T> {
    table: T,
}

impl<T: BlendRankTable> TransitionScheduler<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Blends all phoneme boundaries of an utterance in place.
    ///
    /// `phonemes` is terminated by [`PHONEME_END`] and `durations` holds the
    /// frame count of each phoneme. Returns the total number of frames,
    /// wrapped to a byte.
    pub fn create_transitions(
        &self,
        phonemes: &[u8],
        durations: &[u8],
        store: &mut ParameterStore,
    ) -> u8 {
        let mut elapsed: u8 = 0;
        let mut pos = 0;

        loop {
            let phoneme = phoneme_at(phonemes, pos);
            let next = phoneme_at(phonemes, pos + 1);
            if next == PHONEME_END {
                break;
            }

            let phases = BlendPhases::select(&self.table, phoneme, next);
            elapsed = elapsed.wrapping_add(duration_at(durations, pos));
            let window = TransitionWindow::new(elapsed, phases);

            if window.is_blendable() {
                log::trace!(
                    "Blending phonemes {phoneme} -> {next} at frame {elapsed}: {window:?}"
                );
                self.blend(store, durations, pos, elapsed, &window);
            }
            pos += 1;
        }

        elapsed.wrapping_add(duration_at(durations, pos))
    }

    fn blend(
        &self,
        store: &mut ParameterStore,
        durations: &[u8],
        pos: usize,
        elapsed: u8,
        window: &TransitionWindow,
    ) {
        interpolate_pitch(store, durations, pos, elapsed, window.phase_start);

        for channel in Channel::FORMANTS {
            let delta = store
                .read(channel, window.speed_counter)
                .wrapping_sub(store.read(channel, window.phase_start));
            interpolate(store, channel, window.width, window.phase_start, delta);
        }
    }
}

#[inline]
fn phoneme_at(phonemes: &[u8], pos: usize) -> u8 {
    phonemes.get(pos).copied().unwrap_or(PHONEME_END)
}
