//! Tests for the linear and pitch interpolators.

use sam_transitions::render::linear_interpolator::interpolate;
use sam_transitions::render::pitch_interpolator::interpolate_pitch;
use sam_transitions::render::{Channel, ParameterStore};

fn ramp(base: u8, width: u8, delta: i8) -> Vec<u8> {
    let mut store = ParameterStore::new();
    store.write(Channel::Frequency1, 20, base);
    interpolate(&mut store, Channel::Frequency1, width, 20, delta as u8);
    store.channel(Channel::Frequency1)[21..20 + width as usize].to_vec()
}

#[test]
fn even_ramp() {
    assert_eq!(ramp(30, 5, 10), [32, 34, 36, 38]);
    assert_eq!(ramp(50, 5, -10), [48, 46, 44, 42]);
}

#[test]
fn remainder_is_spread() {
    assert_eq!(ramp(10, 5, 7), [11, 12, 14, 15]);
}

#[test]
fn writes_only_inside_window() {
    let mut store = ParameterStore::new();
    store.fill_frames(0, 40, Default::default());
    for frame in 0..40 {
        store.write(Channel::Amplitude1, frame, 9);
    }

    interpolate(&mut store, Channel::Amplitude1, 5, 20, 10);

    let table = store.channel(Channel::Amplitude1);
    assert_eq!(table[20], 9);
    assert_eq!(&table[21..25], &[11, 13, 15, 17]);
    assert_eq!(table[25], 9);
    assert!(store.channel(Channel::Amplitude2)[..40].iter().all(|&v| v == 0));
}

#[test]
fn positive_correction_is_suppressed_at_zero() {
    // From 0 the upward corrections never fire and the ramp stays flat.
    assert_eq!(ramp(0, 5, 3), [0, 0, 0, 0]);
    // The same ramp starting from 1 does climb.
    assert_eq!(ramp(1, 5, 3), [1, 2, 2, 3]);
}

#[test]
fn negative_correction_wraps_through_zero() {
    assert_eq!(ramp(1, 5, -3), [1, 0, 0, 255]);
}

#[test]
fn most_negative_delta() {
    // |-128| wraps to 128, remainder 3, quotient -25.
    assert_eq!(ramp(200, 5, -128), [175, 149, 124, 98]);
}

#[test]
fn degenerate_widths() {
    let mut store = ParameterStore::new();
    store.write(Channel::Frequency3, 0, 100);

    interpolate(&mut store, Channel::Frequency3, 0, 0, 50);
    interpolate(&mut store, Channel::Frequency3, 1, 0, 50);

    assert_eq!(store.read(Channel::Frequency3, 0), 100);
    assert_eq!(store.read(Channel::Frequency3, 1), 0);
}

#[test]
fn ramp_wraps_frame_index() {
    let mut store = ParameterStore::new();
    store.write(Channel::Frequency2, 254, 40);

    interpolate(&mut store, Channel::Frequency2, 4, 254, 8);

    assert_eq!(store.read(Channel::Frequency2, 255), 42);
    assert_eq!(store.read(Channel::Frequency2, 0), 44);
    assert_eq!(store.read(Channel::Frequency2, 1), 46);
}

#[test]
fn pitch_spans_phoneme_midpoints() {
    let mut store = ParameterStore::new();
    for frame in 0..10 {
        store.write(Channel::Pitch, frame, 100);
    }
    for frame in 10..18 {
        store.write(Channel::Pitch, frame, 80);
    }

    // Boundary at frame 10, formant window starting at frame 8.
    interpolate_pitch(&mut store, &[10, 8], 0, 10, 8);

    // Width is 10 / 2 + 8 / 2 = 9, so 8 frames are written after frame 8.
    let table = store.channel(Channel::Pitch);
    assert_eq!(table[8], 100);
    assert_eq!(&table[9..17], &[98, 96, 94, 92, 89, 87, 85, 83]);
    assert_eq!(table[17], 80);
}

#[test]
fn pitch_with_single_frame_phonemes() {
    let mut store = ParameterStore::new();
    store.write(Channel::Pitch, 0, 70);
    store.write(Channel::Pitch, 1, 90);

    // Both halves are 0: nothing to blend.
    interpolate_pitch(&mut store, &[1, 1], 0, 1, 0);

    assert_eq!(store.read(Channel::Pitch, 0), 70);
    assert_eq!(store.read(Channel::Pitch, 1), 90);
}
