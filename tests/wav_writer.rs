//! Writer for WAV files

use std::path::Path;

use hound::*;

use sam_transitions::render::{Channel, ParameterStore};

/// Nominal frame rate of the parameter tables.
pub const FRAME_RATE: u32 = 100;

/// Writes the first `frames` frames of all channels as a 7-channel WAV file in
/// 32-bit float format, one channel per parameter table.
#[allow(dead_code)]
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    store: &ParameterStore,
    frames: usize,
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let spec = WavSpec {
        channels: Channel::ALL.len() as u16,
        sample_rate: FRAME_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).map_err(to_io_error)?;

    for frame in 0..frames {
        for channel in Channel::ALL {
            let value = store.channel(channel)[frame] as f32 / 255.0;
            writer.write_sample(value).map_err(to_io_error)?;
        }
    }

    writer.finalize().map_err(to_io_error)
}

fn to_io_error(error: hound::Error) -> std::io::Error {
    match error {
        hound::Error::IoError(e) => e,
        e => std::io::Error::new(std::io::ErrorKind::Other, e),
    }
}
