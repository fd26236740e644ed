//! Per-frame parameter tables shared by the renderer stages.

/// Number of frames each table holds. Every 8-bit frame index is addressable.
pub const FRAME_CAPACITY: usize = 256;

const NUM_CHANNELS: usize = 7;

/// Selects one of the seven parameter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Pitch = 0,
    Frequency1 = 1,
    Frequency2 = 2,
    Frequency3 = 3,
    Amplitude1 = 4,
    Amplitude2 = 5,
    Amplitude3 = 6,
}

impl Channel {
    /// All channels in table order.
    pub const ALL: [Channel; NUM_CHANNELS] = [
        Channel::Pitch,
        Channel::Frequency1,
        Channel::Frequency2,
        Channel::Frequency3,
        Channel::Amplitude1,
        Channel::Amplitude2,
        Channel::Amplitude3,
    ];

    /// The formant channels, i.e. everything except pitch.
    pub const FORMANTS: [Channel; NUM_CHANNELS - 1] = [
        Channel::Frequency1,
        Channel::Frequency2,
        Channel::Frequency3,
        Channel::Amplitude1,
        Channel::Amplitude2,
        Channel::Amplitude3,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Channel {
    type Error = u8;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        Channel::ALL
            .get(selector as usize)
            .copied()
            .ok_or(selector)
    }
}

/// Values of all seven channels at a single frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFrame {
    pub pitch: u8,
    pub frequency: [u8; 3],
    pub amplitude: [u8; 3],
}

impl ParameterFrame {
    pub const fn new(pitch: u8, frequency: [u8; 3], amplitude: [u8; 3]) -> Self {
        Self {
            pitch,
            frequency,
            amplitude,
        }
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Pitch => self.pitch,
            Channel::Frequency1 => self.frequency[0],
            Channel::Frequency2 => self.frequency[1],
            Channel::Frequency3 => self.frequency[2],
            Channel::Amplitude1 => self.amplitude[0],
            Channel::Amplitude2 => self.amplitude[1],
            Channel::Amplitude3 => self.amplitude[2],
        }
    }
}

/// Seven parallel byte tables indexed by frame.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    tables: [[u8; FRAME_CAPACITY]; NUM_CHANNELS],
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    pub const fn new() -> Self {
        Self {
            tables: [[0; FRAME_CAPACITY]; NUM_CHANNELS],
        }
    }

    pub fn clear(&mut self) {
        for table in self.tables.iter_mut() {
            table.fill(0);
        }
    }

    #[inline]
    pub fn read(&self, channel: Channel, frame: u8) -> u8 {
        self.tables[channel.index()][frame as usize]
    }

    #[inline]
    pub fn write(&mut self, channel: Channel, frame: u8, value: u8) {
        self.tables[channel.index()][frame as usize] = value;
    }

    /// Reads through a raw table selector.
    ///
    /// Unknown selectors are reported and read as 0.
    pub fn read_raw(&self, selector: u8, frame: u8) -> u8 {
        match Channel::try_from(selector) {
            Ok(channel) => self.read(channel, frame),
            Err(selector) => {
                log::warn!("Error reading from tables: unknown selector {selector}");
                0
            }
        }
    }

    /// Writes through a raw table selector.
    ///
    /// Unknown selectors are reported and the write is dropped.
    pub fn write_raw(&mut self, selector: u8, frame: u8, value: u8) {
        match Channel::try_from(selector) {
            Ok(channel) => self.write(channel, frame, value),
            Err(selector) => {
                log::warn!("Error writing to tables: unknown selector {selector}");
            }
        }
    }

    /// Complete table of a channel, e.g. for the waveform stage.
    pub fn channel(&self, channel: Channel) -> &[u8] {
        &self.tables[channel.index()]
    }

    pub fn frame(&self, frame: u8) -> ParameterFrame {
        ParameterFrame {
            pitch: self.read(Channel::Pitch, frame),
            frequency: [
                self.read(Channel::Frequency1, frame),
                self.read(Channel::Frequency2, frame),
                self.read(Channel::Frequency3, frame),
            ],
            amplitude: [
                self.read(Channel::Amplitude1, frame),
                self.read(Channel::Amplitude2, frame),
                self.read(Channel::Amplitude3, frame),
            ],
        }
    }

    pub fn set_frame(&mut self, frame: u8, values: ParameterFrame) {
        for channel in Channel::ALL {
            self.write(channel, frame, values.get(channel));
        }
    }

    /// Sets `len` consecutive frames starting at `start` to the same values.
    /// Positions wrap around at the table end.
    pub fn fill_frames(&mut self, start: u8, len: u8, values: ParameterFrame) {
        let mut frame = start;
        for _ in 0..len {
            self.set_frame(frame, values);
            frame = frame.wrapping_add(1);
        }
    }
}
