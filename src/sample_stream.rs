/// One observation of the monitored lines.
///
/// `reset` is `None` for captures without a reset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Monotonically non-decreasing time index of this observation.
    pub sample_num: u64,
    /// Level of the data line.
    pub data: bool,
    /// Level of the reset line, if one is connected.
    pub reset: Option<bool>,
}

/// A pull-based source of logic samples.
///
/// Capabilities are fixed for the lifetime of the source: whether a reset
/// line is connected and what the acquisition sample rate was (if known).
pub trait SampleSource {
    /// Whether the optional reset line is connected in this capture.
    fn has_reset_channel(&self) -> bool;

    /// Acquisition sample rate in Hz, if the source knows it.
    fn samplerate(&self) -> Option<u64> {
        None
    }

    /// The next sample, or `None` once the capture is exhausted.
    fn next_sample(&mut self) -> Option<Sample>;
}

/// Sample source over pre-extracted level vectors.
///
/// Sample numbers are assigned consecutively from 0.
#[derive(Debug, Clone)]
pub struct MemorySamples {
    levels: Vec<(bool, Option<bool>)>,
    samplerate: Option<u64>,
    cursor: usize,
}

impl MemorySamples {
    /// Source with only a data line.
    pub fn from_data(data: impl IntoIterator<Item = bool>) -> Self {
        Self {
            levels: data.into_iter().map(|level| (level, None)).collect(),
            samplerate: None,
            cursor: 0,
        }
    }

    /// Source with a data line and a reset line.
    pub fn from_data_and_reset(levels: impl IntoIterator<Item = (bool, bool)>) -> Self {
        Self {
            levels: levels
                .into_iter()
                .map(|(data, reset)| (data, Some(reset)))
                .collect(),
            samplerate: None,
            cursor: 0,
        }
    }

    pub fn with_samplerate(mut self, hz: u64) -> Self {
        self.samplerate = Some(hz);
        self
    }

    /// Number of samples in the capture, consumed or not.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl SampleSource for MemorySamples {
    fn has_reset_channel(&self) -> bool {
        self.levels.first().is_some_and(|(_, reset)| reset.is_some())
    }

    fn samplerate(&self) -> Option<u64> {
        self.samplerate
    }

    fn next_sample(&mut self) -> Option<Sample> {
        let (data, reset) = *self.levels.get(self.cursor)?;
        let sample = Sample {
            sample_num: self.cursor as u64,
            data,
            reset,
        };
        self.cursor += 1;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_only_source() {
        let mut source = MemorySamples::from_data([false, true, true]);
        assert!(!source.has_reset_channel());
        assert_eq!(source.samplerate(), None);
        assert_eq!(source.len(), 3);

        let first = source.next_sample().unwrap();
        assert_eq!(first.sample_num, 0);
        assert!(!first.data);
        assert_eq!(first.reset, None);

        assert!(source.next_sample().unwrap().data);
        assert!(source.next_sample().unwrap().data);
        assert!(source.next_sample().is_none());
    }

    #[test]
    fn test_reset_channel_detection() {
        let source = MemorySamples::from_data_and_reset([(false, true), (true, true)]);
        assert!(source.has_reset_channel());
    }

    #[test]
    fn test_samplerate_metadata() {
        let source = MemorySamples::from_data([true]).with_samplerate(1_000_000);
        assert_eq!(source.samplerate(), Some(1_000_000));
    }

    #[test]
    fn test_empty_source() {
        let mut source = MemorySamples::from_data([]);
        assert!(source.is_empty());
        assert!(!source.has_reset_channel());
        assert!(source.next_sample().is_none());
    }
}
