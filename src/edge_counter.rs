use crate::counter_config::{ConfigError, CounterOptions, RawOptions};
use crate::sample_stream::{Sample, SampleSource};

/// Label of the annotation emitted when the reset line fires.
pub const RESET_LABEL: &str = "R";

/// Logical output row of a count annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationRow {
    /// Per-edge counts.
    Edge,
    /// Divided counts and reset markers.
    Divided,
}

impl AnnotationRow {
    /// Row index as published in the decoder descriptor.
    pub fn index(&self) -> u32 {
        match self {
            AnnotationRow::Edge => 0,
            AnnotationRow::Divided => 1,
        }
    }
}

/// One emitted count annotation.
///
/// Counts are instantaneous, so `start_sample` and `end_sample` are always
/// the time index of the triggering sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEvent {
    pub start_sample: u64,
    pub end_sample: u64,
    pub row: AnnotationRow,
    pub label: String,
}

/// Consumer of count annotations.
pub trait AnnotationSink {
    fn put(&mut self, event: CountEvent);
}

impl AnnotationSink for Vec<CountEvent> {
    fn put(&mut self, event: CountEvent) {
        self.push(event);
    }
}

/// Edge-counting state machine.
///
/// Counts qualifying transitions of the data line, optionally zeroing on a
/// falling reset line and emitting a divided count every `divider` edges.
/// Samples are fed one at a time through [`Self::process_sample`]; the
/// previously observed line levels are kept internally, so the first sample
/// of a run only establishes the baseline.
#[derive(Debug, Default)]
pub struct EdgeCounter {
    options: CounterOptions,
    samplerate: Option<u64>,
    have_reset: bool,
    edge_count: u64,
    word_count: u64,
    last_data: Option<bool>,
    last_reset: Option<bool>,
}

impl EdgeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both counters and fully re-arm the state.
    ///
    /// Callable at any time, including before the first sample. Clears the
    /// reset-channel flag and the remembered line levels; the next sample
    /// observed re-establishes the baseline. Never emits an annotation.
    /// Only a reset-line transition inside the processing loop does that.
    pub fn reset(&mut self) {
        self.edge_count = 0;
        self.word_count = 0;
        self.have_reset = false;
        self.last_data = None;
        self.last_reset = None;
    }

    /// Validate the options and bind the counter to a capture.
    ///
    /// Reads the source's sample-rate metadata and queries once whether a
    /// reset line is connected; both are fixed for the run. An unrecognized
    /// edge policy fails here, before any sample is processed, and leaves
    /// the counter unchanged.
    pub fn start<S: SampleSource>(
        &mut self,
        options: &RawOptions,
        source: &S,
    ) -> Result<(), ConfigError> {
        let options = CounterOptions::from_raw(options)?;
        self.options = options;
        self.samplerate = source.samplerate();
        self.have_reset = source.has_reset_channel();
        log::debug!(
            "Counting {} edges, divider {}, reset line {}",
            self.options.edge.as_str(),
            self.options.divider,
            if self.have_reset { "present" } else { "absent" }
        );
        Ok(())
    }

    /// Feed one sample through the state machine.
    ///
    /// Returns the annotations triggered by this sample, in emission order.
    /// A falling reset line takes precedence over a simultaneous data edge:
    /// the edge is discarded, not counted before zeroing.
    pub fn process_sample(&mut self, sample: &Sample) -> Vec<CountEvent> {
        let mut events = Vec::new();

        let previous_data = self.last_data.replace(sample.data);
        let previous_reset = self.last_reset;
        if sample.reset.is_some() {
            self.last_reset = sample.reset;
        }

        let Some(previous_data) = previous_data else {
            return events;
        };

        if self.have_reset && previous_reset == Some(true) && sample.reset == Some(false) {
            self.edge_count = 0;
            self.word_count = 0;
            log::trace!("Reset line fell at sample {}", sample.sample_num);
            events.push(Self::count_event(
                AnnotationRow::Divided,
                sample.sample_num,
                RESET_LABEL.to_string(),
            ));
            return events;
        }

        if self.options.edge.matches(previous_data, sample.data) {
            self.edge_count += 1;
            events.push(Self::count_event(
                AnnotationRow::Edge,
                sample.sample_num,
                self.edge_count.to_string(),
            ));

            if self.options.divider > 0 && self.edge_count % self.options.divider == 0 {
                self.word_count += 1;
                events.push(Self::count_event(
                    AnnotationRow::Divided,
                    sample.sample_num,
                    self.word_count.to_string(),
                ));
            }
        }

        events
    }

    /// Drain a sample source, forwarding every annotation to the sink.
    ///
    /// Ends when the source is exhausted; counters are left as they stand,
    /// with nothing flushed or finalized.
    pub fn run<S, A>(&mut self, source: &mut S, sink: &mut A)
    where
        S: SampleSource,
        A: AnnotationSink,
    {
        while let Some(sample) = source.next_sample() {
            for event in self.process_sample(&sample) {
                sink.put(event);
            }
        }
    }

    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Sample rate captured from the source at start, if it had one.
    pub fn samplerate(&self) -> Option<u64> {
        self.samplerate
    }

    fn count_event(row: AnnotationRow, sample_num: u64, label: String) -> CountEvent {
        CountEvent {
            start_sample: sample_num,
            end_sample: sample_num,
            row,
            label,
        }
    }
}
