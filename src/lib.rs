//! # EdgeCount RS
//!
//! A Rust library for counting signal edges in captured digital logic data.
//!
//! This library provides a small edge-counting state machine for logic
//! captures: it counts transitions of a data line under a configurable edge
//! policy, optionally zeroes its counters when an auxiliary reset line
//! falls, and can emit a divided count every N edges. Sample acquisition
//! and output rendering stay outside; the crate ships a capture-CSV
//! front-end and an in-memory sample source to connect the two ends.
//!
//! ## Features
//!
//! - **Edge policies**: count rising, falling or all transitions
//! - **Divided counting**: a secondary "word" count every N edges
//! - **Reset line**: an optional second line whose falling edge zeroes both
//!   counters, with a marker annotation
//! - **Step-function core**: samples are fed one at a time, no blocking
//! - **Capture parsing**: uses `polars` to read raw logic-capture CSV data
//!   into per-line sample streams
//! - **Host metadata**: a static decoder descriptor for frontend catalogs
//!
//! ## Examples
//!
//! ### Counting edges in a sample stream
//!
//! ```rust
//! use edgecount_rs::{EdgeCounter, MemorySamples, RawOptions};
//!
//! let mut source = MemorySamples::from_data([false, true, false, true]);
//!
//! let mut counter = EdgeCounter::new();
//! counter.start(&RawOptions::default(), &source)?;
//!
//! let mut events = Vec::new();
//! counter.run(&mut source, &mut events);
//!
//! // Three transitions under the default "any" policy
//! assert_eq!(counter.edge_count(), 3);
//! assert_eq!(events.last().unwrap().label, "3");
//! # Ok::<(), edgecount_rs::ConfigError>(())
//! ```
//!
//! ### Divided counting and a reset line
//!
//! ```rust
//! use edgecount_rs::{AnnotationRow, EdgeCounter, MemorySamples, RawOptions};
//!
//! // (data, reset) pairs; the reset line falls on the last sample.
//! let levels = [(false, true), (true, true), (false, true), (true, false)];
//! let mut source = MemorySamples::from_data_and_reset(levels);
//!
//! let mut counter = EdgeCounter::new();
//! let options = RawOptions {
//!     edge: "rising".to_string(),
//!     divider: 2,
//! };
//! counter.start(&options, &source)?;
//!
//! let mut events = Vec::new();
//! counter.run(&mut source, &mut events);
//!
//! // The falling reset discards the simultaneous rising edge.
//! assert_eq!(events.last().unwrap().label, "R");
//! assert_eq!(events.last().unwrap().row, AnnotationRow::Divided);
//! assert_eq!(counter.edge_count(), 0);
//! # Ok::<(), edgecount_rs::ConfigError>(())
//! ```
//!
//! ### Decoding a raw capture
//!
//! ```rust
//! use edgecount_rs::{CaptureReading, EdgeCounter, RawOptions};
//!
//! // Headerless CSV rows: raw analog value, hex bitmap of the logic lines.
//! let csv = b"2048,0x00\n2051,0x01\n2047,0x00\n".to_vec();
//! let capture = CaptureReading::new(1_000_000.0, csv);
//!
//! // Count edges on bitmap bit 0, no reset line.
//! let mut source = capture.to_samples(0, None)?;
//! let mut counter = EdgeCounter::new();
//! counter.start(&RawOptions::default(), &source)?;
//!
//! let mut events = Vec::new();
//! counter.run(&mut source, &mut events);
//! assert_eq!(counter.edge_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capture_reading;
pub mod counter_config;
pub mod descriptor;
pub mod edge_counter;
pub mod sample_stream;

// Re-export the main types for convenience
pub use counter_config::{ConfigError, CounterOptions, EdgePolicy, RawOptions};

pub use edge_counter::{AnnotationRow, AnnotationSink, CountEvent, EdgeCounter, RESET_LABEL};

pub use sample_stream::{MemorySamples, Sample, SampleSource};

pub use capture_reading::{CaptureError, CaptureReading, BITMAP_LINES};

pub use descriptor::{DecoderDescriptor, COUNTER_DECODER};
