use crate::sample_stream::MemorySamples;
use polars::prelude::*;

/// Number of logic lines carried in the capture bitmap column.
pub const BITMAP_LINES: usize = 10;

const RAW_COLUMN_NAME: &str = "raw";
const BITMAP_COLUMN_NAME: &str = "bitmap";
const TIME_COLUMN_NAME: &str = "time";

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Bitmap bit {bit} out of range, capture carries bits 0..{BITMAP_LINES}")]
    BitOutOfRange { bit: usize },

    #[error("Capture data error: {0}")]
    Data(#[from] PolarsError),
}

/// A raw logic capture as read back from an acquisition device.
///
/// `data` holds headerless CSV rows: column 1 is the raw analog value,
/// column 2 a hex bitmap of the digital lines.
pub struct CaptureReading {
    pub samplerate: f64,
    pub data: Vec<u8>,
}

impl CaptureReading {
    pub fn new(samplerate: f64, data: Vec<u8>) -> Self {
        Self { samplerate, data }
    }

    pub fn parse_frame(&self) -> Result<LazyFrame, PolarsError> {
        let df = CsvReadOptions::default()
            .with_has_header(false)
            .into_reader_with_file_handle(std::io::Cursor::new(&self.data))
            .finish()?
            .lazy()
            .select([
                col("column_1").alias(RAW_COLUMN_NAME).cast(DataType::Float64),
                col("column_2").alias(BITMAP_COLUMN_NAME),
            ])
            .with_row_index("row_index", Some(0))
            .with_columns([
                // Derive the time column from the row index and sample rate
                (col("row_index").cast(DataType::Float64) * lit(1.0 / self.samplerate))
                    .alias(TIME_COLUMN_NAME),
            ])
            .select([col(TIME_COLUMN_NAME), col(RAW_COLUMN_NAME), col(BITMAP_COLUMN_NAME)]);

        Ok(df)
    }

    /// Decode the hex bitmap column into per-sample line masks.
    ///
    /// Unparseable or null bitmap rows read as all lines low.
    fn bitmap_values(&self) -> Result<Vec<u32>, CaptureError> {
        let df = self
            .parse_frame()?
            .select([col(BITMAP_COLUMN_NAME)])
            .collect()?;
        let bitmaps = df.column(BITMAP_COLUMN_NAME)?.str()?;

        Ok(bitmaps
            .into_iter()
            .map(|bitmap| {
                bitmap
                    .and_then(|s| u32::from_str_radix(s.trim_start_matches("0x"), 16).ok())
                    .unwrap_or(0)
            })
            .collect())
    }

    /// Level vector of one digital line in the capture.
    pub fn extract_line(&self, bit: usize) -> Result<Vec<bool>, CaptureError> {
        if bit >= BITMAP_LINES {
            return Err(CaptureError::BitOutOfRange { bit });
        }

        Ok(self
            .bitmap_values()?
            .into_iter()
            .map(|mask| (mask >> bit) & 1 == 1)
            .collect())
    }

    /// Build a sample source for the edge counter from bitmap bits.
    ///
    /// `data_bit` selects the data line; `reset_bit`, if given, selects the
    /// reset line. The returned source carries the capture's sample rate.
    pub fn to_samples(
        &self,
        data_bit: usize,
        reset_bit: Option<usize>,
    ) -> Result<MemorySamples, CaptureError> {
        if data_bit >= BITMAP_LINES {
            return Err(CaptureError::BitOutOfRange { bit: data_bit });
        }
        if let Some(bit) = reset_bit {
            if bit >= BITMAP_LINES {
                return Err(CaptureError::BitOutOfRange { bit });
            }
        }

        let masks = self.bitmap_values()?;
        log::debug!(
            "Capture of {} samples at {} Hz, data bit {}, reset bit {:?}",
            masks.len(),
            self.samplerate,
            data_bit,
            reset_bit
        );

        let samples = match reset_bit {
            Some(reset_bit) => MemorySamples::from_data_and_reset(masks.into_iter().map(|mask| {
                (
                    (mask >> data_bit) & 1 == 1,
                    (mask >> reset_bit) & 1 == 1,
                )
            })),
            None => MemorySamples::from_data(
                masks.into_iter().map(|mask| (mask >> data_bit) & 1 == 1),
            ),
        };

        Ok(samples.with_samplerate(self.samplerate.round() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_stream::SampleSource;

    fn reading(rows: &str) -> CaptureReading {
        CaptureReading::new(1_000_000.0, rows.as_bytes().to_vec())
    }

    #[test]
    fn test_parse_frame_dimensions() {
        let capture = reading("2048,0x01\n2050,0x03\n2047,0x00\n");
        let df = capture.parse_frame().unwrap().collect().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_extract_line_levels() {
        let capture = reading("2048,0x01\n2050,0x03\n2047,0x00\n2049,0x02\n");
        assert_eq!(
            capture.extract_line(0).unwrap(),
            vec![true, true, false, false]
        );
        assert_eq!(
            capture.extract_line(1).unwrap(),
            vec![false, true, false, true]
        );
    }

    #[test]
    fn test_unparseable_bitmap_reads_low() {
        let capture = reading("2048,0x01\n2048,junk\n2048,0x01\n");
        assert_eq!(capture.extract_line(0).unwrap(), vec![true, false, true]);
    }

    #[test]
    fn test_bit_out_of_range() {
        let capture = reading("2048,0x01\n");
        assert!(matches!(
            capture.extract_line(BITMAP_LINES),
            Err(CaptureError::BitOutOfRange { bit }) if bit == BITMAP_LINES
        ));
        assert!(capture.to_samples(0, Some(BITMAP_LINES)).is_err());
    }

    #[test]
    fn test_to_samples_data_only() {
        let capture = reading("2048,0x00\n2048,0x01\n2048,0x00\n");
        let mut samples = capture.to_samples(0, None).unwrap();
        assert!(!samples.has_reset_channel());
        assert_eq!(samples.samplerate(), Some(1_000_000));

        let levels: Vec<bool> = std::iter::from_fn(|| samples.next_sample())
            .map(|s| s.data)
            .collect();
        assert_eq!(levels, vec![false, true, false]);
    }

    #[test]
    fn test_to_samples_with_reset_line() {
        // Bit 0 is data, bit 3 is reset.
        let capture = reading("2048,0x09\n2048,0x08\n2048,0x01\n");
        let mut samples = capture.to_samples(0, Some(3)).unwrap();
        assert!(samples.has_reset_channel());

        let pairs: Vec<(bool, Option<bool>)> = std::iter::from_fn(|| samples.next_sample())
            .map(|s| (s.data, s.reset))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (true, Some(true)),
                (false, Some(true)),
                (true, Some(false)),
            ]
        );
    }
}
