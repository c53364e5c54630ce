// Decode a synthetic logic capture from the command line
//
// Builds a small capture CSV in memory, then counts edges on one of its
// bitmap bits with the policy and divider given on the command line.

use clap::Parser;
use edgecount_rs::{AnnotationRow, CaptureReading, EdgeCounter, RawOptions};

#[derive(Parser)]
#[command(name = "capture_decode")]
#[command(version = "1.0")]
#[command(about = "Count edges in a synthetic logic capture")]
#[command(
    long_about = "Generates a logic capture with a square wave on bit 0 and a reset pulse on bit 3, then runs the edge counter over it. Useful for trying out edge policies and dividers without a real capture."
)]
struct Args {
    /// Edge policy to count
    #[arg(short, long, default_value = "any", value_parser = ["any", "rising", "falling"], help = "Which data-line transitions to count")]
    edge: String,

    /// Divided count threshold
    #[arg(short, long, default_value_t = 0, help = "Emit a divided count every N edges (0 disables)")]
    divider: i64,

    /// Watch bitmap bit 3 as a reset line
    #[arg(short, long, help = "Wire the capture's bit 3 up as the reset line")]
    with_reset: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Show debug information and detailed logs")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    println!("EdgeCount Capture Decoder");
    println!("=========================");
    println!("Edge policy: {}", args.edge);
    println!("Divider: {}", args.divider);
    println!(
        "Reset line: {}\n",
        if args.with_reset { "bit 3" } else { "none" }
    );

    // Square wave on bit 0, reset line on bit 3 falling at sample 24.
    let mut csv = String::new();
    for i in 0..32u32 {
        let data = u32::from(i / 2 % 2 == 1);
        let reset = u32::from(i < 24);
        let bitmap = data | (reset << 3);
        csv.push_str(&format!("{},0x{:02x}\n", 2048 + (i % 7), bitmap));
    }

    let capture = CaptureReading::new(1_000_000.0, csv.into_bytes());
    let reset_bit = if args.with_reset { Some(3) } else { None };
    let mut source = capture.to_samples(0, reset_bit)?;

    let options = RawOptions {
        edge: args.edge,
        divider: args.divider,
    };
    let mut counter = EdgeCounter::new();
    counter.start(&options, &source)?;

    let mut events = Vec::new();
    counter.run(&mut source, &mut events);

    for event in &events {
        let row = match event.row {
            AnnotationRow::Edge => "edge",
            AnnotationRow::Divided => "divided",
        };
        println!(
            "  sample {:>3}  {:<8} {}",
            event.start_sample, row, event.label
        );
    }

    println!(
        "\n{} edges, {} divided counts",
        counter.edge_count(),
        counter.word_count()
    );
    Ok(())
}
