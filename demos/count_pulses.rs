// Edge counting walk-through on in-memory sample streams
//
// This example demonstrates the edge policies, divided counting and the
// reset line on synthetic pulse trains.

use edgecount_rs::{AnnotationRow, CountEvent, EdgeCounter, MemorySamples, RawOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("EdgeCount Pulse Counting Example");
    println!("================================\n");

    // A square wave: eight transitions over nine samples.
    let square: Vec<bool> = (0..9).map(|i| i % 2 == 1).collect();

    // Example 1: count every transition
    println!("1. All edges of a square wave");
    let events = count(
        &RawOptions::default(),
        MemorySamples::from_data(square.clone()),
    )?;
    print_events(&events);

    // Example 2: rising edges only
    println!("\n2. Rising edges only");
    let options = RawOptions {
        edge: "rising".to_string(),
        divider: 0,
    };
    let events = count(&options, MemorySamples::from_data(square.clone()))?;
    print_events(&events);

    // Example 3: divided counting
    println!("\n3. Divided counting (every 3rd edge)");
    let options = RawOptions {
        edge: "any".to_string(),
        divider: 3,
    };
    let events = count(&options, MemorySamples::from_data(square))?;
    print_events(&events);

    // Example 4: a reset line zeroes the counters mid-run
    println!("\n4. Reset line falling mid-run");
    let levels = vec![
        (false, true),
        (true, true),
        (false, true),
        (true, true),
        (true, false), // reset falls here
        (false, false),
        (true, false),
    ];
    let events = count(
        &RawOptions::default(),
        MemorySamples::from_data_and_reset(levels),
    )?;
    print_events(&events);

    println!("\nPulse counting examples completed!");
    Ok(())
}

fn count(
    options: &RawOptions,
    mut source: MemorySamples,
) -> Result<Vec<CountEvent>, Box<dyn std::error::Error>> {
    let mut counter = EdgeCounter::new();
    counter.start(options, &source)?;

    let mut events = Vec::new();
    counter.run(&mut source, &mut events);
    Ok(events)
}

// Helper function to print emitted annotations, one per line
fn print_events(events: &[CountEvent]) {
    for event in events {
        let row = match event.row {
            AnnotationRow::Edge => "edge",
            AnnotationRow::Divided => "divided",
        };
        println!(
            "   sample {:>3}  {:<8} {}",
            event.start_sample, row, event.label
        );
    }
}
