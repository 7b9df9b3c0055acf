//! Demonstration of stream operators (map, filter)

use partyline::{Sink, Source, TransformError};

fn main() {
    println!("=== Stream Operators Example ===\n");

    // Map: transform each value on a derived source
    println!("1. Mapping temperatures");
    let celsius: Source<i32, TransformError> = Source::new();
    let fahrenheit = celsius.map(|c| c * 9 / 5 + 32);

    fahrenheit
        .subscribe(Sink::values(|f| println!("   {f}°F")))
        .detach();

    for degrees in [0, 25, 100] {
        celsius.send(degrees);
    }

    // Filter: forward only matching values
    println!("\n2. Filtering even numbers");
    let numbers: Source<i32, TransformError> = Source::new();
    let evens = numbers.filter(|n| n % 2 == 0);

    evens
        .subscribe(Sink::values(|n| println!("   even: {n}")))
        .detach();

    for n in 1..=6 {
        numbers.send(n);
    }

    // Chaining: operators compose
    println!("\n3. Chaining filter and map");
    let readings: Source<i32, TransformError> = Source::new();
    let alerts = readings
        .filter(|reading| *reading > 90)
        .map(|reading| format!("ALERT: reading at {reading}"));

    alerts
        .subscribe(Sink::new(
            |alert| println!("   {alert}"),
            |failure| println!("   pipeline failed: {failure}"),
            || println!("   pipeline closed"),
        ))
        .detach();

    for reading in [70, 95, 88, 102] {
        readings.send(reading);
    }
    readings.complete();

    println!("\n✓ Example complete!");
}
