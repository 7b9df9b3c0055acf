//! Basic source and observer wiring

use partyline::{Sink, Source};

fn main() {
    println!("=== Basic Stream Example ===\n");

    println!("1. Creating a source and subscribing");
    let names: Source<String, String> = Source::new();
    let subscription = names.subscribe(Sink::new(
        |name| println!("   hello, {name}"),
        |failure| println!("   stream failed: {failure}"),
        || println!("   stream completed"),
    ));

    println!("\n2. Sending values");
    names.send("John".to_string());
    names.send("Oksana".to_string());

    println!("\n3. Completing the stream");
    names.complete();

    println!("\n4. Late subscribers see the terminal event immediately");
    let late = names.subscribe(Sink::new(
        |_: String| println!("   (unreachable)"),
        |failure| println!("   late failure: {failure}"),
        || println!("   late subscriber: already completed"),
    ));
    println!("   late handle cancelled: {}", late.is_cancelled());

    drop(subscription);
    println!("\n✓ Example complete!");
}
