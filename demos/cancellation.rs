//! Subscription lifecycle: cancel, drop, and detach

use partyline::{Sink, Source};

fn main() {
    println!("=== Cancellation Example ===\n");

    let ticks: Source<u32, String> = Source::new();

    println!("1. Explicit cancellation");
    let subscription = ticks.subscribe(Sink::values(|tick| println!("   a saw tick {tick}")));
    ticks.send(1);
    subscription.cancel();
    ticks.send(2); // observer a no longer sees this

    println!("\n2. Dropping the handle cancels too");
    {
        let _scoped = ticks.subscribe(Sink::values(|tick| println!("   b saw tick {tick}")));
        ticks.send(3);
    }
    ticks.send(4); // observer b is gone

    println!("\n3. Detach to keep an observer for the source's lifetime");
    ticks
        .subscribe(Sink::values(|tick| println!("   c saw tick {tick}")))
        .detach();
    ticks.send(5);
    ticks.send(6);

    println!("\n4. Termination clears every registration");
    ticks.complete();
    println!("   observers left: {}", ticks.observer_count());

    println!("\n✓ Example complete!");
}
