//! Latest Wins
//!
//! This example demonstrates the two identity guarantees of the mapping:
//! action handles keep their identity across renders, and a handle
//! captured long ago dispatches to the reducers supplied most recently.
//!
//! Key concepts:
//! - Actions are derived once and reused on every render
//! - Reducers are looked up at call time, not capture time
//! - Rebuilding the mapping each render is cheap and safe
//!
//! Run with: RUST_LOG=actionmap=trace cargo run --example latest_wins

use actionmap::{reducers, use_reducers, Action, Actions, Scope};
use tracing_subscriber::EnvFilter;

fn render_with_step(scope: &mut Scope, step: i64) -> (i64, Actions<i64>) {
    scope.render(move |host| {
        use_reducers(
            host,
            reducers! {
                advance => move |s: &i64, _: &[i64]| s + step,
            },
            0i64,
        )
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Latest Wins Example ===\n");

    let mut scope = Scope::new();

    let (count, original) = render_with_step(&mut scope, 1);
    println!("Initial count: {count}");

    original["advance"].call(&[]);
    let (count, second) = render_with_step(&mut scope, 1);
    println!("After advance with step 1: {count}");

    // Same handles come back on every render
    println!(
        "Handle identity stable across renders: {}",
        Action::ptr_eq(&original["advance"], &second["advance"])
    );

    // Re-render with a bigger step, then dispatch through the old handle
    render_with_step(&mut scope, 100);
    original["advance"].call(&[]);

    let (count, _) = render_with_step(&mut scope, 100);
    println!("Old handle after the step changed to 100: {count}");

    println!("\n=== Example Complete ===");
}
