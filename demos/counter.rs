//! Counter
//!
//! This example demonstrates the reducer-to-action mapping on a counter:
//! a named mapping of pure reducers becomes a matching set of dispatchable
//! actions.
//!
//! Key concepts:
//! - Reducers are pure (state, args) -> state functions
//! - Actions dispatch by name and forward trailing arguments
//! - Consecutive dispatches fold together before the next render
//!
//! Run with: RUST_LOG=actionmap=debug cargo run --example counter

use actionmap::{reducers, use_reducers, Actions, Ctx, Scope};
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Debug)]
struct Counter {
    count: i64,
}

fn counter(host: &mut Ctx<'_>) -> (Counter, Actions<i64>) {
    use_reducers(
        host,
        reducers! {
            increment => |s: &Counter, args: &[i64]| Counter {
                count: s.count + args.first().copied().unwrap_or(1),
            },
            decrement => |s: &Counter, args: &[i64]| Counter {
                count: s.count - args.first().copied().unwrap_or(1),
            },
            reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
        },
        Counter { count: 0 },
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Example ===\n");

    let mut scope = Scope::new();

    let (state, actions) = scope.render(counter);
    println!("Initial state: {state:?}");

    // Dispatch with the default step, then with explicit arguments
    actions["increment"].call(&[]);
    actions["increment"].call(&[5]);
    actions["increment"].call(&[10]);

    let (state, _) = scope.render(counter);
    println!("After three increments (1 + 5 + 10): {state:?}");

    actions["decrement"].call(&[6]);
    let (state, _) = scope.render(counter);
    println!("After decrement by 6: {state:?}");

    actions["reset"].call(&[]);
    let (state, _) = scope.render(counter);
    println!("After reset: {state:?}");

    println!("\n=== Example Complete ===");
}
