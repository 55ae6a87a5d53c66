//! String Chain
//!
//! This example demonstrates the smallest transforming chain.
//!
//! Key concepts:
//! - Seeding a chain with an explicit default handler
//! - Binding handlers with `.chain(handler).when(predicate)`
//! - LIFO evaluation: the step bound last is tested first
//! - Starting from an implicit default that leaves input unhandled
//!
//! Run with: cargo run --example string_chain

use responsibility::TransformChain;

fn main() {
    println!("=== String Chain Example ===\n");

    let chain = TransformChain::with_default(|input: &str| {
        format!("{input} is executed by default chain")
    })
    .chain(|input: &str| format!("{input} is executed by handler 1"))
    .when(|input: &str| input == "test 1")
    .chain(|input: &str| format!("{input} is executed by handler 2"))
    .when(|input: &str| input == "test 2")
    .chain(|input: &str| input.to_uppercase())
    .when(|input: &str| input == "test 3");

    println!("Chain with explicit default ({} guarded steps):", chain.len());
    for input in ["test 1", "test 2", "test 3", "test 4"] {
        println!("  {input:>6} -> {}", chain.apply(input));
    }
    println!();

    let partial = TransformChain::start_from(|x: &str| format!("{x}-A"))
        .when(|x: &str| x == "2")
        .chain_some(|x: &str| format!("{x}-B"))
        .when(|x: &str| x == "1");

    println!("Chain with implicit default:");
    for input in ["1", "2", "3"] {
        match partial.apply(input) {
            Some(output) => println!("  {input} -> {output}"),
            None => println!("  {input} -> (unhandled)"),
        }
    }

    println!("\nKey Takeaways:");
    println!("- Each .chain().when() returns a new chain wrapping the previous one");
    println!("- The first matching guard wins; older steps are never evaluated");
    println!("- An unhandled input is a normal None, not an error");

    println!("\n=== Example Complete ===");
}
