//! Replay a raffle draw from a transaction hash and block timestamp.
//!
//! cargo run --example raffle -- 0x9f2c...e1 1700000000 3
//! RUST_LOG=seedpick=trace shows every draw.

use alloy_primitives::U256;
use seedpick::{FixedEntropy, choose};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let transaction_hash: U256 = match args.next() {
        Some(s) => s.parse()?,
        None => U256::from(0x5eed_u64),
    };
    let timestamp: U256 = match args.next() {
        Some(s) => s.parse()?,
        None => U256::from(1_700_000_000u64),
    };
    let winners: usize = match args.next() {
        Some(s) => s.parse()?,
        None => 3,
    };

    // tickets bought per entrant
    let entrants = ["alice", "bob", "carol", "dave", "erin"];
    let tickets: Vec<U256> = [5u64, 1, 12, 0, 7].into_iter().map(U256::from).collect();

    let entropy = FixedEntropy::new(transaction_hash, timestamp);
    let picks = choose(&entrants, &tickets, &[], winners, &entropy)?;

    println!("tx {transaction_hash:#x} @ {timestamp}");
    for (place, who) in picks.iter().enumerate() {
        println!("{:>3}. {who}", place + 1);
    }
    Ok(())
}
