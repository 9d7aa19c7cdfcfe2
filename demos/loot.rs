use alloy_primitives::U256;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seedpick::{DrawTable, FixedEntropy, WeightedEnum};
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedEnum)]
enum Rarity {
    #[weight(1)]
    Mythic,
    #[weight(10)]
    Legendary,
    #[weight(200)]
    Uncommon,
    #[weight(1000 - 211)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build straight from the enum:
    let table = Rarity::draw_table()?; // uses the macro-provided ENTRIES
    let mut hist: HashMap<Rarity, u64> = HashMap::default();

    // Or, if you want to mix arbitrary items with weights:
    let _custom: DrawTable<&'static str> =
        DrawTable::from_pairs([("sword", 1u64), ("shield", 3)])?;

    // One simulated transaction per chest, ten pulls each:
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100_000 {
        let entropy = FixedEntropy::from_rng(&mut rng);
        for pick in table.draw(10, &entropy)? {
            *hist.entry(*pick).or_default() += 1;
        }
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    println!("total mass {}", table.total());
    for (rarity, count) in values {
        println!("{count: >7} {rarity:?}");
    }

    // Replaying a known chest always yields the same loot.
    let replay = FixedEntropy::new(U256::from(0xc0ffeeu64), U256::from(1_700_000_000u64));
    assert_eq!(table.draw_owned(10, &replay)?, table.draw_owned(10, &replay)?);

    Ok(())
}
