//! Enums whose cases carry literal raw values.
//!
//! Run with: cargo run --example raw_value_enums

use rawlit::literal_enum;
use std::collections::HashMap;
use std::error::Error;
use std::ops::RangeInclusive;

literal_enum! {
    /// Level bands for encounter tables.
    pub enum Tier: RangeInclusive<u32> {
        Novice = "1...5",
        Veteran = "6...15",
        Legend = "16...99",
    }
}

literal_enum! {
    pub enum Loot: HashMap<String, u32> {
        Common = "['copper': 10, 'bread': 2]",
        Rare = "['gold': 5, 'gem': 1]",
    }
}

fn tier_for(level: u32) -> Option<Tier> {
    Tier::ALL
        .iter()
        .copied()
        .find(|tier| tier.raw_value().map(|r| r.contains(&level)).unwrap_or(false))
}

fn main() -> Result<(), Box<dyn Error>> {
    Tier::validate()?;
    Loot::validate()?;

    for tier in Tier::ALL {
        println!("{:<8} {:>8} -> {:?}", tier.name(), tier.literal(), tier.raw_value()?);
    }

    for level in [3, 12, 40] {
        println!("level {} is {:?}", level, tier_for(level));
    }

    let rare = Loot::Rare.raw_value()?;
    println!("rare loot has {} gold", rare["gold"]);

    let tier: Tier = "Veteran".parse()?;
    assert_eq!(Tier::from_raw_value(&(6..=15)), Some(tier));
    println!("✓ {} found by raw value", tier);

    Ok(())
}
