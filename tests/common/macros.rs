/// Asserts that no creature with the given id is in the population.
#[macro_export]
macro_rules! assert_creature_gone {
    ($creatures:expr, $id:expr) => {
        let exists = $creatures.iter().any(|c| c.id == $id);
        assert!(!exists, "Creature {} should be gone but was found", $id);
    };
}

/// Asserts the population size.
#[macro_export]
macro_rules! assert_population {
    ($creatures:expr, $count:expr) => {
        assert_eq!($creatures.len(), $count, "Population count mismatch");
    };
}

/// Asserts every creature's stats lie inside the engine's clamps.
#[macro_export]
macro_rules! assert_stats_clamped {
    ($creatures:expr) => {
        for c in $creatures.iter() {
            assert!((1..=100).contains(&c.hp), "hp {} of {} out of range", c.hp, c.id);
            assert!((0..=100).contains(&c.aggression), "aggression {} of {}", c.aggression, c.id);
            assert!((0..=100).contains(&c.speed), "speed {} of {}", c.speed, c.id);
            assert!(
                (0.1..0.71).contains(&c.reproduction_rate),
                "rate {} of {}",
                c.reproduction_rate,
                c.id
            );
        }
    };
}
