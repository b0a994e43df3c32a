// rules.rs - The B3/S23 transition rule

/// State of a cell in the next generation.
pub fn next_state(currently_alive: bool, live_neighbors: u8) -> bool {
    match (currently_alive, live_neighbors) {
        (_, n) if !(2..=3).contains(&n) => false, // Under/over-population
        (false, 3)                      => true,  // Birth
        (alive, _)                      => alive, // Survival, or stays dead
    }
}
