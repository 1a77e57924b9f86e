use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    // Lookups that found their key
    pub hits: usize,
    pub misses: usize,

    // Inserts into an empty slot
    pub created: usize,
    // Inserts chained behind other keys in the same slot
    pub appended: usize,
    // Inserts that overwrote an existing key
    pub replaced: usize,

    pub occupied: usize,
    pub capacity: usize,
    pub longest_chain: usize,
}

impl Stats {
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.hits + self.misses)
    }

    /// Fraction of slots holding a bucket.
    pub fn occupancy(&self) -> f64 {
        ratio(self.occupied, self.capacity)
    }
}

fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 {
        return 0.0;
    }
    n as f64 / d as f64
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash Table Stats:")?;
        writeln!(f, "Hits: {}", self.hits)?;
        writeln!(f, "Misses: {}", self.misses)?;
        writeln!(f, "Hit Rate: {}", self.hit_rate())?;
        writeln!(f)?;
        writeln!(f, "Created: {}", self.created)?;
        writeln!(f, "Appended: {}", self.appended)?;
        writeln!(f, "Replaced: {}", self.replaced)?;
        writeln!(f)?;
        writeln!(f, "Occupied: {}/{}", self.occupied, self.capacity)?;
        writeln!(f, "Longest Chain: {}", self.longest_chain)
    }
}

#[cfg(test)]
mod tests {
    use crate::stats::*;

    #[test]
    fn rates_handle_empty_tables() {
        let stats = Stats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.occupancy(), 0.0);
    }

    #[test]
    fn rates() {
        let stats = Stats {
            hits: 3,
            misses: 1,
            occupied: 5,
            capacity: 10,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(stats.occupancy(), 0.5);
        assert!(stats.to_string().contains("Occupied: 5/10\n"));
    }
}
