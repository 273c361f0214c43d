//! Conteo de pedidos aceptados y rechazados por bebida.
use std::collections::HashMap;

use crate::order::DrinkKind;

const ALL_KINDS: [DrinkKind; 3] = [DrinkKind::Coffee, DrinkKind::Tea, DrinkKind::HotChocolate];

#[derive(Debug, Default)]
pub struct Statistics {
    accepted: HashMap<DrinkKind, u64>,
    rejected: HashMap<DrinkKind, u64>,
    /// Pedidos rechazados sin una bebida reconocible
    unknown: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record_accepted(&mut self, kind: DrinkKind) {
        *self.accepted.entry(kind).or_insert(0) += 1;
    }

    pub fn record_rejected(&mut self, kind: Option<DrinkKind>) {
        match kind {
            Some(kind) => *self.rejected.entry(kind).or_insert(0) += 1,
            None => self.unknown += 1,
        }
    }

    pub fn accepted(&self, kind: DrinkKind) -> u64 {
        self.accepted.get(&kind).copied().unwrap_or(0)
    }

    pub fn rejected(&self, kind: DrinkKind) -> u64 {
        self.rejected.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_accepted(&self) -> u64 {
        self.accepted.values().sum()
    }

    pub fn total_rejected(&self) -> u64 {
        self.rejected.values().sum::<u64>() + self.unknown
    }

    pub fn summary(&self) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders accepted={} rejected={} | Drink=(accepted, rejected) |",
            self.total_accepted(),
            self.total_rejected()
        );
        for kind in ALL_KINDS {
            statistics.push_str(&format!(
                " {}=({},{}) ",
                kind.name(),
                self.accepted(kind),
                self.rejected(kind)
            ));
        }
        if self.unknown > 0 {
            statistics.push_str(&format!(" unknown=(0,{}) ", self.unknown));
        }
        statistics
    }

    pub fn print_statistics(&self) {
        println!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_no_orders() {
        let statistics = Statistics::new();
        assert_eq!(0, statistics.total_accepted());
        assert_eq!(0, statistics.total_rejected());
    }

    #[test]
    fn should_count_orders_per_drink() {
        let mut statistics = Statistics::new();
        statistics.record_accepted(DrinkKind::Coffee);
        statistics.record_accepted(DrinkKind::Coffee);
        statistics.record_rejected(Some(DrinkKind::Tea));
        statistics.record_rejected(None);
        assert_eq!(2, statistics.accepted(DrinkKind::Coffee));
        assert_eq!(1, statistics.rejected(DrinkKind::Tea));
        assert_eq!(0, statistics.accepted(DrinkKind::HotChocolate));
        assert_eq!(2, statistics.total_rejected());
    }

    #[test]
    fn should_summarize_every_drink() {
        let mut statistics = Statistics::new();
        statistics.record_accepted(DrinkKind::HotChocolate);
        assert_eq!(
            "[STATISTICS] Orders accepted=1 rejected=0 | Drink=(accepted, rejected) | coffee=(0,0)  tea=(0,0)  hot chocolate=(1,0) ",
            statistics.summary()
        );
    }
}
