use itertools::Itertools;

use crate::{
    plate::{GRAMS_PER_KG, Plate},
    target::parse_weight,
    unit::Unit,
    weight::{LB_PER_KG, max_weight},
};

/// Olympic bar weight in grams.
pub const BAR_WEIGHT: u32 = 20_000;

/// Plates selected for one side of the bar, in selection order (largest
/// first), plus the total the bar actually carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadout {
    plates: Vec<Plate>,
    actual_weight: u32,
}

impl Loadout {
    /// Greedily load the bar for a kilogram target: run the denominations
    /// largest to smallest, repeating each while it still fits the remaining
    /// per-side weight. Minimal plate counts hold for the standard rack;
    /// the greedy pass is not optimal for arbitrary denomination sets.
    #[must_use]
    pub fn select(target_kg: f64) -> Self {
        let target = (target_kg.max(0.0) * GRAMS_PER_KG).round() as u32;
        let mut remaining = target.saturating_sub(BAR_WEIGHT) / 2;
        let mut plates = Vec::new();

        for denomination in Plate::DENOMINATIONS {
            while remaining >= denomination.weight() {
                plates.push(denomination);
                remaining -= denomination.weight();
            }
        }

        let actual_weight = BAR_WEIGHT + plates.iter().copied().sum::<Plate>().weight() * 2;

        Loadout {
            plates,
            actual_weight,
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Total on the bar in grams, bar included.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.actual_weight
    }

    /// Total on the bar in kilograms, bar included. At most the target
    /// whenever the target covers the bar, and exactly the bar below that.
    #[must_use]
    pub fn actual_kg(&self) -> f64 {
        f64::from(self.actual_weight) / GRAMS_PER_KG
    }

    /// Pound equivalent of the loaded bar, rounded to two decimal places.
    #[must_use]
    pub fn actual_lb(&self) -> f64 {
        (self.actual_kg() * LB_PER_KG * 100.0).round() / 100.0
    }

    /// Distinct denominations in use, largest first.
    #[must_use]
    pub fn denominations(&self) -> Vec<Plate> {
        self.plates.iter().copied().dedup().collect()
    }

    /// Per-side count of each denomination in use, largest first.
    #[must_use]
    pub fn plate_counts(&self) -> Vec<(Plate, usize)> {
        self.plates
            .iter()
            .copied()
            .dedup_with_count()
            .map(|(count, plate)| (plate, count))
            .collect()
    }

    /// Arithmetic summary in the form the host screen prints, counting
    /// plates across both sides of the bar.
    #[must_use]
    pub fn quick_math(&self) -> String {
        let bar_kg = BAR_WEIGHT / 1_000;

        if self.plates.is_empty() {
            return format!("{bar_kg} KG (bar only)");
        }

        let parts = self
            .plate_counts()
            .into_iter()
            .map(|(plate, count)| format!("{} × {plate}", count * 2))
            .join(" + ");

        format!("{bar_kg} (bar) + {parts} ≈ {} KG", self.actual_kg())
    }
}

/// Loadout for raw kilogram target text, as the host screen consumes it.
/// Empty or unparseable text loads the bare bar; values over the kilogram
/// maximum load for the maximum, matching the input boundary.
#[must_use]
pub fn compute_plate_loadout(target_text: &str) -> Loadout {
    let target = parse_weight(target_text).min(max_weight(Unit::Kg));
    Loadout::select(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kgs(loadout: &Loadout) -> Vec<f64> {
        loadout.plates().iter().map(Plate::kg).collect()
    }

    #[test]
    fn bare_bar_below_bar_weight() {
        for text in ["", "0", "15", "20"] {
            let loadout = compute_plate_loadout(text);
            assert!(loadout.plates().is_empty());
            assert_eq!(loadout.actual_kg(), 20.0);
        }
    }

    #[test]
    fn one_small_plate_per_side() {
        let loadout = compute_plate_loadout("25");
        assert_eq!(kgs(&loadout), vec![2.5]);
        assert_eq!(loadout.actual_kg(), 25.0);
    }

    #[test]
    fn greedy_selection_for_230() {
        // per side: (230 - 20) / 2 = 105 = 25 + 25 + 25 + 25 + 5
        let loadout = compute_plate_loadout("230");
        assert_eq!(kgs(&loadout), vec![25.0, 25.0, 25.0, 25.0, 5.0]);
        assert_eq!(loadout.actual_kg(), 230.0);
        assert_eq!(loadout.actual_lb(), 507.06);
    }

    #[test]
    fn counts_group_identical_denominations() {
        let loadout = compute_plate_loadout("230");

        assert_eq!(
            loadout.plate_counts(),
            vec![(Plate::new(25_000), 4), (Plate::new(5_000), 1)]
        );
        assert_eq!(
            loadout.denominations(),
            vec![Plate::new(25_000), Plate::new(5_000)]
        );
    }

    #[test]
    fn quick_math_counts_both_sides() {
        assert_eq!(
            compute_plate_loadout("230").quick_math(),
            "20 (bar) + 8 × 25 + 2 × 5 ≈ 230 KG"
        );
        assert_eq!(compute_plate_loadout("20").quick_math(), "20 KG (bar only)");
    }

    #[test]
    fn actual_weight_invariant_holds_across_range() {
        // 20 to 907 kg in 0.1 kg steps
        for i in 200..=9070 {
            let target = f64::from(i) / 10.0;
            let target_grams = (target * 1000.0).round() as u32;
            let loadout = Loadout::select(target);

            let side: Plate = loadout.plates().iter().copied().sum();
            assert_eq!(loadout.weight(), BAR_WEIGHT + 2 * side.weight());
            assert!(loadout.weight() <= target_grams);
        }
    }

    #[test]
    fn out_of_range_target_loads_for_the_maximum() {
        let clamped = compute_plate_loadout("1000");
        assert_eq!(clamped, Loadout::select(907.0));
        // per side: 443.5 = 17 × 25 + 15 + 2.5, with 1.0 left unreachable
        assert_eq!(clamped.actual_kg(), 905.0);
    }

    #[test]
    fn fraction_below_smallest_plate_is_dropped() {
        // per side: 0.3, smaller than the 1.25 minimum
        let loadout = compute_plate_loadout("20.6");
        assert!(loadout.plates().is_empty());
        assert_eq!(loadout.actual_kg(), 20.0);
    }
}
