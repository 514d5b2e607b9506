//! Equipment configuration and weight quantization.
//!
//! Rounds arbitrary target loads to ones achievable with a discrete plate
//! inventory. The greedy plate selection is deliberately not an optimal
//! bin-packer: plates are taken largest-first within the available pair
//! counts, which keeps results deterministic and monotonic across runs and
//! matches the notation already shipped to users.

use crate::types::WeightUnit;
use crate::weight::Weight;
use std::collections::BTreeMap;

/// Plate inventory: plate weight mapped to the number of pairs on hand.
///
/// A plate is always loaded as a pair, one per side. `BTreeMap` keeps the
/// keys ordered so the greedy loop iterates deterministically.
pub type PlateInventory = BTreeMap<Weight, u32>;

/// Equipment available for a training setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentConfig {
    pub weight_unit: WeightUnit,
    pub barbell_weight: Weight,
    pub dumbbell_max: Option<Weight>,
    pub plate_inventory: PlateInventory,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        EquipmentConfig {
            weight_unit: WeightUnit::Lb,
            barbell_weight: Weight::from_f64(45.0),
            dumbbell_max: None,
            plate_inventory: PlateInventory::new(),
        }
    }
}

/// Default rounding increment when no plate inventory is configured.
fn default_increment(unit: WeightUnit) -> Weight {
    match unit {
        WeightUnit::Lb => Weight::from_f64(5.0),
        WeightUnit::Kg => Weight::from_f64(2.5),
    }
}

impl EquipmentConfig {
    pub fn new(weight_unit: WeightUnit, barbell_weight: Weight) -> Self {
        EquipmentConfig {
            weight_unit,
            barbell_weight,
            dumbbell_max: None,
            plate_inventory: PlateInventory::new(),
        }
    }

    /// The smallest weight increase this setup can make.
    ///
    /// With no usable plates this is a fixed unit default (5 lb / 2.5 kg).
    /// Otherwise it is twice the smallest plate with at least one pair,
    /// since a plate must be loaded on both sides.
    pub fn min_increment(&self) -> Weight {
        let smallest = self
            .plate_inventory
            .iter()
            .find(|(_, pairs)| **pairs >= 1)
            .map(|(weight, _)| *weight);

        match smallest {
            Some(plate) => plate.doubled(),
            None => default_increment(self.weight_unit),
        }
    }

    /// Round a target weight (including the bar) to an achievable one.
    ///
    /// Without an inventory, rounds to the nearest multiple of the default
    /// increment, ties up. With an inventory, greedily loads the largest
    /// plates that fit the per-side budget; the result never exceeds the
    /// target and never falls below the bare barbell.
    pub fn round_weight(&self, target: Weight) -> Weight {
        if !self.has_plates() {
            return target.round_to_multiple_of(default_increment(self.weight_unit));
        }

        let plate_weight_needed = target - self.barbell_weight;
        if !plate_weight_needed.is_positive() {
            return self.barbell_weight;
        }

        let per_side = plate_weight_needed.half();
        let mut achieved = Weight::ZERO;

        // Largest plates first.
        for (&plate, &pairs) in self.plate_inventory.iter().rev() {
            if pairs == 0 {
                continue;
            }

            let remaining = per_side - achieved;
            let fit = remaining.whole_multiples_of(plate);
            let take = fit.min(pairs as i64);

            if take > 0 {
                achieved = achieved + plate.times(take);
            }
        }

        self.barbell_weight + achieved.doubled()
    }

    /// Whether the exact target weight is loadable with the available plates.
    pub fn can_achieve_weight(&self, target: Weight) -> bool {
        // Weights are hundredths internally, so the 0.01 tolerance from the
        // boundary contract reduces to exact equality.
        self.round_weight(target) == target
    }

    fn has_plates(&self) -> bool {
        self.plate_inventory.values().any(|pairs| *pairs > 0)
    }
}

// ============================================================================
// Standard Plate Sets
// ============================================================================

/// Common plate inventories for quick setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardPlateSet {
    HomeBasic,
    HomeFull,
    CommercialGym,
}

/// Build a standard plate inventory for the given unit.
pub fn standard_plate_set(set: StandardPlateSet, unit: WeightUnit) -> PlateInventory {
    let pairs: &[(f64, u32)] = match (set, unit) {
        (StandardPlateSet::HomeBasic, WeightUnit::Lb) => {
            &[(45.0, 2), (25.0, 2), (10.0, 2), (5.0, 2), (2.5, 2)]
        }
        (StandardPlateSet::HomeFull, WeightUnit::Lb) => &[
            (45.0, 4),
            (35.0, 2),
            (25.0, 4),
            (10.0, 4),
            (5.0, 4),
            (2.5, 2),
        ],
        (StandardPlateSet::CommercialGym, WeightUnit::Lb) => &[
            (45.0, 10),
            (35.0, 4),
            (25.0, 6),
            (10.0, 6),
            (5.0, 4),
            (2.5, 4),
        ],
        (StandardPlateSet::HomeBasic, WeightUnit::Kg) => &[
            (20.0, 2),
            (15.0, 2),
            (10.0, 2),
            (5.0, 2),
            (2.5, 2),
            (1.25, 2),
        ],
        (StandardPlateSet::HomeFull, WeightUnit::Kg) => &[
            (20.0, 4),
            (15.0, 2),
            (10.0, 4),
            (5.0, 4),
            (2.5, 4),
            (1.25, 2),
        ],
        (StandardPlateSet::CommercialGym, WeightUnit::Kg) => &[
            (20.0, 10),
            (15.0, 4),
            (10.0, 6),
            (5.0, 4),
            (2.5, 4),
            (1.25, 2),
        ],
    };

    pairs
        .iter()
        .map(|&(weight, count)| (Weight::from_f64(weight), count))
        .collect()
}
