use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Consumption unit of a nutrition product.
///
/// The fluid total branches on this enumeration: an assigned quantity of a
/// [`Unit::Liter`] product accumulates into fluid intake, while
/// [`Unit::Item`] quantities never do. The set is closed; the serialized
/// tags (`"liter"` / `"item"`) are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Liquid volume in liters.
    Liter,
    /// Discrete count (gels, candy, bars).
    Item,
}

impl Unit {
    /// Tag used in select inputs and in serialized form.
    pub fn tag(self) -> &'static str {
        match self {
            Unit::Liter => "liter",
            Unit::Item => "item",
        }
    }

    /// Maps a select-input tag back to a unit. Unknown tags fall back to
    /// [`Unit::Liter`], mirroring how unparseable numeric input falls back
    /// to zero.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "item" {
            Unit::Item
        } else {
            Unit::Liter
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A purchasable or consumable nutrition item in the product library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Grams of carbohydrate per unit.
    pub carbs: f64,
    /// Grams of salt per unit.
    pub salt: f64,
    pub unit: Unit,
}

/// One timed segment of the race, either a leg or a transition.
///
/// The stage set is fixed when the plan is seeded; only `duration` changes
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: i64,
    pub name: String,
    /// Stage length in minutes.
    pub duration: u32,
}

/// A quantity of one product consumed during one stage.
///
/// References the product by id; the assignment does not own the product.
/// A quantity of zero is a valid, visible assignment, distinct from the
/// assignment being removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub product_id: i64,
    pub quantity: f64,
}

/// Aggregate plan state: the product library, the fixed stage set, and
/// per-stage product assignments keyed by stage id.
///
/// All mutation flows through [`crate::client::store::reduce`]; every
/// transition replaces the state wholesale, so readers always observe a
/// fully-formed snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionState {
    pub products: Vec<Product>,
    pub stages: Vec<Stage>,
    pub assignments: HashMap<i64, Vec<Assignment>>,
    /// Id handed to the next product created through the form. Monotonic;
    /// never decreases, so ids are not reused after a removal.
    pub next_product_id: i64,
}

impl NutritionState {
    /// Assignments attached to the given stage, empty if none exist.
    pub fn assignments_for(&self, stage_id: i64) -> &[Assignment] {
        self.assignments
            .get(&stage_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up a product in the library by id.
    pub fn product(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// The default plan the application starts from: a small library of
    /// drinks and solids plus the five canonical triathlon stages. This is
    /// configuration data, not a contract; durations and products are all
    /// editable in place.
    pub fn seed() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    name: "Maxim energy drink".to_string(),
                    carbs: 72.0,
                    salt: 1.04,
                    unit: Unit::Liter,
                },
                Product {
                    id: 2,
                    name: "Dexal light".to_string(),
                    carbs: 37.0,
                    salt: 0.11,
                    unit: Unit::Liter,
                },
                Product {
                    id: 3,
                    name: "Nosht high energy drink".to_string(),
                    carbs: 100.0,
                    salt: 3.0,
                    unit: Unit::Liter,
                },
                Product {
                    id: 4,
                    name: "Maurten 320 drink mix".to_string(),
                    carbs: 156.0,
                    salt: 1.24,
                    unit: Unit::Liter,
                },
                Product {
                    id: 5,
                    name: "Water".to_string(),
                    carbs: 0.0,
                    salt: 0.0025,
                    unit: Unit::Liter,
                },
                Product {
                    id: 6,
                    name: "Dexal energy gel".to_string(),
                    carbs: 17.0,
                    salt: 0.4,
                    unit: Unit::Item,
                },
                Product {
                    id: 7,
                    name: "HartSport energy candy".to_string(),
                    carbs: 4.35,
                    salt: 0.045,
                    unit: Unit::Item,
                },
                Product {
                    id: 8,
                    name: "Jollos energy candy".to_string(),
                    carbs: 10.0,
                    salt: 0.039,
                    unit: Unit::Item,
                },
            ],
            stages: vec![
                Stage {
                    id: 1,
                    name: "Swim".to_string(),
                    duration: 30,
                },
                Stage {
                    id: 2,
                    name: "T1".to_string(),
                    duration: 4,
                },
                Stage {
                    id: 3,
                    name: "Bike".to_string(),
                    duration: 70,
                },
                Stage {
                    id: 4,
                    name: "T2".to_string(),
                    duration: 2,
                },
                Stage {
                    id: 5,
                    name: "Run".to_string(),
                    duration: 42,
                },
            ],
            assignments: HashMap::new(),
            next_product_id: 9,
        }
    }
}

impl Default for NutritionState {
    /// An empty plan with no products and no stages.
    fn default() -> Self {
        Self {
            products: Vec::new(),
            stages: Vec::new(),
            assignments: HashMap::new(),
            next_product_id: 1,
        }
    }
}
