pub mod race_scenarios;

use musette::model::nutrition::{NutritionState, Product, Stage, Unit};

pub fn product(id: i64, name: &str, carbs: f64, salt: f64, unit: Unit) -> Product {
    Product {
        id,
        name: name.to_string(),
        carbs,
        salt,
        unit,
    }
}

pub fn stage(id: i64, name: &str, duration: u32) -> Stage {
    Stage {
        id,
        name: name.to_string(),
        duration,
    }
}

/// The canonical five-stage race with one liter product and no
/// assignments.
pub fn race_state() -> NutritionState {
    NutritionState {
        products: vec![product(1, "Energy drink", 50.0, 1.0, Unit::Liter)],
        stages: vec![
            stage(1, "Swim", 30),
            stage(2, "T1", 4),
            stage(3, "Bike", 60),
            stage(4, "T2", 2),
            stage(5, "Run", 42),
        ],
        next_product_id: 2,
        ..NutritionState::default()
    }
}
