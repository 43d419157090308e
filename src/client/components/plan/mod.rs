pub mod product_form;
pub mod product_table;
pub mod race_summary;
pub mod stage_card;
pub mod stage_durations;

pub use product_form::ProductForm;
pub use product_table::ProductTable;
pub use race_summary::RaceSummary;
pub use stage_card::StageCard;
pub use stage_durations::StageDurations;
