pub mod bmi;

pub use bmi::{calculate_bmi, BmiCategory, BmiError, BmiReport, BmiRequest};
