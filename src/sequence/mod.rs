pub mod backwards;
pub mod unit;
