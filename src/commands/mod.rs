pub mod calendar;
pub mod coverage;
pub mod export;
pub mod months;
