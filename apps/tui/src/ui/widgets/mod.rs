pub mod charts;
pub mod hints;
pub mod legend;
pub mod popup;
pub mod tables;
