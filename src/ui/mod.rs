pub mod cards;
pub mod chart;
pub mod panels;
