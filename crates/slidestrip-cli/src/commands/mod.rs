pub mod config;
pub mod geometry;
pub mod run;
pub mod simulate;
