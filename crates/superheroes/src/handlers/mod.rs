pub mod error;
pub mod hero_powers;
pub mod heroes;
pub mod pages;
pub mod powers;
