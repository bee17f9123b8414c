mod error;
mod requests;
mod seed;
mod types;
mod validation;
mod views;

pub use error::ValidationError;
pub use requests::{CreateHeroPowerRequest, UpdatePowerRequest};
pub use seed::{seed_heroes, seed_powers, MAX_POWERS_PER_HERO};
pub use types::{Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power, Strength};
pub use validation::{parse_strength, validate_description, MIN_DESCRIPTION_LENGTH};
pub use views::{
    HeroDetail, HeroPowerDetail, HeroPowerWithHero, HeroPowerWithPower, HeroSummary, PowerDetail,
    PowerSummary,
};
