//! Fixture data for seeding an empty store.
//!
//! Pure data only. The server's seed command inserts these rows and then
//! assigns random powers to each hero.

use super::types::{NewHero, NewPower};

/// Upper bound on powers assigned to a single hero while seeding.
pub const MAX_POWERS_PER_HERO: usize = 3;

/// The heroes inserted by the seed command.
///
/// # Example
///
/// ```
/// use superheroes_core::heroes::seed_heroes;
///
/// let heroes = seed_heroes();
/// assert_eq!(heroes.len(), 10);
/// assert_eq!(heroes[0].super_name, "Ms. Marvel");
/// ```
pub fn seed_heroes() -> Vec<NewHero> {
    [
        ("Kamala Khan", "Ms. Marvel"),
        ("Doreen Green", "Squirrel Girl"),
        ("Gwen Stacy", "Spider-Gwen"),
        ("Janet Van Dyne", "The Wasp"),
        ("Wanda Maximoff", "Scarlet Witch"),
        ("Carol Danvers", "Captain Marvel"),
        ("Jean Grey", "Dark Phoenix"),
        ("Ororo Munroe", "Storm"),
        ("Kitty Pryde", "Shadowcat"),
        ("Elektra Natchios", "Elektra"),
    ]
    .into_iter()
    .map(|(name, super_name)| NewHero::new(name, super_name))
    .collect()
}

/// The powers inserted by the seed command.
pub fn seed_powers() -> Vec<NewPower> {
    [
        "gives the wielder super-human strengths",
        "gives the wielder the ability to fly through the skies at supersonic speed",
        "allows the wielder to use her senses at a super-human level",
        "can stretch the human body to extreme lengths",
    ]
    .into_iter()
    .map(NewPower::new)
    .collect()
}
