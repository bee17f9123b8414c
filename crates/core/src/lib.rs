//! Functional core for the superheroes service.
//!
//! Pure data types, validation and response shaping live here, along with the
//! repository traits that storage backends implement. Nothing in this crate
//! performs I/O.

pub mod heroes;
pub mod storage;
