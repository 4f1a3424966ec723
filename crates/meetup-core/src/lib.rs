// crates/meetup-core/src/lib.rs - Core logic for meetup event article generation
//
// This crate holds everything that does not touch the terminal or the file
// system directly: field validators, the parameter resolver with its derived
// fields, the static venue table and defaults, and the article template
// renderer. The CLI crate injects the two effects the resolver needs (the
// interactive field source and the output-path preflight check).

pub mod error;
pub mod locations;
pub mod params;
pub mod template;
pub mod validate;

pub use error::{EventError, EventResult, TimeField};
pub use locations::{Defaults, LocationRecord, location_table};
pub use params::{FieldSource, QuietSource, RawInput, ValidatedParameters, resolve};
