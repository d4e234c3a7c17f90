//! # Polymorphism through Traits and Composition
//!
//! This crate greets people by name without caring what kind of person they are.
//!
//! ## Traits as Capabilities
//! - `Human` is the single capability: report a name
//! - `Person`, `Student` and `Teacher` implement it independently
//! - Static dispatch (`&impl Human`) and dynamic dispatch (`&dyn Human`) both work
//!
//! ## Composition over Inheritance
//! - `Professor` owns a `Teacher` and delegates `name()` to it explicitly
//! - Extra state (scientific achievements) lives next to the composed value
//!
//! ## Greeting
//! - `Greeter` renders `<salutation>, <name>` lines into any `Write` sink
//! - `GreeterConfig` can be loaded from TOML; the default salutation is `Привет`
//!
//! Run the demo with: `cargo run --bin greeter`

pub mod config;
pub mod error;
pub mod greeter;
pub mod human;
pub mod roster;

pub use config::GreeterConfig;
pub use error::GreetError;
pub use greeter::{greet, greet_to, Greeter};
pub use human::{Human, Person, Professor, Student, Teacher};
pub use roster::{sample_professor, sample_roster};
