//! # Object-Oriented Design in Rust
//!
//! A tour of runnable demos, each built from the same three parts: a trait
//! (the capability contract), the structs that implement it, and a `run`
//! function that drives them only through the trait.
//!
//! ## OOP Principles
//! - Encapsulation (validated bank account)
//! - Inheritance, expressed as traits with default methods over composed state
//! - Polymorphism (static and dynamic dispatch)
//! - Abstraction
//!
//! ## SOLID
//! - Single responsibility, open/closed, Liskov substitution,
//!   interface segregation, dependency inversion
//! - Each one shows the broken design next to the fixed one
//!
//! ## Creational Patterns
//! - Singleton (`OnceLock` with explicit initialization)
//! - Factory Method, Abstract Factory
//! - Builder with a Director
//! - Prototype (explicit shallow and deep copies)
//!
//! ## Structural Patterns
//! - Decorator, Facade, Adapter, Bridge, Proxy, Composite
//!
//! Run the tour with:
//! ```bash
//! cargo run --bin patterns-tour -- list
//! cargo run --bin patterns-tour -- run decorator bridge
//! cargo run --bin patterns-tour -- all
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;

pub mod creational;
pub mod principles;
pub mod solid;
pub mod structural;

pub use config::{AccountLimits, TourConfig};
pub use error::{ConfigError, DemoError, TourError, ValidationError};
pub use harness::{Catalog, Demo, DemoReport, Runner, Session, Topic};
