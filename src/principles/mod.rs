//! The four OOP principles, one demo each.

pub mod abstraction;
pub mod encapsulation;
pub mod inheritance;
pub mod polymorphism;
