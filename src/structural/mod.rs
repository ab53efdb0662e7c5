//! Structural patterns: how variants are wrapped, combined and fronted.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod proxy;
