//! The dispatch and composition harness every demo plugs into.
//!
//! A [`Demo`] is a named, parameterless entry point that writes to a
//! [`Session`]. The [`Catalog`] keeps them in tour order and the
//! [`Runner`] drives them one at a time, each with a fresh session.

pub mod capability;
pub mod runner;
pub mod transcript;

pub use capability::{Capability, CapabilitySet};
pub use runner::{ensure_completed, DemoReport, Outcome, Runner};
pub use transcript::{Line, LineKind, Session, Transcript};

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::config::TourConfig;
use crate::error::DemoError;
use crate::{creational, principles, solid, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Principle,
    Solid,
    Creational,
    Structural,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Topic::Principle => "OOP principle",
            Topic::Solid => "SOLID",
            Topic::Creational => "creational pattern",
            Topic::Structural => "structural pattern",
        };
        f.write_str(label)
    }
}

pub type DemoFn = fn(&mut Session) -> Result<(), DemoError>;

#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub topic: Topic,
    pub summary: &'static str,
    pub run: DemoFn,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("topic", &self.topic)
            .finish()
    }
}

/// Demos in tour order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    demos: Vec<Demo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every demo in the corpus.
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        for demo in [
            principles::encapsulation::DEMO,
            principles::inheritance::DEMO,
            principles::polymorphism::DEMO,
            principles::abstraction::DEMO,
            solid::srp::DEMO,
            solid::ocp::DEMO,
            solid::lsp::DEMO,
            solid::isp::DEMO,
            solid::dip::DEMO,
            creational::singleton::DEMO,
            creational::factory_method::DEMO,
            creational::abstract_factory::DEMO,
            creational::builder::DEMO,
            creational::prototype::DEMO,
            structural::decorator::DEMO,
            structural::facade::DEMO,
            structural::adapter::DEMO,
            structural::bridge::DEMO,
            structural::proxy::DEMO,
            structural::composite::DEMO,
        ] {
            catalog.register(demo);
        }
        catalog
    }

    /// Adds a demo, replacing any earlier one with the same name.
    pub fn register(&mut self, demo: Demo) {
        match self.demos.iter_mut().find(|d| d.name == demo.name) {
            Some(slot) => *slot = demo,
            None => self.demos.push(demo),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Demo, DemoError> {
        self.demos
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| DemoError::UnknownDemo(name.to_string()))
    }

    /// Looks up every name before returning, so an unknown name fails the
    /// whole selection.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Demo>, DemoError> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    /// Demos in tour order, minus the ones the config skips.
    pub fn tour<'c>(&'c self, config: &TourConfig) -> Vec<&'c Demo> {
        self.demos
            .iter()
            .filter(|d| !config.is_skipped(d.name))
            .collect()
    }

    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &Demo> {
        self.demos.iter().filter(move |d| d.topic == topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Demo> {
        self.demos.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.demos.iter().map(|d| d.name)
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashSet;

    fn noop(session: &mut Session) -> Result<(), DemoError> {
        session.step("nothing to see");
        Ok(())
    }

    #[test]
    fn test_standard_names_are_unique() {
        let catalog = Catalog::standard();
        let names: HashSet<_> = catalog.names().collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_every_topic_is_covered() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.by_topic(Topic::Principle).count(), 4);
        assert_eq!(catalog.by_topic(Topic::Solid).count(), 5);
        assert_eq!(catalog.by_topic(Topic::Creational).count(), 5);
        assert_eq!(catalog.by_topic(Topic::Structural).count(), 6);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("decorator").unwrap().topic, Topic::Structural);
        assert!(matches!(
            catalog.get("visitor"),
            Err(DemoError::UnknownDemo(name)) if name == "visitor"
        ));
    }

    #[test]
    fn test_select_keeps_order_and_rejects_unknown() {
        let catalog = Catalog::standard();
        let picked = catalog.select(&["proxy", "lsp"]).unwrap();
        let names: Vec<_> = picked.iter().map(|d| d.name).collect();
        assert_eq!(names, ["proxy", "lsp"]);

        assert!(matches!(
            catalog.select(&["proxy".to_string(), "visitor".to_string()]),
            Err(DemoError::UnknownDemo(name)) if name == "visitor"
        ));
    }

    #[test]
    fn test_tour_leaves_out_skipped() {
        let catalog = Catalog::standard();
        let config = TourConfig::from_toml_str("skip = [\"lsp\", \"isp\"]\n").unwrap();
        config.validate(catalog.names()).unwrap();

        let tour = catalog.tour(&config);
        assert_eq!(tour.len(), catalog.len() - 2);
        assert!(tour.iter().all(|d| d.name != "lsp" && d.name != "isp"));
        assert_eq!(catalog.tour(&TourConfig::default()).len(), catalog.len());
    }

    #[test]
    fn test_skip_must_name_a_catalog_demo() {
        let catalog = Catalog::standard();
        let config = TourConfig::from_toml_str("skip = [\"visitor\"]\n").unwrap();
        assert!(matches!(
            config.validate(catalog.names()),
            Err(ConfigError::Invalid(msg)) if msg.contains("'visitor'")
        ));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut catalog = Catalog::new();
        let demo = Demo {
            name: "noop",
            topic: Topic::Principle,
            summary: "first",
            run: noop,
        };
        catalog.register(demo);
        catalog.register(Demo {
            summary: "second",
            ..demo
        });
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("noop").unwrap().summary, "second");
    }
}
