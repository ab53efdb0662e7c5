// SOLID 4: Interface Segregation - no client should depend on methods it
// does not use. The fat `Worker` contract forces Robot to fail on eat/sleep;
// the segregated traits plus capability tags let the driver ask first.

use std::collections::HashMap;

use crate::error::DemoError;
use crate::harness::{Capability, CapabilitySet, Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "isp",
    topic: Topic::Solid,
    summary: "Fat Worker interface vs segregated Workable/Feedable/Restable contracts",
    run,
};

// ============================================================================
// Bad: one contract for everything a worker might do
// ============================================================================

pub trait Worker {
    fn name(&self) -> &'static str;
    fn work(&self) -> Result<String, DemoError>;
    fn eat(&self) -> Result<String, DemoError>;
    fn sleep(&self) -> Result<String, DemoError>;
}

pub struct HumanWorker;
pub struct RobotWorker;

impl Worker for HumanWorker {
    fn name(&self) -> &'static str {
        "Human"
    }

    fn work(&self) -> Result<String, DemoError> {
        Ok("Human assembles the gearbox".to_string())
    }

    fn eat(&self) -> Result<String, DemoError> {
        Ok("Human eats lunch".to_string())
    }

    fn sleep(&self) -> Result<String, DemoError> {
        Ok("Human sleeps eight hours".to_string())
    }
}

impl Worker for RobotWorker {
    fn name(&self) -> &'static str {
        "Robot"
    }

    fn work(&self) -> Result<String, DemoError> {
        Ok("Robot welds the chassis".to_string())
    }

    fn eat(&self) -> Result<String, DemoError> {
        Err(DemoError::unsupported("Robot", "eat"))
    }

    fn sleep(&self) -> Result<String, DemoError> {
        Err(DemoError::unsupported("Robot", "sleep"))
    }
}

// ============================================================================
// Good: one trait per capability, tagged on construction
// ============================================================================

pub trait Workable {
    fn work(&self) -> String;
}

pub trait Feedable {
    fn eat(&self) -> String;
}

pub trait Restable {
    fn rest(&self) -> String;
}

pub trait Rechargeable {
    fn charge(&self) -> String;
}

pub struct Human;
pub struct Robot;

impl Workable for Human {
    fn work(&self) -> String {
        "Human assembles the gearbox".to_string()
    }
}

impl Feedable for Human {
    fn eat(&self) -> String {
        "Human eats lunch".to_string()
    }
}

impl Restable for Human {
    fn rest(&self) -> String {
        "Human sleeps eight hours".to_string()
    }
}

impl Workable for Robot {
    fn work(&self) -> String {
        "Robot welds the chassis".to_string()
    }
}

impl Rechargeable for Robot {
    fn charge(&self) -> String {
        "Robot docks at the charger".to_string()
    }
}

/// A staff member with the capability views it actually offers. Which views
/// are present is decided here, once.
pub struct StaffMember {
    pub name: &'static str,
    capabilities: CapabilitySet,
    workable: Option<Box<dyn Workable>>,
    feedable: Option<Box<dyn Feedable>>,
    restable: Option<Box<dyn Restable>>,
    rechargeable: Option<Box<dyn Rechargeable>>,
}

impl StaffMember {
    pub fn human() -> Self {
        Self {
            name: "Human",
            capabilities: CapabilitySet::of(&[Capability::Work, Capability::Eat, Capability::Sleep]),
            workable: Some(Box::new(Human)),
            feedable: Some(Box::new(Human)),
            restable: Some(Box::new(Human)),
            rechargeable: None,
        }
    }

    pub fn robot() -> Self {
        Self {
            name: "Robot",
            capabilities: CapabilitySet::of(&[Capability::Work, Capability::Charge]),
            workable: Some(Box::new(Robot)),
            feedable: None,
            restable: None,
            rechargeable: Some(Box::new(Robot)),
        }
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// Performs `capability` if this member has it.
    pub fn perform(&self, capability: Capability) -> Option<String> {
        match capability {
            Capability::Work => self.workable.as_ref().map(|w| w.work()),
            Capability::Eat => self.feedable.as_ref().map(|f| f.eat()),
            Capability::Sleep => self.restable.as_ref().map(|r| r.rest()),
            Capability::Charge => self.rechargeable.as_ref().map(|c| c.charge()),
            Capability::Fly | Capability::Swim => None,
        }
    }
}

/// Kind name to capability set, for callers that only hold a name.
pub fn capability_registry() -> HashMap<&'static str, CapabilitySet> {
    [StaffMember::human(), StaffMember::robot()]
        .into_iter()
        .map(|m| (m.name, m.capabilities()))
        .collect()
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Interface Segregation");

    session.step("Bad: fat Worker interface");
    let workers: [&dyn Worker; 2] = [&HumanWorker, &RobotWorker];
    for worker in workers {
        for outcome in [worker.work(), worker.eat(), worker.sleep()] {
            if let Some(text) = session.attempt(outcome)? {
                session.result(text);
            }
        }
    }

    session.step("Good: segregated contracts with capability tags");
    let registry = capability_registry();
    for member in [StaffMember::human(), StaffMember::robot()] {
        session.step(format!("{} can {}", member.name, member.capabilities()));
        for capability in member.capabilities().iter() {
            if let Some(text) = member.perform(capability) {
                session.result(text);
            }
        }
        let registered = registry.get(member.name).copied().unwrap_or_default();
        session.note(format!("registry agrees: {}", registered == member.capabilities()));
    }
    Ok(())
}
