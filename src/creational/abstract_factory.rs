// Pattern: Abstract Factory.
// A factory produces a whole family of related products, so a chair and a
// sofa from the same factory always match.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "abstract-factory",
    topic: Topic::Creational,
    summary: "Furniture factories that only ever produce matching families",
    run,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Modern,
    Victorian,
}

pub trait Chair {
    fn style(&self) -> Style;
    fn sit_on(&self) -> String;
}

pub trait Sofa {
    fn style(&self) -> Style;
    fn lie_on(&self) -> String;
    fn matches(&self, chair: &dyn Chair) -> bool {
        self.style() == chair.style()
    }
}

pub trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
}

pub struct ModernChair;
pub struct ModernSofa;
pub struct VictorianChair;
pub struct VictorianSofa;

impl Chair for ModernChair {
    fn style(&self) -> Style {
        Style::Modern
    }

    fn sit_on(&self) -> String {
        "sitting on a moulded plywood chair".to_string()
    }
}

impl Sofa for ModernSofa {
    fn style(&self) -> Style {
        Style::Modern
    }

    fn lie_on(&self) -> String {
        "lying on a low grey modular sofa".to_string()
    }
}

impl Chair for VictorianChair {
    fn style(&self) -> Style {
        Style::Victorian
    }

    fn sit_on(&self) -> String {
        "sitting on a carved mahogany chair".to_string()
    }
}

impl Sofa for VictorianSofa {
    fn style(&self) -> Style {
        Style::Victorian
    }

    fn lie_on(&self) -> String {
        "lying on a tufted velvet chesterfield".to_string()
    }
}

pub struct ModernFactory;
pub struct VictorianFactory;

impl FurnitureFactory for ModernFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

impl FurnitureFactory for VictorianFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }
}

pub fn factory_for(style: Style) -> Box<dyn FurnitureFactory> {
    match style {
        Style::Modern => Box::new(ModernFactory),
        Style::Victorian => Box::new(VictorianFactory),
    }
}

/// Client code: knows only the abstract factory.
fn furnish_living_room(factory: &dyn FurnitureFactory, session: &mut Session) {
    let chair = factory.create_chair();
    let sofa = factory.create_sofa();
    session.result(chair.sit_on());
    session.result(sofa.lie_on());
    session.note(format!("set matches: {}", sofa.matches(chair.as_ref())));
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Abstract Factory");

    for style in [Style::Modern, Style::Victorian] {
        session.step(format!("{:?} living room", style));
        let factory = factory_for(style);
        furnish_living_room(factory.as_ref(), session);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_produce_matching_families() {
        for style in [Style::Modern, Style::Victorian] {
            let factory = factory_for(style);
            let chair = factory.create_chair();
            let sofa = factory.create_sofa();
            assert_eq!(chair.style(), style);
            assert_eq!(sofa.style(), style);
            assert!(sofa.matches(chair.as_ref()));
        }
    }

    #[test]
    fn test_mixed_families_do_not_match() {
        let sofa = ModernFactory.create_sofa();
        let chair = VictorianFactory.create_chair();
        assert!(!sofa.matches(chair.as_ref()));
    }
}
