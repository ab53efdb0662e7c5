// Pattern: Decorator.
// Each add-on holds another `Beverage` and adds to its cost and description.
// Wrappers stack in any order; additive prices make the order irrelevant to
// the final cost.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "decorator",
    topic: Topic::Structural,
    summary: "Coffee add-ons that wrap a beverage and add to its cost",
    run,
};

pub trait Beverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

pub struct Espresso;

impl Beverage for Espresso {
    fn cost(&self) -> f64 {
        5.0
    }

    fn description(&self) -> String {
        "espresso".to_string()
    }
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub const PRICE: f64 = 1.5;

    pub fn wrap(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{} + milk", self.inner.description())
    }
}

pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub const PRICE: f64 = 0.5;

    pub fn wrap(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{} + sugar", self.inner.description())
    }
}

/// Add-on with a price chosen at construction.
pub struct Syrup {
    inner: Box<dyn Beverage>,
    flavour: String,
    price: f64,
}

impl Syrup {
    pub fn wrap(inner: Box<dyn Beverage>, flavour: &str, price: f64) -> Self {
        Self {
            inner,
            flavour: flavour.to_string(),
            price,
        }
    }
}

impl Beverage for Syrup {
    fn cost(&self) -> f64 {
        self.inner.cost() + self.price
    }

    fn description(&self) -> String {
        format!("{} + {} syrup", self.inner.description(), self.flavour)
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Decorator");

    let plain: Box<dyn Beverage> = Box::new(Espresso);
    session.result(format!("{}: {:.2}", plain.description(), plain.cost()));

    let milk_then_sugar = Sugar::wrap(Box::new(Milk::wrap(Box::new(Espresso))));
    let sugar_then_milk = Milk::wrap(Box::new(Sugar::wrap(Box::new(Espresso))));
    for drink in [&milk_then_sugar as &dyn Beverage, &sugar_then_milk] {
        session.result(format!("{}: {:.2}", drink.description(), drink.cost()));
    }

    let mut order: Box<dyn Beverage> = Box::new(Espresso);
    for (flavour, price) in [("vanilla", 0.75), ("hazelnut", 0.8)] {
        order = Box::new(Syrup::wrap(order, flavour, price));
    }
    order = Box::new(Milk::wrap(order));
    session.result(format!("{}: {:.2}", order.description(), order.cost()));
    Ok(())
}
