// Principle 3: Polymorphism - one call site, many shapes.
// The same `Shape` contract is driven through generics (static dispatch)
// and through trait objects (dynamic dispatch) with identical results.

use std::f64::consts::PI;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "polymorphism",
    topic: Topic::Principle,
    summary: "Shapes driven through static and dynamic dispatch",
    run,
};

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    // Heron's formula
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Monomorphized per shape.
pub fn describe<S: Shape>(shape: &S) -> String {
    format!(
        "{}: area {:.2}, perimeter {:.2}",
        shape.name(),
        shape.area(),
        shape.perimeter()
    )
}

/// One function for every shape, resolved through the vtable.
pub fn describe_dyn(shape: &dyn Shape) -> String {
    format!(
        "{}: area {:.2}, perimeter {:.2}",
        shape.name(),
        shape.area(),
        shape.perimeter()
    )
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Polymorphism");

    let circle = Circle { radius: 2.0 };
    session.step("Static dispatch (generic function):");
    session.result(describe(&circle));

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(circle),
        Box::new(Rectangle {
            width: 4.0,
            height: 5.0,
        }),
        Box::new(Triangle {
            a: 3.0,
            b: 4.0,
            c: 5.0,
        }),
    ];

    session.step("Dynamic dispatch (heterogeneous collection):");
    for shape in &shapes {
        session.result(describe_dyn(shape.as_ref()));
    }
    session.result(format!("total area {:.2}", total_area(&shapes)));
    Ok(())
}
