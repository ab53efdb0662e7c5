// SOLID 3: Liskov Substitution - a subtype must keep its supertype's promises.
// The broken half is kept broken on purpose: Square really does violate the
// Resizable contract and Penguin really cannot fly.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "lsp",
    topic: Topic::Solid,
    summary: "Square-as-Rectangle and flightless birds break substitution; narrow contracts fix it",
    run,
};

// ============================================================================
// Bad: Square pretends to be an independently resizable rectangle
// ============================================================================

pub trait Resizable {
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn area(&self) -> f64;
}

#[derive(Debug, Default)]
pub struct RectangleBox {
    width: f64,
    height: f64,
}

impl Resizable for RectangleBox {
    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Default)]
pub struct SquareBox {
    side: f64,
}

impl Resizable for SquareBox {
    // keeps the sides equal, which is exactly what callers don't expect
    fn set_width(&mut self, width: f64) {
        self.side = width;
    }

    fn set_height(&mut self, height: f64) {
        self.side = height;
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// What a caller of `Resizable` may rightly assume: width 5, height 4, area 20.
pub fn resize_to_5x4(shape: &mut dyn Resizable) -> f64 {
    shape.set_width(5.0);
    shape.set_height(4.0);
    shape.area()
}

pub trait Bird {
    fn name(&self) -> &'static str;
    fn fly(&self) -> Result<String, DemoError>;
}

pub struct Sparrow;
pub struct Penguin;

impl Bird for Sparrow {
    fn name(&self) -> &'static str {
        "Sparrow"
    }

    fn fly(&self) -> Result<String, DemoError> {
        Ok("Sparrow flaps off the branch".to_string())
    }
}

impl Bird for Penguin {
    fn name(&self) -> &'static str {
        "Penguin"
    }

    fn fly(&self) -> Result<String, DemoError> {
        Err(DemoError::unsupported("Penguin", "fly"))
    }
}

// ============================================================================
// Good: immutable shapes and a contract only flyers implement
// ============================================================================

pub trait Area {
    fn area(&self) -> f64;
}

pub struct Rect {
    pub width: f64,
    pub height: f64,
}

pub struct Square {
    pub side: f64,
}

impl Area for Rect {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

pub trait FlyingBird {
    fn name(&self) -> &'static str;
    fn fly(&self) -> String;
}

pub trait SwimmingBird {
    fn name(&self) -> &'static str;
    fn swim(&self) -> String;
}

impl FlyingBird for Sparrow {
    fn name(&self) -> &'static str {
        "Sparrow"
    }

    fn fly(&self) -> String {
        "Sparrow flaps off the branch".to_string()
    }
}

impl SwimmingBird for Penguin {
    fn name(&self) -> &'static str {
        "Penguin"
    }

    fn swim(&self) -> String {
        "Penguin dives after a fish".to_string()
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Liskov Substitution");

    session.step("Bad: Square used where a Resizable rectangle is expected");
    let area = resize_to_5x4(&mut RectangleBox::default());
    session.result(format!("RectangleBox: expected area 20, got {}", area));
    let area = resize_to_5x4(&mut SquareBox::default());
    session.result(format!("SquareBox: expected area 20, got {}", area));

    session.step("Bad: every Bird must fly");
    let birds: [&dyn Bird; 2] = [&Sparrow, &Penguin];
    for bird in birds {
        if let Some(flight) = session.attempt(bird.fly())? {
            session.result(flight);
        }
    }

    session.step("Good: immutable shapes and split bird contracts");
    let areas: [&dyn Area; 2] = [
        &Rect {
            width: 5.0,
            height: 4.0,
        },
        &Square { side: 4.0 },
    ];
    for shape in areas {
        session.result(format!("area {}", shape.area()));
    }
    let flyers: [&dyn FlyingBird; 1] = [&Sparrow];
    let swimmers: [&dyn SwimmingBird; 1] = [&Penguin];
    for bird in flyers {
        session.result(bird.fly());
    }
    for bird in swimmers {
        session.result(bird.swim());
    }
    Ok(())
}
