// Principle 2: Inheritance - shared behavior without a shared base class.
// Each vehicle owns its common data through `VehicleInfo` and inherits
// behavior from the default methods of the `Vehicle` trait.

use crate::error::{DemoError, ValidationError};
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "inheritance",
    topic: Topic::Principle,
    summary: "Vehicles share behavior through trait default methods over composed state",
    run,
};

/// Data every vehicle carries.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInfo {
    pub brand: String,
    pub model: String,
    fuel_level: f64,
    tank_capacity: f64,
    /// Litres per 100 km.
    consumption: f64,
}

impl VehicleInfo {
    pub fn new(brand: &str, model: &str, tank_capacity: f64, consumption: f64) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            fuel_level: tank_capacity,
            tank_capacity,
            consumption,
        }
    }

    pub fn fuel_level(&self) -> f64 {
        self.fuel_level
    }
}

pub trait Vehicle {
    fn info(&self) -> &VehicleInfo;
    fn info_mut(&mut self) -> &mut VehicleInfo;
    fn wheels(&self) -> u8;
    fn horn(&self) -> &'static str;

    fn describe(&self) -> String {
        let info = self.info();
        format!(
            "{} {} on {} wheels, {:.1} L in the tank",
            info.brand,
            info.model,
            self.wheels(),
            info.fuel_level
        )
    }

    fn start(&self) -> String {
        format!("{} {} starts: {}", self.info().brand, self.info().model, self.horn())
    }

    /// Burns fuel for the trip, or leaves the tank untouched if it would run dry.
    fn drive(&mut self, km: f64) -> Result<f64, ValidationError> {
        // also catches NaN
        if !(km > 0.0) {
            return Err(ValidationError::NonPositiveAmount { amount: km });
        }
        let info = self.info_mut();
        let required = km * info.consumption / 100.0;
        if required > info.fuel_level {
            return Err(ValidationError::InsufficientFuel {
                available: info.fuel_level,
                required,
            });
        }
        info.fuel_level -= required;
        Ok(info.fuel_level)
    }

    /// Tops up, capped at tank capacity. Returns the litres actually added.
    fn refuel(&mut self, litres: f64) -> f64 {
        let info = self.info_mut();
        let added = litres.max(0.0).min(info.tank_capacity - info.fuel_level);
        info.fuel_level += added;
        added
    }
}

pub struct Car {
    info: VehicleInfo,
    doors: u8,
}

impl Car {
    pub fn new(brand: &str, model: &str, doors: u8) -> Self {
        Self {
            info: VehicleInfo::new(brand, model, 50.0, 6.5),
            doors,
        }
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }
}

impl Vehicle for Car {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut VehicleInfo {
        &mut self.info
    }

    fn wheels(&self) -> u8 {
        4
    }

    fn horn(&self) -> &'static str {
        "beep beep"
    }

    fn describe(&self) -> String {
        format!(
            "{} {} with {} doors, {:.1} L in the tank",
            self.info.brand, self.info.model, self.doors, self.info.fuel_level
        )
    }
}

pub struct Motorcycle {
    info: VehicleInfo,
    has_sidecar: bool,
}

impl Motorcycle {
    pub fn new(brand: &str, model: &str, has_sidecar: bool) -> Self {
        Self {
            info: VehicleInfo::new(brand, model, 15.0, 4.0),
            has_sidecar,
        }
    }
}

impl Vehicle for Motorcycle {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut VehicleInfo {
        &mut self.info
    }

    fn wheels(&self) -> u8 {
        if self.has_sidecar {
            3
        } else {
            2
        }
    }

    fn horn(&self) -> &'static str {
        "meep meep"
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Inheritance via traits and composition");

    let mut garage: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Toyota", "Corolla", 4)),
        Box::new(Motorcycle::new("Ducati", "Monster", false)),
        Box::new(Motorcycle::new("Ural", "Gear Up", true)),
    ];

    for vehicle in garage.iter_mut() {
        session.step(vehicle.describe());
        session.result(vehicle.start());

        for km in [300.0, 400.0] {
            match vehicle.drive(km) {
                Ok(left) => session.result(format!("drove {} km, {:.1} L left", km, left)),
                Err(err) => session.rejected(&err),
            }
        }

        let added = vehicle.refuel(100.0);
        session.result(format!("refuelled {:.1} L", added));
    }

    session.note("Car overrides describe(); Motorcycle keeps the default");
    Ok(())
}
