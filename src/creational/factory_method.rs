// Pattern: Factory Method.
// `Logistics` leaves the choice of transport to its implementors while
// `plan_delivery` is written once against the product trait. A keyed
// factory covers the case where the choice arrives as data.

use std::fmt;
use std::str::FromStr;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "factory-method",
    topic: Topic::Creational,
    summary: "Logistics subclasses pick the transport; a keyed factory maps names to kinds",
    run,
};

pub trait Transport {
    fn kind(&self) -> TransportKind;
    fn deliver(&self, cargo: &str) -> String;
}

pub struct Truck;
pub struct Ship;
pub struct Plane;

impl Transport for Truck {
    fn kind(&self) -> TransportKind {
        TransportKind::Truck
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Truck drives {} by road", cargo)
    }
}

impl Transport for Ship {
    fn kind(&self) -> TransportKind {
        TransportKind::Ship
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Ship carries {} across the sea in a container", cargo)
    }
}

impl Transport for Plane {
    fn kind(&self) -> TransportKind {
        TransportKind::Plane
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Plane flies {} overnight", cargo)
    }
}

pub trait Logistics {
    /// The factory method.
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self, cargo: &str) -> String {
        let transport = self.create_transport();
        transport.deliver(cargo)
    }
}

pub struct RoadLogistics;
pub struct SeaLogistics;
pub struct AirLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

impl Logistics for AirLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Plane)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Truck,
    Ship,
    Plane,
}

impl FromStr for TransportKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truck" | "road" => Ok(TransportKind::Truck),
            "ship" | "sea" => Ok(TransportKind::Ship),
            "plane" | "air" => Ok(TransportKind::Plane),
            other => Err(DemoError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TransportKind::Truck => "truck",
            TransportKind::Ship => "ship",
            TransportKind::Plane => "plane",
        };
        f.write_str(name)
    }
}

pub fn create_transport(kind: TransportKind) -> Box<dyn Transport> {
    match kind {
        TransportKind::Truck => Box::new(Truck),
        TransportKind::Ship => Box::new(Ship),
        TransportKind::Plane => Box::new(Plane),
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Factory Method");

    let planners: [&dyn Logistics; 3] = [&RoadLogistics, &SeaLogistics, &AirLogistics];
    for logistics in planners {
        session.step(format!("planner creates a {}", logistics.create_transport().kind()));
        session.result(logistics.plan_delivery("20 crates of tea"));
    }

    session.step("Keyed factory");
    for key in ["sea", "Truck", "air", "submarine"] {
        match key.parse::<TransportKind>() {
            Ok(kind) => {
                let transport = create_transport(kind);
                session.result(format!("'{}' -> {}: {}", key, kind, transport.deliver("mail")));
            }
            Err(err) => session.note(format!("'{}' -> {}", key, err)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_logistics_builds_its_transport() {
        assert_eq!(RoadLogistics.create_transport().kind(), TransportKind::Truck);
        assert_eq!(SeaLogistics.create_transport().kind(), TransportKind::Ship);
        assert_eq!(AirLogistics.create_transport().kind(), TransportKind::Plane);
    }

    #[test]
    fn test_plan_delivery_uses_factory_method() {
        assert_eq!(SeaLogistics.plan_delivery("tea"), Ship.deliver("tea"));
    }

    #[test]
    fn test_keyed_factory_yields_requested_kind() {
        for kind in [TransportKind::Truck, TransportKind::Ship, TransportKind::Plane] {
            assert_eq!(create_transport(kind).kind(), kind);
            assert_eq!(kind.to_string().parse::<TransportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            "rocket".parse::<TransportKind>(),
            Err(DemoError::UnknownKind(k)) if k == "rocket"
        ));
        assert_eq!(" AIR ".parse::<TransportKind>().unwrap(), TransportKind::Plane);
    }
}
