// Pattern: Prototype with explicit copies.
// `Contact` does not derive Clone. Callers choose between `shallow_copy`
// (shares the address) and `deep_copy` (owns a new one), and the difference
// shows up as soon as the address is edited.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "prototype",
    topic: Topic::Creational,
    summary: "Shallow vs deep copies made explicit per type",
    run,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Debug)]
pub struct Contact {
    pub name: String,
    pub age: u32,
    address: Rc<RefCell<Address>>,
}

impl Contact {
    pub fn new(name: &str, age: u32, address: Address) -> Self {
        Self {
            name: name.to_string(),
            age,
            address: Rc::new(RefCell::new(address)),
        }
    }

    /// Copies the plain fields; the address is shared with `self`.
    pub fn shallow_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            address: Rc::clone(&self.address),
        }
    }

    /// Copies everything, including a fresh address.
    pub fn deep_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            address: Rc::new(RefCell::new(self.address.borrow().clone())),
        }
    }

    pub fn address(&self) -> Address {
        self.address.borrow().clone()
    }

    pub fn move_to(&self, street: &str, city: &str) {
        let mut address = self.address.borrow_mut();
        address.street = street.to_string();
        address.city = city.to_string();
    }

    pub fn shares_address_with(&self, other: &Contact) -> bool {
        Rc::ptr_eq(&self.address, &other.address)
    }

    fn summary(&self) -> String {
        let address = self.address.borrow();
        format!("{} ({}), {}, {}", self.name, self.age, address.street, address.city)
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Prototype");

    let original = Contact::new(
        "Ada",
        36,
        Address {
            street: "12 St James's Square".to_string(),
            city: "London".to_string(),
        },
    );
    let mut shallow = original.shallow_copy();
    let mut deep = original.deep_copy();
    shallow.name = "Ada (shallow)".to_string();
    deep.name = "Ada (deep)".to_string();
    deep.age += 1;

    session.step("Original and copies before the move:");
    for contact in [&original, &shallow, &deep] {
        session.result(contact.summary());
    }

    session.step("The shallow copy moves to Paris:");
    shallow.move_to("8 Rue de Rivoli", "Paris");
    for contact in [&original, &shallow, &deep] {
        session.result(contact.summary());
    }
    session.note(format!(
        "original shares address with shallow: {}, with deep: {}",
        original.shares_address_with(&shallow),
        original.shares_address_with(&deep)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new(
            "Ada",
            36,
            Address {
                street: "a".to_string(),
                city: "b".to_string(),
            },
        )
    }

    #[test]
    fn test_shallow_copy_shares_address() {
        let original = sample();
        let copy = original.shallow_copy();
        copy.move_to("x", "y");

        assert!(original.shares_address_with(&copy));
        assert_eq!(original.address().city, "y");
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = sample();
        let copy = original.deep_copy();
        copy.move_to("x", "y");

        assert!(!original.shares_address_with(&copy));
        assert_eq!(original.address().city, "b");
        assert_eq!(copy.address().city, "y");
    }

    #[test]
    fn test_plain_fields_are_copied() {
        let original = sample();
        let mut copy = original.shallow_copy();
        copy.name.push_str(" Lovelace");
        copy.age = 40;

        assert_eq!(original.name, "Ada");
        assert_eq!(original.age, 36);
    }
}
