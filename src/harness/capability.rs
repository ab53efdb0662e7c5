use itertools::Itertools;
use std::fmt;

/// Something a variant can do. Variants declare their set when they are
/// built; drivers consult the set instead of probing the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Work,
    Eat,
    Sleep,
    Charge,
    Fly,
    Swim,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Work,
        Capability::Eat,
        Capability::Sleep,
        Capability::Charge,
        Capability::Fly,
        Capability::Swim,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Work => "work",
            Capability::Eat => "eat",
            Capability::Sleep => "sleep",
            Capability::Charge => "charge",
            Capability::Fly => "fly",
            Capability::Swim => "swim",
        }
    }
}

/// Fixed set of capabilities. There is no way to add or remove a member after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet(u16);

impl CapabilitySet {
    pub fn of(capabilities: &[Capability]) -> Self {
        CapabilitySet(capabilities.iter().fold(0, |bits, c| bits | c.bit()))
    }

    pub fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().map(Capability::as_str).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = CapabilitySet::of(&[Capability::Work, Capability::Charge]);
        assert!(set.contains(Capability::Work));
        assert!(set.contains(Capability::Charge));
        assert!(!set.contains(Capability::Eat));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = CapabilitySet::of(&[Capability::Fly, Capability::Fly]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_in_declaration_order() {
        let set = CapabilitySet::of(&[Capability::Sleep, Capability::Work]);
        assert_eq!(set.to_string(), "{work, sleep}");
        assert_eq!(CapabilitySet::default().to_string(), "{}");
        assert!(CapabilitySet::default().is_empty());
    }
}
