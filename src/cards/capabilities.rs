//! Capability tags and the classification derived from them.
//!
//! Cards are classified by the tags they carry, never by their kind: a
//! duck is anything that both quacks and swims, a dog is anything tagged
//! as a dog. A dog that quacks and swims is a duck-dog.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Tags attached to a card kind at construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u8 {
        const QUACKS = 1 << 0;
        const SWIMS = 1 << 1;
        const DOG = 1 << 2;

        const DUCK = Self::QUACKS.bits() | Self::SWIMS.bits();
    }
}

impl Capabilities {
    /// Quacks and swims.
    #[must_use]
    pub const fn is_duck(self) -> bool {
        self.contains(Self::DUCK)
    }

    /// Tagged as a dog.
    #[must_use]
    pub const fn is_dog(self) -> bool {
        self.contains(Self::DOG)
    }

    /// Derived classification.
    #[must_use]
    pub const fn classify(self) -> Classification {
        match (self.is_duck(), self.is_dog()) {
            (true, true) => Classification::DuckDog,
            (true, false) => Classification::Duck,
            (false, true) => Classification::Dog,
            (false, false) => Classification::Creature,
        }
    }
}

/// What a card counts as, for descriptions and kindred attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Duck,
    Dog,
    DuckDog,
    Creature,
}

impl Classification {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Duck => "Duck",
            Classification::Dog => "Dog",
            Classification::DuckDog => "Duck-Dog",
            Classification::Creature => "Creature",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
