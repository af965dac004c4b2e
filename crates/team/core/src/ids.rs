//! Catalog and team identifiers.
//!
//! Every id is a `u32` newtype where `0` is the reserved "unset" value, matching
//! the wire format of the catalog and analysis services.
use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl $name {
            /// Reserved value for "nothing selected".
            pub const UNSET: Self = Self(0);

            /// Returns true unless this is the unset value.
            #[inline]
            pub const fn is_set(self) -> bool {
                self.0 != 0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Base creature (catalog monster) identifier.
    MonsterId
);
catalog_id!(
    /// Personality modifier identifier.
    PersonalityId
);
catalog_id!(
    /// Elemental type identifier. Legacy types are elemental types.
    ElementId
);
catalog_id!(
    /// Move identifier.
    MoveId
);
catalog_id!(
    /// Team-wide magic item identifier.
    MagicItemId
);
catalog_id!(
    /// Identifier assigned to a team by the persistence collaborator.
    TeamId
);
