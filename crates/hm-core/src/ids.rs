//! Strongly typed string identifiers.
//!
//! Entities in the world file are addressed by stable human-readable ids
//! (`"peasant_1"`, `"town_2"`, `"mine_1"`).  Wrapping them in distinct
//! newtypes keeps a town id from ever being passed where an agent id is
//! expected.  All ids implement `Borrow<str>` so maps keyed by them can be
//! queried with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed id wrapper around a `String`.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` for the zero-length id, which never names a live entity.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

named_id! {
    /// Identity of a peasant agent.  Stable for the lifetime of the run.
    pub struct AgentId;
}

named_id! {
    /// Identity of a town (a peasant's home and drop-off point).
    pub struct TownId;
}

named_id! {
    /// Identity of a gold mine.
    pub struct MineId;
}
