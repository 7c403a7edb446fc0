//! Typed identifiers.
//!
//! Every entity kind gets its own UUID newtype so ids of different kinds can't
//! be mixed up. All three serialise as a bare hyphenated UUID string.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three kinds of catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  Coin,
  Duty,
  Ksb,
}

impl EntityKind {
  pub fn as_str(self) -> &'static str {
    match self {
      EntityKind::Coin => "Coin",
      EntityKind::Duty => "Duty",
      EntityKind::Ksb => "KSB",
    }
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

macro_rules! entity_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(Uuid);

    impl $name {
      /// Generate a fresh random identifier.
      pub fn new() -> Self { Self(Uuid::new_v4()) }

      pub fn from_uuid(uuid: Uuid) -> Self { Self(uuid) }

      pub fn as_uuid(&self) -> Uuid { self.0 }
    }

    impl Default for $name {
      fn default() -> Self { Self::new() }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
      }
    }

    impl FromStr for $name {
      type Err = uuid::Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
      }
    }
  };
}

entity_id!(
  /// Identifier of a [`Coin`](crate::model::Coin).
  CoinId
);
entity_id!(
  /// Identifier of a [`Duty`](crate::model::Duty).
  DutyId
);
entity_id!(
  /// Identifier of a [`Ksb`](crate::model::Ksb).
  KsbId
);
