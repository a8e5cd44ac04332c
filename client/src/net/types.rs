//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! The list endpoint returns a JSON object keyed by activity name. Object key
//! order is the server's display order, so `ActivityBoard` decodes the map
//! into an ordered `Vec` instead of a hash or B-tree map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity record as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the roster exceeds capacity.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// An activity paired with its name key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedActivity {
    pub name: String,
    pub activity: Activity,
}

/// The full activity listing, in server key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityBoard(pub Vec<NamedActivity>);

impl ActivityBoard {
    pub fn iter(&self) -> impl Iterator<Item = &NamedActivity> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.name.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = ActivityBoard;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push(NamedActivity { name, activity });
                }
                Ok(ActivityBoard(entries))
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

/// Body of mutation responses. Success carries `message`; errors carry
/// `detail`, and some servers use `message` for errors too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
