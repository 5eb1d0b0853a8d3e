use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Direction of a value movement.
///
/// Serialized as lowercase `"inflow"` / `"outflow"` on the wire. Any other
/// string fails deserialization; there is no third state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inflow,
    Outflow,
}

impl Direction {
    /// The wire-format label for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inflow => "inflow",
            Direction::Outflow => "outflow",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inflow" => Ok(Direction::Inflow),
            "outflow" => Ok(Direction::Outflow),
            other => Err(TypeError::InvalidDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Inflow).unwrap(),
            "\"inflow\""
        );
        assert_eq!(
            serde_json::to_string(&Direction::Outflow).unwrap(),
            "\"outflow\""
        );
    }

    #[test]
    fn rejects_unknown_direction_on_parse() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, TypeError::InvalidDirection("sideways".to_string()));
    }

    #[test]
    fn rejects_unknown_direction_on_deserialize() {
        let result: Result<Direction, _> = serde_json::from_str("\"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip() {
        for d in [Direction::Inflow, Direction::Outflow] {
            let parsed: Direction = d.as_str().parse().unwrap();
            assert_eq!(parsed, d);
        }
    }
}
