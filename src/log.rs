use serde::Serialize;

use crate::registry::RacerRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RacerPosition {
    pub name: String,
    pub position: u32,
}

/// Positions of every car at the end of one round, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    positions: Vec<RacerPosition>,
}

impl RoundSnapshot {
    #[must_use]
    pub fn capture(registry: &RacerRegistry) -> Self {
        Self {
            positions: registry
                .iter()
                .map(|car| RacerPosition {
                    name: car.name().to_owned(),
                    position: car.position(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn positions(&self) -> &[RacerPosition] {
        &self.positions
    }

    /// Names of every car sharing the furthest position.
    #[must_use]
    pub fn leaders(&self) -> Vec<String> {
        let Some(max) = self.positions.iter().map(|racer| racer.position).max() else {
            return Vec::new();
        };

        self.positions
            .iter()
            .filter(|racer| racer.position == max)
            .map(|racer| racer.name.clone())
            .collect()
    }
}

impl FromIterator<RacerPosition> for RoundSnapshot {
    fn from_iter<I: IntoIterator<Item = RacerPosition>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceResult {
    pub snapshots: Vec<RoundSnapshot>,
    pub winners: Vec<String>,
}

impl RaceResult {
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&serde_json::json!({
            "logs": self.snapshots,
            "winners": self.winners,
        }))
    }
}
