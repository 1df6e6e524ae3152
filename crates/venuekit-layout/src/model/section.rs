//! Sections, their seat configuration and obstructions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shape::Shape;

pub type SectionId = Uuid;

/// One row of a per-row seat configuration. Aisle margins are counted in
/// seat widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowConfig {
    pub seats: u32,
    #[serde(default)]
    pub aisle_left: u32,
    #[serde(default)]
    pub aisle_right: u32,
    /// Horizontal offset of the row, in world units.
    #[serde(default)]
    pub offset: f64,
}

impl RowConfig {
    pub fn new(seats: u32) -> Self {
        Self {
            seats,
            aisle_left: 0,
            aisle_right: 0,
            offset: 0.0,
        }
    }

    pub fn with_aisles(mut self, left: u32, right: u32) -> Self {
        self.aisle_left = left;
        self.aisle_right = right;
        self
    }

    /// Seats plus aisle margins.
    pub fn width_in_seats(&self) -> u32 {
        self.seats
            .saturating_add(self.aisle_left)
            .saturating_add(self.aisle_right)
    }
}

/// How many seats a section holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SeatCapacity {
    #[default]
    Unconfigured,
    Total {
        seats: u32,
    },
    Grid {
        rows: u32,
        seats_per_row: u32,
    },
    Rows {
        rows: Vec<RowConfig>,
    },
}

impl SeatCapacity {
    pub fn total(seats: u32) -> Self {
        SeatCapacity::Total { seats }
    }

    pub fn grid(rows: u32, seats_per_row: u32) -> Self {
        SeatCapacity::Grid {
            rows,
            seats_per_row,
        }
    }

    pub fn rows(rows: Vec<RowConfig>) -> Self {
        SeatCapacity::Rows { rows }
    }

    pub fn total_seats(&self) -> u32 {
        match self {
            SeatCapacity::Unconfigured => 0,
            SeatCapacity::Total { seats } => *seats,
            SeatCapacity::Grid {
                rows,
                seats_per_row,
            } => rows.saturating_mul(*seats_per_row),
            SeatCapacity::Rows { rows } => rows
                .iter()
                .fold(0u32, |acc, row| acc.saturating_add(row.seats)),
        }
    }

    pub fn has_seats(&self) -> bool {
        self.total_seats() > 0
    }
}

/// Seat radius and spacing multipliers used by the area-fit validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingConfig {
    pub seat_radius: f64,
    pub seat_spacing: f64,
    pub row_spacing: f64,
}

impl SpacingConfig {
    /// Radius and multipliers must all be finite and positive.
    pub fn is_valid(&self) -> bool {
        [self.seat_radius, self.seat_spacing, self.row_spacing]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// This spacing, or the default when it is not valid.
    pub fn or_default(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::default()
        }
    }
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            seat_radius: venuekit_core::constants::REFERENCE_SEAT_RADIUS,
            seat_spacing: 1.0,
            row_spacing: 1.0,
        }
    }
}

/// A no-seat area inside a section (pillar, aisle, entrance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstruction {
    pub id: Uuid,
    pub name: String,
    pub shape: Shape,
}

impl Obstruction {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            shape,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    /// `None` until the operator draws an outline.
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub capacity: SeatCapacity,
    #[serde(default)]
    pub spacing: SpacingConfig,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default)]
    pub obstructions: Vec<Obstruction>,
}

impl Section {
    pub fn new(name: impl Into<String>, shape: Option<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            shape,
            capacity: SeatCapacity::Unconfigured,
            spacing: SpacingConfig::default(),
            display_order: 0,
            obstructions: Vec::new(),
        }
    }

    pub fn with_capacity(mut self, capacity: SeatCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingConfig) -> Self {
        self.spacing = spacing;
        self
    }

    /// The drawn shape, if it is valid geometry.
    pub fn valid_shape(&self) -> Option<&Shape> {
        self.shape.as_ref().filter(|shape| shape.is_valid())
    }

    pub fn total_seats(&self) -> u32 {
        self.capacity.total_seats()
    }

    pub fn obstruction(&self, id: Uuid) -> Option<&Obstruction> {
        self.obstructions.iter().find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_seats() {
        assert_eq!(SeatCapacity::Unconfigured.total_seats(), 0);
        assert_eq!(SeatCapacity::total(120).total_seats(), 120);
        assert_eq!(SeatCapacity::grid(10, 20).total_seats(), 200);

        let rows = SeatCapacity::rows(vec![
            RowConfig::new(10),
            RowConfig::new(12).with_aisles(1, 1),
        ]);
        assert_eq!(rows.total_seats(), 22);
    }

    #[test]
    fn test_row_width_includes_aisles() {
        assert_eq!(RowConfig::new(12).with_aisles(2, 1).width_in_seats(), 15);
    }

    #[test]
    fn test_valid_shape_filters_degenerate() {
        let section = Section::new("Floor", Some(Shape::rectangle(0.0, 0.0, 0.0, 10.0)));
        assert!(section.valid_shape().is_none());
    }

    #[test]
    fn test_capacity_serde_tag() {
        let json = serde_json::to_string(&SeatCapacity::grid(2, 3)).unwrap();
        assert!(json.contains("\"mode\":\"grid\""));
        let back: SeatCapacity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SeatCapacity::grid(2, 3));
    }
}
