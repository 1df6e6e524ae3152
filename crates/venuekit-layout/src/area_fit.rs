//! Area-fit validation.
//!
//! Reconciles a section's seat configuration with the area of its drawn
//! shape. Results are advisory: nothing here mutates a section, and the
//! remediation helpers return new values for the caller to commit.
//!
//! Seat and row pitch scale linearly with the seat radius relative to
//! [`FitSettings::reference_seat_radius`] and with the section's spacing
//! multipliers:
//!
//! ```text
//! seat_pitch = min_seat_pitch * (seat_radius / reference_radius) * seat_spacing
//! row_pitch  = min_row_pitch  * (seat_radius / reference_radius) * row_spacing
//! ```

use serde::{Deserialize, Serialize};
use venuekit_settings::FitSettings;

use crate::model::{SeatCapacity, Section, Shape, SpacingConfig};

/// Minimum bounding dimensions a section needs for its seats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredDimensions {
    pub width: f64,
    pub height: f64,
}

impl RequiredDimensions {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Outcome of comparing required and actual area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitClass {
    Fits,
    Insufficient,
    Oversized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub required_area: f64,
    pub actual_area: f64,
    /// `required / actual`, when both are positive.
    pub ratio: Option<f64>,
    pub class: FitClass,
    /// Milder advisory: the shape could shrink without becoming insufficient.
    pub could_shrink: bool,
}

/// Result of spacing relaxation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaxOutcome {
    pub spacing: SpacingConfig,
    pub required_area: f64,
    pub fits: bool,
    pub iterations: u32,
}

pub fn seat_pitch(spacing: &SpacingConfig, fit: &FitSettings) -> f64 {
    fit.min_seat_pitch * (spacing.seat_radius / fit.reference_seat_radius) * spacing.seat_spacing
}

pub fn row_pitch(spacing: &SpacingConfig, fit: &FitSettings) -> f64 {
    fit.min_row_pitch * (spacing.seat_radius / fit.reference_seat_radius) * spacing.row_spacing
}

/// Width and height needed by `capacity` at the given spacing. `None` when
/// there are no seats. Invalid spacing is measured as the default spacing,
/// so the requirement never goes negative.
pub fn required_dimensions_for(
    capacity: &SeatCapacity,
    spacing: &SpacingConfig,
    fit: &FitSettings,
) -> Option<RequiredDimensions> {
    if !capacity.has_seats() {
        return None;
    }
    let spacing = &spacing.or_default();

    let (seats_across, rows) = match capacity {
        SeatCapacity::Unconfigured => return None,
        SeatCapacity::Rows { rows } => {
            let widest = rows.iter().map(|r| r.width_in_seats()).max().unwrap_or(0);
            (f64::from(widest), rows.len() as f64)
        }
        SeatCapacity::Grid {
            rows,
            seats_per_row,
        } => (f64::from(*seats_per_row), f64::from(*rows)),
        SeatCapacity::Total { seats } => {
            let total = f64::from(*seats);
            let per_row = total.sqrt().ceil();
            (per_row, (total / per_row).ceil())
        }
    };

    Some(RequiredDimensions {
        width: seats_across * seat_pitch(spacing, fit),
        height: rows * row_pitch(spacing, fit),
    })
}

pub fn required_dimensions(section: &Section, fit: &FitSettings) -> Option<RequiredDimensions> {
    required_dimensions_for(&section.capacity, &section.spacing, fit)
}

/// Area needed by the section's seats; 0 when none are configured.
pub fn required_area(section: &Section, fit: &FitSettings) -> f64 {
    required_dimensions(section, fit).map_or(0.0, |d| d.area())
}

pub fn actual_area(shape: &Shape) -> f64 {
    shape.area()
}

/// Area of the section's drawn shape; 0 without a valid shape.
pub fn section_area(section: &Section) -> f64 {
    section.valid_shape().map_or(0.0, actual_area)
}

pub fn classify(required: f64, actual: f64, fit: &FitSettings) -> FitClass {
    if required <= 0.0 {
        return FitClass::Fits;
    }
    if actual <= 0.0 {
        return FitClass::Insufficient;
    }

    let ratio = required / actual;
    if ratio > fit.insufficient_ratio {
        FitClass::Insufficient
    } else if ratio < fit.oversized_ratio {
        FitClass::Oversized
    } else {
        FitClass::Fits
    }
}

pub fn fit_report(section: &Section, fit: &FitSettings) -> FitReport {
    let required = required_area(section, fit);
    let actual = section_area(section);
    let ratio = (required > 0.0 && actual > 0.0).then(|| required / actual);

    FitReport {
        required_area: required,
        actual_area: actual,
        ratio,
        class: classify(required, actual, fit),
        could_shrink: ratio.is_some_and(|r| r < fit.shrink_advisory_ratio),
    }
}

/// Scales `shape` about its reference point so that its area becomes
/// `target_area`, preserving proportions and center. `None` for degenerate
/// shapes or a non-positive target.
pub fn scale_shape_to_area(shape: &Shape, target_area: f64) -> Option<Shape> {
    let current = shape.area();
    if current <= 0.0 || target_area <= 0.0 || !target_area.is_finite() {
        return None;
    }

    let factor = (target_area / current).sqrt();
    Some(shape.scaled_about(shape.reference_point(), factor))
}

/// Shape resized to the section's requirement plus the expand buffer.
/// `None` when the section has no seats or no valid shape.
pub fn expand_to_fit(section: &Section, fit: &FitSettings) -> Option<Shape> {
    let required = required_area(section, fit);
    if required <= 0.0 {
        return None;
    }
    let shape = section.valid_shape()?;
    scale_shape_to_area(shape, required * fit.expand_buffer)
}

/// Shrinks the seat radius and spacing multipliers by `scale_factor` per
/// pass until the requirement fits the existing shape, the minimums are
/// reached, or the iteration limit runs out.
///
/// `scale_factor` is clamped into `[0.5, 0.99]`. No value ever grows: a
/// value already below its minimum is left as it is, and the search stops
/// as soon as a pass no longer lowers the requirement.
pub fn relax_spacing(section: &Section, scale_factor: f64, fit: &FitSettings) -> RelaxOutcome {
    let factor = if scale_factor.is_finite() {
        scale_factor.clamp(0.5, 0.99)
    } else {
        0.9
    };
    let actual = section_area(section);
    let mut spacing = section.spacing.or_default();
    let mut required = required_area(section, fit);
    let mut iterations = 0;

    let fits_now = |required: f64| {
        actual > 0.0 && classify(required, actual, fit) != FitClass::Insufficient
    };
    let shrink = |value: f64, floor: f64, ceiling: f64| {
        (value * factor).min(ceiling).max(floor).min(value)
    };

    while !fits_now(required) && actual > 0.0 && iterations < fit.relax_max_iterations {
        let next = SpacingConfig {
            seat_radius: shrink(spacing.seat_radius, fit.min_seat_radius, fit.max_seat_radius),
            seat_spacing: shrink(
                spacing.seat_spacing,
                fit.min_spacing_multiplier,
                fit.max_spacing_multiplier,
            ),
            row_spacing: shrink(
                spacing.row_spacing,
                fit.min_spacing_multiplier,
                fit.max_spacing_multiplier,
            ),
        };
        iterations += 1;
        let next_required =
            required_dimensions_for(&section.capacity, &next, fit).map_or(0.0, |d| d.area());
        if next == spacing || next_required >= required {
            break;
        }
        spacing = next;
        required = next_required;
    }

    let fits = required <= 0.0 || fits_now(required);
    tracing::debug!(
        "Relaxed spacing of '{}' in {} passes: radius {:.2}, fits {}",
        section.name,
        iterations,
        spacing.seat_radius,
        fits
    );

    RelaxOutcome {
        spacing,
        required_area: required,
        fits,
        iterations,
    }
}
