//! Layout capacity and area-fit report.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use venuekit_layout::area_fit::{self, FitClass};
use venuekit_layout::{LayoutDocument, SectionId};
use venuekit_settings::FitSettings;

/// Command-line arguments for the layout report.
#[derive(Debug, Clone, Parser)]
#[command(name = "venuekit")]
#[command(about = "Prints seat capacity and area fit for a venue layout")]
#[command(version)]
pub struct CliArgs {
    /// Layout file written by the editor (<venue>.json)
    pub layout: PathBuf,

    /// Editor settings file (.toml or .json); defaults to the user config
    pub settings: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub id: SectionId,
    pub name: String,
    pub display_order: u32,
    pub seats: u32,
    pub required_area: f64,
    pub actual_area: f64,
    pub class: FitClass,
    pub has_shape: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub venue_id: String,
    pub sections: Vec<SectionReport>,
    pub total_capacity: u64,
    pub central_feature: Option<String>,
}

impl LayoutReport {
    /// Builds the report with sections in display order.
    pub fn from_document(
        venue_id: impl Into<String>,
        document: &LayoutDocument,
        fit: &FitSettings,
    ) -> Self {
        let mut sections: Vec<SectionReport> = document
            .sections
            .iter()
            .map(|section| {
                let report = area_fit::fit_report(section, fit);
                SectionReport {
                    id: section.id,
                    name: section.name.clone(),
                    display_order: section.display_order,
                    seats: section.total_seats(),
                    required_area: report.required_area,
                    actual_area: report.actual_area,
                    class: report.class,
                    has_shape: section.valid_shape().is_some(),
                }
            })
            .collect();
        sections.sort_by_key(|s| s.display_order);

        Self {
            venue_id: venue_id.into(),
            sections,
            total_capacity: document.total_capacity(),
            central_feature: document
                .central_feature
                .as_ref()
                .map(|f| f.kind.label().to_string()),
        }
    }

    /// Sections whose drawn area cannot hold their seats.
    pub fn insufficient(&self) -> impl Iterator<Item = &SectionReport> {
        self.sections
            .iter()
            .filter(|s| s.class == FitClass::Insufficient)
    }
}

fn class_label(class: FitClass) -> &'static str {
    match class {
        FitClass::Fits => "fits",
        FitClass::Insufficient => "insufficient",
        FitClass::Oversized => "oversized",
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Venue: {}", self.venue_id)?;
        if let Some(feature) = &self.central_feature {
            writeln!(f, "Central feature: {}", feature)?;
        }
        writeln!(
            f,
            "{:<24} {:>8} {:>14} {:>14}  {}",
            "Section", "Seats", "Required", "Actual", "Fit"
        )?;
        for s in &self.sections {
            let class = if s.has_shape || s.seats == 0 {
                class_label(s.class)
            } else {
                "no shape"
            };
            writeln!(
                f,
                "{:<24} {:>8} {:>14.1} {:>14.1}  {}",
                s.name, s.seats, s.required_area, s.actual_area, class
            )?;
        }
        write!(f, "Total capacity: {}", self.total_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venuekit_layout::{SeatCapacity, Section, Shape};

    #[test]
    fn test_report_orders_sections() {
        let mut document = LayoutDocument::new();
        let mut upper = Section::new("Upper", Some(Shape::rectangle(0.0, 0.0, 100.0, 100.0)))
            .with_capacity(SeatCapacity::grid(10, 20));
        upper.display_order = 2;
        let mut floor = Section::new("Floor", Some(Shape::rectangle(0.0, 0.0, 500.0, 300.0)))
            .with_capacity(SeatCapacity::grid(10, 20));
        floor.display_order = 1;
        document.add_section(upper);
        document.add_section(floor);

        let report = LayoutReport::from_document("arena", &document, &FitSettings::default());
        assert_eq!(report.sections[0].name, "Floor");
        assert_eq!(report.sections[0].class, FitClass::Fits);
        assert_eq!(report.total_capacity, 400);
        assert_eq!(report.insufficient().count(), 1);

        let text = report.to_string();
        assert!(text.contains("insufficient"));
        assert!(text.ends_with("Total capacity: 400"));
    }
}
