//! # Structural Pre-Sizing
//!
//! Checks one reinforced-concrete beam per room of a [`Plan`] and aggregates
//! the results into a [`StructuralReport`]. Elements are reported in plan
//! room order.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::plan::{Plan, Room, RoomType, Terrain};
//! use plan_core::structural::{self, BuildingType};
//!
//! let plan = Plan {
//!     terrain: Terrain::new(15.0, 25.0),
//!     rooms: vec![Room {
//!         name: "Salon".to_string(),
//!         room_type: RoomType::Salon,
//!         x: 3.0,
//!         y: 5.0,
//!         width: 5.1,
//!         height: 3.9,
//!     }],
//!     doors: vec![],
//!     windows: vec![],
//!     wall_thickness: 0.20,
//!     metrics: None,
//! };
//!
//! let report = structural::analyze(&plan, BuildingType::Habitation);
//! assert_eq!(report.elements.len(), 1);
//! assert!(report.global_valid);
//! ```

pub mod beam;
pub mod loads;

pub use beam::{analyze_beam, BeamInput, ElementKind, StructuralElementResult};
pub use loads::{BuildingType, SurfaceLoads};

use serde::{Deserialize, Serialize};

use crate::plan::Plan;
use crate::settings::StructuralSettings;
use crate::units::round_half_up;

/// Aggregate analysis of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralReport {
    pub building_type: BuildingType,
    /// Dead + live + partitions (kN/m²)
    pub total_surface_load: f64,
    pub elements: Vec<StructuralElementResult>,
    /// All elements valid; true for a plan without rooms
    pub global_valid: bool,
    pub summary: String,
}

impl StructuralReport {
    pub fn failing(&self) -> impl Iterator<Item = &StructuralElementResult> {
        self.elements.iter().filter(|e| !e.valid)
    }
}

/// Analyze with default structural settings.
pub fn analyze(plan: &Plan, building_type: BuildingType) -> StructuralReport {
    analyze_with(plan, building_type, &StructuralSettings::default())
}

pub fn analyze_with(plan: &Plan, building_type: BuildingType, settings: &StructuralSettings) -> StructuralReport {
    let surface_load = SurfaceLoads::for_building(building_type, settings).total();

    let elements: Vec<_> = plan
        .rooms
        .iter()
        .map(|room| analyze_beam(&BeamInput::for_room(room, surface_load), settings))
        .collect();

    let failing = elements.iter().filter(|e| !e.valid).count();
    let global_valid = failing == 0;
    let summary = if global_valid {
        "Structure compliant - all spans and deflections within admissible limits".to_string()
    } else {
        format!("WARNING: {} element(s) need revision", failing)
    };

    log::info!(
        "Structural analysis done: {} elements, global_valid={}",
        elements.len(),
        global_valid
    );

    StructuralReport {
        building_type,
        total_surface_load: round_half_up(surface_load, 2),
        elements,
        global_valid,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Room, RoomType, Terrain};

    fn room(name: &str, width: f64, height: f64) -> Room {
        Room {
            name: name.to_string(),
            room_type: RoomType::Chambre,
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    fn plan(rooms: Vec<Room>) -> Plan {
        Plan {
            terrain: Terrain::new(20.0, 30.0),
            rooms,
            doors: vec![],
            windows: vec![],
            wall_thickness: 0.20,
            metrics: None,
        }
    }

    #[test]
    fn test_one_element_per_room_in_order() {
        let report = analyze(
            &plan(vec![room("Salon", 5.1, 3.9), room("Chambre 1", 4.2, 2.8), room("Cuisine", 3.7, 2.4)]),
            BuildingType::Habitation,
        );
        let ids: Vec<_> = report.elements.iter().map(|e| e.element_id.as_str()).collect();
        assert_eq!(ids, vec!["Beam-Salon", "Beam-Chambre 1", "Beam-Cuisine"]);
        assert!(report.global_valid);
        assert!(report.summary.starts_with("Structure compliant"));
        assert_eq!(report.total_surface_load, 7.5);
    }

    #[test]
    fn test_span_5_5_habitation() {
        let report = analyze(&plan(vec![room("Salon", 5.5, 4.1)]), BuildingType::Habitation);
        let element = &report.elements[0];
        let linear_load = 7.5 * 4.1 / 2.0;

        assert_eq!(element.span_m, 5.5);
        assert!((element.linear_load_kn_m - linear_load).abs() < 1e-9);
        assert!((element.moment_knm - linear_load * 5.5 * 5.5 / 8.0).abs() < 1e-9);
        assert!((element.shear_kn - linear_load * 5.5 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_building_type_changes_load() {
        let rooms = vec![room("Bureau", 5.0, 4.0)];
        let housing = analyze(&plan(rooms.clone()), BuildingType::Habitation);
        let retail = analyze(&plan(rooms), BuildingType::Commerce);
        assert_eq!(retail.total_surface_load, 11.0);
        assert!(retail.elements[0].moment_knm > housing.elements[0].moment_knm);
        assert_eq!(retail.building_type, BuildingType::Commerce);
    }

    #[test]
    fn test_failing_elements_counted() {
        let report = analyze(
            &plan(vec![room("Hall", 9.0, 4.0), room("Chambre", 4.0, 3.0), room("Atelier", 10.0, 5.0)]),
            BuildingType::Habitation,
        );
        assert!(!report.global_valid);
        assert_eq!(report.failing().count(), 2);
        assert_eq!(report.summary, "WARNING: 2 element(s) need revision");
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let report = analyze(&plan(vec![]), BuildingType::Bureaux);
        assert!(report.elements.is_empty());
        assert!(report.global_valid);
    }

    #[test]
    fn test_report_json() {
        let report = analyze(&plan(vec![room("Salon", 5.1, 3.9)]), BuildingType::Bureaux);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["building_type"], "bureaux");
        assert_eq!(json["elements"][0]["element_kind"], "beam");
        assert_eq!(json["global_valid"], true);
    }
}
