//! # plan_core - Floor Plan Generation Engine
//!
//! `plan_core` turns a plot, zoning rules and a room program into a
//! single-storey floor plan, then exports it as a DXF drawing and pre-sizes
//! one concrete beam per room. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the three engines are pure functions over immutable input
//! - **JSON-First**: all wire types implement Serialize/Deserialize
//! - **Rich Errors**: structured [`PlanError`], never bare strings
//! - **Deterministic**: identical input gives identical plans and bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use plan_core::layout::LayoutRequest;
//! use plan_core::plan::{Requirements, RoomRequirement, Terrain};
//! use plan_core::structural::BuildingType;
//!
//! let request = LayoutRequest::new(
//!     Terrain::new(15.0, 25.0),
//!     Requirements::new(vec![
//!         RoomRequirement::new("salon").with_min_area(20.0),
//!         RoomRequirement::new("chambre").with_min_area(12.0).with_count(2),
//!         RoomRequirement::new("cuisine").with_min_area(9.0),
//!     ]),
//! );
//!
//! let generated = plan_core::generate_and_analyze(&request, BuildingType::Habitation).unwrap();
//! assert_eq!(generated.outcome.plan.rooms.len(), 4);
//! assert!(generated.analysis.global_valid);
//!
//! let dxf = plan_core::cad::encode(&generated.outcome.plan);
//! assert!(dxf.ends_with(b"  0\nEOF\n"));
//! ```
//!
//! ## Modules
//!
//! - [`layout`] - Row-packing, doors, windows, coverage metrics
//! - [`cad`] - DXF R12 encoder
//! - [`structural`] - Beam pre-sizing per room
//! - [`equations`] - Beam and section formulas
//! - [`plan`] - Data model
//! - [`settings`] - Engine parameters with defaults
//! - [`document`] - Saved plan documents
//! - [`file_io`] - Atomic saves and loading
//! - [`units`] - Unit newtypes and rounding
//! - [`errors`] - Structured error types

pub mod cad;
pub mod document;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod layout;
pub mod plan;
pub mod settings;
pub mod structural;
pub mod units;

use serde::{Deserialize, Serialize};

pub use document::{DocumentMetadata, PlanDocument};
pub use errors::{PlanError, PlanResult};
pub use file_io::{load_document, read_plan, save_document, write_cad};
pub use layout::{LayoutOutcome, LayoutRequest};
pub use plan::Plan;
pub use settings::Settings;
pub use structural::{BuildingType, StructuralReport};

/// Layout outcome together with the structural analysis of its plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub outcome: LayoutOutcome,
    pub analysis: StructuralReport,
}

/// Generate a plan and analyze it, with default settings.
pub fn generate_and_analyze(request: &LayoutRequest, building_type: BuildingType) -> PlanResult<GeneratedPlan> {
    generate_and_analyze_with(request, building_type, &Settings::default())
}

pub fn generate_and_analyze_with(
    request: &LayoutRequest,
    building_type: BuildingType,
    settings: &Settings,
) -> PlanResult<GeneratedPlan> {
    let outcome = layout::generate_with(request, &settings.layout)?;
    let analysis = structural::analyze_with(&outcome.plan, building_type, &settings.structural);
    Ok(GeneratedPlan { outcome, analysis })
}
