//! # Layout Engine
//!
//! Deterministic greedy row-packing of rooms into the buildable rectangle
//! left by the setbacks, followed by door/window derivation and metrics.
//!
//! ## Pipeline
//!
//! ```text
//! LayoutRequest ──validate──► expand requirements ──► sort by area (stable)
//!        │                                                  │
//!        ▼                                                  ▼
//!  BuildableArea ─────────────────────────────────► row-pack rooms
//!                                                           │
//!                      doors / windows / metrics ◄──────────┘
//! ```
//!
//! Rooms that do not fit are dropped, logged, and reported in
//! [`LayoutOutcome::unplaced`]; that is never an error.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::layout::{generate, LayoutRequest};
//! use plan_core::plan::{Requirements, RoomRequirement, Terrain};
//!
//! let request = LayoutRequest::new(
//!     Terrain::new(15.0, 25.0),
//!     Requirements::new(vec![
//!         RoomRequirement::new("salon").with_min_area(20.0),
//!         RoomRequirement::new("chambre").with_min_area(12.0).with_count(2),
//!     ]),
//! );
//!
//! let outcome = generate(&request).unwrap();
//! assert_eq!(outcome.plan.rooms.len(), 3);
//! assert!(outcome.unplaced.is_empty());
//! ```

pub mod metrics;
pub mod openings;
pub mod placement;

use serde::{Deserialize, Serialize};

use crate::errors::PlanResult;
use crate::plan::{Plan, Regulations, Requirements, Terrain};
use crate::settings::LayoutSettings;

pub use metrics::compute_metrics;
pub use openings::{derive_doors, derive_windows};
pub use placement::{expand_requirements, pack_rooms, room_dimensions, RoomRequest};

/// Share of the COS allowance targeted when no total area is requested
const DEFAULT_TARGET_SHARE: f64 = 0.8;

/// Everything the layout engine needs for one plan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "terrain": { "width": 15.0, "height": 25.0 },
///   "requirements": {
///     "rooms": [
///       { "type": "salon", "min_area": 20.0 },
///       { "type": "chambre", "min_area": 12.0, "count": 2 }
///     ]
///   },
///   "regulations": { "cos": 0.40 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub terrain: Terrain,
    pub requirements: Requirements,
    #[serde(default)]
    pub regulations: Regulations,
}

impl LayoutRequest {
    /// Create a request with default regulations
    pub fn new(terrain: Terrain, requirements: Requirements) -> Self {
        LayoutRequest {
            terrain,
            requirements,
            regulations: Regulations::default(),
        }
    }

    pub fn with_regulations(mut self, regulations: Regulations) -> Self {
        self.regulations = regulations;
        self
    }

    /// Range checks on terrain, regulations and every room requirement.
    ///
    /// An empty room list is valid and produces an empty plan.
    pub fn validate(&self) -> PlanResult<()> {
        self.terrain.validate()?;
        self.regulations.validate()?;
        for (index, room) in self.requirements.rooms.iter().enumerate() {
            room.validate(index)?;
        }
        Ok(())
    }

    /// Built area aimed for: the requested total, capped at `cos × plot area`
    pub fn target_area(&self) -> f64 {
        let max_build_area = self.terrain.area() * self.regulations.cos;
        let requested = self
            .requirements
            .total_area
            .unwrap_or(max_build_area * DEFAULT_TARGET_SHARE);
        requested.min(max_build_area)
    }
}

/// The rectangle left for building once setbacks are removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildableArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BuildableArea {
    /// Front setback along Y = 0, side setbacks on both X edges, rear at the top.
    pub fn from_setbacks(terrain: &Terrain, regs: &Regulations) -> Self {
        BuildableArea {
            x: regs.side_setback,
            y: regs.front_setback,
            width: terrain.width - 2.0 * regs.side_setback,
            height: terrain.height - regs.front_setback - regs.rear_setback,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Result of a layout run: the plan plus what the plan leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutcome {
    pub plan: Plan,
    /// Requests that did not fit: too wide, or past the top of the buildable rectangle
    pub unplaced: Vec<RoomRequest>,
    pub buildable: BuildableArea,
    /// Target built area (m²) derived from the request
    pub target_area: f64,
}

impl LayoutOutcome {
    /// True when every requested room made it into the plan
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Generate a plan with default layout settings.
pub fn generate(request: &LayoutRequest) -> PlanResult<LayoutOutcome> {
    generate_with(request, &LayoutSettings::default())
}

/// Generate a plan.
///
/// Pure and deterministic: identical inputs give identical room, door and
/// window lists.
pub fn generate_with(request: &LayoutRequest, settings: &LayoutSettings) -> PlanResult<LayoutOutcome> {
    request.validate()?;

    let buildable = BuildableArea::from_setbacks(&request.terrain, &request.regulations);
    if buildable.width <= 0.0 || buildable.height <= 0.0 {
        log::warn!(
            "Setbacks leave no buildable area on a {}x{}m plot",
            request.terrain.width,
            request.terrain.height
        );
    }

    let target_area = request.target_area();
    log::debug!(
        "Buildable rectangle {:.2}x{:.2}m at ({:.2}, {:.2}), target area {:.1}m²",
        buildable.width,
        buildable.height,
        buildable.x,
        buildable.y,
        target_area
    );

    let requests = expand_requirements(&request.requirements.rooms);
    let packed = pack_rooms(requests, &buildable, settings.wall_thickness);

    let doors = derive_doors(&packed.rooms, settings);
    let windows = derive_windows(&packed.rooms, &buildable, settings);
    let metrics = compute_metrics(&packed.rooms, &request.terrain, &request.regulations);

    let plan = Plan {
        terrain: request.terrain,
        rooms: packed.rooms,
        doors,
        windows,
        wall_thickness: settings.wall_thickness,
        metrics: Some(metrics),
    };

    Ok(LayoutOutcome {
        plan,
        unplaced: packed.unplaced,
        buildable,
        target_area,
    })
}
