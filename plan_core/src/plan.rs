//! # Plan Data Model
//!
//! Shared types exchanged between the layout engine, the DXF encoder and the
//! structural engine. All coordinates are meters, with the origin at the
//! plot's lower-left corner and rooms anchored by their lower-left corner.
//!
//! ## Structure
//!
//! ```text
//! Plan
//! ├── terrain: Terrain (plot width × height)
//! ├── rooms: Vec<Room> (placed rectangles, placement order)
//! ├── doors: Vec<Door>
//! ├── windows: Vec<Window>
//! ├── wall_thickness: f64
//! └── metrics: Option<Metrics> (area, COS, CUF, compliance)
//! ```
//!
//! A `Plan` is produced once (by [`crate::layout`] or by an external
//! generative source) and is read-only afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};
use crate::settings::DEFAULT_WALL_THICKNESS_M;

/// Minimum terrain side length in meters
pub const MIN_TERRAIN_SIDE_M: f64 = 5.0;

/// Minimum requested room area in m²
pub const MIN_ROOM_AREA_M2: f64 = 4.0;

/// Building plot dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Plot width along X (m)
    pub width: f64,
    /// Plot depth along Y (m)
    pub height: f64,
}

impl Terrain {
    pub fn new(width: f64, height: f64) -> Self {
        Terrain { width, height }
    }

    /// Plot area in m²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn validate(&self) -> PlanResult<()> {
        for (field, value) in [("terrain.width", self.width), ("terrain.height", self.height)] {
            if !value.is_finite() || value < MIN_TERRAIN_SIDE_M {
                return Err(PlanError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Terrain sides must be at least {} m", MIN_TERRAIN_SIDE_M),
                ));
            }
        }
        Ok(())
    }
}

/// Zoning rules for the plot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cos": 0.40,
///   "cuf": 1.20,
///   "front_setback": 5.0,
///   "side_setback": 3.0,
///   "rear_setback": 3.0,
///   "max_height": 9.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Regulations {
    /// Maximum footprint ratio (built area / plot area)
    pub cos: f64,
    /// Maximum floor-area ratio (floor area / plot area)
    pub cuf: f64,
    /// Setback from the street-side boundary (m)
    pub front_setback: f64,
    /// Setback from each lateral boundary (m)
    pub side_setback: f64,
    /// Setback from the rear boundary (m)
    pub rear_setback: f64,
    /// Maximum building height (m)
    pub max_height: f64,
}

impl Default for Regulations {
    fn default() -> Self {
        Regulations {
            cos: 0.40,
            cuf: 1.20,
            front_setback: 5.0,
            side_setback: 3.0,
            rear_setback: 3.0,
            max_height: 9.0,
        }
    }
}

impl Regulations {
    pub fn validate(&self) -> PlanResult<()> {
        let fields = [
            ("regulations.cos", self.cos),
            ("regulations.cuf", self.cuf),
            ("regulations.front_setback", self.front_setback),
            ("regulations.side_setback", self.side_setback),
            ("regulations.rear_setback", self.rear_setback),
            ("regulations.max_height", self.max_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        Ok(())
    }
}

/// Room category.
///
/// Serialized as the lowercase French keyword used by the zoning tables
/// (`"salon"`, `"chambre"`, ...). Any other string is kept verbatim as
/// [`RoomType::Other`] and gets the fallback default area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    /// Living room
    Salon,
    /// Bedroom
    Chambre,
    /// Kitchen
    Cuisine,
    /// Bathroom
    Sdb,
    /// Toilet
    Wc,
    /// Entrance hall
    Entree,
    /// Corridor
    Couloir,
    /// Study / office
    Bureau,
    /// Garage
    Garage,
    /// Unrecognized type, kept as given
    Other(String),
}

impl RoomType {
    /// Keyword used on the wire and in default room names
    pub fn keyword(&self) -> &str {
        match self {
            RoomType::Salon => "salon",
            RoomType::Chambre => "chambre",
            RoomType::Cuisine => "cuisine",
            RoomType::Sdb => "sdb",
            RoomType::Wc => "wc",
            RoomType::Entree => "entree",
            RoomType::Couloir => "couloir",
            RoomType::Bureau => "bureau",
            RoomType::Garage => "garage",
            RoomType::Other(s) => s,
        }
    }

    /// Default minimum area (m²) when a requirement gives none
    pub fn default_min_area(&self) -> f64 {
        match self {
            RoomType::Salon => 20.0,
            RoomType::Chambre => 12.0,
            RoomType::Cuisine => 9.0,
            RoomType::Sdb => 5.0,
            RoomType::Wc => 2.5,
            RoomType::Entree => 4.0,
            RoomType::Couloir => 3.0,
            RoomType::Bureau => 10.0,
            RoomType::Garage => 15.0,
            RoomType::Other(_) => 12.0,
        }
    }

    /// Wet rooms and circulation get no windows
    pub fn takes_windows(&self) -> bool {
        !matches!(self, RoomType::Sdb | RoomType::Wc | RoomType::Couloir)
    }

    /// Keyword with its first letter uppercased ("salon" -> "Salon")
    pub fn display_name(&self) -> String {
        let keyword = self.keyword();
        let mut chars = keyword.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for RoomType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "salon" => RoomType::Salon,
            "chambre" => RoomType::Chambre,
            "cuisine" => RoomType::Cuisine,
            "sdb" => RoomType::Sdb,
            "wc" => RoomType::Wc,
            "entree" => RoomType::Entree,
            "couloir" => RoomType::Couloir,
            "bureau" => RoomType::Bureau,
            "garage" => RoomType::Garage,
            _ => RoomType::Other(s),
        }
    }
}

impl From<&str> for RoomType {
    fn from(s: &str) -> Self {
        RoomType::from(s.to_string())
    }
}

impl From<RoomType> for String {
    fn from(t: RoomType) -> Self {
        t.keyword().to_string()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Request for one or more rooms of a given type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRequirement {
    #[serde(rename = "type")]
    pub room_type: RoomType,

    /// Custom name; defaults to the capitalized type keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Minimum area in m²; defaults per type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,

    /// Number of rooms of this kind
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl RoomRequirement {
    pub fn new(room_type: impl Into<RoomType>) -> Self {
        RoomRequirement {
            room_type: room_type.into(),
            name: None,
            min_area: None,
            count: 1,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = Some(min_area);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Requested area, or the type default
    pub fn effective_min_area(&self) -> f64 {
        self.min_area.unwrap_or_else(|| self.room_type.default_min_area())
    }

    pub fn validate(&self, index: usize) -> PlanResult<()> {
        if self.count < 1 {
            return Err(PlanError::invalid_input(
                format!("requirements.rooms[{}].count", index),
                self.count.to_string(),
                "Count must be at least 1",
            ));
        }
        if let Some(area) = self.min_area {
            if !area.is_finite() || area < MIN_ROOM_AREA_M2 {
                return Err(PlanError::invalid_input(
                    format!("requirements.rooms[{}].min_area", index),
                    area.to_string(),
                    format!("Minimum area must be at least {} m²", MIN_ROOM_AREA_M2),
                ));
            }
        }
        Ok(())
    }
}

/// The room program for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub rooms: Vec<RoomRequirement>,

    /// Desired total built area (m²); capped by the COS allowance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
}

impl Requirements {
    pub fn new(rooms: Vec<RoomRequirement>) -> Self {
        Requirements {
            rooms,
            total_area: None,
        }
    }
}

/// A placed room rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Lower-left corner X (m)
    pub x: f64,
    /// Lower-left corner Y (m)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    /// Gross area (outer rectangle) in m²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors of the two rectangles intersect
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.top() && other.y < self.top()
    }
}

/// Axis an opening runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Along X
    #[default]
    Horizontal,
    /// Along Y
    Vertical,
}

/// A door opening, anchored at its start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_door_width")]
    pub width: f64,
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_door_width() -> f64 {
    0.90
}

/// A window opening, anchored at its start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_window_width")]
    pub width: f64,
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_window_width() -> f64 {
    1.20
}

/// Built-area metrics and zoning compliance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Sum of placed room areas (m², 2 decimals)
    pub total_area: f64,
    /// Occupancy coefficient (2 decimals)
    pub cos: f64,
    /// Land-use coefficient (2 decimals); equals `cos` for a single storey
    pub cuf: f64,
    pub compliant: bool,
    /// Which coefficient(s) were exceeded, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregate root: a complete single-storey floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub terrain: Terrain,
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub windows: Vec<Window>,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS_M
}

impl Plan {
    /// Parse a plan produced outside the layout engine.
    ///
    /// `terrain` and `rooms` are mandatory: a plan without them cannot be
    /// drawn or analyzed, so it is rejected here with
    /// [`PlanError::MissingField`] instead of reaching the encoder.
    ///
    /// ```rust
    /// use plan_core::plan::Plan;
    /// use plan_core::errors::PlanError;
    ///
    /// let err = Plan::from_json(r#"{"rooms": []}"#).unwrap_err();
    /// assert_eq!(err, PlanError::missing_field("terrain"));
    /// ```
    pub fn from_json(json: &str) -> PlanResult<Plan> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(PlanError::serialization)?;
        Plan::from_value(value)
    }

    /// Same as [`Plan::from_json`] for an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> PlanResult<Plan> {
        for field in ["terrain", "rooms"] {
            if value.get(field).map_or(true, serde_json::Value::is_null) {
                return Err(PlanError::missing_field(field));
            }
        }
        serde_json::from_value(value).map_err(PlanError::serialization)
    }
}
