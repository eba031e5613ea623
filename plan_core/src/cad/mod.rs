//! # DXF Export
//!
//! Serializes a [`Plan`] to an ASCII DXF drawing (R12 / AC1009), in meters.
//!
//! ## File layout
//!
//! ```text
//! HEADER    $ACADVER, $INSUNITS = 6 (m), $LIMMIN/$LIMMAX
//! TABLES    LAYER table: TERRAIN, MURS_PORTEURS, MURS_CLOISONS,
//!           OUVERTURES, COTATIONS, TEXTE, MOBILIER
//! ENTITIES  terrain → rooms → doors → windows → dimensions → title block
//! EOF
//! ```
//!
//! The entity order is fixed so that a given plan always produces the same
//! bytes. The encoder does not validate geometry: negative or degenerate
//! rectangles are written as given. Structural preconditions (a terrain and
//! a room list) are guaranteed by the [`Plan`] type itself; external JSON is
//! checked by [`Plan::from_json`].
//!
//! ## Example
//!
//! ```rust
//! use plan_core::cad;
//! use plan_core::plan::{Plan, Terrain};
//!
//! let plan = Plan {
//!     terrain: Terrain::new(12.0, 20.0),
//!     rooms: vec![],
//!     doors: vec![],
//!     windows: vec![],
//!     wall_thickness: 0.20,
//!     metrics: None,
//! };
//!
//! let bytes = cad::encode(&plan);
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n"));
//! assert!(text.ends_with("  0\nEOF\n"));
//! ```

pub mod layers;
pub mod writer;

pub use layers::Layer;
pub use writer::DxfWriter;

use crate::plan::{Door, Orientation, Plan, Room, Terrain, Window};
use crate::settings::CadSettings;

/// The only interchange revision written (AutoCAD R12)
pub const DXF_VERSION: &str = "AC1009";

/// Half the spacing between the two lines of a window
const WINDOW_HALF_GAP: f64 = 0.05;

const TERRAIN_LABEL_HEIGHT: f64 = 0.3;
const ROOM_LABEL_HEIGHT: f64 = 0.15;
const DIMENSION_HEIGHT: f64 = 0.10;
const DIMENSION_OFFSET_BELOW: f64 = 0.3;
const DIMENSION_OFFSET_LEFT: f64 = 0.5;

/// Title block frame, below the plot
const TITLE_ORIGIN: (f64, f64) = (0.0, -5.0);
const TITLE_SIZE: (f64, f64) = (15.0, 3.0);

/// Encode with default drawing settings.
pub fn encode(plan: &Plan) -> Vec<u8> {
    encode_with(plan, &CadSettings::default())
}

/// Encode a plan to DXF bytes (UTF-8).
///
/// Pure: the same plan and settings always give the same bytes.
pub fn encode_with(plan: &Plan, settings: &CadSettings) -> Vec<u8> {
    log::info!(
        "Generating DXF: {} rooms, terrain {}x{}m",
        plan.rooms.len(),
        plan.terrain.width,
        plan.terrain.height
    );

    let mut w = DxfWriter::new();
    w.header(DXF_VERSION, settings.limits_max);
    w.layer_table(&Layer::ALL);

    w.begin_section("ENTITIES");
    draw_terrain(&mut w, &plan.terrain, settings.terrain_margin);
    for room in &plan.rooms {
        draw_room(&mut w, room, plan.wall_thickness);
    }
    for door in &plan.doors {
        draw_door(&mut w, door);
    }
    for window in &plan.windows {
        draw_window(&mut w, window);
    }
    for room in &plan.rooms {
        draw_room_dimensions(&mut w, room);
    }
    draw_title_block(&mut w, plan, settings);
    w.end_section();

    w.end_of_file();

    let bytes = w.into_bytes();
    log::info!("DXF generated: {} bytes", bytes.len());
    bytes
}

fn draw_terrain(w: &mut DxfWriter, terrain: &Terrain, margin: f64) {
    let (width, height) = (terrain.width, terrain.height);
    w.rectangle(
        Layer::Terrain,
        -margin,
        -margin,
        width + 2.0 * margin,
        height + 2.0 * margin,
    );
    w.text(
        Layer::Text,
        (width / 2.0, -2.0),
        TERRAIN_LABEL_HEIGHT,
        &format!("TERRAIN: {:.1}m x {:.1}m = {:.1}m2", width, height, width * height),
    );
}

fn draw_room(w: &mut DxfWriter, room: &Room, wall_thickness: f64) {
    w.rectangle(Layer::LoadBearingWalls, room.x, room.y, room.width, room.height);

    let inner_width = room.width - 2.0 * wall_thickness;
    let inner_height = room.height - 2.0 * wall_thickness;
    w.rectangle(
        Layer::Partitions,
        room.x + wall_thickness,
        room.y + wall_thickness,
        inner_width,
        inner_height,
    );

    let label = format!("{} ({:.1}m2)", room.name, inner_width * inner_height);
    w.text(
        Layer::Text,
        (room.x + room.width / 2.0, room.y + room.height / 2.0),
        ROOM_LABEL_HEIGHT,
        &label,
    );
}

/// Leaf line along the door axis plus a quarter-circle swing.
fn draw_door(w: &mut DxfWriter, door: &Door) {
    let start = (door.x, door.y);
    let end = match door.orientation {
        Orientation::Vertical => (door.x, door.y + door.width),
        Orientation::Horizontal => (door.x + door.width, door.y),
    };
    w.line(Layer::Openings, start, end);
    w.arc(Layer::Openings, start, door.width, 0.0, 90.0);
}

/// Two parallel lines straddling the wall.
fn draw_window(w: &mut DxfWriter, window: &Window) {
    let (x, y, len) = (window.x, window.y, window.width);
    match window.orientation {
        Orientation::Vertical => {
            w.line(Layer::Openings, (x - WINDOW_HALF_GAP, y), (x - WINDOW_HALF_GAP, y + len));
            w.line(Layer::Openings, (x + WINDOW_HALF_GAP, y), (x + WINDOW_HALF_GAP, y + len));
        }
        Orientation::Horizontal => {
            w.line(Layer::Openings, (x, y - WINDOW_HALF_GAP), (x + len, y - WINDOW_HALF_GAP));
            w.line(Layer::Openings, (x, y + WINDOW_HALF_GAP), (x + len, y + WINDOW_HALF_GAP));
        }
    }
}

fn draw_room_dimensions(w: &mut DxfWriter, room: &Room) {
    w.text(
        Layer::Dimensions,
        (room.x + room.width / 2.0, room.y - DIMENSION_OFFSET_BELOW),
        DIMENSION_HEIGHT,
        &format!("{:.2}", room.width),
    );
    w.text(
        Layer::Dimensions,
        (room.x - DIMENSION_OFFSET_LEFT, room.y + room.height / 2.0),
        DIMENSION_HEIGHT,
        &format!("{:.2}", room.height),
    );
}

fn draw_title_block(w: &mut DxfWriter, plan: &Plan, settings: &CadSettings) {
    let (x, y) = TITLE_ORIGIN;
    w.rectangle(Layer::Text, x, y, TITLE_SIZE.0, TITLE_SIZE.1);
    w.text(Layer::Text, (x + 0.5, y + 2.2), 0.25, &settings.title);
    w.text(
        Layer::Text,
        (x + 0.5, y + 1.4),
        0.15,
        &format!("Terrain: {:.1}m x {:.1}m", plan.terrain.width, plan.terrain.height),
    );
    if let Some(metrics) = &plan.metrics {
        w.text(
            Layer::Text,
            (x + 0.5, y + 0.7),
            0.15,
            &format!(
                "Surface: {:.1}m2 | COS: {:.2} | CUF: {:.2}",
                metrics.total_area, metrics.cos, metrics.cuf
            ),
        );
    }
    w.text(
        Layer::Text,
        (x + 10.0, y + 0.3),
        0.10,
        &format!("Scale: {}", settings.scale),
    );
}
