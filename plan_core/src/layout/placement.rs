//! Row-packing placement.
//!
//! Rooms are sized from their area with a fixed aspect ratio, sorted
//! largest first, and laid left to right; a room that would cross the right
//! edge opens a new row above the tallest room of the current one. The first
//! room that would cross the top edge ends placement.

use serde::{Deserialize, Serialize};

use super::BuildableArea;
use crate::plan::{Room, RoomRequirement, RoomType};
use crate::units::round_half_up;

/// Rooms larger than this (m²) use the squarer aspect ratio
const LARGE_ROOM_AREA_M2: f64 = 15.0;
const LARGE_ROOM_RATIO: f64 = 1.3;
const SMALL_ROOM_RATIO: f64 = 1.5;

/// One room to place, after `count` expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Target area in m²
    pub area: f64,
}

/// Placed rooms in placement order, plus the requests that did not fit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedRooms {
    pub rooms: Vec<Room>,
    pub unplaced: Vec<RoomRequest>,
}

/// Expand each requirement's `count` into singleton requests.
///
/// Missing names default to the capitalized type; with `count > 1` every
/// instance gets a 1-based suffix ("Chambre 1", "Chambre 2").
pub fn expand_requirements(requirements: &[RoomRequirement]) -> Vec<RoomRequest> {
    let mut expanded = Vec::new();
    for req in requirements {
        let base_name = req
            .name
            .clone()
            .unwrap_or_else(|| req.room_type.display_name());
        let area = req.effective_min_area();
        for i in 0..req.count {
            let name = if req.count > 1 {
                format!("{} {}", base_name, i + 1)
            } else {
                base_name.clone()
            };
            expanded.push(RoomRequest {
                name,
                room_type: req.room_type.clone(),
                area,
            });
        }
    }
    expanded
}

/// Width and height (m) for a room of `area` m², each rounded to 0.1 m.
///
/// Height is `sqrt(area / ratio)`; width is `area / height` computed from
/// the unrounded height.
pub fn room_dimensions(area: f64) -> (f64, f64) {
    let ratio = if area > LARGE_ROOM_AREA_M2 {
        LARGE_ROOM_RATIO
    } else {
        SMALL_ROOM_RATIO
    };
    let height = (area / ratio).sqrt();
    let width = area / height;
    (round_half_up(width, 1), round_half_up(height, 1))
}

/// Place requests into `buildable`, separated by `gap` meters.
///
/// A room wider than the buildable rectangle is dropped on its own. The
/// first room that would cross the top edge stops placement; it and every
/// request after it end up in [`PackedRooms::unplaced`].
pub fn pack_rooms(mut requests: Vec<RoomRequest>, buildable: &BuildableArea, gap: f64) -> PackedRooms {
    // Stable: equal areas keep request order
    requests.sort_by(|a, b| b.area.total_cmp(&a.area));

    let mut packed = PackedRooms::default();
    let mut cursor_x = buildable.x;
    let mut cursor_y = buildable.y;
    let mut row_height: f64 = 0.0;

    let mut remaining = requests.into_iter();
    while let Some(request) = remaining.next() {
        let (width, height) = room_dimensions(request.area);

        // Can never fit a row; smaller rooms after it still can
        if width > buildable.width {
            log::warn!(
                "Room {} ({:.2}m wide) is wider than the buildable area ({:.2}m), dropped",
                request.name,
                width,
                buildable.width
            );
            packed.unplaced.push(request);
            continue;
        }

        let row_started = cursor_x > buildable.x;
        if row_started && cursor_x + width > buildable.right() {
            cursor_x = buildable.x;
            cursor_y += row_height + gap;
            row_height = 0.0;
        }

        if cursor_y + height > buildable.top() {
            log::warn!("No room left for {} ({}m²)", request.name, request.area);
            packed.unplaced.push(request);
            packed.unplaced.extend(remaining.by_ref());
            break;
        }

        log::debug!(
            "Placed {} at ({:.2}, {:.2}) {:.1}x{:.1}m",
            request.name,
            cursor_x,
            cursor_y,
            width,
            height
        );
        packed.rooms.push(Room {
            name: request.name,
            room_type: request.room_type,
            x: cursor_x,
            y: cursor_y,
            width,
            height,
        });

        row_height = row_height.max(height);
        cursor_x += width + gap;
    }

    let total_area: f64 = packed.rooms.iter().map(Room::area).sum();
    log::info!(
        "Placement finished: {} rooms, total area {}m², {} dropped",
        packed.rooms.len(),
        round_half_up(total_area, 1),
        packed.unplaced.len()
    );
    packed
}
