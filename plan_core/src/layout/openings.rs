//! Door and window derivation from placed rooms.

use super::BuildableArea;
use crate::plan::{Door, Orientation, Room, Window};
use crate::settings::LayoutSettings;

/// Main entrance on the first room, plus interior doors between
/// consecutive rooms sharing a row.
///
/// The entrance is centered on the first room's bottom edge. An interior
/// door sits on the right wall of the earlier room of each pair whose base
/// lines differ by less than the adjacency tolerance.
pub fn derive_doors(rooms: &[Room], settings: &LayoutSettings) -> Vec<Door> {
    let mut doors = Vec::new();

    if let Some(first) = rooms.first() {
        doors.push(Door {
            x: first.x + first.width / 2.0 - settings.main_door_width / 2.0,
            y: first.y,
            width: settings.main_door_width,
            orientation: Orientation::Horizontal,
        });
    }

    for pair in rooms.windows(2) {
        let (room, next) = (&pair[0], &pair[1]);
        if (room.y - next.y).abs() < settings.adjacency_tolerance {
            doors.push(Door {
                x: room.right(),
                y: room.y.max(next.y) + settings.interior_door_offset,
                width: settings.interior_door_width,
                orientation: Orientation::Vertical,
            });
        }
    }

    doors
}

/// Windows on exterior walls of habitable rooms.
///
/// Checked per room in order: top edge (horizontal window), then left and
/// right edges (vertical windows). Bathrooms, toilets and corridors get none.
pub fn derive_windows(rooms: &[Room], buildable: &BuildableArea, settings: &LayoutSettings) -> Vec<Window> {
    let tolerance = settings.adjacency_tolerance;
    let half = settings.window_width / 2.0;
    let mut windows = Vec::new();

    for room in rooms.iter().filter(|r| r.room_type.takes_windows()) {
        if room.top() >= buildable.top() - tolerance {
            windows.push(Window {
                x: room.x + room.width / 2.0 - half,
                y: room.top(),
                width: settings.window_width,
                orientation: Orientation::Horizontal,
            });
        }

        if (room.x - buildable.x).abs() < tolerance {
            windows.push(Window {
                x: room.x,
                y: room.y + room.height / 2.0 - half,
                width: settings.window_width,
                orientation: Orientation::Vertical,
            });
        }

        if (room.right() - buildable.right()).abs() < tolerance {
            windows.push(Window {
                x: room.right(),
                y: room.y + room.height / 2.0 - half,
                width: settings.window_width,
                orientation: Orientation::Vertical,
            });
        }
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::RoomType;

    fn room(name: &str, room_type: RoomType, x: f64, y: f64, width: f64, height: f64) -> Room {
        Room {
            name: name.to_string(),
            room_type,
            x,
            y,
            width,
            height,
        }
    }

    fn buildable() -> BuildableArea {
        BuildableArea {
            x: 3.0,
            y: 5.0,
            width: 9.0,
            height: 17.0,
        }
    }

    #[test]
    fn test_no_rooms_no_openings() {
        let settings = LayoutSettings::default();
        assert!(derive_doors(&[], &settings).is_empty());
        assert!(derive_windows(&[], &buildable(), &settings).is_empty());
    }

    #[test]
    fn test_main_door_centered_on_first_room() {
        let rooms = vec![room("Salon", RoomType::Salon, 3.0, 5.0, 5.1, 3.9)];
        let doors = derive_doors(&rooms, &LayoutSettings::default());
        assert_eq!(doors.len(), 1);
        assert!((doors[0].x - 5.05).abs() < 1e-9);
        assert_eq!(doors[0].y, 5.0);
        assert_eq!(doors[0].width, 1.00);
        assert_eq!(doors[0].orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_interior_door_between_row_neighbours() {
        let rooms = vec![
            room("Salon", RoomType::Salon, 3.0, 5.0, 5.1, 3.9),
            room("Chambre 1", RoomType::Chambre, 3.0, 9.1, 4.2, 2.8),
            room("Chambre 2", RoomType::Chambre, 7.4, 9.1, 4.2, 2.8),
        ];
        let doors = derive_doors(&rooms, &LayoutSettings::default());
        assert_eq!(doors.len(), 2);

        let interior = &doors[1];
        assert!((interior.x - 7.2).abs() < 1e-9);
        assert!((interior.y - 9.6).abs() < 1e-9);
        assert_eq!(interior.width, 0.90);
        assert_eq!(interior.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_windows_on_exterior_edges() {
        let rooms = vec![
            // Touches the left edge only
            room("Salon", RoomType::Salon, 3.0, 5.0, 5.1, 3.9),
            // Right edge at 11.6, within 0.5 of 12.0; top at 21.8, within 0.5 of 22.0
            room("Chambre", RoomType::Chambre, 7.4, 19.0, 4.2, 2.8),
        ];
        let windows = derive_windows(&rooms, &buildable(), &LayoutSettings::default());
        assert_eq!(windows.len(), 3);

        assert_eq!(windows[0].orientation, Orientation::Vertical);
        assert_eq!(windows[0].x, 3.0);

        assert_eq!(windows[1].orientation, Orientation::Horizontal);
        assert!((windows[1].y - 21.8).abs() < 1e-9);
        assert!((windows[1].x - 8.9).abs() < 1e-9);

        assert_eq!(windows[2].orientation, Orientation::Vertical);
        assert!((windows[2].x - 11.6).abs() < 1e-9);
        assert_eq!(windows[2].width, 1.20);
    }

    #[test]
    fn test_wet_rooms_get_no_windows() {
        let rooms = vec![
            room("Sdb", RoomType::Sdb, 3.0, 5.0, 2.7, 1.8),
            room("Wc", RoomType::Wc, 3.0, 7.0, 2.0, 1.4),
            room("Couloir", RoomType::Couloir, 3.0, 9.0, 2.0, 1.4),
        ];
        let windows = derive_windows(&rooms, &buildable(), &LayoutSettings::default());
        assert!(windows.is_empty());
    }

    #[test]
    fn test_custom_opening_sizes() {
        let settings = LayoutSettings {
            main_door_width: 1.2,
            interior_door_width: 0.8,
            window_width: 1.0,
            interior_door_offset: 0.3,
            ..LayoutSettings::default()
        };
        let rooms = vec![
            room("Salon", RoomType::Salon, 3.0, 5.0, 5.1, 3.9),
            room("Chambre", RoomType::Chambre, 8.3, 5.0, 3.7, 2.4),
        ];

        let doors = derive_doors(&rooms, &settings);
        assert_eq!(doors.len(), 2);
        assert_eq!(doors[0].width, 1.2);
        assert!((doors[0].x - 4.95).abs() < 1e-9);
        assert_eq!(doors[1].width, 0.8);
        assert!((doors[1].x - 8.1).abs() < 1e-9);
        assert!((doors[1].y - 5.3).abs() < 1e-9);

        let windows = derive_windows(&rooms, &buildable(), &settings);
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(|w| w.width == 1.0));
        // Centered on the wall: 5.0 + 3.9 / 2 - 0.5
        assert_eq!(windows[0].x, 3.0);
        assert!((windows[0].y - 6.45).abs() < 1e-9);
        // 5.0 + 2.4 / 2 - 0.5
        assert!((windows[1].x - 12.0).abs() < 1e-9);
        assert!((windows[1].y - 5.7).abs() < 1e-9);
    }
}
