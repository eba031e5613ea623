//! Built-area metrics and zoning compliance.

use crate::plan::{Metrics, Regulations, Room, Terrain};
use crate::units::round_half_up;

/// Compute area, COS and CUF for the placed rooms.
///
/// Single storey, so CUF equals COS. Compliance is judged on the unrounded
/// ratios; the reported values are rounded to 2 decimals.
pub fn compute_metrics(rooms: &[Room], terrain: &Terrain, regs: &Regulations) -> Metrics {
    let total_area: f64 = rooms.iter().map(Room::area).sum();
    let ratio = total_area / terrain.area();
    let cos = ratio;
    let cuf = ratio;

    let mut exceeded = Vec::new();
    if cos > regs.cos {
        exceeded.push(format!("COS {:.2} exceeds the allowed maximum {:.2}", cos, regs.cos));
    }
    if cuf > regs.cuf {
        exceeded.push(format!("CUF {:.2} exceeds the allowed maximum {:.2}", cuf, regs.cuf));
    }
    let compliant = exceeded.is_empty();

    Metrics {
        total_area: round_half_up(total_area, 2),
        cos: round_half_up(cos, 2),
        cuf: round_half_up(cuf, 2),
        compliant,
        message: (!compliant).then(|| exceeded.join(". ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::RoomType;

    fn room(width: f64, height: f64) -> Room {
        Room {
            name: "Salon".to_string(),
            room_type: RoomType::Salon,
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[test]
    fn test_empty_plan_metrics() {
        let metrics = compute_metrics(&[], &Terrain::new(15.0, 25.0), &Regulations::default());
        assert_eq!(metrics.total_area, 0.0);
        assert_eq!(metrics.cos, 0.0);
        assert_eq!(metrics.cuf, 0.0);
        assert!(metrics.compliant);
        assert!(metrics.message.is_none());
    }

    #[test]
    fn test_cos_equals_cuf() {
        let rooms = vec![room(5.1, 3.9), room(4.2, 2.8), room(4.2, 2.8), room(3.7, 2.4)];
        let metrics = compute_metrics(&rooms, &Terrain::new(15.0, 25.0), &Regulations::default());
        assert_eq!(metrics.cos, metrics.cuf);
        // 52.29 / 375 = 0.1394
        assert!((metrics.total_area - 52.29).abs() < 1e-9);
        assert_eq!(metrics.cos, 0.14);
        assert!(metrics.compliant);
    }

    #[test]
    fn test_cos_violation_message() {
        // 60 m² on a 100 m² plot -> 0.60 > 0.40, still under CUF 1.20
        let rooms = vec![room(10.0, 6.0)];
        let metrics = compute_metrics(&rooms, &Terrain::new(10.0, 10.0), &Regulations::default());
        assert!(!metrics.compliant);
        let message = metrics.message.unwrap();
        assert!(message.contains("COS 0.60"));
        assert!(message.contains("0.40"));
        assert!(!message.contains("CUF"));
    }

    #[test]
    fn test_both_coefficients_exceeded() {
        let regs = Regulations {
            cuf: 0.5,
            ..Regulations::default()
        };
        let rooms = vec![room(10.0, 6.0)];
        let metrics = compute_metrics(&rooms, &Terrain::new(10.0, 10.0), &regs);
        let message = metrics.message.unwrap();
        assert!(message.contains("COS"));
        assert!(message.contains("CUF 0.60"));
    }
}
