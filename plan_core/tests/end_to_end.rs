//! Full pipeline: request → layout → DXF and structural report.

use plan_core::cad;
use plan_core::layout::{self, LayoutRequest};
use plan_core::plan::{Orientation, Plan, Requirements, RoomRequirement, Terrain};
use plan_core::structural::{self, BuildingType};

const EPSILON: f64 = 1e-9;

fn reference_request() -> LayoutRequest {
    LayoutRequest::new(
        Terrain::new(15.0, 25.0),
        Requirements::new(vec![
            RoomRequirement::new("salon").with_min_area(20.0),
            RoomRequirement::new("chambre").with_min_area(12.0).with_count(2),
            RoomRequirement::new("cuisine").with_min_area(9.0),
        ]),
    )
}

fn count(text: &str, entity: &str) -> usize {
    text.matches(&format!("  0\n{}\n", entity)).count()
}

fn assert_no_overlap(plan: &Plan) {
    for (i, a) in plan.rooms.iter().enumerate() {
        for b in &plan.rooms[i + 1..] {
            assert!(!a.overlaps(b), "{} overlaps {}", a.name, b.name);
        }
    }
}

#[test]
fn test_reference_scenario_geometry() {
    let outcome = layout::generate(&reference_request()).unwrap();
    let plan = &outcome.plan;

    let expected = [
        ("Salon", 3.0, 5.0, 5.1, 3.9),
        ("Chambre 1", 3.0, 9.1, 4.2, 2.8),
        ("Chambre 2", 7.4, 9.1, 4.2, 2.8),
        ("Cuisine", 3.0, 12.1, 3.7, 2.4),
    ];
    assert_eq!(plan.rooms.len(), expected.len());
    for (room, (name, x, y, w, h)) in plan.rooms.iter().zip(expected) {
        assert_eq!(room.name, name);
        assert!((room.x - x).abs() < EPSILON, "{} x = {}", name, room.x);
        assert!((room.y - y).abs() < EPSILON, "{} y = {}", name, room.y);
        assert!((room.width - w).abs() < EPSILON);
        assert!((room.height - h).abs() < EPSILON);
    }
    assert_no_overlap(plan);

    assert_eq!(plan.doors.len(), 2);
    assert!((plan.doors[0].x - 5.05).abs() < EPSILON);
    assert_eq!(plan.doors[0].width, 1.00);
    assert_eq!(plan.doors[1].orientation, Orientation::Vertical);
    assert!((plan.doors[1].x - 7.2).abs() < EPSILON);
    assert!((plan.doors[1].y - 9.6).abs() < EPSILON);

    assert_eq!(plan.windows.len(), 4);
    assert!(plan.windows.iter().all(|w| w.orientation == Orientation::Vertical));

    let metrics = plan.metrics.as_ref().unwrap();
    assert!((metrics.total_area - 52.29).abs() < EPSILON);
    assert_eq!(metrics.cos, 0.14);
    assert_eq!(metrics.cos, metrics.cuf);
    assert!(metrics.cos <= 0.40);
    assert!(metrics.compliant);
}

#[test]
fn test_placed_area_matches_request_within_rounding() {
    let request = LayoutRequest::new(
        Terrain::new(20.0, 30.0),
        Requirements::new(vec![
            RoomRequirement::new("salon"),
            RoomRequirement::new("chambre").with_count(3),
            RoomRequirement::new("cuisine"),
            RoomRequirement::new("sdb").with_count(2),
            RoomRequirement::new("bureau"),
            RoomRequirement::new("entree"),
        ]),
    );
    let outcome = layout::generate(&request).unwrap();
    assert!(outcome.is_complete());
    assert_no_overlap(&outcome.plan);

    let areas: Vec<f64> = request
        .requirements
        .rooms
        .iter()
        .flat_map(|r| std::iter::repeat(r.effective_min_area()).take(r.count as usize))
        .collect();
    for room in &outcome.plan.rooms {
        // Each side is off by at most 0.05 m after rounding
        let tolerance = 0.05 * (room.width + room.height) + 0.0025;
        let requested = areas
            .iter()
            .copied()
            .find(|a| (room.area() - a).abs() <= tolerance + EPSILON);
        assert!(requested.is_some(), "{} has {:.2} m²", room.name, room.area());
    }
}

#[test]
fn test_overflow_reports_unplaced_rooms() {
    let request = LayoutRequest::new(
        Terrain::new(15.0, 15.0),
        Requirements::new(vec![RoomRequirement::new("garage").with_min_area(15.0).with_count(5)]),
    );
    let outcome = layout::generate(&request).unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.plan.rooms.len() + outcome.unplaced.len(), 5);
    assert_no_overlap(&outcome.plan);
    for room in &outcome.plan.rooms {
        assert!(room.top() <= outcome.buildable.top() + EPSILON);
    }
}

#[test]
fn test_dxf_export_of_reference_plan() {
    let plan = layout::generate(&reference_request()).unwrap().plan;
    let bytes = cad::encode(&plan);
    let text = String::from_utf8(bytes.clone()).unwrap();

    assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n"));
    assert!(text.ends_with("  0\nEOF\n"));

    let (r, d, w) = (plan.rooms.len(), plan.doors.len(), plan.windows.len());
    assert_eq!(count(&text, "LINE"), 4 + 8 * r + d + 2 * w + 4);
    assert_eq!(count(&text, "ARC"), d);
    assert_eq!(count(&text, "TEXT"), 1 + 3 * r + 4);

    assert_eq!(cad::encode(&plan), bytes);
}

#[test]
fn test_external_plan_is_encoded_unmodified() {
    let json = r#"{
        "terrain": {"width": 12.0, "height": 18.0},
        "rooms": [
            {"name": "Atelier", "type": "atelier", "x": 2.0, "y": 4.0, "width": -3.0, "height": 2.5}
        ]
    }"#;
    let plan = Plan::from_json(json).unwrap();
    let text = String::from_utf8(cad::encode(&plan)).unwrap();
    assert!(text.contains(" 11\n-1.0000\n"));
    assert!(!text.contains("Surface:"));
}

#[test]
fn test_structural_analysis_of_reference_plan() {
    let plan = layout::generate(&reference_request()).unwrap().plan;
    let report = structural::analyze(&plan, BuildingType::Habitation);

    assert_eq!(report.elements.len(), plan.rooms.len());
    assert!(report.global_valid);

    let salon = &report.elements[0];
    assert_eq!(salon.element_id, "Beam-Salon");
    assert!((salon.span_m - 5.1).abs() < EPSILON);
    let q = 7.5 * 3.9 / 2.0;
    assert!((salon.moment_knm - q * 5.1 * 5.1 / 8.0).abs() < 1e-9);
    assert!((salon.recommended_height_m - 0.45).abs() < EPSILON);
}

#[test]
fn test_layout_is_idempotent() {
    let a = layout::generate(&reference_request()).unwrap();
    let b = layout::generate(&reference_request()).unwrap();
    assert_eq!(a.plan.rooms, b.plan.rooms);
    assert_eq!(a.plan.doors, b.plan.doors);
    assert_eq!(a.plan.windows, b.plan.windows);
    assert_eq!(
        serde_json::to_string(&a.plan).unwrap(),
        serde_json::to_string(&b.plan).unwrap()
    );
}
