// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use floorplan_lite_core::tensor::{MIN_WIDTH, PADDING_COLUMN, ROOM_INDEX_COLUMNS, ROOM_TYPE_COLUMNS};
use floorplan_lite_core::{
    build_masks_for, decode_polygons, CornerIndex, Error, HouseTensor, MaskRequest, MaskSet,
};
use serde_json::json;

fn masks_from(body: serde_json::Value) -> Result<MaskSet, Error> {
    let request = MaskRequest::from_value(&body)?;
    build_masks_for(&request)
}

fn block_is(masks: &floorplan_lite_core::MaskMatrix, rows: usize, cols: usize, value: u8) -> bool {
    CornerIndex::block(rows).all(|r| CornerIndex::block(cols).all(|c| masks.get(r, c) == value))
}

#[test]
fn two_connected_rooms() {
    let masks = masks_from(json!({
        "Rooms": [
            {"x": 0, "y": 0, "size": 2},
            {"x": 10, "y": 0, "size": 2}
        ],
        "Connectivity": [{"source": {"index": 0}, "target": {"index": 1}}],
        "Boundary": [{"x": -5, "y": -5}, {"x": 15, "y": -5}, {"x": 15, "y": 5}, {"x": -5, "y": 5}]
    }))
    .unwrap();

    assert_eq!(masks.self_mask.dim(), 8);
    assert!(block_is(&masks.self_mask, 0, 0, 0));
    assert!(block_is(&masks.self_mask, 1, 1, 0));
    assert!(block_is(&masks.self_mask, 0, 1, 1));
    assert!(block_is(&masks.gen_mask, 0, 1, 1));
    assert!(block_is(&masks.gen_mask, 1, 0, 1));
    assert!(block_is(&masks.boundary_mask, 0, 0, 1));

    assert_eq!(masks.corners[4].x, 9.0);
    assert_eq!(masks.corners[4].y, -1.0);
}

#[test]
fn boundary_does_not_change_masks() {
    let rooms = json!([{"x": 0, "y": 0, "size": 2}, {"x": 4, "y": 0, "size": "2"}]);
    let without = masks_from(json!({"Rooms": rooms.clone()})).unwrap();
    let with = masks_from(json!({
        "Rooms": rooms,
        "Boundary": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}]
    }))
    .unwrap();
    assert_eq!(without, with);
}

#[test]
fn empty_request_yields_empty_masks() {
    let masks = masks_from(json!({})).unwrap();
    assert!(masks.boundary_mask.is_empty());
    assert!(masks.self_mask.is_empty());
    assert!(masks.gen_mask.is_empty());

    let json = serde_json::to_value(&masks).unwrap();
    assert_eq!(json["gen_mask"], json!([]));
}

#[test]
fn out_of_range_connection_is_reported() {
    let err = masks_from(json!({
        "Rooms": [{"x": 0, "y": 0, "size": 2}],
        "Connectivity": [{"source": {"index": 0}, "target": {"index": 3}}]
    }))
    .unwrap_err();
    assert!(matches!(err, Error::RoomIndexOutOfRange { index: 3, room_count: 1, .. }));
}

fn house_row(x: f64, y: f64, room_type: usize, cluster: usize, padding: f64) -> Vec<f64> {
    let mut row = vec![0.0; 96];
    row[0] = x;
    row[1] = y;
    row[ROOM_TYPE_COLUMNS.start + room_type] = 0.9;
    row[ROOM_INDEX_COLUMNS.start + cluster] = 0.8;
    row[PADDING_COLUMN] = padding;
    row
}

#[test]
fn decode_from_json_batch() {
    let sample = vec![
        house_row(-1.0, -1.0, 1, 0, 0.0),
        house_row(0.0, -1.0, 1, 0, 0.0),
        house_row(0.0, 0.0, 1, 0, 0.0),
        house_row(-1.0, 0.0, 1, 0, 0.0),
        house_row(0.0, 0.0, 4, 1, 0.0),
        house_row(1.0, 0.0, 4, 1, 0.0),
        house_row(1.0, 1.0, 4, 1, 0.0),
        house_row(0.3, 0.3, 0, 0, 1.0),
    ];
    let tensor = HouseTensor::from_json(&json!({"houses": [sample]})).unwrap();
    assert!(tensor.width() >= MIN_WIDTH);

    let polygons = decode_polygons(&tensor);
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].points.len(), 4);
    assert_eq!(polygons[0].color.hex(), "#EE4D4D");
    assert_eq!(polygons[1].points.len(), 3);
    assert_eq!(polygons[1].color.hex(), "#BEBEBE");
    assert_eq!(polygons[1].points[2].x, 256.0);
    assert_eq!(polygons[1].points[2].y, 256.0);

    let json = serde_json::to_value(&polygons).unwrap();
    assert_eq!(json[0]["color"], "#EE4D4D");
    assert_eq!(json[1]["cluster"], 1);
}

#[test]
fn decode_all_padding_is_empty() {
    let sample: Vec<Vec<f64>> = (0..4).map(|_| house_row(0.0, 0.0, 1, 0, 1.0)).collect();
    let tensor = HouseTensor::from_batch(&[sample]).unwrap();
    assert!(decode_polygons(&tensor).is_empty());
}

#[test]
fn narrow_tensor_is_a_format_error() {
    let err = HouseTensor::from_json(&json!({"houses": [[[0.0, 0.0, 1.0]]]})).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}
