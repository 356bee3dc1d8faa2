/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “eopatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use eopatch_common::geo::{GeoMultiPolygon,GeoPolygon,GeoRect};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_rect() {
    let rect = GeoRect::from_wsen( 10.0, 40.0, 12.0, 41.0);
    println!("rect: {rect}");

    assert_eq!( rect.west(), 10.0);
    assert_eq!( rect.south(), 40.0);
    assert_eq!( rect.east(), 12.0);
    assert_eq!( rect.north(), 41.0);
    assert_eq!( rect.width(), 2.0);
    assert_eq!( rect.height(), 1.0);
    assert_eq!( rect.extent(), (10.0, 12.0, 40.0, 41.0));

    let poly = rect.to_polygon();
    assert!( !poly.is_degenerate());
    assert_eq!( poly.exterior_coords_count(), 5); // closed ring
}

#[test]
fn test_rect_serde() {
    let rect = GeoRect::from_wsen( 10.0, 40.0, 12.0, 41.0);

    let s = serde_json::to_string( &rect).unwrap();
    println!("serialized GeoRect: '{s}'");

    let rect1: GeoRect = serde_json::from_str( &s).unwrap();
    assert_eq!( rect, rect1);
}

#[test]
fn test_polygon_parts() {
    let part = GeoPolygon::from_exterior_coords( vec![ (0.0,0.0), (4.0,0.0), (4.0,4.0), (0.0,4.0)]);
    assert!( !part.is_degenerate());

    let ring = part.exterior_coords();
    assert_eq!( *ring.first().unwrap(), *ring.last().unwrap()); // geo closes the ring

    assert!( GeoPolygon::empty().is_degenerate());

    let multi = GeoMultiPolygon::from_parts( vec![ part.clone(), GeoPolygon::empty(), part]);
    assert_eq!( multi.len(), 3);
    assert_eq!( multi.iter().filter( |p| p.is_degenerate()).count(), 1);

    let single = GeoMultiPolygon::from( GeoPolygon::from_exterior_coords( vec![ (0.0,0.0), (1.0,0.0), (1.0,1.0)]));
    assert_eq!( single.len(), 1);
}
