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

/// geometry primitives for patch footprints.
/// Following eopatch design principles we build on the [geo](https://docs.rs/geo/latest/geo/index.html)
/// crate and use the Rust [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html)
/// pattern to pin down our own value semantics. Coordinates are plain f64 in whatever (projected)
/// reference system the source tiles use - we do not interpret them.

use std::fmt;
use serde::{Serialize,Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use serde::de::{Deserialize as DeserializeTrait, Deserializer};
use geo::{Coord, CoordsIter, LineString, MultiPolygon, Polygon, Rect};

pub type GeoCoord = Coord<f64>;

/* #region GeoRect ***********************************************************************************************/

/// a wrapper for geo::Rect - the axis aligned bounding box of a patch
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect( Rect::new( Coord{ x: west, y: south}, Coord{ x: east, y: north}))
    }

    #[inline] pub fn west(&self)->f64 { self.0.min().x }
    #[inline] pub fn east(&self)->f64 { self.0.max().x }
    #[inline] pub fn south(&self)->f64 { self.0.min().y }
    #[inline] pub fn north(&self)->f64 { self.0.max().y }

    #[inline] pub fn width(&self)->f64 { self.0.width() }
    #[inline] pub fn height(&self)->f64 { self.0.height() }

    /// bounds in (min_x, max_x, min_y, max_y) order, the convention plotting surfaces use
    pub fn extent (&self)->(f64,f64,f64,f64) {
        (self.west(), self.east(), self.south(), self.north())
    }

    pub fn to_polygon (&self)->GeoPolygon {
        GeoPolygon( self.0.to_polygon())
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west(), self.south(), self.east(), self.north())
    }
}

impl SerializeTrait for GeoRect {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoRect", 4)?;
        state.serialize_field("west", &self.west())?;
        state.serialize_field("south", &self.south())?;
        state.serialize_field("east", &self.east())?;
        state.serialize_field("north", &self.north())?;
        state.end()
    }
}

impl<'de> DeserializeTrait<'de> for GeoRect {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        #[derive(Deserialize)]
        struct Wsen { west: f64, south: f64, east: f64, north: f64 }

        let wsen = Wsen::deserialize( deserializer)?;
        Ok( GeoRect::from_wsen( wsen.west, wsen.south, wsen.east, wsen.north))
    }
}

/* #endregion GeoRect */

/* #region GeoPolygon **********************************************************************************************/

/// a wrapper for geo::Polygon
#[derive(Debug,Clone,PartialEq)]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    pub fn from_exterior_coords (coords: Vec<(f64,f64)>) -> Self {
        GeoPolygon( Polygon::new( LineString::from( coords), Vec::with_capacity(0)))
    }

    /// a part without any exterior ring - the degenerate placeholder we skip when drawing
    pub fn empty () -> Self {
        GeoPolygon( Polygon::new( LineString::new( Vec::new()), Vec::with_capacity(0)))
    }

    pub fn is_degenerate (&self)->bool {
        self.0.exterior().coords_count() == 0
    }

    /// the closed exterior ring as (x,y) pairs
    pub fn exterior_coords (&self)->Vec<(f64,f64)> {
        self.0.exterior().coords().map( |c| (c.x, c.y)).collect()
    }

    pub fn exterior_coords_count (&self)->usize {
        self.0.exterior().coords_count()
    }
}

impl From<Polygon> for GeoPolygon {
    fn from (poly: Polygon)->Self { GeoPolygon(poly) }
}

/* #endregion GeoPolygon */

/* #region GeoMultiPolygon *****************************************************************************************/

/// an ordered collection of polygon parts. This is what the drawing helpers iterate over so
/// that single- and multi-part footprints go through the same code path
#[derive(Debug,Clone,PartialEq)]
pub struct GeoMultiPolygon(Vec<GeoPolygon>);

impl GeoMultiPolygon {
    pub fn from_parts (parts: Vec<GeoPolygon>) -> Self {
        GeoMultiPolygon(parts)
    }

    pub fn len (&self)->usize { self.0.len() }

    pub fn is_empty (&self)->bool { self.0.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=&GeoPolygon> {
        self.0.iter()
    }
}

impl From<GeoPolygon> for GeoMultiPolygon {
    fn from (poly: GeoPolygon)->Self { GeoMultiPolygon( vec![poly]) }
}

impl From<MultiPolygon> for GeoMultiPolygon {
    fn from (mp: MultiPolygon)->Self {
        GeoMultiPolygon( mp.into_iter().map( GeoPolygon::from).collect())
    }
}

/* #endregion GeoMultiPolygon */
