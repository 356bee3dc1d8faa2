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

//! common base layer of the eopatch crates: the in-memory `EoPatch` model that holds
//! geo-referenced raster features of tiled satellite products, plus the geometry,
//! datetime and filesystem support modules shared by the loader and plot crates

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime,Utc};
use ndarray::{Array2, Array3, Array4, ArrayView3, Axis};
use serde::{Serialize,Deserialize};
use strum::{Display,EnumString};

pub mod errors;
pub mod geo;
pub mod datetime;
pub mod fs;

use crate::errors::{Result, EopatchError, band_index_error, feature_shape_error, time_index_error, timestamp_mismatch};
use crate::geo::GeoRect;

/* #region feature descriptors ************************************************************************************/

/// the temporal/value class of a named patch array
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString)]
#[strum(serialize_all="snake_case")]
#[serde(rename_all="snake_case")]
pub enum FeatureKind {
    Data,
    Mask,
    DataTimeless,
    MaskTimeless,
}

impl FeatureKind {
    pub fn is_time_dependent (&self)->bool {
        matches!( self, FeatureKind::Data | FeatureKind::Mask)
    }
}

/// identifies a named array slot within an EoPatch
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct Feature {
    pub kind: FeatureKind,
    pub name: String,
}

impl Feature {
    pub fn new (kind: FeatureKind, name: impl ToString)->Self {
        Feature { kind, name: name.to_string() }
    }

    pub fn is_time_dependent (&self)->bool { self.kind.is_time_dependent() }
}

impl fmt::Display for Feature {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// parse "«kind»:«name»" specs, e.g. "data:NO2" or "data_timeless:DEM"
impl FromStr for Feature {
    type Err = EopatchError;

    fn from_str (s: &str) -> Result<Self> {
        let (kind,name) = s.split_once(':')
            .ok_or_else( || EopatchError::FeatureParseError( format!("not a «kind»:«name» feature spec: {s:?}")))?;
        let kind = FeatureKind::from_str( kind)
            .map_err( |_| EopatchError::FeatureParseError( format!("unknown feature kind in {s:?}")))?;
        Ok( Feature::new( kind, name))
    }
}

/* #endregion feature descriptors */

/* #region feature arrays *****************************************************************************************/

/// pixel data of one feature. Time-dependent features are stacked as (time, height, width, bands),
/// time-independent ones as (height, width, bands)
#[derive(Debug,Clone)]
pub enum FeatureArray {
    Series( Array4<f32>),
    Static( Array3<f32>),
}

impl FeatureArray {
    pub fn is_time_dependent (&self)->bool {
        matches!( self, FeatureArray::Series(_))
    }

    /// the length of the time axis (None for time-independent arrays)
    pub fn time_len (&self)->Option<usize> {
        match self {
            FeatureArray::Series(a) => Some( a.dim().0),
            FeatureArray::Static(_) => None,
        }
    }

    pub fn shape (&self)->&[usize] {
        match self {
            FeatureArray::Series(a) => a.shape(),
            FeatureArray::Static(a) => a.shape(),
        }
    }
}

/* #endregion feature arrays */

/* #region EoPatch ************************************************************************************************/

/// in-memory bundle of geo-referenced raster data: a bounding box, an ordered timestamp
/// sequence and any number of named feature arrays. The timestamp sequence always has the
/// same length as the time axis of every time-dependent feature
#[derive(Debug,Clone,Default)]
pub struct EoPatch {
    bbox: Option<GeoRect>,
    timestamps: Vec<DateTime<Utc>>,
    features: HashMap<Feature,FeatureArray>,
}

impl EoPatch {
    pub fn new ()->Self {
        EoPatch { bbox: None, timestamps: Vec::new(), features: HashMap::new() }
    }

    pub fn bbox (&self)->Option<&GeoRect> { self.bbox.as_ref() }

    pub fn set_bbox (&mut self, bbox: GeoRect) { self.bbox = Some(bbox); }

    pub fn timestamps (&self)->&[DateTime<Utc>] { &self.timestamps }

    /// set the acquisition times of this patch. The sequence length has to match the
    /// time axis of every time-dependent feature that is already stored
    pub fn set_timestamps (&mut self, timestamps: Vec<DateTime<Utc>>)->Result<()> {
        for (feature,array) in &self.features {
            if let Some(t_len) = array.time_len() {
                if t_len != timestamps.len() {
                    return Err( timestamp_mismatch( format!(
                        "{} timestamps for feature {feature} with {t_len} time slices", timestamps.len())));
                }
            }
        }
        self.timestamps = timestamps;
        Ok(())
    }

    /// store a feature array. The array temporal class has to match the descriptor, and a
    /// time-dependent array has to agree with already set timestamps
    pub fn add_feature (&mut self, feature: Feature, array: FeatureArray)->Result<()> {
        if feature.is_time_dependent() != array.is_time_dependent() {
            return Err( feature_shape_error( format!(
                "array temporal class does not match feature {feature}")));
        }
        if let Some(t_len) = array.time_len() {
            if !self.timestamps.is_empty() && t_len != self.timestamps.len() {
                return Err( timestamp_mismatch( format!(
                    "feature {feature} has {t_len} time slices but patch has {} timestamps", self.timestamps.len())));
            }
        }
        self.features.insert( feature, array);
        Ok(())
    }

    pub fn feature (&self, feature: &Feature)->Result<&FeatureArray> {
        self.features.get( feature)
            .ok_or_else( || EopatchError::NoSuchFeatureError( feature.to_string()))
    }

    pub fn features (&self)->impl Iterator<Item=(&Feature,&FeatureArray)> {
        self.features.iter()
    }

    /// extract a single (height, width) band plane. Time-dependent features require a time index,
    /// time-independent ones reject it. Without an explicit band the feature has to be single-band
    pub fn band_slice (&self, feature: &Feature, time_idx: Option<usize>, band: Option<usize>)->Result<Array2<f32>> {
        match self.feature( feature)? {
            FeatureArray::Series(a) => {
                let t = time_idx.ok_or_else( || time_index_error( format!(
                    "time-dependent feature {feature} requires a time index")))?;
                if t >= a.dim().0 {
                    return Err( time_index_error( format!(
                        "time index {t} out of range for feature {feature} with {} slices", a.dim().0)));
                }
                extract_band( feature, &a.index_axis( Axis(0), t), band)
            }
            FeatureArray::Static(a) => {
                if let Some(t) = time_idx {
                    return Err( time_index_error( format!(
                        "time-independent feature {feature} cannot take time index {t}")));
                }
                extract_band( feature, &a.view(), band)
            }
        }
    }

    /// extract a (height, width, 3) band composite of a time-dependent feature, in the given band order
    pub fn rgb_slice (&self, feature: &Feature, time_idx: usize, bands: &[usize;3])->Result<Array3<f32>> {
        match self.feature( feature)? {
            FeatureArray::Series(a) => {
                if time_idx >= a.dim().0 {
                    return Err( time_index_error( format!(
                        "time index {time_idx} out of range for feature {feature} with {} slices", a.dim().0)));
                }
                let n_bands = a.dim().3;
                for &b in bands {
                    if b >= n_bands {
                        return Err( band_index_error( format!(
                            "band {b} out of range for feature {feature} with {n_bands} bands")));
                    }
                }
                Ok( a.index_axis( Axis(0), time_idx).select( Axis(2), bands))
            }
            FeatureArray::Static(_) => Err( time_index_error( format!(
                "band composites need a time-dependent feature, not {feature}"))),
        }
    }
}

fn extract_band (feature: &Feature, a: &ArrayView3<f32>, band: Option<usize>)->Result<Array2<f32>> {
    let n_bands = a.dim().2;

    match band {
        Some(b) => {
            if b >= n_bands {
                return Err( band_index_error( format!(
                    "band {b} out of range for feature {feature} with {n_bands} bands")));
            }
            Ok( a.index_axis( Axis(2), b).to_owned())
        }
        None => {
            if n_bands != 1 {
                return Err( band_index_error( format!(
                    "feature {feature} has {n_bands} bands, band index required")));
            }
            Ok( a.index_axis( Axis(2), 0).to_owned())
        }
    }
}

/* #endregion EoPatch */
