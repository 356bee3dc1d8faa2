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

//! acquisition timestamp parsing for the tile filename conventions of the supported
//! data source archives.
//!
//! With the exception of MODIS the archives encode acquisition times as a shifted
//! day-of-year plus an hour field, e.g.
//! ```text
//!         NO2_day2101_T00.tif         (s5p - day 2101, 00:00 UTC)
//!         S3A_SYN_2105_T03.tif        (s3)
//!         t2m_day2130_h12.tif         (era5/cams)
//! ```
//! The day value is corrected by subtracting a fixed archive offset (2100 unless configured
//! otherwise) before it is interpreted as ordinal day. Since the filenames carry no year the
//! corrected day/hour is anchored in a fixed reference year.
//!
//! MODIS tiles use the standard `A«year»«day-of-year»` acquisition field instead:
//! ```text
//!         MOD09.A2020045.h20v10.006.tif
//! ```

use std::str::FromStr;

use chrono::{DateTime,Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumString};

use eopatch_common::datetime::doy_datetime;
use crate::errors::{Result, EopatchTiffError, filename_parse_error};

/// the day-of-year shift of the source archives that use offset encoded days
pub const DEFAULT_DAY_OFFSET: i64 = 2100;

/// offset encoded tile names have no year field - corrected day/hour values are anchored here
pub const REFERENCE_YEAR: i32 = 1900;

lazy_static! {
    static ref MODIS_DTG_RE: Regex = Regex::new( r"^A(\d{4})(\d{3})$").unwrap();
}

/* #region data sources *******************************************************************************************/

/// the closed set of supported tile archives. Source selection happens over the lowercase
/// key ("s3", "s5p", "modis", "era5", "cams") - anything else is rejected before we touch
/// the filesystem
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString)]
#[strum(serialize_all="lowercase")]
#[serde(rename_all="lowercase")]
pub enum DataSource {
    S3,
    S5p,
    Modis,
    Era5,
    Cams,
}

impl DataSource {
    pub fn from_key (key: &str)->Result<Self> {
        Self::from_str( key).map_err( |_| EopatchTiffError::UnknownDataSourceError( key.to_string()))
    }

    /// parse one timestamp per tile name, in sorted tile name order
    pub fn parse_timestamps (&self, tiles: &[String], offset: i64)->Result<Vec<DateTime<Utc>>> {
        match self {
            DataSource::S3 => parse_offset_timestamps( tiles, "_SYN_", 'T', offset),
            DataSource::S5p => parse_offset_timestamps( tiles, "_day", 'T', offset),
            DataSource::Era5 | DataSource::Cams => parse_offset_timestamps( tiles, "_day", 'h', offset),
            DataSource::Modis => parse_modis_timestamps( tiles),
        }
    }
}

/* #endregion data sources */

/* #region offset encoded tile names ******************************************************************************/

fn parse_offset_timestamps (tiles: &[String], marker: &str, hour_marker: char, offset: i64)->Result<Vec<DateTime<Utc>>> {
    let mut sorted: Vec<&String> = tiles.iter().collect();
    sorted.sort();

    let mut timestamps: Vec<DateTime<Utc>> = Vec::with_capacity( sorted.len());
    for tile in sorted {
        timestamps.push( parse_offset_timestamp( tile, marker, hour_marker, offset)?);
    }
    Ok(timestamps)
}

fn parse_offset_timestamp (tile: &str, marker: &str, hour_marker: char, offset: i64)->Result<DateTime<Utc>> {
    let tail = tile.rsplit( marker).next().unwrap_or( tile); // the segment after the last marker

    let fields: Vec<&str> = tail.split('_').collect();
    if fields.len() != 2 {
        return Err( filename_parse_error( format!("no {marker}«day»_«hour» fields in tile name {tile:?}")));
    }

    let day: i64 = fields[0].parse()
        .map_err( |_| filename_parse_error( format!("non-numeric day field in tile name {tile:?}")))?;
    let doy = day - offset;
    if doy < 1 || doy > 366 {
        return Err( filename_parse_error( format!("corrected day-of-year {doy} out of range in tile name {tile:?}")));
    }

    let hour = parse_hour( fields[1], hour_marker)
        .ok_or_else( || filename_parse_error( format!("invalid hour field in tile name {tile:?}")))?;

    doy_datetime( REFERENCE_YEAR, doy as u32, hour)
        .ok_or_else( || filename_parse_error( format!("no valid acquisition time in tile name {tile:?}")))
}

/// the first three chars of the hour field carry the hour of day, either as «marker»HH
/// or as bare digits with possible trailing decoration
fn parse_hour (field: &str, hour_marker: char)->Option<u32> {
    let tok = field.get(..3).unwrap_or( field);
    let digits = match tok.strip_prefix( hour_marker) {
        Some(rest) => rest,
        None => tok.get(..2).unwrap_or( tok),
    };

    let hour: u32 = digits.parse().ok()?;
    if hour < 24 { Some(hour) } else { None }
}

/* #endregion offset encoded tile names */

/* #region modis tile names ***************************************************************************************/

fn parse_modis_timestamps (tiles: &[String])->Result<Vec<DateTime<Utc>>> {
    let mut sorted: Vec<&String> = tiles.iter().collect();
    sorted.sort();

    let mut timestamps: Vec<DateTime<Utc>> = Vec::with_capacity( sorted.len());
    for tile in sorted {
        timestamps.push( parse_modis_timestamp( tile)?);
    }
    Ok(timestamps)
}

fn parse_modis_timestamp (tile: &str)->Result<DateTime<Utc>> {
    let field = tile.split('.').nth(1)
        .ok_or_else( || filename_parse_error( format!("no acquisition field in tile name {tile:?}")))?;
    let cap = MODIS_DTG_RE.captures( field)
        .ok_or_else( || filename_parse_error( format!("no A«year»«day-of-year» acquisition field in tile name {tile:?}")))?;

    let year: i32 = cap[1].parse()?;
    let doy: u32 = cap[2].parse()?;

    doy_datetime( year, doy, 0)
        .ok_or_else( || filename_parse_error( format!("invalid day-of-year {doy} in tile name {tile:?}")))
}

/* #endregion modis tile names */
