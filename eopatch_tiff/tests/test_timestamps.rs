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

use chrono::{Datelike,TimeZone,Timelike,Utc};

use eopatch_tiff::{DataSource, DEFAULT_DAY_OFFSET, REFERENCE_YEAR};
use eopatch_tiff::errors::EopatchTiffError;

// run with "cargo test test_xx -- --nocapture"

fn tiles (names: &[&str])->Vec<String> {
    names.iter().map( |s| s.to_string()).collect()
}

#[test]
fn test_s5p_timestamps() {
    let tiles = tiles( &["tileA_day2101_000.tif", "tileA_day2102_120.tif"]);
    let ts = DataSource::S5p.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();

    assert_eq!( ts.len(), 2);
    assert_eq!( ts[0], Utc.with_ymd_and_hms( REFERENCE_YEAR, 1, 1, 0, 0, 0).unwrap());
    assert_eq!( ts[1], Utc.with_ymd_and_hms( REFERENCE_YEAR, 1, 2, 12, 0, 0).unwrap());
}

#[test]
fn test_s5p_hour_marker() {
    let tiles = tiles( &["NO2_day2101_T06.tif"]);
    let ts = DataSource::S5p.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();
    assert_eq!( ts[0].hour(), 6);
}

#[test]
fn test_s3_timestamps() {
    let tiles = tiles( &["S3A_SYN_2105_T03.tif"]);
    let ts = DataSource::S3.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();
    assert_eq!( ts[0], Utc.with_ymd_and_hms( REFERENCE_YEAR, 1, 5, 3, 0, 0).unwrap());
}

#[test]
fn test_era5_timestamps() {
    let tiles = tiles( &["t2m_day2130_h12.tif", "t2m_day2131_h00.tif"]);
    let ts = DataSource::Era5.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();

    assert_eq!( ts[0], Utc.with_ymd_and_hms( REFERENCE_YEAR, 1, 30, 12, 0, 0).unwrap());
    assert_eq!( ts[1], Utc.with_ymd_and_hms( REFERENCE_YEAR, 1, 31, 0, 0, 0).unwrap());

    // cams archives share the era5 naming convention
    let ts1 = DataSource::Cams.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();
    assert_eq!( ts, ts1);
}

#[test]
fn test_modis_timestamps() {
    let tiles = tiles( &["MOD09.A2020045.h20v10.006.tif"]);
    let ts = DataSource::Modis.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();

    assert_eq!( ts[0].year(), 2020);
    assert_eq!( ts[0].ordinal(), 45);
    assert_eq!( ts[0].hour(), 0);
}

#[test]
fn test_order_and_length() {
    // unsorted input still yields one timestamp per tile, in sorted tile name order
    let tiles = tiles( &["b_day2103_000.tif", "a_day2101_000.tif", "ab_day2102_000.tif"]);
    let ts = DataSource::S5p.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();

    assert_eq!( ts.len(), tiles.len());
    assert_eq!( ts[0].ordinal(), 1);
    assert_eq!( ts[1].ordinal(), 2);
    assert_eq!( ts[2].ordinal(), 3);
}

#[test]
fn test_day_offset_round_trip() {
    for raw in [2101i64, 2150, 2465] {
        let tiles = vec![ format!("tile_day{raw}_000.tif")];
        let ts = DataSource::S5p.parse_timestamps( &tiles, DEFAULT_DAY_OFFSET).unwrap();
        assert_eq!( ts[0].ordinal() as i64, raw - DEFAULT_DAY_OFFSET);
    }
}

#[test]
fn test_malformed_tile_names() {
    for name in ["tileA.tif", "tileA_dayXX_000.tif", "tileA_day2101.tif", "tileA_day2000_000.tif", "tileA_day2101_xx.tif"] {
        let res = DataSource::S5p.parse_timestamps( &tiles( &[name]), DEFAULT_DAY_OFFSET);
        assert!( matches!( res, Err(EopatchTiffError::FilenameParseError(_))), "{name} should not parse");
    }

    let res = DataSource::Modis.parse_timestamps( &tiles( &["MOD09_A2020045.tif"]), DEFAULT_DAY_OFFSET);
    assert!( matches!( res, Err(EopatchTiffError::FilenameParseError(_))));
}

#[test]
fn test_source_keys() {
    for key in ["s3", "s5p", "modis", "era5", "cams"] {
        let source = DataSource::from_key( key).unwrap();
        assert_eq!( format!("{source}"), key);
    }

    assert!( matches!( DataSource::from_key( "landsat"), Err(EopatchTiffError::UnknownDataSourceError(_))));
    assert!( DataSource::from_key( "S5P").is_err()); // keys are lowercase
}
