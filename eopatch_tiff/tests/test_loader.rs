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

use std::fs::{self,File};
use std::io::Write;
use std::path::Path;

use chrono::Datelike;
use flate2::Compression;
use flate2::write::GzEncoder;
use ndarray::{array, Array2};

use eopatch_common::{Feature,FeatureArray,FeatureKind};
use eopatch_common::geo::GeoRect;
use eopatch_tiff::errors::EopatchTiffError;
use eopatch_tiff::{load_tiffs, write_gray_geotiff, DataSource, TiffLoaderConfig};

// run with "cargo test test_xx -- --nocapture"

fn tile_bbox ()->GeoRect {
    GeoRect::from_wsen( 10.0, 40.0, 11.0, 41.0)
}

fn write_tile (dir: &Path, name: &str, pixels: &Array2<f32>) {
    write_gray_geotiff( dir.join( name), pixels, Some( &tile_bbox()), None).unwrap();
}

/// replace a plain tile with its gzipped form, the way the archives deliver them
fn gzip_tile (dir: &Path, name: &str) {
    let path = dir.join( name);
    let bytes = fs::read( &path).unwrap();

    let mut gz = GzEncoder::new( File::create( dir.join( format!("{name}.gz"))).unwrap(), Compression::default());
    gz.write_all( &bytes).unwrap();
    gz.finish().unwrap();

    fs::remove_file( &path).unwrap();
}

#[test]
fn test_load_timeless_compressed() {
    let dir = tempfile::tempdir().unwrap();
    write_tile( dir.path(), "dem.tif", &array![[1.0f32, 2.0], [3.0, 4.0]]);
    gzip_tile( dir.path(), "dem.tif");

    let feature = Feature::new( FeatureKind::DataTimeless, "DEM");
    let patch = load_tiffs( dir.path(), &feature, None, DataSource::S5p, &TiffLoaderConfig::default()).unwrap();

    // the archive is unpacked and removed
    assert!( !dir.path().join( "dem.tif.gz").exists());
    assert!( dir.path().join( "dem.tif").is_file());

    assert!( patch.timestamps().is_empty());
    assert_eq!( patch.bbox(), Some( &tile_bbox()));

    match patch.feature( &feature).unwrap() {
        FeatureArray::Static(a) => {
            assert_eq!( a.dim(), (2,2,1));
            assert_eq!( a[[0,1,0]], 2.0);
            assert_eq!( a[[1,0,0]], 3.0);
        }
        _ => panic!("expected a time-independent feature array"),
    }
}

#[test]
fn test_load_series() {
    let dir = tempfile::tempdir().unwrap();
    write_tile( dir.path(), "t2m_day2102_h00.tif", &array![[2.0f32, 2.0], [2.0, 2.0]]);
    write_tile( dir.path(), "t2m_day2101_h00.tif", &array![[1.0f32, 1.0], [1.0, 1.0]]);
    write_tile( dir.path(), "t2m_day2103_h12.tif", &array![[3.0f32, 3.0], [3.0, 3.0]]);

    let feature = Feature::new( FeatureKind::Data, "T2M");
    let patch = load_tiffs( dir.path(), &feature, None, DataSource::Era5, &TiffLoaderConfig::default()).unwrap();

    // one timestamp per tile, in sorted tile order
    assert_eq!( patch.timestamps().len(), 3);
    assert_eq!( patch.timestamps()[0].ordinal(), 1);
    assert_eq!( patch.timestamps()[1].ordinal(), 2);
    assert_eq!( patch.timestamps()[2].ordinal(), 3);

    match patch.feature( &feature).unwrap() {
        FeatureArray::Series(a) => {
            assert_eq!( a.dim(), (3,2,2,1));
            assert_eq!( a[[0,0,0,0]], 1.0); // slice order matches timestamp order
            assert_eq!( a[[1,0,0,0]], 2.0);
            assert_eq!( a[[2,0,0,0]], 3.0);
        }
        _ => panic!("expected a time-dependent feature array"),
    }
}

#[test]
fn test_load_single_filename() {
    let dir = tempfile::tempdir().unwrap();
    write_tile( dir.path(), "dem.tif", &array![[1.0f32, 2.0], [3.0, 4.0]]);
    write_tile( dir.path(), "other.tif", &array![[9.0f32, 9.0], [9.0, 9.0]]);

    let feature = Feature::new( FeatureKind::DataTimeless, "DEM");
    let patch = load_tiffs( dir.path(), &feature, Some("dem.tif"), DataSource::S5p, &TiffLoaderConfig::default()).unwrap();

    match patch.feature( &feature).unwrap() {
        FeatureArray::Static(a) => assert_eq!( a[[0,0,0]], 1.0),
        _ => panic!("expected a time-independent feature array"),
    }
}

#[test]
fn test_wrong_file_counts() {
    let dir = tempfile::tempdir().unwrap();

    // no tiles at all for a time-dependent feature
    let feature = Feature::new( FeatureKind::Data, "T2M");
    let res = load_tiffs( dir.path(), &feature, None, DataSource::Era5, &TiffLoaderConfig::default());
    assert!( matches!( res, Err(EopatchTiffError::FileCountError(_))));

    // a single tile is not a time series either
    write_tile( dir.path(), "t2m_day2101_h00.tif", &array![[1.0f32, 1.0], [1.0, 1.0]]);
    let res = load_tiffs( dir.path(), &feature, None, DataSource::Era5, &TiffLoaderConfig::default());
    assert!( matches!( res, Err(EopatchTiffError::FileCountError(_))));

    // more than one tile for a time-independent feature
    write_tile( dir.path(), "t2m_day2102_h00.tif", &array![[2.0f32, 2.0], [2.0, 2.0]]);
    let feature = Feature::new( FeatureKind::DataTimeless, "T2M");
    let res = load_tiffs( dir.path(), &feature, None, DataSource::Era5, &TiffLoaderConfig::default());
    assert!( matches!( res, Err(EopatchTiffError::FileCountError(_))));
}

#[test]
fn test_keep_compressed() {
    let dir = tempfile::tempdir().unwrap();
    write_tile( dir.path(), "dem.tif", &array![[1.0f32, 2.0], [3.0, 4.0]]);
    gzip_tile( dir.path(), "dem.tif");

    let config = TiffLoaderConfig { keep_compressed: true, ..TiffLoaderConfig::default() };
    let feature = Feature::new( FeatureKind::DataTimeless, "DEM");
    load_tiffs( dir.path(), &feature, None, DataSource::S5p, &config).unwrap();

    assert!( dir.path().join( "dem.tif.gz").is_file());
    assert!( dir.path().join( "dem.tif").is_file());
}

#[test]
fn test_no_data_substitution() {
    let dir = tempfile::tempdir().unwrap();
    write_gray_geotiff( dir.path().join( "dem.tif"),
                        &array![[-999.0f32, 2.0], [3.0, 4.0]], Some( &tile_bbox()), Some(-999.0)).unwrap();

    let feature = Feature::new( FeatureKind::DataTimeless, "DEM");
    let patch = load_tiffs( dir.path(), &feature, None, DataSource::S5p, &TiffLoaderConfig::default()).unwrap();

    match patch.feature( &feature).unwrap() {
        FeatureArray::Static(a) => {
            assert!( a[[0,0,0]].is_nan());
            assert_eq!( a[[0,1,0]], 2.0);
        }
        _ => panic!("expected a time-independent feature array"),
    }
}

#[test]
fn test_loader_config_ron() {
    let config: TiffLoaderConfig = ron::from_str( "( day_offset: 42 )").unwrap();

    assert_eq!( config.day_offset, 42);
    assert!( config.no_data_value.is_nan());
    assert!( !config.keep_compressed);
}
