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

use std::fs;
use std::path::Path;

use serde::{Serialize,Deserialize};
use tracing::{debug,info};

use eopatch_common::{EoPatch,Feature};
use eopatch_common::fs::{get_filename_extension, gunzip_file, sorted_dir_filenames};

use crate::TiffImporter;
use crate::errors::{Result, file_count_error};
use crate::timestamps::{DataSource, DEFAULT_DAY_OFFSET};

pub const GZ_SUFFIX: &str = ".gz";
pub const TIF_EXTENSION: &str = "tif";

/// tile loading options
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TiffLoaderConfig {
    /// the value no-data pixels are mapped to
    #[serde(default="default_no_data_value")]
    pub no_data_value: f32,

    /// day-of-year shift of offset encoded tile names
    #[serde(default="default_day_offset")]
    pub day_offset: i64,

    /// keep compressed originals around after unpacking them
    #[serde(default)]
    pub keep_compressed: bool,
}

impl Default for TiffLoaderConfig {
    fn default ()->Self {
        TiffLoaderConfig {
            no_data_value: default_no_data_value(),
            day_offset: default_day_offset(),
            keep_compressed: false,
        }
    }
}

fn default_no_data_value ()->f32 { f32::NAN }
fn default_day_offset ()->i64 { DEFAULT_DAY_OFFSET }

/// load a directory of single-band GeoTIFF tiles into an EoPatch.
///
/// If `filename` is set only that directory entry is considered. Gzipped tiles are unpacked
/// in place first and the compressed originals are removed unless `config.keep_compressed`
/// (note the removal makes this a destructive operation on `dir`). A time-independent
/// `feature` requires exactly one tile and yields a patch without time axis; a time-dependent
/// one requires more than one tile and yields a patch whose timestamps are parsed from the
/// sorted tile names according to `source`
pub fn load_tiffs (dir: impl AsRef<Path>, feature: &Feature, filename: Option<&str>,
                   source: DataSource, config: &TiffLoaderConfig)->Result<EoPatch> {
    let dir = dir.as_ref();

    let mut tiles: Vec<String> = match filename {
        Some(fname) => vec![fname.to_string()],
        None => sorted_dir_filenames( dir)?,
    };
    tiles.retain( |tile| !dir.join(tile).is_dir());

    // unpack compressed tiles and drop the archives
    for tile in &tiles {
        if let Some(unpacked) = tile.strip_suffix( GZ_SUFFIX) {
            let gz_path = dir.join( tile);
            debug!("unpacking {gz_path:?}");
            gunzip_file( &gz_path, dir.join( unpacked))?;
            if !config.keep_compressed {
                fs::remove_file( &gz_path)?;
            }
        }
    }

    // normalize to the unpacked names, then keep only the image tiles
    let mut tiles: Vec<String> = tiles.into_iter()
        .map( |tile| match tile.strip_suffix( GZ_SUFFIX) {
            Some(unpacked) => unpacked.to_string(),
            None => tile,
        })
        .filter( |tile| get_filename_extension( tile) == Some(TIF_EXTENSION))
        .collect();

    let importer = TiffImporter::new( dir).with_no_data_value( config.no_data_value);

    if !feature.is_time_dependent() {
        if tiles.len() != 1 {
            return Err( file_count_error( format!(
                "time-independent feature {feature} requires exactly one tile in {dir:?}, got {}", tiles.len())));
        }
        return importer.import_timeless( feature, &tiles[0]);
    }

    if tiles.len() < 2 {
        return Err( file_count_error( format!(
            "time-dependent feature {feature} requires more than one tile in {dir:?}, got {}", tiles.len())));
    }
    tiles.sort();

    let mut patch = importer.import_series( feature, &tiles, tiles.len())?;
    patch.set_timestamps( source.parse_timestamps( &tiles, config.day_offset)?)?;

    info!("loaded {} {} tiles from {dir:?}", tiles.len(), source);
    Ok(patch)
}
