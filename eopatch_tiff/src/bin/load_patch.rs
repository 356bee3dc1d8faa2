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

use std::path::PathBuf;

use clap::Parser;

use eopatch_common::Feature;
use eopatch_common::datetime::short_utc_datetime_string;
use eopatch_tiff::errors::Result;
use eopatch_tiff::{load_tiffs, DataSource, TiffLoaderConfig, DEFAULT_DAY_OFFSET};

#[derive(Parser)]
#[command(about="load a directory of single-band GeoTIFF tiles into an EoPatch and print its contents")]
struct Args {
    /// tile directory
    dir: PathBuf,

    /// feature spec as «kind»:«name», e.g. "data:NO2" or "data_timeless:DEM"
    feature: String,

    /// data source key of the tile naming convention (s3, s5p, modis, era5, cams)
    #[arg(long, default_value="s5p")]
    source: String,

    /// only consider this directory entry
    #[arg(long)]
    filename: Option<String>,

    /// day-of-year shift of offset encoded tile names
    #[arg(long, default_value_t=DEFAULT_DAY_OFFSET)]
    day_offset: i64,

    /// the value no-data pixels are mapped to
    #[arg(long, default_value_t=f32::NAN)]
    no_data_value: f32,

    /// keep compressed originals around after unpacking them
    #[arg(long)]
    keep_compressed: bool,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let source = DataSource::from_key( &args.source)?;
    let feature: Feature = args.feature.parse()?;
    let config = TiffLoaderConfig {
        no_data_value: args.no_data_value,
        day_offset: args.day_offset,
        keep_compressed: args.keep_compressed,
    };

    let patch = load_tiffs( &args.dir, &feature, args.filename.as_deref(), source, &config)?;

    if let Some(bbox) = patch.bbox() {
        println!("bbox: {bbox}");
    }
    if !patch.timestamps().is_empty() {
        println!("timestamps ({}):", patch.timestamps().len());
        for ts in patch.timestamps() {
            println!("  {}", short_utc_datetime_string( ts));
        }
    }
    for (feature,array) in patch.features() {
        println!("{feature}: {:?}", array.shape());
    }

    Ok(())
}
