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

//! single-band GeoTIFF import/export for EoPatches, built on the
//! [tiff](https://docs.rs/tiff/latest/tiff/) crate. Each tile file holds one band of one
//! acquisition time (or the sole band of a time-independent feature). The importer stacks
//! tile files into patch feature arrays, picks up the georeferencing tags as the patch
//! bounding box and maps declared no-data pixels

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path,PathBuf};

use ndarray::{s, Array2, Array4, Axis};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

use eopatch_common::{EoPatch, Feature, FeatureArray};
use eopatch_common::geo::GeoRect;

pub mod errors;
pub use errors::*;

pub mod timestamps;
pub use timestamps::*;

pub mod loader;
pub use loader::*;

/* #region import *************************************************************************************************/

/// one decoded tile file
struct Tile {
    pixels: Array2<f32>,
    bbox: Option<GeoRect>,
}

/// imports single-band tile files from a folder into EoPatch feature arrays
#[derive(Debug)]
pub struct TiffImporter {
    folder: PathBuf,
    no_data_value: f32,
}

impl TiffImporter {
    pub fn new (folder: impl AsRef<Path>)->Self {
        TiffImporter { folder: folder.as_ref().to_path_buf(), no_data_value: f32::NAN }
    }

    pub fn with_no_data_value (mut self, no_data_value: f32)->Self {
        self.no_data_value = no_data_value;
        self
    }

    /// import a single tile file as a time-independent (height, width, 1) feature
    pub fn import_timeless (&self, feature: &Feature, filename: &str)->Result<EoPatch> {
        let tile = self.read_tile( filename)?;

        let mut patch = EoPatch::new();
        if let Some(bbox) = tile.bbox { patch.set_bbox( bbox) }
        patch.add_feature( feature.clone(), FeatureArray::Static( tile.pixels.insert_axis( Axis(2))))?;

        Ok(patch)
    }

    /// import tile files as a (time, height, width, 1) feature, stacked in `filenames` order.
    /// All tiles have to agree on dimensions, the patch bounding box comes from the first one
    pub fn import_series (&self, feature: &Feature, filenames: &[String], timestamp_size: usize)->Result<EoPatch> {
        if filenames.len() != timestamp_size {
            return Err( file_count_error( format!(
                "{} tiles for a time series of length {timestamp_size}", filenames.len())));
        }

        let mut data: Option<Array4<f32>> = None;
        let mut bbox: Option<GeoRect> = None;

        for (i,filename) in filenames.iter().enumerate() {
            let tile = self.read_tile( filename)?;
            let (height,width) = tile.pixels.dim();

            let stack = data.get_or_insert_with( || Array4::zeros( (filenames.len(), height, width, 1)));
            if stack.dim().1 != height || stack.dim().2 != width {
                return Err( tile_shape_error( format!(
                    "tile {filename} is {height}x{width}, expected {}x{}", stack.dim().1, stack.dim().2)));
            }
            stack.slice_mut( s![i, .., .., 0]).assign( &tile.pixels);

            if bbox.is_none() { bbox = tile.bbox }
        }

        let data = data.ok_or_else( || file_count_error( "no tiles to import"))?;

        let mut patch = EoPatch::new();
        if let Some(bbox) = bbox { patch.set_bbox( bbox) }
        patch.add_feature( feature.clone(), FeatureArray::Series( data))?;

        Ok(patch)
    }

    fn read_tile (&self, filename: &str)->Result<Tile> {
        let path = self.folder.join( filename);
        let mut decoder = Decoder::new( BufReader::new( File::open( &path)?))?;

        let (width,height) = decoder.dimensions()?;
        let nodata = read_nodata_tag( &mut decoder);
        let bbox = read_geo_bbox( &mut decoder, width, height);

        let buf: Vec<f32> = match decoder.read_image()? {
            DecodingResult::U8(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::U16(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::U32(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::U64(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::I8(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::I16(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::I32(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::I64(buf) => buf.into_iter().map( |v| v as f32).collect(),
            DecodingResult::F32(buf) => buf,
            DecodingResult::F64(buf) => buf.into_iter().map( |v| v as f32).collect(),
            _ => return Err( EopatchTiffError::UnsupportedSampleFormatError( format!("in tile {path:?}"))),
        };

        let mut pixels = Array2::from_shape_vec( (height as usize, width as usize), buf)?;
        if let Some(nd) = nodata {
            let no_data_value = self.no_data_value;
            if nd.is_nan() {
                if !no_data_value.is_nan() {
                    pixels.mapv_inplace( |v| if v.is_nan() { no_data_value } else { v });
                }
            } else {
                pixels.mapv_inplace( |v| if v == nd { no_data_value } else { v });
            }
        }

        Ok( Tile { pixels, bbox })
    }
}

/// the declared no-data value of a tile (GDAL convention: an ascii tag)
fn read_nodata_tag<R: Read + Seek> (decoder: &mut Decoder<R>)->Option<f32> {
    decoder.get_tag_ascii_string( Tag::GdalNodata).ok()
        .and_then( |s| s.trim().trim_end_matches('\0').parse::<f32>().ok())
}

/// bounding box from the GeoTIFF pixel scale and tiepoint tags. Tiles without
/// georeferencing yield None
fn read_geo_bbox<R: Read + Seek> (decoder: &mut Decoder<R>, width: u32, height: u32)->Option<GeoRect> {
    let scale = decoder.get_tag_f64_vec( Tag::ModelPixelScaleTag).ok()?;
    let tie = decoder.get_tag_f64_vec( Tag::ModelTiepointTag).ok()?;
    if scale.len() < 2 || tie.len() < 6 { return None }

    // the tiepoint maps raster (i,j) to model (x,y) - tiles anchor their upper left corner
    let west = tie[3] - tie[0] * scale[0];
    let north = tie[4] + tie[1] * scale[1];
    let east = west + width as f64 * scale[0];
    let south = north - height as f64 * scale[1];

    Some( GeoRect::from_wsen( west, south, east, north))
}

/* #endregion import */

/* #region export *************************************************************************************************/

/// write a (height, width) band plane as a single-band Gray32Float GeoTIFF with optional
/// georeferencing and no-data tags - the inverse of what the importer reads
pub fn write_gray_geotiff (path: impl AsRef<Path>, pixels: &Array2<f32>,
                           bbox: Option<&GeoRect>, no_data: Option<f32>)->Result<()> {
    let (height,width) = pixels.dim();

    let mut file = File::create( path.as_ref())?;
    let mut encoder = TiffEncoder::new( &mut file)?;
    let mut image = encoder.new_image::<colortype::Gray32Float>( width as u32, height as u32)?;

    if let Some(bbox) = bbox {
        let dx = bbox.width() / width as f64;
        let dy = bbox.height() / height as f64;
        image.encoder().write_tag( Tag::ModelPixelScaleTag, &[dx, dy, 0.0][..])?;
        image.encoder().write_tag( Tag::ModelTiepointTag, &[0.0, 0.0, 0.0, bbox.west(), bbox.north(), 0.0][..])?;
    }
    if let Some(nd) = no_data {
        image.encoder().write_tag( Tag::GdalNodata, format!("{nd}").as_str())?;
    }

    let buf: Vec<f32> = pixels.iter().copied().collect();
    image.write_data( &buf)?;

    Ok(())
}

/* #endregion export */
