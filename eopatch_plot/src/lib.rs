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

//! visual inspection helpers for EoPatches, drawing onto
//! [plotters](https://docs.rs/plotters/latest/plotters/) surfaces. A `GeoChart` is a chart
//! context in patch coordinates - the drawing helpers either build one over the patch extent
//! (raster draws, which own title and grid) or overlay geometry onto an existing one
//! (bounding box and polygon outlines)

use ndarray::{Array2, Array3};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{BlackWhite, Bone, ColorMap, Copper, ViridisRGB};
use tracing::warn;

use eopatch_common::{EoPatch, Feature};
use eopatch_common::datetime::short_utc_datetime_string;
use eopatch_common::geo::{GeoMultiPolygon, GeoPolygon};

pub mod errors;
pub use errors::*;

/// a chart context in patch coordinates
pub type GeoChart<'a,DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64,RangedCoordf64>>;

/// stroke width of the outline effect pass
const OUTLINE_STROKE_WIDTH: u32 = 4;

/* #region styles *************************************************************************************************/

/// the closed set of supported raster colormaps
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Bone,
    Copper,
    BlackWhite,
}

impl Colormap {
    pub fn color_at (&self, h: f64)->RGBColor {
        let h = h as f32;
        match self {
            Colormap::Viridis => ViridisRGB.get_color(h),
            Colormap::Bone => Bone.get_color(h),
            Colormap::Copper => Copper.get_color(h),
            Colormap::BlackWhite => BlackWhite.get_color(h),
        }
    }
}

/// options for geometry outline draws
#[derive(Debug,Clone)]
pub struct PolyStyle {
    pub color: RGBColor,
    pub line_width: u32,
    pub outline: bool,
}

impl Default for PolyStyle {
    fn default ()->Self {
        PolyStyle { color: RED, line_width: 2, outline: true }
    }
}

/// options for single-band raster draws
#[derive(Debug,Clone)]
pub struct RasterStyle {
    /// band to draw (None squeezes a single-band feature)
    pub band: Option<usize>,
    pub vmin: f64,
    pub vmax: f64,
    pub alpha: f64,
    pub colormap: Colormap,
    pub grid: bool,
}

impl Default for RasterStyle {
    fn default ()->Self {
        RasterStyle { band: None, vmin: 0.0, vmax: 1.0, alpha: 1.0, colormap: Colormap::default(), grid: true }
    }
}

/// options for true-color composite draws
#[derive(Debug,Clone)]
pub struct TrueColorStyle {
    /// band indices composited as (r,g,b)
    pub bands: [usize;3],
    /// brightness scaling applied before clipping to the displayable range
    pub factor: f64,
    pub grid: bool,
}

impl Default for TrueColorStyle {
    fn default ()->Self {
        TrueColorStyle { bands: [3,2,1], factor: 3.5, grid: true }
    }
}

/* #endregion styles */

/* #region charts *************************************************************************************************/

/// bounds of the patch in (min_x, max_x, min_y, max_y) order
pub fn patch_extent (patch: &EoPatch)->Result<(f64,f64,f64,f64)> {
    let bbox = patch.bbox().ok_or( EopatchPlotError::NoBBoxError())?;
    Ok( bbox.extent())
}

/// build a chart over the given extent, with optional title and grid lines
pub fn build_geo_chart<'a,DB: DrawingBackend> (area: &'a DrawingArea<DB,Shift>, extent: (f64,f64,f64,f64),
                                               title: Option<&str>, grid: bool)->Result<GeoChart<'a,DB>> {
    let (min_x, max_x, min_y, max_y) = extent;

    let mut builder = ChartBuilder::on( area);
    builder.margin(10).x_label_area_size(30).y_label_area_size(50);
    if let Some(title) = title {
        builder.caption( title, ("sans-serif", 16));
    }
    let mut chart = builder.build_cartesian_2d( min_x..max_x, min_y..max_y).map_err( draw_error)?;

    let mut mesh = chart.configure_mesh();
    if !grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.draw().map_err( draw_error)?;

    Ok(chart)
}

/* #endregion charts */

/* #region geometry draws *****************************************************************************************/

/// draw all parts of a (multi)polygon as unfilled closed outlines. Degenerate parts without
/// an exterior ring are skipped with a warning, the remaining parts still draw. With
/// `style.outline` the last drawn part gets an additional stroke-outline effect
pub fn draw_poly<DB: DrawingBackend> (chart: &mut GeoChart<'_,DB>, poly: &GeoMultiPolygon, style: &PolyStyle)->Result<()> {
    let mut last_ring: Option<Vec<(f64,f64)>> = None;

    for part in poly.iter() {
        if part.is_degenerate() {
            warn!("skipping polygon part without exterior");
            continue;
        }
        let ring = part.exterior_coords();
        draw_ring( chart, &ring, style.color, style.line_width)?;
        last_ring = Some(ring);
    }

    if style.outline {
        if let Some(ring) = last_ring {
            draw_ring( chart, &ring, BLACK, OUTLINE_STROKE_WIDTH)?;
            draw_ring( chart, &ring, style.color, style.line_width)?;
        }
    }

    Ok(())
}

/// draw the patch bounding box outline
pub fn draw_bbox<DB: DrawingBackend> (chart: &mut GeoChart<'_,DB>, patch: &EoPatch, style: &PolyStyle)->Result<()> {
    let bbox = patch.bbox().ok_or( EopatchPlotError::NoBBoxError())?;
    draw_poly( chart, &GeoMultiPolygon::from( bbox.to_polygon()), style)
}

fn draw_ring<DB: DrawingBackend> (chart: &mut GeoChart<'_,DB>, ring: &[(f64,f64)], color: RGBColor, width: u32)->Result<()> {
    chart.draw_series( std::iter::once( PathElement::new( ring.to_vec(), color.stroke_width( width))))
        .map_err( draw_error)?;
    Ok(())
}

/* #endregion geometry draws */

/* #region raster draws *******************************************************************************************/

/// draw one band plane of a patch feature over the patch extent. `time_idx` selects the time
/// slice of a time-dependent feature and has to be None for time-independent ones. Pixel
/// values map through the colormap between the style intensity bounds, no-data (NaN) pixels
/// stay transparent. Returns the chart so callers can overlay geometry
pub fn draw_feature<'a,DB: DrawingBackend> (area: &'a DrawingArea<DB,Shift>, patch: &EoPatch, feature: &Feature,
                                            time_idx: Option<usize>, style: &RasterStyle)->Result<GeoChart<'a,DB>> {
    let img = patch.band_slice( feature, time_idx, style.band)?;
    let extent = patch_extent( patch)?;
    let title = feature_title( patch, feature, time_idx);

    let mut chart = build_geo_chart( area, extent, Some(&title), style.grid)?;
    draw_raster( &mut chart, &img, extent, style)?;

    Ok(chart)
}

/// draw one chart per requested time index, one drawing area each
pub fn draw_feature_series<'a,DB: DrawingBackend> (areas: &'a [DrawingArea<DB,Shift>], patch: &EoPatch, feature: &Feature,
                                                   time_indices: &[usize], style: &RasterStyle)->Result<Vec<GeoChart<'a,DB>>> {
    if areas.len() < time_indices.len() {
        return Err( draw_error( format!("{} drawing areas for {} time indices", areas.len(), time_indices.len())));
    }

    let mut charts: Vec<GeoChart<'a,DB>> = Vec::with_capacity( time_indices.len());
    for (area,&time_idx) in areas.iter().zip( time_indices) {
        charts.push( draw_feature( area, patch, feature, Some(time_idx), style)?);
    }
    Ok(charts)
}

/// draw a true-color composite of three feature bands for one time slice: scale by the
/// style factor, clip to the displayable range, no explicit intensity bounds
pub fn draw_true_color<'a,DB: DrawingBackend> (area: &'a DrawingArea<DB,Shift>, patch: &EoPatch, feature: &Feature,
                                               time_idx: usize, style: &TrueColorStyle)->Result<GeoChart<'a,DB>> {
    let img = patch.rgb_slice( feature, time_idx, &style.bands)?;
    let extent = patch_extent( patch)?;
    let title = feature_title( patch, feature, Some(time_idx));

    let mut chart = build_geo_chart( area, extent, Some(&title), style.grid)?;
    draw_rgb_raster( &mut chart, &img, extent, style.factor)?;

    Ok(chart)
}

/// draw one true-color chart per requested time index, one drawing area each
pub fn draw_true_color_series<'a,DB: DrawingBackend> (areas: &'a [DrawingArea<DB,Shift>], patch: &EoPatch, feature: &Feature,
                                                      time_indices: &[usize], style: &TrueColorStyle)->Result<Vec<GeoChart<'a,DB>>> {
    if areas.len() < time_indices.len() {
        return Err( draw_error( format!("{} drawing areas for {} time indices", areas.len(), time_indices.len())));
    }

    let mut charts: Vec<GeoChart<'a,DB>> = Vec::with_capacity( time_indices.len());
    for (area,&time_idx) in areas.iter().zip( time_indices) {
        charts.push( draw_true_color( area, patch, feature, time_idx, style)?);
    }
    Ok(charts)
}

fn feature_title (patch: &EoPatch, feature: &Feature, time_idx: Option<usize>)->String {
    match time_idx.and_then( |t| patch.timestamps().get(t)) {
        Some(ts) => format!("{} {}", feature.name, short_utc_datetime_string( ts)),
        None => feature.name.clone(),
    }
}

fn draw_raster<DB: DrawingBackend> (chart: &mut GeoChart<'_,DB>, img: &Array2<f32>,
                                    extent: (f64,f64,f64,f64), style: &RasterStyle)->Result<()> {
    let (min_x, max_x, min_y, max_y) = extent;
    let (rows,cols) = img.dim();
    if rows == 0 || cols == 0 { return Ok(()) }

    let dx = (max_x - min_x) / cols as f64;
    let dy = (max_y - min_y) / rows as f64;
    let span = style.vmax - style.vmin;

    for ((row,col),v) in img.indexed_iter() {
        if v.is_nan() { continue }

        let h = if span > 0.0 { ((*v as f64 - style.vmin) / span).clamp( 0.0, 1.0) } else { 0.0 };
        let color = style.colormap.color_at( h);
        let fill = if style.alpha < 1.0 { color.mix( style.alpha).filled() } else { color.filled() };

        let x0 = min_x + col as f64 * dx;
        let y1 = max_y - row as f64 * dy;
        chart.draw_series( std::iter::once( Rectangle::new( [(x0, y1 - dy), (x0 + dx, y1)], fill)))
            .map_err( draw_error)?;
    }
    Ok(())
}

fn draw_rgb_raster<DB: DrawingBackend> (chart: &mut GeoChart<'_,DB>, img: &Array3<f32>,
                                        extent: (f64,f64,f64,f64), factor: f64)->Result<()> {
    let (min_x, max_x, min_y, max_y) = extent;
    let (rows,cols,_) = img.dim();
    if rows == 0 || cols == 0 { return Ok(()) }

    let dx = (max_x - min_x) / cols as f64;
    let dy = (max_y - min_y) / rows as f64;

    for row in 0..rows {
        for col in 0..cols {
            let r = img[[row,col,0]] as f64 * factor;
            let g = img[[row,col,1]] as f64 * factor;
            let b = img[[row,col,2]] as f64 * factor;
            if r.is_nan() || g.is_nan() || b.is_nan() { continue }

            let color = RGBColor(
                (r.clamp(0.0,1.0) * 255.0) as u8,
                (g.clamp(0.0,1.0) * 255.0) as u8,
                (b.clamp(0.0,1.0) * 255.0) as u8,
            );

            let x0 = min_x + col as f64 * dx;
            let y1 = max_y - row as f64 * dy;
            chart.draw_series( std::iter::once( Rectangle::new( [(x0, y1 - dy), (x0 + dx, y1)], color.filled())))
                .map_err( draw_error)?;
        }
    }
    Ok(())
}

/* #endregion raster draws */
