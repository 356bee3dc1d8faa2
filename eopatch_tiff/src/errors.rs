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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EopatchTiffError>;

#[derive(Error,Debug)]
pub enum EopatchTiffError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    // pass through for errors in the tiff crate
    #[error("TIFF error {0}")]
    TiffError( #[from] tiff::TiffError),

    #[error("patch error {0}")]
    PatchError( #[from] eopatch_common::errors::EopatchError),

    #[error("array shape error {0}")]
    ShapeError( #[from] ndarray::ShapeError),

    #[error("number parse error {0}")]
    IntParseError( #[from] std::num::ParseIntError),

    #[error("unknown data source {0}")]
    UnknownDataSourceError( String ),

    #[error("filename parse error {0}")]
    FilenameParseError( String ),

    #[error("file count error {0}")]
    FileCountError( String ),

    #[error("tile shape error {0}")]
    TileShapeError( String ),

    #[error("unsupported sample format {0}")]
    UnsupportedSampleFormatError( String ),
}

pub fn filename_parse_error (msg: impl ToString)->EopatchTiffError {
    EopatchTiffError::FilenameParseError( msg.to_string())
}

pub fn file_count_error (msg: impl ToString)->EopatchTiffError {
    EopatchTiffError::FileCountError( msg.to_string())
}

pub fn tile_shape_error (msg: impl ToString)->EopatchTiffError {
    EopatchTiffError::TileShapeError( msg.to_string())
}
