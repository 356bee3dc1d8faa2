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

pub type Result<T> = std::result::Result<T, EopatchError>;

#[derive(Error,Debug)]
pub enum EopatchError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("no such feature {0}")]
    NoSuchFeatureError( String ),

    #[error("feature parse error {0}")]
    FeatureParseError( String ),

    #[error("feature shape error {0}")]
    FeatureShapeError( String ),

    #[error("timestamp mismatch {0}")]
    TimestampMismatchError( String ),

    #[error("time index error {0}")]
    TimeIndexError( String ),

    #[error("band index error {0}")]
    BandIndexError( String ),
}

pub fn feature_shape_error (msg: impl ToString)->EopatchError {
    EopatchError::FeatureShapeError( msg.to_string())
}

pub fn timestamp_mismatch (msg: impl ToString)->EopatchError {
    EopatchError::TimestampMismatchError( msg.to_string())
}

pub fn time_index_error (msg: impl ToString)->EopatchError {
    EopatchError::TimeIndexError( msg.to_string())
}

pub fn band_index_error (msg: impl ToString)->EopatchError {
    EopatchError::BandIndexError( msg.to_string())
}
