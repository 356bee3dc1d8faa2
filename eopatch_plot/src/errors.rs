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

pub type Result<T> = std::result::Result<T, EopatchPlotError>;

#[derive(Error,Debug)]
pub enum EopatchPlotError {
    #[error("patch error {0}")]
    PatchError( #[from] eopatch_common::errors::EopatchError),

    #[error("patch has no bounding box")]
    NoBBoxError(),

    #[error("draw error {0}")]
    DrawError( String ),
}

// drawing backend error types are generic over the backend - map them to an opaque variant
pub fn draw_error (e: impl std::fmt::Display)->EopatchPlotError {
    EopatchPlotError::DrawError( e.to_string())
}
