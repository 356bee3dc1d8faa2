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

use std::fs::{self,File};
use std::io;
use std::path::Path;
use flate2::read::GzDecoder;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn get_filename_extension<'a> (path: &'a str) -> Option<&'a str> {
    if let Some(idx) = path.rfind('.') {
        if idx < path.len()-1 {
            return Some( path[idx+1..].as_ref() )
        }
    }
    None
}

/// the filenames of all non-directory entries of `dir`, in lexicographic order
pub fn sorted_dir_filenames (dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut list: Vec<String> = Vec::new();

    for e in fs::read_dir( dir.as_ref())? {
        let e = e?;
        if !e.path().is_dir() {
            if let Some(fname) = e.file_name().to_str() {
                list.push( fname.to_string())
            }
        }
    }

    list.sort();
    Ok(list)
}

/// gunzip `gz_path` into `path`. This is a no-op if `path` already exists, i.e. interrupted
/// runs that left both files behind pick up the already unpacked one
pub fn gunzip_file (gz_path: impl AsRef<Path>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        let mut gz = GzDecoder::new( File::open( gz_path.as_ref())?);
        let mut out = File::create( path)?;
        io::copy( &mut gz, &mut out)?;
    }
    Ok(())
}
