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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// get a DateTime<Utc> for a day-of-year and full hour of the given year.
/// Returns None if doy is not a valid ordinal day of that year (1..=365/366) or hour is not 0..=23
pub fn doy_datetime (year: i32, doy: u32, hour: u32)->Option<DateTime<Utc>> {
    let nd = NaiveDate::from_yo_opt( year, doy)?;
    let nt = NaiveTime::from_hms_opt( hour, 0, 0)?;
    Some( NaiveDateTime::new( nd, nt).and_utc())
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%dT%H:%M:%S%Z"))
}
