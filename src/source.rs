//! Retrieval of the raw facility document.
//!
//! The resolution core has nothing to do without a facility list, so any
//! failure here is returned as a hard error for the caller to abort on.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::model::Facility;

/// Fetch the facility document from an HTTP endpoint.
pub fn fetch_facilities(url: &str) -> Result<Vec<Facility>, Error> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.json()?)
}

/// Read the facility document from a local JSON file.
pub fn load_facilities(path: impl AsRef<Path>) -> Result<Vec<Facility>, Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
