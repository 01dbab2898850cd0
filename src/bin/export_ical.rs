use std::env;
use std::fs::File;
use std::process::ExitCode;

use chrono::{Local, Utc};
use chrono_tz::Tz;

use facility_hours::calendar::{Calendar, CalendarEvent};
use facility_hours::enumerator::enumerate;
use facility_hours::error::Error;
use facility_hours::model::Facility;
use facility_hours::source;

const DEFAULT_URL: &str = "https://www.stuttgarterbaeder.de/fileadmin/jsonData/baeder.json";
const OUTPUT_FILE: &str = "hallenbaeder.ics";
const DAYS_TO_GENERATE: u64 = 14;
const TIMEZONE: Tz = chrono_tz::Europe::Berlin;
const CATEGORY: &str = "Hallenbad";
const UID_DOMAIN: &str = "stuttgarterbaeder.de";
const PROD_ID: &str = "-//Stuttgart Hallenbad Calendar//";
const CALENDAR_NAME: &str = "Stuttgarter Hallenbäder";
const CALENDAR_DESC: &str = "Öffnungszeiten der Stuttgarter Hallenbäder";

fn main() -> ExitCode {
    let source = env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());

    let mut facilities = match load(&source) {
        Ok(facilities) => facilities,
        Err(err) => {
            eprintln!("Error loading facility data: {err}");
            return ExitCode::FAILURE;
        }
    };

    facilities.retain(|facility| facility.category() == Some(CATEGORY) && facility.name.is_some());

    for facility in &facilities {
        println!("Processing: {}", facility.name.as_deref().unwrap_or_default());
    }

    let today = Local::now().date_naive();
    let result = enumerate(&facilities, today, DAYS_TO_GENERATE, TIMEZONE);

    for skip in &result.skipped {
        eprintln!("  {skip}");
    }

    let mut calendar = Calendar::new(PROD_ID, CALENDAR_NAME, CALENDAR_DESC);
    let stamp = Utc::now();

    for opening in &result.openings {
        calendar.push(CalendarEvent::from_opening(opening, UID_DOMAIN, stamp));
    }

    let file = match File::create(OUTPUT_FILE) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error writing file: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = calendar.write_to(file) {
        eprintln!("Error writing file: {err}");
        return ExitCode::FAILURE;
    }

    println!("\nSuccessfully generated {OUTPUT_FILE} ({} events)", calendar.len());
    ExitCode::SUCCESS
}

fn load(source: &str) -> Result<Vec<Facility>, Error> {
    if source.starts_with("http://") || source.starts_with("https://") {
        source::fetch_facilities(source)
    } else {
        source::load_facilities(source)
    }
}
