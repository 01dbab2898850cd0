use chrono::NaiveDate;
use chrono_tz::Tz;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use facility_hours::enumerator::enumerate;
use facility_hours::model::{BusinessHours, DayWindow, Facility, RuleEntry, Validity};
use facility_hours::resolver::resolve;

const TIMEZONE: Tz = chrono_tz::Europe::Berlin;

fn window(from: &str, to: &str) -> Option<DayWindow> {
    Some(DayWindow { from: Some(from.into()), to: Some(to.into()) })
}

fn sample_hours() -> BusinessHours {
    BusinessHours {
        overrides: vec![
            RuleEntry {
                validity: Validity { from: "2024-12-23".into(), to: "2025-01-06".into() },
                closed: true,
                ..Default::default()
            },
            RuleEntry {
                validity: Validity { from: "2024-08-01".into(), to: "2024-08-31".into() },
                monday: window("10:00", "16:00"),
                wednesday: window("10:00", "16:00"),
                ..Default::default()
            },
        ],
        regular: vec![RuleEntry {
            validity: Validity { from: "2024-01-01".into(), to: "2024-12-31".into() },
            monday: window("06:30", "21:00"),
            tuesday: window("06:30", "21:00"),
            wednesday: window("08:00", "20:00"),
            thursday: window("06:30", "21:00"),
            friday: window("06:30", "21:00"),
            saturday: window("08:00", "18:00"),
            sunday: window("08:00", "18:00"),
            ..Default::default()
        }],
    }
}

fn bench_resolve(c: &mut Criterion) {
    let hours = sample_hours();
    let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();

    c.bench_function("resolve", |b| {
        b.iter(|| resolve(black_box(&hours), black_box(date)))
    });
}

fn bench_enumerate(c: &mut Criterion) {
    let facilities: Vec<_> = (0..50)
        .map(|idx| Facility {
            id: idx.to_string(),
            name: Some(format!("Facility {idx}")),
            business_hours: sample_hours(),
            ..Default::default()
        })
        .collect();

    let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

    c.bench_function("enumerate 50x14", |b| {
        b.iter(|| enumerate(black_box(&facilities), black_box(start), 14, TIMEZONE))
    });
}

criterion_group!(benches, bench_resolve, bench_enumerate);
criterion_main!(benches);
