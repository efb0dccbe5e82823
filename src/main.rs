mod cli;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;

use praytimes::timetable::{self, DayEntry};
use praytimes::{next_prayer, parse_zone, IqamahName, PrayerName};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::resolve(cli)?;
    let engine = config.engine()?;
    let zone = parse_zone(&config.timezone)?;
    let today = Local::now().date_naive();

    match &cli.command {
        Command::Day(args) => {
            let date = args.date.unwrap_or(today);
            let entry = timetable::day(&engine, date, config.location, zone, None);
            print_day(&entry);
            if date == today {
                let now = Local::now().time();
                if let Some(next) = next_prayer(&entry.times, now) {
                    let iqamah = next.iqamah.as_deref().unwrap_or("N/A");
                    println!("\nNext: {} at {} (iqamah {})", next.name, next.time, iqamah);
                }
            }
        }
        Command::Month(args) => {
            let year = args.year.unwrap_or(today.year());
            let month = args.month.unwrap_or(today.month());
            let table = timetable::month(&engine, year, month, config.location, zone, None)?;
            print_month(&table.days);
        }
    }
    Ok(())
}

fn print_day(entry: &DayEntry) {
    println!("{} (UTC{:+})", entry.date, entry.offset.total_hours());
    for (name, time) in entry.times.prayers.iter() {
        let iqamah = name
            .iqamah()
            .map(|iq| entry.times.iqamah.get(iq).to_string())
            .unwrap_or_default();
        println!("{:<10} {:<10} {}", name.label(), time.to_string(), iqamah);
    }
}

const MONTH_COLUMNS: [PrayerName; 6] = [
    PrayerName::Fajr,
    PrayerName::Sunrise,
    PrayerName::Dhuhr,
    PrayerName::Asr,
    PrayerName::Maghrib,
    PrayerName::Isha,
];

fn print_month(days: &[DayEntry]) {
    let mut header = format!("{:<12}", "Date");
    for name in MONTH_COLUMNS {
        header.push_str(&format!(" {:<8}", name.label()));
    }
    for iq in IqamahName::ALL {
        header.push_str(&format!(" {:<14}", iq.key()));
    }
    println!("{header}");
    println!("{}", "=".repeat(header.len()));

    for day in days {
        let mut row = format!("{:<12}", day.date.to_string());
        for name in MONTH_COLUMNS {
            row.push_str(&format!(" {:<8}", day.times.prayers.get(name).to_string()));
        }
        for (_, time) in day.times.iqamah.iter() {
            row.push_str(&format!(" {:<14}", time));
        }
        println!("{row}");
    }
}
