mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::{Context, Result, ensure};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::info;

use amlich::Date;
use amlich::notification::{CommandNotifier, EventHook};
use amlich::vietnamese::{LunarDate, SUPPORTED_YEARS, fmt};

use crate::cli::{Cli, Command, HookArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Hook(args)) => hook(args),
        None => convert(cli.date, cli.tz, cli.details),
    }
}

fn convert(date: Option<Date>, tz_hours: i32, details: bool) -> Result<()> {
    let date = match date {
        Some(date) => date,
        None => today()?,
    };
    let (year, _, _) = date.gregorian();
    ensure!(
        SUPPORTED_YEARS.contains(&year),
        "year {year} is outside the supported range"
    );
    let lunar = LunarDate::from_solar(date, tz_hours * 60);
    println!("{}", summary(&lunar));
    if details {
        println!("{}", describe(date, &lunar));
    }
    Ok(())
}

fn today() -> Result<Date> {
    let now = Local::now().date_naive();
    let date = Date::from_gregorian(now.year(), now.month() as i32, now.day() as i32)
        .context("system date is out of range")?;
    info!(%date, "using today's date");
    Ok(date)
}

/// `D/M/Y (Stem Branch)`
fn summary(lunar: &LunarDate) -> String {
    format!("{lunar} ({})", lunar.year_name())
}

fn describe(date: Date, lunar: &LunarDate) -> String {
    format!(
        "{} {}, ngày {}, tháng {}, năm {}",
        fmt::day(lunar.day),
        lunar.month.name(),
        fmt::day_name(date),
        lunar.month_name(),
        lunar.year_name()
    )
}

fn hook(args: HookArgs) -> Result<()> {
    let hook = EventHook::new(CommandNotifier::new(args.command));
    let notified = hook
        .run(io::stdin().lock())
        .context("failed to read events from stdin")?;
    info!(notified, "event stream closed");
    Ok(())
}
