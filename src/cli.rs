use clap::{Parser, Subcommand};

use amlich::Date;
use amlich::notification::DEFAULT_COMMAND;

/// Vietnamese lunar calendar.
#[derive(Parser)]
#[command(
    name = "amlich",
    version,
    about = "Print a date in the Vietnamese lunar calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Solar date to convert (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<Date>,

    /// Timezone the calendar is reckoned in, in hours east of UTC.
    #[arg(
        long,
        default_value_t = 7,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-12..=14)
    )]
    pub tz: i32,

    /// Also print day and month names.
    #[arg(long)]
    pub details: bool,

    /// Subcommand to run instead of converting a date.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Read JSON events from stdin and notify on permission requests.
    Hook(HookArgs),
}

/// Arguments for the `hook` subcommand.
#[derive(clap::Args)]
pub struct HookArgs {
    /// Notification program, run as `<COMMAND> <title> <message>`.
    #[arg(short, long, default_value = DEFAULT_COMMAND)]
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["amlich"]).unwrap();
        assert_eq!(7, cli.tz);
        assert!(cli.date.is_none());
        assert!(!cli.details);
        assert!(cli.command.is_none());
    }

    #[test]
    fn date_and_tz() {
        let cli =
            Cli::try_parse_from(["amlich", "--date", "2024-02-10", "--tz", "8", "-vv"]).unwrap();
        assert_eq!(Some(Date::from_gregorian(2024, 2, 10).unwrap()), cli.date);
        assert_eq!(8, cli.tz);
        assert_eq!(2, cli.verbose);
        assert!(Cli::try_parse_from(["amlich", "--tz", "-5"]).is_ok());
        assert!(Cli::try_parse_from(["amlich", "--tz", "15"]).is_err());
        assert!(Cli::try_parse_from(["amlich", "--date", "2024-02-30"]).is_err());
    }

    #[test]
    fn hook_command() {
        let cli = Cli::try_parse_from(["amlich", "hook"]).unwrap();
        let Some(Command::Hook(args)) = cli.command else {
            panic!("expected hook subcommand");
        };
        assert_eq!(DEFAULT_COMMAND, args.command);
        let cli = Cli::try_parse_from(["amlich", "hook", "--command", "notify-send"]).unwrap();
        let Some(Command::Hook(args)) = cli.command else {
            panic!("expected hook subcommand");
        };
        assert_eq!("notify-send", args.command);
    }
}
