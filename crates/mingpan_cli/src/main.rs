use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mingpan_chart::{
    AnalyticEphemeris, AstroResult, BirthMoment, ChartConfig, Reading, SexagenaryResult,
    astro_reading, bazi_reading, classify_astro_positions_with, classify_sexagenary_with,
    sign_from_longitude,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mingpan", about = "Sexagenary year pillar and Sun/Moon/Rising signs")]
struct Cli {
    /// TOML file overriding epoch, cutover, observer and UTC offset
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Year pillar (stem, branch, animal) for a birth date
    Bazi {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Sun, Moon and Rising signs from the analytic ephemeris
    Astro {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (hh:mm)
        #[arg(long)]
        time: String,
    },
    /// Zodiac sign for an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Reading summary as shown to the user or sent to a narrator
    Reading {
        #[command(subcommand)]
        mode: ReadingCommand,
    },
}

#[derive(Subcommand)]
enum ReadingCommand {
    /// Year pillar reading
    Bazi {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sun/Moon/Rising reading
    Astro {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (hh:mm)
        #[arg(long)]
        time: String,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    // Split from the right so a leading minus on the year survives.
    let mut parts = s.rsplitn(3, '-');
    let (Some(d), Some(m), Some(y)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    };
    let year: i32 = y.parse().map_err(|e| format!("year '{y}': {e}"))?;
    let month: u32 = m.parse().map_err(|e| format!("month '{m}': {e}"))?;
    let day: u32 = d.parse().map_err(|e| format!("day '{d}': {e}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month out of range: {month} (1-12)"));
    }
    if !(1..=31).contains(&day) {
        return Err(format!("day out of range: {day} (1-31)"));
    }
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected hh:mm, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("hour '{h}': {e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("minute '{m}': {e}"))?;
    if hour > 23 {
        return Err(format!("hour out of range: {hour} (0-23)"));
    }
    if minute > 59 {
        return Err(format!("minute out of range: {minute} (0-59)"));
    }
    Ok((hour, minute))
}

fn parse_moment(date: &str, time: &str) -> Result<BirthMoment, String> {
    let (year, month, day) = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;
    Ok(BirthMoment::new(year, month, day, hour, minute))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> ChartConfig {
    let Some(path) = path else {
        return ChartConfig::default();
    };
    let config = ChartConfig::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load config {}: {e}", path.display());
        std::process::exit(1);
    });
    debug!(path = %path.display(), ?config, "loaded config");
    config
}

fn require_date(s: &str) -> (i32, u32, u32) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_moment(date: &str, time: &str) -> BirthMoment {
    parse_moment(date, time).unwrap_or_else(|e| {
        eprintln!("Invalid birth moment: {e}");
        std::process::exit(1);
    })
}

fn bazi(date: &str, config: &ChartConfig) -> SexagenaryResult {
    let (year, month, day) = require_date(date);
    classify_sexagenary_with(year, month, day, &config.sexagenary)
}

fn astro(date: &str, time: &str, config: &ChartConfig) -> AstroResult {
    let moment = require_moment(date, time);
    classify_astro_positions_with(&moment, &AnalyticEphemeris::new(), &config.astro)
        .unwrap_or_else(|e| {
            eprintln!("Astro classification failed: {e}");
            std::process::exit(1);
        })
}

fn print_reading(reading: &Reading, json: bool) {
    if json {
        match serde_json::to_string_pretty(reading) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to encode reading: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", reading.title);
        println!("{}", reading.summary);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Bazi { date } => {
            let r = bazi(&date, &config);
            println!(
                "Year pillar:    {} ({}-{})",
                r,
                r.stem.name(),
                r.branch.name()
            );
            println!("Element:        {} ({})", r.element().label(), r.element().name());
            println!("Animal:         {} ({})", r.animal.label(), r.animal.name());
            println!(
                "Effective year: {} (cycle {}/60)",
                r.effective_year,
                r.cycle_index + 1
            );
        }

        Commands::Astro { date, time } => {
            let r = astro(&date, &time, &config);
            println!("Sun:    {} ({})", r.sun.name(), r.sun.label());
            println!("Moon:   {} ({})", r.moon.name(), r.moon.label());
            println!("Rising: {} ({})", r.rising.name(), r.rising.label());
        }

        Commands::Sign { lon } => {
            if !lon.is_finite() {
                eprintln!("Invalid longitude: {lon}");
                std::process::exit(1);
            }
            let info = sign_from_longitude(lon);
            println!(
                "{} ({}) - {:.4} deg in sign",
                info.sign.name(),
                info.sign.label(),
                info.degrees_in_sign
            );
        }

        Commands::Reading { mode } => match mode {
            ReadingCommand::Bazi { date, json } => {
                print_reading(&bazi_reading(&bazi(&date, &config)), json);
            }
            ReadingCommand::Astro { date, time, json } => {
                print_reading(&astro_reading(&astro(&date, &time, &config)), json);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_valid() {
        assert_eq!(parse_date("1993-06-01"), Ok((1993, 6, 1)));
    }

    #[test]
    fn date_negative_year() {
        assert_eq!(parse_date("-0500-06-01"), Ok((-500, 6, 1)));
        assert_eq!(parse_date("-1-01-01"), Ok((-1, 1, 1)));
    }

    #[test]
    fn date_rejects_bad_fields() {
        assert!(parse_date("1993-13-01").is_err());
        assert!(parse_date("1993-00-10").is_err());
        assert!(parse_date("1993-06-32").is_err());
        assert!(parse_date("1993-06").is_err());
        assert!(parse_date("1993/06/01").is_err());
        assert!(parse_date("abcd-06-01").is_err());
        assert!(parse_date("1993-06-01-02").is_err());
        assert!(parse_date("-06-01").is_err());
    }

    #[test]
    fn time_valid() {
        assert_eq!(parse_time("00:00"), Ok((0, 0)));
        assert_eq!(parse_time("23:59"), Ok((23, 59)));
    }

    #[test]
    fn time_rejects_bad_fields() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("1200").is_err());
        assert!(parse_time("-1:00").is_err());
    }

    #[test]
    fn moment_from_parts() {
        assert_eq!(
            parse_moment("2024-08-15", "02:45"),
            Ok(BirthMoment::new(2024, 8, 15, 2, 45))
        );
    }

    #[test]
    fn cli_parses_reading_subcommand() {
        let cli = Cli::try_parse_from([
            "mingpan", "reading", "astro", "--date", "2024-08-15", "--time", "12:00", "--json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Reading {
                mode: ReadingCommand::Astro { json: true, .. }
            }
        ));
    }

    #[test]
    fn cli_accepts_negative_longitude() {
        let cli = Cli::try_parse_from(["mingpan", "sign", "-30.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Sign { lon } if lon == -30.5));
    }
}
