mod logging;
mod timestamp;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use altaz_core::{CelestialObject, CoreError, DegMin, ObjectInfo, ObserverLocation, SessionConfig};
use altaz_frames::{degrees_to_hms, dm_to_decimal};
use altaz_time::{
    UtcTime, days_since_j2000, days_to_jd, greenwich_mean_sidereal_time_deg,
    local_mean_sidereal_time_deg,
};
use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::timestamp::{parse_timestamp, parse_zone};

#[derive(Parser)]
#[command(name = "altaz", about = "Altitude and azimuth of fixed celestial objects")]
struct Cli {
    /// Log to stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Altitude and azimuth of an object for an observer
    Altaz(AltazArgs),
    /// Days since J2000.0 and Julian Date
    Days {
        /// RFC 3339 timestamp, or naive YYYY-MM-DDThh:mm:ss
        #[arg(long)]
        date: String,
        /// IANA zone for a naive --date (default UTC)
        #[arg(long)]
        tz: Option<String>,
    },
    /// Greenwich and local mean sidereal time
    Lst {
        /// RFC 3339 timestamp, or naive YYYY-MM-DDThh:mm:ss
        #[arg(long)]
        date: String,
        /// IANA zone for a naive --date (default UTC)
        #[arg(long)]
        tz: Option<String>,
        /// Longitude, east positive ("-71 3", "-71:3" or "-71.05")
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
    /// Decimal degrees from a degrees/minutes pair
    Dm {
        /// Degrees; a negative value makes the whole angle negative
        #[arg(long, allow_hyphen_values = true)]
        deg: f64,
        /// Arc-minutes
        #[arg(long)]
        min: f64,
    },
}

#[derive(Args)]
struct AltazArgs {
    /// Session TOML with [object], [observer] and an optional date and tz
    #[arg(long)]
    config: Option<PathBuf>,
    /// RFC 3339 timestamp, or naive YYYY-MM-DDThh:mm:ss read in --tz.
    /// Falls back to the session date, then to the current time.
    #[arg(long)]
    date: Option<String>,
    /// IANA zone for a naive date, e.g. America/New_York (default UTC)
    #[arg(long)]
    tz: Option<String>,
    /// Right ascension in hours and minutes ("5 34.5")
    #[arg(long)]
    ra: Option<String>,
    /// Declination in degrees and minutes ("22 1", "-0 30")
    #[arg(long, allow_hyphen_values = true)]
    dec: Option<String>,
    /// Latitude, north positive ("42 21")
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<String>,
    /// Longitude, east positive ("-71 3")
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<String>,
    /// Object name
    #[arg(long, default_value = "object")]
    name: String,
    #[arg(long, default_value = "")]
    common_name: String,
    #[arg(long, default_value = "")]
    object_type: String,
    #[arg(long, default_value = "")]
    constellation: String,
    /// Distance in kilo-light-years
    #[arg(long, default_value_t = 0.0)]
    distance_kly: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match logging::start_logger(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(cli.command, &mut stdout) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run<W: Write>(command: Commands, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Altaz(args) => run_altaz(args, out),

        Commands::Days { date, tz } => {
            let when = parse_timestamp(&date, zone_from_flag(tz.as_deref())?)?;
            let utc = UtcTime::from(when);
            let days = days_since_j2000(&utc);
            writeln!(out, "UTC: {utc}")?;
            writeln!(out, "Days since J2000.0: {days}")?;
            writeln!(out, "JD: {:.6}", days_to_jd(days))?;
            Ok(())
        }

        Commands::Lst { date, tz, lon } => {
            let when = parse_timestamp(&date, zone_from_flag(tz.as_deref())?)?;
            let utc = UtcTime::from(when);
            let lon = parse_angle("lon", &lon)?.to_decimal();
            let days = days_since_j2000(&utc);
            let gmst = greenwich_mean_sidereal_time_deg(days);
            let lmst = local_mean_sidereal_time_deg(days, lon);
            writeln!(out, "UTC: {utc}")?;
            writeln!(out, "GMST: {gmst}° ({})", degrees_to_hms(gmst))?;
            writeln!(out, "LMST: {lmst}° ({})", degrees_to_hms(lmst))?;
            Ok(())
        }

        Commands::Dm { deg, min } => {
            writeln!(out, "{}", dm_to_decimal(deg, min))?;
            Ok(())
        }
    }
}

fn run_altaz<W: Write>(args: AltazArgs, out: &mut W) -> anyhow::Result<()> {
    let session = args
        .config
        .as_deref()
        .map(|path| {
            SessionConfig::load(path).with_context(|| format!("reading {}", path.display()))
        })
        .transpose()?;

    let object = resolve_object(&args, session.as_ref())?;
    let observer = resolve_observer(&args, session.as_ref())?;
    let when = resolve_date(args.date.as_deref(), args.tz.as_deref(), session.as_ref())?;

    let coords = object.altaz_at(when, &observer)?;
    log::info!("{} from {observer}: {coords}", object.name());

    writeln!(out, "{object}")?;
    writeln!(out, "Observer: {observer}")?;
    writeln!(out, "UTC: {}", UtcTime::from(when))?;
    writeln!(out, "Alt: {}", coords.altitude_deg)?;
    match coords.azimuth_deg {
        Some(az) => writeln!(out, "Az: {az}")?,
        None => writeln!(out, "Az: undefined")?,
    }
    Ok(())
}

/// Flags win over the session file; RA and Dec come as a pair.
fn resolve_object(
    args: &AltazArgs,
    session: Option<&SessionConfig>,
) -> anyhow::Result<CelestialObject> {
    match (&args.ra, &args.dec) {
        (Some(ra), Some(dec)) => {
            let info = ObjectInfo::new(
                args.name.as_str(),
                args.object_type.as_str(),
                args.constellation.as_str(),
                args.distance_kly,
            )
            .with_common_name(args.common_name.as_str());
            Ok(CelestialObject::from_deg_min(
                info,
                parse_angle("ra", ra)?,
                parse_angle("dec", dec)?,
            )?)
        }
        (None, None) => match session {
            Some(cfg) => Ok(cfg.object()?),
            None => bail!("give --ra and --dec, or --config"),
        },
        _ => bail!("--ra and --dec must be given together"),
    }
}

fn resolve_observer(
    args: &AltazArgs,
    session: Option<&SessionConfig>,
) -> anyhow::Result<ObserverLocation> {
    match (&args.lat, &args.lon) {
        (Some(lat), Some(lon)) => Ok(ObserverLocation::from_deg_min(
            parse_angle("lat", lat)?,
            parse_angle("lon", lon)?,
        )?),
        (None, None) => match session {
            Some(cfg) => Ok(cfg.observer()?),
            None => bail!("give --lat and --lon, or --config"),
        },
        _ => bail!("--lat and --lon must be given together"),
    }
}

/// `--date`/`--tz` win over the session's `date`/`tz`.
fn resolve_date(
    date_flag: Option<&str>,
    tz_flag: Option<&str>,
    session: Option<&SessionConfig>,
) -> anyhow::Result<DateTime<Utc>> {
    let zone_name = tz_flag.or_else(|| session.and_then(|cfg| cfg.tz.as_deref()));
    let zone = zone_from_flag(zone_name)?;
    let text = date_flag.or_else(|| session.and_then(|cfg| cfg.date.as_deref()));
    match text {
        Some(t) => parse_timestamp(t, zone).with_context(|| format!("invalid date {t:?}")),
        None => {
            let now = Utc::now();
            log::info!("no date given, using current time {now}");
            Ok(now)
        }
    }
}

fn zone_from_flag(name: Option<&str>) -> anyhow::Result<Option<Tz>> {
    name.map(parse_zone).transpose()
}

fn parse_angle(field: &'static str, text: &str) -> Result<DegMin, CoreError> {
    text.parse()
        .map_err(|source| CoreError::Angle { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("altaz").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(command: Commands) -> String {
        let mut out = Vec::new();
        run(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// First number after `label` on its line.
    fn value_after(output: &str, label: &str) -> f64 {
        let rest = output
            .lines()
            .find_map(|line| line.strip_prefix(label))
            .unwrap_or_else(|| panic!("no {label:?} line in:\n{output}"));
        rest.split(|c: char| c == '°' || c.is_whitespace())
            .find(|t| !t.is_empty())
            .unwrap()
            .parse()
            .unwrap()
    }

    fn altaz_args(args: &[&str]) -> AltazArgs {
        match parse(&[&["altaz"][..], args].concat()).command {
            Commands::Altaz(a) => a,
            _ => panic!("expected altaz subcommand"),
        }
    }

    #[test]
    fn hyphenated_angles_accepted() {
        let a = altaz_args(&[
            "--ra", "5 34.5", "--dec", "-0 30", "--lat", "42 21", "--lon", "-71 3",
        ]);
        assert_eq!(a.dec.as_deref(), Some("-0 30"));
        assert_eq!(a.lon.as_deref(), Some("-71 3"));
    }

    #[test]
    fn verbose_counts() {
        let cli = parse(&["-vv", "dm", "--deg", "-71", "--min", "3"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Dm { deg, min } => {
                assert_eq!(deg, -71.0);
                assert_eq!(min, 3.0);
            }
            _ => panic!("expected dm subcommand"),
        }
    }

    #[test]
    fn object_from_flags() {
        let a = altaz_args(&[
            "--ra", "5 34.5", "--dec", "22 1", "--name", "M1", "--lat", "42 21", "--lon",
            "-71 3",
        ]);
        let obj = resolve_object(&a, None).unwrap();
        assert_eq!(obj.name(), "M1");
        assert_eq!(obj.ra_deg(), 83.625);

        let loc = resolve_observer(&a, None).unwrap();
        assert_eq!(loc.latitude_deg(), 42.35);
    }

    #[test]
    fn signed_declination_from_flags() {
        let a = altaz_args(&["--ra", "1 0", "--dec", "-0 30"]);
        let obj = resolve_object(&a, None).unwrap();
        assert_eq!(obj.dec_deg(), -0.5);
    }

    #[test]
    fn half_pairs_rejected() {
        let a = altaz_args(&["--ra", "5 34.5"]);
        assert!(resolve_object(&a, None).is_err());
        let a = altaz_args(&["--lon", "-71 3"]);
        assert!(resolve_observer(&a, None).is_err());
    }

    #[test]
    fn missing_inputs_without_session() {
        let a = altaz_args(&[]);
        assert!(resolve_object(&a, None).is_err());
        assert!(resolve_observer(&a, None).is_err());
    }

    #[test]
    fn flags_override_session() {
        let cfg = SessionConfig::from_toml_str(
            r#"
date = "2021-01-08T23:00:00-05:00"

[object]
name = "M1"
ra = [5.0, 34.5]
dec = [22.0, 1.0]

[observer]
lat = [42.0, 21.0]
lon = [-71.0, 3.0]
"#,
        )
        .unwrap();

        let a = altaz_args(&["--lat", "-33 52", "--lon", "151 12"]);
        let obj = resolve_object(&a, Some(&cfg)).unwrap();
        assert_eq!(obj.name(), "M1");
        let loc = resolve_observer(&a, Some(&cfg)).unwrap();
        assert!((loc.latitude_deg() + 33.0 + 52.0 / 60.0).abs() < 1e-12);

        let when = resolve_date(None, None, Some(&cfg)).unwrap();
        assert_eq!(when.to_rfc3339(), "2021-01-09T04:00:00+00:00");
        let when = resolve_date(Some("2024-12-21T00:00:00Z"), None, Some(&cfg)).unwrap();
        assert_eq!(when.to_rfc3339(), "2024-12-21T00:00:00+00:00");
    }

    #[test]
    fn bad_angle_text_rejected() {
        assert!(matches!(
            parse_angle("lat", "north"),
            Err(CoreError::Angle { field: "lat", .. })
        ));
    }

    #[test]
    fn reference_night_from_flags() {
        let a = altaz_args(&[
            "--ra", "5 34.5", "--dec", "22 1", "--lat", "42 21", "--lon", "-71 3",
        ]);
        let obj = resolve_object(&a, None).unwrap();
        let loc = resolve_observer(&a, None).unwrap();
        let when = resolve_date(Some("2021-01-08T23:00:00-05:00"), None, None).unwrap();
        let h = obj.altaz_at(when, &loc).unwrap();
        assert!((h.altitude_deg - 66.437_636_319_045_27).abs() < 1e-6);
        assert!((h.azimuth_deg.unwrap() - 214.792_151_286_497_95).abs() < 1e-6);
    }

    #[test]
    fn days_for_reference_night() {
        let out = run_to_string(Commands::Days {
            date: "2021-01-08T23:00:00".into(),
            tz: Some("America/New_York".into()),
        });
        assert!(out.contains("UTC: 2021-01-09T04:00:00Z"), "{out}");
        let days = value_after(&out, "Days since J2000.0: ");
        assert!((days - 7678.666_666_666_667).abs() < 1e-9, "days = {days}");
        let jd = value_after(&out, "JD: ");
        assert!((jd - 2_459_223.666_667).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn lst_for_reference_night() {
        let out = run_to_string(Commands::Lst {
            date: "2021-01-09T04:00:00Z".into(),
            tz: None,
            lon: "-71 3".into(),
        });
        let lmst = value_after(&out, "LMST: ");
        assert!((lmst - 97.868_212_134_111_67).abs() < 1e-6, "lmst = {lmst}");
        assert!(out.contains("(6h31m"), "{out}");
        let gmst = value_after(&out, "GMST: ");
        assert!(((gmst - 71.05).rem_euclid(360.0) - lmst).abs() < 1e-6);
    }

    #[test]
    fn dm_prints_decimal() {
        let out = run_to_string(Commands::Dm {
            deg: -71.0,
            min: 3.0,
        });
        assert!((out.trim().parse::<f64>().unwrap() + 71.05).abs() < 1e-12);
    }

    #[test]
    fn bad_date_is_an_error() {
        let mut out = Vec::new();
        let cmd = Commands::Days {
            date: "yesterday".into(),
            tz: None,
        };
        assert!(run(cmd, &mut out).is_err());
        let cmd = Commands::Days {
            date: "2021-01-08T23:00:00".into(),
            tz: Some("Nowhere/Special".into()),
        };
        assert!(run(cmd, &mut out).is_err());
    }

    #[test]
    fn altaz_with_named_zone() {
        let a = altaz_args(&[
            "--ra", "5 34.5", "--dec", "22 1", "--name", "M1", "--lat", "42 21", "--lon",
            "-71 3", "--date", "2021-01-08T23:00:00", "--tz", "America/New_York",
        ]);
        let out = run_to_string(Commands::Altaz(a));
        assert!(out.starts_with("M1; RA 5h34.5m"), "{out}");
        assert!(out.contains("UTC: 2021-01-09T04:00:00Z"), "{out}");
        let alt = value_after(&out, "Alt: ");
        let az = value_after(&out, "Az: ");
        assert!((alt - 66.437_636_319_045_27).abs() < 1e-6, "alt = {alt}");
        assert!((az - 214.792_151_286_497_95).abs() < 1e-6, "az = {az}");
    }

    #[test]
    fn session_zone_used_for_naive_date() {
        let cfg = SessionConfig::from_toml_str(
            r#"
date = "2021-07-08T23:00:00"
tz = "America/New_York"

[object]
name = "M1"
ra = [5.0, 34.5]
dec = [22.0, 1.0]

[observer]
lat = [42.0, 21.0]
lon = [-71.0, 3.0]
"#,
        )
        .unwrap();
        let when = resolve_date(None, None, Some(&cfg)).unwrap();
        assert_eq!(when.to_rfc3339(), "2021-07-09T03:00:00+00:00");
        // --tz overrides the session zone
        let when = resolve_date(None, Some("UTC"), Some(&cfg)).unwrap();
        assert_eq!(when.to_rfc3339(), "2021-07-08T23:00:00+00:00");
    }

    #[test]
    fn summer_session_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/m1_boston_summer.toml");
        let a = altaz_args(&["--config", path]);
        let out = run_to_string(Commands::Altaz(a));
        assert!(out.starts_with("M1 (The Crab Nebula)"), "{out}");
        assert!(out.contains("UTC: 2021-07-09T03:00:00Z"), "{out}");
        let alt = value_after(&out, "Alt: ");
        assert!((-90.0..=90.0).contains(&alt), "alt = {alt}");
    }
}
