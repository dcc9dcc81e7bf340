use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand, ValueEnum};
use saju_base::{
    ALL_POSITIONS, BirthInput, Gender, MonthDepth, Pillar, PillarPosition, governing_term_date,
    year_pillar,
};
use saju_config::SajuConfig;
use saju_rs::{Analysis, Reading, SajuService};
use saju_time::CivilDate;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars (saju) chart CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars with Ten Gods, five elements, and yongsin/gisin
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Ten 10-year luck cycles
    Daeun {
        #[command(flatten)]
        birth: BirthArgs,
        /// Year used to mark the current cycle (default: this year)
        #[arg(long)]
        as_of: Option<i32>,
    },
    /// Fortune scores per category
    Scores {
        #[command(flatten)]
        birth: BirthArgs,
        /// Identity salt (overrides scoring.identity_salt)
        #[arg(long)]
        identity: Option<u32>,
    },
    /// Period forecasts at the configured offsets
    Forecast {
        #[command(flatten)]
        birth: BirthArgs,
        /// Reference year (default: this year)
        #[arg(long)]
        as_of: Option<i32>,
    },
    /// Year pillar and zodiac animal
    Year {
        /// Calendar year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Governing solar term for a date
    SolarTerm {
        /// Date (YYYY-MM-DD)
        date: CivilDate,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    date: CivilDate,
    /// Birth hour, 0-23
    #[arg(long, default_value = "0")]
    hour: u32,
    #[arg(long, value_enum, default_value = "male")]
    gender: GenderArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

impl BirthArgs {
    fn input(&self) -> BirthInput {
        BirthInput::from_date(self.date, self.hour, self.gender.into()).unwrap_or_else(|e| fail(e))
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> SajuConfig {
    match path {
        Some(p) => SajuConfig::load(p).unwrap_or_else(|e| fail(e)),
        None => SajuConfig::default(),
    }
}

fn init_tracing(config: &SajuConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Proleptic Gregorian year of a Unix timestamp.
fn year_of_unix_secs(secs: u64) -> i32 {
    let days = (secs / 86_400) as i64;
    CivilDate::new(1970, 1, 1)
        .map(|epoch| epoch.add_days(days).year())
        .unwrap_or(1970)
}

fn this_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_of_unix_secs(secs)
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn position_label(p: PillarPosition) -> &'static str {
    match p {
        PillarPosition::Year => "year",
        PillarPosition::Month => "month",
        PillarPosition::Day => "day",
        PillarPosition::Hour => "hour",
    }
}

fn pillar_line(p: &Pillar) -> String {
    format!(
        "{p} {}/{} {}",
        p.stem.element().name(),
        p.branch.element().name(),
        p.branch.animal().name()
    )
}

fn print_reading(r: &Reading) {
    for pos in ALL_POSITIONS {
        let p = r.chart.pillar(pos);
        let god = r
            .ten_gods
            .at(pos)
            .map_or("day master", |g| g.korean());
        println!("{:<6} {}  [{}]", position_label(pos), pillar_line(&p), god);
    }
    println!(
        "Day master: {} ({} {})",
        r.chart.day_master.korean(),
        r.chart.day_master.polarity().korean(),
        r.chart.day_master.element().name()
    );
    let secondary = r.ten_gods.secondary.map_or("-", |g| g.korean());
    println!("Ten Gods: primary {}, secondary {}", r.ten_gods.primary.korean(), secondary);

    let fe = &r.five_elements;
    let shares: Vec<String> = saju_base::ALL_ELEMENTS
        .iter()
        .map(|e| format!("{} {}%", e.name(), fe.percent(*e)))
        .collect();
    println!("Elements: {}", shares.join(", "));
    println!(
        "Strongest {}, weakest {}, balance {}",
        fe.strongest.name(),
        fe.weakest.name(),
        fe.balance_score()
    );
    println!(
        "Season {}: yongsin {}, gisin {}",
        r.season.name(),
        r.yongsin_gisin.yongsin.name(),
        r.yongsin_gisin.gisin.name()
    );
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    init_tracing(&config);
    let service = SajuService::new(config).unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Chart { birth } => {
            let input = birth.input();
            let analysis = service.analyze(&input).unwrap_or_else(|e| fail(e));
            if cli.json {
                let value = match &analysis {
                    Analysis::Basic(r) => serde_json::json!({ "reading": r }),
                    Analysis::Enhanced(e) => serde_json::json!({ "enhanced": e }),
                    Analysis::Degraded { reading, cause } => serde_json::json!({
                        "reading": reading,
                        "degraded": cause.to_string(),
                    }),
                };
                print_json(&value);
                return;
            }
            print_reading(analysis.reading());
            match &analysis {
                Analysis::Enhanced(e) => {
                    println!(
                        "Solar term {} ({}), {} of month, day master {}",
                        e.month.governing_term.korean(),
                        e.month.term_date,
                        e.month.depth.korean(),
                        e.month.day_master_vitality.hanja()
                    );
                    println!("Format: {}", e.format.korean());
                    println!("Luck cycles run {}", e.luck.direction.name());
                }
                Analysis::Degraded { cause, .. } => {
                    eprintln!("warning: basic analysis only ({cause})");
                }
                Analysis::Basic(_) => {}
            }
        }

        Commands::Daeun { birth, as_of } => {
            let input = birth.input();
            let timeline = service.luck_timeline(&input);
            if cli.json {
                print_json(&timeline);
                return;
            }
            let as_of = as_of.unwrap_or_else(this_year);
            let current = timeline.current_for_year(input.year(), as_of).ok();
            println!("Direction: {} ({})", timeline.direction.name(), timeline.direction.korean());
            for c in timeline.iter() {
                let marker = if current == Some(c) { "*" } else { " " };
                println!(
                    "{marker} {:>2}-{:<2} {}  [{}]",
                    c.age_range.start,
                    c.age_range.end,
                    c.pillar,
                    c.ten_god.korean()
                );
            }
        }

        Commands::Scores { birth, identity } => {
            let input = birth.input();
            let scores = match identity {
                Some(salt) => service.fortune_scores_for(&input, salt),
                None => service.fortune_scores(&input),
            }
            .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&scores);
                return;
            }
            for c in saju_base::ALL_SCORE_CATEGORIES {
                println!("{:<8} {}", c.name(), scores.get(c));
            }
        }

        Commands::Forecast { birth, as_of } => {
            let input = birth.input();
            let as_of = as_of.unwrap_or_else(this_year);
            let periods = service
                .period_forecasts(&input, as_of)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&periods);
                return;
            }
            for p in &periods {
                let ratings: Vec<String> = saju_base::ALL_FORECAST_CATEGORIES
                    .iter()
                    .map(|c| format!("{} {}", c.name(), p.rating(*c).korean()))
                    .collect();
                println!(
                    "{} (age {}): {} -> {}",
                    p.year,
                    p.age,
                    ratings.join(", "),
                    p.outlook.name()
                );
            }
        }

        Commands::Year { year } => {
            let p = year_pillar(year);
            if cli.json {
                print_json(&serde_json::json!({
                    "year": year,
                    "pillar": p,
                    "korean": p.korean(),
                    "hanja": p.hanja(),
                    "animal": p.branch.animal().name(),
                }));
                return;
            }
            println!(
                "{year}: {p}, year of the {} ({})",
                p.branch.animal().name(),
                p.branch.animal_korean()
            );
        }

        Commands::SolarTerm { date } => {
            let (term, start) = governing_term_date(&date).unwrap_or_else(|| {
                fail(format!("no solar term governs {date}"))
            });
            let depth = MonthDepth::from_days_since_term(start.days_until(&date));
            if cli.json {
                print_json(&serde_json::json!({
                    "term": term,
                    "korean": term.korean(),
                    "start": start.to_string(),
                    "longitude_deg": term.solar_longitude_deg(),
                    "season": term.season(),
                    "depth": depth,
                }));
                return;
            }
            println!(
                "{} ({}) from {start}, {} deg, {} season, {}",
                term.korean(),
                term.hanja(),
                term.solar_longitude_deg(),
                term.season().name(),
                depth.korean()
            );
        }
    }
}
