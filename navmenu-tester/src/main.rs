mod catalog;
mod reports;
mod runner;
mod scenario;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use catalog::{get_scenario, list_scenarios};
use runner::{ScenarioResult, run_scenario};
use scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "navmenu-tester", version)]
#[command(about = "Replay interaction scenarios against the navigation menu controller")]
struct Args {
    /// Built-in scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// Additional scenario files (JSON); may be repeated
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// List all built-in scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Print state after every step
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        writeln!(output_target, "Available scenarios:")?;
        for (key, description) in list_scenarios() {
            writeln!(output_target, "  {key:20} - {description}")?;
        }
        output_target.flush()?;
        return Ok(());
    }

    if args.report == ReportFormat::Console {
        println!("{}", "🧭 Navigation Menu Tester".bright_cyan().bold());
        println!("{}", "=========================".cyan());
    }

    let start_time = Instant::now();
    let scenarios = collect_scenarios(&args)?;
    log::info!("running {} scenarios", scenarios.len());

    let results: Vec<ScenarioResult> = scenarios
        .iter()
        .map(|scenario| {
            if args.verbose {
                println!("▶ {}", scenario.name);
            }
            run_scenario(scenario, args.verbose)
        })
        .collect();

    write_report(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn collect_scenarios(args: &Args) -> Result<Vec<Scenario>> {
    let mut keys = split_csv(&args.scenarios);
    if keys.iter().any(|k| k == "all") {
        keys = list_scenarios()
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect();
    }
    // An explicit file list replaces the default built-in set.
    if !args.files.is_empty() && args.scenarios == "all" {
        keys.clear();
    }

    let mut scenarios = Vec::with_capacity(keys.len() + args.files.len());
    for key in keys {
        let Some(scenario) = get_scenario(&key) else {
            bail!("unknown scenario `{key}` (see --list-scenarios)");
        };
        scenarios.push(scenario);
    }
    for path in &args.files {
        scenarios.push(Scenario::from_file(path)?);
    }
    Ok(scenarios)
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn write_report(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => reports::generate_markdown_report(&mut output_target, results)?,
        ReportFormat::Console => {
            reports::generate_console_report(&mut output_target, results, start_time.elapsed())?;
        }
    }
    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
