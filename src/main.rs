use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

use gradebook::config::Config;
use gradebook::record::{RecordError, StudentRecord};
use gradebook::subjects::{CsvSubjects, SubjectSource};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 2;
const EXIT_REJECTED: i32 = 3;
const EXIT_RECORD: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record configured entries and print averages (default if no subcommand)
    Report,
    /// List the subjects the configured student may be graded in
    Subjects,
    /// Run a scripted walkthrough, ending with a deliberately invalid subject
    Demo {
        /// CSV file with a "Предмет" column (defaults to a built-in list)
        #[arg(long)]
        subjects_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Per-subject grades, test results and averages for one student", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gradebook/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Report);

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false).with_writer(std::io::stderr))
        .with(level)
        .init();

    let use_colors = gradebook::output::should_use_colors();

    let code = match command {
        Commands::Demo { subjects_file } => run_demo(subjects_file, use_colors),
        Commands::Subjects => match load_record(cli.config) {
            Ok((record, _)) => {
                for subject in record.subjects() {
                    println!("{}", subject);
                }
                EXIT_SUCCESS
            }
            Err(code) => code,
        },
        Commands::Report => match load_record(cli.config) {
            Ok((record, config)) => run_report(record, &config, cli.json, use_colors),
            Err(code) => code,
        },
    };

    std::process::exit(code);
}

fn run_demo(subjects_file: Option<PathBuf>, use_colors: bool) -> i32 {
    let subjects: Box<dyn SubjectSource> = match subjects_file {
        Some(path) => Box::new(CsvSubjects::new(path)),
        None => Box::new(gradebook::demo::default_subjects()),
    };

    let mut stdout = std::io::stdout().lock();
    match gradebook::demo::run_demo(&mut stdout, subjects.as_ref(), use_colors) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Demo failed: {:#}", e);
            EXIT_RECORD
        }
    }
}

/// Load and validate config, then build the record it describes.
/// On failure the error has been reported and the exit code is returned.
fn load_record(config_path: Option<String>) -> Result<(StudentRecord, Config), i32> {
    let config = match gradebook::config::load_config(config_path.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    if let Err(errors) = gradebook::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    let source = gradebook::config::subject_source(&config);
    let record = match StudentRecord::from_source(&config.student, source.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            match e.downcast_ref::<RecordError>() {
                Some(record_error) => eprintln!("Invalid student: {}", record_error),
                None => eprintln!("Subject list error: {:#}", e),
            }
            return Err(EXIT_RECORD);
        }
    };

    let duplicates = gradebook::config::duplicate_subjects(record.subjects());
    if !duplicates.is_empty() {
        tracing::warn!(
            "Duplicate subjects share one slot: {}",
            duplicates.join(", ")
        );
    }

    tracing::debug!(
        "Record for {} with {} subjects",
        record.name(),
        record.subjects().len()
    );

    Ok((record, config))
}

fn run_report(mut record: StudentRecord, config: &Config, json: bool, use_colors: bool) -> i32 {
    let rejected = gradebook::replay::replay_entries(&mut record, &config.entries);
    let stderr_colors = gradebook::output::should_use_colors_stderr();
    for r in &rejected {
        let message = format!("entries[{}]: {}", r.index, r.error);
        eprintln!(
            "{}",
            gradebook::output::format_error(&message, stderr_colors)
        );
    }

    let summary = record.summary();
    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return EXIT_RECORD;
            }
        }
    } else {
        println!("{}", gradebook::output::format_report(&summary, use_colors));
    }

    if rejected.is_empty() {
        EXIT_SUCCESS
    } else {
        tracing::debug!(
            "{} of {} entries rejected",
            rejected.len(),
            config.entries.len()
        );
        EXIT_REJECTED
    }
}
