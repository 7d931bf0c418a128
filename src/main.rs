//! CLI entry point for the course rater tool.
//!
//! Provides subcommands for running the sample campus demo, aggregating a
//! course across grade books, and exporting summaries to CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use course_rater::campus::{load_books, sample_campus};
use course_rater::rating::compare::compare;
use course_rater::rating::course_average;
use course_rater::report::{CourseReport, RatingSummary, append_summary, print_pretty};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_rater")]
#[command(about = "A tool to average and aggregate course grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample campus and print summaries and course averages
    Demo,
    /// Average a course across a set of grade books
    Course {
        /// Course name to aggregate
        #[arg(value_name = "NAME")]
        name: String,

        /// JSON file with an array of grade books; defaults to the sample
        /// campus's student books
        #[arg(short, long)]
        books: Option<String>,
    },
    /// Append the sample campus's summaries to a CSV file
    Export {
        /// CSV file to append results to
        #[arg(short, long, default_value = "summaries.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/course_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("course_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo()?,
        Commands::Course { name, books } => {
            let books = match books {
                Some(path) => load_books(&path)?,
                None => sample_campus()?.student_books(),
            };
            let report = CourseReport::build(&name, &books)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Export { output } => {
            let campus = sample_campus()?;
            let mut rows = 0usize;
            for student in &campus.students {
                append_summary(&output, &RatingSummary::from_rated(student, "student"))?;
                rows += 1;
            }
            for lecturer in &campus.lecturers {
                append_summary(&output, &RatingSummary::from_rated(lecturer, "lecturer"))?;
                rows += 1;
            }
            info!(rows, output, "Summaries exported");
        }
    }

    Ok(())
}

/// Builds the sample campus and prints everyone's standing, the pairwise
/// comparisons, and the two cross-book course averages.
fn demo() -> Result<()> {
    let campus = sample_campus()?;

    println!("-- Students --");
    for student in &campus.students {
        let summary = RatingSummary::from_rated(student, "student");
        print_pretty(&summary);
        println!("{}: {}", summary.fullname, render_average(summary.average));
    }

    println!("\n-- Lecturers --");
    for lecturer in &campus.lecturers {
        let summary = RatingSummary::from_rated(lecturer, "lecturer");
        print_pretty(&summary);
        println!("{}: {}", summary.fullname, render_average(summary.average));
    }

    println!("\n-- Comparisons --");
    println!("{}", compare(&campus.students[0], &campus.students[1])?);
    println!("{}", compare(&campus.lecturers[0], &campus.lecturers[1])?);

    println!("\n-- Course averages --");
    let python = course_average("Python", &campus.student_books())?;
    println!("Python homework, all students: {python}");
    let git = course_average("Git", &campus.lecturer_books())?;
    println!("Git lectures, all lecturers: {git}");

    Ok(())
}

fn render_average(average: Option<f64>) -> String {
    match average {
        Some(value) => value.to_string(),
        None => "no grades yet".to_string(),
    }
}
