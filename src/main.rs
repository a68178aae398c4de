mod cli;

use advising::error::AdvisingError;
use advising::types::assessment::RiskCategory;
use advising::types::config::AdvisingConfig;
use advising::types::schedule::{ScheduleSelection, TutoringSet};
use advising::{config, load, logging, report, scoring};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const MODERATE_RISK: i32 = 1;
    pub const HIGH_RISK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_settings(data_dir: &Path) -> Result<AdvisingConfig, AdvisingError> {
    if !data_dir.is_dir() {
        return Err(AdvisingError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("data directory does not exist: {}", data_dir.display()),
        )));
    }
    let loaded = config::load_config(data_dir)?;
    if loaded.is_none() {
        tracing::info!(
            "no {} found in {}, using defaults",
            config::DEFAULT_CONFIG_FILE,
            data_dir.display()
        );
    }
    Ok(loaded.unwrap_or_default())
}

fn run(cli: cli::Cli) -> Result<i32, AdvisingError> {
    match cli.command {
        cli::Commands::Assess(cmd) => {
            let data_dir = &cmd.data.data_dir;
            let settings = load_settings(data_dir)?;
            let catalog = load::load_catalog(&settings.courses_path(data_dir))?;
            let students = load::load_students(&settings.students_path(data_dir))?;
            let student = load::find_student(students, &cmd.student)?;

            let schedule = ScheduleSelection::new(cmd.courses)?;
            let tutored = TutoringSet::for_selection(&schedule, cmd.tutored)?;
            let assessment = scoring::assess(&student, &catalog, &schedule, &tutored);

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => settings
                    .report
                    .format
                    .as_deref()
                    .and_then(report::OutputFormat::from_config)
                    .unwrap_or(report::OutputFormat::Md),
            };
            let rendered = report::render(&assessment, output_format)?;
            println!("{rendered}");

            Ok(match assessment.assessment.category {
                RiskCategory::Low => exit_code::SUCCESS,
                RiskCategory::Moderate => exit_code::MODERATE_RISK,
                RiskCategory::High => exit_code::HIGH_RISK,
            })
        }
        cli::Commands::Strength(cmd) => {
            let data_dir = &cmd.data.data_dir;
            let settings = load_settings(data_dir)?;
            let students = load::load_students(&settings.students_path(data_dir))?;
            let student = load::find_student(students, &cmd.student)?;
            let breakdown = scoring::strength::strength_breakdown(&student);

            println!("strength for student {}:", student.id);
            println!("- gpa: {:.2}", breakdown.gpa);
            println!("- class_rank: {:.2}", breakdown.rank);
            println!("- act: {:.2}", breakdown.act);
            println!("- dual_credit: {:.2}", breakdown.dual_credit);
            println!("- first_generation: {:.2}", breakdown.first_generation);
            println!("total: {:.2}", breakdown.total);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let data_dir = &cmd.data.data_dir;
            let settings = load_settings(data_dir)?;
            let catalog = load::load_catalog(&settings.courses_path(data_dir))?;

            if catalog.is_empty() {
                println!("catalog: no courses");
                return Ok(exit_code::SUCCESS);
            }

            println!("courses:");
            for course in catalog.iter() {
                println!(
                    "- {} [pass {:.1}% / dfw {:.1}%]",
                    course.name,
                    course.pass_rate,
                    course.dfw_rate()
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
