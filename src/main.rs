use clap::Parser;
use data_processor::utils::{logger, validation::validate_path, validation::Validate};
use data_processor::{
    check, transform, try_transform, CliConfig, Command, DataProcessor, JobConfig, JobRunner,
    Mode, Result,
};

fn main() {
    let config = CliConfig::parse();

    // Logging
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    match &config.command {
        Command::Transform { input, mode } => {
            let result = if config.strict {
                try_transform(*input, &Mode::from(mode.as_str()))?
            } else {
                transform(*input, mode)
            };
            println!("{}", result);
        }
        Command::Validate { values } => {
            if config.strict {
                check(values)?;
                println!("true");
            } else {
                println!("{}", data_processor::validate(values));
            }
        }
        Command::Append { values } => {
            let mut processor = DataProcessor::new();
            for &value in values {
                if config.strict {
                    processor.try_append(value)?;
                } else {
                    processor.append(value);
                }
            }
            println!("{}", serde_json::to_string_pretty(&processor.snapshot())?);
        }
        Command::Run { job } => {
            validate_path("--job", job)?;
            tracing::info!("📁 Loading job from: {}", job.display());

            // Load and validate the job before running it
            let job_config = JobConfig::from_file(job)?;
            job_config.validate()?;

            let mut runner = JobRunner::new(DataProcessor::new()).strict(config.strict);
            let report = runner.run(&job_config)?;

            tracing::info!("✅ Job '{}' completed", report.name);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
