use anyhow::Context;
use clap::Parser;
use slider_chrome::core::simulation::{Cause, SimulationReport};
use slider_chrome::domain::model::IndicatorStrip;
use slider_chrome::utils::{logger, validation::Validate};
use slider_chrome::{CliConfig, Scenario, Simulation, SliderConfig, SliderError};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting slider-sim");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading slider config from: {}", path);
            load_or_exit(SliderConfig::from_file(path))
        }
        None => SliderConfig::default(),
    };
    exit_on_invalid(config.validate());

    tracing::info!("Loading scenario from: {}", args.scenario);
    let scenario = load_or_exit(Scenario::from_file(&args.scenario));
    exit_on_invalid(scenario.validate());

    let surface = load_or_exit(scenario.surface());
    let Some(simulation) = Simulation::mount(surface, config.settings()) else {
        tracing::warn!("Scenario surface has no slides; nothing to simulate");
        println!("Carousel not mounted: the surface has no slides.");
        return Ok(());
    };

    let report = simulation.run(&scenario.scheduled_events(), scenario.duration());

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(SliderError::from)
            .context("rendering JSON report")?;
        println!("{}", rendered);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_or_exit<T>(result: slider_chrome::Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to load input: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn exit_on_invalid(result: slider_chrome::Result<()>) {
    if let Err(e) = result {
        tracing::error!("Validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn print_report(report: &SimulationReport) {
    println!("Slider Summary:");
    println!("  Slides: {}", report.slides);
    println!("  Band: {:?} (max index {})", report.band, report.max_index);
    println!("  Final index: {}", report.final_state.current_index);
    let autoplay = if report.final_state.autoplay_active {
        "running"
    } else {
        "paused"
    };
    println!("  Autoplay: {}", autoplay);
    println!("  Transform: {}", report.transform);
    match &report.indicators {
        IndicatorStrip::Hidden => println!("  Indicators: hidden"),
        IndicatorStrip::Visible(dots) => {
            let row: String = dots.iter().map(|d| if d.active { '●' } else { '○' }).collect();
            println!("  Indicators: {}", row);
        }
    }

    println!();
    println!("Timeline:");
    for entry in &report.timeline {
        let cause = match &entry.cause {
            Cause::Mounted => "mounted".to_string(),
            Cause::Event { event } => format!("{:?}", event),
            Cause::Timer { timer } => format!("{:?}", timer),
        };
        println!("  {:>7} ms  index {:<3} {}", entry.at_ms, entry.index, cause);
    }
}
