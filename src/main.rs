use tracing_subscriber::EnvFilter;

use tour_navigators::config::{AppConfig, RunMode};
use tour_navigators::display::{
    print_assignment_report, print_availabilities, print_tour_counts, print_weekly_schedule, write_schedule_to_file,
};
use tour_navigators::form::export_schedule_to_csv;
use tour_navigators::parser::{load_group_tours, load_roster};
use tour_navigators::sample::sample_roster;
use tour_navigators::{web, Coordinator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let mut coordinator = Coordinator::with_seed(config.seed);

    match &config.roster_csv {
        Some(path) => {
            println!("Loading roster from {}...", path.display());
            coordinator.import_navigators(load_roster(path)?)?;
        }
        None => {
            println!("No roster file found, using the sample roster");
            coordinator.import_navigators(sample_roster()?)?;
        }
    }
    println!("Loaded {} navigators", coordinator.roster().len());

    if let Some(path) = &config.group_tours_csv {
        let tours = load_group_tours(path)?;
        println!("Loaded {} group tours from {}", tours.len(), path.display());
        coordinator.import_group_tours(tours)?;
    }

    if let RunMode::Web { port } = config.mode {
        println!("Starting web server on port {}...", port);
        println!("Access the API at http://localhost:{}/api/schedule", port);
        web::start_server(port, coordinator).await?;
        return Ok(());
    }

    print_availabilities(&coordinator.availabilities());

    // CLI mode offers every walk-in slot
    coordinator.open_all_walk_ins();

    println!("\n\n=== Running Assignment ===");
    let report = coordinator.run_assignment()?;
    print_assignment_report(&report);

    let schedule = coordinator.weekly_schedule();
    print_weekly_schedule(&schedule);
    print_tour_counts(&coordinator.tour_counts());

    println!("\n=== Writing Schedule to Files ===");
    std::fs::create_dir_all(&config.output_dir)?;
    let text_path = config.output_dir.join("weekly_tours.txt");
    let csv_path = config.output_dir.join("weekly_tours.csv");
    write_schedule_to_file(&schedule, &text_path)?;
    export_schedule_to_csv(&schedule, &csv_path)?;
    println!("Schedule saved to:");
    println!("  - {}", text_path.display());
    println!("  - {}", csv_path.display());

    Ok(())
}
