use anyhow::Context;
use caddie_stats::config::toml_config::TomlConfig;
use caddie_stats::core::ConfigProvider;
use caddie_stats::utils::{logger, validation::Validate};
use caddie_stats::{
    CliConfig, CourseRating, JsonRoundStore, PdgaLiveLinks, RatingEngine, RatingStatus,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    match args.config.clone() {
        Some(path) => {
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to load config file '{}': {}", path, e);
                    std::process::exit(1);
                }
            };
            apply_overrides(&mut config, &args);
            init_logger(args.log_json || config.log_json(), args.verbose);
            run(&args, config).await
        }
        None => {
            init_logger(args.log_json, args.verbose);
            let config = args.clone();
            run(&args, config).await
        }
    }
}

fn init_logger(json: bool, verbose: bool) {
    if json {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(verbose);
    }
}

/// Explicit flags win over whatever the TOML file supplies.
fn apply_overrides(config: &mut TomlConfig, args: &CliConfig) {
    if let Some(data_file) = &args.data_file {
        config.source.get_or_insert_with(Default::default).rounds_file = Some(data_file.clone());
    }
    if let Some(gap) = args.cluster_gap {
        config
            .aggregation
            .get_or_insert_with(Default::default)
            .cluster_gap = Some(gap);
    }
    if let Some(min_rounds) = args.min_rounds {
        config
            .aggregation
            .get_or_insert_with(Default::default)
            .min_group_size = Some(min_rounds);
    }
    if let Some(base) = &args.event_url_base {
        config.links.get_or_insert_with(Default::default).event_url_base = Some(base.clone());
    }
}

async fn run<C: ConfigProvider + Validate>(args: &CliConfig, config: C) -> anyhow::Result<()> {
    tracing::info!("Starting caddie-stats");
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let store = JsonRoundStore::new(config.rounds_file().to_string());
    let links = PdgaLiveLinks::new(config.event_url_base().to_string());
    let engine = RatingEngine::new(store, config);

    if args.list_courses {
        let names = engine
            .course_names()
            .await
            .context("failed to read the rounds file")?;
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(course) = args.course.as_deref() else {
        eprintln!("A course name is required unless --list-courses is given");
        std::process::exit(1);
    };

    let mut rating = engine
        .course_rating(course)
        .await
        .context("course aggregation failed")?;

    if !args.keywords.is_empty() {
        let keywords: Vec<&str> = args.keywords.iter().map(String::as_str).collect();
        rating
            .layouts
            .sort_by_key(|layout| std::cmp::Reverse(layout.score_layout_tokens(&keywords)));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rating)?);
        return Ok(());
    }

    print_report(&rating, &links);
    Ok(())
}

fn print_report(rating: &CourseRating, links: &PdgaLiveLinks) {
    match rating.status {
        RatingStatus::Success => {}
        RatingStatus::NoRounds => {
            println!("No rounds recorded for {}", rating.course_name);
            return;
        }
        RatingStatus::NoLayouts => {
            println!("No usable layout data for {}", rating.course_name);
            return;
        }
        _ => {
            println!("No layouts matched for {}", rating.course_name);
            return;
        }
    }

    println!("{}: {} layout(s)", rating.course_name, rating.num_results);
    for (position, layout) in rating.layouts.iter().enumerate() {
        println!();
        println!("#{} {}", position + 1, layout.descriptive_name);
        println!("  {}", layout.course_metadata());
        println!(
            "  {} rounds across {} tournaments, distance spread {} feet",
            layout.num_layouts,
            layout.num_tournaments,
            layout.distance_std_dev()
        );
        for column in layout.hole_distance_columns(3) {
            for line in column.lines() {
                println!("    {}", line);
            }
        }
        for link in layout.layout_links(links) {
            println!("  {}", link);
        }
    }
}
