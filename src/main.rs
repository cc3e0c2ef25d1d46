use anyhow::Context;
use clap::Parser;
use std::io::Write;
use trip_planner::config::toml_config::TripSettings;
use trip_planner::utils::error::ErrorSeverity;
use trip_planner::utils::{logger, validation::Validate};
use trip_planner::{
    format_duration, BudgetBreakdown, CliConfig, OutputFormat, PlanAction, PlannerError, Trip,
    TripConfig,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting trip-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading trip plan from: {}", path);
            match TripConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            }
        }
        None => {
            tracing::info!("📁 No plan given, using the built-in Paris sample");
            sample_config()
        }
    };

    // 應用命令列覆蓋設定
    if let Some(travelers) = cli.travelers {
        config.trip.travelers = travelers;
        tracing::info!("🔧 Traveler count overridden to: {}", travelers);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }
    tracing::info!("✅ Trip plan loaded and validated successfully");

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no actions will be applied");
        println!("Trip: {} ({} travelers)", config.trip.title, config.trip.travelers);
        for (position, action) in config.actions.iter().enumerate() {
            println!("  {:>2}. {}", position + 1, action);
        }
        return Ok(());
    }

    let trip = match build_trip(&config) {
        Ok(trip) => trip,
        Err(e) => fail(&e),
    };

    let output = match render(&trip, cli.format, cli.budget) {
        Ok(output) => output,
        Err(e) => fail(&e),
    };
    std::io::stdout()
        .write_all(output.as_bytes())
        .context("failed to write trip output")?;

    tracing::info!(
        "✅ Planned {} day(s), {} item(s), ${} total",
        trip.days().len(),
        trip.item_count(),
        trip.group_total_cost()
    );
    Ok(())
}

fn build_trip(config: &TripConfig) -> trip_planner::Result<Trip> {
    let mut planner = config.build_planner()?;
    planner.replay(&config.actions)?;
    Ok(planner.into_trip())
}

fn sample_config() -> TripConfig {
    let drop = |item: &str, day: usize| PlanAction::DropItem {
        item: item.to_string(),
        day,
    };

    TripConfig {
        trip: TripSettings {
            title: "My Paris Adventure".to_string(),
            start_date: chrono::Local::now().date_naive(),
            travelers: 2,
        },
        catalog: None,
        actions: vec![
            PlanAction::AddDay,
            drop("dest-1", 0),
            drop("acc-1", 0),
            drop("dest-2", 1),
            drop("act-1", 1),
        ],
    }
}

fn render(trip: &Trip, format: OutputFormat, budget: bool) -> trip_planner::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(trip, budget)),
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "trip": trip,
                "summary": trip.summary(),
            });
            if budget {
                value["budget"] = serde_json::to_value(trip.budget_breakdown())?;
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
        }
        OutputFormat::Csv => render_csv(&trip.budget_breakdown()),
    }
}

fn render_text(trip: &Trip, budget: bool) -> String {
    let summary = trip.summary();
    let mut out = String::new();

    out.push_str(&format!("{}\n", summary.title));
    out.push_str(&format!(
        "{} days • {} travelers • ${} total\n\n",
        summary.day_count, summary.travelers, summary.group_cost
    ));

    for day in trip.days() {
        out.push_str(&format!("Day {}: {}\n", day.day_number, day.date.format("%A, %B %-d, %Y")));
        if day.is_empty() {
            out.push_str("  (nothing planned yet)\n");
        }
        for item in day.schedule() {
            let start = item.details.start_time.as_deref().unwrap_or("--:--");
            out.push_str(&format!(
                "  {} {:<24} {:<14} ${:<6} {}\n",
                start,
                item.details.title,
                item.details.kind,
                item.details.cost_per_person,
                format_duration(item.details.duration_hours)
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("Total Cost:  ${}\n", summary.group_cost));
    out.push_str(&format!("Duration:    {}\n", summary.duration));
    out.push_str(&format!("Travelers:   {}\n", summary.travelers));
    out.push_str(&format!("Per Person:  ${}\n", summary.per_person_cost.round()));

    if budget {
        let breakdown = trip.budget_breakdown();
        out.push_str("\nBudget Breakdown\n");
        for day in &breakdown.days {
            out.push_str(&format!("  Day {} (${})\n", day.day_number, day.subtotal));
            for line in &day.lines {
                out.push_str(&format!("    {:<24} ${}\n", line.title, line.cost_per_person));
            }
        }
        out.push_str(&format!(
            "  Total for {} travelers: ${}\n",
            breakdown.travelers, breakdown.group_total
        ));
    }

    out
}

fn render_csv(breakdown: &BudgetBreakdown) -> trip_planner::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["day", "date", "item", "kind", "cost_per_person"])?;
    for (day, line) in breakdown.lines() {
        writer.write_record([
            day.day_number.to_string(),
            day.date.to_string(),
            line.title.clone(),
            line.kind.to_string(),
            line.cost_per_person.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| PlannerError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn fail(e: &PlannerError) -> ! {
    tracing::error!(
        "❌ trip-planner failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
