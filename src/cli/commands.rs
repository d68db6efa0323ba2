use anyhow::Context;
use chrono::NaiveDate;

use crate::cli::args::{Cli, Commands, Selection};
use crate::models::ExtremeKind;
use crate::pipeline::{self, Dataset, FilterRequest};
use crate::utils::dates::format_day;
use crate::utils::progress::ProgressReporter;
use crate::utils::style::style_for_station;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Info { data } => {
            let dataset = load_dataset(&data, cli.quiet)?;
            print_summary(&dataset);
        }

        Commands::Series { selection } => {
            let (dataset, request) = prepare(&selection, cli.quiet)?;
            let output = pipeline::run(&dataset, &request)?;

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&output.line_series)?);
                return Ok(());
            }

            println!(
                "Trend of {} for {} - {}",
                request.pollutant,
                format_day(request.start_date),
                format_day(request.end_date)
            );

            if output.line_series.is_empty() {
                println!("No data for this selection");
                return Ok(());
            }

            for series in &output.line_series {
                let index = dataset
                    .stations()
                    .iter()
                    .position(|s| *s == series.station)
                    .unwrap_or(0);
                let style = style_for_station(index);
                let plotted = series.points.iter().filter(|p| p.value.is_some()).count();
                println!(
                    "  {:<16} {} points ({} with data) [{}, {}]",
                    series.station,
                    series.points.len(),
                    plotted,
                    style.color,
                    style.line_style
                );
            }
        }

        Commands::Trends { selection } => {
            let (dataset, request) = prepare(&selection, cli.quiet)?;
            let output = pipeline::run(&dataset, &request)?;

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&output.extremes)?);
                return Ok(());
            }

            println!("{} extremes by time of day", request.pollutant);

            if output.extremes.is_empty() {
                println!("No {} readings in this window", request.pollutant);
                return Ok(());
            }

            for extreme in &output.extremes {
                let kind = match extreme.kind {
                    ExtremeKind::Max => "max",
                    ExtremeKind::Min => "min",
                };
                println!(
                    "  {:<10} {}: {:>8.1} at {} ({})",
                    extreme.category, kind, extreme.value, extreme.station, extreme.timestamp
                );
            }
        }

        Commands::Heatmap { selection } => {
            let (dataset, request) = prepare(&selection, cli.quiet)?;
            let output = pipeline::run(&dataset, &request)?;

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&output.heatmap)?);
                return Ok(());
            }

            match output.heatmap {
                Some(layer) => {
                    println!(
                        "{} heatmap: {} points, center ({:.4}, {:.4})",
                        layer.pollutant,
                        layer.points.len(),
                        layer.center_latitude,
                        layer.center_longitude
                    );
                }
                None => println!(
                    "No geodata for {} in this selection",
                    request.pollutant
                ),
            }
        }
    }

    Ok(())
}

fn load_dataset(path: &std::path::Path, quiet: bool) -> anyhow::Result<Dataset> {
    let progress = ProgressReporter::new_spinner("Loading measurements...", quiet);
    let dataset = Dataset::load_csv(path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    progress.finish_with_message(&format!("Loaded {} measurements", dataset.len()));
    Ok(dataset)
}

/// Load the dataset and resolve the request, defaulting omitted dates to the
/// dataset's covered range.
fn prepare(selection: &Selection, quiet: bool) -> anyhow::Result<(Dataset, FilterRequest)> {
    let dataset = load_dataset(&selection.data, quiet)?;

    let fallback = NaiveDate::default();
    let (first, last) = dataset
        .time_range()
        .map(|(f, l)| (f.date(), l.date()))
        .unwrap_or((fallback, fallback));

    let request = FilterRequest {
        start_date: selection.start.unwrap_or(first),
        end_date: selection.end.unwrap_or(last),
        station: selection.station.clone(),
        pollutant: selection.pollutant,
    };

    Ok((dataset, request))
}

fn print_summary(dataset: &Dataset) {
    let summary = dataset.summary();

    println!("Records: {}", summary.records);
    println!("Stations: {}", summary.stations.len());
    for station in &summary.stations {
        println!("  - {}", station);
    }

    match summary.time_range {
        Some((first, last)) => println!("Covered range: {} to {}", first, last),
        None => println!("Covered range: (empty dataset)"),
    }

    println!("Pollutant coverage:");
    for kind in crate::models::PollutantKind::ALL {
        println!(
            "  {:<6} {:>5.1}%",
            kind,
            summary.coverage[kind.index()] * 100.0
        );
    }
}
