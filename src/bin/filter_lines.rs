use std::env;
use std::path::Path;

use track_detector::config::filter;
use track_detector::io::{read_records_csv, write_json_file, write_records_csv};
use track_detector::prelude::*;
use track_detector::report::FilterReport;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = filter::load_config(Path::new(&config_path))?;
    let options = config.merge.to_options();

    let records = read_records_csv(&config.input)?;
    let segments = records_to_segments(&records).map_err(|e| e.to_string())?;
    let merged = filter_by_image(segments.clone(), &options);
    let report = FilterReport::tally(&segments, &merged);

    write_records_csv(&config.output, &segments_to_records(&merged))?;
    if let Some(report_path) = &config.report_json {
        write_json_file(report_path, &report)?;
        println!("Saved filter report to {}", report_path.display());
    }

    println!(
        "Filtered {} lines down to {} across {} images, saved to {}",
        report.total_input,
        report.total_output,
        report.images.len(),
        config.output.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: filter_lines <config.json>".to_string()
}
