use std::env;
use std::path::Path;

use track_detector::config::background;
use track_detector::image::{load_grayscale_image, save_grayscale_image, subtract_background};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = background::load_config(Path::new(&config_path))?;

    let photo = load_grayscale_image(&config.input)?;
    let bkgnd = load_grayscale_image(&config.background)?;
    let cleaned = subtract_background(&photo, &bkgnd)?;
    save_grayscale_image(&cleaned, &config.output)?;

    println!(
        "Removed background from {} ({}x{}), saved to {}",
        config.input.display(),
        photo.width(),
        photo.height(),
        config.output.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: remove_background <config.json>".to_string()
}
