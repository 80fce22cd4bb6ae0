mod cli;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use wavsnip_core::{read, write, Segment, Walker, WriteOptions};

use crate::cli::build_cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();

    let root = matches
        .get_one::<PathBuf>("root")
        .expect("required argument");
    if !root.exists() {
        return Err(anyhow!("input path does not exist: {}", root.display()));
    }

    let output_dir = matches
        .get_one::<PathBuf>("output")
        .expect("defaulted argument")
        .clone();
    let gain_db = *matches
        .get_one::<f32>("gain-db")
        .expect("defaulted argument");
    let segments: Vec<Segment> = matches
        .get_many::<Segment>("segment")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    let walker = Walker::new(root);

    if matches.get_flag("list") {
        for path in walker.recordings() {
            println!("{}", path.display());
        }
        println!("{} recording(s)", walker.count());
        return Ok(());
    }

    if walker.count() == 0 {
        println!("No recordings found under '{}'.", root.display());
        return Ok(());
    }

    let progress = ProgressBar::new(walker.count() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let options = WriteOptions {
        gain_db,
        output_dir: Some(output_dir),
        segments,
    };

    let mut failures = 0usize;
    for path in walker.recordings() {
        progress.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        if let Err(err) = process_recording(path, &options) {
            error!("{err:#}");
            failures += 1;
        }
        progress.inc(1);
    }
    progress.finish_with_message("done");

    if failures > 0 {
        return Err(anyhow!(
            "{failures} of {} recording(s) failed to process",
            walker.count()
        ));
    }

    Ok(())
}

/// Read one recording, run the write pipeline, and persist the result.
fn process_recording(path: &Path, options: &WriteOptions) -> anyhow::Result<()> {
    let buffer =
        read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    write(path, &buffer, options)
        .with_context(|| format!("failed to write output for '{}'", path.display()))?;
    Ok(())
}
