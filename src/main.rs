// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use ispd_cts_viewer::export::{export_coordinates_to_csv, export_sinks_to_csv};
use ispd_cts_viewer::input::reader::InputReader;
use ispd_cts_viewer::output::reader::OutputReader;
use ispd_cts_viewer::render::{self, CoordinateTable, RenderConfig};
use ispd_cts_viewer::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Problem only: source, sinks and blockages
    Input,
    /// Problem with the solution topology drawn on top
    Output,
}

#[derive(Debug, Parser)]
#[clap(author, version, about = "Plot ISPD clock-tree problems and solutions")]
struct Args {
    /// What to plot
    #[clap(long, value_enum, default_value_t = Mode::Output)]
    mode: Mode,
    /// ISPD input (problem) file
    #[clap(long)]
    infile: PathBuf,
    /// ISPD output (solution) file, only used in output mode
    #[clap(long)]
    outfile: Option<PathBuf>,
    /// Image to write; the extension selects svg or png
    #[clap(long)]
    output: PathBuf,
    /// Also write sink (input mode) or node (output mode) coordinates as CSV
    #[clap(long)]
    export_csv: Option<PathBuf>,
    /// Title drawn above the plot
    #[clap(long)]
    title: Option<String>,
    /// Image width and height in pixels
    #[clap(long, default_value_t = 1000)]
    size: u32,
}

fn run(args: &Args) -> Result<(), ViewerError> {
    let mut config = RenderConfig::default().with_size(args.size);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    let problem = InputReader::new().read(&args.infile)?;

    match args.mode {
        Mode::Input => {
            let scene = render::render_problem(&problem, &config);
            render::write_image(&scene, &args.output, &config)?;
            if let Some(csv_path) = &args.export_csv {
                export_sinks_to_csv(&problem, csv_path)?;
            }
        }
        Mode::Output => {
            let outfile = args
                .outfile
                .as_ref()
                .ok_or(ViewerError::MissingArgument("--outfile is required in output mode"))?;
            let solution = OutputReader::new().read(outfile)?;
            let table = CoordinateTable::resolve(&problem, &solution)?;
            let scene = render::render_resolved(&problem, &solution, &table, &config)?;
            render::write_image(&scene, &args.output, &config)?;
            if let Some(csv_path) = &args.export_csv {
                export_coordinates_to_csv(&table, csv_path)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[FAIL] {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ispd_cts_viewer::RenderError;
    use std::fs;

    fn data_path(name: &str) -> String {
        format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_mode_defaults_to_output() {
        let args =
            Args::try_parse_from(["ispd-cts-viewer", "--infile", "a.in", "--output", "a.svg"])
                .unwrap();
        assert_eq!(args.mode, Mode::Output);
        assert_eq!(args.size, 1000);
        assert!(args.outfile.is_none());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = Args::try_parse_from([
            "ispd-cts-viewer",
            "--mode",
            "inptu",
            "--infile",
            "a.in",
            "--output",
            "a.svg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_mode_requires_outfile() {
        let output = temp_path("ispd_cts_viewer_main_no_outfile.svg");
        let args = Args::try_parse_from([
            "ispd-cts-viewer",
            "--infile",
            &data_path("small.in"),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(err, ViewerError::MissingArgument(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_input_mode_writes_image_and_sinks() {
        let output = temp_path("ispd_cts_viewer_main_input.svg");
        let csv = temp_path("ispd_cts_viewer_main_input.csv");
        let args = Args::try_parse_from([
            "ispd-cts-viewer",
            "--mode",
            "input",
            "--infile",
            &data_path("small.in"),
            "--output",
            output.to_str().unwrap(),
            "--export-csv",
            csv.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();
        assert!(output.exists());
        assert_eq!(fs::read_to_string(&csv).unwrap().lines().count(), 5);

        fs::remove_file(&output).unwrap();
        fs::remove_file(&csv).unwrap();
    }

    #[test]
    fn test_failed_render_leaves_no_csv() {
        let outfile = temp_path("ispd_cts_viewer_main_bad_wire.out");
        fs::write(
            &outfile,
            "sourcenode s0 0\nnum node 0\nnum sinknode 0\nnum wire 1\ns0 ghost 0\nnum buffer 0\n",
        )
        .unwrap();
        let output = temp_path("ispd_cts_viewer_main_bad_wire.svg");
        let csv = temp_path("ispd_cts_viewer_main_bad_wire.csv");
        let args = Args::try_parse_from([
            "ispd-cts-viewer",
            "--infile",
            &data_path("small.in"),
            "--outfile",
            outfile.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--export-csv",
            csv.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(err, ViewerError::Render(RenderError::Resolution(_))));
        assert!(!output.exists());
        assert!(!csv.exists());

        fs::remove_file(&outfile).unwrap();
    }
}
