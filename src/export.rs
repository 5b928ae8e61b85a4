// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::input::{ProblemInstance, Sink};
use crate::render::CoordinateTable;

#[derive(Debug, Serialize)]
pub struct SinkCsvRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
    #[serde(rename = "Capacitance")]
    pub capacitance: f64,
}

#[derive(Debug, Serialize)]
pub struct CoordinateCsvRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
}

fn sink_to_csv_record(sink: &Sink) -> SinkCsvRecord {
    SinkCsvRecord {
        name: sink.name.clone(),
        x: sink.x,
        y: sink.y,
        capacitance: sink.capacitance,
    }
}

/// Export the problem's sinks, in file order, to a CSV file
pub fn export_sinks_to_csv<P: AsRef<Path>>(
    problem: &ProblemInstance,
    file_path: P,
) -> Result<(), csv::Error> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    for sink in &problem.sinks {
        writer.serialize(sink_to_csv_record(sink))?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a resolved coordinate table, in name order, to a CSV file
pub fn export_coordinates_to_csv<P: AsRef<Path>>(
    table: &CoordinateTable,
    file_path: P,
) -> Result<(), csv::Error> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    for (name, point) in table.iter() {
        writer.serialize(CoordinateCsvRecord {
            name: name.to_string(),
            x: point.x,
            y: point.y,
        })?;
    }

    writer.flush()?;
    Ok(())
}
