use projective_geometry::bounds::Region;
use projective_geometry::config::lines as line_config;
use projective_geometry::image::io::write_json_file;
use projective_geometry::plot::{plot_join, plot_meet, PlottedLine, PlottedMeet};
use projective_geometry::HomogeneousLine;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = line_config::load_config(Path::new(&config_path))?;

    let region = match config.region {
        Some(region) => region,
        None => derive_region(&config.point_pairs, &config.line_pairs, config.margin)?,
    };

    let joins: Vec<PlottedLine> = config
        .point_pairs
        .iter()
        .map(|[p, q]| plot_join(*p, *q, &region))
        .collect();
    let meets: Vec<PlottedMeet> = config
        .line_pairs
        .iter()
        .map(|[l1, l2]| {
            plot_meet(
                HomogeneousLine::from(*l1),
                HomogeneousLine::from(*l2),
                &region,
            )
        })
        .collect();

    for (i, join) in joins.iter().enumerate() {
        println!("join {i}: line {:?}", join.line.as_array());
    }
    for (i, meet) in meets.iter().enumerate() {
        match meet.position {
            Some(p) => println!("meet {i}: ({:.6}, {:.6})", p[0], p[1]),
            None => println!("meet {i}: at infinity, direction {:?}", meet.point.0.as_slice()),
        }
    }

    let report = LinePlotReport {
        region,
        joins,
        meets,
    };
    write_json_file(&config.output.result_json, &report)?;
    println!(
        "Saved line plot report to {}",
        config.output.result_json.display()
    );
    Ok(())
}

/// Region around all input points and all finite meets, grown by `margin`.
fn derive_region(
    point_pairs: &[[[f64; 2]; 2]],
    line_pairs: &[[[f64; 3]; 2]],
    margin: f64,
) -> Result<Region, String> {
    let mut pts: Vec<[f64; 2]> = point_pairs.iter().flatten().copied().collect();
    for [l1, l2] in line_pairs {
        let meet = HomogeneousLine::from(*l1).meet(&HomogeneousLine::from(*l2));
        if let Some(p) = meet.dehomogenize(projective_geometry::homogeneous::EPS) {
            pts.push(p);
        }
    }
    Region::enclosing(&pts, margin)
        .ok_or_else(|| "No finite points to derive a plot region from; set `region`".to_string())
}

fn usage() -> String {
    "Usage: line_plot <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinePlotReport {
    region: Region,
    joins: Vec<PlottedLine>,
    meets: Vec<PlottedMeet>,
}
