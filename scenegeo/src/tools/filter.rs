use anyhow::{Context, Result};
use geojson::GeoJson;
use scenegeo_geometry::{Boundary, read_geojson};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with the features to filter
	#[arg(required = true)]
	input_file: PathBuf,

	/// GeoJSON file containing the boundary polygon
	#[arg(required = true)]
	boundary_file: PathBuf,

	/// where to write the filtered GeoJSON
	#[arg(required = true)]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("filter {:?} by {:?}", arguments.input_file, arguments.boundary_file);

	let boundary = Boundary::from_feature_collection(&read_geojson(&arguments.boundary_file)?)?;
	let features = read_geojson(&arguments.input_file)?;
	let filtered = boundary.filter(features)?;

	std::fs::write(&arguments.output_file, GeoJson::from(filtered).to_string())
		.with_context(|| format!("Failed to write {:?}", arguments.output_file))?;

	eprintln!("finished filtering features");

	Ok(())
}
