use anyhow::{Context, Result, ensure};
use scenegeo_core::{GeoCoord, MercatorCoord, SceneCoord, SceneTransform};

// Scene anchor of the resort terrain tiles, in Web Mercator meters.
const ORIGIN_X: f64 = -13_241_170.601_572_648;
const ORIGIN_Y: f64 = 6_400_333.522_211_134;
const ORIGIN_ELEVATION: f64 = 0.0;
const ELEVATION_SCALE: f64 = 3.0;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// coordinate to convert: "lat,lng" or "lat,lng,elevation"
	/// (or "x,y,z" in scene space together with --inverse)
	#[arg(required = true, allow_hyphen_values = true, verbatim_doc_comment)]
	coordinate: String,

	/// convert from scene space back to geographic
	#[arg(long, short)]
	inverse: bool,

	/// scene origin x in Web Mercator meters
	#[arg(long, value_name = "meters", default_value_t = ORIGIN_X, allow_hyphen_values = true, display_order = 1)]
	origin_x: f64,

	/// scene origin y in Web Mercator meters
	#[arg(long, value_name = "meters", default_value_t = ORIGIN_Y, allow_hyphen_values = true, display_order = 1)]
	origin_y: f64,

	/// real-world elevation that maps to scene z = 0
	#[arg(long, value_name = "meters", default_value_t = ORIGIN_ELEVATION, allow_hyphen_values = true, display_order = 1)]
	origin_elevation: f64,

	/// vertical exaggeration applied to elevations
	#[arg(long, value_name = "factor", default_value_t = ELEVATION_SCALE, display_order = 1)]
	elevation_scale: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let transform = SceneTransform::new(
		MercatorCoord::new(arguments.origin_x, arguments.origin_y),
		arguments.origin_elevation,
		arguments.elevation_scale,
	)?;

	let values = parse_values(&arguments.coordinate)?;

	if arguments.inverse {
		ensure!(
			values.len() == 3,
			"a scene coordinate needs three values \"x,y,z\", got {}",
			values.len()
		);
		let geo = transform.scene_to_geo(&SceneCoord::new(values[0], values[1], values[2]))?;
		println!("{},{},{}", geo.lat, geo.lng, geo.elevation);
	} else {
		ensure!(
			values.len() == 2 || values.len() == 3,
			"a geographic coordinate needs \"lat,lng\" or \"lat,lng,elevation\", got {} value(s)",
			values.len()
		);
		let elevation = values.get(2).copied().unwrap_or(0.0);
		let scene = transform.geo_to_scene(&GeoCoord::new(values[0], values[1], elevation)?);
		println!("{},{},{}", scene.x(), scene.y(), scene.z());
	}

	Ok(())
}

fn parse_values(input: &str) -> Result<Vec<f64>> {
	input
		.split([',', ' ', ';'])
		.filter(|part| !part.is_empty())
		.map(|part| {
			part
				.parse::<f64>()
				.with_context(|| format!("invalid number {part:?}"))
		})
		.collect()
}
