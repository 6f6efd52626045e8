use clap::Parser;
use geodetic::prelude::*;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// GD: Great ellipse and geocentric computations on the ellipsoid.
///
/// Reads whitespace separated numbers, one problem per line, from the files
/// given, or from stdin, and writes one line of results per problem.
/// Blank lines, and everything following a '#', are ignored.
///
///   inverse:  lat1 lon1 lat2 lon2  ->  s12 azi1 azi2
///   direct:   lat1 lon1 azi1 s12   ->  lat2 lon2 azi2
///   cart:     lat lon [h]          ->  x y z      (--inv: x y z -> lat lon h)
///   distance: lat1 lon1 lat2 lon2  ->  s12        (see --method)
#[derive(Parser, Debug)]
#[clap(name = "gd")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The ellipsoid: a preset name, or "a, rf"
    #[clap(long, default_value = "WGS84")]
    ellps: String,

    /// Inverse operation (for cart)
    #[clap(long = "inv")]
    inverse: bool,

    /// Number of decimals in the output
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Distance method: andoyer, ellipse, or geodesic
    #[clap(short, long, default_value = "ellipse")]
    method: String,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The operation: inverse, direct, cart, or distance
    operation: String,

    /// The files to operate on. Stdin if none given
    args: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Operation {
    Inverse,
    Direct,
    Cart,
    Distance(Distance),
}

impl Operation {
    fn new(name: &str, method: &str) -> Result<Operation, anyhow::Error> {
        Ok(match name {
            "inverse" => Operation::Inverse,
            "direct" => Operation::Direct,
            "cart" => Operation::Cart,
            "distance" => Operation::Distance(method.parse()?),
            _ => anyhow::bail!("unknown operation: {name}"),
        })
    }
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{:#?}", options);

    let ellps = Ellipsoid::named(&options.ellps)?;
    let operation = Operation::new(&options.operation, &options.method)?;
    debug!("{operation:?} on {ellps:?}");

    let mut out = std::io::stdout().lock();
    if options.args.is_empty() {
        let stdin = std::io::stdin().lock();
        process(stdin, &mut out, operation, ellps, &options)?;
        return Ok(());
    }

    for path in &options.args {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        process(reader, &mut out, operation, ellps, &options)?;
    }
    Ok(())
}

fn process(
    reader: impl BufRead,
    out: &mut impl Write,
    operation: Operation,
    ellps: Ellipsoid,
    options: &Cli,
) -> Result<(), anyhow::Error> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let args: Result<Vec<f64>, _> = text.split_whitespace().map(str::parse::<f64>).collect();
        let Ok(args) = args else {
            warn!("line {}: cannot parse '{text}'", index + 1);
            continue;
        };

        match apply(operation, ellps, options.inverse, &args) {
            Ok(values) => writeln!(out, "{}", format_values(&values, options.decimals))?,
            Err(e) => warn!("line {}: {e}", index + 1),
        }
    }
    Ok(())
}

fn apply(
    operation: Operation,
    ellps: Ellipsoid,
    inverse: bool,
    args: &[f64],
) -> Result<Vec<f64>, anyhow::Error> {
    let values = match (operation, args) {
        (Operation::Inverse, &[lat1, lon1, lat2, lon2]) => {
            let from = Point::geo(lat1, lon1)?;
            let to = Point::geo(lat2, lon2)?;
            let (s12, azi1, azi2) = GreatEllipse::new(ellps).inverse(&from, &to);
            vec![s12, azi1, azi2]
        }

        (Operation::Direct, &[lat1, lon1, azi1, s12]) => {
            let from = Point::geo(lat1, lon1)?;
            let (to, azi2) = GreatEllipse::new(ellps).direct(&from, azi1, s12)?;
            vec![to.lat(), to.lon(), azi2]
        }

        (Operation::Cart, &[x, y, z]) if inverse => {
            let p = Geocentric::new(ellps).inverse(&Cartesian::raw(x, y, z))?;
            vec![p.lat(), p.lon(), p.height().unwrap_or_default()]
        }

        (Operation::Cart, &[lat, lon]) if !inverse => {
            let xyz = Geocentric::new(ellps).forward(&Point::geo(lat, lon)?);
            xyz.0.to_vec()
        }

        (Operation::Cart, &[lat, lon, h]) if !inverse => {
            let xyz = Geocentric::new(ellps).forward(&Point::with_height(lat, lon, h)?);
            xyz.0.to_vec()
        }

        (Operation::Distance(method), &[lat1, lon1, lat2, lon2]) => {
            let from = Point::geo(lat1, lon1)?;
            let to = Point::geo(lat2, lon2)?;
            vec![ellps.distance(method, &from, &to)?]
        }

        _ => anyhow::bail!("{operation:?}: unexpected number of values: {}", args.len()),
    };
    Ok(values)
}

fn format_values(values: &[f64], decimals: Option<usize>) -> String {
    let formatted: Vec<String> = values
        .iter()
        .map(|v| match decimals {
            Some(d) => format!("{v:.d$}"),
            None => format!("{v}"),
        })
        .collect();
    formatted.join(" ")
}

// ----- Tests ---------------------------------------------------------------------
