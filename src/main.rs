use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use routedir::{DirectionsFormatter, DrivingFormatter, Point, Route, Segment, WalkingFormatter};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct RouteLoadError(PathBuf, #[source] LoadError);

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("line {0}: {1}")]
    Syntax(usize, &'static str),

    #[error("line {0}: {1}")]
    Route(usize, #[source] routedir::Error),

    #[error("no segments")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    Driving,
    Walking,
}

/// Prints turn-by-turn directions along a route.
///
/// Segments are read one per line, as "LAT1 LON1 LAT2 LON2 NAME", with coordinates
/// in millionths of a degree. Empty lines and lines starting with '#' are ignored.
#[derive(Parser)]
struct Cli {
    /// The path to the segments file, or "-" to read from standard input
    segments: PathBuf,

    /// Style of the directions
    #[arg(long, value_enum, default_value_t = Style::Driving)]
    style: Style,

    /// Initial heading in degrees (defaults to the heading of the first segment)
    #[arg(long)]
    heading: Option<f64>,

    /// Walking pace in minutes per kilometer, used by the walking style
    #[arg(long, default_value_t = routedir::WALKING_MINUTES_PER_KM)]
    minutes_per_km: f64,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let route = load_route(&cli.segments)?;
    log::info!(
        "loaded route with {} segments in {} features, {:.3} km",
        route.segment_count(),
        route.feature_count(),
        route.length(),
    );

    let heading = cli.heading.unwrap_or(route.start_heading());
    if !(0.0..360.0).contains(&heading) {
        return Err(format!("heading must be in [0, 360), got {heading}").into());
    }

    let formatter: Box<dyn DirectionsFormatter> = match cli.style {
        Style::Driving => Box::new(DrivingFormatter),
        Style::Walking => Box::new(WalkingFormatter {
            minutes_per_km: cli.minutes_per_km,
        }),
    };

    print!("{}", formatter.compute_directions(&route, heading));
    Ok(())
}

fn load_route<P: AsRef<Path>>(path: P) -> Result<Route, RouteLoadError> {
    let path = path.as_ref();
    let result = if path == Path::new("-") {
        read_route(io::stdin().lock())
    } else {
        File::open(path)
            .map_err(LoadError::from)
            .and_then(|f| read_route(BufReader::new(f)))
    };
    result.map_err(|e| RouteLoadError(PathBuf::from(path), e))
}

fn read_route<R: BufRead>(reader: R) -> Result<Route, LoadError> {
    let mut route: Option<Route> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let segment = parse_segment(line_no, line)?;
        route = Some(match route {
            None => Route::new(segment),
            Some(r) => r
                .append(segment)
                .map_err(|e| LoadError::Route(line_no, e))?,
        });
    }

    route.ok_or(LoadError::Empty)
}

fn parse_segment(line_no: usize, line: &str) -> Result<Segment, LoadError> {
    let mut rest = line;
    let mut coords = [0_i32; 4];
    for c in coords.iter_mut() {
        let (field, tail) = rest
            .split_once(char::is_whitespace)
            .ok_or(LoadError::Syntax(line_no, "expected 4 coordinates and a name"))?;
        *c = field
            .parse()
            .map_err(|_| LoadError::Syntax(line_no, "invalid coordinate"))?;
        rest = tail.trim_start();
    }

    let name = rest.trim();
    if name.is_empty() {
        return Err(LoadError::Syntax(line_no, "missing segment name"));
    }

    let route_err = |e| LoadError::Route(line_no, e);
    let p1 = Point::new(coords[0], coords[1]).map_err(route_err)?;
    let p2 = Point::new(coords[2], coords[3]).map_err(route_err)?;
    Segment::new(name, p1, p2).map_err(route_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "\
# Main St, then Oak Ave
0 0 0 1000 Main St
0 1000 0 2000 Main St

0 2000 1000 2000 Oak Ave
";

    #[test]
    fn read() {
        let r = read_route(DATA.as_bytes()).unwrap();
        assert_eq!(r.segment_count(), 3);
        assert_eq!(r.feature_count(), 2);
        let names: Vec<&str> = r.features().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Main St", "Oak Ave"]);
    }

    #[test]
    fn read_errors() {
        assert!(matches!(read_route("".as_bytes()), Err(LoadError::Empty)));
        assert!(matches!(
            read_route("0 0 0 1000\n".as_bytes()),
            Err(LoadError::Syntax(1, _))
        ));
        assert!(matches!(
            read_route("0 0 x 1000 Main St\n".as_bytes()),
            Err(LoadError::Syntax(1, _))
        ));
        assert!(matches!(
            read_route("0 0 0 1000 Main St\n\n5 5 0 2000 Oak Ave\n".as_bytes()),
            Err(LoadError::Route(3, routedir::Error::Disjoint { .. }))
        ));
        assert!(matches!(
            read_route("7 7 7 7 Main St\n".as_bytes()),
            Err(LoadError::Route(1, routedir::Error::DegenerateSegment(_)))
        ));
    }
}
