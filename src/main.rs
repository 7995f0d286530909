extern crate getopts;
extern crate colored;

use getopts::Options;
use std::env;
use std::path::Path;
use std::process;
use colored::*;

use lidarfit::{estimate_params, FitResult, Plane};
use lidarfit::input;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options] <points file>", program);
    print!("{}", opts.usage(&brief));
}

fn run(path: &Path, spherical: bool, degrees: bool, verbose: bool) -> FitResult<Plane> {
    let module = "FIT".green();

    if verbose {
        let kind = match (spherical, degrees) {
            (false, _) => "Cartesian points",
            (true, false) => "spherical readings (radians)",
            (true, true) => "spherical readings (degrees)",
        };
        println!("[{}] Reading {} from {}", &module, kind, path.display());
    }

    let points = input::load_points(path, spherical, degrees)?;
    if verbose { println!("[{}] {} points loaded", &module, points.len()); }

    let plane = estimate_params(&points)?;
    if verbose { println!("[{}] RMS residual: {:.4} m", &module, plane.rms_residual(&points)); }
    Ok(plane)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("s", "spherical", "rows are elevation, azimuth and range instead of x, y and z");
    opts.optflag("d", "degrees", "spherical angles are given in degrees");
    opts.optflag("q", "quiet", "hide additional information while running");
    opts.optflag("h", "help", "show this help menu");
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => { m }
        Err(f) => {
            eprintln!("{}", f.to_string().as_str().red());
            print_usage(&program, opts);
            process::exit(2);
        }
    };
    if matches.opt_present("h") || matches.free.is_empty() {
        print_usage(&program, opts);
        return;
    }
    let verbose = !matches.opt_present("q");
    let spherical = matches.opt_present("s");
    let degrees = matches.opt_present("d");

    if verbose { println!("lidarfit {}\n", VERSION); }

    match run(Path::new(&matches.free[0]), spherical, degrees, verbose) {
        Ok(plane) => println!("z = {:.6} + {:.6}·x + {:.6}·y", plane.a, plane.b, plane.c),
        Err(e) => {
            eprintln!("[{}] {}", "ERROR".red(), e);
            process::exit(1);
        }
    }
}
