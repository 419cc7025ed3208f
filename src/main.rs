// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use plotdev::{Context, Units, RGBA8};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let mut ctx = Context::new(&args.prefix);
    if let Some((units, width, height)) = args.paper {
        ctx.set_paper_size(units, width, height);
    }

    ctx.open_device(args.portrait).map_err(|e| e.to_string())?;

    for page in 0..args.pages {
        if page != 0 {
            ctx.change_page().map_err(|e| e.to_string())?;
        }

        if let Some(color) = args.background {
            ctx.fill_background(color);
        }
    }

    if let Some(units) = args.query {
        let (width, height) = ctx.paper_size(units);
        println!("{} {}", width, height);
    }

    ctx.close_device();

    Ok(())
}

const HELP: &str = "\
plotdev writes blank SVG pages of a requested paper size.

USAGE:
  plotdev [OPTIONS] <prefix>

  plotdev figure                       # writes figure.svg
  plotdev -w 100mm -h 50mm figure
  plotdev --pages 3 --portrait figure  # figure.svg, figure_0001.svg, figure_0002.svg
  plotdev -w 4in -h 3in --query mm figure

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  -w, --width LENGTH            Sets the paper width
                                [possible units: mm, cm, in, px, pt, pc]
                                A number without units is in points
  -h, --height LENGTH           Sets the paper height
                                Must use the same units as --width
      --portrait                Uses a portrait default size
                                Has no effect when the paper size is set
      --pages N                 Sets the number of pages
                                [default: 1]
      --background COLOR        Sets the background color
                                Examples: red, #fff, #fff000
      --query UNITS             Prints the resulting paper size
                                [possible values: normalized, in, mm, px, pt, cm]
      --quiet                   Disables warnings

ARGS:
  <prefix>                      Output file prefix
";

#[derive(Debug)]
struct CliArgs {
    width: Option<(Units, f64)>,
    height: Option<(Units, f64)>,
    portrait: bool,
    pages: u32,
    background: Option<svgtypes::Color>,
    query: Option<Units>,
    quiet: bool,
    prefix: String,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(CliArgs {
        width: input.opt_value_from_fn(["-w", "--width"], parse_length)?,
        height: input.opt_value_from_fn(["-h", "--height"], parse_length)?,
        portrait: input.contains("--portrait"),
        pages: input.opt_value_from_fn("--pages", parse_pages)?.unwrap_or(1),
        background: input.opt_value_from_str("--background")?,
        query: input.opt_value_from_str("--query")?,
        quiet: input.contains("--quiet"),
        prefix: input.free_from_str()?,
    })
}

fn parse_length(s: &str) -> Result<(Units, f64), String> {
    let length: svgtypes::Length = s.parse().map_err(|_| "invalid length")?;

    let (units, n) = match length.unit {
        // 1pc = 12pt
        svgtypes::LengthUnit::Pc => (Units::Device, length.number * 12.0),
        unit => {
            let units = Units::from_length_unit(unit).ok_or("unsupported length units")?;
            (units, length.number)
        }
    };

    if n > 0.0 {
        Ok((units, n))
    } else {
        Err("LENGTH should be positive".to_string())
    }
}

fn parse_pages(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("N cannot be zero".to_string())
    }
}

struct Args {
    paper: Option<(Units, f64, f64)>,
    portrait: bool,
    pages: u32,
    background: Option<RGBA8>,
    query: Option<Units>,
    quiet: bool,
    prefix: String,
}

fn parse_args() -> Result<Args, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    let paper = match (args.width, args.height) {
        (Some((w_units, w)), Some((h_units, h))) => {
            if w_units != h_units {
                return Err("--width and --height must use the same units".to_string());
            }

            Some((w_units, w, h))
        }
        (None, None) => None,
        _ => return Err("--width and --height must be set together".to_string()),
    };

    if paper.is_some() && args.portrait {
        println!("Warning: --portrait has no effect when the paper size is set.");
    }

    let background = args.background.map(|c| RGBA8::new(c.red, c.green, c.blue, c.alpha));

    Ok(Args {
        paper,
        portrait: args.portrait,
        pages: args.pages,
        background,
        query: args.query,
        quiet: args.quiet,
        prefix: args.prefix,
    })
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
