use std::path::PathBuf;

use tilepath_core::Point;

use crate::error::{CliError, Result};

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    pub map: PathBuf,
    pub config: Option<PathBuf>,
    /// Explicit endpoints; `None` searches between the map's `S` and `G`.
    pub endpoints: Option<(Point, Point)>,
}

impl Args {
    /// Parse arguments, program name excluded.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut map = None;
        let mut config = None;
        let mut from = None;
        let mut to = None;

        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--config" => config = Some(PathBuf::from(value(&mut it, "--config")?)),
                "--from" => from = Some(parse_point(&value(&mut it, "--from")?)?),
                "--to" => to = Some(parse_point(&value(&mut it, "--to")?)?),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option {flag}")));
                }
                _ if map.is_none() => map = Some(PathBuf::from(&arg)),
                _ => return Err(CliError::Usage(format!("unexpected argument {arg}"))),
            }
        }

        let map = map.ok_or_else(|| CliError::Usage("missing map file".into()))?;
        let endpoints = match (from, to) {
            (Some(from), Some(to)) => Some((from, to)),
            (None, None) => None,
            _ => {
                return Err(CliError::Usage(
                    "--from and --to must be given together".into(),
                ));
            }
        };
        Ok(Self {
            map,
            config,
            endpoints,
        })
    }
}

fn value(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    it.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

/// Parse `x,y`.
fn parse_point(s: &str) -> Result<Point> {
    let bad = || CliError::Usage(format!("expected x,y but got {s:?}"));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}
