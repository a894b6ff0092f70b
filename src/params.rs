use crate::coordinates::fov::FovSpec;
use crate::coordinates::SkyPoint;
use crate::error::{Error, Result};
use crate::parse_stars::CatalogFormat;
use crate::selection::BrightnessOrder;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// what to look for: where the fov points, how large it is and how many objects to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// right ascension of the center of the fov, in degrees
    pub ra: f64,
    /// declination of the center of the fov, in degrees
    pub dec: f64,
    /// FULL horizontal field of view, in radians
    pub fov_h: f64,
    /// FULL vertical field of view, in radians
    pub fov_v: f64,
    /// number of objects to keep
    pub n: usize,
    pub order: BrightnessOrder,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            ra: 0.0,
            dec: 0.0,
            fov_h: FRAC_PI_2,
            fov_v: FRAC_PI_2,
            n: 10,
            order: BrightnessOrder::default(),
        }
    }
}

pub fn validate_ra(ra: f64) -> Result<f64> {
    if (0.0..360.0).contains(&ra) {
        Ok(ra)
    } else {
        Err(Error::InvalidParameter(format!("RA must be in [0, 360) degrees, got {}", ra)))
    }
}

pub fn validate_dec(dec: f64) -> Result<f64> {
    if (-90.0..=90.0).contains(&dec) {
        Ok(dec)
    } else {
        Err(Error::InvalidParameter(format!("DEC must be in [-90, 90] degrees, got {}", dec)))
    }
}

pub fn validate_fov(fov: f64) -> Result<f64> {
    if fov > 0.0 && fov <= FRAC_PI_2 {
        Ok(fov)
    } else {
        Err(Error::InvalidParameter(format!("field of view must be in (0, pi/2] rad, got {}", fov)))
    }
}

pub fn validate_n(n: usize) -> Result<usize> {
    if n > 0 {
        Ok(n)
    } else {
        Err(Error::InvalidParameter(String::from("the number of objects must be positive")))
    }
}

impl QueryParams {
    pub fn validate(&self) -> Result<()> {
        validate_ra(self.ra)?;
        validate_dec(self.dec)?;
        validate_fov(self.fov_h)?;
        validate_fov(self.fov_v)?;
        validate_n(self.n)?;
        Ok(())
    }

    /// the fov to search in, the full fields of view are halved
    pub fn fov_spec(&self) -> Result<FovSpec> {
        self.validate()?;
        Ok(FovSpec::new(
            SkyPoint::from_degrees(self.ra, self.dec),
            self.fov_h / 2.0,
            self.fov_v / 2.0,
        ))
    }
}

/// the contents of a json config file, every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub catalog_path: Option<PathBuf>,
    #[serde(flatten)]
    pub query: QueryParams,
    pub catalog: CatalogFormat,
}

impl RunConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// asks `question` until the answer parses and passes `validate`, an empty answer means
/// `default`. Fails only when the input ends or cannot be read
fn prompt_until_valid<T, R, W, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    complaint: &str,
    default: T,
    validate: F,
) -> Result<T>
where
    T: FromStr + Copy,
    R: BufRead,
    W: Write,
    F: Fn(T) -> Result<T>,
{
    let mut line = String::new();
    loop {
        writeln!(out, "{}", question)?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("input ended while waiting for: {}", question),
            )));
        }
        let answer = line.trim();
        let parsed = if answer.is_empty() {
            Some(default)
        } else {
            answer.parse::<T>().ok()
        };
        match parsed.map(&validate) {
            Some(Ok(value)) => return Ok(value),
            _ => writeln!(out, "{}", complaint)?,
        }
    }
}

/// asks for every query parameter in turn, offering the values of `defaults`
pub fn prompt_query_params<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    defaults: &QueryParams,
) -> Result<QueryParams> {
    let ra = prompt_until_valid(
        input,
        out,
        &format!("Input RA of the center of FOV in degrees (default {}):", defaults.ra),
        "Only float numbers from [0, 360) are accepted",
        defaults.ra,
        validate_ra,
    )?;
    writeln!(out, "RA: {}", ra)?;
    let dec = prompt_until_valid(
        input,
        out,
        &format!("Input DEC of the center of FOV in degrees (default {}):", defaults.dec),
        "Only float numbers from [-90, 90] are accepted",
        defaults.dec,
        validate_dec,
    )?;
    writeln!(out, "DEC: {}", dec)?;
    let fov_h = prompt_until_valid(
        input,
        out,
        &format!("Input horizontal field of view (rad, default {}):", defaults.fov_h),
        "Only float numbers from (0, Pi / 2] are accepted",
        defaults.fov_h,
        validate_fov,
    )?;
    writeln!(out, "FOV_H: {} rad", fov_h)?;
    let fov_v = prompt_until_valid(
        input,
        out,
        &format!("Input vertical field of view (rad, default {}):", defaults.fov_v),
        "Only float numbers from (0, Pi / 2] are accepted",
        defaults.fov_v,
        validate_fov,
    )?;
    writeln!(out, "FOV_V: {} rad", fov_v)?;
    let n = prompt_until_valid(
        input,
        out,
        &format!("Input number of objects to select (default {}):", defaults.n),
        "Only positive integer numbers are accepted",
        defaults.n,
        validate_n,
    )?;
    writeln!(out, "N: {}", n)?;

    Ok(QueryParams {
        ra,
        dec,
        fov_h,
        fov_v,
        n,
        order: defaults.order,
    })
}

/// asks for the catalog file until a non-empty name is given
pub fn prompt_catalog_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PathBuf> {
    let mut line = String::new();
    loop {
        writeln!(out, "Please provide .tsv file name:")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidParameter(String::from("no catalog file given")));
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(PathBuf::from(name));
        }
    }
}
