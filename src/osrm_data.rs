//! Local OSRM dataset preparation for a Geofabrik extract.
//!
//! Downloads the `.osm.pbf` once and runs the MLD preprocessing pipeline
//! (`osrm-extract`, `osrm-partition`, `osrm-customize`) inside the
//! `osrm/osrm-backend` docker image. Every step is skipped when its output
//! already exists, so repeated calls are cheap.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::info;

pub const OSRM_IMAGE: &str = "osrm/osrm-backend";

/// Geofabrik extract covering Tamil Nadu, Karnataka, Kerala and Andhra Pradesh.
pub const SOUTHERN_INDIA: &str = "asia/india/southern-zone";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{step} exited with {status}")]
    Process { step: String, status: String },
}

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Geofabrik region path, e.g. "asia/india/southern-zone".
    pub region: String,
    pub data_root: PathBuf,
    /// Lua profile shipped in the OSRM image.
    pub profile: String,
}

impl DatasetConfig {
    pub fn new(region: impl Into<String>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region: region.into(),
            data_root: data_root.into(),
            profile: "/opt/car.lua".to_string(),
        }
    }

    /// Last path component of the region, used for file names.
    pub fn region_name(&self) -> &str {
        self.region.rsplit('/').next().unwrap_or("region")
    }

    pub fn download_url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.region)
    }
}

/// Files of a prepared dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub data_dir: PathBuf,
    pub osrm_file: PathBuf,
}

impl Dataset {
    /// Path of the `.osrm` base file as seen from inside the container
    /// when `data_dir` is mounted at `/data`.
    pub fn container_path(&self) -> String {
        format!("/data/{}", file_name(&self.osrm_file))
    }

    pub fn prepare(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let data_root = if config.data_root.is_absolute() {
            config.data_root.clone()
        } else {
            std::env::current_dir()?.join(&config.data_root)
        };
        let data_dir = data_root.join(config.region_name());
        fs::create_dir_all(&data_dir)?;

        let stem = format!("{}-latest", config.region_name());
        let pbf = data_dir.join(format!("{stem}.osm.pbf"));
        let osrm_file = data_dir.join(format!("{stem}.osrm"));

        if !pbf.exists() {
            download(&config.download_url(), &pbf)?;
        }
        if !osrm_file.exists() {
            run_step(&data_dir, &["osrm-extract", "-p", &config.profile, &format!("/data/{}", file_name(&pbf))])?;
        }

        let dataset = Self { data_dir, osrm_file };
        if !dataset.mld_ready() {
            let target = dataset.container_path();
            run_step(&dataset.data_dir, &["osrm-partition", &target])?;
            run_step(&dataset.data_dir, &["osrm-customize", &target])?;
        }
        Ok(dataset)
    }

    fn mld_ready(&self) -> bool {
        ["osrm.partition", "osrm.mldgr", "osrm.cells"]
            .iter()
            .all(|ext| self.osrm_file.with_extension(ext).exists())
    }
}

fn download(url: &str, dest: &Path) -> Result<(), DatasetError> {
    info!(url, "downloading OSM extract");
    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let partial = dest.with_extension("part");
    let mut writer = BufWriter::new(File::create(&partial)?);
    response.copy_to(&mut writer)?;
    writer.flush()?;
    fs::rename(partial, dest)?;
    Ok(())
}

fn run_step(data_dir: &Path, args: &[&str]) -> Result<(), DatasetError> {
    info!(step = args[0], "running OSRM preprocessing step");
    let status = Command::new("docker")
        .args(["run", "--rm", "-t", "-v"])
        .arg(format!("{}:/data", data_dir.display()))
        .arg(OSRM_IMAGE)
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(DatasetError::Process {
            step: args[0].to_string(),
            status: status.to_string(),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
