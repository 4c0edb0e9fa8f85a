use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tui_cloud::item::{self, Keyword, KeywordResponse};
use tui_cloud::{CloudConfig, Palette};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    Heatmap,
    Legacy,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Heatmap => Palette::HEATMAP,
            PaletteArg::Legacy => Palette::LEGACY,
        }
    }
}

/// Interactive 3D keyword cloud in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tui-cloud", version)]
pub struct Args {
    /// JSON file: `[{"word": .., "weight": ..}]` or `{"keywords": [...]}`.
    #[arg(long, short)]
    pub keywords: Option<PathBuf>,

    #[arg(long, default_value_t = 2.5)]
    pub radius: f32,

    #[arg(long, value_enum, default_value_t = PaletteArg::Heatmap)]
    pub palette: PaletteArg,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Write tracing output here (filtered by `RUST_LOG`).
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn cloud_config(&self) -> Result<CloudConfig> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(HarnessError::invalid_argument(format!(
                "--radius must be a positive number, got {}",
                self.radius
            )));
        }

        Ok(CloudConfig {
            radius: self.radius,
            palette: self.palette.into(),
            ..CloudConfig::default()
        })
    }

    pub fn frame_interval(&self) -> Result<Duration> {
        if self.fps == 0 {
            return Err(HarnessError::invalid_argument("--fps must be at least 1"));
        }

        Ok(Duration::from_secs(1) / self.fps)
    }

    pub fn load_keywords(&self) -> Result<Vec<Keyword>> {
        match &self.keywords {
            Some(path) => read_keywords(path),
            None => Ok(demo_keywords()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordFile {
    List(Vec<Keyword>),
    Response(KeywordResponse),
}

pub fn parse_keywords(path: &Path, json: &str) -> Result<Vec<Keyword>> {
    let parsed: KeywordFile = serde_json::from_str(json).map_err(|source| HarnessError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = match parsed {
        KeywordFile::List(list) => list,
        KeywordFile::Response(response) => response.keywords,
    };

    let keywords = item::sanitize(raw);

    if keywords.is_empty() {
        return Err(HarnessError::EmptyKeywordFile {
            path: path.to_path_buf(),
        });
    }

    Ok(keywords)
}

fn read_keywords(path: &Path) -> Result<Vec<Keyword>> {
    let json = std::fs::read_to_string(path)?;
    parse_keywords(path, &json)
}

pub fn demo_keywords() -> Vec<Keyword> {
    [
        ("rust", 9.0),
        ("ownership", 7.5),
        ("borrowing", 6.0),
        ("lifetimes", 5.5),
        ("traits", 6.5),
        ("generics", 4.0),
        ("async", 5.0),
        ("tokio", 3.5),
        ("cargo", 4.5),
        ("crates", 3.0),
        ("macros", 2.5),
        ("unsafe", 2.0),
        ("closures", 3.0),
        ("iterators", 4.0),
        ("pattern matching", 3.5),
        ("enums", 2.5),
        ("modules", 1.5),
        ("testing", 2.0),
        ("clippy", 1.0),
        ("rustfmt", 1.0),
    ]
    .into_iter()
    .map(|(word, weight)| Keyword::new(word, weight))
    .collect()
}
