use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use sprig_time::IntervalKeyPolicy;
use toml::{Table, Value};

pub const CONFIG_FILE: &str = "sprig.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub virtual_width: u32,
    pub virtual_height: u32,
    pub interval_keys: IntervalKeyPolicy,
}

impl ProjectConfig {
    pub fn default_for_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            virtual_width: 1920,
            virtual_height: 1080,
            interval_keys: IntervalKeyPolicy::Exact,
        }
    }
}

#[derive(Debug)]
pub enum ProjectError {
    Io(std::io::Error),
    ParseToml(toml::de::Error),
    MissingField(&'static str),
    InvalidField(&'static str, String),
}

impl Display for ProjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::ParseToml(err) => write!(f, "{err}"),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidField(field, reason) => write!(f, "invalid field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ProjectError {}

impl From<std::io::Error> for ProjectError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ProjectError {
    fn from(value: toml::de::Error) -> Self {
        Self::ParseToml(value)
    }
}

pub fn default_project_toml(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"

[graphics]
virtual_resolution = "1920x1080"

[time]
interval_keys = "exact"
"#
    )
}

pub fn load_project_toml(root: &Path) -> Result<ProjectConfig, ProjectError> {
    let contents = fs::read_to_string(root.join(CONFIG_FILE))?;
    parse_project_toml(&contents)
}

/// Like [`load_project_toml`], but a missing config file yields defaults.
pub fn load_or_default(root: &Path, default_name: &str) -> Result<ProjectConfig, ProjectError> {
    if !root.join(CONFIG_FILE).exists() {
        return Ok(ProjectConfig::default_for_name(default_name));
    }
    load_project_toml(root)
}

pub fn parse_project_toml(contents: &str) -> Result<ProjectConfig, ProjectError> {
    let value: Value = contents.parse::<Value>()?;
    let project = required_table(&value, "project")?;
    let graphics = required_table(&value, "graphics")?;

    let name = project
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ProjectError::MissingField("project.name"))?
        .to_string();

    let (virtual_width, virtual_height) = match graphics.get("virtual_resolution") {
        Some(raw) => raw.as_str().map_or_else(
            || Err(invalid_resolution("expected a string like `1920x1080`")),
            parse_resolution,
        )?,
        None => (
            dimension(graphics, "virtual_width", "graphics.virtual_width")?,
            dimension(graphics, "virtual_height", "graphics.virtual_height")?,
        ),
    };

    let interval_keys = match value.get("time").and_then(|time| time.get("interval_keys")) {
        Some(raw) => parse_interval_keys(raw)?,
        None => IntervalKeyPolicy::default(),
    };

    Ok(ProjectConfig {
        name,
        virtual_width,
        virtual_height,
        interval_keys,
    })
}

fn required_table<'a>(value: &'a Value, key: &'static str) -> Result<&'a Table, ProjectError> {
    value
        .get(key)
        .and_then(Value::as_table)
        .ok_or(ProjectError::MissingField(key))
}

fn dimension(table: &Table, key: &str, field: &'static str) -> Result<u32, ProjectError> {
    let raw = table
        .get(key)
        .and_then(Value::as_integer)
        .ok_or(ProjectError::MissingField(field))?;
    match u32::try_from(raw) {
        Ok(0) | Err(_) => Err(ProjectError::InvalidField(
            field,
            "must be a positive integer".to_string(),
        )),
        Ok(px) => Ok(px),
    }
}

fn parse_interval_keys(raw: &Value) -> Result<IntervalKeyPolicy, ProjectError> {
    match raw.as_str().map(str::trim) {
        Some("exact") => Ok(IntervalKeyPolicy::Exact),
        Some("millis") => Ok(IntervalKeyPolicy::Millis),
        _ => Err(ProjectError::InvalidField(
            "time.interval_keys",
            "expected `exact` or `millis`".to_string(),
        )),
    }
}

fn invalid_resolution(reason: &str) -> ProjectError {
    ProjectError::InvalidField("graphics.virtual_resolution", reason.to_string())
}

/// `"1280x720"` (case-insensitive `x`) into a non-zero width and height.
fn parse_resolution(raw: &str) -> Result<(u32, u32), ProjectError> {
    let (w, h) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid_resolution("expected a string like `1920x1080`"))?;

    let side = |part: &str, which: &str| match part.trim().parse::<u32>() {
        Ok(0) => Err(invalid_resolution(&format!("{which} must be greater than 0"))),
        Ok(px) => Ok(px),
        Err(_) => Err(invalid_resolution(&format!("invalid {which} `{part}`"))),
    };

    Ok((side(w, "width")?, side(h, "height")?))
}
