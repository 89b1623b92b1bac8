use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_CHARACTER_LIMIT: usize = 255;

/// HSSD revision whose rules apply to a run.
///
/// Each year is its own rule branch; there is deliberately no ordering
/// between variants. Behavioral differences live in [`crate::policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HssdVersion {
    Hssd2018,
    Hssd2019,
    Hssd2020,
    Hssd2021,
    Hssd2022,
}

impl HssdVersion {
    pub const ALL: [HssdVersion; 5] = [
        HssdVersion::Hssd2018,
        HssdVersion::Hssd2019,
        HssdVersion::Hssd2020,
        HssdVersion::Hssd2021,
        HssdVersion::Hssd2022,
    ];

    pub fn year(self) -> &'static str {
        match self {
            HssdVersion::Hssd2018 => "2018",
            HssdVersion::Hssd2019 => "2019",
            HssdVersion::Hssd2020 => "2020",
            HssdVersion::Hssd2021 => "2021",
            HssdVersion::Hssd2022 => "2022",
        }
    }
}

impl fmt::Display for HssdVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSSD {}", self.year())
    }
}

impl FromStr for HssdVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let token = token
            .strip_prefix("HSSD")
            .or_else(|| token.strip_prefix("hssd"))
            .unwrap_or(token)
            .trim();
        HssdVersion::ALL
            .into_iter()
            .find(|v| v.year() == token)
            .ok_or_else(|| ConfigError::UnsupportedVersion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyArea {
    GreatLakes,
    PacificCoast,
    AtlanticCoast,
}

impl SurveyArea {
    pub fn is_great_lakes(self) -> bool {
        self == SurveyArea::GreatLakes
    }
}

impl fmt::Display for SurveyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurveyArea::GreatLakes => "Great Lakes",
            SurveyArea::PacificCoast => "Pacific Coast",
            SurveyArea::AtlanticCoast => "Atlantic Coast",
        };
        f.write_str(name)
    }
}

impl FromStr for SurveyArea {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "greatlakes" => Ok(SurveyArea::GreatLakes),
            "pacificcoast" | "pacific" => Ok(SurveyArea::PacificCoast),
            "atlanticcoast" | "atlantic" => Ok(SurveyArea::AtlanticCoast),
            _ => Err(ConfigError::UnsupportedSurveyArea(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Office,
    Field,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Office => f.write_str("office"),
            Profile::Field => f.write_str("field"),
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "office" => Ok(Profile::Office),
            "field" => Ok(Profile::Field),
            _ => Err(ConfigError::UnsupportedProfile(s.to_string())),
        }
    }
}

/// Parameters governing one validation run. Built once, never mutated
/// after [`crate::checks::Checks::new`] accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfiguration {
    pub version: HssdVersion,
    pub survey_area: SurveyArea,
    pub profile: Profile,
    pub use_mhw: bool,
    pub mhw_value: f64,
    /// Expected SORIND; `None` switches to format validation.
    pub sorind: Option<String>,
    /// Expected SORDAT; `None` switches to format validation.
    pub sordat: Option<String>,
    pub multimedia_folder: Option<PathBuf>,
    pub character_limit: usize,
}

impl CheckConfiguration {
    pub fn new(version: HssdVersion, survey_area: SurveyArea) -> Self {
        Self {
            version,
            survey_area,
            profile: Profile::Field,
            use_mhw: false,
            mhw_value: 0.0,
            sorind: None,
            sordat: None,
            multimedia_folder: None,
            character_limit: DEFAULT_CHARACTER_LIMIT,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_mhw(mut self, mhw_value: f64) -> Self {
        self.use_mhw = true;
        self.mhw_value = mhw_value;
        self
    }

    pub fn with_sorind(mut self, sorind: impl Into<String>) -> Self {
        self.sorind = Some(sorind.into());
        self
    }

    pub fn with_sordat(mut self, sordat: impl Into<String>) -> Self {
        self.sordat = Some(sordat.into());
        self
    }

    pub fn with_multimedia_folder(mut self, folder: &Path) -> Self {
        self.multimedia_folder = Some(folder.to_path_buf());
        self
    }

    pub fn with_character_limit(mut self, limit: usize) -> Self {
        self.character_limit = limit;
        self
    }

    pub fn is_office(&self) -> bool {
        self.profile == Profile::Office
    }

    /// Parse a JSON configuration document.
    ///
    /// Textual tokens (`"2022"`, `"Pacific Coast"`, `"office"`) are resolved
    /// here, so an unsupported year or area surfaces as its own error variant
    /// instead of a generic parse failure.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration = serde_json::from_str(text)?;
        let config = Self {
            version: raw.version.to_string().parse()?,
            survey_area: raw.survey_area.parse()?,
            profile: match raw.profile {
                Some(p) => p.parse()?,
                None => Profile::Field,
            },
            use_mhw: raw.use_mhw,
            mhw_value: raw.mhw_value,
            sorind: raw.sorind,
            sordat: raw.sordat,
            multimedia_folder: raw.multimedia_folder,
            character_limit: raw.character_limit.unwrap_or(DEFAULT_CHARACTER_LIMIT),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_mhw && (!self.mhw_value.is_finite() || self.mhw_value < 0.0) {
            return Err(ConfigError::InvalidMhw(self.mhw_value));
        }
        if self.character_limit == 0 {
            return Err(ConfigError::InvalidCharacterLimit(self.character_limit));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VersionToken {
    Text(String),
    Number(i64),
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Text(s) => f.write_str(s),
            VersionToken::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Deserialize)]
struct RawConfiguration {
    version: VersionToken,
    survey_area: String,
    #[serde(default)]
    profile: Option<String>,
    #[serde(default)]
    use_mhw: bool,
    #[serde(default)]
    mhw_value: f64,
    #[serde(default)]
    sorind: Option<String>,
    #[serde(default)]
    sordat: Option<String>,
    #[serde(default)]
    multimedia_folder: Option<PathBuf>,
    #[serde(default)]
    character_limit: Option<usize>,
}
