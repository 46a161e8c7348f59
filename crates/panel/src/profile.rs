use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use panel_catalog::Category;
use serde::Deserialize;

use crate::error::PanelError;

const BUILTIN_DEFAULT: &str = include_str!("../../../profiles/default.json");
const BUILTIN_TOPIC_FOCUS: &str = include_str!("../../../profiles/topic-focus.json");

/// Static configuration of the panel engine: score boosts and Red Team eligibility.
#[derive(Clone, Debug)]
pub struct PanelProfile {
    name: String,
    description: Option<String>,
    boosts: ScoreBoosts,
    red_team: RedTeamRules,
}

/// Additive score boosts applied on top of `performance_score`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBoosts {
    pub specialty: f64,
    pub bio: f64,
    pub required_category: f64,
}

impl Default for ScoreBoosts {
    fn default() -> Self {
        Self {
            specialty: 20.0,
            bio: 10.0,
            required_category: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedTeamRules {
    pub allowlist: BTreeSet<String>,
    pub categories: BTreeSet<Category>,
}

impl Default for RedTeamRules {
    fn default() -> Self {
        Self {
            allowlist: BTreeSet::new(),
            categories: BTreeSet::from([Category::GovernmentAndPolicy]),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawProfile {
    #[serde(default)]
    schema_version: Option<u32>,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    boosts: Option<RawBoosts>,
    #[serde(default)]
    red_team: Option<RawRedTeam>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawBoosts {
    specialty: Option<f64>,
    bio: Option<f64>,
    required_category: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawRedTeam {
    #[serde(default)]
    allowlist: Vec<String>,
    categories: Option<Vec<String>>,
}

impl PanelProfile {
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "default" => Some(
                Self::from_bytes("default", BUILTIN_DEFAULT.as_bytes(), None)
                    .expect("builtin default profile must parse"),
            ),
            "topic-focus" | "topic_focus" => Self::from_bytes(
                "topic-focus",
                BUILTIN_TOPIC_FOCUS.as_bytes(),
                Some("default"),
            )
            .ok(),
            _ => None,
        }
    }

    /// Like [`PanelProfile::builtin`], but an unknown name is an error
    pub fn named(name: &str) -> crate::Result<Self> {
        Self::builtin(name).ok_or_else(|| PanelError::UnknownProfile(name.to_string()))
    }

    /// Load a user profile layered over the bundled default, whatever its name
    pub fn from_file(profile_name: &str, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile = Self::from_bytes(profile_name, &bytes, Some("default"))?;
        log::info!("Loaded panel profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    pub fn from_bytes(profile_name: &str, bytes: &[u8], base: Option<&str>) -> Result<Self> {
        let raw = parse_raw(bytes).with_context(|| {
            format!("Profile '{profile_name}' is not valid JSON/TOML configuration")
        })?;
        let merged_raw = if let Some(base_name) = base {
            let base_raw = builtin_raw(base_name)?;
            merge_raw_profiles(base_raw, raw)
        } else {
            raw
        };
        Self::from_raw(merged_raw, profile_name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn boosts(&self) -> &ScoreBoosts {
        &self.boosts
    }

    #[must_use]
    pub const fn red_team(&self) -> &RedTeamRules {
        &self.red_team
    }

    #[must_use]
    pub fn is_red_team_allowlisted(&self, id: &str) -> bool {
        self.red_team.allowlist.contains(id)
    }

    fn from_raw(raw: RawProfile, fallback_name: &str) -> Result<Self> {
        if let Some(schema_version) = raw.schema_version {
            if schema_version != 1 {
                return Err(anyhow!(
                    "profile.schema_version {schema_version} is not supported (expected 1)"
                ));
            }
        }

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());
        let boosts = ScoreBoosts::from_raw(raw.boosts)
            .with_context(|| format!("Invalid boosts for profile '{name}'"))?;
        let red_team = RedTeamRules::from_raw(raw.red_team)
            .with_context(|| format!("Invalid red_team rules for profile '{name}'"))?;

        Ok(Self {
            name,
            description: raw.description,
            boosts,
            red_team,
        })
    }
}

impl Default for PanelProfile {
    fn default() -> Self {
        Self::builtin("default").expect("default profile is bundled")
    }
}

impl ScoreBoosts {
    fn from_raw(raw: Option<RawBoosts>) -> Result<Self> {
        let defaults = Self::default();
        let raw = raw.unwrap_or_default();
        let boosts = Self {
            specialty: raw.specialty.unwrap_or(defaults.specialty),
            bio: raw.bio.unwrap_or(defaults.bio),
            required_category: raw.required_category.unwrap_or(defaults.required_category),
        };

        for (key, value) in [
            ("boosts.specialty", boosts.specialty),
            ("boosts.bio", boosts.bio),
            ("boosts.required_category", boosts.required_category),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow!("{key} must be a finite value >= 0 (got {value})"));
            }
        }
        Ok(boosts)
    }
}

impl RedTeamRules {
    fn from_raw(raw: Option<RawRedTeam>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut allowlist = BTreeSet::new();
        for id in raw.allowlist {
            let id = id.trim();
            if id.is_empty() {
                return Err(anyhow!("red_team.allowlist contains an empty id"));
            }
            allowlist.insert(id.to_string());
        }

        let categories = match raw.categories {
            Some(names) => names
                .iter()
                .map(|name| {
                    name.parse::<Category>()
                        .map_err(|err| anyhow!("red_team.categories: {err}"))
                })
                .collect::<Result<BTreeSet<_>>>()?,
            None => Self::default().categories,
        };

        Ok(Self {
            allowlist,
            categories,
        })
    }
}

fn builtin_raw(name: &str) -> Result<RawProfile> {
    match name {
        "default" => parse_raw(BUILTIN_DEFAULT.as_bytes()),
        "topic-focus" | "topic_focus" => parse_raw(BUILTIN_TOPIC_FOCUS.as_bytes()),
        other => Err(anyhow!("Base profile '{other}' not bundled")),
    }
}

fn merge_raw_profiles(mut base: RawProfile, overlay: RawProfile) -> RawProfile {
    let boosts = match (base.boosts.take(), overlay.boosts) {
        (Some(base_cfg), Some(overlay_cfg)) => Some(RawBoosts {
            specialty: overlay_cfg.specialty.or(base_cfg.specialty),
            bio: overlay_cfg.bio.or(base_cfg.bio),
            required_category: overlay_cfg
                .required_category
                .or(base_cfg.required_category),
        }),
        (Some(base_cfg), None) => Some(base_cfg),
        (None, Some(overlay_cfg)) => Some(overlay_cfg),
        (None, None) => None,
    };

    // Allowlists are unioned; an overlay that names categories replaces the base set.
    let red_team = match (base.red_team.take(), overlay.red_team) {
        (Some(mut base_cfg), Some(overlay_cfg)) => {
            base_cfg.allowlist.extend(overlay_cfg.allowlist);
            base_cfg.categories = overlay_cfg.categories.or(base_cfg.categories);
            Some(base_cfg)
        }
        (Some(base_cfg), None) => Some(base_cfg),
        (None, Some(overlay_cfg)) => Some(overlay_cfg),
        (None, None) => None,
    };

    RawProfile {
        schema_version: overlay.schema_version.or(base.schema_version),
        // The overlay's key becomes the effective name unless it sets one explicitly.
        name: overlay.name,
        description: overlay.description.or_else(|| base.description.take()),
        boosts,
        red_team,
    }
}

fn parse_raw(bytes: &[u8]) -> Result<RawProfile> {
    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                anyhow!(
                    "Profile is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                )
            })?;
            serde_json::to_value(toml_value)
                .map_err(|err| anyhow!("Failed to convert TOML profile to JSON: {err}"))?
        }
    };

    validate_profile_value(&value)?;
    serde_json::from_value(value).map_err(|err| anyhow!("Profile parse error: {err}"))
}

fn validate_profile_value(value: &serde_json::Value) -> Result<()> {
    fn collect_unknown(
        unknown: &mut Vec<String>,
        value: &serde_json::Value,
        base: &str,
        allowed: &[&str],
    ) {
        let Some(obj) = value.as_object() else {
            return;
        };
        for key in obj.keys() {
            if !allowed.contains(&key.as_str()) {
                if base.is_empty() {
                    unknown.push(key.clone());
                } else {
                    unknown.push(format!("{base}.{key}"));
                }
            }
        }
    }

    if !value.is_object() {
        return Err(anyhow!("Profile must be a JSON/TOML object"));
    }

    let mut unknown = Vec::new();
    collect_unknown(
        &mut unknown,
        value,
        "",
        &["schema_version", "name", "description", "boosts", "red_team"],
    );
    if let Some(boosts) = value.get("boosts") {
        collect_unknown(
            &mut unknown,
            boosts,
            "boosts",
            &["specialty", "bio", "required_category"],
        );
    }
    if let Some(red_team) = value.get("red_team") {
        collect_unknown(&mut unknown, red_team, "red_team", &["allowlist", "categories"]);
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        unknown.sort();
        Err(anyhow!("Unknown profile keys: {}", unknown.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_builtin_default() {
        let profile = PanelProfile::builtin("default").unwrap();
        assert_eq!(profile.name(), "default");
        assert_eq!(*profile.boosts(), ScoreBoosts::default());
        assert!(profile.is_red_team_allowlisted("devils-advocate"));
        assert_eq!(
            profile.red_team().categories,
            BTreeSet::from([Category::GovernmentAndPolicy])
        );
    }

    #[test]
    fn topic_focus_overlays_default() {
        let profile = PanelProfile::builtin("topic-focus").unwrap();
        assert_eq!(profile.name(), "topic-focus");
        assert!((profile.boosts().specialty - 45.0).abs() < f64::EPSILON);
        // Inherited from the base profile.
        assert!((profile.boosts().required_category - 15.0).abs() < f64::EPSILON);
        assert!(profile.is_red_team_allowlisted("skeptical-auditor"));
    }

    #[test]
    fn unknown_builtin_is_reported() {
        assert!(PanelProfile::builtin("nope").is_none());
        let err = PanelProfile::named("nope").unwrap_err();
        assert!(matches!(err, PanelError::UnknownProfile(ref n) if n == "nope"));
    }

    #[test]
    fn profile_rejects_unknown_fields_with_paths() {
        let bytes = br#"
        {
          "schema_version": 1,
          "boosts": { "specialty": 5, "oops": 1 },
          "red_team": { "allowlist": [], "extra": true },
          "surprise": 1
        }
        "#;

        let err = PanelProfile::from_bytes("custom", bytes, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("boosts.oops"), "{msg}");
        assert!(msg.contains("red_team.extra"), "{msg}");
        assert!(msg.contains("surprise"), "{msg}");
    }

    #[test]
    fn profile_rejects_unsupported_schema_version() {
        let bytes = br#"{ "schema_version": 999, "name": "x" }"#;
        let err = PanelProfile::from_bytes("custom", bytes, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("profile.schema_version"), "{msg}");
    }

    #[test]
    fn profile_rejects_negative_boosts() {
        let bytes = br#"{ "boosts": { "bio": -1 } }"#;
        let err = PanelProfile::from_bytes("custom", bytes, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("boosts.bio"), "{msg}");
    }

    #[test]
    fn profile_rejects_unknown_red_team_category() {
        let bytes = br#"{ "red_team": { "categories": ["Astrology"] } }"#;
        let err = PanelProfile::from_bytes("custom", bytes, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Astrology"), "{msg}");
    }

    #[test]
    fn overlay_unions_allowlists() {
        let profile = PanelProfile::from_bytes(
            "custom",
            br#"{ "red_team": { "allowlist": ["house-critic"] } }"#,
            Some("default"),
        )
        .unwrap();
        assert!(profile.is_red_team_allowlisted("house-critic"));
        assert!(profile.is_red_team_allowlisted("devils-advocate"));
        assert_eq!(
            profile.red_team().categories,
            BTreeSet::from([Category::GovernmentAndPolicy])
        );
    }

    #[test]
    fn parses_toml_profiles() {
        let profile = PanelProfile::from_bytes(
            "toml",
            br#"
            name = "toml"

            [boosts]
            specialty = 30.0

            [red_team]
            allowlist = ["a", "b"]
            categories = ["Legal & Compliance"]
            "#,
            None,
        )
        .unwrap();
        assert!((profile.boosts().specialty - 30.0).abs() < f64::EPSILON);
        assert!((profile.boosts().bio - 10.0).abs() < f64::EPSILON);
        assert_eq!(profile.red_team().allowlist.len(), 2);
        assert!(profile
            .red_team()
            .categories
            .contains(&Category::LegalAndCompliance));
    }

    #[test]
    fn from_file_layers_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strict.json");
        std::fs::write(&path, br#"{ "boosts": { "required_category": 40 } }"#).unwrap();

        let profile = PanelProfile::from_file("strict", &path).unwrap();
        assert_eq!(profile.name(), "strict");
        assert!((profile.boosts().required_category - 40.0).abs() < f64::EPSILON);
        assert!((profile.boosts().specialty - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_file_named_default_keeps_bundled_red_team() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.json");
        std::fs::write(&path, br#"{ "boosts": { "bio": 0 } }"#).unwrap();

        let profile = PanelProfile::from_file("default", &path).unwrap();
        assert!(profile.boosts().bio.abs() < f64::EPSILON);
        assert_eq!(
            profile.red_team().allowlist,
            PanelProfile::default().red_team().allowlist
        );
        assert!(profile
            .red_team()
            .categories
            .contains(&Category::GovernmentAndPolicy));
    }
}
