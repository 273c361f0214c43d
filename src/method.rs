//! Metodos de preparacion del cafe. El campo `name` indica cual de ellos se eligio.
use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::constants::{ CHEMEX_DEFAULT_BREW_TIME, POUR_OVER_DEFAULT_BREW_TIME };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    Metal,
    Paper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brewer {
    #[default]
    V60,
    Wave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TraditionalOptions {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AeropressOptions {
    #[serde(default)]
    pub filter: Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PourOverOptions {
    #[serde(default)]
    pub brewer: Brewer,
    /// Segundos
    #[serde(default = "pour_over_brew_time")]
    pub brew_time: u32,
}

impl Default for PourOverOptions {
    fn default() -> Self {
        PourOverOptions { brewer: Brewer::default(), brew_time: POUR_OVER_DEFAULT_BREW_TIME }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChemexOptions {
    /// Segundos
    #[serde(default = "chemex_brew_time")]
    pub brew_time: u32,
}

impl Default for ChemexOptions {
    fn default() -> Self {
        ChemexOptions { brew_time: CHEMEX_DEFAULT_BREW_TIME }
    }
}

fn pour_over_brew_time() -> u32 {
    POUR_OVER_DEFAULT_BREW_TIME
}

fn chemex_brew_time() -> u32 {
    CHEMEX_DEFAULT_BREW_TIME
}

/// Metodo de preparacion. Cada variante rechaza campos que no le pertenecen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum BrewingMethod {
    #[serde(rename = "traditional")]
    Traditional(TraditionalOptions),
    #[serde(rename = "aeropress")]
    Aeropress(AeropressOptions),
    #[serde(rename = "pour over")]
    PourOver(PourOverOptions),
    #[serde(rename = "chemex")]
    Chemex(ChemexOptions),
}

impl BrewingMethod {
    pub fn traditional() -> BrewingMethod {
        BrewingMethod::Traditional(TraditionalOptions::default())
    }

    pub fn aeropress(filter: Filter) -> BrewingMethod {
        BrewingMethod::Aeropress(AeropressOptions { filter })
    }

    pub fn pour_over(brewer: Brewer, brew_time: u32) -> BrewingMethod {
        BrewingMethod::PourOver(PourOverOptions { brewer, brew_time })
    }

    pub fn chemex(brew_time: u32) -> BrewingMethod {
        BrewingMethod::Chemex(ChemexOptions { brew_time })
    }

    pub fn name(&self) -> &'static str {
        match self {
            BrewingMethod::Traditional(_) => "traditional",
            BrewingMethod::Aeropress(_) => "aeropress",
            BrewingMethod::PourOver(_) => "pour over",
            BrewingMethod::Chemex(_) => "chemex",
        }
    }

    /// Tiempo de preparacion en segundos, si el metodo lo tiene
    pub fn brew_time(&self) -> Option<u32> {
        match self {
            BrewingMethod::Traditional(_) | BrewingMethod::Aeropress(_) => None,
            BrewingMethod::PourOver(options) => Some(options.brew_time),
            BrewingMethod::Chemex(options) => Some(options.brew_time),
        }
    }
}

impl fmt::Display for BrewingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrewingMethod::Traditional(_) => write!(f, "traditional"),
            BrewingMethod::Aeropress(options) => write!(f, "aeropress ({:?} filter)", options.filter),
            BrewingMethod::PourOver(options) => {
                write!(f, "pour over ({:?}, {}s)", options.brewer, options.brew_time)
            }
            BrewingMethod::Chemex(options) => write!(f, "chemex ({}s)", options.brew_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<BrewingMethod, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn should_select_the_variant_by_name() {
        assert_eq!(BrewingMethod::traditional(), parse(r#"{"name": "traditional"}"#).unwrap());
        assert_eq!(
            BrewingMethod::aeropress(Filter::Paper),
            parse(r#"{"name": "aeropress", "filter": "paper"}"#).unwrap()
        );
        assert_eq!(
            BrewingMethod::pour_over(Brewer::Wave, 90),
            parse(r#"{"name": "pour over", "brewer": "wave", "brew_time": 90}"#).unwrap()
        );
    }

    #[test]
    fn should_fill_in_the_defaults() {
        assert_eq!(BrewingMethod::aeropress(Filter::Metal), parse(r#"{"name": "aeropress"}"#).unwrap());
        assert_eq!(BrewingMethod::pour_over(Brewer::V60, 120), parse(r#"{"name": "pour over"}"#).unwrap());
        assert_eq!(BrewingMethod::chemex(240), parse(r#"{"name": "chemex"}"#).unwrap());
    }

    #[test]
    fn should_require_the_name() {
        assert!(parse(r#"{"brew_time": 240}"#).is_err());
    }

    #[test]
    fn should_reject_unknown_methods() {
        assert!(parse(r#"{"name": "french press"}"#).is_err());
    }

    #[test]
    fn should_reject_fields_of_another_variant() {
        assert!(parse(r#"{"name": "traditional", "filter": "paper"}"#).is_err());
        assert!(parse(r#"{"name": "chemex", "brewer": "v60"}"#).is_err());
        assert!(parse(r#"{"name": "aeropress", "brew_time": 60}"#).is_err());
    }

    #[test]
    fn should_reject_invalid_choices() {
        assert!(parse(r#"{"name": "aeropress", "filter": "cloth"}"#).is_err());
        assert!(parse(r#"{"name": "pour over", "brewer": "kalita"}"#).is_err());
    }

    #[test]
    fn should_serialize_with_the_name_tag() {
        let json = serde_json::to_value(BrewingMethod::chemex(240)).unwrap();
        assert_eq!(serde_json::json!({"name": "chemex", "brew_time": 240}), json);
    }

    #[test]
    fn should_only_report_brew_time_when_it_exists() {
        assert_eq!(None, BrewingMethod::traditional().brew_time());
        assert_eq!(Some(240), BrewingMethod::chemex(240).brew_time());
    }
}
