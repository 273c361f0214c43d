//! Carta de la cafeteria: tamaños, origenes, toppings y variedades de te.
use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::constants::{ LARGE_CUP_CAPACITY_ML, MEDIUM_CUP_CAPACITY_ML, SMALL_CUP_CAPACITY_ML };

/// Tamaño de la taza. Los nombres de la casa son los que viajan en los pedidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Size {
    #[default]
    #[serde(rename = "Plaga")]
    Small,
    #[serde(rename = "Garrador")]
    Medium,
    #[serde(rename = "El Gigante")]
    Large,
}

impl Size {
    pub fn name(&self) -> &'static str {
        match self {
            Size::Small => "Plaga",
            Size::Medium => "Garrador",
            Size::Large => "El Gigante",
        }
    }

    /// Cantidad maxima de agua, en ml, que entra en la taza
    pub fn water_capacity_ml(&self) -> f64 {
        match self {
            Size::Small => SMALL_CUP_CAPACITY_ML,
            Size::Medium => MEDIUM_CUP_CAPACITY_ML,
            Size::Large => LARGE_CUP_CAPACITY_ML,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    Angola,
    #[default]
    Brazil,
    Columbia,
    #[serde(rename = "El Salvador")]
    ElSalvador,
    Ethiopia,
    Guatemala,
    Kenya,
    Tanzania,
    Uganda,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::ElSalvador => write!(f, "El Salvador"),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    #[serde(rename = "chocolate shavings")]
    ChocolateShavings,
    #[serde(rename = "flake")]
    Flake,
    #[serde(rename = "fudge")]
    Fudge,
    #[serde(rename = "marshmallows")]
    Marshmallows,
    #[serde(rename = "sparkler")]
    Sparkler,
    #[serde(rename = "whipped cream")]
    WhippedCream,
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topping::ChocolateShavings => "chocolate shavings",
            Topping::Flake => "flake",
            Topping::Fudge => "fudge",
            Topping::Marshmallows => "marshmallows",
            Topping::Sparkler => "sparkler",
            Topping::WhippedCream => "whipped cream",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variety {
    #[default]
    Proper,
    Green,
    #[serde(rename = "lapsang souchong")]
    Lapsang,
    Rooibos,
    Burgamot,
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variety::Proper => "proper",
            Variety::Green => "green",
            Variety::Lapsang => "lapsang souchong",
            Variety::Rooibos => "rooibos",
            Variety::Burgamot => "burgamot",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_the_house_names_for_sizes() {
        assert_eq!("\"El Gigante\"", serde_json::to_string(&Size::Large).unwrap());
        let size: Size = serde_json::from_str("\"Garrador\"").unwrap();
        assert_eq!(Size::Medium, size);
    }

    #[test]
    fn should_reject_generic_size_names() {
        assert!(serde_json::from_str::<Size>("\"small\"").is_err());
    }

    #[test]
    fn should_have_a_capacity_per_size() {
        assert_eq!(200.0, Size::Small.water_capacity_ml());
        assert_eq!(300.0, Size::Medium.water_capacity_ml());
        assert_eq!(400.0, Size::Large.water_capacity_ml());
    }

    #[test]
    fn should_default_to_brazil_small_and_proper() {
        assert_eq!(Country::Brazil, Country::default());
        assert_eq!(Size::Small, Size::default());
        assert_eq!(Variety::Proper, Variety::default());
    }

    #[test]
    fn should_parse_names_with_spaces() {
        let country: Country = serde_json::from_str("\"El Salvador\"").unwrap();
        let topping: Topping = serde_json::from_str("\"whipped cream\"").unwrap();
        let variety: Variety = serde_json::from_str("\"lapsang souchong\"").unwrap();
        assert_eq!(Country::ElSalvador, country);
        assert_eq!(Topping::WhippedCream, topping);
        assert_eq!(Variety::Lapsang, variety);
        assert_eq!("El Salvador", country.to_string());
    }
}
