//! Cantidades fisicas: un valor junto con su unidad.
//!
//! Se aceptan como texto (`"350 ml"`, `"0.3 l"`, `"1 cup"`), como numero suelto
//! (adimensional) o como objeto `{ "magnitude": 350, "units": "ml" }`.
use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::errors::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Mass,
    Length,
    Time,
    Dimensionless,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Volume => "[volume]",
            Dimension::Mass => "[mass]",
            Dimension::Length => "[length]",
            Dimension::Time => "[time]",
            Dimension::Dimensionless => "dimensionless",
        };
        write!(f, "{}", name)
    }
}

/// Unidad conocida. `factor` lleva la unidad a la unidad base de su dimension
/// (ml, g, m, s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub dimension: Dimension,
    factor: f64,
}

const fn unit(symbol: &'static str, dimension: Dimension, factor: f64) -> Unit {
    Unit { symbol, dimension, factor }
}

pub const MILLILITRE: Unit = unit("ml", Dimension::Volume, 1.0);
pub const DIMENSIONLESS: Unit = unit("", Dimension::Dimensionless, 1.0);

const UNITS: &[(&[&str], Unit)] = &[
    (&["ml", "mL", "milliliter", "milliliters", "millilitre", "millilitres"], MILLILITRE),
    (&["cl", "centiliter", "centiliters", "centilitre", "centilitres"], unit("cl", Dimension::Volume, 10.0)),
    (&["dl", "deciliter", "deciliters", "decilitre", "decilitres"], unit("dl", Dimension::Volume, 100.0)),
    (&["l", "L", "liter", "liters", "litre", "litres"], unit("l", Dimension::Volume, 1000.0)),
    (&["cc", "cm3", "cm³", "cubic_centimeter", "cubic centimeter"], unit("cc", Dimension::Volume, 1.0)),
    (&["m3", "m³", "cubic_meter", "cubic meter"], unit("m³", Dimension::Volume, 1_000_000.0)),
    (&["tsp", "teaspoon", "teaspoons"], unit("tsp", Dimension::Volume, 4.928_921_593_75)),
    (&["tbsp", "tablespoon", "tablespoons"], unit("tbsp", Dimension::Volume, 14.786_764_781_25)),
    (&["floz", "fl oz", "fluid_ounce", "fluid ounce", "fluid ounces"], unit("fl oz", Dimension::Volume, 29.573_529_562_5)),
    (&["cup", "cups"], unit("cup", Dimension::Volume, 236.588_236_5)),
    (&["pt", "pint", "pints"], unit("pint", Dimension::Volume, 473.176_473)),
    (&["qt", "quart", "quarts"], unit("quart", Dimension::Volume, 946.352_946)),
    (&["gal", "gallon", "gallons"], unit("gallon", Dimension::Volume, 3_785.411_784)),
    (&["mg", "milligram", "milligrams"], unit("mg", Dimension::Mass, 0.001)),
    (&["g", "gram", "grams"], unit("g", Dimension::Mass, 1.0)),
    (&["kg", "kilogram", "kilograms"], unit("kg", Dimension::Mass, 1000.0)),
    (&["oz", "ounce", "ounces"], unit("oz", Dimension::Mass, 28.349_523_125)),
    (&["lb", "pound", "pounds"], unit("lb", Dimension::Mass, 453.592_37)),
    (&["mm", "millimeter", "millimeters", "millimetre", "millimetres"], unit("mm", Dimension::Length, 0.001)),
    (&["cm", "centimeter", "centimeters", "centimetre", "centimetres"], unit("cm", Dimension::Length, 0.01)),
    (&["m", "meter", "meters", "metre", "metres"], unit("m", Dimension::Length, 1.0)),
    (&["in", "inch", "inches"], unit("in", Dimension::Length, 0.0254)),
    (&["s", "sec", "second", "seconds"], unit("s", Dimension::Time, 1.0)),
    (&["min", "minute", "minutes"], unit("min", Dimension::Time, 60.0)),
    (&["h", "hour", "hours"], unit("h", Dimension::Time, 3600.0)),
    (&["", "dimensionless"], DIMENSIONLESS),
];

impl Unit {
    /// Busca una unidad por cualquiera de sus nombres
    pub fn lookup(name: &str) -> Option<Unit> {
        let name = name.trim();
        UNITS
            .iter()
            .find(|(names, _)| names.contains(&name))
            .map(|(_, unit)| *unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dimension {
            Dimension::Dimensionless => write!(f, "dimensionless"),
            _ => write!(f, "{}", self.symbol),
        }
    }
}

/// Valor con unidad, tal como llega en un pedido.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuantity", into = "String")]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Quantity {
        Quantity { magnitude, unit }
    }

    pub fn millilitres(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, MILLILITRE)
    }

    /// Interpreta textos del estilo `"350 ml"` o `"1.5cups"`.
    pub fn parse(text: &str) -> Result<Quantity, OrderError> {
        let text = text.trim();
        let split_at = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E'))
            .unwrap_or(text.len());
        let (number, unit_name) = split_number_and_unit(text, split_at);
        let magnitude = number
            .parse::<f64>()
            .map_err(|_| OrderError::invalid(format!("'{}' is not a valid quantity", text)))?;
        let unit = Unit::lookup(unit_name)
            .ok_or_else(|| OrderError::invalid(format!("'{}' is not a known unit", unit_name.trim())))?;
        Quantity::checked(magnitude, unit)
    }

    fn checked(magnitude: f64, unit: Unit) -> Result<Quantity, OrderError> {
        if !magnitude.is_finite() {
            return Err(OrderError::invalid(format!("{} is not a finite quantity", magnitude)));
        }
        Ok(Quantity::new(magnitude, unit))
    }

    /// Convierte a otra unidad de la misma dimension.
    pub fn to(&self, target: Unit) -> Result<Quantity, OrderError> {
        if self.unit.dimension != target.dimension {
            return Err(OrderError::invalid(format!(
                "A quantity in the unit: {} cannot be converted to {} ({} is not {})",
                self.unit, target, self.unit.dimension, target.dimension
            )));
        }
        let magnitude = self.magnitude * self.unit.factor / target.factor;
        Ok(Quantity::new(magnitude, target))
    }
}

/// Separa el numero de la unidad. Una `e` seguida de letras es parte de la unidad, no un exponente.
fn split_number_and_unit(text: &str, split_at: usize) -> (&str, &str) {
    let (number, unit) = text.split_at(split_at);
    match number.rfind(|c| c == 'e' || c == 'E') {
        Some(position) if position + 1 == number.len() => (&number[..position], &text[position..]),
        _ => (number, unit),
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.dimension {
            Dimension::Dimensionless => write!(f, "{}", self.magnitude),
            _ => write!(f, "{} {}", self.magnitude, self.unit),
        }
    }
}

impl From<Quantity> for String {
    fn from(quantity: Quantity) -> Self {
        quantity.to_string()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantityParts {
    magnitude: f64,
    units: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
    Parts(QuantityParts),
}

impl TryFrom<RawQuantity> for Quantity {
    type Error = OrderError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        match raw {
            RawQuantity::Number(magnitude) => Quantity::checked(magnitude, DIMENSIONLESS),
            RawQuantity::Text(text) => Quantity::parse(&text),
            RawQuantity::Parts(QuantityParts { magnitude, units }) => {
                let unit = Unit::lookup(&units)
                    .ok_or_else(|| OrderError::invalid(format!("'{}' is not a known unit", units)))?;
                Quantity::checked(magnitude, unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!((expected - actual).abs() < 1e-9, "expected {} got {}", expected, actual);
    }

    #[test]
    fn should_parse_a_quantity_with_a_space() {
        let quantity = Quantity::parse("350 ml").unwrap();
        assert_eq!(350.0, quantity.magnitude);
        assert_eq!(MILLILITRE, quantity.unit);
    }

    #[test]
    fn should_parse_a_quantity_without_a_space() {
        let quantity = Quantity::parse("1.5cups").unwrap();
        assert_eq!(1.5, quantity.magnitude);
        assert_eq!("cup", quantity.unit.symbol);
    }

    #[test]
    fn should_parse_a_multi_word_unit() {
        let quantity = Quantity::parse("8 fl oz").unwrap();
        assert_close(236.588_236_5, quantity.to(MILLILITRE).unwrap().magnitude);
    }

    #[test]
    fn should_parse_scientific_notation() {
        let quantity = Quantity::parse("3.5e2 ml").unwrap();
        assert_eq!(350.0, quantity.magnitude);
    }

    #[test]
    fn should_parse_a_bare_number_as_dimensionless() {
        let quantity = Quantity::parse("42").unwrap();
        assert_eq!(Dimension::Dimensionless, quantity.unit.dimension);
    }

    #[test]
    fn should_reject_unknown_units() {
        assert!(matches!(Quantity::parse("3 furlongs"), Err(OrderError::InvalidValue(_))));
    }

    #[test]
    fn should_reject_garbage() {
        assert!(Quantity::parse("lots of ml").is_err());
        assert!(Quantity::parse("NaN ml").is_err());
    }

    #[test]
    fn should_convert_litres_to_millilitres() {
        let quantity = Quantity::parse("0.3 l").unwrap().to(MILLILITRE).unwrap();
        assert_close(300.0, quantity.magnitude);
        assert_eq!(MILLILITRE, quantity.unit);
    }

    #[test]
    fn should_not_convert_between_dimensions() {
        let grams = Quantity::parse("200 g").unwrap();
        assert!(matches!(grams.to(MILLILITRE), Err(OrderError::InvalidValue(_))));
    }

    #[test]
    fn should_deserialize_every_accepted_shape() {
        let text: Quantity = serde_json::from_str("\"2 dl\"").unwrap();
        let parts: Quantity = serde_json::from_str(r#"{"magnitude": 2, "units": "dl"}"#).unwrap();
        let number: Quantity = serde_json::from_str("200").unwrap();
        assert_eq!(text, parts);
        assert_eq!(Dimension::Dimensionless, number.unit.dimension);
    }

    #[test]
    fn should_reject_quantity_objects_with_unknown_keys() {
        let result =
            serde_json::from_str::<Quantity>(r#"{"magnitude": 100, "units": "ml", "colour": "red"}"#);
        assert!(result.is_err());
        assert!(serde_json::from_str::<Quantity>(r#"{"magnitude": 100}"#).is_err());
    }

    #[test]
    fn should_serialize_as_text() {
        let json = serde_json::to_string(&Quantity::millilitres(350.0)).unwrap();
        assert_eq!("\"350 ml\"", json);
    }
}
