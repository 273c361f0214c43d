//! Base comun del cafe y el te.
use serde::{ de::Error, Deserialize, Deserializer, Serialize };
use uuid::Uuid;

use crate::{
    errors::OrderError,
    menu::Size,
    validators::{ check_milk_and_cream, check_sugars },
};

/// Campos que comparten las bebidas calientes con leche, crema y azucar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotDrink {
    order_id: Uuid,
    size: Size,
    milk: bool,
    cream: bool,
    sugars: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSugars {
    Count(u64),
    Negative(i64),
    Fractional(f64),
}

/// Acepta la cantidad de azucares como entero o como numero real sin decimales (`3.0`).
pub(crate) fn deserialize_sugars<'de, D>(deserializer: D) -> Result<i128, D::Error>
where
    D: Deserializer<'de>,
{
    match RawSugars::deserialize(deserializer)? {
        RawSugars::Count(sugars) => Ok(i128::from(sugars)),
        RawSugars::Negative(sugars) => Ok(i128::from(sugars)),
        RawSugars::Fractional(sugars) if sugars.is_finite() && sugars.fract() == 0.0 && sugars.abs() < 1e30 => {
            Ok(sugars as i128)
        }
        RawSugars::Fractional(sugars) => {
            Err(D::Error::custom(format!("sugars must be a whole number, not {}", sugars)))
        }
    }
}

impl HotDrink {
    /// Valida cada campo y despues la combinacion de leche y crema.
    /// Si no se indica un id de pedido se genera uno nuevo.
    pub fn new(
        order_id: Option<Uuid>,
        size: Size,
        milk: bool,
        cream: bool,
        sugars: i128,
    ) -> Result<HotDrink, OrderError> {
        let hot_drink = HotDrink {
            order_id: order_id.unwrap_or_else(Uuid::new_v4),
            size,
            milk,
            cream,
            sugars: check_sugars("sugars", sugars)?,
        };
        hot_drink.validate()?;
        Ok(hot_drink)
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        check_milk_and_cream(self.milk, self.cream)
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn milk(&self) -> bool {
        self.milk
    }

    pub fn cream(&self) -> bool {
        self.cream
    }

    pub fn sugars(&self) -> u64 {
        self.sugars
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn set_milk(&mut self, milk: bool) {
        self.milk = milk;
    }

    pub(crate) fn set_cream(&mut self, cream: bool) {
        self.cream = cream;
    }

    pub(crate) fn set_sugars(&mut self, sugars: i128) -> Result<(), OrderError> {
        self.sugars = check_sugars("sugars", sugars)?;
        Ok(())
    }

    /// Descripcion corta de los agregados, para los tickets
    pub(crate) fn extras(&self) -> String {
        let mut extras = Vec::new();
        if self.milk {
            extras.push("milk".to_string());
        }
        if self.cream {
            extras.push("cream".to_string());
        }
        match self.sugars {
            0 => {}
            1 => extras.push("1 sugar".to_string()),
            sugars => extras.push(format!("{} sugars", sugars)),
        }
        if extras.is_empty() {
            "black".to_string()
        } else {
            extras.join(", ")
        }
    }
}
