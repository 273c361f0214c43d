//! Pedido de cualquiera de las bebidas de la carta.
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    coffee::Coffee, drink::Drink, errors::OrderError, hot_chocolate::HotChocolate, tea::Tea,
};

/// Campo que indica que bebida se pide
pub const DRINK_FIELD: &str = "drink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkKind {
    Coffee,
    Tea,
    HotChocolate,
}

impl DrinkKind {
    pub fn from_name(name: &str) -> Option<DrinkKind> {
        [DrinkKind::Coffee, DrinkKind::Tea, DrinkKind::HotChocolate]
            .into_iter()
            .find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrinkKind::Coffee => Coffee::KIND,
            DrinkKind::Tea => Tea::KIND,
            DrinkKind::HotChocolate => HotChocolate::KIND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "drink")]
pub enum Order {
    #[serde(rename = "coffee")]
    Coffee(Coffee),
    #[serde(rename = "tea")]
    Tea(Tea),
    #[serde(rename = "hot chocolate")]
    HotChocolate(HotChocolate),
}

impl Order {
    /// Construye un pedido a partir de un objeto JSON con el campo `drink`
    /// mas los campos propios de la bebida.
    pub fn from_value(value: Value) -> Result<Order, OrderError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(OrderError::invalid(format!("an order must be an object, not {}", other)))
            }
        };
        let kind = match fields.remove(DRINK_FIELD) {
            Some(Value::String(name)) => DrinkKind::from_name(&name)
                .ok_or_else(|| OrderError::invalid(format!("'{}' is not on the menu", name)))?,
            Some(other) => {
                return Err(OrderError::invalid(format!("'{}' is not a valid drink", other)))
            }
            None => return Err(OrderError::invalid("an order must say which drink it is")),
        };
        match kind {
            DrinkKind::Coffee => Coffee::from_fields(fields).map(Order::Coffee),
            DrinkKind::Tea => Tea::from_fields(fields).map(Order::Tea),
            DrinkKind::HotChocolate => HotChocolate::from_fields(fields).map(Order::HotChocolate),
        }
    }

    pub fn kind(&self) -> DrinkKind {
        match self {
            Order::Coffee(_) => DrinkKind::Coffee,
            Order::Tea(_) => DrinkKind::Tea,
            Order::HotChocolate(_) => DrinkKind::HotChocolate,
        }
    }

    pub fn order_id(&self) -> Uuid {
        match self {
            Order::Coffee(coffee) => coffee.order_id(),
            Order::Tea(tea) => tea.order_id(),
            Order::HotChocolate(hot_chocolate) => hot_chocolate.order_id(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Coffee(coffee) => write!(f, "{}", coffee),
            Order::Tea(tea) => write!(f, "{}", tea),
            Order::HotChocolate(hot_chocolate) => write!(f, "{}", hot_chocolate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_an_order_of_each_drink() {
        let coffee = Order::from_value(json!({"drink": "coffee", "method": {"name": "traditional"}}));
        let tea = Order::from_value(json!({"drink": "tea", "variety": "green"}));
        let hot_chocolate = Order::from_value(json!({"drink": "hot chocolate", "toppings": ["flake"]}));
        assert_eq!(DrinkKind::Coffee, coffee.unwrap().kind());
        assert_eq!(DrinkKind::Tea, tea.unwrap().kind());
        assert_eq!(DrinkKind::HotChocolate, hot_chocolate.unwrap().kind());
    }

    #[test]
    fn should_reject_drinks_off_the_menu() {
        let result = Order::from_value(json!({"drink": "mocha"}));
        assert_eq!(Err(OrderError::invalid("'mocha' is not on the menu")), result);
    }

    #[test]
    fn should_require_the_drink() {
        assert!(Order::from_value(json!({"variety": "green"})).is_err());
        assert!(Order::from_value(json!({"drink": 3})).is_err());
        assert!(Order::from_value(json!(["tea"])).is_err());
    }

    #[test]
    fn should_pass_on_the_drink_errors() {
        let result = Order::from_value(json!({"drink": "tea", "variety": "green", "sugars": 1}));
        assert_eq!(
            Err(OrderError::invalid("Surely you don't have sugar in middle class tea . . .")),
            result
        );
    }

    #[test]
    fn should_serialize_with_the_drink_tag() {
        let order = Order::from_value(json!({"drink": "hot chocolate"})).unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(json!("hot chocolate"), value["drink"]);
        assert_eq!(json!(order.order_id().to_string()), value["order_id"]);
    }
}
