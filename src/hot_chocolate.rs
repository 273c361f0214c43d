//! Pedido de chocolate caliente. No lleva leche, crema ni azucar aparte: solo toppings.
use std::fmt;

use log::debug;
use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };
use uuid::Uuid;

use crate::{
    drink::{ deserialize_order_id, Drink },
    errors::OrderError,
    menu::{ Size, Topping },
    validators::check_toppings,
};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HotChocolateRequest {
    #[serde(deserialize_with = "deserialize_order_id")]
    pub order_id: Option<Uuid>,
    pub size: Size,
    pub toppings: Vec<Topping>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotChocolate {
    order_id: Uuid,
    size: Size,
    toppings: Vec<Topping>,
}

impl HotChocolate {
    pub fn new(request: HotChocolateRequest) -> Result<HotChocolate, OrderError> {
        let hot_chocolate = HotChocolate {
            order_id: request.order_id.unwrap_or_else(Uuid::new_v4),
            size: request.size,
            toppings: check_toppings(request.toppings)?,
        };
        debug!("[HOT CHOCOLATE] Built order {}", hot_chocolate.order_id);
        Ok(hot_chocolate)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), OrderError> {
        self.update(|hot_chocolate| {
            hot_chocolate.size = size;
            Ok(())
        })
    }

    pub fn set_toppings(&mut self, toppings: Vec<Topping>) -> Result<(), OrderError> {
        self.update(|hot_chocolate| {
            hot_chocolate.toppings = check_toppings(toppings)?;
            Ok(())
        })
    }
}

impl Drink for HotChocolate {
    const KIND: &'static str = "hot chocolate";

    fn order_id(&self) -> Uuid {
        self.order_id
    }

    fn validate(&self) -> Result<(), OrderError> {
        Ok(())
    }

    fn from_fields(fields: Map<String, Value>) -> Result<HotChocolate, OrderError> {
        let request: HotChocolateRequest = serde_json::from_value(Value::Object(fields))?;
        HotChocolate::new(request)
    }
}

impl TryFrom<HotChocolateRequest> for HotChocolate {
    type Error = OrderError;

    fn try_from(request: HotChocolateRequest) -> Result<Self, Self::Error> {
        HotChocolate::new(request)
    }
}

impl fmt::Display for HotChocolate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.toppings.is_empty() {
            return write!(f, "{} hot chocolate", self.size);
        }
        let toppings: Vec<String> = self.toppings.iter().map(|topping| topping.to_string()).collect();
        write!(f, "{} hot chocolate with {}", self.size, toppings.join(", "))
    }
}
