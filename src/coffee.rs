//! Pedido de cafe.
use std::fmt;

use log::debug;
use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };
use uuid::Uuid;

use crate::{
    drink::{ deserialize_order_id, Drink },
    errors::OrderError,
    hot_drink::{ deserialize_sugars, HotDrink },
    menu::{ Country, Size },
    method::BrewingMethod,
    quantity::Quantity,
    validators::{ check_chemex, check_fit_in_cup, convert_volume },
};

/// Campos con los que se pide un cafe. Todos menos `method` tienen valor por defecto.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoffeeRequest {
    #[serde(default, deserialize_with = "deserialize_order_id")]
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub milk: bool,
    #[serde(default)]
    pub cream: bool,
    #[serde(default, deserialize_with = "deserialize_sugars")]
    pub sugars: i128,
    #[serde(default)]
    pub country: Country,
    pub method: BrewingMethod,
    #[serde(default = "no_water")]
    pub water: Quantity,
}

fn no_water() -> Quantity {
    Quantity::millilitres(0.0)
}

impl CoffeeRequest {
    pub fn new(method: BrewingMethod) -> CoffeeRequest {
        CoffeeRequest {
            order_id: None,
            size: Size::default(),
            milk: false,
            cream: false,
            sugars: 0,
            country: Country::default(),
            method,
            water: no_water(),
        }
    }
}

/// Cafe validado. El agua siempre queda guardada en mililitros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coffee {
    #[serde(flatten)]
    base: HotDrink,
    country: Country,
    method: BrewingMethod,
    water: Quantity,
}

impl Coffee {
    pub fn new(request: CoffeeRequest) -> Result<Coffee, OrderError> {
        let base = HotDrink::new(
            request.order_id,
            request.size,
            request.milk,
            request.cream,
            request.sugars,
        )?;
        let coffee = Coffee {
            base,
            country: request.country,
            method: request.method,
            water: convert_volume(request.water)?,
        };
        coffee.validate()?;
        debug!("[COFFEE] Built order {}", coffee.order_id());
        Ok(coffee)
    }

    pub fn size(&self) -> Size {
        self.base.size()
    }

    pub fn milk(&self) -> bool {
        self.base.milk()
    }

    pub fn cream(&self) -> bool {
        self.base.cream()
    }

    pub fn sugars(&self) -> u64 {
        self.base.sugars()
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn method(&self) -> &BrewingMethod {
        &self.method
    }

    /// Agua en mililitros
    pub fn water(&self) -> Quantity {
        self.water
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.base.set_size(size);
            Ok(())
        })
    }

    pub fn set_milk(&mut self, milk: bool) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.base.set_milk(milk);
            Ok(())
        })
    }

    pub fn set_cream(&mut self, cream: bool) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.base.set_cream(cream);
            Ok(())
        })
    }

    pub fn set_sugars(&mut self, sugars: i128) -> Result<(), OrderError> {
        self.update(|coffee| coffee.base.set_sugars(sugars))
    }

    pub fn set_country(&mut self, country: Country) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.country = country;
            Ok(())
        })
    }

    pub fn set_method(&mut self, method: BrewingMethod) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.method = method;
            Ok(())
        })
    }

    pub fn set_water(&mut self, water: Quantity) -> Result<(), OrderError> {
        self.update(|coffee| {
            coffee.water = convert_volume(water)?;
            Ok(())
        })
    }
}

impl Drink for Coffee {
    const KIND: &'static str = "coffee";

    fn order_id(&self) -> Uuid {
        self.base.order_id()
    }

    fn validate(&self) -> Result<(), OrderError> {
        self.base.validate()?;
        check_chemex(&self.method, self.size())?;
        check_fit_in_cup(&self.water, self.size())
    }

    fn from_fields(fields: Map<String, Value>) -> Result<Coffee, OrderError> {
        let request: CoffeeRequest = serde_json::from_value(Value::Object(fields))?;
        Coffee::new(request)
    }
}

impl TryFrom<CoffeeRequest> for Coffee {
    type Error = OrderError;

    fn try_from(request: CoffeeRequest) -> Result<Self, Self::Error> {
        Coffee::new(request)
    }
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} coffee, {}, {} water, {}",
            self.size(),
            self.country,
            self.method,
            self.water,
            self.base.extras()
        )
    }
}
