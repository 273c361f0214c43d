//! Pedido de te.
use std::fmt;

use log::debug;
use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };
use uuid::Uuid;

use crate::{
    drink::{ deserialize_order_id, Drink },
    errors::OrderError,
    hot_drink::{ deserialize_sugars, HotDrink },
    menu::{ Size, Variety },
    validators::check_tea_sugar,
};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeaRequest {
    #[serde(deserialize_with = "deserialize_order_id")]
    pub order_id: Option<Uuid>,
    pub size: Size,
    pub milk: bool,
    pub cream: bool,
    #[serde(deserialize_with = "deserialize_sugars")]
    pub sugars: i128,
    pub variety: Variety,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tea {
    #[serde(flatten)]
    base: HotDrink,
    variety: Variety,
}

impl Tea {
    pub fn new(request: TeaRequest) -> Result<Tea, OrderError> {
        let base = HotDrink::new(
            request.order_id,
            request.size,
            request.milk,
            request.cream,
            request.sugars,
        )?;
        let tea = Tea { base, variety: request.variety };
        tea.validate()?;
        debug!("[TEA] Built order {}", tea.order_id());
        Ok(tea)
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

    pub fn variety(&self) -> Variety {
        self.variety
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), OrderError> {
        self.update(|tea| {
            tea.base.set_size(size);
            Ok(())
        })
    }

    pub fn set_milk(&mut self, milk: bool) -> Result<(), OrderError> {
        self.update(|tea| {
            tea.base.set_milk(milk);
            Ok(())
        })
    }

    pub fn set_cream(&mut self, cream: bool) -> Result<(), OrderError> {
        self.update(|tea| {
            tea.base.set_cream(cream);
            Ok(())
        })
    }

    pub fn set_sugars(&mut self, sugars: i128) -> Result<(), OrderError> {
        self.update(|tea| tea.base.set_sugars(sugars))
    }

    pub fn set_variety(&mut self, variety: Variety) -> Result<(), OrderError> {
        self.update(|tea| {
            tea.variety = variety;
            Ok(())
        })
    }
}

impl Drink for Tea {
    const KIND: &'static str = "tea";

    fn order_id(&self) -> Uuid {
        self.base.order_id()
    }

    fn validate(&self) -> Result<(), OrderError> {
        self.base.validate()?;
        check_tea_sugar(self.variety, self.sugars())
    }

    fn from_fields(fields: Map<String, Value>) -> Result<Tea, OrderError> {
        let request: TeaRequest = serde_json::from_value(Value::Object(fields))?;
        Tea::new(request)
    }
}

impl TryFrom<TeaRequest> for Tea {
    type Error = OrderError;

    fn try_from(request: TeaRequest) -> Result<Self, Self::Error> {
        Tea::new(request)
    }
}

impl fmt::Display for Tea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} tea, {}", self.size(), self.variety, self.base.extras())
    }
}
