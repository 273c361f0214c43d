//! Comportamiento comun a todas las bebidas: construccion desde un mapa de campos
//! y modificacion validada de un campo.
use log::debug;
use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::{ Map, Value };
use uuid::Uuid;

use crate::errors::OrderError;

pub const ORDER_ID_FIELD: &str = "order_id";

/// El id de pedido puede omitirse, pero si viene tiene que ser un UUID: `null` no vale.
pub(crate) fn deserialize_order_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    Uuid::deserialize(deserializer).map(Some)
}

pub trait Drink: Clone + Serialize + Sized {
    /// Nombre de la bebida, tal como aparece en los pedidos
    const KIND: &'static str;

    fn order_id(&self) -> Uuid;

    /// Reglas que involucran a mas de un campo
    fn validate(&self) -> Result<(), OrderError>;

    /// Construye la bebida a partir de un mapa nombre de campo -> valor.
    /// Los campos que falten toman su valor por defecto; los desconocidos se rechazan.
    fn from_fields(fields: Map<String, Value>) -> Result<Self, OrderError>;

    fn from_json(json: &str) -> Result<Self, OrderError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(OrderError::invalid(format!(
                "a {} order must be an object, not {}",
                Self::KIND,
                other
            ))),
        }
    }

    fn to_fields(&self) -> Result<Map<String, Value>, OrderError> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(OrderError::invalid(format!("a {} must serialize to an object", Self::KIND))),
        }
    }

    /// Asigna un nuevo valor a un campo. Si la bebida resultante no es valida
    /// el cambio no se aplica.
    fn set(&mut self, field: &str, value: Value) -> Result<(), OrderError> {
        if field == ORDER_ID_FIELD {
            return Err(OrderError::invalid("order_id is frozen and cannot be changed."));
        }
        let mut fields = self.to_fields()?;
        if !fields.contains_key(field) {
            return Err(OrderError::invalid(format!("{} has no field '{}'", Self::KIND, field)));
        }
        fields.insert(field.to_string(), value);
        let candidate = Self::from_fields(fields)?;
        debug!("[{}] Order {} changed its {}", Self::KIND.to_uppercase(), self.order_id(), field);
        *self = candidate;
        Ok(())
    }

    /// Aplica un cambio tipado sobre una copia y solo lo confirma si la copia es valida.
    fn update<F>(&mut self, change: F) -> Result<(), OrderError>
    where
        F: FnOnce(&mut Self) -> Result<(), OrderError>,
    {
        let mut candidate = self.clone();
        change(&mut candidate)?;
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}
