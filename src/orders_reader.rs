//! Lectura del archivo de pedidos. Cada pedido pasa por la validacion de su bebida;
//! los que no son validos se descartan y se informa el motivo.
use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::Path;

use log::{ debug, info, warn };
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::OrderError,
    order::{ DrinkKind, Order, DRINK_FIELD },
    statistics::Statistics,
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OrdersConfiguration {
    orders: Vec<Value>,
}

pub fn read_orders<R: Read>(reader: R) -> Result<Vec<Value>, OrderError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)
        .map_err(|error| OrderError::FileReaderError(error.to_string()))?;
    Ok(orders_config.orders)
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, OrderError> {
    let file = File::open(path)?;
    read_orders(BufReader::new(file))
}

fn drink_kind_of(json_order: &Value) -> Option<DrinkKind> {
    json_order
        .get(DRINK_FIELD)
        .and_then(Value::as_str)
        .and_then(DrinkKind::from_name)
}

/// Valida cada pedido y devuelve los aceptados, en el mismo orden en que llegaron.
pub fn take_orders(json_orders: Vec<Value>, statistics: &mut Statistics) -> Vec<Order> {
    let mut orders = Vec::new();
    for (position, json_order) in json_orders.into_iter().enumerate() {
        let kind = drink_kind_of(&json_order);
        match Order::from_value(json_order) {
            Ok(order) => {
                info!("[READER] Accepted order {}: {}", order.order_id(), order);
                statistics.record_accepted(order.kind());
                orders.push(order);
            }
            Err(error) => {
                warn!("[READER] Rejected order #{}: {}", position, error);
                statistics.record_rejected(kind);
            }
        }
    }
    debug!("[READER] No more orders left");
    orders
}

pub fn read_and_take_orders<P: AsRef<Path>>(
    path: P,
    statistics: &mut Statistics,
) -> Result<Vec<Order>, OrderError> {
    let json_orders = read_orders_from_file(path)?;
    Ok(take_orders(json_orders, statistics))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = r#"{
        "orders": [
            {"drink": "coffee", "size": "El Gigante", "method": {"name": "chemex"}, "water": "350 ml"},
            {"drink": "coffee", "size": "Garrador", "method": {"name": "chemex"}},
            {"drink": "tea", "variety": "green", "sugars": 1},
            {"drink": "tea", "variety": "rooibos", "milk": true},
            {"drink": "hot chocolate", "toppings": ["fudge", "sparkler"]},
            {"drink": "lemonade"}
        ]
    }"#;

    #[test]
    fn should_read_every_order_in_the_file() {
        let json_orders = read_orders(ORDERS.as_bytes()).unwrap();
        assert_eq!(6, json_orders.len());
    }

    #[test]
    fn should_fail_on_a_malformed_file() {
        let result = read_orders("{\"orders\": [".as_bytes());
        assert!(matches!(result, Err(OrderError::FileReaderError(_))));
        assert!(read_orders("{\"pedidos\": []}".as_bytes()).is_err());
    }

    #[test]
    fn should_keep_only_the_valid_orders() {
        let mut statistics = Statistics::new();
        let json_orders = read_orders(ORDERS.as_bytes()).unwrap();
        let orders = take_orders(json_orders, &mut statistics);

        let kinds: Vec<DrinkKind> = orders.iter().map(Order::kind).collect();
        assert_eq!(vec![DrinkKind::Coffee, DrinkKind::Tea, DrinkKind::HotChocolate], kinds);
        assert_eq!(3, statistics.total_accepted());
        assert_eq!(1, statistics.rejected(DrinkKind::Coffee));
        assert_eq!(1, statistics.rejected(DrinkKind::Tea));
        assert_eq!(3, statistics.total_rejected());
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let mut statistics = Statistics::new();
        let result = read_and_take_orders("there-is-no-such-orders-file.json", &mut statistics);
        assert!(matches!(result, Err(OrderError::FileReaderError(_))));
    }
}
