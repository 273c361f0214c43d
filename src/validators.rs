//! Reglas de validacion de los pedidos.
//!
//! Las reglas de campo se aplican al asignar un valor; las reglas de pedido completo
//! se aplican despues, sobre todos los campos ya validos.
use crate::{
    constants::MAX_TOPPINGS,
    errors::OrderError,
    menu::{ Size, Topping, Variety },
    method::BrewingMethod,
    quantity::{ Quantity, MILLILITRE },
};

/// Solo se aceptan cero azucares o una cantidad impar.
pub fn check_sugars(field_name: &str, value: i128) -> Result<u64, OrderError> {
    if value < 0 {
        return Err(OrderError::invalid(format!(
            "{} must be greater than or equal to 0.",
            field_name
        )));
    }
    if value != 0 && value % 2 == 0 {
        return Err(OrderError::invalid(format!("{} must be odd or zero.", field_name)));
    }
    u64::try_from(value).map_err(|_| OrderError::invalid(format!("{} is too large.", field_name)))
}

/// Como mucho tres toppings, sin repetir. El orden en que se piden no importa:
/// solo se rechaza la lista si al quitar las repeticiones (conservando la primera
/// aparicion) queda distinta.
pub fn check_toppings(toppings: Vec<Topping>) -> Result<Vec<Topping>, OrderError> {
    if toppings.len() > MAX_TOPPINGS {
        return Err(OrderError::invalid(format!(
            "toppings should have at most {} items, not {}.",
            MAX_TOPPINGS,
            toppings.len()
        )));
    }
    let mut unique: Vec<Topping> = Vec::with_capacity(toppings.len());
    for topping in &toppings {
        if !unique.contains(topping) {
            unique.push(*topping);
        }
    }
    if unique != toppings {
        return Err(OrderError::invalid("The list of toppings must be unique."));
    }
    Ok(toppings)
}

/// Lleva el volumen a mililitros. Falla si la cantidad no es un volumen.
pub fn convert_volume(volume: Quantity) -> Result<Quantity, OrderError> {
    volume.to(MILLILITRE).map_err(|_| {
        OrderError::invalid(format!(
            "A quantity in the unit: {} cannot be converted to a volume",
            volume.unit
        ))
    })
}

pub fn check_milk_and_cream(milk: bool, cream: bool) -> Result<(), OrderError> {
    if milk && cream {
        return Err(OrderError::invalid("Milk AND cream!?!?! Steady on now . . ."));
    }
    Ok(())
}

/// Chemex solo para la taza mas grande.
pub fn check_chemex(method: &BrewingMethod, size: Size) -> Result<(), OrderError> {
    match method {
        BrewingMethod::Chemex(_) if size != Size::Large => Err(OrderError::invalid(format!(
            "\"Chemex\" is only available for {} size coffees.",
            Size::Large
        ))),
        BrewingMethod::Traditional(_)
        | BrewingMethod::Aeropress(_)
        | BrewingMethod::PourOver(_)
        | BrewingMethod::Chemex(_) => Ok(()),
    }
}

/// El agua (ya en ml) tiene que entrar en la taza.
pub fn check_fit_in_cup(water: &Quantity, size: Size) -> Result<(), OrderError> {
    if water.magnitude > size.water_capacity_ml() {
        return Err(OrderError::invalid(format!(
            "{} is too much water for a {} coffee - it needs to fit in the cup! \
             York floods often enough thank you very much.",
            water, size
        )));
    }
    Ok(())
}

pub fn check_tea_sugar(variety: Variety, sugars: u64) -> Result<(), OrderError> {
    if variety != Variety::Proper && sugars != 0 {
        return Err(OrderError::invalid("Surely you don't have sugar in middle class tea . . ."));
    }
    Ok(())
}
