//! Pedidos validados de la Sharp Coffee Residence: cafe, te y chocolate caliente.
//!
//! Cada bebida se valida completa al construirse y cada cambio posterior vuelve
//! a validarse antes de aplicarse.
pub mod coffee;
pub mod constants;
pub mod drink;
pub mod errors;
pub mod hot_chocolate;
pub mod hot_drink;
pub mod menu;
pub mod method;
pub mod order;
pub mod orders_reader;
pub mod quantity;
pub mod statistics;
pub mod tea;
pub mod validators;

pub use coffee::{ Coffee, CoffeeRequest };
pub use drink::Drink;
pub use errors::OrderError;
pub use hot_chocolate::{ HotChocolate, HotChocolateRequest };
pub use order::{ DrinkKind, Order };
pub use tea::{ Tea, TeaRequest };
