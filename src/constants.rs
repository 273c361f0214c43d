//! Parametros de configuracion de la cafeteria

/// Capacidad maxima de agua (en ml) de una taza chica (Plaga)
pub const SMALL_CUP_CAPACITY_ML: f64 = 200.0;

/// Capacidad maxima de agua (en ml) de una taza mediana (Garrador)
pub const MEDIUM_CUP_CAPACITY_ML: f64 = 300.0;

/// Capacidad maxima de agua (en ml) de una taza grande (El Gigante)
pub const LARGE_CUP_CAPACITY_ML: f64 = 400.0;

/// Cantidad maxima de toppings que puede llevar un chocolate caliente
pub const MAX_TOPPINGS: usize = 3;

/// Tiempo de preparacion por defecto (en segundos) del metodo pour over
pub const POUR_OVER_DEFAULT_BREW_TIME: u32 = 120;

/// Tiempo de preparacion por defecto (en segundos) del metodo chemex
pub const CHEMEX_DEFAULT_BREW_TIME: u32 = 240;

/// Archivo de pedidos que se lee si no se indica otro por linea de comandos
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";
