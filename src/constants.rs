//! Parametros de configuracion de la taza de cafe

/// Tiempo de espera entre cada iteracion del loop
pub const PAUSE_IN_MS: u64 = 2000;

/// Mensaje que se imprime al rellenar la taza
pub const REFILL_MESSAGE: &str = "Refilling coffee...";

/// Mensaje que se imprime al tomar el cafe
pub const DRINK_MESSAGE: &str = "Drinking coffee...";
