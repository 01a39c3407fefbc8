pub mod coffee_loop;
pub mod constants;
pub mod cup;
pub mod errors;
pub mod pause;
