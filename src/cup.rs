//! Representacion de la taza de cafe
use std::io::Write;

use log::{debug, error};

use crate::constants::{DRINK_MESSAGE, REFILL_MESSAGE};

/// Estados posibles de la taza. No hay estados intermedios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CupState {
    Empty,
    Full,
}

/// Taza de cafe. Arranca vacia y solo cambia de estado con `refill` y `drink`.
/// Los mensajes se escriben en `output` (la salida estandar en el binario).
pub struct CoffeeCup<W: Write> {
    state: CupState,
    output: W,
}

impl<W: Write> CoffeeCup<W> {
    pub fn new(output: W) -> CoffeeCup<W> {
        CoffeeCup {
            state: CupState::Empty,
            output,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == CupState::Empty
    }

    pub fn state(&self) -> CupState {
        self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Llena la taza. Se puede llamar en cualquier estado, el mensaje se imprime siempre.
    pub fn refill(&mut self) {
        self.announce(REFILL_MESSAGE);
        self.state = CupState::Full;
        debug!("[CUP] State is now {:?}", self.state);
    }

    /// Vacia la taza, se asume que se tomo todo.
    pub fn drink(&mut self) {
        self.announce(DRINK_MESSAGE);
        self.state = CupState::Empty;
        debug!("[CUP] State is now {:?}", self.state);
    }

    fn announce(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{}", message) {
            error!("[CUP] Error while writing {:?}: {}", message, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(cup: &CoffeeCup<Vec<u8>>) -> String {
        String::from_utf8_lossy(cup.output()).to_string()
    }

    #[test]
    fn should_create_an_empty_cup() {
        let cup = CoffeeCup::new(Vec::new());
        assert_eq!(true, cup.is_empty());
        assert_eq!(CupState::Empty, cup.state());
        assert_eq!("", written(&cup));
    }

    #[test]
    fn should_be_full_after_refill() {
        let mut cup = CoffeeCup::new(Vec::new());
        cup.refill();
        assert_eq!(false, cup.is_empty());
        assert_eq!(CupState::Full, cup.state());
        assert_eq!("Refilling coffee...\n", written(&cup));
    }

    #[test]
    fn should_be_empty_after_drink() {
        let mut cup = CoffeeCup::new(Vec::new());
        cup.refill();
        cup.drink();
        assert_eq!(true, cup.is_empty());
        assert_eq!("Refilling coffee...\nDrinking coffee...\n", written(&cup));
    }

    #[test]
    fn should_stay_empty_when_drinking_from_an_empty_cup() {
        let mut cup = CoffeeCup::new(Vec::new());
        cup.drink();
        assert_eq!(true, cup.is_empty());
        assert_eq!("Drinking coffee...\n", written(&cup));
    }

    #[test]
    fn should_stay_full_and_print_twice_when_refilled_twice() {
        let mut cup = CoffeeCup::new(Vec::new());
        cup.refill();
        cup.refill();
        assert_eq!(false, cup.is_empty());
        assert_eq!("Refilling coffee...\nRefilling coffee...\n", written(&cup));
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_change_state_even_if_the_message_cannot_be_written() {
        let mut cup = CoffeeCup::new(BrokenOutput);
        cup.refill();
        assert_eq!(false, cup.is_empty());
        cup.drink();
        assert_eq!(true, cup.is_empty());
    }
}
