//! Loop que alterna entre rellenar y tomar el cafe.
use std::{io::Write, thread};

use log::{debug, error};

use crate::{
    cup::CoffeeCup,
    errors::CoffeeCupError,
    pause::{Interrupter, Pause},
};

/// Transicion realizada en una iteracion del loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Refill,
    Drink,
}

/// Maneja la taza: en cada iteracion la rellena si esta vacia o la toma si esta llena,
/// y despues espera la pausa.
pub struct CoffeeLoop<W: Write> {
    cup: CoffeeCup<W>,
    pause: Pause,
    iterations: u64,
    failed_pauses: u64,
}

impl<W: Write> CoffeeLoop<W> {
    pub fn new(cup: CoffeeCup<W>, pause: Pause) -> CoffeeLoop<W> {
        CoffeeLoop {
            cup,
            pause,
            iterations: 0,
            failed_pauses: 0,
        }
    }

    pub fn cup(&self) -> &CoffeeCup<W> {
        &self.cup
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Cantidad de pausas que terminaron con error (interrumpidas o con el lock envenenado)
    pub fn failed_pauses(&self) -> u64 {
        self.failed_pauses
    }

    pub fn interrupter(&self) -> Interrupter {
        self.pause.interrupter()
    }

    /// Corre para siempre, solo termina si matan al proceso.
    pub fn run(&mut self) {
        loop {
            self.iterate();
        }
    }

    pub fn run_for(&mut self, iterations: u64) {
        for _ in 0..iterations {
            self.iterate();
        }
    }

    /// Una iteracion completa. Si la pausa falla se loguea y se sigue.
    pub fn iterate(&mut self) {
        let transition = self.step();
        self.iterations += 1;
        debug!("[LOOP] Iteration {} did {:?}", self.iterations, transition);

        if let Err(err) = self.pause.wait() {
            self.failed_pauses += 1;
            error!("[LOOP] Pause after iteration {} failed: {}", self.iterations, err);
            if err == CoffeeCupError::LockError {
                thread::sleep(self.pause.duration());
            }
        }
    }

    pub fn step(&mut self) -> Transition {
        if self.cup.is_empty() {
            self.cup.refill();
            Transition::Refill
        } else {
            self.cup.drink();
            Transition::Drink
        }
    }
}
