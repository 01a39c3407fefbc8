//! Espera de duracion fija que puede ser interrumpida desde otro hilo.
use std::{
    sync::{Arc, Condvar, Mutex},
    time::Duration,
};

use log::{debug, error};

use crate::errors::CoffeeCupError;

struct InterruptSignal {
    interrupted: Mutex<bool>,
    cond: Condvar,
}

/// Pausa entre iteraciones del loop.
/// La interrupcion queda pendiente si llega cuando no se esta esperando,
/// y la siguiente llamada a `wait` la reporta sin esperar.
pub struct Pause {
    duration: Duration,
    signal: Arc<InterruptSignal>,
}

/// Referencia para interrumpir una `Pause`, se puede mandar a otro hilo.
#[derive(Clone)]
pub struct Interrupter {
    signal: Arc<InterruptSignal>,
}

impl Pause {
    pub fn new(duration: Duration) -> Pause {
        Pause {
            duration,
            signal: Arc::new(InterruptSignal {
                interrupted: Mutex::new(false),
                cond: Condvar::new(),
            }),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn interrupter(&self) -> Interrupter {
        Interrupter {
            signal: self.signal.clone(),
        }
    }

    /// Bloquea durante `duration`. Devuelve `CoffeeCupError::Interrupted` si se interrumpio,
    /// limpiando la interrupcion.
    pub fn wait(&self) -> Result<(), CoffeeCupError> {
        let (mut interrupted, _) = self.signal.cond.wait_timeout_while(
            self.signal.interrupted.lock()?,
            self.duration,
            |interrupted| !*interrupted,
        )?;

        if *interrupted {
            *interrupted = false;
            return Err(CoffeeCupError::Interrupted);
        }
        Ok(())
    }
}

#[cfg(test)]
impl Pause {
    /// Envenena el lock de la pausa entrando en panico mientras se lo tiene tomado.
    pub(crate) fn poison(&self) {
        let signal = self.signal.clone();
        let _ = std::thread::spawn(move || {
            let _guard = signal.interrupted.lock();
            panic!("poisoning the pause lock");
        })
        .join();
    }
}

impl Interrupter {
    pub fn interrupt(&self) {
        if let Ok(mut interrupted) = self.signal.interrupted.lock() {
            *interrupted = true;
            self.signal.cond.notify_all();
            debug!("[PAUSE] Interrupt requested");
            return;
        }
        error!("[PAUSE] Error while taking the interrupt lock");
    }
}
