// [apps/cli/src/queue.rs]
/*!
 * =================================================================
 * APARATO: BOUNDED WORK QUEUE (SHELL)
 * RESPONSABILIDAD: COLA PRODUCTOR/CONSUMIDOR PARA EL MODO `mul`
 *
 * Puerto directo de `queue_t` de la fuente (mutex + dos variables de
 * condición: una para "no llena", otra para "no vacía"). El productor de
 * `mul` llena lotes de hasta `GROUP` líneas de stdin y los empuja aquí;
 * los hilos de trabajo los retiran hasta que el productor marca la cola
 * como agotada y se vacía por completo.
 * =================================================================
 */

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

struct QueueState<T> {
    items: VecDeque<T>,
    done: bool,
}

/// Cola acotada de un solo productor, múltiples consumidores.
pub struct BoundedQueue<T> {
    capacity: usize,
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedQueue<T> {
    /// Construye una cola con capacidad `capacity` (mínimo 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(QueueState { items: VecDeque::new(), done: false }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Empuja un elemento, bloqueando al productor mientras la cola esté llena.
    pub fn put(&self, item: T) {
        let mut state = self.state.lock().expect("cola de trabajo envenenada");
        while state.items.len() >= self.capacity && !state.done {
            state = self.not_full.wait(state).expect("cola de trabajo envenenada");
        }
        state.items.push_back(item);
        self.not_empty.notify_one();
    }

    /// Retira un elemento, bloqueando al consumidor mientras la cola esté
    /// vacía y no se haya marcado como agotada. Retorna `None` una vez que
    /// la cola está vacía y agotada: señal de fin de trabajo para el hilo.
    pub fn get(&self) -> Option<T> {
        let mut state = self.state.lock().expect("cola de trabajo envenenada");
        loop {
            if let Some(item) = state.items.pop_front() {
                self.not_full.notify_one();
                return Some(item);
            }
            if state.done {
                return None;
            }
            state = self.not_empty.wait(state).expect("cola de trabajo envenenada");
        }
    }

    /// Marca la cola como agotada: despierta a todos los consumidores
    /// bloqueados para que drenen lo restante y luego retornen `None`.
    pub fn mark_done(&self) {
        let mut state = self.state.lock().expect("cola de trabajo envenenada");
        state.done = true;
        drop(state);
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }
}
