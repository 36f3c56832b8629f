use std::collections::VecDeque;

use crate::types::Direction;

/// Historial acotado de centroides de la mano (fracciones del frame).
/// Buffer circular de capacidad fija; un push por frame con mano presente.
pub struct MotionTracker {
    history: VecDeque<(f32, f32)>,
    capacity: usize,
}

impl MotionTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Registra el centroide del frame actual.
    pub fn push(&mut self, centroid: (f32, f32)) {
        self.history.push_back(centroid);
        if self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    /// Centroide más antiguo todavía en el buffer. Se usa como referencia
    /// cuando el inicio del hold ya salió de la ventana.
    pub fn oldest(&self) -> Option<(f32, f32)> {
        self.history.front().copied()
    }

    pub fn latest(&self) -> Option<(f32, f32)> {
        self.history.back().copied()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Se llama cuando la fuente reporta "sin mano".
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Dirección del desplazamiento desde `origin` hasta el centroide actual.
    /// Se reevalúa cada frame, sin debounce.
    pub fn direction_from(&self, origin: (f32, f32), threshold: f32) -> Direction {
        match self.latest() {
            Some(current) => classify_displacement(
                current.0 - origin.0,
                current.1 - origin.1,
                threshold,
            ),
            None => Direction::None,
        }
    }
}

/// Clasifica un desplazamiento en dirección cardinal.
///
/// El eje con mayor magnitud decide; empate exacto resuelve a None.
/// Umbral exclusivo: la magnitud ganadora debe superar `threshold`
/// (exactamente en el umbral no califica). Convención de ejes de imagen:
/// y crece hacia abajo, así que dy negativo es Up.
pub fn classify_displacement(dx: f32, dy: f32, threshold: f32) -> Direction {
    let ax = dx.abs();
    let ay = dy.abs();

    if ax == ay {
        return Direction::None;
    }

    if ax > ay {
        if ax > threshold {
            if dx < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else {
            Direction::None
        }
    } else if ay > threshold {
        if dy < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else {
        Direction::None
    }
}
