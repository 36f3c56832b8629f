use std::collections::HashMap;
use std::time::Instant;

use crate::command::{Command, CommandResolver};
use crate::config::EngineConfig;
use crate::fingers;
use crate::gesture;
use crate::motion::MotionTracker;
use crate::types::{Direction, Gesture, HandFrame};

/// Estados del estabilizador temporal de gestos.
///
/// Dos relojes independientes: el hold mínimo responde "¿este gesto es real
/// o ruido?" y el cooldown responde "no repitas el mismo comando estático".
/// El camino direccional corre aparte, cada frame, sin debounce.
#[derive(Debug, Clone, Copy, PartialEq)]
enum HoldState {
    /// Esperando un gesto no-Unknown.
    Idle,
    /// Gesto candidato sostenido, todavía sin confirmar.
    Holding { candidate: Gesture, held_since: Instant },
    /// Confirmación emitida; anti-rebote de re-disparos estáticos.
    Cooldown { gesture: Gesture, since: Instant },
}

/// Un comando listo para el actuador, con su contexto de origen.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub gesture: Gesture,
    pub direction: Direction,
    pub command: Command,
    /// true para los disparos direccionales por frame; false para la
    /// confirmación estática única por hold.
    pub continuous: bool,
}

/// Resultado de procesar un frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Gesto crudo del frame (antes de estabilizar).
    pub gesture: Gesture,
    /// Dirección vigente; None salvo que haya un gesto sostenido en movimiento.
    pub direction: Direction,
    /// Gesto confirmado en este frame, si el hold llegó al mínimo.
    pub confirmed: Option<Gesture>,
    pub triggers: Vec<Trigger>,
}

impl FrameOutput {
    fn quiet(gesture: Gesture) -> Self {
        Self {
            gesture,
            direction: Direction::None,
            confirmed: None,
            triggers: Vec::new(),
        }
    }
}

/// Motor de gestos por stream: una instancia por mano rastreada.
/// Una llamada a `process` por frame; el tiempo lo aporta el caller,
/// así que el motor es determinista bajo test y tolera frame rate variable.
pub struct GestureEngine {
    cfg: EngineConfig,
    resolver: CommandResolver,
    state: HoldState,
    tracker: MotionTracker,
    /// Centroide al inicio del hold vigente.
    hold_origin: Option<(f32, f32)>,
}

impl GestureEngine {
    pub fn new(cfg: EngineConfig, actions: &HashMap<String, String>) -> Self {
        let resolver = CommandResolver::new(actions);
        Self::with_resolver(cfg, resolver)
    }

    pub fn with_resolver(cfg: EngineConfig, resolver: CommandResolver) -> Self {
        let tracker = MotionTracker::new(cfg.history_len);
        Self {
            cfg,
            resolver,
            state: HoldState::Idle,
            tracker,
            hold_origin: None,
        }
    }

    /// Procesa la observación de un frame. `None` significa "sin mano":
    /// no es un error, pero resetea la sesión completa.
    pub fn process(&mut self, frame: Option<&HandFrame>, now: Instant) -> FrameOutput {
        let Some(frame) = frame else {
            self.state = HoldState::Idle;
            self.tracker.clear();
            self.hold_origin = None;
            return FrameOutput::quiet(Gesture::Unknown);
        };

        let verdicts = fingers::classify(frame, &self.cfg);
        let raw = gesture::resolve(&verdicts);
        self.tracker.push(fingers::centroid(frame));

        if raw == Gesture::Unknown {
            // Hay mano pero sin gesto asignado: solo se resetea el hold,
            // el historial de centroides sigue acumulando.
            self.state = HoldState::Idle;
            self.hold_origin = None;
            return FrameOutput::quiet(raw);
        }

        let mut out = FrameOutput::quiet(raw);

        match self.state {
            HoldState::Idle => {
                self.begin_hold(raw, now);
            }

            HoldState::Holding { candidate, held_since } => {
                if raw != candidate {
                    // Gesto distinto: el candidato cambia sin crédito parcial.
                    self.begin_hold(raw, now);
                } else if (now - held_since).as_secs_f32() >= self.cfg.min_hold_secs {
                    // Exactamente una confirmación por hold que califica.
                    let direction = self.current_direction();
                    out.direction = direction;
                    out.confirmed = Some(raw);
                    if let Some(cmd) = self.resolver.resolve(raw, direction) {
                        out.triggers.push(Trigger {
                            gesture: raw,
                            direction,
                            command: cmd.clone(),
                            continuous: false,
                        });
                    }
                    self.state = HoldState::Cooldown { gesture: raw, since: now };
                }
            }

            HoldState::Cooldown { gesture: held, since } => {
                if (now - since).as_secs_f32() > self.cfg.cooldown_secs {
                    // Cooldown vencido: se re-arma aunque siga el mismo gesto;
                    // el hold vuelve a contarse desde cero.
                    self.begin_hold(raw, now);
                } else if raw == held {
                    // Mientras el gesto confirmado sigue en pantalla, el
                    // camino direccional dispara cada frame sin debounce.
                    let direction = self.current_direction();
                    out.direction = direction;
                    if direction != Direction::None {
                        if let Some(cmd) = self.resolver.resolve_exact(held, direction) {
                            out.triggers.push(Trigger {
                                gesture: held,
                                direction,
                                command: cmd.clone(),
                                continuous: true,
                            });
                        }
                    }
                }
                // Gesto distinto durante cooldown: suprimido hasta expirar.
            }
        }

        out
    }

    fn begin_hold(&mut self, candidate: Gesture, now: Instant) {
        self.state = HoldState::Holding {
            candidate,
            held_since: now,
        };
        self.hold_origin = self.tracker.latest();
    }

    /// Desplazamiento desde el inicio del hold; si ese punto ya salió de la
    /// ventana, se usa el centroide más antiguo del buffer.
    fn current_direction(&self) -> Direction {
        let origin = self.hold_origin.or_else(|| self.tracker.oldest());
        match origin {
            Some(origin) => self.tracker.direction_from(origin, self.cfg.move_threshold),
            None => Direction::None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }
}
