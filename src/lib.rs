/*!
Quiromando: gestos de mano a comandos de actuador.

Convierte un stream de landmarks de mano (21 puntos normalizados por frame,
estilo MediaPipe Hands) en comandos estructurados para un actuador físico
(relé GPIO, servo o passthrough de texto). El núcleo es determinista y
síncrono: una llamada a [`engine::GestureEngine::process`] por frame, el
reloj lo aporta el caller, y la adquisición de frames y el dispatch al
hardware quedan fuera del motor.
*/

pub mod command;
pub mod config;
pub mod csv_loader;
pub mod dispatch;
pub mod engine;
pub mod fingers;
pub mod gesture;
pub mod motion;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;
