use std::collections::HashMap;
use std::fmt;

use crate::types::{Direction, Gesture};

/// Comando estructurado para el actuador. Se parsea una sola vez al cargar
/// la tabla de acciones, no en cada dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Gpio { pin: u8, on: bool },
    Servo { pin: u8, value: f32 },
    /// Passthrough opaco: el sink decide qué hacer con él.
    Raw(String),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Gpio { pin, on } => {
                write!(f, "gpio {} {}", pin, if *on { "on" } else { "off" })
            }
            Command::Servo { pin, value } => write!(f, "servo {} {}", pin, value),
            Command::Raw(text) => write!(f, "{}", text),
        }
    }
}

/// Parsea una cadena de acción de la configuración.
///
/// Gramática: `gpio:<pin>:on|off`, `servo:<pin>:<float>` (valor recortado a
/// [-1.0, 1.0] para no mandar duty cycles inválidos al hardware). Cualquier
/// otra cosa, incluidas entradas gpio/servo malformadas, degrada a Raw: la
/// validación final es responsabilidad del sink.
pub fn parse_action(action: &str) -> Command {
    let parts: Vec<&str> = action.split(':').collect();

    match parts.as_slice() {
        ["gpio", pin, state] => {
            let pin = match pin.parse::<u8>() {
                Ok(p) => p,
                Err(_) => return Command::Raw(action.to_string()),
            };
            match *state {
                "on" => Command::Gpio { pin, on: true },
                "off" => Command::Gpio { pin, on: false },
                _ => Command::Raw(action.to_string()),
            }
        }
        ["servo", pin, value] => {
            match (pin.parse::<u8>(), value.parse::<f32>()) {
                (Ok(pin), Ok(value)) => Command::Servo {
                    pin,
                    value: value.clamp(-1.0, 1.0),
                },
                _ => Command::Raw(action.to_string()),
            }
        }
        _ => Command::Raw(action.to_string()),
    }
}

/// Tabla de acciones: clave "gesto" o "gesto_direccion" → comando.
/// Inmutable después de la carga; la tabla es el único punto de extensión
/// para asociar nuevos comportamientos.
pub struct CommandResolver {
    table: HashMap<String, Command>,
}

impl CommandResolver {
    /// Construye la tabla parseando cada acción una vez. Claves desconocidas
    /// se aceptan y quedan inertes si nunca se consultan.
    pub fn new(actions: &HashMap<String, String>) -> Self {
        let table = actions
            .iter()
            .map(|(key, action)| (key.clone(), parse_action(action)))
            .collect();
        Self { table }
    }

    /// Busca primero "{gesto}_{direccion}" cuando hay dirección, y cae a
    /// "{gesto}" si no existe entrada direccional. Clave ausente no es error:
    /// simplemente no hay comando.
    pub fn resolve(&self, gesture: Gesture, direction: Direction) -> Option<&Command> {
        if gesture == Gesture::Unknown {
            return None;
        }

        if let Some(suffix) = direction.key_suffix() {
            let key = format!("{}_{}", gesture.key_name(), suffix);
            if let Some(cmd) = self.table.get(&key) {
                return Some(cmd);
            }
        }

        self.table.get(gesture.key_name())
    }

    /// Solo la clave direccional exacta, sin fallback. Es la búsqueda del
    /// camino continuo por frame: si no hay entrada "{gesto}_{direccion}",
    /// no se repite el comando estático en cada frame.
    pub fn resolve_exact(&self, gesture: Gesture, direction: Direction) -> Option<&Command> {
        let suffix = direction.key_suffix()?;
        self.table
            .get(&format!("{}_{}", gesture.key_name(), suffix))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
