use serde::Deserialize;

/// Punto normalizado de la mano: coordenadas de imagen [0,1],
/// origen arriba-izquierda, x a la derecha, y hacia abajo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distancia euclidiana en el plano de imagen (x, y).
    pub fn dist(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Observación completa de una mano: 21 landmarks ordenados
/// según el modelo de MediaPipe Hands.
pub type HandFrame = [Landmark; NUM_LANDMARKS];

/// Constantes del modelo de mano (índices MediaPipe)
pub const NUM_LANDMARKS: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Gesto estático clasificado a partir de un frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Fist,
    One,
    Two,
    Three,
    Four,
    Five,
    Pinch,
    Unknown,
}

impl Gesture {
    /// Nombre usado como clave en la tabla de acciones.
    pub fn key_name(&self) -> &'static str {
        match self {
            Gesture::Fist => "fist",
            Gesture::One => "one",
            Gesture::Two => "two",
            Gesture::Three => "three",
            Gesture::Four => "four",
            Gesture::Five => "five",
            Gesture::Pinch => "pinch",
            Gesture::Unknown => "unknown",
        }
    }
}

/// Dirección de movimiento sostenido mientras se mantiene un gesto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Sufijo usado en claves compuestas ("two_up"); None no genera sufijo.
    pub fn key_suffix(&self) -> Option<&'static str> {
        match self {
            Direction::None => None,
            Direction::Left => Some("left"),
            Direction::Right => Some("right"),
            Direction::Up => Some("up"),
            Direction::Down => Some("down"),
        }
    }
}
