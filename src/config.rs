use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Parámetros de ajuste del motor de gestos.
/// Todos los umbrales son configurables por instancia; los defaults
/// corresponden a la calibración del diseño original.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ángulo interior mínimo en el PIP para considerar un dedo extendido (grados).
    /// Umbral exclusivo: extendido si angulo > finger_angle_deg.
    pub finger_angle_deg: f32,
    /// Distancia pulgar-tip a índice-MCP, como fracción de la escala de mano.
    pub thumb_extend_ratio: f32,
    /// Distancia pulgar-tip a índice-tip bajo la cual hay pinch (fracción de escala).
    pub pinch_ratio: f32,
    /// Tiempo mínimo sosteniendo un gesto antes de confirmarlo (segundos).
    pub min_hold_secs: f32,
    /// Anti-rebote: tiempo tras una confirmación antes de re-armar (segundos).
    pub cooldown_secs: f32,
    /// Desplazamiento mínimo del centroide para clasificar dirección
    /// (fracción de la dimensión del frame). Umbral exclusivo.
    pub move_threshold: f32,
    /// Capacidad del buffer circular de centroides (frames, ~1 s a 30 fps).
    pub history_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            finger_angle_deg: 140.0,
            thumb_extend_ratio: 0.15,
            pinch_ratio: 0.05,
            min_hold_secs: 0.5,
            cooldown_secs: 0.6,
            move_threshold: 0.08,
            history_len: 30,
        }
    }
}

/// Formato del archivo de configuración JSON:
/// { "engine": { umbrales opcionales }, "actions": { "two_up": "servo:18:0.5", ... } }
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    engine: EngineConfig,
    #[serde(default)]
    actions: HashMap<String, String>,
}

/// Carga umbrales y tabla de acciones desde un archivo JSON.
pub fn load_config(path: impl AsRef<Path>) -> Result<(EngineConfig, HashMap<String, String>)> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("No se pudo leer la configuración {:?}", path))?;
    let parsed: ConfigFile = serde_json::from_str(&content)
        .with_context(|| format!("JSON inválido en {:?}", path))?;
    Ok((parsed.engine, parsed.actions))
}
