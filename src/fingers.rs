use crate::config::EngineConfig;
use crate::types::*;

/// Veredicto por dedo de un solo frame: extendido (true) o flexionado.
/// Sin estado; se recalcula completo en cada frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerVerdicts {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
    /// Pinch: pulgar e índice juntos. Se evalúa aparte del conteo de dedos.
    pub pinch: bool,
}

impl FingerVerdicts {
    /// Total de dedos extendidos, pulgar incluido.
    pub fn extended_count(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&e| e)
            .count() as u8
    }
}

/// Ángulo (grados) en el punto `b` entre los vectores b→a y b→c.
/// Articulaciones degeneradas (vector de longitud cero) cuentan como 180°,
/// es decir, dedo recto.
fn angle_at(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let v1 = (a.x - b.x, a.y - b.y, a.z - b.z);
    let v2 = (c.x - b.x, c.y - b.y, c.z - b.z);
    let dot = v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2;
    let n1 = (v1.0 * v1.0 + v1.1 * v1.1 + v1.2 * v1.2).sqrt();
    let n2 = (v2.0 * v2.0 + v2.1 * v2.1 + v2.2 * v2.2).sqrt();
    if n1 == 0.0 || n2 == 0.0 {
        return 180.0;
    }
    let cosang = (dot / (n1 * n2)).clamp(-1.0, 1.0);
    cosang.acos().to_degrees()
}

/// Escala de referencia de la mano: muñeca a base del dedo medio.
/// Normaliza los umbrales de distancia frente a la distancia a cámara.
fn hand_scale(frame: &HandFrame) -> f32 {
    frame[WRIST].dist(&frame[MIDDLE_MCP]).max(1e-6)
}

/// Clasifica un frame completo en veredictos por dedo más pinch.
/// Función pura de un frame; los umbrales vienen de la configuración.
pub fn classify(frame: &HandFrame, cfg: &EngineConfig) -> FingerVerdicts {
    let scale = hand_scale(frame);

    // Dedos no-pulgar: ángulo interior en el PIP (MCP-PIP-TIP).
    // Umbral exclusivo: extendido si angulo > finger_angle_deg.
    let finger = |mcp: usize, pip: usize, tip: usize| {
        angle_at(&frame[mcp], &frame[pip], &frame[tip]) > cfg.finger_angle_deg
    };

    // El pulgar tiene otra cinemática: se mide la separación de su punta
    // respecto a la base del índice, normalizada por la escala de mano.
    let thumb = frame[THUMB_TIP].dist(&frame[INDEX_MCP]) / scale > cfg.thumb_extend_ratio;

    let pinch = frame[THUMB_TIP].dist(&frame[INDEX_TIP]) / scale < cfg.pinch_ratio;

    FingerVerdicts {
        thumb,
        index: finger(INDEX_MCP, INDEX_PIP, INDEX_TIP),
        middle: finger(MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
        ring: finger(RING_MCP, RING_PIP, RING_TIP),
        pinky: finger(PINKY_MCP, PINKY_PIP, PINKY_TIP),
        pinch,
    }
}

/// Centroide del frame: media de los 21 landmarks.
pub fn centroid(frame: &HandFrame) -> (f32, f32) {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for lm in frame.iter() {
        cx += lm.x;
        cy += lm.y;
    }
    let n = frame.len() as f32;
    (cx / n, cy / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{flexed_finger, hand_with, open_hand};

    #[test]
    fn test_straight_finger_is_180_degrees() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.1, 0.0, 0.0);
        let c = Landmark::new(0.2, 0.0, 0.0);
        assert!((angle_at(&a, &b, &c) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle_finger() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.1, 0.0, 0.0);
        let c = Landmark::new(0.1, 0.1, 0.0);
        assert!((angle_at(&a, &b, &c) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_joint_counts_as_straight() {
        let p = Landmark::new(0.5, 0.5, 0.0);
        assert_eq!(angle_at(&p, &p, &p), 180.0);
    }

    #[test]
    fn test_open_hand_all_extended() {
        let cfg = EngineConfig::default();
        let v = classify(&open_hand(), &cfg);
        assert!(v.thumb && v.index && v.middle && v.ring && v.pinky);
        assert!(!v.pinch);
        assert_eq!(v.extended_count(), 5);
    }

    #[test]
    fn test_flexed_finger_below_threshold() {
        let cfg = EngineConfig::default();
        let mut frame = open_hand();
        flexed_finger(&mut frame, INDEX_MCP, INDEX_PIP, INDEX_TIP);
        let v = classify(&frame, &cfg);
        assert!(!v.index);
        assert!(v.middle);
    }

    #[test]
    fn test_angle_threshold_boundary_is_exclusive() {
        // Dedo índice doblado en un ángulo concreto; fijando el umbral
        // exactamente en ese ángulo el dedo NO cuenta como extendido,
        // y un umbral apenas menor sí lo cuenta.
        let mut frame = open_hand();
        frame[INDEX_TIP] = Landmark::new(frame[INDEX_PIP].x + 0.05, frame[INDEX_PIP].y - 0.05, 0.0);
        let angle = angle_at(&frame[INDEX_MCP], &frame[INDEX_PIP], &frame[INDEX_TIP]);

        let mut cfg = EngineConfig::default();
        cfg.finger_angle_deg = angle;
        assert!(!classify(&frame, &cfg).index);

        cfg.finger_angle_deg = angle - 0.01;
        assert!(classify(&frame, &cfg).index);
    }

    #[test]
    fn test_pinch_when_tips_touch() {
        let cfg = EngineConfig::default();
        let mut frame = open_hand();
        frame[THUMB_TIP] = frame[INDEX_TIP];
        assert!(classify(&frame, &cfg).pinch);
    }

    #[test]
    fn test_pinch_boundary_is_exclusive() {
        // Se fija el umbral exactamente en la distancia normalizada
        // observada: en el borde NO es pinch; apenas por encima, sí.
        let frame = open_hand();
        let scale = frame[WRIST].dist(&frame[MIDDLE_MCP]).max(1e-6);
        let ratio = frame[THUMB_TIP].dist(&frame[INDEX_TIP]) / scale;

        let mut cfg = EngineConfig::default();
        cfg.pinch_ratio = ratio;
        assert!(!classify(&frame, &cfg).pinch);

        cfg.pinch_ratio = ratio + 1e-4;
        assert!(classify(&frame, &cfg).pinch);
    }

    #[test]
    fn test_centroid_is_mean() {
        let frame = hand_with(|i| Landmark::new(i as f32 * 0.01, 0.5, 0.0));
        let (cx, cy) = centroid(&frame);
        assert!((cx - 0.10).abs() < 1e-5); // media de 0..=20 * 0.01
        assert!((cy - 0.5).abs() < 1e-6);
    }
}
