//! Manos sintéticas para tests. Geometría: muñeca abajo, dedos hacia
//! arriba (y decrece), escala de mano = 0.2 (muñeca a MCP del medio).

use crate::types::*;

/// Construye un frame aplicando `f` a cada índice de landmark.
pub fn hand_with(f: impl Fn(usize) -> Landmark) -> HandFrame {
    std::array::from_fn(f)
}

/// Mano abierta: los cuatro dedos rectos hacia arriba y el pulgar separado.
pub fn open_hand() -> HandFrame {
    let mut frame = [Landmark::default(); NUM_LANDMARKS];

    frame[WRIST] = Landmark::new(0.5, 0.9, 0.0);

    // Pulgar: apartado hacia la izquierda
    frame[1] = Landmark::new(0.44, 0.82, 0.0);
    frame[THUMB_MCP] = Landmark::new(0.40, 0.76, 0.0);
    frame[THUMB_IP] = Landmark::new(0.35, 0.70, 0.0);
    frame[THUMB_TIP] = Landmark::new(0.30, 0.65, 0.0);

    // Columnas por dedo: (mcp_x, índices mcp..tip)
    let columns = [
        (0.45, [INDEX_MCP, INDEX_PIP, 7, INDEX_TIP]),
        (0.50, [MIDDLE_MCP, MIDDLE_PIP, 11, MIDDLE_TIP]),
        (0.55, [RING_MCP, RING_PIP, 15, RING_TIP]),
        (0.60, [PINKY_MCP, PINKY_PIP, 19, PINKY_TIP]),
    ];
    for (x, idx) in columns {
        frame[idx[0]] = Landmark::new(x, 0.70, 0.0);
        frame[idx[1]] = Landmark::new(x, 0.60, 0.0);
        frame[idx[2]] = Landmark::new(x, 0.55, 0.0);
        frame[idx[3]] = Landmark::new(x, 0.50, 0.0);
    }

    frame
}

/// Pliega un dedo: la punta vuelve hacia el MCP, ángulo en el PIP cercano a 0°.
pub fn flexed_finger(frame: &mut HandFrame, mcp: usize, pip: usize, tip: usize) {
    let m = frame[mcp];
    frame[tip] = Landmark::new(m.x + 0.001, m.y + 0.001, 0.0);
    // el DIP acompaña al pliegue
    let p = frame[pip];
    frame[tip - 1] = Landmark::new((m.x + p.x) / 2.0, (m.y + p.y) / 2.0, 0.0);
}

/// Recoge el pulgar: punta junto a la base del índice (pero lejos de su punta,
/// para no disparar pinch).
pub fn flex_thumb(frame: &mut HandFrame) {
    let base = frame[INDEX_MCP];
    frame[THUMB_TIP] = Landmark::new(base.x - 0.02, base.y + 0.02, 0.0);
}

/// Puño: todos los dedos plegados y el pulgar recogido.
pub fn fist_hand() -> HandFrame {
    let mut frame = open_hand();
    flexed_finger(&mut frame, INDEX_MCP, INDEX_PIP, INDEX_TIP);
    flexed_finger(&mut frame, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP);
    flexed_finger(&mut frame, RING_MCP, RING_PIP, RING_TIP);
    flexed_finger(&mut frame, PINKY_MCP, PINKY_PIP, PINKY_TIP);
    flex_thumb(&mut frame);
    frame
}

/// Mano con exactamente los dedos indicados extendidos
/// (orden: pulgar, índice, medio, anular, meñique).
pub fn hand_showing(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> HandFrame {
    let mut frame = open_hand();
    if !thumb {
        flex_thumb(&mut frame);
    }
    if !index {
        flexed_finger(&mut frame, INDEX_MCP, INDEX_PIP, INDEX_TIP);
    }
    if !middle {
        flexed_finger(&mut frame, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP);
    }
    if !ring {
        flexed_finger(&mut frame, RING_MCP, RING_PIP, RING_TIP);
    }
    if !pinky {
        flexed_finger(&mut frame, PINKY_MCP, PINKY_PIP, PINKY_TIP);
    }
    frame
}

/// Desplaza la mano completa en el plano de imagen.
pub fn shifted(frame: &HandFrame, dx: f32, dy: f32) -> HandFrame {
    let mut out = *frame;
    for lm in out.iter_mut() {
        lm.x += dx;
        lm.y += dy;
    }
    out
}
