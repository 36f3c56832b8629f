use crate::fingers::FingerVerdicts;
use crate::types::Gesture;

/// Reduce los veredictos por dedo a un gesto estático.
///
/// Prioridad: pinch gana siempre sobre el conteo. Después se cuenta el
/// total de dedos extendidos (pulgar incluido), pero un conteo 1–4 solo
/// recibe etiqueta si la cadena liderada por el índice lo ancla; las
/// combinaciones sueltas (solo pulgar, solo anular, anular+meñique...)
/// quedan en Unknown y nunca generan comandos.
pub fn resolve(v: &FingerVerdicts) -> Gesture {
    if v.pinch {
        return Gesture::Pinch;
    }

    match v.extended_count() {
        0 => Gesture::Fist,
        1 if v.index => Gesture::One,
        2 if v.index => Gesture::Two,
        3 if v.index && v.middle => Gesture::Three,
        4 if v.index && v.middle && v.ring => Gesture::Four,
        5 => Gesture::Five,
        _ => Gesture::Unknown,
    }
}
