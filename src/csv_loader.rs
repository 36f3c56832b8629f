use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::ReaderBuilder;

use crate::types::{HandFrame, Landmark, NUM_LANDMARKS};

/// Carga una secuencia de frames de landmarks desde un CSV con formato
/// frame,landmark,x,y,z ordenado por frame. Un índice de frame sin filas
/// dentro del rango cuenta como "sin mano"; un frame con menos de 21
/// landmarks se trata igual (frame malformado: falla cerrado, no es error).
pub fn load_frames_from_csv(path: impl AsRef<Path>) -> Result<Vec<Option<HandFrame>>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("No se pudo abrir el CSV {:?}", path))?;

    let mut frames: BTreeMap<usize, [Option<Landmark>; NUM_LANDMARKS]> = BTreeMap::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("Fila {} inválida en {:?}", row_idx + 1, path))?;
        if record.len() < 5 {
            bail!("La fila {} no tiene 5 columnas", row_idx + 1);
        }

        let frame_idx: usize = record[0]
            .parse()
            .with_context(|| format!("frame inválido en fila {}", row_idx + 1))?;
        let landmark_idx: usize = record[1]
            .parse()
            .with_context(|| format!("landmark inválido en fila {}", row_idx + 1))?;

        if landmark_idx >= NUM_LANDMARKS {
            bail!("Landmark {} fuera de rango (fila {})", landmark_idx, row_idx + 1);
        }

        let x: f32 = record[2].parse()?;
        let y: f32 = record[3].parse()?;
        let z: f32 = record[4].parse()?;

        let entry = frames
            .entry(frame_idx)
            .or_insert([None; NUM_LANDMARKS]);
        entry[landmark_idx] = Some(Landmark::new(x, y, z));
    }

    if frames.is_empty() {
        return Err(anyhow!("El CSV {:?} no contiene datos", path));
    }

    let max_frame = *frames.keys().max().unwrap_or(&0);

    let mut out = Vec::with_capacity(max_frame + 1);
    for frame_idx in 0..=max_frame {
        let complete = frames.get(&frame_idx).and_then(|partial| {
            let mut hand = [Landmark::default(); NUM_LANDMARKS];
            for (slot, lm) in hand.iter_mut().zip(partial.iter()) {
                *slot = (*lm)?;
            }
            Some(hand)
        });
        out.push(complete);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "quiromando_csv_test_{}_{}.csv",
            std::process::id(),
            content.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    fn full_frame_rows(frame_idx: usize) -> String {
        let mut rows = String::new();
        for lm in 0..NUM_LANDMARKS {
            rows.push_str(&format!("{},{},0.5,0.5,0.0\n", frame_idx, lm));
        }
        rows
    }

    #[test]
    fn test_load_complete_frames() {
        let mut content = String::from("frame,landmark,x,y,z\n");
        content.push_str(&full_frame_rows(0));
        content.push_str(&full_frame_rows(1));
        let path = write_csv(&content);

        let frames = load_frames_from_csv(&path).unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_some());
        assert!(frames[1].is_some());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_gap_frame_is_no_hand() {
        let mut content = String::from("frame,landmark,x,y,z\n");
        content.push_str(&full_frame_rows(0));
        // frame 1 ausente por completo
        content.push_str(&full_frame_rows(2));
        let path = write_csv(&content);

        let frames = load_frames_from_csv(&path).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].is_none());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_partial_frame_fails_closed() {
        let mut content = String::from("frame,landmark,x,y,z\n");
        // frame con un solo landmark: malformado, cuenta como sin mano
        content.push_str("0,0,0.5,0.5,0.0\n");
        let path = write_csv(&content);

        let frames = load_frames_from_csv(&path).unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_none());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_out_of_range_landmark_is_error() {
        let content = "frame,landmark,x,y,z\n0,21,0.5,0.5,0.0\n";
        let path = write_csv(content);
        assert!(load_frames_from_csv(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_csv_is_error() {
        let path = write_csv("frame,landmark,x,y,z\n");
        assert!(load_frames_from_csv(&path).is_err());
        std::fs::remove_file(path).ok();
    }
}
