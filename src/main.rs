/*
Quiromando - gestos de mano a comandos de actuador en tiempo real.

Lee landmarks por stdin (una línea JSON por frame, producida por un sidecar
de visión tipo MediaPipe), clasifica el gesto, estabiliza el hold, detecta
movimiento direccional y despacha comandos al actuador configurado.

Formato de entrada, una línea por frame:
    [[x,y,z], ... 21 puntos]    mano detectada
    null                        sin mano

Uso:
    quiromando [--config acciones.json] [--serial /dev/ttyUSB0]

Sin --serial los comandos van a un sink simulado que solo imprime.
*/

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use crossbeam_channel::unbounded;

use quiromando::command::Command;
use quiromando::config::{load_config, EngineConfig};
use quiromando::dispatch::{ActuatorSink, MockSink, SerialSink};
use quiromando::engine::GestureEngine;
use quiromando::types::{HandFrame, Landmark, NUM_LANDMARKS};

struct Options {
    config_path: Option<PathBuf>,
    serial_path: Option<PathBuf>,
}

fn parse_args() -> Result<Options> {
    let mut config_path = None;
    let mut serial_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requiere una ruta"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--serial" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--serial requiere una ruta"))?;
                serial_path = Some(PathBuf::from(value));
            }
            _ => bail!("Uso: quiromando [--config <archivo.json>] [--serial <puerto>]"),
        }
    }

    Ok(Options {
        config_path,
        serial_path,
    })
}

/// Decodifica una línea JSON en la observación del frame.
/// Frames malformados (longitud distinta de 21, JSON inválido) cuentan
/// como "sin mano": el pipeline falla cerrado, nunca se detiene.
fn parse_frame_line(line: &str) -> Option<HandFrame> {
    let parsed: Option<Vec<[f32; 3]>> = serde_json::from_str(line.trim()).ok()?;
    let points = parsed?;
    if points.len() != NUM_LANDMARKS {
        return None;
    }

    let mut frame = [Landmark::default(); NUM_LANDMARKS];
    for (slot, [x, y, z]) in frame.iter_mut().zip(points) {
        *slot = Landmark::new(x, y, z);
    }
    Some(frame)
}

fn main() -> Result<()> {
    println!("🖐️  Quiromando - gestos a comandos de actuador\n");

    let opts = parse_args()?;

    let (cfg, actions): (EngineConfig, HashMap<String, String>) = match &opts.config_path {
        Some(path) => {
            let loaded = load_config(path)?;
            println!("⚙️  Configuración cargada: {:?} ({} acciones)", path, loaded.1.len());
            loaded
        }
        None => {
            println!("⚙️  Sin --config: umbrales por defecto y tabla de acciones vacía");
            (EngineConfig::default(), HashMap::new())
        }
    };

    // Hilo de dispatch: el sink vive aparte del bucle de frames, igual que
    // el hardware real; un fallo del actuador nunca frena la clasificación.
    let (tx_cmd, rx_cmd) = unbounded::<Command>();

    let mut sink: Box<dyn ActuatorSink + Send> = match &opts.serial_path {
        Some(path) => {
            let port = OpenOptions::new()
                .write(true)
                .open(path)
                .with_context(|| format!("No se pudo abrir el puerto {:?}", path))?;
            println!("🔌 Sink serie: {:?}", path);
            Box::new(SerialSink::new(port))
        }
        None => {
            println!("🤖 Sink simulado (MockSink)");
            Box::new(MockSink::new())
        }
    };

    let dispatcher = std::thread::spawn(move || {
        while let Ok(cmd) = rx_cmd.recv() {
            if let Err(e) = sink.dispatch(&cmd) {
                eprintln!("❌ Error despachando {}: {}", cmd, e);
            }
        }
    });

    let mut engine = GestureEngine::new(cfg, &actions);

    println!("🎬 Esperando frames por stdin...\n");

    let stdin = io::stdin();
    let mut frames = 0u64;
    let mut confirmations = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("Error leyendo stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = parse_frame_line(&line);
        let out = engine.process(frame.as_ref(), Instant::now());
        frames += 1;

        if let Some(gesture) = out.confirmed {
            confirmations += 1;
            println!(
                "✋ Gesto confirmado: {} (dirección: {:?})",
                gesture.key_name(),
                out.direction
            );
        }

        for trigger in out.triggers {
            if trigger.continuous {
                println!(
                    "➡️  {} {:?} → {}",
                    trigger.gesture.key_name(),
                    trigger.direction,
                    trigger.command
                );
            }
            let _ = tx_cmd.send(trigger.command);
        }
    }

    drop(tx_cmd);
    let _ = dispatcher.join();

    println!(
        "\n👋 Fin del stream: {} frames, {} confirmaciones",
        frames, confirmations
    );
    Ok(())
}
