use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Result};
use quiromando::config::{load_config, EngineConfig};
use quiromando::csv_loader::load_frames_from_csv;
use quiromando::dispatch::{ActuatorSink, MockSink};
use quiromando::engine::GestureEngine;
use quiromando::fingers;

struct ReplayOptions {
    fps: f32,
    dump_verdicts: bool,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<(PathBuf, ReplayOptions)> {
    let mut fps = 30.0f32;
    let mut dump_verdicts = false;
    let mut config_path: Option<PathBuf> = None;
    let mut csv_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dump-verdicts" => dump_verdicts = true,
            "--fps" => {
                let value = args.next().ok_or_else(|| anyhow!("--fps requiere un valor"))?;
                fps = value.parse()?;
                if fps <= 0.0 {
                    bail!("--fps debe ser positivo");
                }
            }
            "--config" => {
                let value = args.next().ok_or_else(|| anyhow!("--config requiere una ruta"))?;
                config_path = Some(PathBuf::from(value));
            }
            _ => {
                if csv_path.is_some() {
                    bail!("Uso: replay_csv [--fps N] [--dump-verdicts] [--config conf.json] <archivo.csv>");
                }
                csv_path = Some(PathBuf::from(arg));
            }
        }
    }

    let csv_path = csv_path.ok_or_else(|| anyhow!("Debes especificar un archivo CSV"))?;
    Ok((
        csv_path,
        ReplayOptions {
            fps,
            dump_verdicts,
            config_path,
        },
    ))
}

fn main() -> Result<()> {
    let (csv_path, opts) = parse_args()?;
    println!("🎞️  Reproduciendo landmarks desde {:?} a {} fps", csv_path, opts.fps);

    let (cfg, actions) = match &opts.config_path {
        Some(path) => load_config(path)?,
        None => (EngineConfig::default(), Default::default()),
    };

    let frames = load_frames_from_csv(&csv_path)?;
    println!("ℹ️  {} frames cargados\n", frames.len());

    let mut engine = GestureEngine::new(cfg.clone(), &actions);
    let mut sink = MockSink::new();

    // Tiempo sintético: el motor recibe el reloj del caller, así que el
    // replay corre a velocidad de CPU con timestamps espaciados a 1/fps.
    let t0 = Instant::now();
    let dt = Duration::from_secs_f32(1.0 / opts.fps);

    let mut confirmations = 0u32;

    for (idx, frame) in frames.iter().enumerate() {
        let now = t0 + dt * idx as u32;

        if opts.dump_verdicts {
            match frame {
                Some(hand) => {
                    let v = fingers::classify(hand, &cfg);
                    let raw = quiromando::gesture::resolve(&v);
                    println!(
                        "  {:04}: P:{} I:{} M:{} A:{} Ñ:{} pinch:{} → {}",
                        idx,
                        v.thumb as u8,
                        v.index as u8,
                        v.middle as u8,
                        v.ring as u8,
                        v.pinky as u8,
                        v.pinch as u8,
                        raw.key_name()
                    );
                }
                None => println!("  {:04}: sin mano", idx),
            }
        }

        let out = engine.process(frame.as_ref(), now);

        if let Some(gesture) = out.confirmed {
            confirmations += 1;
            println!(
                "✋ frame {:04}: {} confirmado (dirección: {:?})",
                idx,
                gesture.key_name(),
                out.direction
            );
        }

        for trigger in out.triggers {
            sink.dispatch(&trigger.command)?;
        }
    }

    println!(
        "\n🏁 Replay completo: {} confirmaciones, {} comandos despachados",
        confirmations,
        sink.sent.len()
    );

    Ok(())
}
