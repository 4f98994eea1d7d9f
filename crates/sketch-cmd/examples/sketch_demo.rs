//! Sketch commands against an in-memory session
//!
//! Loads a small three-state test molecule, runs sketch commands and prints
//! the objects they leave behind.
//!
//! ## Usage
//!
//! ```bash
//! # Run the built-in script
//! cargo run --example sketch_demo
//!
//! # Run commands from stdin, with defaults from a JSON file
//! echo "sketch_scom trp, state=0" | RUST_LOG=debug cargo run --example sketch_demo -- --config sketch.json -
//! ```

use std::io::{self, BufRead};

use lin_alg::f64::Vec3;
use sketch_cmd::{CommandExecutor, SketchConfig};
use sketch_scene::{Molecule, Session};

const SCRIPT: &str = "
sketch_pcoc trp
sketch_pcom trp and name CA, state=0
sketch_scom trp, state=0, color=red, radius=0.5
sketch_scoc trp, color=(0, 0.2, 0)
sketch_bbox trp, padding=1.5, linewidth=3
sketch_rgyr trp
sketch_arrow (0, 0, 0), [3, 3, 3], color=red, color3=blue
";

fn test_molecule() -> Molecule {
    let mut mol = Molecule::from_atoms(
        "trp",
        [
            ("N", 14.007, Vec3::new(-1.2, 0.5, 0.0)),
            ("CA", 12.011, Vec3::new(0.0, 0.0, 0.0)),
            ("C", 12.011, Vec3::new(1.3, 0.8, 0.1)),
            ("O", 15.999, Vec3::new(1.4, 2.0, 0.3)),
        ],
    );
    for step in 1..3 {
        let shift = Vec3::new(0.0, 0.0, step as f64 * 1.5);
        let coords: Vec<Vec3> = mol
            .coords(1)
            .map(|c| c.iter().map(|p| *p + shift).collect())
            .unwrap_or_default();
        if let Err(e) = mol.add_state(coords) {
            log::error!("Cannot add state: {}", e);
        }
    }
    mol
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut config = SketchConfig::default();
    let mut from_stdin = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    log::error!("--config needs a path");
                    return;
                };
                match std::fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|text| SketchConfig::from_json(&text).map_err(|e| e.to_string()))
                {
                    Ok(loaded) => config = loaded,
                    Err(e) => {
                        log::error!("Cannot read '{}': {}", path, e);
                        return;
                    }
                }
            }
            "-" => from_stdin = true,
            other => log::warn!("Ignoring argument '{}'", other),
        }
    }

    let mut session = Session::new();
    session.load_molecule(test_molecule());

    let mut executor = CommandExecutor::with_config(config);
    executor.set_echo(true);

    let lines: Vec<String> = if from_stdin {
        io::stdin().lock().lines().map_while(Result::ok).collect()
    } else {
        SCRIPT.lines().map(str::to_string).collect()
    };

    for line in &lines {
        if let Err(e) = executor.do_(&mut session, line) {
            log::error!("{}", e);
        }
    }

    println!("Objects:");
    for name in session.objects().names() {
        if let Some(obj) = session.objects().get(name) {
            println!("  {:<24} {}", name, obj.object_type());
        }
    }
}
