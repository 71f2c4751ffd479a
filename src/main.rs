//! Terminal front end: prompt for quantum numbers, compute the orbital, and
//! print a summary of the payloads handed to the renderers.

use std::io::{self, BufRead, Write};

use orbital_lab::{
    presets::{self, RenderConfig},
    render::{volume_payload, VolumeHints},
    wf_ops::QuantumNums,
    OrbitalRequest,
};

fn read_int(stdin: &io::Stdin, prompt: &str) -> Option<i64> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if stdin.lock().read_line(&mut line).is_err() {
        return None;
    }

    match line.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            println!("Error: enter an integer.");
            None
        }
    }
}

/// Prompt until we have a valid (n, l, m), naming the violated bound on each
/// rejection.
fn get_quantum_numbers(stdin: &io::Stdin) -> QuantumNums {
    println!("=== Configuration ===");

    loop {
        let Some(n) = read_int(stdin, "Principal quantum number n (n >= 1): ") else {
            continue;
        };
        let Some(l) = read_int(stdin, &format!("Azimuthal quantum number l (0 <= l < {n}): "))
        else {
            continue;
        };
        let Some(m) = read_int(stdin, &format!("Magnetic quantum number m ({} <= m <= {l}): ", -l))
        else {
            continue;
        };

        if n < 0 || n > u16::MAX as i64 || !(0..=u16::MAX as i64).contains(&l) || m.abs() > i16::MAX as i64
        {
            println!("Error: value out of range.");
            continue;
        }

        match QuantumNums::new(n as u16, l as u16, m as i16) {
            Ok(state) => return state,
            Err(e) => println!("{e}"),
        }
    }
}

fn main() {
    println!("Hydrogen orbital visualizer");
    println!("--------------------------------------");
    println!("Quick picks:");
    for preset in presets::all() {
        let s = preset.state;
        println!("  {:<16} n={}, l={}, m={}", preset.name, s.n, s.l, s.m);
    }

    let stdin = io::stdin();

    loop {
        let state = get_quantum_numbers(&stdin);

        println!("\nComputing orbital {}...", state.descrip());

        let req = OrbitalRequest::interactive(state);
        println!(
            "Generating grid (+/-{:.1} a0, resolution {})...",
            req.extent, req.resolution
        );

        let (grid, density) = orbital_lab::compute_density(&req);

        let volume = volume_payload(&grid, &density, None, VolumeHints::default());
        println!(
            "Volume field: {} samples, iso {:.2}..{:.2}, {} surfaces ({})",
            volume.values.len(),
            volume.hints.iso_min,
            volume.hints.iso_max,
            volume.hints.surface_count,
            volume.hints.scheme.descrip(),
        );

        let config = RenderConfig::interactive();
        let mut rng = rand::thread_rng();
        match orbital_lab::render::scatter_payload(&grid, &density, &config, None, &mut rng) {
            Ok(cloud) => println!(
                "Point cloud: {} points, marker size {:.1}",
                cloud.posits.len(),
                cloud.marker_size
            ),
            Err(e) => println!("{e}"),
        }

        print!("\nVisualize another orbital? (y/n): ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            break;
        }
        if answer.trim().to_lowercase() != "y" {
            break;
        }
    }

    println!("Done.");
}
