// genmanifest - Scan an image directory into images-list.json
//
// The client fetches the manifest at startup instead of probing the
// directory over HTTP. Optionally classifies each file to fill in the
// category: model first, filename heuristic as fallback.
//
// Usage: cargo run --bin genmanifest -- <images-dir> [--out FILE] [--classify]

mod scan;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use exhibition_engine::catalog::Manifest;
use exhibition_engine::classify::{ModelBackedClassifier, classify_with_fallback};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <images-dir> [--out FILE] [--classify]", args[0]);
        process::exit(1);
    }

    let images_dir = PathBuf::from(&args[1]);
    let mut out = PathBuf::from("images-list.json");
    let mut run_classifier = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                out = args.get(i + 1).map(PathBuf::from).unwrap_or(out);
                i += 2;
            }
            "--classify" => {
                run_classifier = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    println!("Scanning {}...", images_dir.display());
    let mut entries = scan::scan_images(&images_dir);
    println!("  Found {} images", entries.len());

    if run_classifier {
        println!("  Classifying...");
        let model = ModelBackedClassifier::new();
        for entry in &mut entries {
            let path = images_dir.join(&entry.filename);
            entry.category = classify_with_fallback(&model, &path).slug().to_owned();
        }
    }

    let manifest = Manifest {
        generated: chrono::Utc::now().to_rfc3339(),
        count: entries.len(),
        images: entries,
    };

    let json = match serde_json::to_string_pretty(&manifest) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Failed to serialize manifest: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = fs::write(&out, json) {
        eprintln!("Failed to write {}: {err}", out.display());
        process::exit(1);
    }

    println!("Wrote {} ({} images)", out.display(), manifest.count);
}
