//! Command-line interface for nuancier_ncs
//!
//! Loads a catalog, composes a palette for three adjectives and prints
//! the result as text or JSON.

use std::{env, path::PathBuf, process};

use nuancier_ncs::{compose_palette, Adjective, Catalog, PaletteRequest};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = None;
    let mut adjectives: Vec<Adjective> = Vec::new();
    let mut threshold = None;
    let mut window = None;
    let mut strict = true;
    let mut json_output = false;
    let mut plan_output = false;
    let mut table_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threshold" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<f32>().ok()) {
                    Some(value) => threshold = Some(value),
                    None => {
                        eprintln!("Error: --threshold requires a number");
                        process::exit(1);
                    }
                }
            }
            "--window" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(value) => window = Some(value),
                    None => {
                        eprintln!("Error: --window requires an integer");
                        process::exit(1);
                    }
                }
            }
            "--loose" => strict = false,
            "--json" => json_output = true,
            "--plan" => plan_output = true,
            "--table" => table_output = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if catalog_path.is_none() {
                    catalog_path = Some(PathBuf::from(arg));
                } else {
                    match Adjective::from_token(arg) {
                        Some(adjective) => adjectives.push(adjective),
                        None => {
                            eprintln!("Unknown adjective: {arg}");
                            eprintln!("Vocabulary: chaud froid clair foncé lumineux mat neutre");
                            process::exit(1);
                        }
                    }
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(catalog_path) = catalog_path else {
        print_help(&args[0]);
        process::exit(1);
    };
    if adjectives.len() != 3 {
        eprintln!("Error: exactly three adjectives are required, got {}", adjectives.len());
        process::exit(1);
    }

    let catalog = match Catalog::from_csv_path(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let mut request = PaletteRequest::new(adjectives[0], adjectives[1], adjectives[2])
        .with_strict(strict);
    if let Some(threshold) = threshold {
        request = request.with_threshold(threshold);
    }
    if let Some(window) = window {
        request = request.with_diversify_window(window);
    }

    let palette = match compose_palette(&catalog, &request) {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if palette.no_matches() {
        eprintln!("{}", palette.no_match_message());
        process::exit(0);
    }

    if plan_output {
        let plan = palette.document_plan();
        println!("{}", serde_json::to_string_pretty(&plan).expect("plan serializes"));
    } else if table_output {
        match palette.to_delimited() {
            Ok(table) => print!("{table}"),
            Err(e) => {
                eprintln!("{}", e.user_message());
                process::exit(1);
            }
        }
    } else if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&palette.entries).expect("entries serialize")
        );
    } else {
        for entry in palette.presentation_order() {
            println!(
                "{:<12} {:>7} {:<10} {:.3}  {}",
                entry.record.ncs_code,
                entry.hex,
                entry.family,
                entry.global_score,
                entry.record.name
            );
        }
        println!("-- {} couleurs", palette.entries.len());
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} <catalog.csv> <adj1> <adj2> <adj3> [options]");
    println!();
    println!("Adjectives (priority order): chaud froid clair foncé lumineux mat neutre");
    println!();
    println!("Options:");
    println!("  --threshold <t>   strict matching threshold, 0..1 (default 0.60)");
    println!("  --window <n>      family diversification window (default 200)");
    println!("  --loose           rank the whole catalog instead of filtering");
    println!("  --json            print ranked entries as JSON");
    println!("  --table           print the ;-separated detail table");
    println!("  --plan            print the document layout plan as JSON");
    println!("  --help, -h        show this help");
}
