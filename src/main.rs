// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viae CLI entrypoint.
//!
//! Loads a saved map file, replays its edit history from an empty graph, and
//! prints the resulting city/road network. `--check` validates the file
//! without printing; `--demo` writes a small built-in history to the given
//! path instead.

use std::error::Error;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use viae::history::History;
use viae::model::Graph;
use viae::session::EditorSession;
use viae::store;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--check] <map.json>\n  {program} --demo <map.json>\n\nReplays the edit history in <map.json> and prints the resulting network.\n--check validates the file and prints nothing on success.\n--demo writes a small built-in demo history to <map.json>."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    check: bool,
    demo: bool,
    path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => {
                if options.check {
                    return Err(());
                }
                options.check = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.path.is_some() {
                    return Err(());
                }
                options.path = Some(arg);
            }
        }
    }

    if options.check && options.demo {
        return Err(());
    }
    if options.path.is_none() {
        return Err(());
    }

    Ok(options)
}

fn demo_session() -> EditorSession {
    let mut session = EditorSession::new();
    let mut rng = StdRng::seed_from_u64(1);

    let a = session.add_city(&mut rng);
    let b = session.add_city(&mut rng);
    let c = session.add_city(&mut rng);
    let _ = session.connect(&a, &b, None, None, "5");
    let _ = session.connect(&b, &c, None, None, "3");
    let _ = session.rename_city(&a, "Springfield");
    session
}

fn print_graph(graph: &Graph, history: &History) {
    println!(
        "{} command(s), cursor at {}",
        history.len(),
        history.cursor_index()
    );
    println!("cities:");
    for node in graph.nodes().values() {
        let position = node.position();
        println!(
            "  {} \"{}\" at ({:.1}, {:.1})",
            node.node_id(),
            node.label(),
            position.x,
            position.y
        );
    }
    println!("roads:");
    for edge in graph.edges().values() {
        let waypoints = edge.waypoints().len();
        if waypoints > 0 {
            println!(
                "  {} {} -> {} cost {} ({waypoints} waypoint(s))",
                edge.edge_id(),
                edge.source(),
                edge.target(),
                edge.cost()
            );
        } else {
            println!(
                "  {} {} -> {} cost {}",
                edge.edge_id(),
                edge.source(),
                edge.target(),
                edge.cost()
            );
        }
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let path_string = options.path.unwrap_or_default();
    let path = Path::new(&path_string);

    if options.demo {
        let session = demo_session();
        store::save_map(path, session.history())?;
        println!("wrote demo history to {}", path.display());
        return Ok(());
    }

    let file = store::load_map(path)?;
    let mut graph = Graph::new();
    let history = History::import(&file.history, &mut graph)?;

    if options.check {
        return Ok(());
    }
    print_graph(&graph, &history);
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "viae".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("viae: {err}");
        std::process::exit(1);
    }
}
