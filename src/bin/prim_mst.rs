//! prim-mst binary.
//!
//! Loads a weighted undirected graph from an edge-list file, runs Prim's
//! algorithm and prints the total weight of the minimum spanning tree.
//!
//! Command syntax is `prim-mst graph_file [--source VERTEX] [--dense]`
//!
//!  --source or -s : vertex the tree is grown from, default is 1.
//!  --dense        : index the frontier heap with a vector instead of a hash map.
//!
//! The file starts with a `num_vertices num_edges` line followed by one
//! `v1 v2 weight` line per edge, vertices numbered from 1.
//! Logging is configured through `RUST_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, Command};

use indexed_heap_mst::graph::Graph;
use indexed_heap_mst::prim::{prim, VertexId};

/// Loads the graph and returns the weight of the spanning tree grown from
/// `source`.
fn run(path: &Path, source: VertexId, dense: bool) -> anyhow::Result<i64> {
    let graph: Graph<i64> = Graph::from_path(path)
        .with_context(|| format!("could not load graph from {}", path.display()))?;
    log::info!(
        "graph file {} read: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    if graph.vertex_count() == 0 {
        return Ok(0);
    }
    if source == 0 || source > graph.vertex_count() {
        bail!(
            "source vertex {} is outside 1..={}",
            source,
            graph.vertex_count()
        );
    }

    let tree = if dense {
        graph.spanning_tree_from(source)
    } else {
        prim(&graph, source)
    };

    if !tree.spans(graph.vertex_count()) {
        log::warn!(
            "graph is not connected: tree from vertex {} has {} of {} edges",
            source,
            tree.len(),
            graph.vertex_count() - 1
        );
    }

    Ok(graph.tree_weight(&tree))
}

pub fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let matches = Command::new("prim-mst")
        .about("Total weight of a minimum spanning tree, computed with Prim's algorithm")
        .arg_required_else_help(true)
        .arg(
            Arg::new("graph")
                .required(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("edge-list file: `n m` header, then `v1 v2 weight` per edge"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .value_name("VERTEX")
                .value_parser(value_parser!(VertexId))
                .default_value("1")
                .help("vertex the tree is grown from"),
        )
        .arg(
            Arg::new("dense")
                .long("dense")
                .action(ArgAction::SetTrue)
                .help("index the frontier heap with a vector instead of a hash map"),
        )
        .get_matches();

    let path = matches
        .get_one::<PathBuf>("graph")
        .expect("graph is a required argument");
    let source = *matches
        .get_one::<VertexId>("source")
        .expect("source has a default value");
    let dense = matches.get_flag("dense");

    match run(path, source, dense) {
        Ok(cost) => println!("{}", cost),
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
