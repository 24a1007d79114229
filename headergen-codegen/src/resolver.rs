//! Struct emission ordering.
//!
//! Members name other structs by their typedef, so a struct can only be
//! defined once every struct it references is complete. This module orders
//! the (already name-sorted) structs so that requirement holds.

use crate::config::StructOrder;
use crate::error::CodegenError;
use headergen_schema::ir::ResolvedStruct;
use std::collections::HashMap;

/// Orders structs for emission according to `order`.
///
/// The input must be sorted by name; the relative name order is kept within
/// each pass or layer.
///
/// # Errors
/// Returns `CodegenError::CircularStruct` if `order` is
/// [`StructOrder::Layered`] and the struct references form a cycle.
pub fn order_structs(
    structs: &[ResolvedStruct],
    order: StructOrder,
) -> Result<Vec<&ResolvedStruct>, CodegenError> {
    match order {
        StructOrder::TwoPass => Ok(two_pass(structs)),
        StructOrder::Layered => layered(structs),
    }
}

/// Structs without struct members first, then the rest.
fn two_pass(structs: &[ResolvedStruct]) -> Vec<&ResolvedStruct> {
    let (simple, nested): (Vec<_>, Vec<_>) =
        structs.iter().partition(|s| !s.has_struct_members());
    tracing::debug!(
        simple = simple.len(),
        nested = nested.len(),
        "ordered structs in two passes"
    );
    simple.into_iter().chain(nested).collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done(usize),
}

/// Structs grouped by the length of their longest reference chain.
fn layered(structs: &[ResolvedStruct]) -> Result<Vec<&ResolvedStruct>, CodegenError> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(structs.len());
    for (i, s) in structs.iter().enumerate() {
        index.entry(s.name.as_str()).or_insert(i);
    }

    // Structs referencing an unknown struct never land in layer 0.
    let mut floors = vec![0; structs.len()];
    let edges: Vec<Vec<usize>> = structs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            s.dependencies
                .iter()
                .filter_map(|dep| {
                    let found = index.get(dep.as_str()).copied();
                    if found.is_none() {
                        tracing::warn!(
                            "struct {} references unknown struct {}",
                            s.name,
                            dep
                        );
                        floors[i] = 1;
                    }
                    found
                })
                .collect()
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; structs.len()];
    let mut stack = Vec::new();
    let graph = Graph {
        structs,
        edges: &edges,
        floors: &floors,
    };
    for i in 0..structs.len() {
        depth_of(i, &graph, &mut marks, &mut stack)?;
    }

    let mut depths: Vec<(usize, usize)> = marks
        .iter()
        .enumerate()
        .map(|(i, mark)| match mark {
            Mark::Done(depth) => (*depth, i),
            _ => (0, i),
        })
        .collect();
    depths.sort();

    if let Some((max_depth, _)) = depths.last() {
        tracing::debug!(layers = max_depth + 1, "ordered structs by dependency layer");
    }

    Ok(depths.into_iter().map(|(_, i)| &structs[i]).collect())
}

/// Dependency edges and minimum layer of each struct.
struct Graph<'a> {
    structs: &'a [ResolvedStruct],
    edges: &'a [Vec<usize>],
    floors: &'a [usize],
}

/// Depth-first search computing the layer of struct `i`.
fn depth_of(
    i: usize,
    graph: &Graph<'_>,
    marks: &mut [Mark],
    stack: &mut Vec<usize>,
) -> Result<usize, CodegenError> {
    match marks[i] {
        Mark::Done(depth) => return Ok(depth),
        Mark::Visiting => {
            let start = stack.iter().position(|&s| s == i).unwrap_or(0);
            let mut path: Vec<&str> = stack[start..]
                .iter()
                .map(|&s| graph.structs[s].name.as_str())
                .collect();
            path.push(graph.structs[i].name.as_str());
            return Err(CodegenError::CircularStruct {
                path: path.join(" -> "),
            });
        }
        Mark::Unvisited => {}
    }

    marks[i] = Mark::Visiting;
    stack.push(i);

    let mut depth = graph.floors[i];
    for &dep in &graph.edges[i] {
        depth = depth.max(depth_of(dep, graph, marks, stack)? + 1);
    }

    stack.pop();
    marks[i] = Mark::Done(depth);
    Ok(depth)
}
