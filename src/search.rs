// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use crate::grid::{Cell, Heightmap, MissingMarkerError};

/// Per-cell shortest distances from a fixed source, dense by linearized
/// position. `None` is the unreached sentinel, never a finite count.
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub struct Distances {
	steps: Vec<Option<usize>>,
	stride: usize,
}

impl Distances {
	pub fn to(&self, cell: Cell) -> Option<usize> {
		if cell.x >= self.stride { return None }
		self.steps.get(cell.y * self.stride + cell.x).copied().flatten()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("source cell ({}, {}) does not belong to the grid", .0.x, .0.y)]
pub struct InvalidSourceError(pub Cell);

/// Computes the fewest steps from `source` to every reachable cell.
pub fn distances_from(map: &Heightmap, source: Cell)
-> Result<Distances, InvalidSourceError> {
	if !map.contains(source) { return Err(InvalidSourceError(source)) }
	Ok(search(map, source))
}

/// Label-setting search: each pop with an unvisited index finalizes that
/// cell's distance. Unit edge weights, so the priority queue holds
/// `(steps, index)` pairs — ties break toward the lowest index, which
/// keeps repeat runs deterministic.
fn search(map: &Heightmap, source: Cell) -> Distances {
	use std::{cmp::Reverse, collections::BinaryHeap};

	let mut steps = vec![None; map.width() * map.height()];
	let mut visited = vec![false; steps.len()];
	let mut queue = BinaryHeap::new();

	steps[map.index_of(source)] = Some(0);
	queue.push(Reverse((0, map.index_of(source))));

	while let Some(Reverse((dist, index))) = queue.pop() {
		if visited[index] { continue }
		visited[index] = true;

		#[cfg(LOGGING)]
		println!("{},{} @ {dist}: {}",
			index % map.width(),
			index / map.width(),
			map.height_of(map.cell_of(index)));

		for cell in map.neighbors(map.cell_of(index)) {
			let i = map.index_of(cell);
			if visited[i] { continue }
			if steps[i].map_or(true, |d| dist + 1 < d) {
				steps[i] = Some(dist + 1);
				queue.push(Reverse((dist + 1, i)));
			}
		}
	}

	Distances { steps, stride: map.width() }
}

/// Fewest steps from the start marker to the end marker, or `Ok(None)`
/// when the end cannot be reached.
pub fn fewest_steps_to_end(map: &Heightmap)
-> Result<Option<usize>, MissingMarkerError> {
	let (start, end) = (map.start()?, map.end()?);
	Ok(search(map, start).to(end))
}

/// Fewest steps to the end marker from any lowest-elevation cell. Each
/// candidate gets its own independent run; the grid is read-only, so the
/// runs fan out across the rayon pool. Sources without a path to the end
/// drop out of the minimum.
pub fn fewest_steps_from_lowest(map: &Heightmap)
-> Result<Option<usize>, MissingMarkerError> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let end = map.end()?;
	let sources = map.cells()
		.filter(|&cell| map.height_of(cell) == 0)
		.collect::<Vec<_>>();
	Ok(sources.into_par_iter()
		.filter_map(|source| search(map, source).to(end))
		.min())
}
