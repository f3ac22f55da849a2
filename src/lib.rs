// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Shortest paths over a character heightmap: an implicit directed grid
//! graph (steps up are capped at one, steps down are free) plus a
//! label-setting single-source solver.

pub mod grid;
pub mod search;

pub use grid::{Cell, Heightmap, MalformedInputError, MissingMarkerError, OutOfBoundsError};
pub use search::{
	distances_from, fewest_steps_from_lowest, fewest_steps_to_end,
	Distances, InvalidSourceError,
};
