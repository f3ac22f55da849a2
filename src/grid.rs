// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A grid vertex, identified by its column `x` and row `y`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
	pub x: usize,
	pub y: usize,
}

/// The puzzle's character grid, viewed as an implicit directed graph:
/// cells are vertices, and edges to orthogonal neighbors exist wherever
/// the elevation gain is at most one (descents are always admissible).
///
/// Built once from input text, then read-only.
pub struct Heightmap {
	bytes: Vec<u8>,
	stride: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissingMarkerError {
	#[error("no start marker 'S' in grid")]
	NoStart,
	#[error("no end marker 'E' in grid")]
	NoEnd,
	#[error("duplicate start marker 'S' at ({}, {})", .0.x, .0.y)]
	DuplicateStart(Cell),
	#[error("duplicate end marker 'E' at ({}, {})", .0.x, .0.y)]
	DuplicateEnd(Cell),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
pub struct OutOfBoundsError {
	pub x: usize,
	pub y: usize,
	pub width: usize,
	pub height: usize,
}

impl Heightmap {
	pub fn width(&self) -> usize {
		self.stride
	}

	pub fn height(&self) -> usize {
		self.bytes.len() / self.stride
	}

	pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, OutOfBoundsError> {
		if x >= self.width() || y >= self.height() {
			return Err(OutOfBoundsError { x, y, width: self.width(), height: self.height() })
		}
		Ok(Cell { x, y })
	}

	pub fn contains(&self, cell: Cell) -> bool {
		cell.x < self.width() && cell.y < self.height()
	}

	pub(crate) fn index_of(&self, cell: Cell) -> usize {
		cell.y * self.stride + cell.x
	}

	pub(crate) fn cell_of(&self, index: usize) -> Cell {
		Cell { x: index % self.stride, y: index / self.stride }
	}

	/// All cells, in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
		(0..self.bytes.len()).map(|index| self.cell_of(index))
	}

	pub fn start(&self) -> Result<Cell, MissingMarkerError> {
		self.marker(b'S')
	}

	pub fn end(&self) -> Result<Cell, MissingMarkerError> {
		self.marker(b'E')
	}

	fn marker(&self, marker: u8) -> Result<Cell, MissingMarkerError> {
		let mut found = None;
		for (index, &b) in self.bytes.iter().enumerate() {
			if b != marker { continue }
			if found.is_some() {
				return Err(match marker {
					b'S' => MissingMarkerError::DuplicateStart(self.cell_of(index)),
					_ => MissingMarkerError::DuplicateEnd(self.cell_of(index)),
				})
			}
			found = Some(index);
		}
		found.map(|index| self.cell_of(index)).ok_or(match marker {
			b'S' => MissingMarkerError::NoStart,
			_ => MissingMarkerError::NoEnd,
		})
	}

	/// Elevation of `cell`, with the start marker remapped to the lowest
	/// height and the end marker to the highest.
	///
	/// Panics if `cell` lies outside the grid.
	pub fn height_of(&self, cell: Cell) -> u8 {
		match self.bytes[self.index_of(cell)] {
			b'S' => 0,
			b'E' => 25,
			b => b - b'a',
		}
	}

	/// Returns an [`Iterator`] over the in-bounds orthogonal neighbors of
	/// `cell`, in the fixed order up, left, right, down.
	fn adjacent(&self, cell: Cell) -> impl Iterator<Item = Cell> {
		let Cell { x, y } = cell;
		let up = (y > 0).then(|| Cell { x, y: y - 1 });
		let left = (x > 0).then(|| Cell { x: x - 1, y });
		let right = (x < self.width() - 1).then(|| Cell { x: x + 1, y });
		let down = (y < self.height() - 1).then(|| Cell { x, y: y + 1 });
		[up, left, right, down].into_iter().flatten()
	}

	/// Returns an [`Iterator`] similar to `adjacent`, but containing only
	/// those cells that can be stepped to from `cell`. The relation is
	/// directed: a step up of more than one is inadmissible, while the
	/// reverse step down always is admissible.
	pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
		let height = self.height_of(cell);
		self.adjacent(cell).filter(move |&c| self.height_of(c) <= height + 1)
	}
}


mod parsing {
	use super::Heightmap;

	#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
	pub enum MalformedInputError {
		#[error("empty input")]
		Empty,
		#[error("line {line}: expected {expected} columns, found {found}")]
		RaggedRow { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid byte {found:#04x}")]
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl Heightmap {
		/// Builds a heightmap from an ordered sequence of equal-length
		/// rows over `{a..z, S, E}`. Marker cardinality is checked by
		/// [`Heightmap::start`] / [`Heightmap::end`], not here.
		pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a str>)
		-> Result<Self, MalformedInputError> {
			let mut bytes = Vec::new();
			let mut stride = None;

			for (l, row) in rows.into_iter().enumerate() {
				let expected = *stride.get_or_insert(row.len());
				if row.len() != expected {
					return Err(MalformedInputError::RaggedRow {
						line: l + 1, expected, found: row.len() })
				}
				for (c, b) in row.bytes().enumerate() {
					match b {
						b'S' | b'E' => bytes.push(b),
						b if b.is_ascii_lowercase() => bytes.push(b),
						found => return Err(MalformedInputError::InvalidByte {
							line: l + 1, column: c + 1, found }),
					}
				}
			}

			match stride {
				None | Some(0) => Err(MalformedInputError::Empty),
				Some(stride) => Ok(Heightmap { bytes, stride }),
			}
		}
	}

	impl std::str::FromStr for Heightmap {
		type Err = MalformedInputError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			Heightmap::from_rows(s.lines())
		}
	}
}

pub use parsing::MalformedInputError;


#[cfg(test)]
mod tests {
	use itertools::Itertools as _;
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	fn heightmap() -> Heightmap {
		INPUT.parse().unwrap()
	}

	#[test]
	fn dimensions_and_markers() {
		let map = heightmap();
		assert_eq!((map.width(), map.height()), (8, 5));
		assert_eq!(map.start(), Ok(Cell { x: 0, y: 0 }));
		assert_eq!(map.end(), Ok(Cell { x: 5, y: 2 }));
		assert_eq!(map.height_of(Cell { x: 0, y: 0 }), 0);
		assert_eq!(map.height_of(Cell { x: 5, y: 2 }), 25);
		assert_eq!(map.height_of(Cell { x: 2, y: 1 }), 2);
	}

	#[test_case("" => matches Err(MalformedInputError::Empty); "no rows")]
	#[test_case("\n\n" => matches Err(MalformedInputError::Empty); "zero width rows")]
	#[test_case("Sab\naE" => matches Err(MalformedInputError::RaggedRow {
		line: 2, expected: 3, found: 2 }); "ragged row")]
	#[test_case("Sa\nZE" => matches Err(MalformedInputError::InvalidByte {
		line: 2, column: 1, found: b'Z' }); "invalid byte")]
	#[test_case("Sab\nabE" => matches Ok(()); "well formed")]
	fn malformed(s: &str) -> Result<(), MalformedInputError> {
		s.parse::<Heightmap>().map(|_| ())
	}

	#[test]
	fn marker_cardinality() {
		let map: Heightmap = "aaa\naaa".parse().unwrap();
		assert_eq!(map.start(), Err(MissingMarkerError::NoStart));
		assert_eq!(map.end(), Err(MissingMarkerError::NoEnd));

		let map: Heightmap = "SaS\naEa".parse().unwrap();
		assert_eq!(map.start(),
			Err(MissingMarkerError::DuplicateStart(Cell { x: 2, y: 0 })));
		assert_eq!(map.end(), Ok(Cell { x: 1, y: 1 }));
	}

	#[test]
	fn bounds() {
		let map = heightmap();
		assert_eq!(map.cell_at(7, 4), Ok(Cell { x: 7, y: 4 }));
		assert_eq!(map.cell_at(8, 0),
			Err(OutOfBoundsError { x: 8, y: 0, width: 8, height: 5 }));
		assert_eq!(map.cell_at(0, 5),
			Err(OutOfBoundsError { x: 0, y: 5, width: 8, height: 5 }));
		assert!(map.contains(Cell { x: 0, y: 0 }));
		assert!(!map.contains(Cell { x: 8, y: 5 }));
	}

	#[test]
	fn directed_steps() {
		let map: Heightmap = "acS\nazE".parse().unwrap();
		let (low, steep) = (Cell { x: 0, y: 0 }, Cell { x: 1, y: 0 });
		// Two up is inadmissible; the reverse step down is admissible.
		assert!(!map.neighbors(low).contains(&steep));
		assert!(map.neighbors(steep).contains(&low));
		// A big step down is admissible too.
		assert!(map.neighbors(Cell { x: 1, y: 1 }).contains(&Cell { x: 0, y: 1 }));
	}

	#[test]
	fn neighbor_order_and_bounds() {
		let map: Heightmap = "aaa\naSa\naaE".parse().unwrap();
		assert_eq!(map.neighbors(Cell { x: 1, y: 1 }).collect_vec(), vec![
			Cell { x: 1, y: 0 },
			Cell { x: 0, y: 1 },
			Cell { x: 2, y: 1 },
			Cell { x: 1, y: 2 },
		]);
		// Out-of-bounds sides are omitted, not errors.
		assert_eq!(map.neighbors(Cell { x: 0, y: 0 }).collect_vec(),
			vec![Cell { x: 1, y: 0 }, Cell { x: 0, y: 1 }]);
	}
}
