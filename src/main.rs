// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use hillclimb::{fewest_steps_from_lowest, fewest_steps_to_end, Heightmap};

fn display(steps: Option<usize>) -> String {
	steps.map_or_else(|| "unreachable".to_owned(), |steps| steps.to_string())
}

fn main() {
	let Some(path) = std::env::args().nth(1) else {
		eprintln!("Usage: hillclimb <input-file>");
		std::process::exit(2);
	};

	let input = match std::fs::read_to_string(&path) {
		Ok(input) => input,
		Err(err) => {
			eprintln!("{path}: {err}");
			std::process::exit(1);
		}
	};

	let map = match input.parse::<Heightmap>() {
		Ok(map) => map,
		Err(err) => {
			eprintln!("{path}: {err}");
			std::process::exit(1);
		}
	};

	match (fewest_steps_to_end(&map), fewest_steps_from_lowest(&map)) {
		(Ok(from_start), Ok(from_lowest)) => println!(
			"From start: {}, from lowest: {}",
			display(from_start), display(from_lowest)),
		(Err(err), _) | (_, Err(err)) => {
			eprintln!("{path}: {err}");
			std::process::exit(1);
		}
	}
}
