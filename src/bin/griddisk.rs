//! Prints the cells within `k` grid steps of an origin cell, one per line.
//!
//! Usage:
//!   griddisk <origin-index> <k> [--distances]
//!
//! The origin is a hexadecimal cell index. With `--distances`, each line is
//! followed by the cell's ring distance. Prints `0` and exits if the origin
//! is not a valid cell.

use icosahex::{grid_disk_distances, H3Index};
use std::process::ExitCode;

fn main() -> ExitCode {
  let mut positional = Vec::new();
  let mut print_distances = false;

  for arg in std::env::args().skip(1) {
    if arg == "--distances" {
      print_distances = true;
    } else {
      positional.push(arg);
    }
  }

  let [origin_arg, k_arg] = positional.as_slice() else {
    eprintln!("usage: griddisk <origin-index> <k> [--distances]");
    return ExitCode::FAILURE;
  };

  // An unparseable origin is treated like any other invalid cell.
  let origin = origin_arg.parse::<H3Index>().unwrap_or(icosahex::H3_NULL);
  let Ok(k) = k_arg.parse::<i32>() else {
    eprintln!("invalid k: {k_arg}");
    return ExitCode::FAILURE;
  };

  if !origin.is_valid_cell() {
    println!("0");
    return ExitCode::SUCCESS;
  }

  match grid_disk_distances(origin, k) {
    Ok(disk) => {
      for (cell, distance) in disk {
        if print_distances {
          println!("{cell} {distance}");
        } else {
          println!("{cell}");
        }
      }
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("griddisk failed: {err}");
      ExitCode::FAILURE
    }
  }
}
