//! Console rendering of board snapshots, one plane at a time.
//!
//! All text formatting lives here; the board itself never prints.

use crate::board::BoardSnapshot;
use crate::piece::Plane;

/// Print a snapshot plane by plane, deepest first.
///
/// Occupied cells show the kind's symbol, empty cells a dot. Headers use
/// the same zero-based indices the turn loop accepts as coordinates.
pub fn print_board(snapshot: &BoardSnapshot) {
    let (rows, cols, _) = snapshot.shape().as_triple();
    for plane in [Plane::Undersea, Plane::SeaLevel, Plane::Air] {
        println!("{}:", plane.name());
        print!("    ");
        for c in 0..cols {
            print!("{:2} ", c);
        }
        println!();
        for r in 0..rows {
            print!("{:2}  ", r);
            for c in 0..cols {
                let ch = match snapshot.at((r, c, plane.index())) {
                    Some((_, kind)) => kind.symbol(),
                    None => '.',
                };
                print!(" {} ", ch);
            }
            println!();
        }
    }
}
