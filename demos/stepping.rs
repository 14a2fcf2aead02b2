use grid_astar::{Coordinate, Pathfinder, PathingGrid, SearchStep};

// Drives a search one expansion per "tick", as a UI timer would, instead of running it to
// completion in one call.

fn main() {
    let grid: PathingGrid = "
        .....
        .###.
        ...#.
        .#...
    "
    .parse()
    .unwrap();
    let mut search = Pathfinder::new()
        .search(&grid, Coordinate::new(3, 0), Coordinate::new(0, 4))
        .unwrap();
    loop {
        match search.step() {
            SearchStep::Expanded(node) => println!(
                "tick {}: expanded {}, {} open",
                search.iterations(),
                node,
                search.open().len()
            ),
            SearchStep::Found(path) => {
                println!("found {:?}", path);
                break;
            }
            SearchStep::Exhausted => {
                println!("no path");
                break;
            }
        }
    }
}
