use grid_astar::{find_path, waypoints, Coordinate, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, false);
    pathing_grid.set(Coordinate::new(1, 1), true).unwrap();
    println!("{}", pathing_grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    let path = find_path(&pathing_grid, start, end).unwrap();
    println!("Path:");
    for p in &path {
        println!("{}", p);
    }
    println!("Waypoints: {:?}", waypoints(&path));
}
