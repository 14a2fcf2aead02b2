use grid_astar::{Coordinate, FrontierSet, Pathfinder, PathingGrid, SearchError};

// Prints the open (o) and closed (x) frontiers before every iteration of the search, the way an
// editor would animate it.

fn draw(grid: &PathingGrid, open: &FrontierSet<Coordinate>, closed: &FrontierSet<Coordinate>) {
    for row in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|col| {
                let p = Coordinate::new(row, col);
                if open.contains(&p) {
                    'o'
                } else if closed.contains(&p) {
                    'x'
                } else if grid.can_move_to(&p) {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("{}", line);
    }
    println!();
}

fn main() {
    let grid: PathingGrid = "
        ..........
        .######...
        ......#...
        ####..#.##
        ......#...
    "
    .parse()
    .unwrap();
    let start = Coordinate::new(4, 0);
    let goal = Coordinate::new(4, 9);
    let mut frame = 0;
    let result = Pathfinder::new().find_path_observed(
        &grid,
        start,
        goal,
        &mut |open: &FrontierSet<Coordinate>, closed: &FrontierSet<Coordinate>| {
            frame += 1;
            println!("Frame {}", frame);
            draw(&grid, open, closed);
        },
    );
    match result {
        Ok(path) => println!("Path of {} cells: {:?}", path.len(), path),
        Err(SearchError::NotFound) => println!("No path found"),
        Err(err) => println!("{}", err),
    }
}
