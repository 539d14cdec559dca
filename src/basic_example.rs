// Basic example - builds a grid, creates a few windows, and drags a random
// rectangle across the workspace to show coverage and drop-point resolution.
// Run with RUST_LOG=debug to see the mutation log.

use rand::Rng;
use snap_grid::{
    coverage_percentage, quadrant_coverage, GridConfig, Point, Rect, VirtualGrid, WindowConfig,
    WindowManager, WindowManagerConfig, DEFAULT_COVERAGE_THRESHOLD,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let screen_width = 1920.0;
    let screen_height = 1080.0;
    let grid = VirtualGrid::with_screen(GridConfig::new(2, 3, 10.0), screen_width, screen_height)?;

    println!("=== VIRTUAL GRID ===");
    println!(
        "{} cells of {:.1}x{:.1}",
        grid.cells().len(),
        grid.cell_width(),
        grid.cell_height()
    );
    for cell in grid.cells() {
        println!(
            "  ({}, {}): ({:.1}, {:.1}) .. ({:.1}, {:.1})",
            cell.row,
            cell.col,
            cell.top_left.x,
            cell.top_left.y,
            cell.bot_right.x,
            cell.bot_right.y
        );
    }

    let mut manager = WindowManager::new(WindowConfig::default(), WindowManagerConfig::default());
    let first_id = manager.create_window();
    manager.create_window();
    manager.bring_window_to_front(&first_id);

    println!();
    println!("=== WINDOWS ===");
    println!("{}", serde_json::to_string_pretty(manager.windows())?);

    // Simulate a drag: a window-sized rectangle at a random spot.
    let mut rng = rand::thread_rng();
    let drag_origin = Point::new(
        rng.gen_range(0.0..screen_width - 300.0),
        rng.gen_range(0.0..screen_height - 200.0),
    );
    let dragged = Rect::new(
        drag_origin,
        Point::new(drag_origin.x + 300.0, drag_origin.y + 200.0),
    );

    println!();
    println!("=== DRAG AT ({:.0}, {:.0}) ===", drag_origin.x, drag_origin.y);
    for cell in grid.cells() {
        let pct = coverage_percentage(&cell.rect, &dragged);
        if pct > 0.0 {
            let quads = quadrant_coverage(&cell.rect, &dragged, DEFAULT_COVERAGE_THRESHOLD);
            println!(
                "  cell ({}, {}): {:.1}% covered, quadrants {:?}",
                cell.row, cell.col, pct, quads
            );
        }
    }
    if let Some(cell) = grid.nearest_cell(dragged.center()) {
        println!(
            "  drop point resolves to cell ({}, {})",
            cell.row, cell.col
        );
    }

    Ok(())
}
