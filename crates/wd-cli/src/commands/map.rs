use std::path::Path;

pub fn run(content: Option<&Path>, seed: u64, grid_size: i32, json: bool) -> Result<(), String> {
    let game = super::start_game(content, seed, grid_size)?;
    let snapshot = game.snapshot();

    if json {
        let out = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print!("{}", super::render_map(&snapshot, false));
    println!();
    println!("  {}", super::status_line(&snapshot));
    println!(
        "  Seed {seed} | {} monsters | stairs at {}",
        snapshot.monsters.len(),
        snapshot.stairs
    );
    Ok(())
}
