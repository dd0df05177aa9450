use tracing::warn;

pub fn run(die: u32, steps: u32) -> Result<(), String> {
    let die = super::catalog_die(die)?;
    let progression = rc_mechanics::progression(die, steps);
    if steps > 0 && progression.is_static() {
        warn!(die, "die is off the escalation ladder, no step applied");
    }
    println!("{progression}");
    Ok(())
}
