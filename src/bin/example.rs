//! beammech example - sandwich panel against textbook formulas

use beammech::prelude::*;

// Panel in mm and N: E in MPa, 400 mm wide, 26 mm core, 2 mm skins
const L: usize = 1000;
const E: f64 = 0.5 * 240_000.0;
const G: f64 = 28.0;
const P: f64 = -500.0;

fn panel() -> BeamResult<Problem> {
    Problem::uniform(L, &Material::new(E, G), &Section::sandwich(400.0, 26.0, 2.0))
}

fn report(name: &str, problem: &mut Problem, station: usize, formula: f64) -> BeamResult<()> {
    problem.solve()?;
    let y = problem.deflection()?[station];
    println!(
        "{:<34} y[{:>4}] = {:>10.4}  formula = {:>10.4}  diff = {:>6.3}%",
        name,
        station,
        y,
        formula,
        100.0 * (y - formula) / formula
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== beammech example: sandwich panel, L = {} mm ===\n", L);

    let ei = E * Section::sandwich(400.0, 26.0, 2.0).ix;
    let l = L as f64;

    let mut p = panel()?.with_load(PointLoad::new(P, L));
    report("Cantilever, tip load", &mut p, L, P * l.powi(3) / (3.0 * ei))?;

    let mut p = panel()?.with_load(DistLoad::new(P, 0, L));
    report("Cantilever, distributed load", &mut p, L, P * l.powi(3) / (8.0 * ei))?;

    let mut p = panel()?.with_supports(0, L).with_load(PointLoad::new(P, L / 2));
    report("Supported, central load", &mut p, L / 2, P * l.powi(3) / (48.0 * ei))?;

    let mut p = panel()?.with_supports(0, L).with_load(DistLoad::new(P, 0, L));
    report(
        "Supported, distributed load",
        &mut p,
        L / 2,
        5.0 * P * l.powi(3) / (384.0 * ei),
    )?;

    let mut p = panel()?
        .with_supports(0, L)
        .with_load(TriangleLoad::new(P, 0, L));
    report("Supported, triangle load", &mut p, 519, 0.01304 * P * l.powi(3) / ei)?;

    let m = 500.0 * 1000.0;
    let mut p = panel()?.with_supports(0, L).with_load(MomentLoad::new(m, 0));
    report("Supported, couple at start", &mut p, 422, 0.0642 * m * l * l / ei)?;

    let mut p = panel()?.with_load(MomentLoad::new(m, L));
    report("Cantilever, couple at tip", &mut p, L, m * l * l / (2.0 * ei))?;

    let summary = Summary::from(p.solution()?);
    println!(
        "\nLast case: max |y| = {:.4} mm at station {}, max |M| = {:.1} N·mm",
        summary.max_deflection, summary.max_deflection_station, summary.max_moment
    );

    Ok(())
}
