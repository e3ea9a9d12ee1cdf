use geoterm::{Amendments, Gazetteer, RawCity, RawCountry, Terminator, Timestamp};

fn main() -> geoterm::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let now = Timestamp::now();
    println!("UTC:  {now}");
    println!("JD:   {}", now.julian_date());
    println!("d:    {}", now.j2000_date());
    println!("GMST: {:.4} h", now.gmst());

    let terminator = Terminator::new(now);
    let sun = terminator.sun();
    println!(
        "Sun:  α = {:.3}°, δ = {:.3}°",
        sun.right_ascension, sun.declination
    );
    let curve = terminator.curve();
    println!("Terminator: {} vertices, finite = {}", curve.len(), curve.is_finite());

    let gazetteer = Gazetteer::load(
        vec![RawCity {
            name: "Vienna".into(),
            alt_names: vec!["Wien".into()],
            country: Some("Österreich".into()),
            population: 1_900_000,
            location: (48.2085, 16.3721),
        }],
        vec![RawCountry {
            name: "Austria".into(),
            alt_names: Some(vec!["Österreich".into()]),
            boundary: vec![(9.5, 46.4), (17.2, 46.4), (17.2, 49.0), (9.5, 49.0)],
            centroid: (47.6, 14.1),
        }],
        &Amendments::default(),
    )?;

    let hit = gazetteer.resolve("Wien", "Austria")?;
    println!("Resolved: {}", hit.city);
    Ok(())
}
