use orderstat::select::{deterministic_select, randomized_select, BenchmarkConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() -> orderstat::Result<()> {
    // Small sanity check
    let data = [7, 1, 9, 3, 5, 2, 4, 8, 6];
    let mut rng = ChaCha20Rng::from_entropy();
    for kth in 0..data.len() {
        let (mut a, mut b) = (data, data);
        let randomized = randomized_select(&mut a, kth, &mut rng)?;
        let deterministic = deterministic_select(&mut b, kth)?;
        println!("{} {} {}", kth, randomized, deterministic);
    }

    println!("\nRunning benchmark... please wait.\n");

    let records = BenchmarkConfig::default()
        .with_sizes([10_000, 20_000, 50_000])
        .run()?;

    println!(
        "{:>8} {:>10} {:>15} {:>15}",
        "n", "pattern", "rand_time(s)", "det_time(s)"
    );
    for record in &records {
        println!(
            "{:>8} {:>10} {:>15.5} {:>15.5}",
            record.size,
            record.shape,
            record.randomized.as_secs_f64(),
            record.deterministic.as_secs_f64()
        );
    }
    Ok(())
}
