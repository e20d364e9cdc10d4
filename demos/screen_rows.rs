//! Rank the rows of a labeled matrix by their MI with one reference row.
//!
//! A small synthetic expression-like matrix is written to `screen_rows_input.tsv`,
//! loaded back and screened against its `ref` row.

use bsplinemi::LabeledMatrix;
use bsplinemi::estimators::approaches::bspline::BsplineConfig;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use std::fs::File;

fn synthetic(samples: usize, seed: u64) -> Result<LabeledMatrix, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.4)?;
    let rows = [("ref", 1.0), ("up", 2.0), ("down", -1.5), ("flat", 0.0), ("weak", 0.3)];

    let mut data = Array2::zeros((rows.len(), samples));
    for (r, &(_, slope)) in rows.iter().enumerate() {
        for s in 0..samples {
            let base = (s as f64 / 6.0).sin();
            data[(r, s)] = slope * base + noise.sample(&mut rng);
        }
    }
    let row_names = rows.iter().map(|(name, _)| name.to_string()).collect();
    let col_names = (0..samples).map(|s| format!("s{s}")).collect();
    Ok(LabeledMatrix::new(data, row_names, col_names)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = "screen_rows_input.tsv";
    synthetic(60, 5)?.write_to(File::create(path)?, '\t')?;

    let matrix = LabeledMatrix::from_path(path, '\t')?;
    let reference = matrix.row("ref").ok_or("row \"ref\" not found")?.to_owned();
    let config = BsplineConfig::new(10, 3).with_sign_correct(true);

    let mut scores = matrix.mutual_information_with(reference.view(), &config)?;
    scores.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

    println!("{} rows x {} samples, reference \"ref\"", matrix.nrows(), matrix.ncols());
    for (name, mi) in scores {
        println!("{name:<8} {mi:+.6}");
    }
    Ok(())
}
