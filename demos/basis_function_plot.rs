use bsplinemi::estimators::approaches::bspline::{KnotVector, basis_function};
use plotters::prelude::*;
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_bins = 6;
    let spline_order = 3;
    let knots = KnotVector::new(num_bins, spline_order)?;
    println!("Knot vector: {:?}", knots.as_slice());

    let grid: Vec<f64> = (0..=400).map(|i| i as f64 / 400.0).collect();
    let curves: Vec<Vec<(f64, f64)>> = (0..num_bins)
        .map(|bin| {
            grid.iter()
                .map(|&t| (t, basis_function(bin, spline_order, t, knots.as_slice(), num_bins)))
                .collect()
        })
        .collect();

    let mut csv_file = File::create("bspline_basis_functions.csv")?;
    writeln!(csv_file, "t,{}", (0..num_bins).map(|b| format!("B{b}")).collect::<Vec<_>>().join(","))?;
    for (i, &t) in grid.iter().enumerate() {
        let row: Vec<String> = curves.iter().map(|c| c[i].1.to_string()).collect();
        writeln!(csv_file, "{},{}", t, row.join(","))?;
    }

    let root = BitMapBackend::new("bspline_basis_functions.png", (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("B-spline basis, {num_bins} bins, order {spline_order}"),
            ("sans-serif", 26).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..1f64, 0f64..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("normalized value t")
        .y_desc("bin weight")
        .draw()?;

    for (bin, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(bin);
        chart
            .draw_series(LineSeries::new(curve.iter().copied(), &color))?
            .label(format!("B{bin}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(bin)));
    }

    // Partition of unity: the sum of all curves is flat at 1
    chart
        .draw_series(LineSeries::new(
            grid.iter().enumerate().map(|(i, &t)| (t, curves.iter().map(|c| c[i].1).sum::<f64>())),
            &BLACK,
        ))?
        .label("sum")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    println!("\nResults saved to:");
    println!("- bspline_basis_functions.csv");
    println!("- bspline_basis_functions.png");

    Ok(())
}
