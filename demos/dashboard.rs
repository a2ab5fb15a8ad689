//! # Regression dashboard, headless
//!
//! Recomputes both dashboard presets and prints what the UI would show:
//! the fitted equation, fit statistics, the outlier table and data ranges.
//! A parameter sweep at the end mimics a user dragging the noise slider.
//!
//! Run with: `RUST_LOG=debug cargo run --example dashboard`

use regress_playground::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Regression Playground ===\n");

    show(
        "Multiple regression (y = 2.0*x1 + 1.5*x2 + 5.0 + noise)",
        GenerationOptions::multiple_regression(),
    );
    show("Page load time vs bounce rate", GenerationOptions::bounce_rate());
    noise_sweep();
    degenerate_inputs();
}

fn show(title: &str, options: GenerationOptions) {
    println!("--- {title} ---\n");

    let report = match compute(&PlaygroundParams::from(options)) {
        Ok(report) => report,
        Err(e) => {
            println!("{e}\n");
            return;
        }
    };
    let summary = &report.summary;

    println!("Regression equation: {}", report.fit);
    println!("R-squared: {:.3}", summary.r_squared);
    match summary.adjusted_r_squared() {
        Ok(adj) => println!("Adjusted R-squared: {adj:.3}"),
        Err(e) => println!("Adjusted R-squared: not computable ({e})"),
    }
    println!("RMSE: {:.3}", summary.rmse);
    if let Some(f) = summary.f_test {
        println!(
            "F({}, {}) = {:.2}, p = {:.3e}",
            f.df_model, f.df_residual, f.statistic, f.p_value
        );
    }

    println!("\nTop {} outliers:", summary.outliers.len());
    println!("{:<6} {:>24} {:>10} {:>10}", "Rank", "Features", "Response", "Residual");
    for o in &summary.outliers {
        let features: Vec<String> = o.features.iter().map(|v| format!("{v:.3}")).collect();
        println!(
            "{:<6} {:>24} {:>10.3} {:>10.3}",
            o.rank,
            features.join(", "),
            o.response,
            o.residual
        );
    }

    let data = report.data_summary();
    println!("\nData points: {}", data.n_samples);
    for (j, (lo, hi)) in data.feature_ranges.iter().enumerate() {
        println!("x{} range: [{lo:.2}, {hi:.2}]", j + 1);
    }
    println!(
        "y range: [{:.2}, {:.2}]",
        data.response_range.0, data.response_range.1
    );

    if report.fit.n_features() == 1 {
        println!("\nPredictions:");
        for t in [2.0, 4.0, 6.0] {
            if let Some(pred) = report.fit.predict_one(&[t]) {
                println!("  x = {t}: {pred:.3}");
            }
        }
    }
    println!();
}

fn noise_sweep() {
    println!("--- Noise sweep (n = 500, seed = 42) ---\n");
    println!("{:>10} {:>8} {:>8}", "Variance", "R2", "RMSE");

    for variance in [0.0, 10.0, 100.0, 500.0, 1000.0] {
        let options = GenerationOptions::builder()
            .n_samples(500)
            .seed(42)
            .coefficients([2.0, 1.5])
            .intercept(5.0)
            .noise_variance(variance)
            .build();

        let report = match options.map(PlaygroundParams::from) {
            Ok(params) => compute(&params),
            Err(e) => Err(e.into()),
        };
        match report {
            Ok(r) => println!(
                "{:>10.1} {:>8.3} {:>8.3}",
                variance, r.summary.r_squared, r.summary.rmse
            ),
            Err(e) => println!("{variance:>10.1} {e}"),
        }
    }
    println!();
}

fn degenerate_inputs() {
    println!("--- Degenerate inputs ---\n");

    let single = GenerationOptions::builder()
        .n_samples(1)
        .build_unchecked();
    match compute(&single.into()) {
        Ok(_) => println!("n = 1: unexpectedly fit"),
        Err(e) => println!("n = 1: {e}"),
    }
}
