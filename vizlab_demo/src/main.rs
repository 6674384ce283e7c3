// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-report demo for `vizlab_transforms`.
//!
//! Each section derives the data behind one classic D3 chart and prints it. Set
//! `RUST_LOG=debug` to see the transforms' own events.

mod data;

use std::error::Error;
use std::fmt::Write as _;

use tracing_subscriber::EnvFilter;
use vizlab_transforms::{
    BarOrder, ChangeScale, NumberBins, SwarmSpec, histogram, max_count, sort_by_delta, summarize,
};

type DemoResult = Result<String, Box<dyn Error>>;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sections: [(&str, fn() -> DemoResult); 5] = [
        ("Histogram", histogram_demo),
        ("Box plot", box_plot_demo),
        ("Beeswarm", beeswarm_demo),
        ("Diverging bars", diverging_demo),
        ("Bar transitions", bar_order_demo),
    ];

    for (title, section) in sections {
        tracing::info!(section = title, "rendering");
        let body = section()?;
        println!("== {title} ==\n{body}");
    }
    Ok(())
}

fn histogram_demo() -> DemoResult {
    let values = data::skewed_values(1000);
    let freqs = histogram(&values, 50)?;
    let peak = max_count(&freqs).max(1);

    let mut out = String::new();
    for f in freqs.iter().filter(|f| f.count > 0) {
        let bar = "#".repeat(f.count * 40 / peak);
        writeln!(
            out,
            "[{:.3}, {:.3}) {:>4} {bar}",
            f.bin.lower, f.bin.upper, f.count
        )?;
    }
    Ok(out)
}

fn box_plot_demo() -> DemoResult {
    let rows = data::carat_prices(2000);
    let carats: Vec<f64> = rows.iter().map(|r| r.carat).collect();
    let bins = NumberBins::new(&carats, 20)?;
    let grouping = bins.group(rows.iter().copied(), |r| r.carat)?;
    let summaries = summarize(&bins.bins(), &grouping, |r| r.price)?;

    let mut out = String::new();
    for s in &summaries {
        match s.stats {
            Some(stats) if s.has_box() => writeln!(
                out,
                "x={:.2} n={:>4} whiskers=[{:.0}, {:.0}] box=[{:.0}, {:.0}] median={:.0} outliers={}",
                s.x,
                s.count(),
                stats.whisker_low(),
                stats.whisker_high(),
                stats.first_quartile,
                stats.third_quartile,
                stats.median,
                s.outliers.len()
            )?,
            Some(stats) => writeln!(out, "x={:.2} n=   1 median={:.0}", s.x, stats.median)?,
            None => writeln!(out, "x={:.2} no data", s.x)?,
        }
    }
    Ok(out)
}

fn beeswarm_demo() -> DemoResult {
    let weights = data::car_weights();
    let layout = SwarmSpec::new(20.0).layout(&weights)?;

    let mut out = String::new();
    for (item, offset) in layout.iter() {
        writeln!(out, "{:>6.0} lbs  dy={offset:>5.1}", item.position)?;
    }
    Ok(out)
}

fn diverging_demo() -> DemoResult {
    let mut rows = data::state_populations();
    sort_by_delta(&mut rows, |(_, change)| *change);

    let mut out = String::new();
    for (state, change) in &rows {
        let Some((a0, a1)) = change.extent(ChangeScale::Absolute) else {
            continue;
        };
        let pct = change
            .percent()
            .map_or_else(|| String::from("n/a"), |p| format!("{p:+.2}%"));
        writeln!(out, "{state:<14} [{a0:>11.0}, {a1:>11.0}] {pct}")?;
    }
    Ok(out)
}

fn bar_order_demo() -> DemoResult {
    let mut letters = data::letter_frequencies();
    let mut order = BarOrder::default();

    let mut out = String::new();
    for _ in 0..BarOrder::ALL.len() {
        order.sort(&mut letters);
        let labels: Vec<&str> = letters.iter().map(|l| l.label.as_str()).collect();
        writeln!(out, "{:<22} {}", order.title(), labels.join(" "))?;
        order = order.next();
    }
    Ok(out)
}
