// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory sample datasets for the demo sections.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vizlab_transforms::{Change, LabeledValue, WeightedItem};

/// Products of two uniforms: a skewed distribution on `[0, 1)`.
///
/// Seeded per dataset so reports are reproducible.
pub(crate) fn skewed_values(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n)
        .map(|_| rng.random::<f64>() * rng.random::<f64>())
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CaratPrice {
    pub(crate) carat: f64,
    pub(crate) price: f64,
}

/// Diamond-like carat/price pairs: price grows with carat, with heavy noise and a few
/// large stones.
pub(crate) fn carat_prices(n: usize) -> Vec<CaratPrice> {
    let mut rng = StdRng::seed_from_u64(0xd1a_0d5);
    let mut rows: Vec<CaratPrice> = (0..n)
        .map(|_| {
            let carat = 0.2 + rng.random::<f64>() * rng.random::<f64>() * 3.0;
            let noise = rng.random_range(-1500.0..1500.0) * carat;
            CaratPrice {
                carat,
                price: (carat * carat * 2500.0 + 300.0 + noise).max(326.0),
            }
        })
        .collect();
    rows.extend([
        CaratPrice {
            carat: 4.5,
            price: 18_531.0,
        },
        CaratPrice {
            carat: 5.01,
            price: 18_018.0,
        },
    ]);
    rows
}

/// Car weights in pounds, sorted ascending as the beeswarm expects.
pub(crate) fn car_weights() -> Vec<WeightedItem> {
    const WEIGHTS: [f64; 24] = [
        1613.0, 1649.0, 1755.0, 1795.0, 1835.0, 1845.0, 1850.0, 1937.0, 1955.0, 1965.0, 1985.0,
        2045.0, 2130.0, 2155.0, 2226.0, 2264.0, 2300.0, 2372.0, 2430.0, 2670.0, 3139.0, 3504.0,
        4312.0, 4997.0,
    ];
    let mut items: Vec<WeightedItem> = WEIGHTS
        .iter()
        .enumerate()
        .map(|(i, &w)| WeightedItem::new(i as u64, w))
        .collect();
    vizlab_transforms::sort_by_position(&mut items);
    items
}

/// State populations in 2010 and 2019.
pub(crate) fn state_populations() -> Vec<(&'static str, Change)> {
    vec![
        ("Texas", Change::new(25_145_561.0, 28_995_881.0)),
        ("Florida", Change::new(18_801_310.0, 21_477_737.0)),
        ("Illinois", Change::new(12_830_632.0, 12_671_821.0)),
        ("West Virginia", Change::new(1_852_994.0, 1_792_147.0)),
        ("Utah", Change::new(2_763_885.0, 3_205_958.0)),
        ("Vermont", Change::new(625_741.0, 623_989.0)),
    ]
}

/// Relative frequency of letters in English text.
pub(crate) fn letter_frequencies() -> Vec<LabeledValue> {
    [
        ("A", 0.08167),
        ("B", 0.01492),
        ("C", 0.02782),
        ("D", 0.04253),
        ("E", 0.12702),
        ("F", 0.02288),
        ("G", 0.02015),
        ("H", 0.06094),
        ("I", 0.06966),
    ]
    .into_iter()
    .map(|(label, value)| LabeledValue::new(label, value))
    .collect()
}
