// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo datasets.
//!
//! Small inline tables for the bar and pie demos, TSV documents loaded
//! through `statviz_data` for the line and scatter demos, and a seeded
//! gaussian sample for the histogram.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statviz_charts::TreeNode;
use statviz_core::{Dataset, Record};
use statviz_data::{TsvSchema, read_tsv_str};

/// Fruit deliveries per season, one numeric column per year.
pub(crate) fn fruit_deliveries() -> Dataset {
    let rows = [
        ("apples", 3840.0, 4300.0, 3520.0),
        ("bananas", 1920.0, 2140.0, 2290.0),
        ("cherries", 960.0, 770.0, 1120.0),
        ("dates", 400.0, 520.0, 480.0),
    ];
    let mut dataset = Dataset::new();
    for (fruit, y2022, y2023, y2024) in rows {
        dataset.push(
            Record::new()
                .with("fruit", fruit)
                .with("2022", y2022)
                .with("2023", y2023)
                .with("2024", y2024),
        );
    }
    dataset
}

/// Smartphone market share by brand, with unit counts for tooltips.
pub(crate) fn smartphone_share() -> Dataset {
    let rows = [
        ("apple", 27.2, "52.2M units"),
        ("samsung", 23.5, "45.1M units"),
        ("xiaomi", 12.4, "23.8M units"),
        ("oppo", 8.7, "16.7M units"),
        ("vivo", 8.1, "15.5M units"),
        ("others", 20.1, "38.6M units"),
    ];
    let mut dataset = Dataset::new();
    for (brand, share, units) in rows {
        dataset.push(
            Record::new()
                .with("brand", brand)
                .with("share", share)
                .with("units", units),
        );
    }
    dataset
}

const WEEKLY_HOURS_TSV: &str = "\
week\thours\tlabel
2024-01-01\t37.5\tWeek of Jan 1
2024-01-08\t41.0\tWeek of Jan 8
2024-01-15\t39.25\tWeek of Jan 15
2024-01-22\t44.0\tWeek of Jan 22
2024-01-29\t36.75\tWeek of Jan 29
2024-02-05\t40.5\tWeek of Feb 5
2024-02-12\t43.25\tWeek of Feb 12
2024-02-19\t38.0\tWeek of Feb 19
2024-02-26\t35.5\tWeek of Feb 26
2024-03-04\t42.0\tWeek of Mar 4
2024-03-11\t40.75\tWeek of Mar 11
2024-03-18\t37.25\tWeek of Mar 18
";

/// Hours worked per week over one quarter.
pub(crate) fn weekly_hours() -> Dataset {
    let schema = TsvSchema::new().number("hours").date("week", "%Y-%m-%d");
    read_tsv_str(WEEKLY_HOURS_TSV, &schema).expect("embedded weekly hours TSV is well formed")
}

const NATIONS_TSV: &str = "\
country\tregion\tincome\tlifespan\tpopulation
Nigeria\tAfrica\t5139\t62.6\t213401323
Egypt\tAfrica\t11566\t70.2\t109262178
South Africa\tAfrica\t13010\t62.3\t59392255
Brazil\tAmericas\t14370\t72.8\t214326223
United States\tAmericas\t63670\t77.2\t331893745
Mexico\tAmericas\t19086\t70.2\t126705138
China\tAsia\t17504\t78.2\t1412360000
India\tAsia\t6590\t67.2\t1407563842
Japan\tAsia\t42197\t84.8\t125681593
Indonesia\tAsia\t11858\t67.6\t273753191
Germany\tEurope\t53180\t80.9\t83196078
Poland\tEurope\t34265\t76.5\t37747124
Norway\tEurope\t65662\t83.2\t5408320
Australia\tOceania\t49775\t83.3\t25688079
";

/// Income, lifespan and population per country.
pub(crate) fn nations() -> Dataset {
    let schema = TsvSchema::new()
        .number("income")
        .number("lifespan")
        .number("population");
    read_tsv_str(NATIONS_TSV, &schema).expect("embedded nations TSV is well formed")
}

/// A seeded gaussian sample centered on `mean` with the given deviation.
pub(crate) fn gaussian_sample(n: usize, mean: f64, deviation: f64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);
    let mut dataset = Dataset::new();
    for _ in 0..n {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        let z = (-2.0 * u1.max(f64::MIN_POSITIVE).ln()).sqrt()
            * (std::f64::consts::TAU * u2).cos();
        dataset.push(Record::new().with("value", mean + deviation * z));
    }
    dataset
}

/// Decision tree for buying a car.
pub(crate) fn car_decisions() -> TreeNode {
    TreeNode::new("Car")
        .with_child(
            TreeNode::new("New")
                .with_child(
                    TreeNode::new("Electric")
                        .with_child(TreeNode::new("Hatchback"))
                        .with_child(TreeNode::new("SUV")),
                )
                .with_child(
                    TreeNode::new("Petrol")
                        .with_child(TreeNode::new("Sedan"))
                        .with_child(TreeNode::new("Estate")),
                ),
        )
        .with_child(
            TreeNode::new("Used")
                .with_child(
                    TreeNode::new("Dealer")
                        .with_child(TreeNode::new("Certified"))
                        .with_child(TreeNode::new("As-is")),
                )
                .with_child(TreeNode::new("Private sale")),
        )
}

/// Decision tree for ordering dinner.
pub(crate) fn dinner_decisions() -> TreeNode {
    TreeNode::new("Dinner")
        .with_child(
            TreeNode::new("Cook")
                .with_child(TreeNode::new("Pasta"))
                .with_child(TreeNode::new("Stir-fry")),
        )
        .with_child(
            TreeNode::new("Order")
                .with_child(
                    TreeNode::new("Pizza")
                        .with_child(TreeNode::new("Margherita"))
                        .with_child(TreeNode::new("Quattro stagioni")),
                )
                .with_child(TreeNode::new("Sushi")),
        )
}
