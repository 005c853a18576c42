//! Knapsack selection demo.
//!
//! Picks the most valuable subset of five items that fits in 3000 g.
//!
//! ```text
//! RUST_LOG=debug cargo run --example knapsack
//! ```

use u_evolve::ga::{Evolution, EvolutionConfig, EvolutionRunner, Fitness, Genome, RandomPopulation};

struct Thing {
    name: &'static str,
    value: u32,
    weight: u32,
}

static THINGS: [Thing; 5] = [
    Thing {
        name: "Laptop",
        value: 500,
        weight: 2200,
    },
    Thing {
        name: "Headphones",
        value: 150,
        weight: 160,
    },
    Thing {
        name: "Coffee Mug",
        value: 60,
        weight: 350,
    },
    Thing {
        name: "Notepad",
        value: 40,
        weight: 333,
    },
    Thing {
        name: "Water Bottle",
        value: 30,
        weight: 192,
    },
];

struct Knapsack {
    things: &'static [Thing],
    weight_limit: u32,
}

impl Fitness for Knapsack {
    type Score = u32;

    fn evaluate(&self, genome: &Genome) -> u32 {
        let (weight, value) = genome
            .selected()
            .map(|i| &self.things[i])
            .fold((0, 0), |(w, v), t| (w + t.weight, v + t.value));
        if weight > self.weight_limit {
            0
        } else {
            value
        }
    }
}

fn main() {
    env_logger::init();

    let knapsack = Knapsack {
        things: &THINGS,
        weight_limit: 3000,
    };
    let evolution = Evolution::new(RandomPopulation::new(10, THINGS.len()), knapsack);
    let config = EvolutionConfig::new(740).with_generation_limit(100);

    match EvolutionRunner::run(&evolution, &config) {
        Ok(result) => {
            let best: Vec<&str> = result
                .best()
                .selected()
                .map(|i| THINGS[i].name)
                .collect();
            println!("number of generations: {}", result.generations);
            println!("best solution: {best:?} (value {})", result.best_score);
        }
        Err(e) => {
            eprintln!("evolution failed: {e}");
            std::process::exit(1);
        }
    }
}
