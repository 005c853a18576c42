//! End-to-end knapsack selection.
//!
//! Five items, weight limit 3000. The best feasible selection
//! (laptop, headphones, coffee mug, water bottle) is worth 740.

use u_evolve::ga::{
    Evolution, EvolutionConfig, EvolutionRunner, FixedPopulation, Fitness, Genome,
    RandomPopulation, Selection,
};
use u_evolve::random::create_rng;

struct Item {
    name: &'static str,
    value: u32,
    weight: u32,
}

static ITEMS: [Item; 5] = [
    Item {
        name: "Laptop",
        value: 500,
        weight: 2200,
    },
    Item {
        name: "Headphones",
        value: 150,
        weight: 160,
    },
    Item {
        name: "Coffee Mug",
        value: 60,
        weight: 350,
    },
    Item {
        name: "Notepad",
        value: 40,
        weight: 333,
    },
    Item {
        name: "Water Bottle",
        value: 30,
        weight: 192,
    },
];

struct Knapsack {
    items: &'static [Item],
    weight_limit: u32,
}

impl Knapsack {
    fn weight(&self, genome: &Genome) -> u32 {
        genome.selected().map(|i| self.items[i].weight).sum()
    }

    fn names(&self, genome: &Genome) -> Vec<&'static str> {
        genome.selected().map(|i| self.items[i].name).collect()
    }
}

impl Fitness for Knapsack {
    type Score = u32;

    fn evaluate(&self, genome: &Genome) -> u32 {
        let mut weight = 0;
        let mut value = 0;
        for i in genome.selected() {
            weight += self.items[i].weight;
            value += self.items[i].value;
            if weight > self.weight_limit {
                return 0;
            }
        }
        value
    }
}

fn knapsack() -> Knapsack {
    Knapsack {
        items: &ITEMS,
        weight_limit: 3000,
    }
}

fn genome(bits: &[u8]) -> Genome {
    Genome::from_bits(bits).unwrap()
}

#[test]
fn all_but_laptop_scores_280() {
    let k = knapsack();
    let g = genome(&[0, 1, 1, 1, 1]);
    assert_eq!(k.weight(&g), 1035);
    assert_eq!(k.evaluate(&g), 280);
}

#[test]
fn overweight_selection_scores_zero() {
    let k = knapsack();
    let g = genome(&[1, 1, 1, 1, 1]);
    assert_eq!(k.weight(&g), 3235);
    assert_eq!(k.evaluate(&g), 0);
}

#[test]
fn empty_selection_scores_zero() {
    assert_eq!(knapsack().evaluate(&genome(&[0, 0, 0, 0, 0])), 0);
}

#[test]
fn finds_optimal_selection() {
    let evolution = Evolution::new(RandomPopulation::new(10, ITEMS.len()), knapsack());
    let config = EvolutionConfig::new(740)
        .with_generation_limit(1000)
        .with_seed(42);

    let result = EvolutionRunner::run(&evolution, &config).unwrap();

    assert!(result.reached_fitness_limit, "best: {}", result.best_score);
    assert_eq!(result.best_score, 740);
    assert_eq!(
        evolution.fitness().names(result.best()),
        vec!["Laptop", "Headphones", "Coffee Mug", "Water Bottle"]
    );
    assert!(result.generations < 1000);
}

#[test]
fn seeded_population_keeps_known_solution() {
    // The seeded genome is the best of the initial population; elitism must
    // keep a genome at least that good through every generation.
    let initial = vec![
        genome(&[0, 1, 1, 1, 1]),
        genome(&[1, 1, 1, 1, 1]),
        genome(&[0, 0, 0, 0, 1]),
        genome(&[0, 0, 0, 1, 0]),
        genome(&[0, 0, 1, 0, 0]),
        genome(&[1, 1, 1, 1, 1]),
    ];
    let evolution = Evolution::new(FixedPopulation(initial), knapsack());
    let config = EvolutionConfig::new(u32::MAX)
        .with_generation_limit(40)
        .with_seed(3);

    let result = EvolutionRunner::run(&evolution, &config).unwrap();

    assert_eq!(result.fitness_history[0], 280.0);
    assert!(result.best_score >= 280);
    assert_eq!(result.generations, 40);
    assert_eq!(result.population.len(), 6);
}

#[test]
fn every_selection_strategy_improves() {
    for selection in [Selection::Roulette, Selection::Tournament(3), Selection::Rank] {
        let evolution = Evolution::new(RandomPopulation::new(10, ITEMS.len()), knapsack())
            .with_selection(selection);
        let config = EvolutionConfig::new(740)
            .with_generation_limit(300)
            .with_seed(11);

        let result = EvolutionRunner::run(&evolution, &config).unwrap();

        let first = result.fitness_history[0];
        let last = *result.fitness_history.last().unwrap();
        assert!(last >= first, "{selection:?} lost ground: {first} -> {last}");
        assert!(result.best_score > 0, "{selection:?} found nothing feasible");
    }
}

#[test]
fn identical_rngs_give_identical_runs() {
    let evolution = Evolution::new(RandomPopulation::new(10, ITEMS.len()), knapsack());
    let config = EvolutionConfig::new(740).with_generation_limit(100);

    let a = EvolutionRunner::run_with_rng(&evolution, &config, &mut create_rng(2024)).unwrap();
    let b = EvolutionRunner::run_with_rng(&evolution, &config, &mut create_rng(2024)).unwrap();

    assert_eq!(a.population, b.population);
    assert_eq!(a.generations, b.generations);
}
