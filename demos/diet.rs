//! Diet optimization demo.
//!
//! Chooses servings (0–10) of five foods so that the diet provides at least
//! 2000 kcal and 50 g protein at minimum cost. Infeasible offspring are
//! repaired by adding rice, the cheapest food.
//!
//! Run with `RUST_LOG=info cargo run --example diet` to see progress.

use soft_ga::error::GaError;
use soft_ga::ga::{
    Chromosome, CrossoverMethod, GaConfig, GaEngine, Individual, IntegerChromosome,
    IntegerDomain, Replacement, Selection,
};

struct Food {
    name: &'static str,
    cost: f64,
    calories: f64,
    protein: f64,
}

const FOODS: [Food; 5] = [
    Food { name: "Chicken", cost: 2.5, calories: 165.0, protein: 31.0 },
    Food { name: "Rice", cost: 0.5, calories: 130.0, protein: 2.7 },
    Food { name: "Milk", cost: 0.8, calories: 103.0, protein: 8.0 },
    Food { name: "Eggs", cost: 1.2, calories: 155.0, protein: 13.0 },
    Food { name: "Broccoli", cost: 0.7, calories: 55.0, protein: 5.0 },
];

const RICE: usize = 1;
const MIN_CALORIES: f64 = 2000.0;
const MIN_PROTEIN: f64 = 50.0;

#[derive(Debug, Default)]
struct Totals {
    cost: f64,
    calories: f64,
    protein: f64,
}

impl Totals {
    fn of(genes: &[i64]) -> Self {
        genes.iter().zip(&FOODS).fold(Totals::default(), |t, (&n, f)| {
            let n = n as f64;
            Totals {
                cost: t.cost + n * f.cost,
                calories: t.calories + n * f.calories,
                protein: t.protein + n * f.protein,
            }
        })
    }

    fn feasible(&self) -> bool {
        self.calories >= MIN_CALORIES && self.protein >= MIN_PROTEIN
    }
}

fn fitness(c: &IntegerChromosome) -> f64 {
    let t = Totals::of(c.genes());
    if t.feasible() {
        1000.0 - t.cost
    } else {
        1000.0 - t.cost - 1000.0
    }
}

fn add_rice(mut c: IntegerChromosome) -> IntegerChromosome {
    let max = c.domain().max();
    while !Totals::of(c.genes()).feasible() {
        match c.gene(RICE) {
            Some(rice) if rice < max => {
                if c.set_gene(RICE, rice + 1).is_err() {
                    break;
                }
            }
            _ => break,
        }
    }
    c
}

fn main() -> Result<(), GaError> {
    env_logger::init();

    let config = GaConfig::default()
        .with_population_size(50)
        .with_chromosome_length(FOODS.len())
        .with_generations(30)
        .with_crossover_rate(0.8)
        .with_mutation_rate(0.1)
        .with_selection(Selection::RouletteWheel)
        .with_crossover(CrossoverMethod::OnePoint)
        .with_replacement(Replacement::Elitism);

    let mut engine = GaEngine::builder(config, IntegerDomain::new(0, 10)?)
        .fitness(fitness)
        .infeasibility_handler(add_rice)
        .build()?;

    let result = engine.run()?;
    let Some(best) = result.best else {
        println!("no generations were run");
        return Ok(());
    };

    println!("\n=== Results ===");
    println!("Best Fitness: {:.2}", best.fitness());
    println!("Best Solution: {best}");
    for (food, servings) in FOODS.iter().zip(best.genes()) {
        println!("{}: {} servings", food.name, servings);
    }
    let totals = Totals::of(best.genes());
    println!("Total Cost: ${:.2}", totals.cost);
    println!("Total Calories: {:.1}", totals.calories);
    println!("Total Protein: {:.1}g", totals.protein);
    Ok(())
}
