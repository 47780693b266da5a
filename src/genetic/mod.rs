//! A generational genetic algorithm and the N-queens demo it is usually
//! pointed at.

mod algorithm;
pub mod n_queens;

pub use algorithm::{
    choose_parents, genetic_algorithm, mutate, reproduce, weight_by, GeneticConfig, GeneticError,
};
