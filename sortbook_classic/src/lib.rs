//! Reference implementations of six classic comparison-based sorting
//! algorithms: bubble, insertion, heap, merge, quick and selection sort.
//!
//! These are the textbook forms, kept close to how they are written on a
//! whiteboard rather than how a production sort is written. Every sorter
//! works on any element type with a total order.
//!
//! # Example
//!
//! ```
//! use sortbook_classic::BubbleSorter;
//! use sortbook_classic::Sorter;
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

pub mod bench;
mod sorters;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::{heapify, HeapSorter};
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::{quicksort, QuickSorter};
pub use sorters::selection_sorter::SelectionSorter;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// An example Clap Argument builder. Run `sortbook classic` to see what
/// options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Compare every sorter over growing input sizes.
    Bench,
    /// Sort the given integers with one algorithm and print the result.
    Demo {
        /// Which algorithm to run.
        #[arg(long, value_enum, default_value = "quick")]
        algorithm: Algorithm,

        /// The values to sort.
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Bubble,
    Insertion,
    Heap,
    Merge,
    Quick,
    Selection,
}

impl Algorithm {
    fn sorter(self) -> Box<dyn Sorter<i64>> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSorter),
            Algorithm::Insertion => Box::new(InsertionSorter),
            Algorithm::Heap => Box::new(HeapSorter),
            Algorithm::Merge => Box::new(MergeSorter),
            Algorithm::Quick => Box::new(QuickSorter),
            Algorithm::Selection => Box::new(SelectionSorter),
        }
    }
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Bench => {
                bench::run_benchmarks();
                Ok(())
            }
            SortCommands::Demo { algorithm, values } => {
                let mut values = values
                    .iter()
                    .map(|value| {
                        value
                            .parse::<i64>()
                            .with_context(|| format!("`{value}` is not an integer"))
                    })
                    .collect::<anyhow::Result<Vec<i64>>>()?;

                println!("{} {:?}", "Unsorted ->".bold().blue(), values);
                algorithm.sorter().sort(&mut values);
                println!("{}   {:?}", "Sorted ->".bold().green(), values);

                Ok(())
            }
        }
    }
}
