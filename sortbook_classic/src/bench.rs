//! Runs every sorter over the same randomly generated inputs and reports how
//! many comparisons each one made and how long it took.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::Rng;
use std::{cell::Cell, rc::Rc, time::Instant};

use crate::{
    BubbleSorter, HeapSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, Sorter,
};

const SIZES: &[usize] = &[0, 1, 100, 10_000, 100_000, 1_000_000];

// Largest input the quadratic sorters are still asked to handle.
const QUADRATIC_CUTOFF: usize = 100_000;

// Wraps a value so that every comparison made while sorting ticks a counter
// shared by all elements of one input. Only `value` takes part in the
// comparison itself.
#[derive(Clone)]
struct Measured<T> {
    value: T,
    comparisons: Rc<Cell<usize>>,
}

impl<T> Measured<T> {
    fn new(value: T, comparisons: Rc<Cell<usize>>) -> Self {
        Self { value, comparisons }
    }

    fn tick(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Measured<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.value == other.value
    }
}

impl<T: Eq> Eq for Measured<T> {}

impl<T: PartialOrd> PartialOrd for Measured<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.tick();
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Measured<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tick();
        self.value.cmp(&other.value)
    }
}

fn run_bench<T, S>(sorter: S, values: &mut [Measured<T>], comparisons: &Rc<Cell<usize>>) -> usize
where
    T: Ord + Clone,
    S: Sorter<Measured<T>>,
{
    comparisons.set(0);
    sorter.sort(values);

    comparisons.get()
}

// Each sorter gets its own scratch copy so that every row of the table is
// measured against the same unsorted input.
fn bench_row<S>(
    table: &mut Table,
    name: &str,
    sorter: S,
    values: &[Measured<i32>],
    comparisons: &Rc<Cell<usize>>,
) where
    S: Sorter<Measured<i32>>,
{
    let mut scratch = values.to_vec();
    let now = Instant::now();
    let took = run_bench(sorter, &mut scratch, comparisons);

    table.add_row(row![name, took.to_string(), format!("{:?}", now.elapsed())]);
}

fn skip_row(table: &mut Table, name: &str) {
    table.add_row(row![name, "Skipped".red(), "Quadratic".red()]);
}

pub fn run_benchmarks() {
    let mut random = rand::thread_rng();
    let comparisons = Rc::new(Cell::new(0));

    for &n in SIZES {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(Measured::new(random.gen::<i32>(), comparisons.clone()));
        }

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        let pb = ProgressBar::new(6);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sorters: ({pos}/{len})",
            )
            .unwrap(),
        );

        if n <= QUADRATIC_CUTOFF {
            bench_row(&mut table, "Bubble Sort", BubbleSorter, &values, &comparisons);
        } else {
            skip_row(&mut table, "Bubble Sort");
        }
        pb.inc(1);

        if n <= QUADRATIC_CUTOFF {
            bench_row(
                &mut table,
                "Insertion Sort",
                InsertionSorter,
                &values,
                &comparisons,
            );
        } else {
            skip_row(&mut table, "Insertion Sort");
        }
        pb.inc(1);

        if n <= QUADRATIC_CUTOFF {
            bench_row(
                &mut table,
                "Selection Sort",
                SelectionSorter,
                &values,
                &comparisons,
            );
        } else {
            skip_row(&mut table, "Selection Sort");
        }
        pb.inc(1);

        bench_row(&mut table, "Heap Sort", HeapSorter, &values, &comparisons);
        pb.inc(1);

        bench_row(&mut table, "Merge Sort", MergeSorter, &values, &comparisons);
        pb.inc(1);

        bench_row(&mut table, "Quick Sort", QuickSorter, &values, &comparisons);
        pb.inc(1);

        pb.finish_and_clear();
        table.printstd();
        println!();
    }
}
