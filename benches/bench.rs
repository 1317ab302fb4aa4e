use criterion::{Criterion, criterion_group, criterion_main};
use sat_bruteforce::logic::parser::parse;
use sat_bruteforce::logic::solver::BruteForce;
use std::hint::black_box;

/// A satisfiable conjunction whose only model is all-true, i.e. the very
/// last combination in enumeration order. Worst case for the solver.
fn conjunction(n: usize) -> String {
    (0..n)
        .map(|i| format!("x{i}"))
        .collect::<Vec<_>>()
        .join(" ^ ")
}

/// An unsatisfiable formula over `n` literals: a disjunction of all of them
/// conjoined with each one negated. Forces a full sweep of the space.
fn contradiction(n: usize) -> String {
    let any = (0..n)
        .map(|i| format!("x{i}"))
        .collect::<Vec<_>>()
        .join(" v ");
    let none = (0..n)
        .map(|i| format!("!x{i}"))
        .collect::<Vec<_>>()
        .join(" ^ ");
    format!("({any}) ^ {none}")
}

fn bench_parse(c: &mut Criterion) {
    let source = contradiction(16);
    c.bench_function("parse_contradiction_16", |b| {
        b.iter(|| parse(black_box(&source)).unwrap());
    });
}

fn bench_solve_worst_case(c: &mut Criterion) {
    let expr = parse(&conjunction(12)).unwrap();
    c.bench_function("solve_conjunction_12", |b| {
        b.iter(|| {
            let mut solver = BruteForce::new(black_box(expr.clone()));
            solver.solve().unwrap()
        });
    });
}

fn bench_solve_unsat(c: &mut Criterion) {
    let expr = parse(&contradiction(10)).unwrap();
    c.bench_function("solve_contradiction_10", |b| {
        b.iter(|| {
            let mut solver = BruteForce::new(black_box(expr.clone()));
            solver.solve().unwrap()
        });
    });
}

criterion_group!(benches, bench_parse, bench_solve_worst_case, bench_solve_unsat);
criterion_main!(benches);
