use labelstats::Histogram;
use labelstats::ProbabilityMassFunction;

use rand::prelude::*;


#[test]
fn shuffled_partials_match_sequential_accumulation() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let labels = (0..500)
        .map(|_| rng.gen_range(0u32..6))
        .collect::<Vec<_>>();

    let sequential = labels.iter()
        .copied()
        .collect::<Histogram<u32>>();

    // Partition the observations into disjoint chunks, accumulate a
    // partial histogram per chunk, and merge the partials in a random
    // order.
    let mut partials = labels.chunks(61)
        .map(|chunk| chunk.iter().copied().collect::<Histogram<u32>>())
        .collect::<Vec<_>>();
    partials.shuffle(&mut rng);

    let mut merged = Histogram::new();
    for partial in partials {
        merged.merge(partial);
    }

    assert_eq!(merged, sequential);

    let merged_pmf =
        ProbabilityMassFunction::from_histogram(&merged).unwrap();
    let sequential_pmf =
        ProbabilityMassFunction::from_histogram(&sequential).unwrap();
    assert_eq!(merged_pmf.masses(), sequential_pmf.masses());
}


#[test]
fn parallel_accumulation_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(0xacc);
    let labels = (0..10_000)
        .map(|_| rng.gen_range(0u32..20))
        .collect::<Vec<_>>();

    let parallel = Histogram::from_labels_par(&labels[..]);
    let sequential = labels.iter()
        .copied()
        .collect::<Histogram<u32>>();

    assert_eq!(parallel, sequential);
}
