// Sanity checks on the fixed digit dataset.

use glyphnet::dataset::{digits, one_hot, DIGIT_SIZE, INPUT_SIZE, NUM_CLASSES};

#[test]
fn dataset_has_one_sample_per_class() {
    let samples = digits();
    assert_eq!(samples.len(), NUM_CLASSES);

    for (class, sample) in samples.iter().enumerate() {
        assert_eq!(sample.input.len(), INPUT_SIZE);
        assert_eq!(sample.target.len(), NUM_CLASSES);
        assert!(sample.input.iter().all(|&p| p == 0.0 || p == 1.0));
        assert_eq!(sample.target, one_hot(class));
        assert!(
            sample.input.iter().any(|&p| p == 1.0),
            "digit {} rasterized to an empty bitmap",
            class
        );
    }
}

#[test]
fn bitmaps_are_pairwise_distinct() {
    let samples = digits();
    for i in 0..samples.len() {
        for j in (i + 1)..samples.len() {
            assert_ne!(
                samples[i].input, samples[j].input,
                "digits {} and {} share a bitmap",
                i, j
            );
        }
    }
}

#[test]
fn patterns_are_centered_in_the_grid() {
    // No ink in the first or last row/column: every pattern is narrower and
    // shorter than the grid and gets centered by the rasterizer.
    for sample in digits() {
        for k in 0..DIGIT_SIZE {
            assert_eq!(sample.input[k], 0.0); // first row
            assert_eq!(sample.input[(DIGIT_SIZE - 1) * DIGIT_SIZE + k], 0.0); // last row
            assert_eq!(sample.input[k * DIGIT_SIZE], 0.0); // first column
            assert_eq!(sample.input[k * DIGIT_SIZE + DIGIT_SIZE - 1], 0.0); // last column
        }
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn one_hot_rejects_out_of_range_classes() {
    one_hot(NUM_CLASSES);
}
