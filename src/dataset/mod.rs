//! Fixed training data: ten hand-drawn digit bitmaps, one per class.
//!
//! Each digit is described as ASCII art, rasterized into a 20×20 grayscale
//! grid (pattern centered, filled cells = 1.0), and paired with a one-hot
//! target. The same ten samples serve as both the training and the
//! evaluation set: this is a fixed-pattern memorization demo, not a
//! generalization benchmark.

/// Side length of the square bitmap each sample is rasterized into.
pub const DIGIT_SIZE: usize = 20;
/// Flattened input length fed to the first layer.
pub const INPUT_SIZE: usize = DIGIT_SIZE * DIGIT_SIZE;
/// Number of digit classes.
pub const NUM_CLASSES: usize = 10;

/// One labeled training sample.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Row-major flattened bitmap, length `INPUT_SIZE`, values 0.0 or 1.0.
    pub input: Vec<f64>,
    /// One-hot vector of length `NUM_CLASSES`.
    pub target: Vec<f64>,
}

const PATTERNS: [&[&str]; NUM_CLASSES] = [
    // 0
    &[
        " 1111111111 ",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        " 1111111111 ",
    ],
    // 1
    &[
        "     11     ",
        "    111     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "     11     ",
        "   111111   ",
    ],
    // 2
    &[
        " 1111111111 ",
        "11        11",
        "         11 ",
        "        11  ",
        "       11   ",
        "      11    ",
        "     11     ",
        "    11      ",
        "   11       ",
        "  11        ",
        " 11111111111",
    ],
    // 3
    &[
        " 1111111111 ",
        "11        11",
        "         11 ",
        "         11 ",
        " 1111111111 ",
        "         11 ",
        "         11 ",
        "         11 ",
        "11        11",
        " 1111111111 ",
    ],
    // 4
    &[
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        "111111111111",
        "         11 ",
        "         11 ",
        "         11 ",
        "         11 ",
        "         11 ",
    ],
    // 5
    &[
        "111111111111",
        "11          ",
        "11          ",
        "11          ",
        "1111111111  ",
        "         11 ",
        "         11 ",
        "         11 ",
        "11        11",
        " 1111111111 ",
    ],
    // 6
    &[
        " 1111111111 ",
        "11        11",
        "11          ",
        "11          ",
        "1111111111  ",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        " 1111111111 ",
    ],
    // 7
    &[
        "111111111111",
        "         11 ",
        "        11  ",
        "       11   ",
        "      11    ",
        "     11     ",
        "    11      ",
        "   11       ",
        "  11        ",
        " 11         ",
    ],
    // 8
    &[
        " 1111111111 ",
        "11        11",
        "11        11",
        "11        11",
        " 1111111111 ",
        "11        11",
        "11        11",
        "11        11",
        "11        11",
        " 1111111111 ",
    ],
    // 9
    &[
        " 1111111111 ",
        "11        11",
        "11        11",
        "11        11",
        " 11111111111",
        "         11 ",
        "         11 ",
        "         11 ",
        "11        11",
        " 1111111111 ",
    ],
];

/// Rasterizes an ASCII pattern into the center of a `DIGIT_SIZE²` grid.
/// Cells marked `'1'` or `'#'` become 1.0, everything else stays 0.0.
fn rasterize(pattern: &[&str]) -> Vec<f64> {
    let mut pixels = vec![0.0; INPUT_SIZE];
    let offset_y = (DIGIT_SIZE - pattern.len()) / 2;
    let offset_x = (DIGIT_SIZE - pattern[0].len()) / 2;
    for (i, row) in pattern.iter().enumerate() {
        for (j, cell) in row.chars().enumerate() {
            if cell == '1' || cell == '#' {
                let y = offset_y + i;
                let x = offset_x + j;
                pixels[y * DIGIT_SIZE + x] = 1.0;
            }
        }
    }
    pixels
}

/// One-hot vector of length `NUM_CLASSES` with a 1.0 at `class`.
pub fn one_hot(class: usize) -> Vec<f64> {
    assert!(class < NUM_CLASSES, "class {} out of range", class);
    let mut target = vec![0.0; NUM_CLASSES];
    target[class] = 1.0;
    target
}

/// The full labeled dataset, ordered by class: sample `i` is the bitmap of
/// digit `i` with a one-hot target at index `i`.
pub fn digits() -> Vec<Sample> {
    PATTERNS
        .iter()
        .enumerate()
        .map(|(class, pattern)| Sample {
            input: rasterize(pattern),
            target: one_hot(class),
        })
        .collect()
}
