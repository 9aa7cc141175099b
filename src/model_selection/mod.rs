//! Dataset balancing for training and evaluation splits.
//!
//! Scraped review corpora skew heavily toward one rating band, and a
//! frequency-based classifier trained on the raw counts inherits that skew.
//! [`undersample`] levels the classes by keeping a random minority-sized
//! subset of each.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::classification::N_CLASSES;
use crate::error::{Result, SentirError};

/// Balance classes by undersampling to the minority class size.
///
/// Shuffles the full dataset once, keeps the first `min_count` examples of
/// each class in that shuffled order (classes visited in ascending label
/// order), then shuffles the balanced selection again before returning it.
/// Training and testing splits are balanced independently, each with its own
/// call.
///
/// # Arguments
///
/// * `x` - Documents (any cloneable payload)
/// * `labels` - Parallel class labels, `0` or `1`
/// * `random_state` - Optional random seed for reproducibility
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty, if a
/// label falls outside the binary classes, or if either class has no
/// examples.
///
/// # Examples
///
/// ```
/// use sentir::model_selection::undersample;
///
/// let docs = vec!["loved it", "great fun", "solid", "waste of time"];
/// let labels = vec![1, 1, 1, 0];
///
/// let (balanced, balanced_labels) =
///     undersample(&docs, &labels, Some(42)).expect("both classes present");
///
/// assert_eq!(balanced.len(), 2);
/// assert_eq!(balanced_labels.iter().filter(|&&c| c == 0).count(), 1);
/// assert_eq!(balanced_labels.iter().filter(|&&c| c == 1).count(), 1);
/// ```
pub fn undersample<T: Clone>(
    x: &[T],
    labels: &[usize],
    random_state: Option<u64>,
) -> Result<(Vec<T>, Vec<usize>)> {
    let counts = validate_sample_inputs(x.len(), labels)?;

    if let Some(seed) = random_state {
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(undersample_with(x, labels, counts, &mut rng))
    } else {
        let mut rng = rand::thread_rng();
        Ok(undersample_with(x, labels, counts, &mut rng))
    }
}

/// Selection core; `counts` must come from [`validate_sample_inputs`].
fn undersample_with<T: Clone, R: Rng>(
    x: &[T],
    labels: &[usize],
    counts: [usize; N_CLASSES],
    rng: &mut R,
) -> (Vec<T>, Vec<usize>) {
    let min_count = counts.iter().copied().min().unwrap_or(0);

    let mut order: Vec<usize> = (0..x.len()).collect();
    order.shuffle(rng);

    let mut selected = Vec::with_capacity(min_count * N_CLASSES);
    for class in 0..N_CLASSES {
        selected.extend(
            order
                .iter()
                .copied()
                .filter(|&i| labels[i] == class)
                .take(min_count),
        );
    }
    selected.shuffle(rng);

    let balanced_x = selected.iter().map(|&i| x[i].clone()).collect();
    let balanced_labels = selected.iter().map(|&i| labels[i]).collect();
    (balanced_x, balanced_labels)
}

/// Validates parallel inputs and returns the per-class example counts.
fn validate_sample_inputs(n_samples: usize, labels: &[usize]) -> Result<[usize; N_CLASSES]> {
    if n_samples != labels.len() {
        return Err(SentirError::dimension_mismatch(
            "documents",
            n_samples,
            labels.len(),
        ));
    }
    if labels.is_empty() {
        return Err(SentirError::empty_input("documents"));
    }

    let mut counts = [0usize; N_CLASSES];
    for &label in labels {
        if label >= N_CLASSES {
            return Err(format!("label {label} is outside the binary classes 0 and 1").into());
        }
        counts[label] += 1;
    }
    for (class, &count) in counts.iter().enumerate() {
        if count == 0 {
            return Err(SentirError::EmptyClass { class });
        }
    }

    Ok(counts)
}
