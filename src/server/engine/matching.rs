//! Interest and age embeddings with rating-driven drift.
//!
//! Each user is embedded as `[age feature] ++ one-hot(preferences)`, the preference
//! axes ordered by preference name. Ratings pull the rater's vector towards (or away
//! from) the rated user's vector, and candidates are ranked by cosine similarity.

use std::collections::HashMap;

/// Age assumed when the date of birth is unknown.
pub const DEFAULT_AGE: i32 = 25;
/// Age that maps to 0 on the age axis.
pub const AGE_OFFSET: f64 = 15.0;
/// Age range that maps onto 0..=1.
pub const AGE_SPAN: f64 = 30.0;
/// Learning rate of a single rating.
pub const DRIFT_RATE: f64 = 0.1;
/// Number of recommendations returned.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Inputs needed to embed one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFeatures {
    pub user_id: i32,
    pub birth_year: Option<i32>,
    pub preference_ids: Vec<i32>,
}

/// One rating: `rater` scored `target` with `score` in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub rater: i32,
    pub target: i32,
    pub score: i32,
}

/// Normalised age feature in 0..=1.
pub fn age_feature(birth_year: Option<i32>, current_year: i32) -> f64 {
    let age = birth_year
        .map(|year| current_year - year)
        .unwrap_or(DEFAULT_AGE);

    ((f64::from(age) - AGE_OFFSET) / AGE_SPAN).clamp(0.0, 1.0)
}

/// Embeds a user.
///
/// # Arguments
/// - `features` - Birth year and preference IDs of the user
/// - `catalog` - Every preference ID, ordered by preference name
/// - `current_year` - Year used to compute the age
///
/// # Returns
/// - `Vec<f64>` - Vector of length `1 + catalog.len()`
pub fn embed(features: &UserFeatures, catalog: &[i32], current_year: i32) -> Vec<f64> {
    let mut vector = Vec::with_capacity(catalog.len() + 1);
    vector.push(age_feature(features.birth_year, current_year));
    vector.extend(catalog.iter().map(|id| {
        if features.preference_ids.contains(id) {
            1.0
        } else {
            0.0
        }
    }));

    vector
}

/// Embeds every user, keyed by user ID.
pub fn build_vectors(
    users: &[UserFeatures],
    catalog: &[i32],
    current_year: i32,
) -> HashMap<i32, Vec<f64>> {
    users
        .iter()
        .map(|features| (features.user_id, embed(features, catalog, current_year)))
        .collect()
}

/// Applies ratings in order, drifting each rater towards the rated user.
///
/// A score of 3 leaves the vector unchanged; 5 moves it a tenth of the way towards
/// the target and 1 a tenth of the way away. Ratings involving a user without a
/// vector are skipped.
///
/// # Arguments
/// - `vectors` - Current vectors, updated in place
/// - `interactions` - Ratings, oldest first
pub fn apply_interactions(vectors: &mut HashMap<i32, Vec<f64>>, interactions: &[Interaction]) {
    for interaction in interactions {
        let Some(target) = vectors.get(&interaction.target).cloned() else {
            continue;
        };
        let Some(rater) = vectors.get_mut(&interaction.rater) else {
            continue;
        };

        let weight = DRIFT_RATE * ((f64::from(interaction.score) - 3.0) / 2.0);
        for (value, target_value) in rater.iter_mut().zip(target.iter()) {
            *value += weight * (target_value - *value);
        }
    }
}

/// Cosine similarity, 0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Ranks candidates by similarity to a user.
///
/// # Arguments
/// - `vectors` - Vectors of the user and the candidates
/// - `user_id` - The user recommendations are for
/// - `candidates` - Eligible candidate IDs
/// - `limit` - Maximum number of results
///
/// # Returns
/// - `Vec<(i32, f64)>` - `(candidate, score)` by descending score, ties by ID
pub fn rank(
    vectors: &HashMap<i32, Vec<f64>>,
    user_id: i32,
    candidates: &[i32],
    limit: usize,
) -> Vec<(i32, f64)> {
    let Some(user_vector) = vectors.get(&user_id) else {
        return Vec::new();
    };

    let mut scored: Vec<(i32, f64)> = candidates
        .iter()
        .filter_map(|id| {
            vectors
                .get(id)
                .map(|vector| (*id, cosine_similarity(user_vector, vector)))
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(limit);

    scored
}
