//! Summing ratings per movie within one group.

use data_loader::{DataSet, MovieId, UserId};
use std::collections::HashMap;

/// Movie -> sum of every rating it received from the group
pub type GroupTotals = HashMap<MovieId, i64>;

/// Sum each movie's ratings across `members`.
///
/// Members who rated nothing add nothing, and movies no member rated are
/// absent from the result rather than present with a zero total.
pub fn aggregate_group(data: &DataSet, members: &[UserId]) -> GroupTotals {
    let mut totals = GroupTotals::new();
    for user_id in members {
        let Some(ratings) = data.get_user_ratings(*user_id) else {
            continue;
        };
        for (&movie_id, &rating) in ratings {
            *totals.entry(movie_id).or_insert(0) += i64::from(rating);
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Rating;

    fn rate(data: &mut DataSet, user_id: UserId, movie_id: MovieId, rating: i32) {
        data.insert_rating(Rating { user_id, movie_id, rating });
    }

    #[test]
    fn test_sums_across_members() {
        let mut data = DataSet::new();
        rate(&mut data, 10, 1, 5);
        rate(&mut data, 11, 1, 3);
        rate(&mut data, 11, 2, 4);
        rate(&mut data, 99, 1, 1); // not a member

        let totals = aggregate_group(&data, &[10, 11]);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&1], 8);
        assert_eq!(totals[&2], 4);
    }

    #[test]
    fn test_members_without_ratings_contribute_nothing() {
        let mut data = DataSet::new();
        rate(&mut data, 10, 1, 2);

        let totals = aggregate_group(&data, &[10, 12, 13]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&1], 2);

        assert!(aggregate_group(&data, &[12]).is_empty());
        assert!(aggregate_group(&data, &[]).is_empty());
    }

    #[test]
    fn test_negative_ratings_are_summed() {
        let mut data = DataSet::new();
        rate(&mut data, 10, 1, -1);
        rate(&mut data, 11, 1, 3);
        rate(&mut data, 12, 2, -2);

        let totals = aggregate_group(&data, &[10, 11, 12]);
        assert_eq!(totals[&1], 2);
        assert_eq!(totals[&2], -2);
    }
}
