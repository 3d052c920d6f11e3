//! Star Rating
//!
//! Fixed five-glyph rating with half-star granularity.

use std::iter;

/// Number of glyphs in every rating
pub const MAX_STARS: u8 = 5;

/// One glyph of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Font Awesome classes for this glyph
    pub fn icon_class(self) -> &'static str {
        match self {
            Star::Full => "fas fa-star",
            Star::Half => "fas fa-star-half-alt",
            Star::Empty => "far fa-star",
        }
    }
}

/// Glyph counts for a numeric rating. `full + half + empty` is always 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Out-of-range ratings are clamped to 0..=5, non-finite ones count as 0.
    pub fn new(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Glyphs in display order: full, then half, then empty
    pub fn stars(&self) -> impl Iterator<Item = Star> {
        iter::repeat(Star::Full)
            .take(usize::from(self.full))
            .chain(self.half.then_some(Star::Half))
            .chain(iter::repeat(Star::Empty).take(usize::from(self.empty)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_rating_gets_half_star() {
        let rating = StarRating::new(3.7);
        assert_eq!(rating, StarRating { full: 3, half: true, empty: 1 });
    }

    #[test]
    fn test_zero_rating_is_all_empty() {
        let rating = StarRating::new(0.0);
        assert_eq!(rating, StarRating { full: 0, half: false, empty: 5 });
    }

    #[test]
    fn test_fraction_below_half_rounds_down() {
        assert_eq!(StarRating::new(2.4), StarRating { full: 2, half: false, empty: 3 });
        assert_eq!(StarRating::new(4.5), StarRating { full: 4, half: true, empty: 0 });
    }

    #[test]
    fn test_out_of_range_ratings_are_clamped() {
        assert_eq!(StarRating::new(5.0), StarRating { full: 5, half: false, empty: 0 });
        assert_eq!(StarRating::new(7.2), StarRating { full: 5, half: false, empty: 0 });
        assert_eq!(StarRating::new(-1.0), StarRating { full: 0, half: false, empty: 5 });
        assert_eq!(StarRating::new(f64::NAN), StarRating { full: 0, half: false, empty: 5 });
    }

    #[test]
    fn test_stars_sequence() {
        let stars: Vec<Star> = StarRating::new(3.7).stars().collect();
        assert_eq!(
            stars,
            vec![Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
        assert_eq!(stars[3].icon_class(), "fas fa-star-half-alt");
    }

    #[test]
    fn test_always_five_glyphs() {
        for tenths in 0..=50 {
            let rating = StarRating::new(f64::from(tenths) / 10.0);
            assert_eq!(rating.stars().count(), usize::from(MAX_STARS), "rating {}", tenths);
        }
    }
}
