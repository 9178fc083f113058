use crate::models::rating::Rating;

/// Selection state behind the five emoji buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiRatingInput {
    selected: Option<Rating>,
    hovered: Option<Rating>,
    error_visible: bool,
}

impl EmojiRatingInput {
    /// Shows the label for `rating` without committing it.
    pub fn hover(&mut self, rating: Rating) {
        self.hovered = Some(rating);
    }

    /// Pointer left the selector.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn select(&mut self, rating: Rating) {
        self.selected = Some(rating);
        self.hovered = None;
        self.error_visible = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show_error(&mut self) {
        self.error_visible = true;
    }

    /// 0 while nothing is selected.
    pub fn current_rating(&self) -> u8 {
        self.selected.map_or(0, Rating::value)
    }

    pub fn is_selected(&self, rating: Rating) -> bool {
        self.selected == Some(rating)
    }

    pub fn hover_label(&self) -> Option<&'static str> {
        self.hovered.map(Rating::label)
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn test_hover_does_not_commit() {
        let mut input = EmojiRatingInput::default();
        input.hover(rating(4));
        assert_eq!(input.hover_label(), Some("Good"));
        assert_eq!(input.current_rating(), 0);
        input.leave();
        assert_eq!(input.hover_label(), None);
    }

    #[test]
    fn test_select_marks_exactly_one() {
        let mut input = EmojiRatingInput::default();
        input.show_error();
        input.hover(rating(2));
        input.select(rating(2));
        input.select(rating(5));

        assert_eq!(input.current_rating(), 5);
        let marked: Vec<u8> = Rating::ALL
            .into_iter()
            .filter(|r| input.is_selected(*r))
            .map(Rating::value)
            .collect();
        assert_eq!(marked, vec![5]);
        assert!(!input.error_visible());
        assert_eq!(input.hover_label(), None);
    }

    #[test]
    fn test_reset() {
        let mut input = EmojiRatingInput::default();
        input.select(rating(3));
        input.hover(rating(1));
        input.show_error();
        input.reset();
        assert_eq!(input, EmojiRatingInput::default());
        assert_eq!(input.current_rating(), 0);
    }
}
